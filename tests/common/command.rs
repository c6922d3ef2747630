use crate::common::file::write_lines;
use assert_cmd::Command;
use assert_fs::TempDir;
use rstest::fixture;
use std::path::Path;

#[fixture]
pub fn texts_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp dir")
}

/// Old and new texts from the reworded example: one insertion, one change,
/// one deletion around two unchanged lines.
#[fixture]
pub fn reworded_texts_dir(texts_dir: TempDir) -> TempDir {
    write_lines(
        texts_dir.path(),
        "old.txt",
        &[
            "some unchanged line",
            "",
            "   this line will be changed",
            "qwerty",
            "some old line",
        ],
    );
    write_lines(
        texts_dir.path(),
        "new.txt",
        &[
            "some new line",
            "some unchanged line",
            "this line was changed   ",
            "",
            "qwerty",
        ],
    );

    texts_dir
}

pub fn run_sidediff_command(dir: &Path, args: &[&str]) -> Command {
    let mut cmd = Command::cargo_bin("sidediff").expect("Failed to find sidediff binary");
    cmd.envs(vec![("NO_PAGER", "1"), ("NO_COLOR", "1")]);
    cmd.env_remove("CLICOLOR_FORCE");
    cmd.current_dir(dir);
    for arg in args {
        cmd.arg(arg);
    }
    cmd
}
