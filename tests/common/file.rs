use derive_new::new;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Eq, PartialEq, new)]
pub struct FileSpec {
    pub path: PathBuf,
    pub content: String,
}

pub fn write_file(file_spec: FileSpec) {
    // make sure the parent directory exists
    if let Some(parent) = file_spec.path.parent() {
        std::fs::create_dir_all(parent)
            .unwrap_or_else(|e| panic!("Failed to create directory {:?}: {}", parent, e));
    }

    std::fs::write(&file_spec.path, &file_spec.content)
        .unwrap_or_else(|e| panic!("Failed to write file {:?}: {}", file_spec.path, e));
}

pub fn write_lines(dir: &Path, name: &str, lines: &[&str]) -> FileSpec {
    let file_spec = FileSpec::new(dir.join(name), lines.join("\n"));
    write_file(file_spec.clone());
    file_spec
}

/// Generates lines of random words, each prefixed with its index so that no
/// two lines are alike.
pub fn generate_lines(count: usize) -> Vec<String> {
    use fake::{Fake, faker::lorem::en::Words};

    (0..count)
        .map(|index| {
            let words = Words(3..6).fake::<Vec<String>>().join(" ");
            format!("{index}: {words}")
        })
        .collect()
}

pub fn read_file(path: &Path) -> String {
    std::fs::read_to_string(path)
        .unwrap_or_else(|e| panic!("Failed to read file {:?}: {}", path, e))
}
