use crate::areas::workspace::Workspace;
use crate::artifacts::diff::diff_algorithm::diff_lines;
use crate::artifacts::diff::line_diff::Alignment;
use std::cell::{OnceCell, RefCell, RefMut};
use std::path::{Path, PathBuf};

/// Compares an old and a new text file.
///
/// The diff is computed on first use and cached, so several renderings of the
/// same comparison read each file once.
pub struct Comparator {
    old_path: Box<Path>,
    new_path: Box<Path>,
    writer: RefCell<Box<dyn std::io::Write>>,
    workspace: Workspace,
    alignment: OnceCell<Alignment>,
}

impl Comparator {
    /// Both paths are resolved against `root` and must name existing files.
    pub fn new(
        root: &Path,
        old_path: &str,
        new_path: &str,
        writer: Box<dyn std::io::Write>,
    ) -> anyhow::Result<Self> {
        let workspace = Workspace::new(root.to_path_buf().into_boxed_path());

        for path in [old_path, new_path] {
            if !workspace.exists(Path::new(path)) {
                anyhow::bail!("File at \"{path}\" not found.");
            }
        }

        Ok(Comparator {
            old_path: Path::new(old_path).into(),
            new_path: Path::new(new_path).into(),
            writer: RefCell::new(writer),
            workspace,
            alignment: OnceCell::new(),
        })
    }

    pub fn old_path(&self) -> &Path {
        &self.old_path
    }

    pub fn new_path(&self) -> &Path {
        &self.new_path
    }

    pub fn writer(&'_ self) -> RefMut<'_, Box<dyn std::io::Write>> {
        self.writer.borrow_mut()
    }

    /// Resolves a path the same way the inputs are resolved.
    pub fn resolve(&self, path: &Path) -> PathBuf {
        self.workspace.resolve(path)
    }

    pub fn alignment(&self) -> anyhow::Result<&Alignment> {
        if let Some(alignment) = self.alignment.get() {
            return Ok(alignment);
        }

        let old_lines = self.workspace.read_lines(&self.old_path)?;
        let new_lines = self.workspace.read_lines(&self.new_path)?;
        let alignment = diff_lines(&old_lines, &new_lines)?;

        Ok(self.alignment.get_or_init(|| alignment))
    }
}
