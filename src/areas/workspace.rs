use anyhow::Context;
use std::path::{Path, PathBuf};

/// Directory the input paths are resolved against.
#[derive(Debug)]
pub struct Workspace {
    path: Box<Path>,
}

impl Workspace {
    pub fn new(path: Box<Path>) -> Self {
        Workspace { path }
    }

    pub fn resolve(&self, file_path: &Path) -> PathBuf {
        self.path.join(file_path)
    }

    pub fn exists(&self, file_path: &Path) -> bool {
        self.resolve(file_path).is_file()
    }

    pub fn read_file(&self, file_path: &Path) -> anyhow::Result<String> {
        let file_path = self.resolve(file_path);

        std::fs::read_to_string(&file_path)
            .with_context(|| format!("Cannot read file {}", file_path.display()))
    }

    /// Reads a file as diff input: every line trimmed, blank lines dropped.
    pub fn read_lines(&self, file_path: &Path) -> anyhow::Result<Vec<String>> {
        if !self.exists(file_path) {
            anyhow::bail!("File at \"{}\" not found.", file_path.display());
        }

        Ok(normalize_lines(&self.read_file(file_path)?))
    }
}

pub fn normalize_lines(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect()
}
