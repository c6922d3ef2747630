use crate::areas::comparator::Comparator;
use crate::artifacts::diff::rows::assemble_rows;
use crate::artifacts::render::terminal::{RenderOptions, render_rows};
use colored::Colorize;
use std::io::Write;

impl Comparator {
    /// Prints the comparison as two columns, old text on the left.
    pub fn show(&self, opts: &RenderOptions) -> anyhow::Result<()> {
        let alignment = self.alignment()?;
        let rows = assemble_rows(alignment)?;

        writeln!(
            self.writer(),
            "{}",
            format!("--- {}", self.old_path().display()).bold()
        )?;
        writeln!(
            self.writer(),
            "{}",
            format!("+++ {}", self.new_path().display()).bold()
        )?;

        for line in render_rows(&rows, opts) {
            writeln!(self.writer(), "{line}")?;
        }

        if alignment.is_identical() {
            writeln!(self.writer(), "{}", "No differences.".dimmed())?;
        }

        Ok(())
    }
}
