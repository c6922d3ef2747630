use crate::areas::comparator::Comparator;
use crate::artifacts::diff::rows::assemble_rows;
use crate::artifacts::render::html::render_page;
use anyhow::Context;
use std::io::Write;
use std::path::{Path, PathBuf};

pub const DEFAULT_OUTPUT: &str = "diff.html";

/// Rejects output paths without an `.html` extension (any case).
pub fn validate_output_path(path: &Path) -> anyhow::Result<()> {
    let is_html = path
        .extension()
        .and_then(|extension| extension.to_str())
        .is_some_and(|extension| extension.eq_ignore_ascii_case("html"));

    if !is_html {
        anyhow::bail!("Please, provide .HTML file as an output file.");
    }

    Ok(())
}

impl Comparator {
    /// Writes the comparison as an HTML page and reports where it went.
    pub fn save_html(&self, output: &Path) -> anyhow::Result<PathBuf> {
        validate_output_path(output)?;

        let alignment = self.alignment()?;
        let rows = assemble_rows(alignment)?;
        let page = render_page(&rows);

        let output = self.resolve(output);
        std::fs::write(&output, page)
            .with_context(|| format!("Cannot save the page to {}", output.display()))?;

        let output = output.canonicalize()?;
        writeln!(self.writer(), "The result is at: {}", output.display())?;

        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("diff.html", true)]
    #[case("out/Report.HTML", true)]
    #[case("diff.htm", false)]
    #[case("diff", false)]
    #[case("html", false)]
    fn output_must_be_html(#[case] path: &str, #[case] valid: bool) {
        assert_eq!(validate_output_path(Path::new(path)).is_ok(), valid);
    }
}
