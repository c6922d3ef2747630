use crate::artifacts::diff::line_diff::{LineDiffEntry, Marker};
use crate::artifacts::diff::rows::Row;
use colored::{ColoredString, Colorize};
use derive_new::new;

const COLUMN_SEPARATOR: &str = " | ";
const ELLIPSIS: char = '…';

#[derive(Debug, Clone, Copy, PartialEq, Eq, new)]
pub struct RenderOptions {
    /// Characters per column, gutter included.
    pub width: usize,
}

impl Default for RenderOptions {
    fn default() -> Self {
        RenderOptions { width: 60 }
    }
}

/// Pads or truncates `text` to exactly `width` characters.
fn fit(text: &str, width: usize) -> String {
    let length = text.chars().count();

    if length <= width {
        format!("{text}{}", " ".repeat(width - length))
    } else if width == 0 {
        String::new()
    } else {
        let mut fitted = text.chars().take(width - 1).collect::<String>();
        fitted.push(ELLIPSIS);
        fitted
    }
}

fn paint(text: String, marker: Marker) -> ColoredString {
    match marker {
        Marker::Deleted => text.red(),
        Marker::Inserted => text.green(),
        Marker::Changed => text.blue(),
        Marker::Equal | Marker::Unclassified => text.normal(),
    }
}

fn column(entry: Option<&LineDiffEntry>, width: usize) -> ColoredString {
    match entry {
        None => " ".repeat(width).normal(),
        Some(entry) => {
            let text = format!(
                "{}{}",
                entry.marker().symbol(),
                fit(entry.text(), width.saturating_sub(1))
            );
            paint(text, entry.marker())
        }
    }
}

/// Renders one line per row: old column, separator, new column.
pub fn render_rows(rows: &[Row<'_>], opts: &RenderOptions) -> Vec<String> {
    rows.iter()
        .map(|row| {
            let line = format!(
                "{}{COLUMN_SEPARATOR}{}",
                column(row.old_entry(), opts.width),
                column(row.new_entry(), opts.width)
            );
            line.trim_end().to_string()
        })
        .collect()
}
