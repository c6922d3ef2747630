use crate::artifacts::diff::line_diff::{LineDiffEntry, Marker};
use crate::artifacts::diff::rows::Row;

const TEMPLATE: &str = include_str!("../../../templates/diff.html");
const ROWS_PLACEHOLDER: &str = "{{rows}}";

const HTML_ESCAPES: phf::Map<char, &'static str> = phf::phf_map! {
    '&' => "&amp;",
    '<' => "&lt;",
    '>' => "&gt;",
    '"' => "&quot;",
    '\'' => "&#39;",
};

pub fn escape(text: &str) -> String {
    text.chars().fold(String::with_capacity(text.len()), |mut escaped, c| {
        match HTML_ESCAPES.get(&c) {
            Some(entity) => escaped.push_str(entity),
            None => escaped.push(c),
        }
        escaped
    })
}

fn cell(entry: Option<&LineDiffEntry>) -> String {
    match entry {
        None => "<td></td>".to_string(),
        Some(entry) => match entry.marker() {
            Marker::Deleted | Marker::Inserted | Marker::Changed => format!(
                "<td class=\"{}\">{}</td>",
                <&str>::from(&entry.marker()),
                escape(entry.text())
            ),
            Marker::Equal | Marker::Unclassified => format!("<td>{}</td>", escape(entry.text())),
        },
    }
}

/// Renders the `<tr>` elements of the diff table, one per line.
pub fn render_table(rows: &[Row<'_>]) -> String {
    rows.iter()
        .map(|row| {
            format!(
                "<tr>{}{}</tr>\n",
                cell(row.old_entry()),
                cell(row.new_entry())
            )
        })
        .collect()
}

/// Renders a complete page: the template with its placeholder line replaced
/// by the table rows.
pub fn render_page(rows: &[Row<'_>]) -> String {
    let table = render_table(rows);

    TEMPLATE.lines().fold(String::new(), |mut page, line| {
        if line.contains(ROWS_PLACEHOLDER) {
            page.push_str(&table);
        } else {
            page.push_str(line);
            page.push('\n');
        }
        page
    })
}
