use crate::artifacts::diff::error::{DiffError, Side};
use std::fmt::Display;

/// Classification of a single line.
///
/// Every line starts `Unclassified` and receives exactly one other marker
/// during the diff.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Marker {
    #[default]
    Unclassified,
    Equal,
    Deleted,
    Inserted,
    Changed,
}

impl Marker {
    pub fn is_classified(&self) -> bool {
        *self != Marker::Unclassified
    }

    /// One-character gutter symbol used by plain-text renderers.
    pub fn symbol(&self) -> char {
        match self {
            Marker::Unclassified => '?',
            Marker::Equal => ' ',
            Marker::Deleted => '-',
            Marker::Inserted => '+',
            Marker::Changed => '~',
        }
    }
}

impl From<&Marker> for &str {
    fn from(marker: &Marker) -> Self {
        match marker {
            Marker::Unclassified => "unclassified",
            Marker::Equal => "equal",
            Marker::Deleted => "deleted",
            Marker::Inserted => "inserted",
            Marker::Changed => "changed",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineDiffEntry {
    text: String,
    marker: Marker,
}

impl LineDiffEntry {
    pub fn new(text: impl Into<String>) -> Self {
        LineDiffEntry {
            text: text.into(),
            marker: Marker::Unclassified,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn marker(&self) -> Marker {
        self.marker
    }

    pub fn is_marked(&self) -> bool {
        self.marker.is_classified()
    }

    /// Assigns the marker. Only the engine classifies lines, and only once.
    pub(crate) fn mark(&mut self, marker: Marker) {
        debug_assert!(
            !self.is_marked(),
            "line {:?} is already marked {:?}",
            self.text,
            self.marker
        );
        self.marker = marker;
    }
}

impl Display for LineDiffEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.marker.symbol(), self.text)
    }
}

/// Both classified sides of a diff, each in its original input order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Alignment {
    old_side: Vec<LineDiffEntry>,
    new_side: Vec<LineDiffEntry>,
}

impl Alignment {
    pub(crate) fn new(old_side: Vec<LineDiffEntry>, new_side: Vec<LineDiffEntry>) -> Self {
        Alignment { old_side, new_side }
    }

    pub fn old_side(&self) -> &[LineDiffEntry] {
        &self.old_side
    }

    pub fn new_side(&self) -> &[LineDiffEntry] {
        &self.new_side
    }

    pub fn old_markers(&self) -> Vec<Marker> {
        self.old_side.iter().map(LineDiffEntry::marker).collect()
    }

    pub fn new_markers(&self) -> Vec<Marker> {
        self.new_side.iter().map(LineDiffEntry::marker).collect()
    }

    /// True when no line on either side differs.
    pub fn is_identical(&self) -> bool {
        self.old_side
            .iter()
            .chain(self.new_side.iter())
            .all(|entry| entry.marker() == Marker::Equal)
    }

    /// Fails with the first line that is still unclassified.
    pub fn ensure_classified(&self) -> Result<(), DiffError> {
        let unclassified = |side: Side, entries: &[LineDiffEntry]| {
            entries
                .iter()
                .position(|entry| !entry.is_marked())
                .map(|index| DiffError::Unclassified { side, index })
        };

        match unclassified(Side::Old, &self.old_side)
            .or_else(|| unclassified(Side::New, &self.new_side))
        {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn fresh_entries_are_unclassified() {
        let entry = LineDiffEntry::new("some line");

        assert_eq!(entry.marker(), Marker::Unclassified);
        assert!(!entry.is_marked());
        assert_eq!(entry.text(), "some line");
    }

    #[test]
    fn entry_display_prefixes_marker_symbol() {
        let mut entry = LineDiffEntry::new("removed");
        entry.mark(Marker::Deleted);

        assert_eq!(entry.to_string(), "-removed");
    }

    #[test]
    fn ensure_classified_reports_first_unclassified_line() {
        let mut first = LineDiffEntry::new("a");
        first.mark(Marker::Equal);
        let mut second = LineDiffEntry::new("a");
        second.mark(Marker::Equal);
        let alignment = Alignment::new(vec![first], vec![second, LineDiffEntry::new("b")]);

        assert_eq!(
            alignment.ensure_classified(),
            Err(DiffError::Unclassified {
                side: Side::New,
                index: 1
            })
        );
    }

    #[test]
    fn empty_alignment_is_identical_and_classified() {
        let alignment = Alignment::default();

        assert!(alignment.is_identical());
        assert_eq!(alignment.ensure_classified(), Ok(()));
    }
}
