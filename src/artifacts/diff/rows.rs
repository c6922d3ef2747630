//! Side-by-side row assembly
//!
//! Interleaves the two classified sides into rows. Runs of inserted lines are
//! emitted first, then runs of deleted lines, then lines that can share a row:
//! `Equal` with `Equal`, `Changed` with `Changed`, `Deleted` with `Inserted`.
//! An inserted line takes the deleted old line at the cursor as its partner.
//!
//! The three phases form one loop over [`AssemblyState`]. A `Changed` pair
//! may cross an anchor (the classifier skips anchors that are already behind
//! its cursor), which leaves both cursors on markers that cannot share a row.
//! When a whole cycle makes no progress one line is emitted on its own: the
//! side that is not waiting on an anchor goes first.

use crate::artifacts::diff::error::DiffError;
use crate::artifacts::diff::line_diff::{Alignment, LineDiffEntry, Marker};
use derive_new::new;

/// One rendered row: an old line, a new line, or both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, new)]
pub struct Row<'a> {
    old: Option<&'a LineDiffEntry>,
    new: Option<&'a LineDiffEntry>,
}

impl<'a> Row<'a> {
    pub fn old_entry(&self) -> Option<&'a LineDiffEntry> {
        self.old
    }

    pub fn new_entry(&self) -> Option<&'a LineDiffEntry> {
        self.new
    }

    pub fn old_text(&self) -> Option<&'a str> {
        self.old.map(LineDiffEntry::text)
    }

    pub fn old_marker(&self) -> Option<Marker> {
        self.old.map(LineDiffEntry::marker)
    }

    pub fn new_text(&self) -> Option<&'a str> {
        self.new.map(LineDiffEntry::text)
    }

    pub fn new_marker(&self) -> Option<Marker> {
        self.new.map(LineDiffEntry::marker)
    }

    pub fn is_paired(&self) -> bool {
        self.old.is_some() && self.new.is_some()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AssemblyState {
    DrainInsertions,
    DrainDeletions,
    PairMatched,
}

fn can_share_row(old: Option<Marker>, new: Option<Marker>) -> bool {
    matches!(
        (old, new),
        (Some(Marker::Equal), Some(Marker::Equal))
            | (Some(Marker::Changed), Some(Marker::Changed))
            | (Some(Marker::Deleted), Some(Marker::Inserted))
    )
}

/// Builds the rows of a fully classified alignment.
///
/// Fails when any line is still unclassified.
pub fn assemble_rows(alignment: &Alignment) -> Result<Vec<Row<'_>>, DiffError> {
    alignment.ensure_classified()?;

    let (old_side, new_side) = (alignment.old_side(), alignment.new_side());
    let (mut old, mut new) = (0, 0);
    let mut state = AssemblyState::DrainInsertions;
    let mut cycle_start = (old, new);
    let mut rows = Vec::with_capacity(old_side.len().max(new_side.len()));

    while old < old_side.len() || new < new_side.len() {
        let old_marker = old_side.get(old).map(LineDiffEntry::marker);
        let new_marker = new_side.get(new).map(LineDiffEntry::marker);

        match state {
            AssemblyState::DrainInsertions => {
                if new_marker != Some(Marker::Inserted) {
                    state = AssemblyState::DrainDeletions;
                    continue;
                }

                let partner = if old_marker == Some(Marker::Deleted) {
                    old += 1;
                    Some(&old_side[old - 1])
                } else {
                    None
                };
                rows.push(Row::new(partner, Some(&new_side[new])));
                new += 1;
            }
            AssemblyState::DrainDeletions => {
                if old_marker != Some(Marker::Deleted) {
                    state = AssemblyState::PairMatched;
                    continue;
                }

                // new lines are never `Deleted` once classified, so this
                // only pairs on hand-built alignments
                let partner = if new_marker == Some(Marker::Deleted) {
                    new += 1;
                    Some(&new_side[new - 1])
                } else {
                    None
                };
                rows.push(Row::new(Some(&old_side[old]), partner));
                old += 1;
            }
            AssemblyState::PairMatched => {
                if can_share_row(old_marker, new_marker) {
                    rows.push(Row::new(Some(&old_side[old]), Some(&new_side[new])));
                    old += 1;
                    new += 1;
                    continue;
                }

                if (old, new) == cycle_start {
                    debug_log!(
                        "rows: no progress at old[{}] {:?} / new[{}] {:?}, emitting one line",
                        old,
                        old_marker,
                        new,
                        new_marker
                    );
                    match (old_side.get(old), new_side.get(new)) {
                        (Some(entry), None) => {
                            rows.push(Row::new(Some(entry), None));
                            old += 1;
                        }
                        (Some(entry), Some(_)) if entry.marker() != Marker::Equal => {
                            rows.push(Row::new(Some(entry), None));
                            old += 1;
                        }
                        (_, Some(entry)) => {
                            rows.push(Row::new(None, Some(entry)));
                            new += 1;
                        }
                        (None, None) => unreachable!("loop exits once both sides are consumed"),
                    }
                }

                state = AssemblyState::DrainInsertions;
                cycle_start = (old, new);
            }
        }
    }

    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::artifacts::diff::diff_algorithm::diff_lines;
    use crate::artifacts::diff::error::Side;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    type Cell = Option<(char, String)>;

    fn cells(rows: &[Row<'_>]) -> Vec<(Cell, Cell)> {
        let cell = |entry: Option<&LineDiffEntry>| {
            entry.map(|entry| (entry.marker().symbol(), entry.text().to_string()))
        };
        rows.iter()
            .map(|row| (cell(row.old_entry()), cell(row.new_entry())))
            .collect()
    }

    fn c(symbol: char, text: &str) -> Cell {
        Some((symbol, text.to_string()))
    }

    fn classified(side: &[(&str, Marker)]) -> Vec<LineDiffEntry> {
        side.iter()
            .map(|(text, marker)| {
                let mut entry = LineDiffEntry::new(*text);
                entry.mark(*marker);
                entry
            })
            .collect()
    }

    #[test]
    fn identical_texts_pair_every_line() {
        let alignment = diff_lines(&["a", "b"], &["a", "b"]).unwrap();
        let rows = assemble_rows(&alignment).unwrap();

        assert_eq!(
            cells(&rows),
            vec![(c(' ', "a"), c(' ', "a")), (c(' ', "b"), c(' ', "b"))]
        );
        assert!(rows.iter().all(Row::is_paired));
    }

    #[test]
    fn insertion_before_anchor_gets_its_own_row() {
        let alignment = diff_lines(
            &[
                "some unchanged line",
                "this line will be changed",
                "qwerty",
                "some old line",
            ],
            &[
                "some new line",
                "some unchanged line",
                "this line was changed",
                "qwerty",
            ],
        )
        .unwrap();
        let rows = assemble_rows(&alignment).unwrap();

        assert_eq!(
            cells(&rows),
            vec![
                (None, c('+', "some new line")),
                (c(' ', "some unchanged line"), c(' ', "some unchanged line")),
                (
                    c('~', "this line will be changed"),
                    c('~', "this line was changed")
                ),
                (c(' ', "qwerty"), c(' ', "qwerty")),
                (c('-', "some old line"), None),
            ]
        );
    }

    #[test]
    fn replacement_pairs_deleted_with_inserted() {
        let alignment = diff_lines(
            &["line to delete", "one", "also a line to delete", "two"],
            &["some new line", "one", "two"],
        )
        .unwrap();
        let rows = assemble_rows(&alignment).unwrap();

        assert_eq!(
            cells(&rows),
            vec![
                (c('-', "line to delete"), c('+', "some new line")),
                (c(' ', "one"), c(' ', "one")),
                (c('-', "also a line to delete"), None),
                (c(' ', "two"), c(' ', "two")),
            ]
        );
    }

    #[test]
    fn trailing_deletion_pairs_with_insertion() {
        let alignment = diff_lines(&["keep", "gone one", "gone two"], &["keep", "xyz"]).unwrap();
        let rows = assemble_rows(&alignment).unwrap();

        assert_eq!(
            cells(&rows),
            vec![
                (c(' ', "keep"), c(' ', "keep")),
                (c('-', "gone one"), c('+', "xyz")),
                (c('-', "gone two"), None),
            ]
        );
    }

    #[test]
    fn change_crossing_an_anchor_still_terminates() {
        let alignment = diff_lines(&["value = 1", "fixed"], &["fixed", "value = 2"]).unwrap();
        let rows = assemble_rows(&alignment).unwrap();

        assert_eq!(
            cells(&rows),
            vec![
                (c('~', "value = 1"), None),
                (c(' ', "fixed"), c(' ', "fixed")),
                (None, c('~', "value = 2")),
            ]
        );
    }

    #[test]
    fn deleted_new_line_pairs_with_deletion_run() {
        let old_side = classified(&[("old", Marker::Deleted)]);
        let new_side = classified(&[("odd", Marker::Deleted)]);
        let alignment = Alignment::new(old_side, new_side);
        let rows = assemble_rows(&alignment).unwrap();

        assert_eq!(cells(&rows), vec![(c('-', "old"), c('-', "odd"))]);
    }

    #[test]
    fn unclassified_alignment_is_rejected() {
        let alignment = Alignment::new(
            classified(&[("a", Marker::Equal)]),
            vec![LineDiffEntry::new("a")],
        );
        let error = assemble_rows(&alignment).unwrap_err();

        assert!(error.is_malformed_state());
        assert_eq!(error, DiffError::Unclassified { side: Side::New, index: 0 });
    }

    #[test]
    fn empty_alignment_has_no_rows() {
        let alignment = Alignment::default();

        assert!(assemble_rows(&alignment).unwrap().is_empty());
    }

    fn line_strategy() -> impl Strategy<Value = String> {
        prop::sample::select(vec!["alpha", "beta", "value = 1", "value = 2", "fixed"])
            .prop_map(str::to_string)
    }

    proptest! {
        #[test]
        fn every_line_appears_once_in_order(
            old in prop::collection::vec(line_strategy(), 0..12),
            new in prop::collection::vec(line_strategy(), 0..12),
        ) {
            let alignment = diff_lines(&old, &new).unwrap();
            let rows = assemble_rows(&alignment).unwrap();

            let old_texts = rows.iter().filter_map(Row::old_text).collect::<Vec<_>>();
            let new_texts = rows.iter().filter_map(Row::new_text).collect::<Vec<_>>();

            prop_assert_eq!(old_texts, old.iter().map(String::as_str).collect::<Vec<_>>());
            prop_assert_eq!(new_texts, new.iter().map(String::as_str).collect::<Vec<_>>());
            prop_assert!(rows.iter().all(|row| row.old_entry().is_some() || row.new_entry().is_some()));
        }

        #[test]
        fn paired_rows_have_compatible_markers(
            old in prop::collection::vec(line_strategy(), 0..12),
            new in prop::collection::vec(line_strategy(), 0..12),
        ) {
            let alignment = diff_lines(&old, &new).unwrap();
            let rows = assemble_rows(&alignment).unwrap();

            for row in rows.iter().filter(|row| row.is_paired()) {
                prop_assert!(can_share_row(row.old_marker(), row.new_marker()));
            }
        }
    }
}
