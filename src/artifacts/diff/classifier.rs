//! Classification of lines outside the common subsequence
//!
//! After the backtracker has marked the anchors (`Equal` lines), every other
//! old line is either an in-place edit of some new line (`Changed`) or gone
//! (`Deleted`), and every other new line is `Changed` or `Inserted`.
//!
//! Old lines are scanned in order. For each unmarked one the [`SyncCursor`]
//! first catches the new side up to the same number of anchors, then the new
//! lines from the cursor onwards are tried until either a similar line is
//! found or the next anchor is reached.
//!
//! ## Similarity
//!
//! Two lines are similar when the character-level LCS covers at least two
//! thirds of *each* line: `lcs >= len / 1.5` for both lengths, inclusive.
//! The first similar candidate wins.

use crate::artifacts::diff::lcs::LcsTable;
use crate::artifacts::diff::line_diff::{LineDiffEntry, Marker};

/// Each line must share at least `len / SIMILARITY_DIVISOR` characters.
pub const SIMILARITY_DIVISOR: f64 = 1.5;

/// Returns true when `old` and `new` are close enough to be one edited line.
pub fn is_similar(old: &str, new: &str) -> bool {
    let lcs = LcsTable::of_chars(old, new).lcs_len() as f64;

    lcs >= old.chars().count() as f64 / SIMILARITY_DIVISOR
        && lcs >= new.chars().count() as f64 / SIMILARITY_DIVISOR
}

/// Scan position on the new side, kept in step with the anchors consumed on
/// the old side.
///
/// `search_from_new` never moves backwards.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SyncCursor {
    equal_seen_old: usize,
    equal_seen_new: usize,
    search_from_new: usize,
}

impl SyncCursor {
    #[cfg(test)]
    fn equal_seen_old(&self) -> usize {
        self.equal_seen_old
    }

    #[cfg(test)]
    fn equal_seen_new(&self) -> usize {
        self.equal_seen_new
    }

    #[cfg(test)]
    fn search_from_new(&self) -> usize {
        self.search_from_new
    }

    fn pass_old_anchor(&mut self) {
        self.equal_seen_old += 1;
    }

    /// Skips new lines that are already marked, and keeps skipping until as
    /// many anchors have been passed on the new side as on the old side.
    fn sync(&mut self, new_side: &[LineDiffEntry]) {
        while let Some(entry) = new_side.get(self.search_from_new) {
            if !entry.is_marked() && self.equal_seen_new >= self.equal_seen_old {
                break;
            }

            if entry.marker() == Marker::Equal {
                self.equal_seen_new += 1;
            }
            self.search_from_new += 1;
        }
    }

    /// Looks for the first new line similar to `old`, stopping at the next
    /// anchor. Returns the index of the match.
    fn find_match(&mut self, old: &LineDiffEntry, new_side: &[LineDiffEntry]) -> Option<usize> {
        for (index, candidate) in new_side.iter().enumerate().skip(self.search_from_new) {
            if candidate.marker() == Marker::Equal {
                self.equal_seen_new += 1;
                self.search_from_new = index + 1;
                return None;
            }

            if is_similar(old.text(), candidate.text()) {
                self.search_from_new = index + 1;
                return Some(index);
            }
        }

        None
    }
}

/// Resolves every line the backtracker left unmarked.
///
/// Returns the final cursor state.
pub fn classify(old_side: &mut [LineDiffEntry], new_side: &mut [LineDiffEntry]) -> SyncCursor {
    let mut cursor = SyncCursor::default();

    for old in old_side.iter_mut() {
        match old.marker() {
            Marker::Equal => {
                cursor.pass_old_anchor();
                continue;
            }
            marker if marker.is_classified() => continue,
            _ => {}
        }

        cursor.sync(new_side);

        match cursor.find_match(old, new_side) {
            Some(new_index) => {
                debug_log!(
                    "classify: old {:?} changed into new[{}] {:?}",
                    old.text(),
                    new_index,
                    new_side[new_index].text()
                );
                old.mark(Marker::Changed);
                new_side[new_index].mark(Marker::Changed);
            }
            None => {
                debug_log!("classify: old {:?} deleted", old.text());
                old.mark(Marker::Deleted);
            }
        }
    }

    new_side
        .iter_mut()
        .filter(|entry| !entry.is_marked())
        .for_each(|entry| entry.mark(Marker::Inserted));

    cursor
}
