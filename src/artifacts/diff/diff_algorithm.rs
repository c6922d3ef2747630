use crate::artifacts::diff::classifier::classify;
use crate::artifacts::diff::error::{DiffError, Side};
use crate::artifacts::diff::lcs::LcsTable;
use crate::artifacts::diff::line_diff::{Alignment, LineDiffEntry, Marker};

pub trait DiffAlgorithm {
    type Table;
    type Output;

    fn compute_table(&self) -> Self::Table;
    fn backtrack(&mut self, table: &Self::Table);
    fn classify(&mut self);
    fn diff(self) -> Self::Output;
}

/// Line diff driven by a longest common subsequence over whole lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LcsDiff {
    old_side: Vec<LineDiffEntry>,
    new_side: Vec<LineDiffEntry>,
}

impl LcsDiff {
    /// Validates both inputs before any work is done.
    ///
    /// Lines must be non-empty and already trimmed; the line reader is
    /// responsible for that normalization.
    pub fn new<S: AsRef<str>>(old_lines: &[S], new_lines: &[S]) -> Result<Self, DiffError> {
        Ok(LcsDiff {
            old_side: Self::entries(Side::Old, old_lines)?,
            new_side: Self::entries(Side::New, new_lines)?,
        })
    }

    fn entries<S: AsRef<str>>(side: Side, lines: &[S]) -> Result<Vec<LineDiffEntry>, DiffError> {
        lines
            .iter()
            .enumerate()
            .map(|(index, line)| {
                let line = line.as_ref();
                if line.is_empty() || line.trim() != line {
                    return Err(DiffError::InvalidLine {
                        side,
                        index,
                        line: line.to_string(),
                    });
                }
                Ok(LineDiffEntry::new(line))
            })
            .collect()
    }
}

impl DiffAlgorithm for LcsDiff {
    type Table = LcsTable;
    type Output = Alignment;

    fn compute_table(&self) -> Self::Table {
        let old_texts = self.old_side.iter().map(LineDiffEntry::text).collect::<Vec<_>>();
        let new_texts = self.new_side.iter().map(LineDiffEntry::text).collect::<Vec<_>>();

        LcsTable::build(&old_texts, &new_texts)
    }

    /// Marks one longest common subsequence as `Equal`, walking back from the
    /// bottom-right corner of the table.
    ///
    /// On a mismatch the walk drops a new line only when that keeps a strictly
    /// longer subsequence; ties drop the old line. With repeated lines this
    /// decides which of the equally long subsequences is chosen.
    fn backtrack(&mut self, table: &Self::Table) {
        let (mut i, mut j) = (self.old_side.len(), self.new_side.len());

        while table.get(i, j) > 0 {
            if self.old_side[i - 1].text() == self.new_side[j - 1].text() {
                debug_log!("backtrack: old[{}] == new[{}]", i - 1, j - 1);
                self.old_side[i - 1].mark(Marker::Equal);
                self.new_side[j - 1].mark(Marker::Equal);
                i -= 1;
                j -= 1;
            } else if table.get(i - 1, j) < table.get(i, j - 1) {
                j -= 1;
            } else {
                i -= 1;
            }
        }
    }

    fn classify(&mut self) {
        classify(&mut self.old_side, &mut self.new_side);
    }

    fn diff(mut self) -> Self::Output {
        let table = self.compute_table();
        self.backtrack(&table);
        self.classify();

        Alignment::new(self.old_side, self.new_side)
    }
}

/// Validates, aligns and classifies two sequences of lines.
pub fn diff_lines<S: AsRef<str>>(old_lines: &[S], new_lines: &[S]) -> Result<Alignment, DiffError> {
    Ok(LcsDiff::new(old_lines, new_lines)?.diff())
}
