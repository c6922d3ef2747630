//! Longest common subsequence tables
//!
//! A single dynamic-programming routine serves both passes of the engine:
//! the line-level alignment and the character-level similarity check.

/// An `(m + 1) x (n + 1)` table of LCS lengths over two sequences.
///
/// `get(i, j)` is the LCS length of the first `i` elements of the first
/// sequence and the first `j` elements of the second one. Row and column
/// zero are always zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LcsTable {
    rows: usize,
    cols: usize,
    cells: Vec<usize>,
}

impl LcsTable {
    /// Builds the table for `a` and `b` in O(m * n) time and space.
    pub fn build<T: PartialEq>(a: &[T], b: &[T]) -> Self {
        let (rows, cols) = (a.len() + 1, b.len() + 1);
        let mut cells = vec![0; rows * cols];

        for i in 1..rows {
            for j in 1..cols {
                cells[i * cols + j] = if a[i - 1] == b[j - 1] {
                    cells[(i - 1) * cols + (j - 1)] + 1
                } else {
                    cells[(i - 1) * cols + j].max(cells[i * cols + (j - 1)])
                };
            }
        }

        LcsTable { rows, cols, cells }
    }

    /// Builds the table over the characters of two lines.
    pub fn of_chars(a: &str, b: &str) -> Self {
        let a = a.chars().collect::<Vec<_>>();
        let b = b.chars().collect::<Vec<_>>();
        Self::build(&a, &b)
    }

    pub fn get(&self, i: usize, j: usize) -> usize {
        debug_assert!(i < self.rows && j < self.cols);
        self.cells[i * self.cols + j]
    }

    /// Length of the LCS of both complete sequences (the bottom-right cell).
    pub fn lcs_len(&self) -> usize {
        self.get(self.rows - 1, self.cols - 1)
    }

    /// Table dimensions as `(m + 1, n + 1)`.
    #[cfg(test)]
    fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }
}
