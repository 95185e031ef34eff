use std::fmt;

use crate::error::{Error, Result};

/// The dynamic-programming table produced by a full edit-distance run.
///
/// A flat, row-major grid of `(m + 1) x (n + 1)` non-negative integers,
/// where `m` and `n` are the source and target lengths. Cell `(i, j)` holds
/// the edit distance between the first `i` source symbols and the first `j`
/// target symbols, so the border satisfies `get(i, 0) == i` and
/// `get(0, j) == j`, and the bottom-right cell is the distance between the
/// full inputs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DistanceMatrix {
    rows: usize,
    cols: usize,
    data: Vec<usize>,
}

impl DistanceMatrix {
    /// Allocates a zeroed grid with the given dimensions.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidInput` if `rows * cols` does not fit in
    /// `usize`. Validation happens before any allocation.
    pub(crate) fn zeroed(rows: usize, cols: usize) -> Result<Self> {
        let cells = rows
            .checked_mul(cols)
            .ok_or_else(|| Error::invalid_input("distance matrix dimensions overflow usize"))?;
        Ok(Self {
            rows,
            cols,
            data: vec![0; cells],
        })
    }

    /// Number of rows, i.e. source length plus one.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns, i.e. target length plus one.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Value at row `i`, column `j`.
    ///
    /// # Panics
    ///
    /// Panics if `i >= rows()` or `j >= cols()`.
    pub fn get(&self, i: usize, j: usize) -> usize {
        assert!(i < self.rows && j < self.cols);
        self.data[i * self.cols + j]
    }

    pub(crate) fn set(&mut self, i: usize, j: usize, value: usize) {
        self.data[i * self.cols + j] = value;
    }

    /// Row `i` as a slice of `cols()` values.
    pub fn row(&self, i: usize) -> &[usize] {
        &self.data[i * self.cols..(i + 1) * self.cols]
    }

    /// Iterates over the rows in order, top to bottom.
    pub fn iter_rows(&self) -> impl Iterator<Item = &[usize]> {
        self.data.chunks_exact(self.cols)
    }

    /// The bottom-right cell: the edit distance between the full inputs.
    pub fn distance(&self) -> usize {
        self.data[self.data.len() - 1]
    }
}

/// Renders one row per line, values separated by single spaces.
impl fmt::Display for DistanceMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.iter_rows() {
            for (j, value) in row.iter().enumerate() {
                if j > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", value)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
