//! Numeric table helpers
//!
//! A small row-major table where the last column holds the label and the
//! remaining columns are features. Only shape accessors are needed here.

use anyhow::{bail, Result};

/// Owned row-major numeric table; the last column is the label
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    cells: Vec<f64>,
    rows: usize,
    cols: usize,
}

impl Table {
    /// Build a table from rows, rejecting ragged input
    ///
    /// # Errors
    ///
    /// Returns an error if rows have inconsistent lengths.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self> {
        let cols = rows.first().map_or(0, Vec::len);

        let mut cells = Vec::with_capacity(rows.len() * cols);
        for (idx, row) in rows.iter().enumerate() {
            if row.len() != cols {
                bail!(
                    "Ragged table: row {idx} has {got} columns, expected {cols}",
                    got = row.len()
                );
            }
            cells.extend_from_slice(row);
        }

        Ok(Self {
            cells,
            rows: rows.len(),
            cols,
        })
    }

    /// Number of feature columns (all columns except the trailing label)
    #[inline]
    #[must_use]
    pub fn feature_count(&self) -> usize {
        self.cols.saturating_sub(1)
    }

    /// Number of samples (rows)
    #[inline]
    #[must_use]
    pub fn sample_count(&self) -> usize {
        self.rows
    }

    #[inline]
    #[must_use]
    pub fn column_count(&self) -> usize {
        self.cols
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows == 0
    }

    #[must_use]
    pub fn row(&self, index: usize) -> Option<&[f64]> {
        if index >= self.rows {
            return None;
        }
        let start = index * self.cols;
        Some(&self.cells[start..start + self.cols])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table_with_shape(rows: usize, cols: usize) -> Table {
        Table::from_rows(vec![vec![0.0; cols]; rows]).unwrap()
    }

    #[test]
    fn test_feature_count_excludes_label_column() {
        let table = table_with_shape(3, 5);
        assert_eq!(table.feature_count(), 4);
        assert_eq!(table.column_count(), 5);
    }

    #[test]
    fn test_sample_count() {
        let table = table_with_shape(10, 3);
        assert_eq!(table.sample_count(), 10);
    }

    #[test]
    fn test_empty_table() {
        let table = Table::from_rows(vec![]).unwrap();
        assert!(table.is_empty());
        assert_eq!(table.sample_count(), 0);
        assert_eq!(table.feature_count(), 0);
        assert!(table.row(0).is_none());
    }

    #[test]
    fn test_row_access() {
        let table = Table::from_rows(vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]).unwrap();
        assert_eq!(table.row(1), Some([4.0, 5.0, 6.0].as_slice()));
        assert!(table.row(2).is_none());
    }

    #[test]
    fn test_ragged_rows_rejected() {
        let result = Table::from_rows(vec![vec![1.0, 2.0], vec![3.0]]);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Ragged table"));
    }
}
