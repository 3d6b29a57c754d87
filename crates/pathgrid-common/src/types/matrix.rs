//! Dense square grid stored row-major in one allocation.

use std::ops::{Index, IndexMut};

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::utils::error::{Error, Result};

/// A `size × size` grid of cells, indexed by `(row, col)`.
///
/// Serializes as a sequence of rows so `[[null, 1.5], [2.0, null]]` maps to a
/// 2×2 matrix of `Option<f64>`.
#[derive(Debug, Clone, PartialEq)]
pub struct SquareMatrix<T> {
    size: usize,
    cells: Vec<T>,
}

impl<T: Clone> SquareMatrix<T> {
    /// Creates a matrix with every cell set to `value`.
    pub fn filled(size: usize, value: T) -> Self {
        Self {
            size,
            cells: vec![value; size * size],
        }
    }

    /// Copies the cells out as nested rows.
    pub fn to_rows(&self) -> Vec<Vec<T>> {
        self.rows().map(<[T]>::to_vec).collect()
    }
}

impl<T: Clone + Default> SquareMatrix<T> {
    /// Creates a matrix with every cell set to `T::default()`.
    pub fn new(size: usize) -> Self {
        Self::filled(size, T::default())
    }
}

impl<T> SquareMatrix<T> {
    /// Builds a matrix from nested rows.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotSquare`] if any row length differs from the row count.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self> {
        let size = rows.len();
        if let Some((row, cells)) = rows.iter().enumerate().find(|(_, r)| r.len() != size) {
            return Err(Error::NotSquare {
                row,
                len: cells.len(),
                expected: size,
            });
        }
        Ok(Self {
            size,
            cells: rows.into_iter().flatten().collect(),
        })
    }

    /// Number of rows (and columns).
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns true for the 0×0 matrix.
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Returns the cell at `(row, col)`, or `None` when out of bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        if row < self.size && col < self.size {
            self.cells.get(row * self.size + col)
        } else {
            None
        }
    }

    /// Returns one row as a slice.
    ///
    /// # Panics
    ///
    /// Panics if `row >= size`.
    pub fn row(&self, row: usize) -> &[T] {
        assert!(row < self.size, "row {row} out of bounds for size {}", self.size);
        &self.cells[row * self.size..(row + 1) * self.size]
    }

    /// Iterates over the rows in order.
    pub fn rows(&self) -> impl Iterator<Item = &[T]> {
        // chunks(0) panics; an empty matrix has no cells so any width works
        self.cells.chunks(self.size.max(1))
    }

    /// Iterates over `(row, col, cell)` in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, &T)> {
        let size = self.size;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, cell)| (i / size, i % size, cell))
    }
}

impl<T> Index<(usize, usize)> for SquareMatrix<T> {
    type Output = T;

    fn index(&self, (row, col): (usize, usize)) -> &T {
        assert!(
            row < self.size && col < self.size,
            "index ({row}, {col}) out of bounds for size {}",
            self.size
        );
        &self.cells[row * self.size + col]
    }
}

impl<T> IndexMut<(usize, usize)> for SquareMatrix<T> {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        assert!(
            row < self.size && col < self.size,
            "index ({row}, {col}) out of bounds for size {}",
            self.size
        );
        &mut self.cells[row * self.size + col]
    }
}

impl<T: Serialize> Serialize for SquareMatrix<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_seq(self.rows())
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for SquareMatrix<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let rows = Vec::<Vec<T>>::deserialize(deserializer)?;
        Self::from_rows(rows).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_new_uses_default() {
        let m: SquareMatrix<Option<f64>> = SquareMatrix::new(3);
        assert_eq!(m.size(), 3);
        assert!(m.iter().all(|(_, _, c)| c.is_none()));
    }

    #[test]
    fn test_index_row_major() {
        let m = SquareMatrix::from_rows(vec![vec![1, 2], vec![3, 4]]).unwrap();
        assert_eq!(m[(0, 1)], 2);
        assert_eq!(m[(1, 0)], 3);
        assert_eq!(m.row(1), &[3, 4]);
        assert_eq!(m.get(2, 0), None);
    }

    #[test]
    fn test_index_mut() {
        let mut m = SquareMatrix::filled(2, 0);
        m[(1, 1)] = 7;
        assert_eq!(m.to_rows(), vec![vec![0, 0], vec![0, 7]]);
    }

    #[test]
    fn test_ragged_rows_rejected() {
        let err = SquareMatrix::from_rows(vec![vec![1, 2], vec![3]]).unwrap_err();
        match err {
            Error::NotSquare { row, len, expected } => {
                assert_eq!((row, len, expected), (1, 1, 2));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_empty_matrix() {
        let m: SquareMatrix<i32> = SquareMatrix::from_rows(Vec::new()).unwrap();
        assert!(m.is_empty());
        assert_eq!(m.rows().count(), 0);
        assert!(m.to_rows().is_empty());
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn test_index_out_of_bounds_panics() {
        let m = SquareMatrix::filled(2, 0u8);
        let _ = m[(0, 2)];
    }

    #[test]
    fn test_json_shape() {
        let m = SquareMatrix::from_rows(vec![vec![None, Some(1.5)], vec![Some(-2.0), None]])
            .unwrap();
        let json = serde_json::to_string(&m).unwrap();
        assert_eq!(json, "[[null,1.5],[-2.0,null]]");

        let back: SquareMatrix<Option<f64>> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, m);
    }

    #[test]
    fn test_json_ragged_rejected() {
        let result: std::result::Result<SquareMatrix<Option<f64>>, _> =
            serde_json::from_str("[[1.0, 2.0], [3.0]]");
        assert!(result.is_err());
    }

    proptest! {
        #[test]
        fn prop_rows_preserved(size in 0usize..8, seed in any::<i64>()) {
            let rows: Vec<Vec<i64>> = (0..size)
                .map(|r| (0..size).map(|c| seed.wrapping_add((r * size + c) as i64)).collect())
                .collect();
            let m = SquareMatrix::from_rows(rows.clone()).unwrap();
            prop_assert_eq!(m.to_rows(), rows);
        }
    }
}
