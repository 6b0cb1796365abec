use std::ops::Index;

use serde::Serialize;

/// Dense dynamic programming matrix, stored as a flat row-major buffer.
///
/// Cell `(row, col)` lives at `row * cols + col`. Row 0 and column 0 represent the empty prefix
/// of the top and left sequence respectively, so a matrix for sequences of length `m` and `n`
/// has `m + 1` rows and `n + 1` columns.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct DpMatrix<T> {
    rows: usize,
    cols: usize,
    cells: Vec<T>,
}

impl<T> DpMatrix<T>
where
    T: Clone,
{
    pub fn new(rows: usize, cols: usize, fill: T) -> Self {
        Self {
            rows,
            cols,
            cells: vec![fill; rows * cols],
        }
    }
}

impl<T> DpMatrix<T> {
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    #[inline(always)]
    fn offset(&self, row: usize, col: usize) -> usize {
        debug_assert!(row < self.rows && col < self.cols, "Cell ({row}, {col}) out of bounds!");
        row * self.cols + col
    }

    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        if row < self.rows && col < self.cols {
            self.cells.get(row * self.cols + col)
        } else {
            None
        }
    }

    #[inline]
    pub(crate) fn set(&mut self, row: usize, col: usize, value: T) {
        let offset = self.offset(row, col);
        self.cells[offset] = value;
    }

    /// All cells of a single row
    pub fn row(&self, row: usize) -> &[T] {
        let start = self.offset(row, 0);
        &self.cells[start..start + self.cols]
    }

    pub fn iter_rows(&self) -> impl Iterator<Item = &[T]> + '_ {
        (0..self.rows).map(|row| self.row(row))
    }

    /// The underlying row-major buffer
    pub fn as_slice(&self) -> &[T] {
        &self.cells
    }
}

impl<T> Index<(usize, usize)> for DpMatrix<T> {
    type Output = T;

    #[inline(always)]
    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        &self.cells[self.offset(row, col)]
    }
}

#[cfg(test)]
mod tests {
    use super::DpMatrix;

    #[test]
    fn test_row_major_layout() {
        let mut matrix = DpMatrix::new(2, 3, 0);
        matrix.set(0, 2, 2);
        matrix.set(1, 0, 3);
        matrix.set(1, 2, 5);

        assert_eq!(matrix.rows(), 2);
        assert_eq!(matrix.cols(), 3);
        assert_eq!(matrix.as_slice(), &[0, 0, 2, 3, 0, 5]);
        assert_eq!(matrix.row(1), &[3, 0, 5]);
        assert_eq!(matrix[(1, 2)], 5);

        let rows: Vec<_> = matrix.iter_rows().collect();
        assert_eq!(rows, vec![&[0, 0, 2][..], &[3, 0, 5][..]]);
    }

    #[test]
    fn test_get_out_of_bounds() {
        let matrix = DpMatrix::new(1, 1, 'x');

        assert_eq!(matrix.get(0, 0), Some(&'x'));
        assert_eq!(matrix.get(1, 0), None);
        assert_eq!(matrix.get(0, 1), None);
    }
}
