/*!
 * Iterators over parts of a Matrix
 */

use std::iter::{Enumerate, ExactSizeIterator, FusedIterator};

use crate::matrices::{Column, Matrix, Row};

/**
 * An iterator over references to the entries of a row in a matrix, along with the column
 * each one is in.
 *
 * For a 2x2 matrix such as `[ 1, 2; 3, 4]`: ie
 * ```ignore
 * [
 *   1, 2
 *   3, 4
 * ]
 * ```
 * Depending on the row iterator you want to obtain,
 * can either iterate through (0, 1), (1, 2) or (0, 3), (1, 4).
 */
#[derive(Debug)]
pub struct RowReferenceIterator<'a, T> {
    values: Enumerate<std::slice::Iter<'a, T>>,
}

impl<'a, T> RowReferenceIterator<'a, T> {
    /**
     * Constructs a row iterator over this matrix.
     *
     * Panics if the row does not exist.
     */
    #[track_caller]
    pub fn new(matrix: &'a Matrix<T>, row: Row) -> RowReferenceIterator<'a, T> {
        assert!(row < matrix.rows(), "Row out of index");
        let start = row * matrix.columns();
        RowReferenceIterator {
            values: matrix.data[start..start + matrix.columns()]
                .iter()
                .enumerate(),
        }
    }
}

impl<'a, T> Iterator for RowReferenceIterator<'a, T> {
    type Item = (Column, &'a T);

    fn next(&mut self) -> Option<Self::Item> {
        self.values.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.values.size_hint()
    }
}

impl<'a, T> FusedIterator for RowReferenceIterator<'a, T> {}
impl<'a, T> ExactSizeIterator for RowReferenceIterator<'a, T> {}

/**
 * An iterator over references to the entries of a column in a matrix, along with the row
 * each one is in.
 *
 * For a 2x2 matrix such as `[ 1, 2; 3, 4]`: ie
 * ```ignore
 * [
 *   1, 2
 *   3, 4
 * ]
 * ```
 * Depending on the column iterator you want to obtain,
 * can either iterate through (0, 1), (1, 3) or (0, 2), (1, 4).
 */
#[derive(Debug)]
pub struct ColumnReferenceIterator<'a, T> {
    matrix: &'a Matrix<T>,
    column: Column,
    counter: usize,
}

impl<'a, T> ColumnReferenceIterator<'a, T> {
    /**
     * Constructs a column iterator over this matrix.
     *
     * Panics if the column does not exist.
     */
    #[track_caller]
    pub fn new(matrix: &'a Matrix<T>, column: Column) -> ColumnReferenceIterator<'a, T> {
        assert!(column < matrix.columns(), "Column out of index");
        ColumnReferenceIterator {
            matrix,
            column,
            counter: 0,
        }
    }
}

impl<'a, T> Iterator for ColumnReferenceIterator<'a, T> {
    type Item = (Row, &'a T);

    fn next(&mut self) -> Option<Self::Item> {
        let matrix = self.matrix;
        if self.counter >= matrix.rows() {
            return None;
        }
        let row = self.counter;
        self.counter += 1;
        Some((row, &matrix.data[row * matrix.columns() + self.column]))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.matrix.rows() - self.counter;
        (remaining, Some(remaining))
    }
}

impl<'a, T> FusedIterator for ColumnReferenceIterator<'a, T> {}
impl<'a, T> ExactSizeIterator for ColumnReferenceIterator<'a, T> {}

/**
 * A row major iterator over references to all values in a matrix, along with the row and
 * column of each one.
 *
 * For a 2x2 matrix such as `[ 1, 2; 3, 4]`: ie
 * ```ignore
 * [
 *   1, 2
 *   3, 4
 * ]
 * ```
 * The elements will be iterated through as ((0, 0), 1), ((0, 1), 2), ((1, 0), 3), ((1, 1), 4)
 */
#[derive(Debug)]
pub struct RowMajorIndexedReferenceIterator<'a, T> {
    columns: Column,
    values: Enumerate<std::slice::Iter<'a, T>>,
}

impl<'a, T> RowMajorIndexedReferenceIterator<'a, T> {
    /**
     * Constructs a row major indexed iterator over this matrix.
     */
    pub fn new(matrix: &'a Matrix<T>) -> RowMajorIndexedReferenceIterator<'a, T> {
        RowMajorIndexedReferenceIterator {
            columns: matrix.columns(),
            values: matrix.data.iter().enumerate(),
        }
    }
}

impl<'a, T> Iterator for RowMajorIndexedReferenceIterator<'a, T> {
    type Item = ((Row, Column), &'a T);

    fn next(&mut self) -> Option<Self::Item> {
        // A matrix with no columns has no data, so the division is never reached
        let (index, value) = self.values.next()?;
        Some(((index / self.columns, index % self.columns), value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.values.size_hint()
    }
}

impl<'a, T> FusedIterator for RowMajorIndexedReferenceIterator<'a, T> {}
impl<'a, T> ExactSizeIterator for RowMajorIndexedReferenceIterator<'a, T> {}

#[test]
fn test_column_iterator_of_empty_rows() {
    let matrix: Matrix<u8> = Matrix::from_flat_row_major((0, 3), vec![]);
    assert_eq!(ColumnReferenceIterator::new(&matrix, 2).count(), 0);
    assert_eq!(RowMajorIndexedReferenceIterator::new(&matrix).count(), 0);
}

#[test]
fn test_row_major_indexes() {
    let matrix = Matrix::from(vec![vec!['a', 'b', 'c'], vec!['d', 'e', 'f']]);
    let entries: Vec<_> = RowMajorIndexedReferenceIterator::new(&matrix)
        .map(|(index, x)| (index, *x))
        .collect();
    assert_eq!(
        entries,
        vec![
            ((0, 0), 'a'),
            ((0, 1), 'b'),
            ((0, 2), 'c'),
            ((1, 0), 'd'),
            ((1, 1), 'e'),
            ((1, 2), 'f'),
        ]
    );
}
