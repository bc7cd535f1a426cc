/*!
 * A sparse matrix stored as one sorted sparse vector per row.
 */

use std::iter::{Enumerate, FusedIterator};

use crate::matrices::errors::IndexOutOfBoundsError;
use crate::matrices::views::{
    MatrixCategory, MatrixMut, MatrixRef, RawIterable, RawIterableMut, RowIterable, RowsOnly,
};
use crate::matrices::{Column, Row};

/**
 * A sparse matrix which stores only the entries that have been set.
 *
 * Each row is kept as a list of `(column, value)` pairs sorted by column, so walking a row is
 * cheap but walking a column would mean searching every row. A SparseMatrix therefore
 * implements [RowIterable] but not
 * [ColumnIterable](crate::matrices::views::ColumnIterable), and declares itself [RowsOnly].
 * A transpose of a SparseMatrix can be used wherever column iteration is needed.
 *
 * ```
 * use easy_transpose::matrices::SparseMatrix;
 * use easy_transpose::matrices::views::{MatrixMut, MatrixRef, RowIterable};
 * let mut matrix = SparseMatrix::new((3, 4));
 * matrix.set(1, 3, 'b');
 * matrix.set(1, 0, 'a');
 * let row: Vec<_> = matrix.row_reference_iter(1).collect();
 * assert_eq!(row, vec![ (0, &'a'), (3, &'b') ]);
 * assert_eq!(matrix.try_get_reference(0, 0), None);
 * ```
 */
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SparseMatrix<T> {
    rows: Vec<Vec<(Column, T)>>,
    columns: Column,
}

impl<T> SparseMatrix<T> {
    /**
     * Creates a sparse matrix of the provided size with no entries stored.
     */
    pub fn new(size: (Row, Column)) -> SparseMatrix<T> {
        SparseMatrix {
            rows: (0..size.0).map(|_| Vec::new()).collect(),
            columns: size.1,
        }
    }

    /**
     * Creates a sparse matrix of the provided size from a list of `((row, column), value)`
     * entries in any order. If an index appears more than once the last value for it is kept.
     *
     * Returns an error if any entry lies outside the size.
     */
    pub fn try_from_triplets(
        size: (Row, Column),
        entries: Vec<((Row, Column), T)>,
    ) -> Result<SparseMatrix<T>, IndexOutOfBoundsError> {
        let mut matrix = SparseMatrix::new(size);
        for ((row, column), value) in entries {
            if row >= size.0 || column >= size.1 {
                return Err(IndexOutOfBoundsError::new((row, column), size));
            }
            matrix.insert(row, column, value);
        }
        Ok(matrix)
    }

    /**
     * Returns the dimensionality of this matrix in Row, Column format
     */
    pub fn size(&self) -> (Row, Column) {
        (self.rows.len(), self.columns)
    }

    /**
     * Gets the number of rows in this matrix.
     */
    pub fn rows(&self) -> Row {
        self.rows.len()
    }

    /**
     * Gets the number of columns in this matrix.
     */
    pub fn columns(&self) -> Column {
        self.columns
    }

    /**
     * The number of entries currently stored.
     */
    pub fn stored(&self) -> usize {
        self.rows.iter().map(|row| row.len()).sum()
    }

    fn insert(&mut self, row: Row, column: Column, value: T) {
        let entries = &mut self.rows[row];
        match entries.binary_search_by_key(&column, |&(c, _)| c) {
            Ok(index) => entries[index].1 = value,
            Err(index) => entries.insert(index, (column, value)),
        }
    }

    fn find(&self, row: Row, column: Column) -> Option<usize> {
        self.rows
            .get(row)?
            .binary_search_by_key(&column, |&(c, _)| c)
            .ok()
    }
}

impl<T> MatrixRef<T> for SparseMatrix<T> {
    fn try_get_reference(&self, row: Row, column: Column) -> Option<&T> {
        let index = self.find(row, column)?;
        Some(&self.rows[row][index].1)
    }

    fn view_rows(&self) -> Row {
        self.rows()
    }

    fn view_columns(&self) -> Column {
        self.columns()
    }
}

impl<T> MatrixMut<T> for SparseMatrix<T> {
    fn try_get_reference_mut(&mut self, row: Row, column: Column) -> Option<&mut T> {
        let index = self.find(row, column)?;
        Some(&mut self.rows[row][index].1)
    }

    /**
     * Stores the value at this row and column, replacing any value already there.
     *
     * Panics if the index is outside the matrix.
     */
    #[track_caller]
    fn set(&mut self, row: Row, column: Column, value: T) {
        assert!(row < self.rows(), "Row out of index");
        assert!(column < self.columns(), "Column out of index");
        self.insert(row, column, value);
    }

    fn erase(&mut self, row: Row, column: Column) {
        if let Some(index) = self.find(row, column) {
            self.rows[row].remove(index);
        }
    }
}

impl<T> RowIterable<T> for SparseMatrix<T> {
    type RowIter<'a>
        = SparseRowIterator<'a, T>
    where
        Self: 'a,
        T: 'a;

    #[track_caller]
    fn row_reference_iter<'a>(&'a self, row: Row) -> Self::RowIter<'a>
    where
        T: 'a,
    {
        assert!(row < self.rows(), "Row out of index");
        SparseRowIterator {
            entries: self.rows[row].iter(),
        }
    }
}

/**
 * A SparseMatrix iterates its raw entries in row major order.
 */
impl<T> RawIterable<T> for SparseMatrix<T> {
    type RawIter<'a>
        = SparseValues<'a, T>
    where
        Self: 'a,
        T: 'a;

    type RawIndexedIter<'a>
        = SparseEntries<'a, T>
    where
        Self: 'a,
        T: 'a;

    fn raw_reference_iter<'a>(&'a self) -> Self::RawIter<'a>
    where
        T: 'a,
    {
        SparseValues {
            entries: self.raw_indexed_reference_iter(),
        }
    }

    fn raw_indexed_reference_iter<'a>(&'a self) -> Self::RawIndexedIter<'a>
    where
        T: 'a,
    {
        SparseEntries {
            rows: self.rows.iter().enumerate(),
            current: None,
        }
    }
}

impl<T> RawIterableMut<T> for SparseMatrix<T> {
    type RawIterMut<'a>
        = SparseValuesMut<'a, T>
    where
        Self: 'a,
        T: 'a;

    fn raw_reference_mut_iter<'a>(&'a mut self) -> Self::RawIterMut<'a>
    where
        T: 'a,
    {
        SparseValuesMut {
            rows: self.rows.iter_mut(),
            current: None,
        }
    }
}

impl<T> MatrixCategory for SparseMatrix<T> {
    type Category = RowsOnly;
}

/**
 * An iterator over the stored entries of a row in a [SparseMatrix], in ascending column
 * order.
 */
#[derive(Debug)]
pub struct SparseRowIterator<'a, T> {
    entries: std::slice::Iter<'a, (Column, T)>,
}

impl<'a, T> Iterator for SparseRowIterator<'a, T> {
    type Item = (Column, &'a T);

    fn next(&mut self) -> Option<Self::Item> {
        self.entries.next().map(|(column, value)| (*column, value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.entries.size_hint()
    }
}

impl<'a, T> FusedIterator for SparseRowIterator<'a, T> {}
impl<'a, T> ExactSizeIterator for SparseRowIterator<'a, T> {}

/**
 * An iterator over every stored entry in a [SparseMatrix] along with its row and column, in
 * row major order.
 */
#[derive(Debug)]
pub struct SparseEntries<'a, T> {
    rows: Enumerate<std::slice::Iter<'a, Vec<(Column, T)>>>,
    current: Option<(Row, std::slice::Iter<'a, (Column, T)>)>,
}

impl<'a, T> Iterator for SparseEntries<'a, T> {
    type Item = ((Row, Column), &'a T);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some((row, entries)) = &mut self.current {
                if let Some((column, value)) = entries.next() {
                    return Some(((*row, *column), value));
                }
            }
            let (row, entries) = self.rows.next()?;
            self.current = Some((row, entries.iter()));
        }
    }
}

impl<'a, T> FusedIterator for SparseEntries<'a, T> {}

/**
 * An iterator over every stored value in a [SparseMatrix], in row major order.
 */
#[derive(Debug)]
pub struct SparseValues<'a, T> {
    entries: SparseEntries<'a, T>,
}

impl<'a, T> Iterator for SparseValues<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.entries.next().map(|(_, value)| value)
    }
}

impl<'a, T> FusedIterator for SparseValues<'a, T> {}

/**
 * An iterator over mutable references to every stored value in a [SparseMatrix], in row
 * major order.
 */
#[derive(Debug)]
pub struct SparseValuesMut<'a, T> {
    rows: std::slice::IterMut<'a, Vec<(Column, T)>>,
    current: Option<std::slice::IterMut<'a, (Column, T)>>,
}

impl<'a, T> Iterator for SparseValuesMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(entries) = &mut self.current {
                if let Some((_, value)) = entries.next() {
                    return Some(value);
                }
            }
            self.current = Some(self.rows.next()?.iter_mut());
        }
    }
}

impl<'a, T> FusedIterator for SparseValuesMut<'a, T> {}

#[test]
fn test_set_keeps_rows_sorted() {
    let mut matrix = SparseMatrix::new((2, 5));
    matrix.set(0, 4, 4);
    matrix.set(0, 1, 1);
    matrix.set(0, 3, 3);
    matrix.set(0, 1, 10);
    let row: Vec<_> = matrix.row_reference_iter(0).map(|(c, x)| (c, *x)).collect();
    assert_eq!(row, vec![(1, 10), (3, 3), (4, 4)]);
    assert_eq!(matrix.stored(), 3);
}

#[test]
fn test_erase_removes_only_stored_entries() {
    let mut matrix =
        SparseMatrix::try_from_triplets((3, 3), vec![((2, 2), 7), ((0, 1), 1)]).unwrap();
    matrix.erase(0, 0);
    matrix.erase(5, 5);
    assert_eq!(matrix.stored(), 2);
    matrix.erase(0, 1);
    assert_eq!(matrix.stored(), 1);
    assert_eq!(matrix.try_get_reference(0, 1), None);
    assert_eq!(matrix.try_get_reference(2, 2), Some(&7));
}

#[test]
fn test_triplets_out_of_bounds() {
    let error =
        SparseMatrix::try_from_triplets((2, 2), vec![((0, 0), 1), ((0, 2), 2)]).unwrap_err();
    assert_eq!(error.index(), (0, 2));
    assert_eq!(error.size(), (2, 2));
}

#[test]
fn test_raw_iteration_skips_empty_rows() {
    let mut matrix =
        SparseMatrix::try_from_triplets((4, 2), vec![((3, 1), 'd'), ((0, 0), 'a'), ((3, 0), 'c')])
            .unwrap();
    let entries: Vec<_> = matrix
        .raw_indexed_reference_iter()
        .map(|(index, x)| (index, *x))
        .collect();
    assert_eq!(entries, vec![((0, 0), 'a'), ((3, 0), 'c'), ((3, 1), 'd')]);
    matrix
        .raw_reference_mut_iter()
        .for_each(|x| *x = x.to_ascii_uppercase());
    let values: String = matrix.raw_reference_iter().collect();
    assert_eq!(values, "ACD");
}
