/*!
 * A sparse matrix stored as an unordered list of `((row, column), value)` triplets.
 */

use std::iter::FusedIterator;

use crate::matrices::errors::IndexOutOfBoundsError;
use crate::matrices::views::{
    Generic, MatrixCategory, MatrixMut, MatrixRef, RawIterable, RawIterableMut,
};
use crate::matrices::{Column, Row};

/**
 * A sparse matrix which stores each entry that has been set alongside its position, in no
 * particular order.
 *
 * This is a convenient format for building up a matrix one entry at a time, but it has no
 * efficient way to walk a row or a column, so it only implements [RawIterable] and declares
 * itself [Generic]. Each index is stored at most once.
 *
 * ```
 * use easy_transpose::matrices::TripletMatrix;
 * use easy_transpose::matrices::views::{MatrixMut, MatrixRef, RawIterable};
 * let mut matrix = TripletMatrix::new((2, 2));
 * matrix.set(0, 1, 5);
 * matrix.set(1, 0, 6);
 * assert_eq!(matrix.try_get_reference(0, 1), Some(&5));
 * assert_eq!(matrix.raw_reference_iter().sum::<i32>(), 11);
 * ```
 */
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TripletMatrix<T> {
    entries: Vec<((Row, Column), T)>,
    rows: Row,
    columns: Column,
}

impl<T> TripletMatrix<T> {
    /**
     * Creates a triplet matrix of the provided size with no entries stored.
     */
    pub fn new(size: (Row, Column)) -> TripletMatrix<T> {
        TripletMatrix {
            entries: Vec::new(),
            rows: size.0,
            columns: size.1,
        }
    }

    /**
     * Creates a triplet matrix of the provided size from a list of `((row, column), value)`
     * entries. If an index appears more than once the last value for it is kept.
     *
     * Returns an error if any entry lies outside the size.
     */
    pub fn try_from_triplets(
        size: (Row, Column),
        entries: Vec<((Row, Column), T)>,
    ) -> Result<TripletMatrix<T>, IndexOutOfBoundsError> {
        let mut matrix = TripletMatrix::new(size);
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
        (self.rows, self.columns)
    }

    /**
     * The number of entries currently stored.
     */
    pub fn stored(&self) -> usize {
        self.entries.len()
    }

    fn insert(&mut self, row: Row, column: Column, value: T) {
        match self.find(row, column) {
            Some(index) => self.entries[index].1 = value,
            None => self.entries.push(((row, column), value)),
        }
    }

    fn find(&self, row: Row, column: Column) -> Option<usize> {
        self.entries
            .iter()
            .position(|(index, _)| *index == (row, column))
    }
}

impl<T> MatrixRef<T> for TripletMatrix<T> {
    fn try_get_reference(&self, row: Row, column: Column) -> Option<&T> {
        let index = self.find(row, column)?;
        Some(&self.entries[index].1)
    }

    fn view_rows(&self) -> Row {
        self.rows
    }

    fn view_columns(&self) -> Column {
        self.columns
    }
}

impl<T> MatrixMut<T> for TripletMatrix<T> {
    fn try_get_reference_mut(&mut self, row: Row, column: Column) -> Option<&mut T> {
        let index = self.find(row, column)?;
        Some(&mut self.entries[index].1)
    }

    /**
     * Stores the value at this row and column, replacing any value already there.
     *
     * Panics if the index is outside the matrix.
     */
    #[track_caller]
    fn set(&mut self, row: Row, column: Column, value: T) {
        assert!(row < self.rows, "Row out of index");
        assert!(column < self.columns, "Column out of index");
        self.insert(row, column, value);
    }

    fn erase(&mut self, row: Row, column: Column) {
        if let Some(index) = self.find(row, column) {
            self.entries.swap_remove(index);
        }
    }
}

/**
 * A TripletMatrix iterates its raw entries in the order they are stored, which is insertion
 * order until an entry is erased.
 */
impl<T> RawIterable<T> for TripletMatrix<T> {
    type RawIter<'a>
        = TripletValues<'a, T>
    where
        Self: 'a,
        T: 'a;

    type RawIndexedIter<'a>
        = TripletEntries<'a, T>
    where
        Self: 'a,
        T: 'a;

    fn raw_reference_iter<'a>(&'a self) -> Self::RawIter<'a>
    where
        T: 'a,
    {
        TripletValues {
            entries: self.entries.iter(),
        }
    }

    fn raw_indexed_reference_iter<'a>(&'a self) -> Self::RawIndexedIter<'a>
    where
        T: 'a,
    {
        TripletEntries {
            entries: self.entries.iter(),
        }
    }
}

impl<T> RawIterableMut<T> for TripletMatrix<T> {
    type RawIterMut<'a>
        = TripletValuesMut<'a, T>
    where
        Self: 'a,
        T: 'a;

    fn raw_reference_mut_iter<'a>(&'a mut self) -> Self::RawIterMut<'a>
    where
        T: 'a,
    {
        TripletValuesMut {
            entries: self.entries.iter_mut(),
        }
    }
}

impl<T> MatrixCategory for TripletMatrix<T> {
    type Category = Generic;
}

/**
 * An iterator over every stored entry in a [TripletMatrix] along with its row and column.
 */
#[derive(Debug)]
pub struct TripletEntries<'a, T> {
    entries: std::slice::Iter<'a, ((Row, Column), T)>,
}

impl<'a, T> Iterator for TripletEntries<'a, T> {
    type Item = ((Row, Column), &'a T);

    fn next(&mut self) -> Option<Self::Item> {
        self.entries.next().map(|(index, value)| (*index, value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.entries.size_hint()
    }
}

impl<'a, T> FusedIterator for TripletEntries<'a, T> {}
impl<'a, T> ExactSizeIterator for TripletEntries<'a, T> {}

/**
 * An iterator over every stored value in a [TripletMatrix].
 */
#[derive(Debug)]
pub struct TripletValues<'a, T> {
    entries: std::slice::Iter<'a, ((Row, Column), T)>,
}

impl<'a, T> Iterator for TripletValues<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.entries.next().map(|(_, value)| value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.entries.size_hint()
    }
}

impl<'a, T> FusedIterator for TripletValues<'a, T> {}
impl<'a, T> ExactSizeIterator for TripletValues<'a, T> {}

/**
 * An iterator over mutable references to every stored value in a [TripletMatrix].
 */
#[derive(Debug)]
pub struct TripletValuesMut<'a, T> {
    entries: std::slice::IterMut<'a, ((Row, Column), T)>,
}

impl<'a, T> Iterator for TripletValuesMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<Self::Item> {
        self.entries.next().map(|(_, value)| value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.entries.size_hint()
    }
}

impl<'a, T> FusedIterator for TripletValuesMut<'a, T> {}
impl<'a, T> ExactSizeIterator for TripletValuesMut<'a, T> {}

#[test]
fn test_triplets_overwrite_repeated_indexes() {
    let matrix =
        TripletMatrix::try_from_triplets((2, 3), vec![((1, 2), 'x'), ((0, 0), 'y'), ((1, 2), 'z')])
            .unwrap();
    assert_eq!(matrix.stored(), 2);
    assert_eq!(matrix.try_get_reference(1, 2), Some(&'z'));
}

#[test]
fn test_erase_absent_entry_is_a_no_op() {
    let mut matrix = TripletMatrix::new((3, 3));
    matrix.set(2, 2, 7);
    matrix.erase(0, 0);
    assert_eq!(matrix.stored(), 1);
    matrix.erase(2, 2);
    assert_eq!(matrix.stored(), 0);
    assert_eq!(matrix.try_get_reference(2, 2), None);
}
