use std::iter::{ExactSizeIterator, FusedIterator};
use std::marker::PhantomData;

use crate::matrices::views::{ColumnIterable, RowIterable};
use crate::matrices::{Column, Row};

/**
 * An iterator over every row of a matrix, yielding each row's
 * [RowIter](RowIterable::RowIter) in ascending row order.
 *
 * For a 2x2 matrix such as `[ 1, 2; 3, 4]`: ie
 * ```ignore
 * [
 *   1, 2
 *   3, 4
 * ]
 * ```
 * The rows will be iterated through as 1, 2 then 3, 4.
 */
#[derive(Debug)]
pub struct Rows<'a, T, M> {
    matrix: &'a M,
    row: Row,
    rows: Row,
    _type: PhantomData<&'a T>,
}

impl<'a, T, M> Rows<'a, T, M>
where
    M: RowIterable<T>,
{
    /**
     * Constructs an iterator over every row of this matrix.
     */
    pub fn from(matrix: &'a M) -> Rows<'a, T, M> {
        Rows {
            matrix,
            row: 0,
            rows: matrix.view_rows(),
            _type: PhantomData,
        }
    }
}

impl<'a, T, M> Iterator for Rows<'a, T, M>
where
    M: RowIterable<T>,
{
    type Item = M::RowIter<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.row >= self.rows {
            return None;
        }
        let row = M::row_reference_iter(self.matrix, self.row);
        self.row += 1;
        Some(row)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.rows - self.row;
        (remaining, Some(remaining))
    }
}

impl<'a, T, M> FusedIterator for Rows<'a, T, M> where M: RowIterable<T> {}
impl<'a, T, M> ExactSizeIterator for Rows<'a, T, M> where M: RowIterable<T> {}

/**
 * An iterator over every column of a matrix, yielding each column's
 * [ColumnIter](ColumnIterable::ColumnIter) in ascending column order.
 *
 * For a 2x2 matrix such as `[ 1, 2; 3, 4]`: ie
 * ```ignore
 * [
 *   1, 2
 *   3, 4
 * ]
 * ```
 * The columns will be iterated through as 1, 3 then 2, 4.
 */
#[derive(Debug)]
pub struct Columns<'a, T, M> {
    matrix: &'a M,
    column: Column,
    columns: Column,
    _type: PhantomData<&'a T>,
}

impl<'a, T, M> Columns<'a, T, M>
where
    M: ColumnIterable<T>,
{
    /**
     * Constructs an iterator over every column of this matrix.
     */
    pub fn from(matrix: &'a M) -> Columns<'a, T, M> {
        Columns {
            matrix,
            column: 0,
            columns: matrix.view_columns(),
            _type: PhantomData,
        }
    }
}

impl<'a, T, M> Iterator for Columns<'a, T, M>
where
    M: ColumnIterable<T>,
{
    type Item = M::ColumnIter<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.column >= self.columns {
            return None;
        }
        let column = M::column_reference_iter(self.matrix, self.column);
        self.column += 1;
        Some(column)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.columns - self.column;
        (remaining, Some(remaining))
    }
}

impl<'a, T, M> FusedIterator for Columns<'a, T, M> where M: ColumnIterable<T> {}
impl<'a, T, M> ExactSizeIterator for Columns<'a, T, M> where M: ColumnIterable<T> {}

/**
 * An iterator adapter over `((row, column), value)` entries which swaps every row and column,
 * yielding `((column, row), value)` in the same order as the iterator it wraps.
 */
#[derive(Clone, Debug)]
pub struct TransposedIndexes<I> {
    iterator: I,
}

impl<I> TransposedIndexes<I> {
    /**
     * Wraps an iterator over `((row, column), value)` entries so each position is reported
     * swapped.
     */
    pub fn from(iterator: I) -> TransposedIndexes<I> {
        TransposedIndexes { iterator }
    }
}

impl<I, V> Iterator for TransposedIndexes<I>
where
    I: Iterator<Item = ((Row, Column), V)>,
{
    type Item = ((Row, Column), V);

    fn next(&mut self) -> Option<Self::Item> {
        self.iterator
            .next()
            .map(|((row, column), value)| ((column, row), value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iterator.size_hint()
    }
}

impl<I, V> FusedIterator for TransposedIndexes<I>
where
    I: FusedIterator<Item = ((Row, Column), V)>,
{
}

impl<I, V> ExactSizeIterator for TransposedIndexes<I>
where
    I: ExactSizeIterator<Item = ((Row, Column), V)>,
{
}

#[test]
fn test_transposed_indexes_swaps_positions() {
    let entries = vec![((0, 1), 'a'), ((2, 0), 'b'), ((1, 1), 'c')];
    let swapped: Vec<_> = TransposedIndexes::from(entries.into_iter()).collect();
    assert_eq!(swapped, vec![((1, 0), 'a'), ((0, 2), 'b'), ((1, 1), 'c')]);
}
