/*!
 * Trait implementations for [MatrixRef], [MatrixMut] and the iteration traits.
 *
 * These implementations are written here but Rust docs will display them on the
 * traits' pages.
 *
 * An owned or referenced [Matrix] is a MatrixRef, and a MatrixMut if not a shared
 * reference. Therefore, you can pass a Matrix to any function which takes a MatrixRef.
 *
 * More generally, a shared reference to anything implementing one of the traits implements
 * it too, as does an exclusive reference for the traits that do not need mutability, and an
 * exclusive reference to a MatrixMut is a MatrixMut. This is what lets a
 * [MatrixTranspose](crate::matrices::views::MatrixTranspose) be built over `&matrix` or
 * `&mut matrix` and still forward every capability the matrix has.
 */

use crate::matrices::iterators::{
    ColumnReferenceIterator, RowMajorIndexedReferenceIterator, RowReferenceIterator,
};
use crate::matrices::views::{
    ColumnIterable, MatrixCategory, MatrixMut, MatrixRef, RawIterable, RawIterableMut,
    RowIterable, RowsAndColumns,
};
use crate::matrices::{Column, Matrix, Row};

/**
 * A shared reference to a MatrixRef implements MatrixRef.
 */
impl<'source, T, M> MatrixRef<T> for &'source M
where
    M: MatrixRef<T>,
{
    fn try_get_reference(&self, row: Row, column: Column) -> Option<&T> {
        M::try_get_reference(self, row, column)
    }

    fn view_rows(&self) -> Row {
        M::view_rows(self)
    }

    fn view_columns(&self) -> Column {
        M::view_columns(self)
    }

    fn get_entry(&self, x: &mut T, row: Row, column: Column) -> bool
    where
        T: Clone,
    {
        M::get_entry(self, x, row, column)
    }
}

/**
 * An exclusive reference to a MatrixRef implements MatrixRef.
 */
impl<'source, T, M> MatrixRef<T> for &'source mut M
where
    M: MatrixRef<T>,
{
    fn try_get_reference(&self, row: Row, column: Column) -> Option<&T> {
        M::try_get_reference(self, row, column)
    }

    fn view_rows(&self) -> Row {
        M::view_rows(self)
    }

    fn view_columns(&self) -> Column {
        M::view_columns(self)
    }

    fn get_entry(&self, x: &mut T, row: Row, column: Column) -> bool
    where
        T: Clone,
    {
        M::get_entry(self, x, row, column)
    }
}

/**
 * An exclusive reference to a MatrixMut implements MatrixMut.
 */
impl<'source, T, M> MatrixMut<T> for &'source mut M
where
    M: MatrixMut<T>,
{
    fn try_get_reference_mut(&mut self, row: Row, column: Column) -> Option<&mut T> {
        M::try_get_reference_mut(self, row, column)
    }

    fn set(&mut self, row: Row, column: Column, value: T) {
        M::set(self, row, column, value)
    }

    fn erase(&mut self, row: Row, column: Column) {
        M::erase(self, row, column)
    }
}

impl<'source, T, M> RowIterable<T> for &'source M
where
    M: RowIterable<T>,
{
    type RowIter<'a>
        = M::RowIter<'a>
    where
        Self: 'a,
        T: 'a;

    fn row_reference_iter<'a>(&'a self, row: Row) -> Self::RowIter<'a>
    where
        T: 'a,
    {
        M::row_reference_iter(self, row)
    }
}

impl<'source, T, M> RowIterable<T> for &'source mut M
where
    M: RowIterable<T>,
{
    type RowIter<'a>
        = M::RowIter<'a>
    where
        Self: 'a,
        T: 'a;

    fn row_reference_iter<'a>(&'a self, row: Row) -> Self::RowIter<'a>
    where
        T: 'a,
    {
        M::row_reference_iter(self, row)
    }
}

impl<'source, T, M> ColumnIterable<T> for &'source M
where
    M: ColumnIterable<T>,
{
    type ColumnIter<'a>
        = M::ColumnIter<'a>
    where
        Self: 'a,
        T: 'a;

    fn column_reference_iter<'a>(&'a self, column: Column) -> Self::ColumnIter<'a>
    where
        T: 'a,
    {
        M::column_reference_iter(self, column)
    }
}

impl<'source, T, M> ColumnIterable<T> for &'source mut M
where
    M: ColumnIterable<T>,
{
    type ColumnIter<'a>
        = M::ColumnIter<'a>
    where
        Self: 'a,
        T: 'a;

    fn column_reference_iter<'a>(&'a self, column: Column) -> Self::ColumnIter<'a>
    where
        T: 'a,
    {
        M::column_reference_iter(self, column)
    }
}

impl<'source, T, M> RawIterable<T> for &'source M
where
    M: RawIterable<T>,
{
    type RawIter<'a>
        = M::RawIter<'a>
    where
        Self: 'a,
        T: 'a;

    type RawIndexedIter<'a>
        = M::RawIndexedIter<'a>
    where
        Self: 'a,
        T: 'a;

    fn raw_reference_iter<'a>(&'a self) -> Self::RawIter<'a>
    where
        T: 'a,
    {
        M::raw_reference_iter(self)
    }

    fn raw_indexed_reference_iter<'a>(&'a self) -> Self::RawIndexedIter<'a>
    where
        T: 'a,
    {
        M::raw_indexed_reference_iter(self)
    }
}

impl<'source, T, M> RawIterable<T> for &'source mut M
where
    M: RawIterable<T>,
{
    type RawIter<'a>
        = M::RawIter<'a>
    where
        Self: 'a,
        T: 'a;

    type RawIndexedIter<'a>
        = M::RawIndexedIter<'a>
    where
        Self: 'a,
        T: 'a;

    fn raw_reference_iter<'a>(&'a self) -> Self::RawIter<'a>
    where
        T: 'a,
    {
        M::raw_reference_iter(self)
    }

    fn raw_indexed_reference_iter<'a>(&'a self) -> Self::RawIndexedIter<'a>
    where
        T: 'a,
    {
        M::raw_indexed_reference_iter(self)
    }
}

impl<'source, T, M> RawIterableMut<T> for &'source mut M
where
    M: RawIterableMut<T>,
{
    type RawIterMut<'a>
        = M::RawIterMut<'a>
    where
        Self: 'a,
        T: 'a;

    fn raw_reference_mut_iter<'a>(&'a mut self) -> Self::RawIterMut<'a>
    where
        T: 'a,
    {
        M::raw_reference_mut_iter(self)
    }
}

impl<'source, M> MatrixCategory for &'source M
where
    M: MatrixCategory,
{
    type Category = M::Category;
}

impl<'source, M> MatrixCategory for &'source mut M
where
    M: MatrixCategory,
{
    type Category = M::Category;
}

/**
 * An owned Matrix implements MatrixRef.
 */
impl<T> MatrixRef<T> for Matrix<T> {
    fn try_get_reference(&self, row: Row, column: Column) -> Option<&T> {
        Matrix::_try_get_reference(self, row, column)
    }

    fn view_rows(&self) -> Row {
        Matrix::rows(self)
    }

    fn view_columns(&self) -> Column {
        Matrix::columns(self)
    }
}

/**
 * An owned Matrix implements MatrixMut. Every entry of a Matrix is always stored, so
 * [erase](MatrixMut::erase) does nothing.
 */
impl<T> MatrixMut<T> for Matrix<T> {
    fn try_get_reference_mut(&mut self, row: Row, column: Column) -> Option<&mut T> {
        Matrix::_try_get_reference_mut(self, row, column)
    }

    fn set(&mut self, row: Row, column: Column, value: T) {
        Matrix::set(self, row, column, value)
    }
}

impl<T> RowIterable<T> for Matrix<T> {
    type RowIter<'a>
        = RowReferenceIterator<'a, T>
    where
        Self: 'a,
        T: 'a;

    fn row_reference_iter<'a>(&'a self, row: Row) -> Self::RowIter<'a>
    where
        T: 'a,
    {
        RowReferenceIterator::new(self, row)
    }
}

impl<T> ColumnIterable<T> for Matrix<T> {
    type ColumnIter<'a>
        = ColumnReferenceIterator<'a, T>
    where
        Self: 'a,
        T: 'a;

    fn column_reference_iter<'a>(&'a self, column: Column) -> Self::ColumnIter<'a>
    where
        T: 'a,
    {
        ColumnReferenceIterator::new(self, column)
    }
}

/**
 * A Matrix iterates its raw entries in row major order.
 */
impl<T> RawIterable<T> for Matrix<T> {
    type RawIter<'a>
        = std::slice::Iter<'a, T>
    where
        Self: 'a,
        T: 'a;

    type RawIndexedIter<'a>
        = RowMajorIndexedReferenceIterator<'a, T>
    where
        Self: 'a,
        T: 'a;

    fn raw_reference_iter<'a>(&'a self) -> Self::RawIter<'a>
    where
        T: 'a,
    {
        self.data.iter()
    }

    fn raw_indexed_reference_iter<'a>(&'a self) -> Self::RawIndexedIter<'a>
    where
        T: 'a,
    {
        RowMajorIndexedReferenceIterator::new(self)
    }
}

impl<T> RawIterableMut<T> for Matrix<T> {
    type RawIterMut<'a>
        = std::slice::IterMut<'a, T>
    where
        Self: 'a,
        T: 'a;

    fn raw_reference_mut_iter<'a>(&'a mut self) -> Self::RawIterMut<'a>
    where
        T: 'a,
    {
        self.data.iter_mut()
    }
}

impl<T> MatrixCategory for Matrix<T> {
    type Category = RowsAndColumns;
}

#[test]
fn test_references_forward_to_the_matrix() {
    let mut matrix = Matrix::from(vec![vec![1, 2], vec![3, 4]]);
    {
        let shared = &matrix;
        assert_eq!(MatrixRef::view_size(&shared), (2, 2));
        let column: Vec<_> = ColumnIterable::column_reference_iter(&shared, 1)
            .map(|(row, x)| (row, *x))
            .collect();
        assert_eq!(column, vec![(0, 2), (1, 4)]);
    }
    {
        let mut exclusive = &mut matrix;
        MatrixMut::set(&mut exclusive, 0, 1, 9);
        MatrixMut::erase(&mut exclusive, 0, 1);
        RawIterableMut::raw_reference_mut_iter(&mut exclusive).for_each(|x| *x *= 10);
    }
    assert_eq!(matrix, Matrix::from(vec![vec![10, 90], vec![30, 40]]));
}
