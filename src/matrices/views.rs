/*!
 * Generic views into a matrix.
 *
 * The traits in this module describe what a matrix type can do. Every matrix can report its
 * size and look up entries through [MatrixRef], and mutable ones can also write and erase
 * entries through [MatrixMut]. Iteration is split into separate capabilities, since a matrix
 * stored by rows usually cannot walk its columns without scanning everything:
 *
 * - [RowIterable]: one ordered sequence per row
 * - [ColumnIterable]: one ordered sequence per column
 * - [RawIterable]: every stored entry in some unspecified order, with or without its position
 * - [RawIterableMut]: every stored entry mutably, in some unspecified order
 *
 * Which of the row and column capabilities a matrix type provides is declared statically with
 * [MatrixCategory], and [MatrixTranspose] uses that declaration to provide exactly the dual set.
 *
 * All of these traits are implemented for shared references to types that implement them, and
 * the ones that do not need mutability are also implemented for exclusive references, so any
 * function taking `S: MatrixRef<T>` accepts both `&matrix` and `&mut matrix`.
 */

use crate::matrices::{Column, Row};

mod category;
mod iterators;
mod traits;
mod transpose;

pub use category::*;
pub use iterators::*;
pub use transpose::*;

/**
 * A shared/immutable reference to a matrix of some type.
 *
 * # Indexing
 *
 * Valid indexes into a MatrixRef range from 0 inclusive to `view_rows` exclusive for rows and
 * from 0 inclusive to `view_columns` exclusive for columns. What happens outside that range is
 * up to the implementation, for the matrices in this crate `try_get_reference` simply returns
 * None.
 *
 * # Absence
 *
 * A sparse matrix does not store every entry. `try_get_reference` returns None for an entry
 * which is not stored, even if its index is valid.
 */
pub trait MatrixRef<T> {
    /**
     * Gets a reference to the value at the index if the entry is stored. Otherwise returns
     * None.
     */
    fn try_get_reference(&self, row: Row, column: Column) -> Option<&T>;

    /**
     * The number of rows that this reference can view.
     */
    fn view_rows(&self) -> Row;

    /**
     * The number of columns that this reference can view.
     */
    fn view_columns(&self) -> Column;

    /**
     * The size of the matrix that this reference can view.
     */
    fn view_size(&self) -> (Row, Column) {
        (self.view_rows(), self.view_columns())
    }

    /**
     * Copies the value at the index into `x` and returns true if the entry is stored.
     * Otherwise returns false and leaves `x` unchanged.
     *
     * ```
     * use easy_transpose::matrices::SparseMatrix;
     * use easy_transpose::matrices::views::{MatrixMut, MatrixRef};
     * let mut matrix = SparseMatrix::new((3, 3));
     * matrix.set(2, 2, 7);
     * let mut x = 0;
     * assert!(matrix.get_entry(&mut x, 2, 2));
     * assert_eq!(x, 7);
     * x = -1;
     * assert!(!matrix.get_entry(&mut x, 0, 0));
     * assert_eq!(x, -1);
     * ```
     */
    fn get_entry(&self, x: &mut T, row: Row, column: Column) -> bool
    where
        T: Clone,
    {
        match self.try_get_reference(row, column) {
            Some(value) => {
                x.clone_from(value);
                true
            }
            None => false,
        }
    }
}

/**
 * A unique/mutable reference to a matrix of some type.
 */
pub trait MatrixMut<T>: MatrixRef<T> {
    /**
     * Gets a mutable reference to the value at the index, if the entry is stored. Otherwise
     * returns None.
     */
    fn try_get_reference_mut(&mut self, row: Row, column: Column) -> Option<&mut T>;

    /**
     * Sets the entry at the index to a new value, storing it if it was not already stored.
     *
     * The behaviour for an index outside the matrix is up to the implementation. The matrices
     * in this crate panic.
     */
    fn set(&mut self, row: Row, column: Column, value: T);

    /**
     * Removes the entry at the index from the matrix. If the entry is not stored, or the
     * matrix is dense and cannot remove entries at all, this does nothing.
     */
    fn erase(&mut self, _row: Row, _column: Column) {}
}

/**
 * A matrix which can iterate through each of its rows in order.
 *
 * Each row yields its stored entries in ascending column order, as pairs of the column the
 * entry is in and a reference to its value. A dense matrix yields every column, a sparse one
 * only the columns it stores.
 */
pub trait RowIterable<T>: MatrixRef<T> {
    /**
     * The iterator over a single row.
     */
    type RowIter<'a>: Iterator<Item = (Column, &'a T)>
    where
        Self: 'a,
        T: 'a;

    /**
     * Returns an iterator over the entries in a row, in ascending column order.
     */
    fn row_reference_iter<'a>(&'a self, row: Row) -> Self::RowIter<'a>
    where
        T: 'a;

    /**
     * Returns an iterator over every row of the matrix, in ascending row order.
     */
    fn iter_rows(&self) -> Rows<'_, T, Self>
    where
        Self: Sized,
    {
        Rows::from(self)
    }
}

/**
 * A matrix which can iterate through each of its columns in order.
 *
 * Each column yields its stored entries in ascending row order, as pairs of the row the
 * entry is in and a reference to its value.
 */
pub trait ColumnIterable<T>: MatrixRef<T> {
    /**
     * The iterator over a single column.
     */
    type ColumnIter<'a>: Iterator<Item = (Row, &'a T)>
    where
        Self: 'a,
        T: 'a;

    /**
     * Returns an iterator over the entries in a column, in ascending row order.
     */
    fn column_reference_iter<'a>(&'a self, column: Column) -> Self::ColumnIter<'a>
    where
        T: 'a;

    /**
     * Returns an iterator over every column of the matrix, in ascending column order.
     */
    fn iter_columns(&self) -> Columns<'_, T, Self>
    where
        Self: Sized,
    {
        Columns::from(self)
    }
}

/**
 * A matrix which can iterate through all of its stored entries in some unspecified order.
 *
 * This is intended for bulk operations which do not care about position, such as checking
 * every value satisfies some property.
 */
pub trait RawIterable<T>: MatrixRef<T> {
    /**
     * The iterator over every stored value.
     */
    type RawIter<'a>: Iterator<Item = &'a T>
    where
        Self: 'a,
        T: 'a;

    /**
     * The iterator over every stored value along with its row and column.
     */
    type RawIndexedIter<'a>: Iterator<Item = ((Row, Column), &'a T)>
    where
        Self: 'a,
        T: 'a;

    /**
     * Returns an iterator over every stored value.
     */
    fn raw_reference_iter<'a>(&'a self) -> Self::RawIter<'a>
    where
        T: 'a;

    /**
     * Returns an iterator over every stored value along with its row and column. The order
     * of iteration is the same as for [raw_reference_iter](RawIterable::raw_reference_iter).
     */
    fn raw_indexed_reference_iter<'a>(&'a self) -> Self::RawIndexedIter<'a>
    where
        T: 'a;
}

/**
 * A matrix which can mutably iterate through all of its stored entries in some unspecified
 * order.
 */
pub trait RawIterableMut<T>: RawIterable<T> + MatrixMut<T> {
    /**
     * The iterator over every stored value.
     */
    type RawIterMut<'a>: Iterator<Item = &'a mut T>
    where
        Self: 'a,
        T: 'a;

    /**
     * Returns an iterator over mutable references to every stored value.
     *
     * ```
     * use easy_transpose::matrices::Matrix;
     * use easy_transpose::matrices::views::RawIterableMut;
     * let mut matrix = Matrix::from(vec![ vec![ 1, 2 ], vec![ 3, 4 ] ]);
     * matrix.raw_reference_mut_iter().for_each(|x| *x %= 3);
     * assert_eq!(matrix, Matrix::from(vec![ vec![ 1, 2 ], vec![ 0, 1 ] ]));
     * ```
     */
    fn raw_reference_mut_iter<'a>(&'a mut self) -> Self::RawIterMut<'a>
    where
        T: 'a;
}

/**
 * Checks two matrices have the same size and, at every index, either both store an equal value
 * or both store nothing.
 */
pub(crate) fn matrix_equality<T, S1, S2>(left: &S1, right: &S2) -> bool
where
    T: PartialEq,
    S1: MatrixRef<T>,
    S2: MatrixRef<T>,
{
    if left.view_size() != right.view_size() {
        return false;
    }
    let (rows, columns) = left.view_size();
    (0..rows).all(|row| {
        (0..columns).all(|column| {
            left.try_get_reference(row, column) == right.try_get_reference(row, column)
        })
    })
}
