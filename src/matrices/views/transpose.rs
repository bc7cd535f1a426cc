use std::fmt;
use std::marker::PhantomData;

use crate::matrices::views::{
    matrix_equality, IterationCategory, MatrixCategory, MatrixMut, MatrixRef, RawIterable,
    RawIterableMut, TransposedIndexes,
};
use crate::matrices::{Column, Matrix, Row};

mod columns_only;
mod generic;
mod rows_and_columns;
mod rows_only;

/**
 * A view over a matrix with its rows and columns swapped, so the entry at `(i, j)` in the view
 * is the entry at `(j, i)` in the source.
 *
 * The view holds only a reference to its source, `S` is always `&M` or `&mut M`, and every
 * operation is forwarded straight to the source with the indexes exchanged. Nothing is
 * copied or cached, so the size of the view always reflects the current size of the source,
 * and writes through a view over `&mut M` mutate the source in place.
 *
 * ```
 * use easy_transpose::matrices::Matrix;
 * use easy_transpose::matrices::views::{MatrixMut, MatrixRef, MatrixTranspose};
 * let mut matrix = Matrix::from(vec![
 *     vec![ 1, 2, 3 ],
 *     vec![ 4, 5, 6 ]
 * ]);
 * let mut transposed = MatrixTranspose::from_mut(&mut matrix);
 * assert_eq!(transposed.view_size(), (3, 2));
 * transposed.set(2, 0, 30);
 * assert_eq!(matrix.get(0, 2), 30);
 * ```
 *
 * # Capabilities
 *
 * `C` is the [category](crate::matrices::views::IterationCategory) the source declared through
 * [MatrixCategory], and it decides which line iteration the view has:
 *
 * - over a [RowsAndColumns](crate::matrices::views::RowsAndColumns) source the view iterates
 * both rows and columns
 * - over a [RowsOnly](crate::matrices::views::RowsOnly) source the view iterates only columns,
 * each column of the view being a row of the source
 * - over a [ColumnsOnly](crate::matrices::views::ColumnsOnly) source the view iterates only
 * rows, each row of the view being a column of the source
 * - over a [Generic](crate::matrices::views::Generic) source the view iterates rows if the
 * source iterates columns, and columns if the source iterates rows
 *
 * Raw iteration is available whenever the source has it, with indexed raw iteration reporting
 * swapped positions. Writing is only available on a view over `&mut M`.
 *
 * Iteration the view cannot forward is simply not implemented, so trying to use it fails to
 * compile rather than falling back to something slow.
 *
 * ```compile_fail
 * use easy_transpose::matrices::SparseMatrix;
 * use easy_transpose::matrices::views::{transpose, RowIterable};
 * let matrix: SparseMatrix<f32> = SparseMatrix::new((2, 2));
 * // The rows of the transpose would be the columns of the SparseMatrix, which it can't iterate
 * transpose(&matrix).row_reference_iter(0);
 * ```
 *
 * ```compile_fail
 * use easy_transpose::matrices::Matrix;
 * use easy_transpose::matrices::views::{transpose, MatrixMut};
 * let matrix = Matrix::from(vec![ vec![ 1, 2 ] ]);
 * // A view over a shared reference has no way to write
 * transpose(&matrix).set(0, 0, 3);
 * ```
 *
 * ```compile_fail
 * use easy_transpose::matrices::SparseMatrix;
 * use easy_transpose::matrices::views::{transpose, ColumnIterable};
 * let matrix: SparseMatrix<f32> = SparseMatrix::new((2, 2));
 * let transposed = transpose(&matrix);
 * // Transposing again gives back the rows of the SparseMatrix, but never its columns
 * transpose(&transposed).column_reference_iter(0);
 * ```
 *
 * ```compile_fail
 * use easy_transpose::matrices::TripletMatrix;
 * use easy_transpose::matrices::views::{transpose, RowIterable};
 * let matrix: TripletMatrix<i32> = TripletMatrix::new((1, 1));
 * // A TripletMatrix has neither rows nor columns to iterate, so neither does its transpose
 * transpose(&matrix).row_reference_iter(0);
 * ```
 *
 * ```compile_fail
 * use easy_transpose::matrices::TripletMatrix;
 * use easy_transpose::matrices::views::{transpose, ColumnIterable};
 * let matrix: TripletMatrix<i32> = TripletMatrix::new((1, 1));
 * transpose(&matrix).column_reference_iter(0);
 * ```
 *
 * # Lifetime
 *
 * The view borrows its source, so the source cannot be resized, moved or dropped while the
 * view exists. A view can be transposed again, giving a view with the source's own layout.
 */
pub struct MatrixTranspose<T, S, C> {
    source: S,
    _type: PhantomData<T>,
    _category: PhantomData<C>,
}

impl<'source, T, M, C> MatrixTranspose<T, &'source M, C>
where
    M: MatrixRef<T> + MatrixCategory<Category = C>,
    C: IterationCategory,
{
    /**
     * Creates a read only transposed view over a matrix.
     */
    pub fn from(source: &'source M) -> MatrixTranspose<T, &'source M, C> {
        MatrixTranspose {
            source,
            _type: PhantomData,
            _category: PhantomData,
        }
    }
}

impl<'source, T, M, C> MatrixTranspose<T, &'source mut M, C>
where
    M: MatrixMut<T> + MatrixCategory<Category = C>,
    C: IterationCategory,
{
    /**
     * Creates a transposed view over a matrix which can also write to it.
     */
    pub fn from_mut(source: &'source mut M) -> MatrixTranspose<T, &'source mut M, C> {
        MatrixTranspose {
            source,
            _type: PhantomData,
            _category: PhantomData,
        }
    }
}

impl<T, S, C> MatrixTranspose<T, S, C> {
    /**
     * Consumes the MatrixTranspose, yielding the reference to the source it was created from.
     */
    pub fn source(self) -> S {
        self.source
    }

    /**
     * Gives a reference to the MatrixTranspose's source (in which the rows and columns are
     * not swapped).
     */
    pub fn source_ref(&self) -> &S {
        &self.source
    }
}

/**
 * Creates a read only transposed view over a matrix, resolving the category of the view from
 * the matrix type.
 *
 * ```
 * use easy_transpose::matrices::Matrix;
 * use easy_transpose::matrices::views::{transpose, MatrixRef, RowIterable};
 * let matrix = Matrix::from(vec![
 *     vec![ 1, 2, 3 ],
 *     vec![ 4, 5, 6 ]
 * ]);
 * let transposed = transpose(&matrix);
 * assert_eq!(transposed.view_size(), (3, 2));
 * let rows: Vec<Vec<i32>> = transposed
 *     .iter_rows()
 *     .map(|row| row.map(|(_, x)| *x).collect())
 *     .collect();
 * assert_eq!(rows, vec![ vec![ 1, 4 ], vec![ 2, 5 ], vec![ 3, 6 ] ]);
 * ```
 */
pub fn transpose<T, M>(matrix: &M) -> MatrixTranspose<T, &M, M::Category>
where
    M: MatrixRef<T> + MatrixCategory,
{
    MatrixTranspose::from(matrix)
}

/**
 * Creates a transposed view over a matrix which can also write to it, resolving the category
 * of the view from the matrix type.
 */
pub fn transpose_mut<T, M>(matrix: &mut M) -> MatrixTranspose<T, &mut M, M::Category>
where
    M: MatrixMut<T> + MatrixCategory,
{
    MatrixTranspose::from_mut(matrix)
}

impl<T, S, C> Clone for MatrixTranspose<T, S, C>
where
    S: Clone,
{
    fn clone(&self) -> Self {
        MatrixTranspose {
            source: self.source.clone(),
            _type: PhantomData,
            _category: PhantomData,
        }
    }
}

/**
 * A read only MatrixTranspose is Copy, copying it only copies the reference to the source.
 */
impl<T, S, C> Copy for MatrixTranspose<T, S, C> where S: Copy {}

impl<T, S, C> fmt::Debug for MatrixTranspose<T, S, C>
where
    S: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MatrixTranspose")
            .field("source", &self.source)
            .finish()
    }
}

/**
 * A MatrixTranspose implements MatrixRef, with the row and column of every index swapped
 * before being passed to the source.
 */
impl<T, S, C> MatrixRef<T> for MatrixTranspose<T, S, C>
where
    S: MatrixRef<T>,
{
    fn try_get_reference(&self, row: Row, column: Column) -> Option<&T> {
        self.source.try_get_reference(column, row)
    }

    fn view_rows(&self) -> Row {
        self.source.view_columns()
    }

    fn view_columns(&self) -> Column {
        self.source.view_rows()
    }

    fn get_entry(&self, x: &mut T, row: Row, column: Column) -> bool
    where
        T: Clone,
    {
        self.source.get_entry(x, column, row)
    }
}

/**
 * A MatrixTranspose over a MatrixMut implements MatrixMut, with the row and column of every
 * index swapped before being passed to the source.
 */
impl<T, S, C> MatrixMut<T> for MatrixTranspose<T, S, C>
where
    S: MatrixMut<T>,
{
    fn try_get_reference_mut(&mut self, row: Row, column: Column) -> Option<&mut T> {
        self.source.try_get_reference_mut(column, row)
    }

    fn set(&mut self, row: Row, column: Column, value: T) {
        self.source.set(column, row, value)
    }

    fn erase(&mut self, row: Row, column: Column) {
        self.source.erase(column, row)
    }
}

/**
 * A MatrixTranspose iterates the same raw values as its source in the same order, and reports
 * the row and column of each one swapped.
 */
impl<T, S, C> RawIterable<T> for MatrixTranspose<T, S, C>
where
    S: RawIterable<T>,
{
    type RawIter<'a>
        = S::RawIter<'a>
    where
        Self: 'a,
        T: 'a;

    type RawIndexedIter<'a>
        = TransposedIndexes<S::RawIndexedIter<'a>>
    where
        Self: 'a,
        T: 'a;

    fn raw_reference_iter<'a>(&'a self) -> Self::RawIter<'a>
    where
        T: 'a,
    {
        self.source.raw_reference_iter()
    }

    fn raw_indexed_reference_iter<'a>(&'a self) -> Self::RawIndexedIter<'a>
    where
        T: 'a,
    {
        TransposedIndexes::from(self.source.raw_indexed_reference_iter())
    }
}

impl<T, S, C> RawIterableMut<T> for MatrixTranspose<T, S, C>
where
    S: RawIterableMut<T>,
{
    type RawIterMut<'a>
        = S::RawIterMut<'a>
    where
        Self: 'a,
        T: 'a;

    fn raw_reference_mut_iter<'a>(&'a mut self) -> Self::RawIterMut<'a>
    where
        T: 'a,
    {
        self.source.raw_reference_mut_iter()
    }
}

/**
 * The category of a MatrixTranspose is the transpose of its source's category.
 */
impl<T, S, C> MatrixCategory for MatrixTranspose<T, S, C>
where
    C: IterationCategory,
{
    type Category = C::Transposed;
}

/**
 * A MatrixTranspose is equal to a Matrix if they have the same size and the same values at
 * every index.
 */
impl<T, S, C> PartialEq<Matrix<T>> for MatrixTranspose<T, S, C>
where
    T: PartialEq,
    S: MatrixRef<T>,
{
    fn eq(&self, other: &Matrix<T>) -> bool {
        matrix_equality(self, other)
    }
}

/**
 * A Matrix is equal to a MatrixTranspose if they have the same size and the same values at
 * every index.
 */
impl<T, S, C> PartialEq<MatrixTranspose<T, S, C>> for Matrix<T>
where
    T: PartialEq,
    S: MatrixRef<T>,
{
    fn eq(&self, other: &MatrixTranspose<T, S, C>) -> bool {
        matrix_equality(self, other)
    }
}

/**
 * Two MatrixTransposes are equal if they have the same size and, at every index, either both
 * have no entry stored or both have the same value.
 */
impl<T, S1, C1, S2, C2> PartialEq<MatrixTranspose<T, S2, C2>> for MatrixTranspose<T, S1, C1>
where
    T: PartialEq,
    S1: MatrixRef<T>,
    S2: MatrixRef<T>,
{
    fn eq(&self, other: &MatrixTranspose<T, S2, C2>) -> bool {
        matrix_equality(self, other)
    }
}

#[test]
fn test_size_follows_the_source() {
    let matrix: Matrix<u8> = Matrix::from_flat_row_major((0, 3), vec![]);
    assert_eq!(transpose(&matrix).view_size(), (3, 0));
    let matrix: Matrix<u8> = Matrix::from_flat_row_major((4, 0), vec![]);
    assert_eq!(transpose(&matrix).view_size(), (0, 4));
}

#[test]
fn test_get_entry_leaves_missing_values_alone() {
    let matrix = crate::matrices::SparseMatrix::try_from_triplets((3, 3), vec![((2, 0), 7)])
        .unwrap();
    let transposed = transpose(&matrix);
    let mut x = 1;
    assert!(transposed.get_entry(&mut x, 0, 2));
    assert_eq!(x, 7);
    x = 1;
    assert!(!transposed.get_entry(&mut x, 2, 0));
    assert_eq!(x, 1);
}

#[test]
fn test_copying_a_view_copies_the_reference() {
    let matrix = Matrix::from(vec![vec![1, 2], vec![3, 4]]);
    let transposed = transpose(&matrix);
    let copy = transposed;
    assert!(std::ptr::eq(*transposed.source_ref(), *copy.source_ref()));
    assert!(std::ptr::eq(copy.source(), &matrix));
}
