/*!
 * Line iteration for a transpose of a matrix which makes no claim about how it iterates.
 *
 * A [Generic] matrix might still implement [RowIterable] or [ColumnIterable], so the
 * transpose offers each kind of iteration whenever the source provides its dual.
 */

use crate::matrices::views::{ColumnIterable, Generic, MatrixTranspose, RowIterable};
use crate::matrices::{Column, Row};

impl<T, S> RowIterable<T> for MatrixTranspose<T, S, Generic>
where
    S: ColumnIterable<T>,
{
    type RowIter<'a>
        = S::ColumnIter<'a>
    where
        Self: 'a,
        T: 'a;

    fn row_reference_iter<'a>(&'a self, row: Row) -> Self::RowIter<'a>
    where
        T: 'a,
    {
        self.source.column_reference_iter(row)
    }
}

impl<T, S> ColumnIterable<T> for MatrixTranspose<T, S, Generic>
where
    S: RowIterable<T>,
{
    type ColumnIter<'a>
        = S::RowIter<'a>
    where
        Self: 'a,
        T: 'a;

    fn column_reference_iter<'a>(&'a self, column: Column) -> Self::ColumnIter<'a>
    where
        T: 'a,
    {
        self.source.row_reference_iter(column)
    }
}

#[cfg(test)]
use crate::matrices::views::{transpose, MatrixCategory, MatrixMut, MatrixRef, RawIterable};
#[cfg(test)]
use crate::matrices::{SparseMatrix, TripletMatrix};

/// A sparse matrix which does not declare that it iterates rows, even though it can.
#[cfg(test)]
struct Undeclared(SparseMatrix<i32>);

#[cfg(test)]
impl MatrixRef<i32> for Undeclared {
    fn try_get_reference(&self, row: Row, column: Column) -> Option<&i32> {
        self.0.try_get_reference(row, column)
    }

    fn view_rows(&self) -> Row {
        self.0.view_rows()
    }

    fn view_columns(&self) -> Column {
        self.0.view_columns()
    }
}

#[cfg(test)]
impl RowIterable<i32> for Undeclared {
    type RowIter<'a>
        = <SparseMatrix<i32> as RowIterable<i32>>::RowIter<'a>
    where
        Self: 'a,
        i32: 'a;

    fn row_reference_iter<'a>(&'a self, row: Row) -> Self::RowIter<'a>
    where
        i32: 'a,
    {
        self.0.row_reference_iter(row)
    }
}

#[cfg(test)]
impl MatrixCategory for Undeclared {
    type Category = Generic;
}

#[test]
fn test_generic_source_with_rows_gives_columns() {
    let matrix = Undeclared(
        SparseMatrix::try_from_triplets((2, 3), vec![((0, 2), 5), ((1, 0), 6)]).unwrap(),
    );
    let transposed = transpose(&matrix);
    assert_eq!(transposed.view_size(), (3, 2));
    let columns: Vec<Vec<(usize, i32)>> = transposed
        .iter_columns()
        .map(|column| column.map(|(i, x)| (i, *x)).collect())
        .collect();
    assert_eq!(columns, vec![vec![(2, 5)], vec![(0, 6)]]);
}

#[test]
fn test_generic_source_without_lines_still_reads_and_writes() {
    let mut matrix = TripletMatrix::new((2, 3));
    matrix.set(1, 2, 'q');
    {
        let mut transposed = crate::matrices::views::transpose_mut(&mut matrix);
        assert_eq!(transposed.view_size(), (3, 2));
        assert_eq!(transposed.try_get_reference(2, 1), Some(&'q'));
        transposed.set(0, 1, 'r');
        transposed.erase(2, 1);
        let entries: Vec<_> = transposed.raw_indexed_reference_iter().collect();
        assert_eq!(entries, vec![((0, 1), &'r')]);
    }
    assert_eq!(matrix.try_get_reference(1, 0), Some(&'r'));
    assert_eq!(matrix.try_get_reference(1, 2), None);
}
