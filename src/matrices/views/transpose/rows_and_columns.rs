/*!
 * Line iteration for a transpose of a matrix which iterates both rows and columns.
 */

use crate::matrices::views::{ColumnIterable, MatrixTranspose, RowIterable, RowsAndColumns};
use crate::matrices::{Column, Row};

/**
 * The rows of the transpose are the columns of the source.
 */
impl<T, S> RowIterable<T> for MatrixTranspose<T, S, RowsAndColumns>
where
    S: RowIterable<T> + ColumnIterable<T>,
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

/**
 * The columns of the transpose are the rows of the source.
 */
impl<T, S> ColumnIterable<T> for MatrixTranspose<T, S, RowsAndColumns>
where
    S: RowIterable<T> + ColumnIterable<T>,
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
use crate::matrices::Matrix;
#[cfg(test)]
use crate::matrices::views::transpose;

#[test]
fn test_rows_of_transpose_are_columns_of_source() {
    let matrix = Matrix::from(vec![vec![1, 2, 3], vec![4, 5, 6]]);
    let transposed = transpose(&matrix);
    let rows: Vec<Vec<(usize, i32)>> = transposed
        .iter_rows()
        .map(|row| row.map(|(i, x)| (i, *x)).collect())
        .collect();
    assert_eq!(
        rows,
        vec![
            vec![(0, 1), (1, 4)],
            vec![(0, 2), (1, 5)],
            vec![(0, 3), (1, 6)],
        ]
    );
    let columns: Vec<Vec<i32>> = transposed
        .iter_columns()
        .map(|column| column.map(|(_, x)| *x).collect())
        .collect();
    assert_eq!(columns, vec![vec![1, 2, 3], vec![4, 5, 6]]);
}

#[test]
fn test_lines_of_a_matrix_with_no_columns() {
    let matrix: Matrix<u8> = Matrix::from_flat_row_major((2, 0), vec![]);
    let transposed = transpose(&matrix);
    assert_eq!(transposed.iter_rows().count(), 0);
    assert_eq!(transposed.iter_columns().count(), 2);
    assert!(transposed.iter_columns().all(|mut column| column.next().is_none()));
}

#[test]
#[should_panic]
fn test_row_out_of_range_panics() {
    let matrix = Matrix::from(vec![vec![1, 2, 3], vec![4, 5, 6]]);
    transpose(&matrix).row_reference_iter(3);
}
