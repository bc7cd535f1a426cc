/*!
 * Line iteration for a transpose of a matrix which iterates only its columns.
 */

use crate::matrices::views::{ColumnIterable, ColumnsOnly, MatrixTranspose, RowIterable};
use crate::matrices::Row;

/**
 * The rows of the transpose are the columns of the source. The transpose has no columns to
 * iterate, since those would be the rows of the source.
 */
impl<T, S> RowIterable<T> for MatrixTranspose<T, S, ColumnsOnly>
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

#[cfg(test)]
use crate::matrices::SparseMatrix;
#[cfg(test)]
use crate::matrices::views::{transpose, MatrixRef};

#[test]
fn test_transposing_twice_restores_rows() {
    let matrix = SparseMatrix::try_from_triplets(
        (2, 4),
        vec![((0, 3), 3), ((1, 0), 4), ((0, 1), 1)],
    )
    .unwrap();
    let transposed = transpose(&matrix);
    let restored = transpose(&transposed);
    assert_eq!(restored.view_size(), (2, 4));
    for row in 0..2 {
        let expected: Vec<_> = matrix.row_reference_iter(row).collect();
        let actual: Vec<_> = restored.row_reference_iter(row).collect();
        assert_eq!(expected, actual);
    }
}

#[test]
fn test_rows_of_a_column_only_source() {
    let matrix = SparseMatrix::try_from_triplets((3, 2), vec![((1, 1), 'x')]).unwrap();
    let transposed = transpose(&matrix);
    let restored = transpose(&transposed);
    let rows: Vec<usize> = restored.iter_rows().map(|row| row.count()).collect();
    assert_eq!(rows, vec![0, 1, 0]);
}
