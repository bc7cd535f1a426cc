/*!
 * Line iteration for a transpose of a matrix which iterates only its rows.
 */

use crate::matrices::views::{ColumnIterable, MatrixTranspose, RowIterable, RowsOnly};
use crate::matrices::Column;

/**
 * The columns of the transpose are the rows of the source. The transpose has no rows to
 * iterate, since those would be the columns of the source.
 */
impl<T, S> ColumnIterable<T> for MatrixTranspose<T, S, RowsOnly>
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
use crate::matrices::SparseMatrix;
#[cfg(test)]
use crate::matrices::views::{transpose, MatrixMut, MatrixRef};

#[test]
fn test_columns_of_transposed_sparse_matrix() {
    let matrix = SparseMatrix::try_from_triplets(
        (3, 2),
        vec![((0, 1), 'a'), ((2, 0), 'b'), ((2, 1), 'c')],
    )
    .unwrap();
    let transposed = transpose(&matrix);
    assert_eq!(transposed.view_size(), (2, 3));
    let columns: Vec<Vec<(usize, char)>> = transposed
        .iter_columns()
        .map(|column| column.map(|(i, x)| (i, *x)).collect())
        .collect();
    assert_eq!(
        columns,
        vec![vec![(1, 'a')], vec![], vec![(0, 'b'), (1, 'c')]]
    );
}

#[test]
fn test_stored_entry_seen_through_column() {
    let mut matrix = SparseMatrix::new((3, 3));
    matrix.set(2, 2, 7);
    let transposed = transpose(&matrix);
    let column: Vec<_> = transposed.column_reference_iter(2).collect();
    assert_eq!(column, vec![(2, &7)]);
    assert_eq!(transposed.column_reference_iter(0).count(), 0);
}
