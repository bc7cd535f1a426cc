/*!
 * Zero copy transposed views over matrices.
 *
 * A [MatrixTranspose](matrices::views::MatrixTranspose) borrows a matrix and exposes it with
 * rows and columns exchanged, forwarding every access to the source with the indexes swapped.
 * Nothing is copied, so writes through a mutable view land in the source matrix directly.
 *
 * Matrices declare which line iteration they support with a
 * [MatrixCategory](matrices::views::MatrixCategory), and a transposed view supports exactly the
 * dual of that: a source with only row iteration gives a view with only column iteration, and
 * the other way around. Asking a view for iteration its source cannot forward is a type error
 * rather than a slow emulation.
 *
 * If this is your first time using the crate start with the
 * [views module](matrices::views) and the [transpose](matrices::views::transpose) function.
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
 * let first_row: Vec<i32> = transposed.row_reference_iter(0).map(|(_, x)| *x).collect();
 * assert_eq!(first_row, vec![ 1, 4 ]);
 * ```
 */

pub mod matrices;
