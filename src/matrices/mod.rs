/*!
 * Matrix types and the views over them.
 *
 * - [Matrix] is dense, stores every entry, and iterates both rows and columns.
 * - [SparseMatrix] stores only the entries which have been set, row by row, and iterates
 *   only its rows.
 * - [TripletMatrix] stores only the entries which have been set, in no particular order, and
 *   iterates only its raw entries.
 *
 * All three can be transposed without copying through the [views] module.
 */

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

pub mod errors;
pub mod iterators;
pub mod sparse;
pub mod triplets;
pub mod views;

pub use sparse::SparseMatrix;
pub use triplets::TripletMatrix;

use crate::matrices::errors::InvalidShapeError;
use crate::matrices::views::{MatrixTranspose, RowsAndColumns};

/**
 * A general purpose dense matrix of some type, stored in row major order.
 *
 * Unlike the sparse matrix types every entry of a Matrix is always present, so
 * looking up a valid index never fails and erasing an entry does nothing.
 *
 * Matrices with 0 rows or 0 columns are permitted, though they can only be created with
 * [from_flat_row_major](Matrix::from_flat_row_major) or
 * [try_from_rows](Matrix::try_from_rows).
 */
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "MatrixParts<T>"))]
pub struct Matrix<T> {
    rows: Row,
    columns: Column,
    data: Vec<T>,
}

/// The maximum row and column lengths are usize, due to the internal storage being backed by
/// Vecs
pub type Row = usize;
pub type Column = usize;

/**
 * Methods for matrices of any type, including non numerical types such as bool.
 */
impl<T> Matrix<T> {
    /**
     * Creates a matrix from a nested array of values, each inner vector
     * being a row, and hence the outer vector containing all rows in sequence, the
     * same way as when writing matrices in mathematics.
     *
     * Example of a 2 x 3 matrix in both notations:
     * ```ignore
     *   [
     *      1, 2, 4
     *      8, 9, 3
     *   ]
     * ```
     * ```
     * use easy_transpose::matrices::Matrix;
     * Matrix::from(vec![
     *     vec![ 1, 2, 4 ],
     *     vec![ 8, 9, 3 ]]);
     * ```
     *
     * This will panic if there are no rows, no columns, or the rows are not all the same
     * length.
     */
    #[track_caller]
    pub fn from(values: Vec<Vec<T>>) -> Matrix<T> {
        assert!(!values.is_empty(), "No rows defined");
        // check length of first row is > 1
        assert!(!values[0].is_empty(), "No column defined");
        // check length of each row is the same
        assert!(
            values.iter().map(|x| x.len()).all(|x| x == values[0].len()),
            "Inconsistent size"
        );
        let rows = values.len();
        let columns = values[0].len();
        Matrix {
            rows,
            columns,
            data: values.into_iter().flatten().collect(),
        }
    }

    /**
     * Creates a matrix from a nested array of values like [from](Matrix::from), returning an
     * error instead of panicking if the rows are not all the same length.
     *
     * An empty list of rows creates a 0x0 matrix, and a list of empty rows creates a
     * matrix with no columns.
     */
    pub fn try_from_rows(values: Vec<Vec<T>>) -> Result<Matrix<T>, InvalidShapeError> {
        let rows = values.len();
        let columns = values.first().map(|row| row.len()).unwrap_or(0);
        if values.iter().any(|row| row.len() != columns) {
            let length = values.iter().map(|row| row.len()).sum();
            return Err(InvalidShapeError::new((rows, columns), length));
        }
        Ok(Matrix {
            rows,
            columns,
            data: values.into_iter().flatten().collect(),
        })
    }

    /**
     * Creates a matrix of the provided size from a flat list of values in row major order.
     *
     * ```
     * use easy_transpose::matrices::Matrix;
     * let matrix = Matrix::from_flat_row_major((2, 2), vec![ 1, 2, 3, 4 ]);
     * assert_eq!(matrix, Matrix::from(vec![ vec![ 1, 2 ], vec![ 3, 4 ] ]));
     * let no_rows: Matrix<u8> = Matrix::from_flat_row_major((0, 4), vec![]);
     * assert_eq!(no_rows.size(), (0, 4));
     * ```
     *
     * This will panic if the number of values does not match the size.
     */
    #[track_caller]
    pub fn from_flat_row_major(size: (Row, Column), values: Vec<T>) -> Matrix<T> {
        match Matrix::try_from_flat_row_major(size, values) {
            Ok(matrix) => matrix,
            Err(error) => panic!("{}", error),
        }
    }

    /**
     * Creates a matrix of the provided size from a flat list of values in row major order,
     * returning an error if the number of values does not match the size.
     */
    pub fn try_from_flat_row_major(
        size: (Row, Column),
        values: Vec<T>,
    ) -> Result<Matrix<T>, InvalidShapeError> {
        let (rows, columns) = size;
        if rows.checked_mul(columns) != Some(values.len()) {
            return Err(InvalidShapeError::new(size, values.len()));
        }
        Ok(Matrix {
            rows,
            columns,
            data: values,
        })
    }

    /**
     * Returns the dimensionality of this matrix in Row, Column format
     */
    pub fn size(&self) -> (Row, Column) {
        (self.rows, self.columns)
    }

    /**
     * Gets the number of rows in this matrix.
     */
    pub fn rows(&self) -> Row {
        self.rows
    }

    /**
     * Gets the number of columns in this matrix.
     */
    pub fn columns(&self) -> Column {
        self.columns
    }

    /**
     * Gets a reference to the value at this row and column. Rows and Columns are 0 indexed.
     */
    #[track_caller]
    pub fn get_reference(&self, row: Row, column: Column) -> &T {
        assert!(row < self.rows(), "Row out of index");
        assert!(column < self.columns(), "Column out of index");
        &self.data[self.index(row, column)]
    }

    /**
     * Sets a new value to this row and column. Rows and Columns are 0 indexed.
     */
    #[track_caller]
    pub fn set(&mut self, row: Row, column: Column, value: T) {
        assert!(row < self.rows(), "Row out of index");
        assert!(column < self.columns(), "Column out of index");
        let index = self.index(row, column);
        self.data[index] = value;
    }

    /**
     * Returns a transposed view of this matrix, which reads the same data with rows and
     * columns swapped.
     *
     * ```
     * use easy_transpose::matrices::Matrix;
     * use easy_transpose::matrices::views::MatrixRef;
     * let matrix = Matrix::from(vec![
     *     vec![ 1, 2, 3 ],
     *     vec![ 4, 5, 6 ]
     * ]);
     * let transposed = matrix.transpose_view();
     * assert_eq!(transposed.view_size(), (3, 2));
     * assert_eq!(transposed.try_get_reference(2, 0), Some(&3));
     * ```
     */
    pub fn transpose_view(&self) -> MatrixTranspose<T, &Matrix<T>, RowsAndColumns> {
        MatrixTranspose::from(self)
    }

    /**
     * Returns a mutable transposed view of this matrix, which reads and writes the same data
     * with rows and columns swapped.
     */
    pub fn transpose_view_mut(&mut self) -> MatrixTranspose<T, &mut Matrix<T>, RowsAndColumns> {
        MatrixTranspose::from_mut(self)
    }

    fn index(&self, row: Row, column: Column) -> usize {
        row * self.columns + column
    }

    fn _try_get_reference(&self, row: Row, column: Column) -> Option<&T> {
        if row < self.rows && column < self.columns {
            Some(&self.data[self.index(row, column)])
        } else {
            None
        }
    }

    fn _try_get_reference_mut(&mut self, row: Row, column: Column) -> Option<&mut T> {
        if row < self.rows && column < self.columns {
            let index = self.index(row, column);
            Some(&mut self.data[index])
        } else {
            None
        }
    }
}

/**
 * Methods for matrices with types that can be copied, but still not neccessarily numerical.
 */
impl<T: Clone> Matrix<T> {
    /**
     * Creates a matrix of the provided size with all elements initialised to the provided value
     *
     * This will panic if the number of elements would not fit in a usize.
     */
    #[track_caller]
    pub fn empty(value: T, size: (Row, Column)) -> Matrix<T> {
        let length = match size.0.checked_mul(size.1) {
            Some(length) => length,
            None => panic!("{}", InvalidShapeError::new(size, usize::MAX)),
        };
        Matrix {
            rows: size.0,
            columns: size.1,
            data: vec![value; length],
        }
    }

    /**
     * Gets a copy of the value at this row and column. Rows and Columns are 0 indexed.
     */
    #[track_caller]
    pub fn get(&self, row: Row, column: Column) -> T {
        self.get_reference(row, column).clone()
    }
}

#[cfg(feature = "serde")]
#[derive(Deserialize)]
#[serde(rename = "Matrix")]
struct MatrixParts<T> {
    rows: Row,
    columns: Column,
    data: Vec<T>,
}

#[cfg(feature = "serde")]
impl<T> TryFrom<MatrixParts<T>> for Matrix<T> {
    type Error = InvalidShapeError;

    fn try_from(parts: MatrixParts<T>) -> Result<Self, Self::Error> {
        Matrix::try_from_flat_row_major((parts.rows, parts.columns), parts.data)
    }
}

#[test]
fn test_ragged_rows_are_rejected() {
    let error = Matrix::try_from_rows(vec![vec![1, 2], vec![3]]).unwrap_err();
    assert_eq!(error.size(), (2, 2));
    assert_eq!(error.length(), 3);
    let empty: Matrix<i8> = Matrix::try_from_rows(vec![]).unwrap();
    assert_eq!(empty.size(), (0, 0));
    let no_columns: Matrix<i8> = Matrix::try_from_rows(vec![vec![], vec![]]).unwrap();
    assert_eq!(no_columns.size(), (2, 0));
}

#[test]
fn test_flat_data_must_fit_size() {
    assert!(Matrix::try_from_flat_row_major((2, 2), vec![1, 2, 3]).is_err());
    assert!(Matrix::try_from_flat_row_major((usize::MAX, 2), vec![1]).is_err());
    let matrix = Matrix::try_from_flat_row_major((1, 3), vec![1, 2, 3]).unwrap();
    assert_eq!(matrix.get(0, 2), 3);
}

#[test]
#[should_panic(expected = "is not valid for a")]
fn test_empty_with_overflowing_size_panics() {
    Matrix::empty(0_u8, (usize::MAX, 2));
}

#[test]
#[should_panic]
fn test_set_out_of_range_panics() {
    let mut matrix = Matrix::empty(0, (2, 2));
    matrix.set(2, 0, 1);
}
