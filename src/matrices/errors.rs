use std::error::Error;
use std::fmt;

use crate::matrices::{Column, Row};

/**
 * An error indicating failure to create a matrix because the data provided does not fit the
 * size it was declared with, or because the rows provided do not all have the same length.
 */
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct InvalidShapeError {
    size: (Row, Column),
    length: usize,
}

impl InvalidShapeError {
    pub(crate) fn new(size: (Row, Column), length: usize) -> InvalidShapeError {
        InvalidShapeError { size, length }
    }

    /**
     * The size the matrix was requested to have.
     */
    pub fn size(&self) -> (Row, Column) {
        self.size
    }

    /**
     * The number of elements that were actually provided.
     */
    pub fn length(&self) -> usize {
        self.length
    }
}

impl Error for InvalidShapeError {}

impl fmt::Display for InvalidShapeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Data of length {} is not valid for a {}x{} matrix",
            self.length, self.size.0, self.size.1
        )
    }
}

/**
 * An error indicating failure to create a matrix because an entry was positioned outside
 * the size of the matrix.
 */
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct IndexOutOfBoundsError {
    index: (Row, Column),
    size: (Row, Column),
}

impl IndexOutOfBoundsError {
    pub(crate) fn new(index: (Row, Column), size: (Row, Column)) -> IndexOutOfBoundsError {
        IndexOutOfBoundsError { index, size }
    }

    /**
     * The row and column of the offending entry.
     */
    pub fn index(&self) -> (Row, Column) {
        self.index
    }

    /**
     * The size of the matrix the entry was meant for.
     */
    pub fn size(&self) -> (Row, Column) {
        self.size
    }
}

impl Error for IndexOutOfBoundsError {}

impl fmt::Display for IndexOutOfBoundsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Entry at row {} and column {} is out of bounds for a {}x{} matrix",
            self.index.0, self.index.1, self.size.0, self.size.1
        )
    }
}

#[test]
fn test_error_messages() {
    let shape = InvalidShapeError::new((2, 3), 5);
    assert_eq!(shape.to_string(), "Data of length 5 is not valid for a 2x3 matrix");
    let bounds = IndexOutOfBoundsError::new((4, 0), (2, 2));
    assert_eq!(bounds.to_string(), "Entry at row 4 and column 0 is out of bounds for a 2x2 matrix");
}
