/*!
 * Static classification of which line iteration a matrix type supports.
 *
 * Every matrix type declares one of four categories through [MatrixCategory]. The category
 * costs nothing at runtime, it only selects which trait implementations a
 * [MatrixTranspose](crate::matrices::views::MatrixTranspose) over that matrix type has.
 *
 * | Category           | Row iteration | Column iteration | Transposed category |
 * |--------------------|---------------|------------------|---------------------|
 * | [RowsAndColumns]   | yes           | yes              | [RowsAndColumns]    |
 * | [RowsOnly]         | yes           | no               | [ColumnsOnly]       |
 * | [ColumnsOnly]      | no            | yes              | [RowsOnly]          |
 * | [Generic]          | maybe         | maybe            | [Generic]           |
 *
 * A [Generic] matrix has not narrowed down what it supports, so a transposed view over it
 * forwards whichever of row and column iteration the source happens to implement.
 */

mod sealed {
    pub trait Sealed {}
}

/**
 * One of the four categories of line iteration a matrix can support.
 *
 * This trait is sealed, the set of categories is closed.
 */
pub trait IterationCategory: sealed::Sealed {
    /**
     * The category of the transpose of a matrix in this category, which has rows and
     * columns swapped.
     */
    type Transposed: IterationCategory;

    /**
     * If a matrix in this category is guaranteed to iterate its rows.
     */
    const ROWS: bool;

    /**
     * If a matrix in this category is guaranteed to iterate its columns.
     */
    const COLUMNS: bool;
}

/**
 * Category of matrices which iterate both their rows and their columns, such as a dense
 * [Matrix](crate::matrices::Matrix).
 */
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub struct RowsAndColumns;

/**
 * Category of matrices which iterate their rows but not their columns, such as a
 * [SparseMatrix](crate::matrices::SparseMatrix).
 */
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub struct RowsOnly;

/**
 * Category of matrices which iterate their columns but not their rows, such as the transpose
 * of a [SparseMatrix](crate::matrices::SparseMatrix).
 */
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub struct ColumnsOnly;

/**
 * Category of matrices which make no guarantee about line iteration, such as a
 * [TripletMatrix](crate::matrices::TripletMatrix).
 */
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub struct Generic;

impl sealed::Sealed for RowsAndColumns {}
impl sealed::Sealed for RowsOnly {}
impl sealed::Sealed for ColumnsOnly {}
impl sealed::Sealed for Generic {}

impl IterationCategory for RowsAndColumns {
    type Transposed = RowsAndColumns;
    const ROWS: bool = true;
    const COLUMNS: bool = true;
}

impl IterationCategory for RowsOnly {
    type Transposed = ColumnsOnly;
    const ROWS: bool = true;
    const COLUMNS: bool = false;
}

impl IterationCategory for ColumnsOnly {
    type Transposed = RowsOnly;
    const ROWS: bool = false;
    const COLUMNS: bool = true;
}

impl IterationCategory for Generic {
    type Transposed = Generic;
    const ROWS: bool = false;
    const COLUMNS: bool = false;
}

/**
 * A matrix type which declares which category of line iteration it supports.
 *
 * The declaration should agree with the traits the type implements, a [RowsOnly] matrix
 * should implement [RowIterable](crate::matrices::views::RowIterable) and so on. If it does
 * not, a transposed view over it will just not have the iteration it cannot forward.
 */
pub trait MatrixCategory {
    type Category: IterationCategory;
}

#[cfg(test)]
fn same_category<A: 'static, B: 'static>() -> bool {
    std::any::TypeId::of::<A>() == std::any::TypeId::of::<B>()
}

#[test]
fn test_transposed_categories_are_duals() {
    type Dual<C> = <C as IterationCategory>::Transposed;
    assert!(same_category::<Dual<RowsAndColumns>, RowsAndColumns>());
    assert!(same_category::<Dual<RowsOnly>, ColumnsOnly>());
    assert!(same_category::<Dual<ColumnsOnly>, RowsOnly>());
    assert!(same_category::<Dual<Generic>, Generic>());
    assert!(same_category::<Dual<Dual<RowsOnly>>, RowsOnly>());
    assert!(same_category::<Dual<Dual<ColumnsOnly>>, ColumnsOnly>());
}

#[test]
fn test_transposed_categories_swap_capabilities() {
    fn swapped<C: IterationCategory>() -> bool {
        C::ROWS == <C::Transposed as IterationCategory>::COLUMNS
            && C::COLUMNS == <C::Transposed as IterationCategory>::ROWS
    }
    assert!(swapped::<RowsAndColumns>());
    assert!(swapped::<RowsOnly>());
    assert!(swapped::<ColumnsOnly>());
    assert!(swapped::<Generic>());
}
