extern crate easy_transpose;

#[cfg(test)]
mod tests {
    use easy_transpose::matrices::views::{
        transpose, transpose_mut, ColumnIterable, MatrixMut, MatrixRef, MatrixTranspose,
        RawIterable, RawIterableMut, RowIterable,
    };
    use easy_transpose::matrices::{Matrix, SparseMatrix, TripletMatrix};

    #[test]
    fn transpose_of_dense_matrix() {
        let matrix = Matrix::from(vec![vec![1, 2, 3], vec![4, 5, 6]]);
        let transposed = transpose(&matrix);
        println!("{:?}", transposed);
        assert_eq!((3, 2), transposed.view_size());
        assert_eq!(Some(&3), transposed.try_get_reference(2, 0));
        assert_eq!(Some(&4), transposed.try_get_reference(0, 1));
        assert_eq!(None, transposed.try_get_reference(0, 2));
        assert_eq!(
            transposed,
            Matrix::from(vec![vec![1, 4], vec![2, 5], vec![3, 6]])
        );
        let row: Vec<(usize, i32)> = transposed
            .row_reference_iter(1)
            .map(|(column, x)| (column, *x))
            .collect();
        assert_eq!(vec![(0, 2), (1, 5)], row);
    }

    #[test]
    fn transpose_of_sparse_matrix() {
        let matrix = SparseMatrix::try_from_triplets((3, 3), vec![((2, 2), 7)]).unwrap();
        let transposed = transpose(&matrix);
        let mut x = 0;
        assert!(transposed.get_entry(&mut x, 2, 2));
        assert_eq!(7, x);
        let column: Vec<_> = transposed.column_reference_iter(2).collect();
        assert_eq!(vec![(2, &7)], column);
        for column in [0, 1] {
            assert_eq!(0, transposed.column_reference_iter(column).count());
        }
    }

    #[test]
    fn empty_shapes() {
        let no_rows: Matrix<f32> = Matrix::from_flat_row_major((0, 5), vec![]);
        let transposed = transpose(&no_rows);
        assert_eq!((5, 0), transposed.view_size());
        assert_eq!(5, transposed.iter_rows().count());
        assert_eq!(0, transposed.iter_columns().count());
        assert_eq!(0, transposed.raw_reference_iter().count());

        let no_columns: SparseMatrix<f32> = SparseMatrix::new((4, 0));
        let transposed = transpose(&no_columns);
        assert_eq!((0, 4), transposed.view_size());
        assert_eq!(4, transposed.iter_columns().count());
        assert!(transposed.iter_columns().all(|mut column| column.next().is_none()));
    }

    #[test]
    fn writing_through_a_view() {
        let mut matrix = Matrix::from(vec![vec![1, 2, 3], vec![4, 5, 6]]);
        let mut transposed = transpose_mut(&mut matrix);
        transposed.set(2, 1, 60);
        *transposed.try_get_reference_mut(0, 0).unwrap() = 10;
        // erasing from a dense matrix does nothing
        transposed.erase(1, 1);
        assert_eq!(Some(&5), transposed.try_get_reference(1, 1));
        transposed.raw_reference_mut_iter().for_each(|x| *x *= 2);
        assert_eq!(
            matrix,
            Matrix::from(vec![vec![20, 4, 6], vec![8, 10, 120]])
        );
    }

    #[test]
    fn writing_through_a_view_of_a_sparse_matrix() {
        let mut matrix: SparseMatrix<char> = SparseMatrix::new((2, 4));
        {
            let mut transposed = transpose_mut(&mut matrix);
            assert_eq!((4, 2), transposed.view_size());
            transposed.set(3, 0, 'a');
            transposed.set(1, 1, 'b');
            transposed.set(0, 1, 'c');
            transposed.erase(1, 1);
        }
        let rows: Vec<Vec<(usize, char)>> = matrix
            .iter_rows()
            .map(|row| row.map(|(column, x)| (column, *x)).collect())
            .collect();
        assert_eq!(vec![vec![(3, 'a')], vec![(0, 'c')]], rows);
    }

    #[test]
    fn writing_through_a_view_of_a_triplet_matrix() {
        let mut matrix: TripletMatrix<f64> = TripletMatrix::new((3, 1));
        let mut transposed = MatrixTranspose::from_mut(&mut matrix);
        transposed.set(0, 2, 1.5);
        transposed.set(0, 0, -1.0);
        assert_eq!((1, 3), transposed.view_size());
        let mut entries: Vec<((usize, usize), f64)> = transposed
            .raw_indexed_reference_iter()
            .map(|(index, x)| (index, *x))
            .collect();
        entries.sort_by(|a, b| a.0.cmp(&b.0));
        assert_eq!(vec![((0, 0), -1.0), ((0, 2), 1.5)], entries);
        assert_eq!(2, matrix.stored());
        assert_eq!(Some(&1.5), matrix.try_get_reference(2, 0));
    }

    #[test]
    fn rows_of_view_are_columns_of_source() {
        let matrix = Matrix::from(vec![vec![1, 2], vec![3, 4], vec![5, 6]]);
        let transposed = matrix.transpose_view();
        for (row, column) in transposed.iter_rows().zip(matrix.iter_columns()) {
            assert!(row.eq(column));
        }
        for (column, row) in transposed.iter_columns().zip(matrix.iter_rows()) {
            assert!(column.eq(row));
        }
    }

    #[test]
    fn double_transpose_matches_source() {
        let matrix = Matrix::from(vec![vec!['a', 'b', 'c'], vec!['d', 'e', 'f']]);
        let transposed = transpose(&matrix);
        let restored = transpose(&transposed);
        assert_eq!(matrix.size(), restored.view_size());
        assert_eq!(restored, matrix);
        assert_eq!(
            transpose(&restored),
            Matrix::from(vec![vec!['a', 'd'], vec!['b', 'e'], vec!['c', 'f']])
        );
    }

    #[test]
    fn double_transpose_of_sparse_matrix() {
        let matrix =
            SparseMatrix::try_from_triplets((2, 3), vec![((1, 2), 9), ((0, 0), 1)]).unwrap();
        let transposed = transpose(&matrix);
        let restored = transpose(&transposed);
        assert_eq!(matrix.size(), restored.view_size());
        let rows: Vec<Vec<(usize, &i32)>> =
            restored.iter_rows().map(|row| row.collect()).collect();
        assert_eq!(vec![vec![(0, &1)], vec![(2, &9)]], rows);
    }

    #[test]
    fn raw_indexed_iteration_swaps_positions() {
        let matrix = SparseMatrix::try_from_triplets(
            (3, 4),
            vec![((0, 3), 'w'), ((2, 1), 'x'), ((1, 1), 'y'), ((2, 0), 'z')],
        )
        .unwrap();
        let transposed = transpose(&matrix);
        let mut source: Vec<((usize, usize), char)> = matrix
            .raw_indexed_reference_iter()
            .map(|((row, column), x)| ((column, row), *x))
            .collect();
        let mut view: Vec<((usize, usize), char)> = transposed
            .raw_indexed_reference_iter()
            .map(|(index, x)| (index, *x))
            .collect();
        source.sort();
        view.sort();
        assert_eq!(source, view);
        for ((row, column), x) in transposed.raw_indexed_reference_iter() {
            assert_eq!(Some(x), transposed.try_get_reference(row, column));
        }
        let values: String = transposed.raw_reference_iter().collect();
        let source_values: String = matrix.raw_reference_iter().collect();
        assert_eq!(source_values, values);
    }

    #[test]
    fn views_over_views_forward_writes() {
        let mut matrix: SparseMatrix<i32> = SparseMatrix::new((2, 2));
        let mut transposed = transpose_mut(&mut matrix);
        let mut restored = transpose_mut(&mut transposed);
        restored.set(0, 1, 5);
        assert_eq!(Some(&5), restored.try_get_reference(0, 1));
        assert_eq!(Some(&5), matrix.try_get_reference(0, 1));
    }

    #[test]
    fn size_follows_resized_source() {
        let mut matrix: SparseMatrix<()> = SparseMatrix::new((1, 1));
        assert_eq!((1, 1), transpose(&matrix).view_size());
        matrix = SparseMatrix::new((2, 5));
        matrix.set(1, 4, ());
        let transposed = transpose(&matrix);
        assert_eq!((5, 2), transposed.view_size());
        assert_eq!(Some(&()), transposed.try_get_reference(4, 1));
    }

    #[test]
    #[should_panic]
    fn setting_out_of_range_through_view_panics() {
        let mut matrix: SparseMatrix<i32> = SparseMatrix::new((2, 3));
        transpose_mut(&mut matrix).set(0, 2, 1);
    }
}
