extern crate easy_transpose;
extern crate rand;
extern crate rand_chacha;

#[cfg(test)]
mod tests {
    use rand::{Rng, SeedableRng};

    use easy_transpose::matrices::views::{
        transpose, transpose_mut, ColumnIterable, MatrixMut, MatrixRef, RawIterable,
        RowIterable,
    };
    use easy_transpose::matrices::{Matrix, SparseMatrix, TripletMatrix};

    fn random_size<R: Rng>(random_generator: &mut R) -> (usize, usize) {
        (
            random_generator.random_range(0..8),
            random_generator.random_range(0..8),
        )
    }

    fn random_dense<R: Rng>(random_generator: &mut R) -> Matrix<i32> {
        let (rows, columns) = random_size(random_generator);
        let values = (0..rows * columns)
            .map(|_| random_generator.random_range(-100..100))
            .collect();
        Matrix::from_flat_row_major((rows, columns), values)
    }

    fn random_entries<R: Rng>(
        random_generator: &mut R,
        size: (usize, usize),
    ) -> Vec<((usize, usize), i32)> {
        let mut entries = Vec::new();
        for row in 0..size.0 {
            for column in 0..size.1 {
                if random_generator.random_bool(0.3) {
                    entries.push(((row, column), random_generator.random_range(-100..100)));
                }
            }
        }
        entries
    }

    #[test]
    fn transposed_entries_match_swapped_source_entries() {
        let mut random_generator = rand_chacha::ChaCha8Rng::seed_from_u64(15);
        for _ in 0..50 {
            let matrix = random_dense(&mut random_generator);
            let transposed = transpose(&matrix);
            let (rows, columns) = matrix.size();
            assert_eq!((columns, rows), transposed.view_size());
            for row in 0..rows {
                for column in 0..columns {
                    assert_eq!(
                        matrix.try_get_reference(row, column),
                        transposed.try_get_reference(column, row)
                    );
                }
            }
            assert_eq!(transpose(&transposed), matrix);
        }
    }

    #[test]
    fn transposed_lines_match_source_lines() {
        let mut random_generator = rand_chacha::ChaCha8Rng::seed_from_u64(16);
        for _ in 0..50 {
            let matrix = random_dense(&mut random_generator);
            let transposed = transpose(&matrix);
            assert_eq!(matrix.iter_columns().len(), transposed.iter_rows().len());
            for (row, column) in transposed.iter_rows().zip(matrix.iter_columns()) {
                assert!(row.eq(column));
            }
            for (column, row) in transposed.iter_columns().zip(matrix.iter_rows()) {
                assert!(column.eq(row));
            }
        }
    }

    #[test]
    fn sparse_columns_of_transpose_match_rows() {
        let mut random_generator = rand_chacha::ChaCha8Rng::seed_from_u64(17);
        for _ in 0..50 {
            let size = random_size(&mut random_generator);
            let entries = random_entries(&mut random_generator, size);
            let matrix = SparseMatrix::try_from_triplets(size, entries.clone()).unwrap();
            let transposed = transpose(&matrix);
            let mut from_columns = Vec::new();
            for (row, line) in transposed.iter_columns().enumerate() {
                for (column, x) in line {
                    from_columns.push(((row, column), *x));
                }
            }
            // columns of the transpose walk the source in row major order
            let mut expected = entries;
            expected.sort_by(|a, b| a.0.cmp(&b.0));
            assert_eq!(expected, from_columns);
        }
    }

    #[test]
    fn writes_through_view_land_at_swapped_index() {
        let mut random_generator = rand_chacha::ChaCha8Rng::seed_from_u64(18);
        for _ in 0..50 {
            let (rows, columns) = random_size(&mut random_generator);
            if rows == 0 || columns == 0 {
                continue;
            }
            let mut sparse: SparseMatrix<i32> = SparseMatrix::new((rows, columns));
            let mut triplets: TripletMatrix<i32> = TripletMatrix::new((rows, columns));
            let mut expected = Matrix::empty(None, (rows, columns));
            for _ in 0..20 {
                let row = random_generator.random_range(0..rows);
                let column = random_generator.random_range(0..columns);
                if random_generator.random_bool(0.25) {
                    transpose_mut(&mut sparse).erase(column, row);
                    transpose_mut(&mut triplets).erase(column, row);
                    expected.set(row, column, None);
                } else {
                    let value: i32 = random_generator.random_range(-100..100);
                    transpose_mut(&mut sparse).set(column, row, value);
                    transpose_mut(&mut triplets).set(column, row, value);
                    expected.set(row, column, Some(value));
                }
            }
            for row in 0..rows {
                for column in 0..columns {
                    let value = expected.get_reference(row, column).as_ref();
                    assert_eq!(value, sparse.try_get_reference(row, column));
                    assert_eq!(value, triplets.try_get_reference(row, column));
                }
            }
            let stored = expected.raw_reference_iter().filter(|x| x.is_some()).count();
            assert_eq!(stored, sparse.stored());
            assert_eq!(stored, transpose(&triplets).raw_reference_iter().count());
        }
    }
}
