#![cfg(feature = "serde")]

extern crate easy_transpose;
extern crate toml;

#[cfg(test)]
mod tests {
    use easy_transpose::matrices::views::transpose;
    use easy_transpose::matrices::Matrix;

    #[test]
    fn matrix_round_trips_through_toml() {
        let matrix = Matrix::from(vec![vec![1, 2, 3], vec![4, 5, 6]]);
        let encoded = toml::to_string(&matrix).unwrap();
        println!("{}", encoded);
        let decoded: Matrix<i32> = toml::from_str(&encoded).unwrap();
        assert_eq!(matrix, decoded);
        assert_eq!(transpose(&decoded), Matrix::from(vec![vec![1, 4], vec![2, 5], vec![3, 6]]));
    }

    #[test]
    fn matrix_with_wrong_data_length_is_rejected() {
        let encoded = "rows = 2\ncolumns = 2\ndata = [1, 2, 3]\n";
        let decoded: Result<Matrix<i32>, _> = toml::from_str(encoded);
        assert!(decoded.is_err());
    }
}
