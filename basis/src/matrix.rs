//! Dense matrix binding for integrals exchanged with the integral library.
//!
//! The integral library returns plain row-major buffers of a single scalar
//! type. `Matrix` is an owned, C-ordered `ndarray` array over that scalar, so
//! a returned buffer becomes a matrix without a transposing copy and a
//! standard-layout matrix can be handed back as a flat slice.

use crate::error::{Error, Result};
use ndarray::{Array2, ArrayView2};
use serde::{Deserialize, Serialize};

/// Scalar type of every integral matrix in the process.
pub type Real = f64;

/// Dense, dynamically sized, row-major matrix of [`Real`].
pub type Matrix = Array2<Real>;

/// Borrowed row-major matrix, e.g. over a buffer owned by the integral library.
pub type MatrixView<'a> = ArrayView2<'a, Real>;

/// Take ownership of a row-major buffer as a `rows x cols` matrix.
///
/// The buffer is moved, not copied. Element `[i][j]` is `data[i * cols + j]`.
pub fn from_row_major(rows: usize, cols: usize, data: Vec<Real>) -> Result<Matrix> {
    let len = data.len();
    Array2::from_shape_vec((rows, cols), data).map_err(|_| Error::ShapeMismatch { rows, cols, len })
}

/// Borrow a row-major slice as a `rows x cols` matrix view.
pub fn view_row_major(rows: usize, cols: usize, data: &[Real]) -> Result<MatrixView<'_>> {
    ArrayView2::from_shape((rows, cols), data).map_err(|_| Error::ShapeMismatch {
        rows,
        cols,
        len: data.len(),
    })
}

/// Contiguous row-major storage of `matrix`, if it has it.
///
/// `None` for views with non-standard strides (e.g. a transpose); use
/// [`to_row_major`] for those.
pub fn as_row_major_slice(matrix: &Matrix) -> Option<&[Real]> {
    matrix.as_slice()
}

/// Flatten to row-major order whatever the in-memory strides are.
pub fn to_row_major(matrix: &Matrix) -> Vec<Real> {
    match matrix.as_slice() {
        Some(slice) => slice.to_vec(),
        None => matrix.iter().copied().collect(),
    }
}

/// Consume the matrix into a row-major buffer.
///
/// A matrix built by [`from_row_major`] gives its original buffer back.
pub fn into_row_major(matrix: Matrix) -> Vec<Real> {
    if !matrix.is_standard_layout() || matrix.is_empty() {
        return to_row_major(&matrix);
    }
    let len = matrix.len();
    let first = matrix.as_ptr() as usize;
    let mut data = matrix.into_raw_vec();

    // A sliced matrix is a contiguous window into a larger allocation.
    let offset = first.saturating_sub(data.as_ptr() as usize) / std::mem::size_of::<Real>();
    if offset > 0 || data.len() != len {
        data.drain(..offset.min(data.len()));
        data.truncate(len);
    }
    data
}

pub fn ensure_shape(matrix: &Matrix, rows: usize, cols: usize) -> Result<()> {
    if matrix.dim() != (rows, cols) {
        return Err(Error::ShapeMismatch {
            rows,
            cols,
            len: matrix.len(),
        });
    }
    Ok(())
}

/// Serializable row-major form of a [`Matrix`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredMatrix {
    pub rows: usize,
    pub cols: usize,
    pub data: Vec<Real>,
}

impl From<&Matrix> for StoredMatrix {
    fn from(matrix: &Matrix) -> Self {
        let (rows, cols) = matrix.dim();
        StoredMatrix {
            rows,
            cols,
            data: to_row_major(matrix),
        }
    }
}

impl TryFrom<StoredMatrix> for Matrix {
    type Error = Error;

    fn try_from(stored: StoredMatrix) -> Result<Self> {
        from_row_major(stored.rows, stored.cols, stored.data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::{array, s};

    #[test]
    fn test_row_major_serialization() {
        let m: Matrix = array![[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]];
        assert!(m.is_standard_layout());
        assert_eq!(to_row_major(&m), vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
        assert_eq!(as_row_major_slice(&m), Some(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0][..]));
    }

    #[test]
    fn test_index_matches_flat_offset() {
        let (rows, cols) = (3, 4);
        let data: Vec<Real> = (0..rows * cols).map(|k| k as Real * 0.5 - 1.0).collect();
        let m = from_row_major(rows, cols, data.clone()).unwrap();
        for i in 0..rows {
            for j in 0..cols {
                assert_eq!(m[[i, j]], data[i * cols + j]);
            }
        }
        assert_eq!(to_row_major(&m), data);
    }

    #[test]
    fn test_from_row_major_moves_buffer() {
        let data = vec![1.0, 2.0, 3.0, 4.0];
        let ptr = data.as_ptr();
        let m = from_row_major(2, 2, data).unwrap();
        assert_eq!(m.as_ptr(), ptr);

        let back = into_row_major(m);
        assert_eq!(back.as_ptr(), ptr);
        assert_eq!(back, vec![1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn test_view_borrows_without_copy() {
        let data = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
        let view = view_row_major(2, 3, &data).unwrap();
        assert_eq!(view.as_ptr(), data.as_ptr());
        assert_eq!(view[[1, 0]], 4.0);
        assert_eq!(view[[0, 2]], 3.0);
    }

    #[test]
    fn test_transposed_matrix_flattens_logically() {
        let m: Matrix = array![[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]];
        let t = m.t().to_owned();
        let transposed = m.reversed_axes();
        assert!(!transposed.is_standard_layout());
        assert!(as_row_major_slice(&transposed).is_none());
        assert_eq!(to_row_major(&transposed), vec![1.0, 4.0, 2.0, 5.0, 3.0, 6.0]);
        assert_eq!(to_row_major(&t), to_row_major(&transposed));
        assert_eq!(into_row_major(transposed), vec![1.0, 4.0, 2.0, 5.0, 3.0, 6.0]);
    }

    #[test]
    fn test_into_row_major_of_sliced_matrix() {
        let m: Matrix = array![[1.0, 2.0], [3.0, 4.0], [5.0, 6.0]];
        let rows = m.clone().slice_move(s![1.., ..]);
        assert!(rows.is_standard_layout());
        assert_eq!(into_row_major(rows), vec![3.0, 4.0, 5.0, 6.0]);

        let middle = m.clone().slice_move(s![1..2, ..]);
        assert_eq!(into_row_major(middle), vec![3.0, 4.0]);

        let column = m.slice_move(s![.., 1..]);
        assert_eq!(into_row_major(column), vec![2.0, 4.0, 6.0]);
    }

    #[test]
    fn test_shape_mismatch() {
        let err = from_row_major(2, 3, vec![1.0; 5]).unwrap_err();
        assert!(matches!(err, Error::ShapeMismatch { rows: 2, cols: 3, len: 5 }));
        assert!(view_row_major(3, 3, &[0.0; 8]).is_err());

        let m = from_row_major(2, 2, vec![0.0; 4]).unwrap();
        assert!(ensure_shape(&m, 2, 2).is_ok());
        assert!(ensure_shape(&m, 4, 1).is_err());
    }

    #[test]
    fn test_stored_matrix_round_trip() {
        let m: Matrix = array![[0.1, -2.5], [1e-300, 7.0]];
        let stored = StoredMatrix::from(&m);
        assert_eq!(stored.data, vec![0.1, -2.5, 1e-300, 7.0]);
        let back = Matrix::try_from(stored).unwrap();
        assert_eq!(back, m);
    }
}
