//! Linear algebra operations over `Matrix<f64>`.
//!
//! The multiply is cache-blocked: the right operand is transposed once so
//! both operands stream along the contraction dimension, then the result
//! row range, column range, and contraction dimension are tiled into blocks
//! of one cache line's worth of elements. The inversion is classic
//! Gauss-Jordan without pivoting, run in lock-step on a scratch copy and an
//! identity matrix — a zero or near-zero pivot produces non-finite entries
//! that propagate silently instead of raising an error.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::{PredecirError, Result};
use crate::primitives::Matrix;

/// Default cache-line size assumed by [`matmul`], in bytes.
///
/// The blocking factor is `cache_line_bytes / size_of::<f64>()`. Use
/// [`matmul_with_cache_line`] to override it, e.g. with a synthetic value
/// in tests.
pub const DEFAULT_CACHE_LINE_BYTES: usize = 64;

/// Returns the transpose of `m`.
///
/// Pure data rearrangement: `transpose(&transpose(&m)) == m` exactly.
#[must_use]
pub fn transpose(m: &Matrix<f64>) -> Matrix<f64> {
    let (rows, cols) = m.shape();
    let mut out = vec![0.0; rows * cols];
    for i in 0..rows {
        for j in 0..cols {
            out[j * rows + i] = m.get(i, j);
        }
    }
    Matrix::from_vec(cols, rows, out).expect("shape preserved by transpose")
}

/// Multiplies two matrices with the default cache-line size.
///
/// # Errors
///
/// Returns [`PredecirError::DimensionMismatch`] if `a.n_cols() != b.n_rows()`.
///
/// # Examples
///
/// ```
/// use predecir::linalg::{identity, matmul};
/// use predecir::primitives::Matrix;
///
/// let m = Matrix::from_vec(2, 2, vec![1.0, 2.0, 3.0, 4.0]).unwrap();
/// let p = matmul(&identity(2).unwrap(), &m).unwrap();
/// assert_eq!(p, m);
/// ```
pub fn matmul(a: &Matrix<f64>, b: &Matrix<f64>) -> Result<Matrix<f64>> {
    matmul_with_cache_line(a, b, DEFAULT_CACHE_LINE_BYTES)
}

/// Multiplies two matrices, blocking for the given cache-line size.
///
/// The numeric result matches the naive triple loop up to floating-point
/// summation order; callers must compare with a tolerance, not bit-exactly.
/// A `cache_line_bytes` smaller than one element clamps to a block of 1.
///
/// # Errors
///
/// Returns [`PredecirError::DimensionMismatch`] if `a.n_cols() != b.n_rows()`.
pub fn matmul_with_cache_line(
    a: &Matrix<f64>,
    b: &Matrix<f64>,
    cache_line_bytes: usize,
) -> Result<Matrix<f64>> {
    let (a_rows, a_cols) = a.shape();
    let (b_rows, b_cols) = b.shape();
    if a_cols != b_rows {
        return Err(PredecirError::DimensionMismatch {
            expected: format!("inner dimension {a_cols}"),
            actual: format!("{b_rows} rows in right operand"),
        });
    }
    let block = (cache_line_bytes / std::mem::size_of::<f64>()).max(1);
    let bt = transpose(b);
    let mut res = Matrix::zeros(a_rows, b_cols)?;

    let a_buf = a.as_slice();
    let bt_buf = bt.as_slice();
    let res_buf = res.as_mut_slice();
    for r0 in (0..a_rows).step_by(block) {
        let r_max = (r0 + block).min(a_rows);
        for c0 in (0..b_cols).step_by(block) {
            let c_max = (c0 + block).min(b_cols);
            for k0 in (0..a_cols).step_by(block) {
                let k_max = (k0 + block).min(a_cols);
                for r in r0..r_max {
                    for c in c0..c_max {
                        let mut sum = 0.0;
                        for k in k0..k_max {
                            sum += a_buf[r * a_cols + k] * bt_buf[c * a_cols + k];
                        }
                        res_buf[r * b_cols + c] += sum;
                    }
                }
            }
        }
    }
    Ok(res)
}

/// Inverts a square matrix by Gauss-Jordan elimination without pivoting.
///
/// Row reduction runs in lock-step on a scratch copy of `m` and an identity
/// matrix: the pivot row of both is divided by the pivot value, then every
/// other row of both has `ratio * pivot_row` subtracted. No row exchange is
/// performed, so a singular input (or one needing pivoting) returns `Ok`
/// with ±infinity/NaN entries rather than an error.
///
/// # Errors
///
/// Returns [`PredecirError::DimensionMismatch`] if `m` is not square.
pub fn inv(m: &Matrix<f64>) -> Result<Matrix<f64>> {
    let (rows, cols) = m.shape();
    if rows != cols {
        return Err(PredecirError::DimensionMismatch {
            expected: "square matrix".to_string(),
            actual: format!("{rows}x{cols}"),
        });
    }
    let n = rows;
    let mut work = m.clone();
    let mut inverse = identity(n)?;
    let w = work.as_mut_slice();
    let v = inverse.as_mut_slice();
    for pivot in 0..n {
        let val = w[pivot * n + pivot];
        for c in 0..n {
            w[pivot * n + c] /= val;
            v[pivot * n + c] /= val;
        }
        for r in 0..n {
            if r == pivot {
                continue;
            }
            let ratio = w[r * n + pivot];
            for c in 0..n {
                w[r * n + c] -= w[pivot * n + c] * ratio;
                v[r * n + c] -= v[pivot * n + c] * ratio;
            }
        }
    }
    Ok(inverse)
}

/// Creates the n×n identity matrix.
///
/// # Errors
///
/// Returns [`PredecirError::EmptyMatrix`] if `n == 0`.
pub fn identity(n: usize) -> Result<Matrix<f64>> {
    let mut m = Matrix::square(n)?;
    let buf = m.as_mut_slice();
    for i in 0..n {
        buf[i * n + i] = 1.0;
    }
    Ok(m)
}

/// Fills a matrix with uniform draws from `[0, 1)`.
///
/// # Arguments
///
/// * `seed` - Optional random seed for reproducibility; `None` seeds from
///   entropy.
///
/// # Errors
///
/// Returns [`PredecirError::EmptyMatrix`] if `rows * cols == 0`.
///
/// # Examples
///
/// ```
/// use predecir::linalg::random_uniform;
///
/// let a = random_uniform(3, 3, Some(42)).unwrap();
/// let b = random_uniform(3, 3, Some(42)).unwrap();
/// assert_eq!(a, b);
/// ```
pub fn random_uniform(rows: usize, cols: usize, seed: Option<u64>) -> Result<Matrix<f64>> {
    let mut rng = match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_entropy(),
    };
    let mut m = Matrix::zeros(rows, cols)?;
    for v in m.as_mut_slice() {
        *v = rng.gen_range(0.0..1.0);
    }
    Ok(m)
}

/// Diagonal extraction/construction.
///
/// A row or column vector (1×n or n×1) becomes the n×n matrix with its
/// entries on the diagonal; a square matrix becomes the n×1 column vector
/// of its diagonal entries.
///
/// # Errors
///
/// Returns [`PredecirError::DimensionMismatch`] for any other shape.
pub fn diag(m: &Matrix<f64>) -> Result<Matrix<f64>> {
    let (rows, cols) = m.shape();
    if rows == 1 || cols == 1 {
        let n = if rows == 1 { cols } else { rows };
        let mut res = Matrix::square(n)?;
        let buf = res.as_mut_slice();
        for i in 0..n {
            buf[i * n + i] = if rows == 1 { m.get(0, i) } else { m.get(i, 0) };
        }
        Ok(res)
    } else if rows == cols {
        let mut res = Matrix::zeros(rows, 1)?;
        for i in 0..rows {
            res.set(i, 0, m.get(i, i));
        }
        Ok(res)
    } else {
        Err(PredecirError::DimensionMismatch {
            expected: "row/column vector or square matrix".to_string(),
            actual: format!("{rows}x{cols}"),
        })
    }
}

#[cfg(test)]
#[path = "linalg_tests.rs"]
mod tests;
