//! Evaluation helpers: sum, mean, mean squared error.

use crate::error::{PredecirError, Result};
use crate::primitives::Matrix;

/// Sum of all elements.
#[must_use]
pub fn sum(m: &Matrix<f64>) -> f64 {
    m.as_slice().iter().sum()
}

/// Mean of all elements.
#[must_use]
pub fn mean(m: &Matrix<f64>) -> f64 {
    sum(m) / m.size() as f64
}

/// Mean squared error between two same-shaped matrices.
///
/// # Errors
///
/// Returns [`PredecirError::DimensionMismatch`] if the shapes differ.
pub fn mse(y_pred: &Matrix<f64>, y_true: &Matrix<f64>) -> Result<f64> {
    if y_pred.shape() != y_true.shape() {
        let (pr, pc) = y_pred.shape();
        let (tr, tc) = y_true.shape();
        return Err(PredecirError::DimensionMismatch {
            expected: format!("{pr}x{pc}"),
            actual: format!("{tr}x{tc}"),
        });
    }
    let sum_sq: f64 = y_pred
        .as_slice()
        .iter()
        .zip(y_true.as_slice().iter())
        .map(|(p, t)| (p - t) * (p - t))
        .sum();
    Ok(sum_sq / y_pred.size() as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sum() {
        let m = Matrix::from_vec(2, 2, vec![1.0, 2.0, 3.0, 4.0]).expect("valid");
        assert!((sum(&m) - 10.0).abs() < 1e-12);
    }

    #[test]
    fn test_mean() {
        let m = Matrix::from_vec(2, 3, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).expect("valid");
        assert!((mean(&m) - 3.5).abs() < 1e-12);
    }

    #[test]
    fn test_mse() {
        let pred = Matrix::from_vec(2, 1, vec![1.0, 3.0]).expect("valid");
        let truth = Matrix::from_vec(2, 1, vec![0.0, 1.0]).expect("valid");
        let err = mse(&pred, &truth).expect("same shape");
        // (1 + 4) / 2
        assert!((err - 2.5).abs() < 1e-12);
    }

    #[test]
    fn test_mse_identical_is_zero() {
        let m = Matrix::from_vec(2, 2, vec![1.0, 2.0, 3.0, 4.0]).expect("valid");
        assert!(mse(&m, &m).expect("same shape").abs() < 1e-12);
    }

    #[test]
    fn test_mse_shape_mismatch() {
        let a = Matrix::from_vec(2, 1, vec![1.0, 2.0]).expect("valid");
        let b = Matrix::from_vec(1, 2, vec![1.0, 2.0]).expect("valid");
        assert!(mse(&a, &b).is_err());
    }
}
