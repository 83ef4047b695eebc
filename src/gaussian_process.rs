//! Gaussian process (kernel ridge) regression.
//!
//! # Model
//!
//! ```text
//! C      = rbf(X, X) + beta * I          # regularized training kernel
//! mean   = k*ᵀ C⁻¹ Y                     # k* = rbf(X, X_test)
//! cov    = rbf(X*, X*) + beta * I − k*ᵀ C⁻¹ k*
//! ```
//!
//! `fit` is O(n³) in the number of training rows (kernel inversion); each
//! `predict` recomputes the cross-kernel from scratch — nothing is cached
//! across calls.

use crate::error::{PredecirError, Result};
use crate::linalg::{identity, inv, matmul, transpose};
use crate::primitives::Matrix;

/// Radial basis function kernel between the rows of two matrices.
///
/// Entry `(i, j)` is `exp(-gamma * d²)` where `d²` is the squared Euclidean
/// distance between row `i` of `x1` and row `j` of `x2`. The diagonal of
/// `rbf_kernel(&x, &x, gamma)` is therefore all ones.
///
/// # Errors
///
/// Returns [`PredecirError::DimensionMismatch`] if the two operands have a
/// different number of columns (features).
pub fn rbf_kernel(x1: &Matrix<f64>, x2: &Matrix<f64>, gamma: f64) -> Result<Matrix<f64>> {
    let (n1, feats1) = x1.shape();
    let (n2, feats2) = x2.shape();
    if feats1 != feats2 {
        return Err(PredecirError::DimensionMismatch {
            expected: format!("{feats1} features"),
            actual: format!("{feats2} features"),
        });
    }
    let mut kernel = Matrix::zeros(n1, n2)?;
    for r in 0..n1 {
        let left = x1.row_slice(r);
        for c in 0..n2 {
            let right = x2.row_slice(c);
            let mut dist = 0.0;
            for k in 0..feats1 {
                let d = left[k] - right[k];
                dist += d * d;
            }
            kernel.set(r, c, (-gamma * dist).exp());
        }
    }
    Ok(kernel)
}

/// Training state populated by a successful `fit`.
#[derive(Debug, Clone)]
struct Fitted {
    x_train: Matrix<f64>,
    y_train: Matrix<f64>,
    c_inv: Matrix<f64>,
}

/// Gaussian process regressor with an RBF kernel.
///
/// # Examples
///
/// ```
/// use predecir::gaussian_process::GaussianProcessRegressor;
/// use predecir::primitives::Matrix;
///
/// let x = Matrix::from_vec(3, 1, vec![0.0, 1.0, 2.0]).unwrap();
/// let y = Matrix::from_vec(3, 1, vec![0.0, 1.0, 2.0]).unwrap();
///
/// let mut model = GaussianProcessRegressor::new()
///     .with_gamma(1.0)
///     .with_beta(0.01);
/// model.fit(&x, &y).unwrap();
///
/// let (mean, cov) = model.predict(&x).unwrap();
/// assert_eq!(mean.shape(), (3, 1));
/// assert_eq!(cov.shape(), (3, 3));
/// ```
#[derive(Debug, Clone)]
pub struct GaussianProcessRegressor {
    gamma: f64,
    beta: f64,
    fitted: Option<Fitted>,
}

impl Default for GaussianProcessRegressor {
    fn default() -> Self {
        Self::new()
    }
}

impl GaussianProcessRegressor {
    /// Creates an unfitted regressor with `gamma = 0.1`, `beta = 1.0`.
    #[must_use]
    pub fn new() -> Self {
        Self {
            gamma: 0.1,
            beta: 1.0,
            fitted: None,
        }
    }

    /// Sets the RBF bandwidth. Expected positive; not validated.
    #[must_use]
    pub fn with_gamma(mut self, gamma: f64) -> Self {
        self.gamma = gamma;
        self
    }

    /// Sets the ridge/noise term added to the kernel diagonal. Expected
    /// non-negative; not validated.
    #[must_use]
    pub fn with_beta(mut self, beta: f64) -> Self {
        self.beta = beta;
        self
    }

    /// RBF bandwidth.
    #[must_use]
    pub fn gamma(&self) -> f64 {
        self.gamma
    }

    /// Ridge/noise term.
    #[must_use]
    pub fn beta(&self) -> f64 {
        self.beta
    }

    /// Whether a successful `fit` has populated the model.
    #[must_use]
    pub fn is_fitted(&self) -> bool {
        self.fitted.is_some()
    }

    /// Fits the regressor on training inputs `x` (n×d) and targets `y`
    /// (n×k).
    ///
    /// Computes `inv(rbf(x, x) + beta * I)` and stores it together with
    /// deep copies of `x` and `y`. A second call overwrites the previous
    /// training state in a single assignment. A singular regularized kernel
    /// is *not* detected; its non-finite inverse propagates into
    /// predictions.
    ///
    /// # Errors
    ///
    /// Returns [`PredecirError::DimensionMismatch`] if `x` and `y` disagree
    /// on row count.
    pub fn fit(&mut self, x: &Matrix<f64>, y: &Matrix<f64>) -> Result<()> {
        let n = x.n_rows();
        if n != y.n_rows() {
            return Err(PredecirError::DimensionMismatch {
                expected: format!("{n} target rows"),
                actual: format!("{} target rows", y.n_rows()),
            });
        }
        let kernel = rbf_kernel(x, x, self.gamma)?;
        let regularized = kernel.add(&identity(n)?.mul_scalar(self.beta))?;
        let c_inv = inv(&regularized)?;
        self.fitted = Some(Fitted {
            x_train: x.clone(),
            y_train: y.clone(),
            c_inv,
        });
        Ok(())
    }

    /// Predicts the mean (m×k) and covariance (m×m) for test inputs
    /// `x_test` (m×d).
    ///
    /// Read-only with respect to the model; the cross-kernel is recomputed
    /// on every call.
    ///
    /// # Errors
    ///
    /// Returns [`PredecirError::NotFitted`] before any successful `fit`,
    /// and [`PredecirError::DimensionMismatch`] if `x_test` has a different
    /// feature count than the training inputs.
    pub fn predict(&self, x_test: &Matrix<f64>) -> Result<(Matrix<f64>, Matrix<f64>)> {
        let fitted = self.fitted.as_ref().ok_or(PredecirError::NotFitted)?;
        let d_train = fitted.x_train.n_cols();
        let (m, d_test) = x_test.shape();
        if d_train != d_test {
            return Err(PredecirError::DimensionMismatch {
                expected: format!("{d_train} features"),
                actual: format!("{d_test} features"),
            });
        }
        let k = rbf_kernel(&fitted.x_train, x_test, self.gamma)?;
        let kt_c_inv = matmul(&transpose(&k), &fitted.c_inv)?;
        let mean = matmul(&kt_c_inv, &fitted.y_train)?;
        let cov = rbf_kernel(x_test, x_test, self.gamma)?
            .add(&identity(m)?.mul_scalar(self.beta))?
            .sub(&matmul(&kt_c_inv, &k)?)?;
        Ok((mean, cov))
    }
}

#[cfg(test)]
#[path = "gaussian_process_tests.rs"]
mod tests;
