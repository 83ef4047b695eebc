//! Predecir: Gaussian process regression in pure Rust.
//!
//! Predecir pairs a small dense linear algebra kernel (cache-blocked
//! multiply, Gauss-Jordan inversion) with a kernel ridge / Gaussian process
//! regressor built on top of it.
//!
//! # Quick Start
//!
//! ```
//! use predecir::prelude::*;
//!
//! // Three 1-D training points on the line y = x
//! let x = Matrix::from_vec(3, 1, vec![0.0, 1.0, 2.0]).unwrap();
//! let y = Matrix::from_vec(3, 1, vec![0.0, 1.0, 2.0]).unwrap();
//!
//! let mut model = GaussianProcessRegressor::new()
//!     .with_gamma(1.0)
//!     .with_beta(0.01);
//! model.fit(&x, &y).unwrap();
//!
//! let x_test = Matrix::from_vec(1, 1, vec![1.0]).unwrap();
//! let (mean, cov) = model.predict(&x_test).unwrap();
//! assert_eq!(mean.shape(), (1, 1));
//! assert_eq!(cov.shape(), (1, 1));
//! assert!(mean.get(0, 0) > 0.0 && mean.get(0, 0) < 2.0);
//! ```
//!
//! # Modules
//!
//! - [`primitives`]: the dense row-major [`primitives::Matrix`] container
//! - [`linalg`]: transpose, blocked multiply, inversion, constructors
//! - [`gaussian_process`]: the RBF-kernel ridge regressor
//! - [`metrics`]: sum / mean / mean-squared-error helpers
//! - [`error`]: the crate error type

pub mod error;
pub mod gaussian_process;
pub mod linalg;
pub mod metrics;
pub mod prelude;
pub mod primitives;
