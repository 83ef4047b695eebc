//! Convenience re-exports for common usage.
//!
//! # Usage
//!
//! ```
//! use predecir::prelude::*;
//! ```

pub use crate::error::{PredecirError, Result};
pub use crate::gaussian_process::{rbf_kernel, GaussianProcessRegressor};
pub use crate::linalg::{diag, identity, inv, matmul, random_uniform, transpose};
pub use crate::metrics::{mean, mse, sum};
pub use crate::primitives::Matrix;
