//! Error types for predecir operations.

use std::fmt;

/// Main error type for predecir operations.
///
/// Every shape/dimension precondition violation surfaces as a distinct
/// variant carrying the context of the failed check. Numerical failures
/// (a singular matrix fed to the no-pivoting inversion) are *not* reported
/// here; they produce non-finite entries that propagate silently.
///
/// # Examples
///
/// ```
/// use predecir::error::PredecirError;
///
/// let err = PredecirError::DimensionMismatch {
///     expected: "3x2".to_string(),
///     actual: "2x2".to_string(),
/// };
/// assert!(err.to_string().contains("dimension mismatch"));
/// ```
#[derive(Debug)]
pub enum PredecirError {
    /// Matrix dimensions don't match for the operation.
    DimensionMismatch {
        /// Expected dimensions description
        expected: String,
        /// Actual dimensions found
        actual: String,
    },

    /// Construction of a matrix with `rows * cols == 0`.
    EmptyMatrix {
        /// Requested row count
        rows: usize,
        /// Requested column count
        cols: usize,
    },

    /// `predict` called before a successful `fit`.
    NotFitted,

    /// Unreadable text-stream header.
    Parse(String),

    /// I/O error while reading a matrix stream.
    Io(std::io::Error),
}

impl fmt::Display for PredecirError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PredecirError::DimensionMismatch { expected, actual } => {
                write!(
                    f,
                    "Matrix dimension mismatch: expected {expected}, got {actual}"
                )
            }
            PredecirError::EmptyMatrix { rows, cols } => {
                write!(f, "Empty matrix: {rows}x{cols} has no elements")
            }
            PredecirError::NotFitted => {
                write!(f, "Model not fitted yet. Call fit() first.")
            }
            PredecirError::Parse(msg) => write!(f, "Parse error: {msg}"),
            PredecirError::Io(e) => write!(f, "I/O error: {e}"),
        }
    }
}

impl std::error::Error for PredecirError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PredecirError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for PredecirError {
    fn from(err: std::io::Error) -> Self {
        PredecirError::Io(err)
    }
}

/// Convenience type alias for Results.
pub type Result<T> = std::result::Result<T, PredecirError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimension_mismatch_display() {
        let err = PredecirError::DimensionMismatch {
            expected: "inner dimension 3".to_string(),
            actual: "4 rows".to_string(),
        };
        assert!(err.to_string().contains("dimension mismatch"));
        assert!(err.to_string().contains("inner dimension 3"));
        assert!(err.to_string().contains("4 rows"));
    }

    #[test]
    fn test_empty_matrix_display() {
        let err = PredecirError::EmptyMatrix { rows: 0, cols: 5 };
        let msg = err.to_string();
        assert!(msg.contains("Empty matrix"));
        assert!(msg.contains("0x5"));
    }

    #[test]
    fn test_not_fitted_display() {
        let err = PredecirError::NotFitted;
        assert!(err.to_string().contains("not fitted"));
    }

    #[test]
    fn test_parse_display() {
        let err = PredecirError::Parse("invalid row count: abc".to_string());
        assert!(err.to_string().contains("Parse error"));
        assert!(err.to_string().contains("abc"));
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "stream gone");
        let err: PredecirError = io_err.into();
        assert!(matches!(err, PredecirError::Io(_)));
        assert!(err.to_string().contains("I/O error"));
    }

    #[test]
    fn test_error_source_io() {
        use std::error::Error;
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "stream gone");
        let err = PredecirError::Io(io_err);
        assert!(err.source().is_some());
    }

    #[test]
    fn test_error_source_other() {
        use std::error::Error;
        let err = PredecirError::NotFitted;
        assert!(err.source().is_none());
    }
}
