//! Matrix type for 2D numeric data.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::io::BufRead;

use crate::error::{PredecirError, Result};

/// A dense 2-D matrix (row-major storage).
///
/// The buffer is uniquely owned; [`Clone`] performs a deep copy. A matrix
/// always holds at least one element — constructors reject
/// `rows * cols == 0`.
///
/// # Examples
///
/// ```
/// use predecir::primitives::Matrix;
///
/// let m = Matrix::from_vec(2, 3, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0])
///     .expect("data length matches rows * cols");
/// assert_eq!(m.shape(), (2, 3));
/// assert_eq!(m.get(1, 2), 6.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Matrix<T> {
    data: Vec<T>,
    rows: usize,
    cols: usize,
}

impl<T: Copy> Matrix<T> {
    /// Creates a matrix from a flat row-major vector.
    ///
    /// # Errors
    ///
    /// Returns [`PredecirError::EmptyMatrix`] if `rows * cols == 0`, and
    /// [`PredecirError::DimensionMismatch`] if the data length doesn't
    /// equal `rows * cols`.
    pub fn from_vec(rows: usize, cols: usize, data: Vec<T>) -> Result<Self> {
        if rows * cols == 0 {
            return Err(PredecirError::EmptyMatrix { rows, cols });
        }
        if data.len() != rows * cols {
            return Err(PredecirError::DimensionMismatch {
                expected: format!("{} elements ({rows}x{cols})", rows * cols),
                actual: format!("{} elements", data.len()),
            });
        }
        Ok(Self { data, rows, cols })
    }

    /// Returns the shape as (rows, cols).
    #[must_use]
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Returns the number of rows.
    #[must_use]
    pub fn n_rows(&self) -> usize {
        self.rows
    }

    /// Returns the number of columns.
    #[must_use]
    pub fn n_cols(&self) -> usize {
        self.cols
    }

    /// Returns the total element count (`rows * cols`).
    #[must_use]
    pub fn size(&self) -> usize {
        self.data.len()
    }

    /// Gets the element at (row, col). Hot-path accessor.
    ///
    /// # Panics
    ///
    /// Panics if the indices are out of bounds. Use [`Matrix::try_get`]
    /// where bounds are not already guaranteed.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> T {
        self.data[row * self.cols + col]
    }

    /// Sets the element at (row, col).
    ///
    /// # Panics
    ///
    /// Panics if the indices are out of bounds.
    pub fn set(&mut self, row: usize, col: usize, value: T) {
        self.data[row * self.cols + col] = value;
    }

    /// Bounds-checked element access.
    #[must_use]
    pub fn try_get(&self, row: usize, col: usize) -> Option<T> {
        if row < self.rows && col < self.cols {
            Some(self.data[row * self.cols + col])
        } else {
            None
        }
    }

    /// Returns one row as a contiguous slice.
    ///
    /// # Panics
    ///
    /// Panics if `row >= n_rows()`.
    #[must_use]
    pub fn row_slice(&self, row: usize) -> &[T] {
        let start = row * self.cols;
        &self.data[start..start + self.cols]
    }

    /// Returns the underlying row-major buffer as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Returns the underlying row-major buffer as a mutable slice.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Overwrites every element with `value`.
    pub fn fill(&mut self, value: T) {
        for v in &mut self.data {
            *v = value;
        }
    }
}

impl Matrix<f64> {
    /// Creates a zero-filled matrix.
    ///
    /// # Errors
    ///
    /// Returns [`PredecirError::EmptyMatrix`] if `rows * cols == 0`.
    pub fn zeros(rows: usize, cols: usize) -> Result<Self> {
        if rows * cols == 0 {
            return Err(PredecirError::EmptyMatrix { rows, cols });
        }
        Ok(Self {
            data: vec![0.0; rows * cols],
            rows,
            cols,
        })
    }

    /// Creates a zero-filled square matrix.
    ///
    /// # Errors
    ///
    /// Returns [`PredecirError::EmptyMatrix`] if `n == 0`.
    pub fn square(n: usize) -> Result<Self> {
        Self::zeros(n, n)
    }

    /// Adds another matrix element-wise, producing a new matrix.
    ///
    /// # Errors
    ///
    /// Returns [`PredecirError::DimensionMismatch`] if the shapes differ.
    pub fn add(&self, other: &Self) -> Result<Self> {
        if self.shape() != other.shape() {
            return Err(PredecirError::DimensionMismatch {
                expected: format!("{}x{}", self.rows, self.cols),
                actual: format!("{}x{}", other.rows, other.cols),
            });
        }
        let data: Vec<f64> = self
            .data
            .iter()
            .zip(other.data.iter())
            .map(|(a, b)| a + b)
            .collect();
        Ok(Self {
            data,
            rows: self.rows,
            cols: self.cols,
        })
    }

    /// Subtracts another matrix element-wise, producing a new matrix.
    ///
    /// # Errors
    ///
    /// Returns [`PredecirError::DimensionMismatch`] if the shapes differ.
    pub fn sub(&self, other: &Self) -> Result<Self> {
        if self.shape() != other.shape() {
            return Err(PredecirError::DimensionMismatch {
                expected: format!("{}x{}", self.rows, self.cols),
                actual: format!("{}x{}", other.rows, other.cols),
            });
        }
        let data: Vec<f64> = self
            .data
            .iter()
            .zip(other.data.iter())
            .map(|(a, b)| a - b)
            .collect();
        Ok(Self {
            data,
            rows: self.rows,
            cols: self.cols,
        })
    }

    /// Adds a scalar to every element.
    #[must_use]
    pub fn add_scalar(&self, value: f64) -> Self {
        Self {
            data: self.data.iter().map(|x| x + value).collect(),
            rows: self.rows,
            cols: self.cols,
        }
    }

    /// Subtracts a scalar from every element.
    #[must_use]
    pub fn sub_scalar(&self, value: f64) -> Self {
        self.add_scalar(-value)
    }

    /// Multiplies every element by a scalar.
    #[must_use]
    pub fn mul_scalar(&self, value: f64) -> Self {
        Self {
            data: self.data.iter().map(|x| x * value).collect(),
            rows: self.rows,
            cols: self.cols,
        }
    }

    /// Negates every element.
    #[must_use]
    pub fn neg(&self) -> Self {
        self.mul_scalar(-1.0)
    }

    /// Adds a scalar to every element in place.
    pub fn add_scalar_mut(&mut self, value: f64) {
        for v in &mut self.data {
            *v += value;
        }
    }

    /// Subtracts a scalar from every element in place.
    pub fn sub_scalar_mut(&mut self, value: f64) {
        self.add_scalar_mut(-value);
    }

    /// Multiplies every element by a scalar in place.
    pub fn mul_scalar_mut(&mut self, value: f64) {
        for v in &mut self.data {
            *v *= value;
        }
    }

    /// Reads a matrix from a whitespace-separated text stream.
    ///
    /// The stream starts with two integers (rows, cols) followed by up to
    /// `rows * cols` numeric tokens in row-major order. Token count is not
    /// validated: a stream that ends early, or whose next token fails to
    /// parse, leaves the remaining entries at 0.0. Multiple matrices can be
    /// read back to back from the same reader.
    ///
    /// # Errors
    ///
    /// Returns [`PredecirError::Parse`] if the header is missing or not
    /// integral, [`PredecirError::EmptyMatrix`] if the header declares a
    /// zero-sized matrix, and [`PredecirError::Io`] on read failure.
    ///
    /// # Examples
    ///
    /// ```
    /// use predecir::primitives::Matrix;
    ///
    /// let mut stream = "2 2  1.0 2.0 3.0 4.0".as_bytes();
    /// let m = Matrix::read_from(&mut stream).unwrap();
    /// assert_eq!(m.shape(), (2, 2));
    /// assert_eq!(m.get(1, 0), 3.0);
    /// ```
    pub fn read_from<R: BufRead>(reader: &mut R) -> Result<Self> {
        let rows = read_header_token(reader, "row count")?;
        let cols = read_header_token(reader, "column count")?;
        let mut m = Self::zeros(rows, cols)?;
        for idx in 0..rows * cols {
            let Some(token) = next_token(reader)? else {
                break;
            };
            let Ok(value) = token.parse::<f64>() else {
                break;
            };
            m.data[idx] = value;
        }
        Ok(m)
    }
}

/// Writes the matrix as `rows` lines of tab-separated values, fixed
/// notation with 3 digits after the decimal point.
impl fmt::Display for Matrix<f64> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for r in 0..self.rows {
            for c in 0..self.cols {
                write!(f, "{:.3}\t", self.get(r, c))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Reads the next whitespace-delimited token, or `None` at end of stream.
fn next_token<R: BufRead>(reader: &mut R) -> Result<Option<String>> {
    let mut token = Vec::new();
    loop {
        let (consumed, done) = {
            let buf = reader.fill_buf()?;
            if buf.is_empty() {
                break;
            }
            let mut consumed = 0;
            let mut done = false;
            for &byte in buf {
                consumed += 1;
                if byte.is_ascii_whitespace() {
                    if token.is_empty() {
                        continue;
                    }
                    done = true;
                    break;
                }
                token.push(byte);
            }
            (consumed, done)
        };
        reader.consume(consumed);
        if done {
            break;
        }
    }
    if token.is_empty() {
        Ok(None)
    } else {
        Ok(Some(String::from_utf8_lossy(&token).into_owned()))
    }
}

fn read_header_token<R: BufRead>(reader: &mut R, what: &str) -> Result<usize> {
    match next_token(reader)? {
        Some(token) => token
            .parse::<usize>()
            .map_err(|_| PredecirError::Parse(format!("invalid {what}: {token}"))),
        None => Err(PredecirError::Parse(format!("missing {what} in header"))),
    }
}

#[cfg(test)]
#[path = "matrix_tests.rs"]
mod tests;
