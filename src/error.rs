//! Error types for value construction and extraction.
//!
//! The conversion operation itself is total: [`to_text`](crate::to_text)
//! always succeeds and returns a [`Value`](crate::Value) directly. Errors
//! arise only at the edges of the value model:
//!
//! - **Shape errors**: building a [`Matrix`](crate::Matrix) from data that
//!   does not fit the declared dimensions
//! - **Type mismatches**: extracting a Rust primitive from a
//!   [`Value`](crate::Value) of a different kind via `TryFrom`
//!
//! ## Examples
//!
//! ```rust
//! use valtext::{Error, Matrix};
//!
//! let result = Matrix::new(vec![1, 2, 3], vec![2, 2]);
//! assert!(matches!(result, Err(Error::ShapeMismatch { .. })));
//! ```

use std::fmt;
use thiserror::Error;

/// Represents all possible errors raised by this crate.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// Matrix data length does not match the product of its dimensions.
    #[error("shape mismatch: shape requires {expected} elements, found {found}")]
    ShapeMismatch { expected: usize, found: usize },

    /// Matrix rows have uneven lengths.
    #[error("ragged rows: row {row} has {found} elements, expected {expected}")]
    RaggedRows {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// A value of one kind was extracted as an incompatible Rust type.
    #[error("type mismatch: expected {expected}, found {found}")]
    TypeMismatch { expected: String, found: String },

    /// Custom error
    #[error("{0}")]
    Custom(String),
}

impl Error {
    /// Creates a type mismatch error for a failed `TryFrom<Value>` extraction.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use valtext::Error;
    ///
    /// let err = Error::type_mismatch("number", "text");
    /// assert!(err.to_string().contains("expected number"));
    /// ```
    pub fn type_mismatch(expected: &str, found: &str) -> Self {
        Error::TypeMismatch {
            expected: expected.to_string(),
            found: found.to_string(),
        }
    }

    /// Creates a custom error with a display message.
    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
