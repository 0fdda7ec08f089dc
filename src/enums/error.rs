//! # Error Module - Custom *ListView* Error Type
//!
//! Defines the unified error type for the crate.
//!
//! ## Features
//! - Covers descriptor construction failures, unsupported key shapes,
//! out-of-bounds positions, slice length mismatches and source borrow conflicts.
//! - Implements `Display` for readable output and `Error` for integration
//! with standard Rust error handling.

use std::error::Error;
use std::fmt;

/// Shorthand result type used across the crate.
pub type Result<T> = std::result::Result<T, ViewError>;

/// Reasons a `(start, stop, step)` descriptor cannot be built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConstructionError {
    /// `step` was zero.
    ZeroStep,
    /// A field carried a fractional part or was not finite.
    NonInteger { field: &'static str, value: String },
    /// A field did not fit in an `isize`.
    OutOfRange { field: &'static str, value: String },
}

/// Catch all error type for `ListView`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewError {
    Construction(ConstructionError),
    UnsupportedKey {
        key: &'static str,
        value: &'static str,
    },
    IndexOutOfBounds {
        index: i128,
        len: usize,
    },
    LengthMismatch {
        expected: usize,
        found: usize,
    },
    SourceBorrowed,
    SourceMismatch,
    StepMismatch {
        left: isize,
        right: isize,
    },
}

impl fmt::Display for ConstructionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConstructionError::ZeroStep => write!(f, "step cannot be zero"),
            ConstructionError::NonInteger { field, value } => {
                write!(f, "'{}' must be an integer, got '{}'", field, value)
            }
            ConstructionError::OutOfRange { field, value } => {
                write!(f, "'{}' value '{}' does not fit in an isize", field, value)
            }
        }
    }
}

impl fmt::Display for ViewError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViewError::Construction(inner) => write!(f, "Construction error: {}.", inner),
            ViewError::UnsupportedKey { key, value } => {
                write!(
                    f,
                    "Type error: ListView cannot assign {} to {} key.",
                    value, key
                )
            }
            ViewError::IndexOutOfBounds { index, len } => {
                write!(
                    f,
                    "Index error: source index {} out of bounds for source len {}.",
                    index, len
                )
            }
            ViewError::LengthMismatch { expected, found } => {
                write!(
                    f,
                    "Length mismatch: expected {} values, found {}.",
                    expected, found
                )
            }
            ViewError::SourceBorrowed => {
                write!(f, "Borrow error: source is already mutably borrowed.")
            }
            ViewError::SourceMismatch => {
                write!(f, "Source mismatch: views do not target the same source.")
            }
            ViewError::StepMismatch { left, right } => {
                write!(
                    f,
                    "Step mismatch: views do not share the same step ({} vs {}).",
                    left, right
                )
            }
        }
    }
}

impl Error for ConstructionError {}

impl Error for ViewError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ViewError::Construction(inner) => Some(inner),
            _ => None,
        }
    }
}

impl From<ConstructionError> for ViewError {
    fn from(err: ConstructionError) -> Self {
        ViewError::Construction(err)
    }
}
