//! Error types for the color primitives

use thiserror::Error;

/// Input-validation failures raised by the color primitives.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ColorError {
    /// A hex literal was not 6 or 8 hex digits (after an optional `#`).
    #[error("invalid color literal `{0}`: expected 6 or 8 hex digits")]
    InvalidFormat(String),

    /// A numeric parameter fell outside its documented bounds.
    #[error("{param} {value} is outside {min}..={max}")]
    InvalidRange {
        param: &'static str,
        value: f32,
        min: f32,
        max: f32,
    },
}

pub type Result<T> = std::result::Result<T, ColorError>;
