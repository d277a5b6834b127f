//! Error types for the validation layer and configuration loading
//!
//! The unchecked calculations never fail: invalid inputs propagate as infinities or
//! NaN. [`ForageError`] is produced only by [`crate::checked`], by
//! [`crate::ModelConstants::from_toml_str`] and when rebuilding a
//! [`crate::CuringSeries`] from raw values.

use thiserror::Error;

/// Errors reported by the fail-fast entry points
#[derive(Debug, Error)]
pub enum ForageError {
    /// An input violated one of the model's stated constraints
    #[error("invalid input '{name}' = {value}: {constraint}")]
    InvalidInput {
        /// Parameter name as it appears in the public API
        name: &'static str,
        /// Offending value
        value: f64,
        /// Description of the violated constraint
        constraint: &'static str,
    },

    /// A curing series with no values was supplied
    #[error("curing series must hold at least the start-of-day value")]
    EmptySeries,

    /// Model constants could not be parsed
    #[error("invalid model constants: {0}")]
    Config(#[from] toml::de::Error),
}

impl ForageError {
    /// Create an `InvalidInput` error
    pub fn invalid_input(name: &'static str, value: f64, constraint: &'static str) -> Self {
        ForageError::InvalidInput {
            name,
            value,
            constraint,
        }
    }
}

/// Result alias for the fail-fast entry points
pub type Result<T> = std::result::Result<T, ForageError>;
