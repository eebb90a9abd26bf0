//! Error types for enjambre operations.
//!
//! All failures are configuration failures: the optimizer validates its
//! settings before touching the swarm and never errors mid-run.

use std::fmt;

/// Main error type for enjambre operations.
///
/// # Examples
///
/// ```
/// use enjambre::error::EnjambreError;
///
/// let err = EnjambreError::InvalidConfig {
///     param: "swarm_size".to_string(),
///     value: "0".to_string(),
///     constraint: ">= 1".to_string(),
/// };
/// assert!(err.to_string().contains("swarm_size"));
/// ```
#[derive(Debug)]
pub enum EnjambreError {
    /// A configuration value violates its documented constraint.
    InvalidConfig {
        /// Parameter name
        param: String,
        /// Provided value
        value: String,
        /// Constraint description
        constraint: String,
    },

    /// The von Neumann topology arranges particles on a square grid and is
    /// only defined for perfect-square swarm sizes.
    NonSquareSwarm {
        /// Swarm size that has no integer square root
        swarm_size: usize,
    },
}

impl fmt::Display for EnjambreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EnjambreError::InvalidConfig {
                param,
                value,
                constraint,
            } => {
                write!(
                    f,
                    "Invalid configuration: {param} = {value}, expected {constraint}"
                )
            }
            EnjambreError::NonSquareSwarm { swarm_size } => {
                write!(
                    f,
                    "Von Neumann topology requires a perfect-square swarm size, got {swarm_size}"
                )
            }
        }
    }
}

impl std::error::Error for EnjambreError {}

impl EnjambreError {
    /// Create an invalid-configuration error with descriptive context.
    #[must_use]
    pub fn invalid_config(param: &str, value: impl fmt::Display, constraint: &str) -> Self {
        Self::InvalidConfig {
            param: param.to_string(),
            value: value.to_string(),
            constraint: constraint.to_string(),
        }
    }
}

/// Convenience type alias for Results.
pub type Result<T> = std::result::Result<T, EnjambreError>;
