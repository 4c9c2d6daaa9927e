//! Configuration errors.

use thiserror::Error;

/// A single problem with an `AccountConfig`.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigViolation {
    #[error("{field} must be positive (got {value})")]
    NonPositiveAmount { field: &'static str, value: i64 },

    #[error("{field} must be at most {max} (got {value})")]
    AmountTooLarge {
        field: &'static str,
        value: i64,
        max: i64,
    },
}

/// Errors that can occur when building or loading a configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Every violation found, not just the first.
    #[error("Invalid configuration: {}", format_violations(.0))]
    Invalid(Vec<ConfigViolation>),

    #[error("Failed to parse configuration: {0}")]
    Parse(#[from] serde_json::Error),
}

fn format_violations(violations: &[ConfigViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
