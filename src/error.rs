//! Error types for sqlexpr.

use thiserror::Error;

use crate::transpiler::Dialect;

/// The main error type for building and rendering expressions.
#[derive(Debug, Error)]
pub enum SqlExprError {
    /// A node could not be serialized (empty grouping, non-finite constant, ...).
    #[error("Malformed expression tree: {0}")]
    MalformedTree(String),

    /// Operator text outside the fixed vocabulary.
    #[error("Invalid operator: '{0}'")]
    InvalidOperator(String),

    /// Operator with no spelling in the target dialect.
    #[error("Operator '{operator}' is not supported by {dialect:?}")]
    UnsupportedOperator { operator: String, dialect: Dialect },

    /// Render configuration could not be read.
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl SqlExprError {
    /// Create a malformed tree error.
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::MalformedTree(message.into())
    }

    /// Create an invalid operator error.
    pub fn invalid_operator(op: impl Into<String>) -> Self {
        Self::InvalidOperator(op.into())
    }

    /// Create an unsupported operator error.
    pub fn unsupported(op: impl Into<String>, dialect: Dialect) -> Self {
        Self::UnsupportedOperator {
            operator: op.into(),
            dialect,
        }
    }
}

impl From<toml::de::Error> for SqlExprError {
    fn from(err: toml::de::Error) -> Self {
        Self::Config(err.to_string())
    }
}

/// Result type alias for sqlexpr operations.
pub type SqlExprResult<T> = Result<T, SqlExprError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SqlExprError::malformed("WRAP requires at least one expression");
        assert_eq!(
            err.to_string(),
            "Malformed expression tree: WRAP requires at least one expression"
        );
        assert_eq!(
            SqlExprError::invalid_operator("<=>").to_string(),
            "Invalid operator: '<=>'"
        );
    }

    #[test]
    fn test_unsupported_display() {
        let err = SqlExprError::unsupported("SIMILAR TO", Dialect::MySql);
        assert_eq!(err.to_string(), "Operator 'SIMILAR TO' is not supported by MySql");
    }

    #[test]
    fn test_toml_error_maps_to_config() {
        let err: SqlExprError = toml::from_str::<toml::Value>("= broken").unwrap_err().into();
        assert!(matches!(err, SqlExprError::Config(_)));
    }
}
