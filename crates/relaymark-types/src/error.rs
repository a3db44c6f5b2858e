//! Error types for relaymark.
//!
//! Translation itself never fails; these types cover the edges around it:
//! loading configuration, parsing dialect names from user input, and the
//! identity collaborator reporting a lookup failure.

use thiserror::Error;

use crate::dialect::Dialect;

/// Top-level error type for relaymark.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum RelaymarkError {
    /// Configuration is malformed or semantically invalid.
    #[error("invalid config: {reason}")]
    ConfigInvalid {
        /// What is wrong with the configuration.
        reason: String,
    },

    /// A dialect name could not be parsed.
    #[error("unknown dialect: {0}")]
    UnknownDialect(String),

    /// The two dialects do not form a supported translation direction.
    #[error("unsupported dialect pair: {from} -> {to}")]
    UnsupportedPair {
        /// Source dialect.
        from: Dialect,
        /// Target dialect.
        to: Dialect,
    },

    /// Underlying I/O error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization / deserialization error.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML deserialization error.
    #[error("toml error: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Failure reported by an [`IdentityResolver`](crate::identity::IdentityResolver).
///
/// "Not found" is not an error; resolvers return `Ok(None)` for that.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ResolveError {
    /// The backing directory could not be reached.
    #[error("identity service unavailable: {0}")]
    Unavailable(String),

    /// The lookup exceeded its deadline.
    #[error("identity lookup timed out: {identifier}")]
    Timeout {
        /// Identifier that was being resolved.
        identifier: String,
    },

    /// Catch-all for errors that do not fit other variants.
    #[error("{0}")]
    Other(String),
}

/// A convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, RelaymarkError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_invalid_display() {
        let err = RelaymarkError::ConfigInvalid {
            reason: "maxMessageLength must be positive".into(),
        };
        assert_eq!(
            err.to_string(),
            "invalid config: maxMessageLength must be positive"
        );
    }

    #[test]
    fn unsupported_pair_display() {
        let err = RelaymarkError::UnsupportedPair {
            from: Dialect::GitHub,
            to: Dialect::GitLab,
        };
        assert_eq!(err.to_string(), "unsupported dialect pair: github -> gitlab");
    }

    #[test]
    fn from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: RelaymarkError = io_err.into();
        assert!(matches!(err, RelaymarkError::Io(_)));
        assert!(err.to_string().contains("missing"));
    }

    #[test]
    fn from_json() {
        let json_err = serde_json::from_str::<serde_json::Value>("{{bad}}").unwrap_err();
        let err: RelaymarkError = json_err.into();
        assert!(matches!(err, RelaymarkError::Json(_)));
    }

    #[test]
    fn resolve_error_display() {
        let err = ResolveError::Timeout {
            identifier: "octocat".into(),
        };
        assert_eq!(err.to_string(), "identity lookup timed out: octocat");
    }
}
