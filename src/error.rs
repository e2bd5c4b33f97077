//! Crate-level error types.
//!
//! [`TickforgeError`] covers every failure the crate can report, from bad
//! generator input to terminal setup, so callers can match on the variant
//! they care about and use `?` everywhere else.

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, TickforgeError>;

/// Top-level error type returned by all public APIs.
#[derive(Debug, thiserror::Error)]
pub enum TickforgeError {
    /// A structural precondition was violated (empty series, zero bar
    /// count, zero window, inconsistent bar).
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Fewer bars were available than the calculation needs.
    #[error("insufficient data: need at least {required} bars, got {available}")]
    InsufficientData { required: usize, available: usize },

    /// An environment variable held a value that could not be used.
    #[error("configuration error: {0}")]
    Config(String),

    /// Terminal setup, drawing or teardown failed.
    #[error("io error: {0}")]
    Io(String),

    /// JSON serialization failed.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

impl TickforgeError {
    /// Shorthand for building an [`TickforgeError::InvalidInput`].
    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insufficient_data_message_names_counts() {
        let err = TickforgeError::InsufficientData {
            required: 2,
            available: 1,
        };
        assert_eq!(
            err.to_string(),
            "insufficient data: need at least 2 bars, got 1"
        );
    }

    #[test]
    fn invalid_input_wraps_message() {
        let err = TickforgeError::invalid("series is empty");
        assert!(matches!(err, TickforgeError::InvalidInput(ref m) if m == "series is empty"));
        assert_eq!(err.to_string(), "invalid input: series is empty");
    }
}
