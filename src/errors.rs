//! Shared error types for the crate

use thiserror::Error;

/// Main error type for pagescore operations
#[derive(Debug, Error)]
pub enum Error {
    /// Curve parameters or limits that no audit can be computed with.
    ///
    /// This signals a programming error in the caller's constants, not a
    /// problem with the captured page.
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// A raw metric value that cannot be scored (NaN, infinite)
    #[error("Invalid metric: {0}")]
    InvalidMetric(String),

    /// Chain tree deeper than the configured guard
    #[error("Request chain through {id} reached depth {depth} (limit {max_depth})")]
    ChainTooDeep {
        id: String,
        depth: usize,
        max_depth: usize,
    },

    /// No network record matched the requested URL
    #[error("No request found for {0}")]
    MissingRequest(String),

    /// A record lacks the sub-timings an audit needs
    #[error("Request {0} has no timing information")]
    MissingTiming(String),

    /// Configuration file errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Generic errors with context
    #[error("{context}: {message}")]
    WithContext { context: String, message: String },

    /// IO errors
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// JSON errors
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Create an invalid configuration error
    pub fn invalid_configuration(message: impl Into<String>) -> Self {
        Self::InvalidConfiguration(message.into())
    }

    /// Create an invalid metric error
    pub fn invalid_metric(message: impl Into<String>) -> Self {
        Self::InvalidMetric(message.into())
    }

    /// Add context to an error
    pub fn with_context(self, context: impl Into<String>) -> Self {
        Self::WithContext {
            context: context.into(),
            message: self.to_string(),
        }
    }

    /// Prefix a configuration error with the field it came from, keeping
    /// its kind
    pub fn for_field(self, field: &str) -> Self {
        match self {
            Self::InvalidConfiguration(message) => {
                Self::InvalidConfiguration(format!("{}: {}", field, message))
            }
            other => other.with_context(field),
        }
    }

    /// Whether the error points at caller-supplied constants rather than
    /// the captured page data.
    pub fn is_programming_error(&self) -> bool {
        matches!(self, Self::InvalidConfiguration(_))
    }
}

/// Result type alias using our error type
pub type Result<T> = std::result::Result<T, Error>;

/// Extension trait for adding context to Results
pub trait ResultExt<T> {
    /// Add context to an error
    fn context(self, context: impl Into<String>) -> Result<T>;
}

impl<T> ResultExt<T> for Result<T> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| e.with_context(context))
    }
}
