/// Result alias that carries the custom [`AnimatorError`] type.
pub type Result<T> = std::result::Result<T, AnimatorError>;

/// Common error type for the core crate.
#[derive(Debug, thiserror::Error)]
pub enum AnimatorError {
    /// Generic error wrapping a readable message, used for conditions that do
    /// not warrant their own variant (poisoned locks and the like).
    #[error("{0}")]
    Message(String),
    /// A caller handed the animator a value it cannot work with, such as a
    /// non-positive counter duration.
    #[error("{0}")]
    InvalidInput(&'static str),
    /// Wrapper around standard IO errors.
    #[error("{0}")]
    Io(#[from] std::io::Error),
    /// Wrapper around JSON (de)serialization errors.
    #[error("{0}")]
    Json(#[from] serde_json::Error),
}

impl AnimatorError {
    /// Creates a new error that simply wraps the provided message.
    pub fn msg<T: Into<String>>(msg: T) -> Self {
        Self::Message(msg.into())
    }
}

impl From<&str> for AnimatorError {
    fn from(value: &str) -> Self {
        Self::msg(value)
    }
}

impl From<String> for AnimatorError {
    fn from(value: String) -> Self {
        Self::Message(value)
    }
}
