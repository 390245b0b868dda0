use thiserror::Error;

/// Failures raised by store operations. Absence on a read is not an error.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("Tag not found: {0}")]
    TagNotFound(String),

    #[error("Post not found: {0}")]
    PostNotFound(String),
}

impl StoreError {
    /// Machine-readable code surfaced to API clients.
    pub fn code(&self) -> &'static str {
        match self {
            StoreError::TagNotFound(_) => "TAG_NOT_FOUND",
            StoreError::PostNotFound(_) => "POST_NOT_FOUND",
        }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("{key} must be {expected}, got {value:?}")]
    Invalid {
        key: &'static str,
        expected: &'static str,
        value: String,
    },
}
