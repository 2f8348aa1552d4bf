use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CollectError {
    #[error("IO error: {0}")]
    Io(String),

    #[error("JSON error: {0}")]
    Json(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Image error: {0}")]
    Image(String),

    #[error("Anyhow error: {0}")]
    Anyhow(String),
}

impl From<serde_json::Error> for CollectError {
    fn from(err: serde_json::Error) -> Self {
        CollectError::Json(err.to_string())
    }
}

impl From<io::Error> for CollectError {
    fn from(err: io::Error) -> Self {
        CollectError::Io(err.to_string())
    }
}

impl From<anyhow::Error> for CollectError {
    fn from(err: anyhow::Error) -> Self {
        // {:#} keeps the context chain on one line
        CollectError::Anyhow(format!("{:#}", err))
    }
}

/// Input rejected by the feed store. Shown to the user as a blocking alert.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please add text or select an image before posting.")]
    EmptyPost,

    #[error("Please write something before posting.")]
    EmptyComment,
}

impl ValidationError {
    pub fn title(&self) -> &'static str {
        match self {
            ValidationError::EmptyPost => "Empty Post",
            ValidationError::EmptyComment => "Empty Comment",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_errors_carry_alert_text() {
        assert_eq!(ValidationError::EmptyPost.title(), "Empty Post");
        assert_eq!(
            ValidationError::EmptyComment.to_string(),
            "Please write something before posting."
        );
    }

    #[test]
    fn io_errors_convert() {
        let err: CollectError = io::Error::new(io::ErrorKind::NotFound, "gone").into();
        assert!(matches!(err, CollectError::Io(msg) if msg == "gone"));
    }
}
