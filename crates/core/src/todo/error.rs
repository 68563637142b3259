use thiserror::Error;

/// Errors raised when a value does not match the [`Todo`](super::Todo) shape.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ShapeError {
    #[error("Value does not match the todo shape: {0}")]
    Mismatch(String),
}

impl From<serde_json::Error> for ShapeError {
    fn from(err: serde_json::Error) -> Self {
        Self::Mismatch(err.to_string())
    }
}
