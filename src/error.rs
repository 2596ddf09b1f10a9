use thiserror::Error;

/// Result alias for conversion operations
pub type ConvertResult<T> = Result<T, ConvertError>;

/// Errors produced by the conversion pipeline
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConvertError {
    /// The input value was not a string. Carries the JSON type name of the
    /// value that was actually received.
    #[error("Expected a string, but received {received}")]
    InvalidInputType { received: &'static str },
}
