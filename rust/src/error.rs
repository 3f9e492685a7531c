use thiserror::Error;

/// Errors that can occur during UUID operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UuidError {
    #[error("Invalid namespace: {0} is not a UUID or a well-known namespace")]
    InvalidNamespace(String),
    #[error("Namespace is required for name-based UUIDs")]
    MissingNamespace,
    #[error("Name is required for name-based UUIDs")]
    MissingName,
    #[error("Unknown UUID version: {0} (expected one of v1, v3, v4, v5, v7, nil)")]
    UnknownVersion(String),
    #[error("Malformed UUID: {0}")]
    MalformedInput(String),
    #[error("Secure random source unavailable: {0}")]
    EntropyUnavailable(String),
    #[error("Embedded timestamp is out of range")]
    InvalidTimestamp,
}
