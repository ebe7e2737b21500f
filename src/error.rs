//! Error types for sterile operations.
//!
//! The text transforms themselves never fail: unmappable input is absorbed
//! into the output. Errors only arise at the I/O edge (reading input for the
//! CLI) or from invalid caller-supplied configuration.

use thiserror::Error;

/// Errors that can occur while reading input or configuring an operation.
#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Unknown operation: {0}")]
    UnknownOperation(String),

    #[error("Invalid option: {0}")]
    InvalidOption(String),
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = Error::UnknownOperation("frobnicate".into());
        assert_eq!(err.to_string(), "Unknown operation: frobnicate");

        let err: Error = std::io::Error::other("closed").into();
        assert_eq!(err.to_string(), "I/O error: closed");
    }
}
