use thiserror::Error;

/// Errors produced while encoding a payload
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncodeError {
    /// The payload does not fit in a version 40 symbol at level L
    #[error("payload of {len} bytes exceeds the {max}-byte capacity of a version 40-L symbol")]
    DataTooLarge {
        /// Payload length in bytes
        len: usize,
        /// Largest payload that fits, in bytes
        max: usize,
    },
}

/// Result alias used throughout the encoder
pub type Result<T> = std::result::Result<T, EncodeError>;
