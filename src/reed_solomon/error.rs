//! Error types for Reed-Solomon codec operations

use super::correction::Uncorrectable;
use thiserror::Error;

/// Errors that can occur while configuring or running the codec
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RsError {
    /// Parity symbol count outside 1..=max
    #[error("Invalid parity symbol count {requested}: must be between 1 and {max}")]
    InvalidParitySymbols { requested: usize, max: usize },

    /// Message plus parity would exceed the 255-symbol codeword bound
    #[error("Message of {len} bytes exceeds the maximum of {max} for this configuration")]
    MessageTooLong { len: usize, max: usize },

    /// Received word longer than a GF(256) codeword
    #[error("Received word of {len} bytes exceeds the maximum codeword length {max}")]
    ReceivedTooLong { len: usize, max: usize },

    /// Caller-owned destination buffer has the wrong size
    #[error("Destination buffer is {actual} bytes, expected exactly {expected}")]
    BufferSizeMismatch { expected: usize, actual: usize },

    /// Polynomial would not fit the fixed coefficient capacity
    #[error("Polynomial of degree {degree} exceeds capacity of {capacity} coefficients")]
    PolynomialOverflow { degree: usize, capacity: usize },

    /// The correction stage gave up on a corrupted word
    #[error("Uncorrectable codeword: {0}")]
    Uncorrectable(#[from] Uncorrectable),
}

/// Type alias for Result with RsError
pub type RsResult<T> = std::result::Result<T, RsError>;
