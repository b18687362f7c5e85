//! Error types for the huffc codec.
//!
//! All operations return structured errors rather than panicking.
//! Failures are surfaced immediately to the caller; the transforms are
//! deterministic and stateless, so there is nothing to retry.

use crate::container::Mode;
use thiserror::Error;

/// Top-level error type for all operations in the system.
///
/// Each variant corresponds to a failure domain:
/// - Codec: tree construction or transform failures
/// - Container: sealed-container parsing failures
/// - CRC: data corruption detected in a container
/// - I/O: file system operations
#[derive(Debug, Error)]
pub enum Error {
    /// Codec error (e.g., empty input, malformed or truncated payload)
    #[error("codec error: {0}")]
    Codec(#[from] CodecError),

    /// Container error (e.g., invalid header, length mismatch)
    #[error("container error: {0}")]
    Container(#[from] ContainerError),

    /// CRC validation failed, indicating data corruption
    #[error("CRC mismatch: expected {expected:#010x}, got {actual:#010x}")]
    Crc { expected: u32, actual: u32 },

    /// File I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Codec errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CodecError {
    /// The input held zero bytes; no code can be built from zero symbols
    #[error("empty input: cannot build a code from zero bytes")]
    EmptyInput,

    /// A bit-string symbol outside {0, 1} appeared during decoding
    #[error("malformed symbol {symbol:?} at position {position}: expected '0' or '1'")]
    MalformedSymbol { symbol: char, position: usize },

    /// The payload ended while the decoder was mid-codeword
    #[error("truncated input: bit stream ended mid-codeword")]
    TruncatedInput,

    /// A codeword exceeded the 64-bit packing width
    #[error("code length {length} exceeds maximum 64")]
    CodeTooLong { length: usize },

    /// A byte with no codeword in the ring; the ring was built for a
    /// different alphabet. Mispairings that keep the alphabet compatible
    /// are not detectable.
    #[error("byte {byte:#04x} has no codeword in this ring")]
    RingMismatch { byte: u8 },
}

/// Sealed-container errors.
#[derive(Debug, Error)]
pub enum ContainerError {
    /// Invalid magic number in the container header
    #[error("invalid magic number: expected {expected:?}, got {actual:?}")]
    InvalidMagic { expected: [u8; 4], actual: [u8; 4] },

    /// Container is too small for its header or declared sections
    #[error("container too short: need at least {required} bytes, got {actual}")]
    TooShort { required: usize, actual: usize },

    /// Unrecognized mode tag
    #[error("unknown container mode {0:#04x}")]
    UnknownMode(u8),

    /// Ring section does not hold the entry count its own header declares
    #[error("ring section length mismatch: expected {expected} bytes, got {actual}")]
    RingLengthMismatch { expected: usize, actual: usize },

    /// Container was sealed in a different mode than the caller expects
    #[error("container mode mismatch: expected {expected:?}, got {actual:?}")]
    ModeMismatch { expected: Mode, actual: Mode },

    /// Encoded-mode payload is not valid '0'/'1' text
    #[error("encoded payload is not valid '0'/'1' text")]
    InvalidEncodedPayload,
}

/// Type alias for Result with our Error type
pub type Result<T> = std::result::Result<T, Error>;
