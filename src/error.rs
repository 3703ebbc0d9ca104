//! Errors reported by decoders and by payload dispatch.

use thiserror::Error;

/// An error decoding a payload.
///
/// Decoding is all-or-nothing: no reading is produced alongside an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// The payload does not have the length required by its format. An absent
    /// payload is reported as an empty one.
    #[error("Invalid payload length. Expected {expected} bytes, got {actual}.")]
    InvalidLength { expected: usize, actual: usize },
}

/// An error selecting a decoder for a payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FormatError {
    /// No payload format has this length.
    #[error("No payload format is {length} bytes long.")]
    UnrecognizedLength { length: usize },
    /// No payload format is assigned to this port.
    #[error("No payload format is assigned to port {port}.")]
    UnmappedPort { port: u8 },
    /// The selected decoder rejected the payload.
    #[error(transparent)]
    Decode(#[from] DecodeError),
}
