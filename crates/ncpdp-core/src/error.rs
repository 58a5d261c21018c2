//! Error types for NCPDP EMI claim processing

use thiserror::Error;

/// Result type alias for ncpdp-core/ncpdp-parser operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error taxonomy for header, segment, and claim codecs.
///
/// `UnknownSegment` is deliberately absent from this enum: per the wire
/// contract an unrecognized segment identifier is non-fatal. Callers that
/// want visibility into dropped segments should enable `tracing` output
/// rather than match on an error variant.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("input too short: expected at least {expected} characters, got {actual}")]
    ShortInput { expected: usize, actual: usize },

    #[error("field '{field}' value '{value}' exceeds maximum length {max_len}")]
    InvalidFieldLength {
        field: String,
        value: String,
        max_len: usize,
    },

    #[error("field '{field}' value '{value}' does not match the required shape")]
    InvalidFormat { field: String, value: String },

    #[error("field '{field}' value '{value}' is not a recognized code")]
    UnknownCode { field: String, value: String },

    #[error("invalid Overpunch value '{value}'")]
    InvalidOverpunch { value: String },

    #[error("segment '{segment_id}' is missing required field '{key}'")]
    MissingRequiredField { segment_id: String, key: String },

    #[error("claim is missing required segment '{segment}'")]
    MissingRequiredSegment { segment: String },

    #[error("segment '{segment}' appeared more than once")]
    DuplicateSegment { segment: String },
}
