//! Wire text to typed-value parsing for NCPDP Telecommunication EMI claim
//! messages.
//!
//! This crate owns the parse half of the codec: splitting a message on the
//! control bytes, validating shape, and producing the types `ncpdp-core`
//! defines. It has no I/O of its own — callers hand it an already-read
//! `&str`.

mod claim;
mod header;
mod segment;

pub use claim::from_string;
pub use header::parse as parse_header;
pub use segment::parse as parse_segment;
