//! Core data structures for NCPDP Telecommunication EMI pharmacy claim wire
//! messages.
//!
//! This crate owns shapes and invariants: the control-byte vocabulary, the
//! fixed-width Transaction Header, the Overpunch signed-decimal codec, the
//! closed enumerations, the segment tagged union and its static registry,
//! and the `ClaimMessage` aggregate — each with construction-time
//! validation and an infallible `serialize`. Turning wire text into these
//! types lives in `ncpdp-parser`; this crate has no I/O and no async
//! runtime.

pub mod claim;
pub mod control;
pub mod date;
pub mod enums;
pub mod error;
pub mod field;
pub mod header;
pub mod overpunch;
pub mod segment;

pub use claim::ClaimMessage;
pub use control::{FIELD_SEPARATOR, GROUP_SEPARATOR, HEADER_LENGTH, SEGMENT_SEPARATOR};
pub use enums::{
    Gender, PaddingDirection, PrescriptionServiceReferenceNumberQualifier,
    ProductServiceIdQualifier, SpecialPackagingIndicator, TransactionCode, Version,
};
pub use error::{Error, Result};
pub use header::TransactionHeader;
pub use segment::{
    ClaimSegment, Clinical, Insurance, Patient, PharmacyProvider, Prescriber, Pricing, Segment,
    SegmentKind,
};
