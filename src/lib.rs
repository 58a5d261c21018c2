//! # ncpdp-emi
//!
//! A codec for NCPDP Telecommunication "EMI" wire-form pharmacy claims: a
//! fixed-width Transaction Header followed by delimited segments, with a
//! byte-exact round-trip guarantee between `from_string` and `serialize`.
//!
//! ## Quick Start
//!
//! ```rust
//! use ncpdp_emi::{ClaimMessage, parser};
//!
//! let wire = concat!(
//!     "024368D0B1          1011790887081     20231110          ",
//!     "\u{1e}\u{1c}AM04\u{1c}C2ICN0001\u{1c}C1JOHN\u{1c}C3001\u{1c}A6CARD12345\u{1c}A7DOE",
//!     "\u{1e}\u{1c}AM01\u{1c}C419800115\u{1c}C51\u{1c}CASMITH\u{1c}CBJANE\u{1c}CP12345\u{1d}",
//!     "\u{1e}\u{1c}AM07\u{1c}EM01\u{1c}D2123456789012\u{1c}E101\u{1c}D700000000000\u{1c}SEAB",
//!     "\u{1c}E70000010000\u{1c}D31\u{1c}D530\u{1c}D60\u{1c}D81\u{1c}DE20231101\u{1c}DF0\u{1c}DJ01",
//!     "\u{1e}\u{1c}AM11\u{1c}D900000125C\u{1c}DC0000010B\u{1c}DQ00000150D\u{1c}DU0{",
//! );
//!
//! let claim: ClaimMessage = parser::from_string(wire).unwrap();
//! assert_eq!(claim.serialize(), wire);
//! ```

pub use ncpdp_core as core;
pub use ncpdp_parser as parser;

pub use ncpdp_core::{
    ClaimMessage, ClaimSegment, Clinical, Error, Gender, Insurance, PaddingDirection, Patient,
    PharmacyProvider, Prescriber, Pricing, PrescriptionServiceReferenceNumberQualifier,
    ProductServiceIdQualifier, Result, Segment, SegmentKind, SpecialPackagingIndicator,
    TransactionCode, TransactionHeader, Version,
};

use std::path::Path;

/// Errors raised by the file-loading collaborator, on top of the codec's
/// own [`Error`].
#[derive(Debug, thiserror::Error)]
pub enum FileError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error(transparent)]
    Parse(#[from] Error),
}

/// Base64-encode a claim's serialized wire text, the shape an external HTTP
/// client wraps into its transport envelope.
///
/// Out of scope: the envelope itself and the HTTP client that sends it —
/// only this encoding step is specified here.
pub fn encode_payload(claim: &ClaimMessage) -> String {
    use base64::Engine as _;
    base64::engine::general_purpose::STANDARD.encode(claim.serialize().into_bytes())
}

/// Read a file containing the raw wire text of a claim and parse it.
pub fn parse_from_file(path: impl AsRef<Path>) -> std::result::Result<ClaimMessage, FileError> {
    let path = path.as_ref();
    let contents = std::fs::read_to_string(path).map_err(|source| FileError::Io {
        path: path.display().to_string(),
        source,
    })?;
    Ok(parser::from_string(&contents)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    const WIRE: &str = concat!(
        "024368D0B1          1011790887081     20231110          ",
        "\u{1e}\u{1c}AM04\u{1c}C2ICN0001\u{1c}C1JOHN\u{1c}C3001\u{1c}A6CARD12345\u{1c}A7DOE",
        "\u{1e}\u{1c}AM01\u{1c}C419800115\u{1c}C51\u{1c}CASMITH\u{1c}CBJANE\u{1c}CP12345\u{1d}",
        "\u{1e}\u{1c}AM07\u{1c}EM01\u{1c}D2123456789012\u{1c}E101\u{1c}D700000000000\u{1c}SEAB",
        "\u{1c}E70000010000\u{1c}D31\u{1c}D530\u{1c}D60\u{1c}D81\u{1c}DE20231101\u{1c}DF0\u{1c}DJ01",
        "\u{1e}\u{1c}AM11\u{1c}D900000125C\u{1c}DC0000010B\u{1c}DQ00000150D\u{1c}DU0{",
    );

    #[test]
    fn encode_payload_is_standard_base64_of_the_wire_bytes() {
        let claim = parser::from_string(WIRE).unwrap();
        let encoded = encode_payload(&claim);
        use base64::Engine as _;
        let decoded = base64::engine::general_purpose::STANDARD
            .decode(encoded)
            .unwrap();
        assert_eq!(String::from_utf8(decoded).unwrap(), WIRE);
    }

    #[test]
    fn parse_from_file_reads_and_parses() {
        let dir = std::env::temp_dir();
        let path = dir.join(format!("ncpdp-emi-test-{}.txt", std::process::id()));
        std::fs::write(&path, WIRE).unwrap();
        let claim = parse_from_file(&path).unwrap();
        assert_eq!(claim.serialize(), WIRE);
        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn parse_from_file_reports_io_error() {
        let err = parse_from_file("/nonexistent/path/does-not-exist.txt").unwrap_err();
        assert!(matches!(err, FileError::Io { .. }));
    }
}
