//! Whole-message parsing: split on the segment-separator, parse the header,
//! parse and collate the segments (C9 parse half).

use ncpdp_core::control::SEGMENT_SEPARATOR;
use ncpdp_core::error::Error;
use ncpdp_core::ClaimMessage;

use crate::{header, segment};

/// Parse a complete EMI claim message from its wire text.
///
/// The header occupies the first [`ncpdp_core::HEADER_LENGTH`] bytes of
/// the first segment-separator-delimited piece and is parsed from the raw
/// (untrimmed) piece, since its own fixed-width columns already carry
/// whatever padding they need. Every later piece is one segment; an
/// unrecognized segment identifier is dropped rather than rejected (see
/// [`segment::parse`]).
pub fn from_string(raw: &str) -> Result<ClaimMessage, Error> {
    let mut pieces = raw.split(SEGMENT_SEPARATOR);
    let header_piece = pieces.next().unwrap_or_default();
    let header = header::parse(header_piece)?;

    let mut segments = Vec::new();
    for piece in pieces {
        if piece.trim().is_empty() {
            continue;
        }
        if let Some(parsed) = segment::parse(piece)? {
            segments.push(parsed);
        }
    }

    ClaimMessage::from_segments(header, segments)
}

#[cfg(test)]
mod tests {
    use super::*;

    const S5_FULL_CLAIM: &str = concat!(
        "024368D0B1          1011790887081     20231110          ",
        "\u{1e}\u{1c}AM04\u{1c}C2ICN0001\u{1c}C1JOHN\u{1c}C3001\u{1c}A6CARD12345\u{1c}A7DOE",
        "\u{1e}\u{1c}AM01\u{1c}C419800115\u{1c}C51\u{1c}CASMITH\u{1c}CBJANE\u{1c}CP12345\u{1d}",
        "\u{1e}\u{1c}AM07\u{1c}EM01\u{1c}D2123456789012\u{1c}E101\u{1c}D700000000000\u{1c}SEAB",
        "\u{1c}E70000010000\u{1c}D31\u{1c}D530\u{1c}D60\u{1c}D81\u{1c}DE20231101\u{1c}DF0\u{1c}DJ01",
        "\u{1e}\u{1c}AM11\u{1c}D900000125C\u{1c}DC0000010B\u{1c}DQ00000150D\u{1c}DU0{",
    );

    #[test]
    fn parses_full_claim_with_only_required_segments() {
        let claim = from_string(S5_FULL_CLAIM).unwrap();
        assert_eq!(claim.insurance().last_name(), "DOE");
        assert_eq!(claim.patient().patient_zip(), "12345");
        assert_eq!(claim.claim().rx_ref_number(), "123456789012");
        assert_eq!(claim.pricing().other_amount_claimed(), "0{");
        assert!(claim.prescriber().is_none());
    }

    #[test]
    fn round_trips_full_claim_byte_exactly() {
        let claim = from_string(S5_FULL_CLAIM).unwrap();
        assert_eq!(claim.serialize(), S5_FULL_CLAIM);
    }

    #[test]
    fn round_trip_is_stable_under_reparsing() {
        let claim = from_string(S5_FULL_CLAIM).unwrap();
        let reparsed = from_string(&claim.serialize()).unwrap();
        assert_eq!(claim, reparsed);
    }

    #[test]
    fn missing_required_segment_is_an_error() {
        let header_only = &S5_FULL_CLAIM[..59];
        let err = from_string(header_only).unwrap_err();
        assert!(matches!(err, Error::MissingRequiredSegment { .. }));
    }
}
