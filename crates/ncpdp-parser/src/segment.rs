//! Segment dispatch and per-variant parsing (C7/C8 parse halves).
//!
//! A raw segment is a segment identifier followed by zero or more
//! key-prefixed pieces; ordering of the pieces on the wire is not
//! significant (property 5), and a two-character key this variant
//! doesn't recognize is skipped silently rather than rejected (forward
//! compatibility).

use tracing::warn;

use ncpdp_core::control::{FIELD_SEPARATOR, GROUP_SEPARATOR};
use ncpdp_core::enums::{
    Gender, PrescriptionServiceReferenceNumberQualifier, ProductServiceIdQualifier,
    SpecialPackagingIndicator,
};
use ncpdp_core::error::Error;
use ncpdp_core::segment::{
    self, ClaimSegment, Clinical, Insurance, Patient, PharmacyProvider, Prescriber, Pricing,
    Segment, SegmentKind,
};

/// Parse one raw segment slice into a typed [`Segment`], or `None` if the
/// segment identifier is not recognized — that's non-fatal per the wire
/// contract, so the caller just drops it and keeps going.
///
/// `raw` may or may not carry the leading field-separator that
/// [`Segment::serialize`] prepends: pieces coming out of
/// [`crate::claim::from_string`] do, hand-written segment literals (and
/// the scenario seeds) usually don't. Either is accepted. A trailing
/// group-separator (only ever meaningful after a Patient segment) is
/// likewise stripped before dispatch.
pub fn parse(raw: &str) -> Result<Option<Segment>, Error> {
    let trimmed = raw.trim();
    let trimmed = trimmed.strip_prefix(FIELD_SEPARATOR).unwrap_or(trimmed);
    let trimmed = trimmed.strip_suffix(GROUP_SEPARATOR).unwrap_or(trimmed);

    let mut pieces = trimmed.split(FIELD_SEPARATOR);
    let segment_id = match pieces.next() {
        Some(id) if !id.is_empty() => id,
        _ => return Ok(None),
    };

    let kind = match segment::lookup(segment_id) {
        Some(kind) => kind,
        None => {
            warn!(segment_id, "dropping unrecognized segment identifier");
            return Ok(None);
        }
    };

    let fields: Vec<(&str, &str)> = pieces
        .filter(|piece| piece.len() >= 2)
        .map(|piece| piece.split_at(2))
        .collect();

    let segment = match kind {
        SegmentKind::Insurance => Segment::Insurance(parse_insurance(segment_id, &fields)?),
        SegmentKind::Patient => Segment::Patient(parse_patient(segment_id, &fields)?),
        SegmentKind::Claim => Segment::Claim(parse_claim(segment_id, &fields)?),
        SegmentKind::Pricing => Segment::Pricing(parse_pricing(segment_id, &fields)?),
        SegmentKind::Prescriber => Segment::Prescriber(parse_prescriber(segment_id, &fields)?),
        SegmentKind::PharmacyProvider => {
            Segment::PharmacyProvider(parse_pharmacy_provider(segment_id, &fields)?)
        }
        SegmentKind::Clinical => Segment::Clinical(parse_clinical(segment_id, &fields)?),
    };

    Ok(Some(segment))
}

fn find<'a>(fields: &[(&'a str, &'a str)], key: &str) -> Option<&'a str> {
    fields.iter().find(|(k, _)| *k == key).map(|(_, v)| *v)
}

fn require<'a>(segment_id: &str, fields: &[(&'a str, &'a str)], key: &str) -> Result<&'a str, Error> {
    find(fields, key).ok_or_else(|| Error::MissingRequiredField {
        segment_id: segment_id.to_string(),
        key: key.to_string(),
    })
}

fn parse_insurance(segment_id: &str, fields: &[(&str, &str)]) -> Result<Insurance, Error> {
    Ok(Insurance::new(
        require(segment_id, fields, "C1")?,
        require(segment_id, fields, "C2")?,
        require(segment_id, fields, "C3")?,
        require(segment_id, fields, "A6")?,
        require(segment_id, fields, "A7")?,
    ))
}

fn parse_patient(segment_id: &str, fields: &[(&str, &str)]) -> Result<Patient, Error> {
    let gender = Gender::parse("patient_gender", require(segment_id, fields, "C5")?)?;
    Patient::new(
        require(segment_id, fields, "C4")?,
        gender,
        require(segment_id, fields, "CA")?,
        require(segment_id, fields, "CB")?,
        require(segment_id, fields, "CP")?,
    )
}

fn parse_claim(segment_id: &str, fields: &[(&str, &str)]) -> Result<ClaimSegment, Error> {
    let rx_ref_qualifier = PrescriptionServiceReferenceNumberQualifier::parse(
        "rx_ref_qualifier",
        require(segment_id, fields, "EM")?,
    )?;
    let product_service_id_qualifier = ProductServiceIdQualifier::parse(
        "product_service_id_qualifier",
        require(segment_id, fields, "E1")?,
    )?;
    let special_packaging_indicator = find(fields, "DT")
        .map(|v| SpecialPackagingIndicator::parse("special_packaging_indicator", v))
        .transpose()?;

    ClaimSegment::new(
        rx_ref_qualifier,
        require(segment_id, fields, "D2")?,
        product_service_id_qualifier,
        require(segment_id, fields, "D7")?,
        require(segment_id, fields, "SE")?,
        require(segment_id, fields, "E7")?,
        require(segment_id, fields, "D3")?,
        require(segment_id, fields, "D5")?,
        require(segment_id, fields, "D6")?,
        require(segment_id, fields, "D8")?,
        require(segment_id, fields, "DE")?,
        require(segment_id, fields, "DF")?,
        require(segment_id, fields, "DJ")?,
        special_packaging_indicator,
        find(fields, "EB").map(str::to_string),
    )
}

fn parse_pricing(segment_id: &str, fields: &[(&str, &str)]) -> Result<Pricing, Error> {
    Ok(Pricing::new(
        require(segment_id, fields, "D9")?,
        require(segment_id, fields, "DC")?,
        find(fields, "E3").map(str::to_string),
        require(segment_id, fields, "DQ")?,
        require(segment_id, fields, "DU")?,
    ))
}

fn parse_prescriber(segment_id: &str, fields: &[(&str, &str)]) -> Result<Prescriber, Error> {
    Ok(Prescriber::new(
        require(segment_id, fields, "EZ")?,
        require(segment_id, fields, "DB")?,
    ))
}

fn parse_pharmacy_provider(
    segment_id: &str,
    fields: &[(&str, &str)],
) -> Result<PharmacyProvider, Error> {
    Ok(PharmacyProvider::new(require(segment_id, fields, "DZ")?))
}

fn parse_clinical(segment_id: &str, fields: &[(&str, &str)]) -> Result<Clinical, Error> {
    Ok(Clinical::new(
        require(segment_id, fields, "7E")?,
        require(segment_id, fields, "E5")?,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_scenario_s2_insurance() {
        let raw = "AM04\u{1c}C1JOHN\u{1c}C2ICN0001\u{1c}C3001\u{1c}A6CARD12345\u{1c}A7DOE";
        let segment = parse(raw).unwrap().unwrap();
        match segment {
            Segment::Insurance(ins) => {
                assert_eq!(ins.first_name(), "JOHN");
                assert_eq!(ins.internal_control_number(), "ICN0001");
                assert_eq!(ins.person_code(), "001");
                assert_eq!(ins.cardholder_id(), "CARD12345");
                assert_eq!(ins.last_name(), "DOE");
            }
            _ => panic!("expected Insurance"),
        }
    }

    #[test]
    fn reserializes_scenario_s2_in_canonical_order() {
        let raw = "AM04\u{1c}C1JOHN\u{1c}C2ICN0001\u{1c}C3001\u{1c}A6CARD12345\u{1c}A7DOE";
        let segment = parse(raw).unwrap().unwrap();
        assert_eq!(
            segment.serialize(),
            "\u{1c}AM04\u{1c}C2ICN0001\u{1c}C1JOHN\u{1c}C3001\u{1c}A6CARD12345\u{1c}A7DOE"
        );
    }

    #[test]
    fn parses_scenario_s4_patient_with_dob_and_gender() {
        let raw = "AM01\u{1c}C419800115\u{1c}C51\u{1c}CASMITH\u{1c}CBJANE\u{1c}CP12345";
        let segment = parse(raw).unwrap().unwrap();
        match segment {
            Segment::Patient(p) => {
                assert_eq!(p.dob(), "19800115");
                assert_eq!(p.patient_gender(), Gender::Male);
            }
            _ => panic!("expected Patient"),
        }
    }

    #[test]
    fn parsing_is_order_insensitive() {
        let forward = "AM04\u{1c}C1JOHN\u{1c}C2ICN0001\u{1c}C3001\u{1c}A6CARD12345\u{1c}A7DOE";
        let shuffled = "AM04\u{1c}A7DOE\u{1c}C3001\u{1c}C1JOHN\u{1c}A6CARD12345\u{1c}C2ICN0001";
        assert_eq!(parse(forward).unwrap(), parse(shuffled).unwrap());
    }

    #[test]
    fn unknown_key_is_ignored() {
        let raw = "AM04\u{1c}C1JOHN\u{1c}C2ICN0001\u{1c}C3001\u{1c}A6CARD12345\u{1c}A7DOE\u{1c}ZZbogus";
        assert!(parse(raw).unwrap().is_some());
    }

    #[test]
    fn unknown_segment_id_is_dropped_not_an_error() {
        assert_eq!(parse("ZZ99\u{1c}X1value").unwrap(), None);
    }

    #[test]
    fn missing_required_key_is_an_error() {
        let raw = "AM04\u{1c}C1JOHN";
        let err = parse(raw).unwrap_err();
        assert!(matches!(err, Error::MissingRequiredField { .. }));
    }

    #[test]
    fn leading_field_separator_and_trailing_group_separator_are_tolerated() {
        let raw = "\u{1c}AM01\u{1c}C419800115\u{1c}C51\u{1c}CASMITH\u{1c}CBJANE\u{1c}CP12345\u{1d}";
        assert!(parse(raw).unwrap().is_some());
    }
}
