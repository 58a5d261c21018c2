//! Integration tests for the `ncpdp-emi` facade: end-to-end parsing and
//! round-tripping of whole claim messages, exercising the scenario seeds
//! and the facade's collaborator boundary functions.

use ncpdp_emi::{encode_payload, parser, ClaimMessage, Error, Gender, TransactionCode, Version};

const S5_ALL_SEVEN_SEGMENTS: &str = concat!(
    "024368D0B1          1011790887081     20231110          ",
    "\u{1e}\u{1c}AM04\u{1c}C2ICN0001\u{1c}C1JOHN\u{1c}C3001\u{1c}A6CARD12345\u{1c}A7DOE",
    "\u{1e}\u{1c}AM01\u{1c}C419800115\u{1c}C51\u{1c}CASMITH\u{1c}CBJANE\u{1c}CP12345\u{1d}",
    "\u{1e}\u{1c}AM07\u{1c}EM01\u{1c}D2123456789012\u{1c}E101\u{1c}D700000000000\u{1c}SEAB",
    "\u{1c}E70000010000\u{1c}D31\u{1c}D530\u{1c}D60\u{1c}D81\u{1c}DE20231101\u{1c}DF0\u{1c}DJ01",
    "\u{1e}\u{1c}AM11\u{1c}D900000125C\u{1c}DC0000010B\u{1c}DQ00000150D\u{1c}DU0{",
    "\u{1e}\u{1c}AM03\u{1c}EZ01\u{1c}DB1234567890",
    "\u{1e}\u{1c}AM06\u{1c}DZGRP001",
    "\u{1e}\u{1c}AM08\u{1c}7E2\u{1c}E503",
);

#[test]
fn parses_full_claim_with_all_seven_segments() {
    let claim = parser::from_string(S5_ALL_SEVEN_SEGMENTS).unwrap();

    assert_eq!(claim.header().rxbin(), "024368");
    assert_eq!(claim.header().version(), Version::D0);
    assert_eq!(claim.header().transaction_code(), TransactionCode::Billing);
    assert_eq!(claim.insurance().last_name(), "DOE");
    assert_eq!(claim.patient().patient_gender(), Gender::Male);
    assert_eq!(claim.claim().rx_ref_number(), "123456789012");
    assert_eq!(claim.pricing().other_amount_claimed(), "0{");
    assert_eq!(claim.prescriber().unwrap().prescriber_id(), "1234567890");
    assert_eq!(claim.pharmacy_provider().unwrap().group_id(), "GRP001");
    assert_eq!(claim.clinical().unwrap().other_payer_id_qualifier(), "03");
}

#[test]
fn round_trips_full_claim_byte_exactly_s5() {
    let claim = parser::from_string(S5_ALL_SEVEN_SEGMENTS).unwrap();
    let wire = claim.serialize();
    assert_eq!(wire, S5_ALL_SEVEN_SEGMENTS);

    let gs = wire.find('\u{1d}').expect("group separator present");
    let next_rs = wire[gs..].find('\u{1e}').map(|i| i + gs);
    assert_eq!(
        next_rs,
        Some(gs + 1),
        "group separator must be immediately followed by the next segment separator"
    );
    assert_eq!(wire.matches('\u{1d}').count(), 1);
}

#[test]
fn reparsing_a_serialized_claim_is_stable() {
    let claim = parser::from_string(S5_ALL_SEVEN_SEGMENTS).unwrap();
    let reparsed: ClaimMessage = parser::from_string(&claim.serialize()).unwrap();
    assert_eq!(claim, reparsed);
}

#[test]
fn header_of_length_40_is_short_input() {
    let err = parser::parse_header(&S5_ALL_SEVEN_SEGMENTS[..40]).unwrap_err();
    assert!(matches!(err, Error::ShortInput { .. }));
}

#[test]
fn header_with_unknown_version_is_unknown_code() {
    let mut bytes = S5_ALL_SEVEN_SEGMENTS.as_bytes()[..56].to_vec();
    bytes[6] = b'Z';
    bytes[7] = b'Z';
    let header = String::from_utf8(bytes).unwrap();
    let err = parser::parse_header(&header).unwrap_err();
    assert!(matches!(err, Error::UnknownCode { .. }));
}

#[test]
fn encode_payload_round_trips_through_base64() {
    use base64::Engine as _;

    let claim = parser::from_string(S5_ALL_SEVEN_SEGMENTS).unwrap();
    let encoded = encode_payload(&claim);
    let decoded = base64::engine::general_purpose::STANDARD
        .decode(encoded)
        .unwrap();
    assert_eq!(
        String::from_utf8(decoded).unwrap(),
        S5_ALL_SEVEN_SEGMENTS.to_string()
    );
}

#[test]
fn parse_from_file_round_trips() {
    let dir = std::env::temp_dir();
    let path = dir.join(format!(
        "ncpdp-emi-integration-test-{}.txt",
        std::process::id()
    ));
    std::fs::write(&path, S5_ALL_SEVEN_SEGMENTS).unwrap();

    let claim = ncpdp_emi::parse_from_file(&path).unwrap();
    assert_eq!(claim.serialize(), S5_ALL_SEVEN_SEGMENTS);

    std::fs::remove_file(&path).unwrap();
}

#[test]
fn unknown_segment_identifier_is_dropped_not_rejected() {
    let with_trailer = format!("{S5_ALL_SEVEN_SEGMENTS}\u{1e}\u{1c}ZZ99\u{1c}X1bogus");
    let claim = parser::from_string(&with_trailer).unwrap();
    assert_eq!(claim.serialize(), S5_ALL_SEVEN_SEGMENTS);
}

#[test]
fn whitespace_around_a_segment_does_not_change_the_result() {
    let padded = S5_ALL_SEVEN_SEGMENTS.replacen(
        "\u{1e}\u{1c}AM03",
        "\u{1e}   \u{1c}AM03",
        1,
    );
    let a = parser::from_string(S5_ALL_SEVEN_SEGMENTS).unwrap();
    let b = parser::from_string(&padded).unwrap();
    assert_eq!(a, b);
}
