//! Segment tagged union, the static segment registry, and the segment
//! codecs' serialize halves (C7/C8 core half).
//!
//! Parsing (turning wire bytes into these typed variants) lives in
//! `ncpdp-parser`; this module owns shapes, construction-time validation,
//! and serialization. There is no runtime reflection here — each variant
//! is a plain struct and dispatch is a `match`, not a key-map held on a
//! base class.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::control::{FIELD_SEPARATOR, GROUP_SEPARATOR};
use crate::date::is_valid_yyyymmdd;
use crate::enums::{
    Gender, PrescriptionServiceReferenceNumberQualifier, ProductServiceIdQualifier,
    SpecialPackagingIndicator,
};
use crate::error::Error;
use crate::overpunch;

/// Which segment variant a 4-character segment identifier maps to.
///
/// Looked up once per raw segment via [`lookup`]; an identifier outside
/// this set means the segment is dropped, which is non-fatal per the wire
/// contract (forward compatibility with segments this crate doesn't know
/// about yet).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SegmentKind {
    Insurance,
    Patient,
    Claim,
    Pricing,
    Prescriber,
    PharmacyProvider,
    Clinical,
}

impl SegmentKind {
    pub const fn id(self) -> &'static str {
        match self {
            SegmentKind::Insurance => Insurance::ID,
            SegmentKind::Patient => Patient::ID,
            SegmentKind::Claim => ClaimSegment::ID,
            SegmentKind::Pricing => Pricing::ID,
            SegmentKind::Prescriber => Prescriber::ID,
            SegmentKind::PharmacyProvider => PharmacyProvider::ID,
            SegmentKind::Clinical => Clinical::ID,
        }
    }
}

const ALL_KINDS: [SegmentKind; 7] = [
    SegmentKind::Insurance,
    SegmentKind::Patient,
    SegmentKind::Claim,
    SegmentKind::Pricing,
    SegmentKind::Prescriber,
    SegmentKind::PharmacyProvider,
    SegmentKind::Clinical,
];

/// The process-wide immutable segment-id lookup table (spec's "only
/// process-wide state"), built once on first access.
pub static REGISTRY: Lazy<HashMap<&'static str, SegmentKind>> =
    Lazy::new(|| ALL_KINDS.into_iter().map(|kind| (kind.id(), kind)).collect());

/// Look up which variant a wire segment identifier maps to, if any.
pub fn lookup(segment_id: &str) -> Option<SegmentKind> {
    REGISTRY.get(segment_id).copied()
}

fn push_piece(out: &mut String, key: &str, value: &str) {
    out.push(FIELD_SEPARATOR);
    out.push_str(key);
    out.push_str(value);
}

/// Insurance segment (`AM04`): payer and cardholder identity.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Insurance {
    first_name: String,
    internal_control_number: String,
    person_code: String,
    cardholder_id: String,
    last_name: String,
}

impl Insurance {
    pub const ID: &'static str = "AM04";

    pub fn new(
        first_name: impl Into<String>,
        internal_control_number: impl Into<String>,
        person_code: impl Into<String>,
        cardholder_id: impl Into<String>,
        last_name: impl Into<String>,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            internal_control_number: internal_control_number.into(),
            person_code: person_code.into(),
            cardholder_id: cardholder_id.into(),
            last_name: last_name.into(),
        }
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn internal_control_number(&self) -> &str {
        &self.internal_control_number
    }

    pub fn person_code(&self) -> &str {
        &self.person_code
    }

    pub fn cardholder_id(&self) -> &str {
        &self.cardholder_id
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    /// Canonical wire order is `C2, C1, C3, A6, A7` — internal control
    /// number first, matching the order the scenario seeds expect on
    /// re-serialization.
    pub fn serialize(&self) -> String {
        let mut out = String::new();
        out.push(FIELD_SEPARATOR);
        out.push_str(Self::ID);
        push_piece(&mut out, "C2", &self.internal_control_number);
        push_piece(&mut out, "C1", &self.first_name);
        push_piece(&mut out, "C3", &self.person_code);
        push_piece(&mut out, "A6", &self.cardholder_id);
        push_piece(&mut out, "A7", &self.last_name);
        out
    }
}

/// Patient segment (`AM01`): demographics.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Patient {
    dob: String,
    patient_gender: Gender,
    last_name: String,
    first_name: String,
    patient_zip: String,
}

impl Patient {
    pub const ID: &'static str = "AM01";

    pub fn new(
        dob: impl Into<String>,
        patient_gender: Gender,
        last_name: impl Into<String>,
        first_name: impl Into<String>,
        patient_zip: impl Into<String>,
    ) -> Result<Self, Error> {
        let dob = dob.into();
        if !is_valid_yyyymmdd(&dob) {
            return Err(Error::InvalidFormat {
                field: "dob".to_string(),
                value: dob,
            });
        }

        Ok(Self {
            dob,
            patient_gender,
            last_name: last_name.into(),
            first_name: first_name.into(),
            patient_zip: patient_zip.into(),
        })
    }

    pub fn dob(&self) -> &str {
        &self.dob
    }

    pub fn patient_gender(&self) -> Gender {
        self.patient_gender
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn patient_zip(&self) -> &str {
        &self.patient_zip
    }

    /// Serializes without the trailing group-separator; `ClaimMessage`
    /// appends that when the Patient segment is emitted as part of a
    /// whole claim (see the Design Notes' resolution of the open question
    /// on where that separator "belongs").
    pub fn serialize(&self) -> String {
        let mut out = String::new();
        out.push(FIELD_SEPARATOR);
        out.push_str(Self::ID);
        push_piece(&mut out, "C4", &self.dob);
        push_piece(&mut out, "C5", self.patient_gender.as_str());
        push_piece(&mut out, "CA", &self.last_name);
        push_piece(&mut out, "CB", &self.first_name);
        push_piece(&mut out, "CP", &self.patient_zip);
        out
    }
}

/// Claim segment (`AM07`): the drug/quantity/fill details of the claim.
///
/// `special_packaging_indicator` and `other_coverage_code` are optional —
/// the distilled spec doesn't call that out, but `original_source`'s
/// `ClaimSegment` declares both `| None = None`, so that's carried here.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ClaimSegment {
    rx_ref_qualifier: PrescriptionServiceReferenceNumberQualifier,
    rx_ref_number: String,
    product_service_id_qualifier: ProductServiceIdQualifier,
    product_service_id: String,
    procedure_modifiers: String,
    quantity_dispensed: String,
    fill_number: String,
    days_supply: String,
    refills_authorized: String,
    daw_code: String,
    date_prescription_written: String,
    number_authorized_refills: String,
    prescription_origin_code: String,
    special_packaging_indicator: Option<SpecialPackagingIndicator>,
    other_coverage_code: Option<String>,
}

impl ClaimSegment {
    pub const ID: &'static str = "AM07";

    #[allow(clippy::too_many_arguments)]
    pub fn new(
        rx_ref_qualifier: PrescriptionServiceReferenceNumberQualifier,
        rx_ref_number: impl Into<String>,
        product_service_id_qualifier: ProductServiceIdQualifier,
        product_service_id: impl Into<String>,
        procedure_modifiers: impl Into<String>,
        quantity_dispensed: impl Into<String>,
        fill_number: impl Into<String>,
        days_supply: impl Into<String>,
        refills_authorized: impl Into<String>,
        daw_code: impl Into<String>,
        date_prescription_written: impl Into<String>,
        number_authorized_refills: impl Into<String>,
        prescription_origin_code: impl Into<String>,
        special_packaging_indicator: Option<SpecialPackagingIndicator>,
        other_coverage_code: Option<String>,
    ) -> Result<Self, Error> {
        let rx_ref_number = rx_ref_number.into();
        if rx_ref_number.len() != 12 || !rx_ref_number.bytes().all(|b| b.is_ascii_digit()) {
            return Err(Error::InvalidFormat {
                field: "rx_ref_number".to_string(),
                value: rx_ref_number,
            });
        }

        let procedure_modifiers = procedure_modifiers.into();
        if procedure_modifiers.chars().count() != 2 {
            return Err(Error::InvalidFormat {
                field: "procedure_modifiers".to_string(),
                value: procedure_modifiers,
            });
        }

        Ok(Self {
            rx_ref_qualifier,
            rx_ref_number,
            product_service_id_qualifier,
            product_service_id: product_service_id.into(),
            procedure_modifiers,
            quantity_dispensed: quantity_dispensed.into(),
            fill_number: fill_number.into(),
            days_supply: days_supply.into(),
            refills_authorized: refills_authorized.into(),
            daw_code: daw_code.into(),
            date_prescription_written: date_prescription_written.into(),
            number_authorized_refills: number_authorized_refills.into(),
            prescription_origin_code: prescription_origin_code.into(),
            special_packaging_indicator,
            other_coverage_code,
        })
    }

    pub fn rx_ref_qualifier(&self) -> PrescriptionServiceReferenceNumberQualifier {
        self.rx_ref_qualifier
    }

    pub fn rx_ref_number(&self) -> &str {
        &self.rx_ref_number
    }

    pub fn product_service_id_qualifier(&self) -> ProductServiceIdQualifier {
        self.product_service_id_qualifier
    }

    pub fn product_service_id(&self) -> &str {
        &self.product_service_id
    }

    pub fn procedure_modifiers(&self) -> &str {
        &self.procedure_modifiers
    }

    pub fn quantity_dispensed(&self) -> &str {
        &self.quantity_dispensed
    }

    pub fn fill_number(&self) -> &str {
        &self.fill_number
    }

    pub fn days_supply(&self) -> &str {
        &self.days_supply
    }

    pub fn refills_authorized(&self) -> &str {
        &self.refills_authorized
    }

    pub fn daw_code(&self) -> &str {
        &self.daw_code
    }

    pub fn date_prescription_written(&self) -> &str {
        &self.date_prescription_written
    }

    pub fn number_authorized_refills(&self) -> &str {
        &self.number_authorized_refills
    }

    pub fn prescription_origin_code(&self) -> &str {
        &self.prescription_origin_code
    }

    pub fn special_packaging_indicator(&self) -> Option<SpecialPackagingIndicator> {
        self.special_packaging_indicator
    }

    pub fn other_coverage_code(&self) -> Option<&str> {
        self.other_coverage_code.as_deref()
    }

    /// Canonical wire order: `EM, D2, E1, D7, SE, E7, D3, D5, D6, D8, DE,
    /// DF, DJ, DT, EB`, taken from `original_source`'s `ClaimSegment.serialize`.
    pub fn serialize(&self) -> String {
        let mut out = String::new();
        out.push(FIELD_SEPARATOR);
        out.push_str(Self::ID);
        push_piece(&mut out, "EM", self.rx_ref_qualifier.as_str());
        push_piece(&mut out, "D2", &self.rx_ref_number);
        push_piece(&mut out, "E1", self.product_service_id_qualifier.as_str());
        push_piece(&mut out, "D7", &self.product_service_id);
        push_piece(&mut out, "SE", &self.procedure_modifiers);
        push_piece(&mut out, "E7", &self.quantity_dispensed);
        push_piece(&mut out, "D3", &self.fill_number);
        push_piece(&mut out, "D5", &self.days_supply);
        push_piece(&mut out, "D6", &self.refills_authorized);
        push_piece(&mut out, "D8", &self.daw_code);
        push_piece(&mut out, "DE", &self.date_prescription_written);
        push_piece(&mut out, "DF", &self.number_authorized_refills);
        push_piece(&mut out, "DJ", &self.prescription_origin_code);
        if let Some(dt) = self.special_packaging_indicator {
            push_piece(&mut out, "DT", dt.as_str());
        }
        if let Some(eb) = &self.other_coverage_code {
            push_piece(&mut out, "EB", eb);
        }
        out
    }
}

/// Pricing segment (`AM11`): Overpunch-encoded signed-decimal amounts.
///
/// Values are stored as their raw Overpunch strings; [`overpunch::decode`]
/// is applied on demand and never affects the serialized form.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Pricing {
    ingredient_cost_submitted: String,
    dispensing_fee_submitted: String,
    professional_service_fee_submitted: Option<String>,
    gross_amount_due: String,
    other_amount_claimed: String,
}

impl Pricing {
    pub const ID: &'static str = "AM11";

    pub fn new(
        ingredient_cost_submitted: impl Into<String>,
        dispensing_fee_submitted: impl Into<String>,
        professional_service_fee_submitted: Option<String>,
        gross_amount_due: impl Into<String>,
        other_amount_claimed: impl Into<String>,
    ) -> Self {
        Self {
            ingredient_cost_submitted: ingredient_cost_submitted.into(),
            dispensing_fee_submitted: dispensing_fee_submitted.into(),
            professional_service_fee_submitted,
            gross_amount_due: gross_amount_due.into(),
            other_amount_claimed: other_amount_claimed.into(),
        }
    }

    pub fn ingredient_cost_submitted(&self) -> &str {
        &self.ingredient_cost_submitted
    }

    pub fn dispensing_fee_submitted(&self) -> &str {
        &self.dispensing_fee_submitted
    }

    pub fn professional_service_fee_submitted(&self) -> Option<&str> {
        self.professional_service_fee_submitted.as_deref()
    }

    pub fn gross_amount_due(&self) -> &str {
        &self.gross_amount_due
    }

    pub fn other_amount_claimed(&self) -> &str {
        &self.other_amount_claimed
    }

    pub fn ingredient_cost_submitted_decoded(&self) -> Result<i64, Error> {
        overpunch::decode(&self.ingredient_cost_submitted)
    }

    pub fn dispensing_fee_submitted_decoded(&self) -> Result<i64, Error> {
        overpunch::decode(&self.dispensing_fee_submitted)
    }

    pub fn professional_service_fee_submitted_decoded(&self) -> Option<Result<i64, Error>> {
        self.professional_service_fee_submitted
            .as_deref()
            .map(overpunch::decode)
    }

    pub fn gross_amount_due_decoded(&self) -> Result<i64, Error> {
        overpunch::decode(&self.gross_amount_due)
    }

    pub fn other_amount_claimed_decoded(&self) -> Result<i64, Error> {
        overpunch::decode(&self.other_amount_claimed)
    }

    pub fn serialize(&self) -> String {
        let mut out = String::new();
        out.push(FIELD_SEPARATOR);
        out.push_str(Self::ID);
        push_piece(&mut out, "D9", &self.ingredient_cost_submitted);
        push_piece(&mut out, "DC", &self.dispensing_fee_submitted);
        if let Some(fee) = &self.professional_service_fee_submitted {
            push_piece(&mut out, "E3", fee);
        }
        push_piece(&mut out, "DQ", &self.gross_amount_due);
        push_piece(&mut out, "DU", &self.other_amount_claimed);
        out
    }
}

/// Prescriber segment (`AM03`), optional within a claim.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Prescriber {
    prescriber_id_qualifier: String,
    prescriber_id: String,
}

impl Prescriber {
    pub const ID: &'static str = "AM03";

    pub fn new(prescriber_id_qualifier: impl Into<String>, prescriber_id: impl Into<String>) -> Self {
        Self {
            prescriber_id_qualifier: prescriber_id_qualifier.into(),
            prescriber_id: prescriber_id.into(),
        }
    }

    pub fn prescriber_id_qualifier(&self) -> &str {
        &self.prescriber_id_qualifier
    }

    pub fn prescriber_id(&self) -> &str {
        &self.prescriber_id
    }

    pub fn serialize(&self) -> String {
        let mut out = String::new();
        out.push(FIELD_SEPARATOR);
        out.push_str(Self::ID);
        push_piece(&mut out, "EZ", &self.prescriber_id_qualifier);
        push_piece(&mut out, "DB", &self.prescriber_id);
        out
    }
}

/// Pharmacy provider segment (`AM06`), optional within a claim.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PharmacyProvider {
    group_id: String,
}

impl PharmacyProvider {
    pub const ID: &'static str = "AM06";

    pub fn new(group_id: impl Into<String>) -> Self {
        Self {
            group_id: group_id.into(),
        }
    }

    pub fn group_id(&self) -> &str {
        &self.group_id
    }

    pub fn serialize(&self) -> String {
        let mut out = String::new();
        out.push(FIELD_SEPARATOR);
        out.push_str(Self::ID);
        push_piece(&mut out, "DZ", &self.group_id);
        out
    }
}

/// Clinical segment (`AM08`), optional within a claim.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Clinical {
    other_payer_coverage_type: String,
    other_payer_id_qualifier: String,
}

impl Clinical {
    pub const ID: &'static str = "AM08";

    pub fn new(
        other_payer_coverage_type: impl Into<String>,
        other_payer_id_qualifier: impl Into<String>,
    ) -> Self {
        Self {
            other_payer_coverage_type: other_payer_coverage_type.into(),
            other_payer_id_qualifier: other_payer_id_qualifier.into(),
        }
    }

    pub fn other_payer_coverage_type(&self) -> &str {
        &self.other_payer_coverage_type
    }

    pub fn other_payer_id_qualifier(&self) -> &str {
        &self.other_payer_id_qualifier
    }

    pub fn serialize(&self) -> String {
        let mut out = String::new();
        out.push(FIELD_SEPARATOR);
        out.push_str(Self::ID);
        push_piece(&mut out, "7E", &self.other_payer_coverage_type);
        push_piece(&mut out, "E5", &self.other_payer_id_qualifier);
        out
    }
}

/// Tagged union over the seven segment variants a claim message can carry.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Segment {
    Insurance(Insurance),
    Patient(Patient),
    Claim(ClaimSegment),
    Pricing(Pricing),
    Prescriber(Prescriber),
    PharmacyProvider(PharmacyProvider),
    Clinical(Clinical),
}

impl Segment {
    pub fn kind(&self) -> SegmentKind {
        match self {
            Segment::Insurance(_) => SegmentKind::Insurance,
            Segment::Patient(_) => SegmentKind::Patient,
            Segment::Claim(_) => SegmentKind::Claim,
            Segment::Pricing(_) => SegmentKind::Pricing,
            Segment::Prescriber(_) => SegmentKind::Prescriber,
            Segment::PharmacyProvider(_) => SegmentKind::PharmacyProvider,
            Segment::Clinical(_) => SegmentKind::Clinical,
        }
    }

    pub fn segment_id(&self) -> &'static str {
        self.kind().id()
    }

    pub fn serialize(&self) -> String {
        match self {
            Segment::Insurance(s) => s.serialize(),
            Segment::Patient(s) => s.serialize(),
            Segment::Claim(s) => s.serialize(),
            Segment::Pricing(s) => s.serialize(),
            Segment::Prescriber(s) => s.serialize(),
            Segment::PharmacyProvider(s) => s.serialize(),
            Segment::Clinical(s) => s.serialize(),
        }
    }
}

/// Append Patient's group-separator terminator the way [`crate::claim`]
/// does when composing a whole message; exposed so standalone callers can
/// reproduce exactly the same bytes the aggregator would emit.
pub fn patient_with_group_separator(patient: &Patient) -> String {
    format!("{}{}", patient.serialize(), GROUP_SEPARATOR)
}
