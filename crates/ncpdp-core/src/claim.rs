//! The `ClaimMessage` aggregate: header plus the seven segment variants,
//! and the cardinality invariants that bind them (C9 core half).

use crate::control::SEGMENT_SEPARATOR;
use crate::error::Error;
use crate::header::TransactionHeader;
use crate::segment::{
    Clinical, Insurance, PharmacyProvider, Prescriber, Pricing, Patient, ClaimSegment, Segment,
    SegmentKind,
};

/// A single parsed/constructed EMI claim: one header, four required
/// segments, three optional ones.
///
/// Always owns exactly one Insurance, Patient, Claim, and Pricing segment;
/// Prescriber, PharmacyProvider, and Clinical are present-or-absent.
/// There is no public way to construct one with a missing required
/// segment or a duplicated optional one — both [`ClaimMessage::new`] (which
/// takes the required segments as non-optional arguments) and
/// [`ClaimMessage::from_segments`] (which checks a flat, unordered list)
/// enforce this at construction time.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ClaimMessage {
    header: TransactionHeader,
    insurance: Insurance,
    patient: Patient,
    claim: ClaimSegment,
    pricing: Pricing,
    prescriber: Option<Prescriber>,
    pharmacy_provider: Option<PharmacyProvider>,
    clinical: Option<Clinical>,
}

impl ClaimMessage {
    /// Build a claim directly from its typed segments. Required segments
    /// are ordinary arguments, so a caller cannot omit one at the type
    /// level.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        header: TransactionHeader,
        insurance: Insurance,
        patient: Patient,
        claim: ClaimSegment,
        pricing: Pricing,
        prescriber: Option<Prescriber>,
        pharmacy_provider: Option<PharmacyProvider>,
        clinical: Option<Clinical>,
    ) -> Self {
        Self {
            header,
            insurance,
            patient,
            claim,
            pricing,
            prescriber,
            pharmacy_provider,
            clinical,
        }
    }

    /// Collate a flat, unordered list of parsed segment variants into a
    /// claim. A variant appearing more than once fails with
    /// [`Error::DuplicateSegment`]; a missing required variant fails with
    /// [`Error::MissingRequiredSegment`].
    pub fn from_segments(header: TransactionHeader, segments: Vec<Segment>) -> Result<Self, Error> {
        let mut insurance: Option<Insurance> = None;
        let mut patient: Option<Patient> = None;
        let mut claim: Option<ClaimSegment> = None;
        let mut pricing: Option<Pricing> = None;
        let mut prescriber: Option<Prescriber> = None;
        let mut pharmacy_provider: Option<PharmacyProvider> = None;
        let mut clinical: Option<Clinical> = None;

        for segment in segments {
            match segment {
                Segment::Insurance(s) => set_once(&mut insurance, s, SegmentKind::Insurance)?,
                Segment::Patient(s) => set_once(&mut patient, s, SegmentKind::Patient)?,
                Segment::Claim(s) => set_once(&mut claim, s, SegmentKind::Claim)?,
                Segment::Pricing(s) => set_once(&mut pricing, s, SegmentKind::Pricing)?,
                Segment::Prescriber(s) => set_once(&mut prescriber, s, SegmentKind::Prescriber)?,
                Segment::PharmacyProvider(s) => {
                    set_once(&mut pharmacy_provider, s, SegmentKind::PharmacyProvider)?
                }
                Segment::Clinical(s) => set_once(&mut clinical, s, SegmentKind::Clinical)?,
            }
        }

        Ok(Self {
            header,
            insurance: insurance.ok_or_else(|| missing_segment(SegmentKind::Insurance))?,
            patient: patient.ok_or_else(|| missing_segment(SegmentKind::Patient))?,
            claim: claim.ok_or_else(|| missing_segment(SegmentKind::Claim))?,
            pricing: pricing.ok_or_else(|| missing_segment(SegmentKind::Pricing))?,
            prescriber,
            pharmacy_provider,
            clinical,
        })
    }

    pub fn header(&self) -> &TransactionHeader {
        &self.header
    }

    pub fn insurance(&self) -> &Insurance {
        &self.insurance
    }

    pub fn patient(&self) -> &Patient {
        &self.patient
    }

    pub fn claim(&self) -> &ClaimSegment {
        &self.claim
    }

    pub fn pricing(&self) -> &Pricing {
        &self.pricing
    }

    pub fn prescriber(&self) -> Option<&Prescriber> {
        self.prescriber.as_ref()
    }

    pub fn pharmacy_provider(&self) -> Option<&PharmacyProvider> {
        self.pharmacy_provider.as_ref()
    }

    pub fn clinical(&self) -> Option<&Clinical> {
        self.clinical.as_ref()
    }

    /// Serialize the header and every present segment, in canonical
    /// order (Insurance, Patient, Claim, Pricing, Prescriber,
    /// PharmacyProvider, Clinical), joined by the segment-separator.
    ///
    /// The Patient segment's own bytes are terminated by a
    /// group-separator before the following segment-separator (Design
    /// Notes, resolution of the open question on where that separator
    /// "belongs"). Infallible: every segment was shape-validated at
    /// construction time.
    pub fn serialize(&self) -> String {
        let mut parts = vec![
            self.insurance.serialize(),
            format!("{}{}", self.patient.serialize(), crate::control::GROUP_SEPARATOR),
            self.claim.serialize(),
            self.pricing.serialize(),
        ];
        if let Some(p) = &self.prescriber {
            parts.push(p.serialize());
        }
        if let Some(p) = &self.pharmacy_provider {
            parts.push(p.serialize());
        }
        if let Some(c) = &self.clinical {
            parts.push(c.serialize());
        }

        let mut out = self.header.serialize();
        out.push(SEGMENT_SEPARATOR);
        out.push_str(&parts.join(&SEGMENT_SEPARATOR.to_string()));
        out
    }
}

fn set_once<T>(slot: &mut Option<T>, value: T, kind: SegmentKind) -> Result<(), Error> {
    if slot.is_some() {
        return Err(Error::DuplicateSegment {
            segment: kind.id().to_string(),
        });
    }
    *slot = Some(value);
    Ok(())
}

fn missing_segment(kind: SegmentKind) -> Error {
    Error::MissingRequiredSegment {
        segment: kind.id().to_string(),
    }
}
