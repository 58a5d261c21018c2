//! Closed enumerations used by the Transaction Header and segment codecs.
//!
//! Every enumeration here parses from its exact on-wire code and rejects
//! anything outside its closed set with [`Error::UnknownCode`] — there is
//! no fallback to a raw string for an unrecognized value.

use std::fmt;

use crate::error::Error;

/// Direction a fixed-width field is padded in.
///
/// "Right" means the value is left-justified and spaces are appended on
/// the right; "Left" means the value is right-justified and spaces are
/// prepended on the left.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaddingDirection {
    Left,
    Right,
}

/// Header version code. `D0` is the modern NCPDP Telecom version in
/// current use; `51` is retained for legacy payers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Version {
    D0,
    V51,
}

impl Version {
    pub fn as_str(&self) -> &'static str {
        match self {
            Version::D0 => "D0",
            Version::V51 => "51",
        }
    }

    pub fn parse(field: &str, value: &str) -> Result<Self, Error> {
        match value {
            "D0" => Ok(Version::D0),
            "51" => Ok(Version::V51),
            _ => Err(Error::UnknownCode {
                field: field.to_string(),
                value: value.to_string(),
            }),
        }
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Transaction code (header field A3) classifying the message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransactionCode {
    Billing,
    Reversal,
    Rebill,
    ControlledSubstanceReporting,
    ControlledSubstanceReversal,
    ControlledSubstanceRebill,
    PredeterminationOfBenefits,
    EligibilityVerification,
    InformationReporting,
    InformationReportingReversal,
    InformationReportingRebill,
    PaRequestAndBilling,
    PaReversal,
    PaInquiry,
    PaRequestOnly,
    ServiceBilling,
    ServiceReversal,
    ServiceRebill,
    FinancialInfoReportingInquiry,
    FinancialInfoReportingUpdate,
    FinancialInfoReportingExchange,
}

impl TransactionCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionCode::Billing => "B1",
            TransactionCode::Reversal => "B2",
            TransactionCode::Rebill => "B3",
            TransactionCode::ControlledSubstanceReporting => "C1",
            TransactionCode::ControlledSubstanceReversal => "C2",
            TransactionCode::ControlledSubstanceRebill => "C3",
            TransactionCode::PredeterminationOfBenefits => "D1",
            TransactionCode::EligibilityVerification => "E1",
            TransactionCode::InformationReporting => "N1",
            TransactionCode::InformationReportingReversal => "N2",
            TransactionCode::InformationReportingRebill => "N3",
            TransactionCode::PaRequestAndBilling => "P1",
            TransactionCode::PaReversal => "P2",
            TransactionCode::PaInquiry => "P3",
            TransactionCode::PaRequestOnly => "P4",
            TransactionCode::ServiceBilling => "S1",
            TransactionCode::ServiceReversal => "S2",
            TransactionCode::ServiceRebill => "S3",
            TransactionCode::FinancialInfoReportingInquiry => "F1",
            TransactionCode::FinancialInfoReportingUpdate => "F2",
            TransactionCode::FinancialInfoReportingExchange => "F3",
        }
    }

    pub fn parse(field: &str, value: &str) -> Result<Self, Error> {
        use TransactionCode::*;
        Ok(match value {
            "B1" => Billing,
            "B2" => Reversal,
            "B3" => Rebill,
            "C1" => ControlledSubstanceReporting,
            "C2" => ControlledSubstanceReversal,
            "C3" => ControlledSubstanceRebill,
            "D1" => PredeterminationOfBenefits,
            "E1" => EligibilityVerification,
            "N1" => InformationReporting,
            "N2" => InformationReportingReversal,
            "N3" => InformationReportingRebill,
            "P1" => PaRequestAndBilling,
            "P2" => PaReversal,
            "P3" => PaInquiry,
            "P4" => PaRequestOnly,
            "S1" => ServiceBilling,
            "S2" => ServiceReversal,
            "S3" => ServiceRebill,
            "F1" => FinancialInfoReportingInquiry,
            "F2" => FinancialInfoReportingUpdate,
            "F3" => FinancialInfoReportingExchange,
            _ => {
                return Err(Error::UnknownCode {
                    field: field.to_string(),
                    value: value.to_string(),
                })
            }
        })
    }
}

impl fmt::Display for TransactionCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Patient gender (Patient segment key C5).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Gender {
    Unknown,
    Male,
    Female,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Unknown => "0",
            Gender::Male => "1",
            Gender::Female => "2",
        }
    }

    pub fn parse(field: &str, value: &str) -> Result<Self, Error> {
        match value {
            "0" => Ok(Gender::Unknown),
            "1" => Ok(Gender::Male),
            "2" => Ok(Gender::Female),
            _ => Err(Error::UnknownCode {
                field: field.to_string(),
                value: value.to_string(),
            }),
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Qualifier for the Claim segment's prescription/service reference number
/// (key EM).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrescriptionServiceReferenceNumberQualifier {
    RxBilling,
    ServiceBilling,
    NonPrescriptionProduct,
}

impl PrescriptionServiceReferenceNumberQualifier {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::RxBilling => "01",
            Self::ServiceBilling => "02",
            Self::NonPrescriptionProduct => "03",
        }
    }

    pub fn parse(field: &str, value: &str) -> Result<Self, Error> {
        match value {
            "01" => Ok(Self::RxBilling),
            "02" => Ok(Self::ServiceBilling),
            "03" => Ok(Self::NonPrescriptionProduct),
            _ => Err(Error::UnknownCode {
                field: field.to_string(),
                value: value.to_string(),
            }),
        }
    }
}

impl fmt::Display for PrescriptionServiceReferenceNumberQualifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Qualifier for the Claim segment's product/service ID (key E1).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProductServiceIdQualifier {
    NotSpecified,
    Upc,
    Hri,
    Ndc,
    Hibcc,
    DurPps,
    Cpt4,
    Cpt5,
    Hcpcs,
    Ppac,
    Nappi,
    Gtin,
    Gcn,
    FdbMedNameId,
    FdbRoutedMedId,
    FdbRoutedDosageFormMedId,
    FdbMedId,
    GcnSeqno,
    HiclSeqno,
    Upn,
    Ndc36,
    Mpid,
    ProdId,
    Spid,
    Di,
    Other,
}

impl ProductServiceIdQualifier {
    pub fn as_str(&self) -> &'static str {
        use ProductServiceIdQualifier::*;
        match self {
            NotSpecified => "00",
            Upc => "01",
            Hri => "02",
            Ndc => "03",
            Hibcc => "04",
            DurPps => "06",
            Cpt4 => "07",
            Cpt5 => "08",
            Hcpcs => "09",
            Ppac => "10",
            Nappi => "11",
            Gtin => "12",
            Gcn => "15",
            FdbMedNameId => "28",
            FdbRoutedMedId => "29",
            FdbRoutedDosageFormMedId => "30",
            FdbMedId => "31",
            GcnSeqno => "32",
            HiclSeqno => "33",
            Upn => "34",
            Ndc36 => "36",
            Mpid => "42",
            ProdId => "43",
            Spid => "44",
            Di => "45",
            Other => "99",
        }
    }

    pub fn parse(field: &str, value: &str) -> Result<Self, Error> {
        use ProductServiceIdQualifier::*;
        Ok(match value {
            "00" => NotSpecified,
            "01" => Upc,
            "02" => Hri,
            "03" => Ndc,
            "04" => Hibcc,
            "06" => DurPps,
            "07" => Cpt4,
            "08" => Cpt5,
            "09" => Hcpcs,
            "10" => Ppac,
            "11" => Nappi,
            "12" => Gtin,
            "15" => Gcn,
            "28" => FdbMedNameId,
            "29" => FdbRoutedMedId,
            "30" => FdbRoutedDosageFormMedId,
            "31" => FdbMedId,
            "32" => GcnSeqno,
            "33" => HiclSeqno,
            "34" => Upn,
            "36" => Ndc36,
            "42" => Mpid,
            "43" => ProdId,
            "44" => Spid,
            "45" => Di,
            "99" => Other,
            _ => {
                return Err(Error::UnknownCode {
                    field: field.to_string(),
                    value: value.to_string(),
                })
            }
        })
    }
}

impl fmt::Display for ProductServiceIdQualifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Special packaging indicator (Claim segment key DT).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpecialPackagingIndicator {
    NotSpecified,
    NotUnitDose,
    ManufacturerUnitDose,
    PharmacyUnitDose,
    PharmacyUnitDosePatientCompliancePackaging,
    PharmacyMultiDrugPatientCompliancePackaging,
    RemoteDeviceUnitDose,
    RemoteDeviceMultiDrugCompliance,
    ManufacturerUnitOfUsePackage,
}

impl SpecialPackagingIndicator {
    pub fn as_str(&self) -> &'static str {
        use SpecialPackagingIndicator::*;
        match self {
            NotSpecified => "0",
            NotUnitDose => "1",
            ManufacturerUnitDose => "2",
            PharmacyUnitDose => "3",
            PharmacyUnitDosePatientCompliancePackaging => "4",
            PharmacyMultiDrugPatientCompliancePackaging => "5",
            RemoteDeviceUnitDose => "6",
            RemoteDeviceMultiDrugCompliance => "7",
            ManufacturerUnitOfUsePackage => "8",
        }
    }

    pub fn parse(field: &str, value: &str) -> Result<Self, Error> {
        use SpecialPackagingIndicator::*;
        Ok(match value {
            "0" => NotSpecified,
            "1" => NotUnitDose,
            "2" => ManufacturerUnitDose,
            "3" => PharmacyUnitDose,
            "4" => PharmacyUnitDosePatientCompliancePackaging,
            "5" => PharmacyMultiDrugPatientCompliancePackaging,
            "6" => RemoteDeviceUnitDose,
            "7" => RemoteDeviceMultiDrugCompliance,
            "8" => ManufacturerUnitOfUsePackage,
            _ => {
                return Err(Error::UnknownCode {
                    field: field.to_string(),
                    value: value.to_string(),
                })
            }
        })
    }
}

impl fmt::Display for SpecialPackagingIndicator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_round_trips() {
        assert_eq!(Version::parse("version", "D0").unwrap(), Version::D0);
        assert_eq!(Version::parse("version", "51").unwrap(), Version::V51);
        assert_eq!(Version::D0.as_str(), "D0");
    }

    #[test]
    fn version_rejects_unknown_code() {
        let err = Version::parse("version", "ZZ").unwrap_err();
        assert!(matches!(err, Error::UnknownCode { .. }));
    }

    #[test]
    fn transaction_code_round_trips() {
        for code in [
            TransactionCode::Billing,
            TransactionCode::Reversal,
            TransactionCode::Rebill,
            TransactionCode::FinancialInfoReportingExchange,
        ] {
            let s = code.as_str();
            assert_eq!(TransactionCode::parse("transaction_code", s).unwrap(), code);
        }
    }

    #[test]
    fn gender_rejects_out_of_set() {
        assert!(Gender::parse("patient_gender", "3").is_err());
        assert_eq!(Gender::parse("patient_gender", "1").unwrap(), Gender::Male);
    }

    #[test]
    fn product_service_id_qualifier_round_trips() {
        for q in [
            ProductServiceIdQualifier::Ndc,
            ProductServiceIdQualifier::Gcn,
            ProductServiceIdQualifier::Other,
        ] {
            assert_eq!(
                ProductServiceIdQualifier::parse("product_service_id_qualifier", q.as_str())
                    .unwrap(),
                q
            );
        }
    }

    #[test]
    fn special_packaging_indicator_rejects_out_of_range() {
        assert!(SpecialPackagingIndicator::parse("special_packaging_indicator", "9").is_err());
    }
}
