//! Transaction Header: the fixed-width, 56-column record that opens every
//! EMI wire message.

use crate::enums::{PaddingDirection, TransactionCode, Version};
use crate::error::Error;
use crate::field::FieldPosition;

/// Column positions for every header field, in on-wire order.
pub mod positions {
    use super::{FieldPosition, PaddingDirection};

    pub const RXBIN: FieldPosition = FieldPosition::new(0, 6, PaddingDirection::Right);
    pub const VERSION: FieldPosition = FieldPosition::new(6, 2, PaddingDirection::Right);
    pub const TRANSACTION_CODE: FieldPosition = FieldPosition::new(8, 2, PaddingDirection::Right);
    pub const PCN: FieldPosition = FieldPosition::new(10, 10, PaddingDirection::Right);
    pub const TRANSACTION_COUNT: FieldPosition = FieldPosition::new(20, 1, PaddingDirection::Right);
    pub const SERVICE_PROVIDER_ID_QUALIFIER: FieldPosition =
        FieldPosition::new(21, 2, PaddingDirection::Right);
    pub const SERVICE_PROVIDER_ID: FieldPosition = FieldPosition::new(23, 15, PaddingDirection::Right);
    pub const SERVICE_DATE: FieldPosition = FieldPosition::new(38, 8, PaddingDirection::Right);
    pub const CERTIFICATION_ID: FieldPosition = FieldPosition::new(46, 10, PaddingDirection::Right);
}

/// The 56-column Transaction Header.
///
/// Fields are private; construct via [`TransactionHeader::new`] (shape
/// validation happens there) or via `ncpdp-parser`'s `header::parse`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TransactionHeader {
    rxbin: String,
    version: Version,
    transaction_code: TransactionCode,
    pcn: Option<String>,
    transaction_count: u8,
    service_provider_id_qualifier: String,
    service_provider_id: Option<String>,
    service_date: String,
    certification_id: Option<String>,
}

impl TransactionHeader {
    /// Build a header, validating every field's shape the same way the
    /// parser does. `pcn`/`service_provider_id`/`certification_id` of
    /// `Some("")` are normalized to `None` — the wire form makes no
    /// distinction between an absent optional string and an all-blank one.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        rxbin: impl Into<String>,
        version: Version,
        transaction_code: TransactionCode,
        pcn: Option<String>,
        transaction_count: u8,
        service_provider_id_qualifier: impl Into<String>,
        service_provider_id: Option<String>,
        service_date: impl Into<String>,
        certification_id: Option<String>,
    ) -> Result<Self, Error> {
        let rxbin = rxbin.into();
        if rxbin.len() != 6 || !rxbin.bytes().all(|b| b.is_ascii_digit()) {
            return Err(Error::InvalidFormat {
                field: "rxbin".to_string(),
                value: rxbin,
            });
        }

        if !(1..=9).contains(&transaction_count) {
            return Err(Error::InvalidFormat {
                field: "transaction_count".to_string(),
                value: transaction_count.to_string(),
            });
        }

        let service_provider_id_qualifier = service_provider_id_qualifier.into();
        let qual_len = service_provider_id_qualifier.len();
        if !(1..=2).contains(&qual_len)
            || !service_provider_id_qualifier
                .bytes()
                .all(|b| b.is_ascii_digit())
        {
            return Err(Error::InvalidFormat {
                field: "service_provider_id_qualifier".to_string(),
                value: service_provider_id_qualifier,
            });
        }

        let service_date = service_date.into();
        if !crate::date::is_valid_yyyymmdd(&service_date) {
            return Err(Error::InvalidFormat {
                field: "service_date".to_string(),
                value: service_date,
            });
        }

        Ok(Self {
            rxbin,
            version,
            transaction_code,
            pcn: non_blank(pcn),
            transaction_count,
            service_provider_id_qualifier,
            service_provider_id: non_blank(service_provider_id),
            service_date,
            certification_id: non_blank(certification_id),
        })
    }

    pub fn rxbin(&self) -> &str {
        &self.rxbin
    }

    pub fn version(&self) -> Version {
        self.version
    }

    pub fn transaction_code(&self) -> TransactionCode {
        self.transaction_code
    }

    pub fn pcn(&self) -> Option<&str> {
        self.pcn.as_deref()
    }

    pub fn transaction_count(&self) -> u8 {
        self.transaction_count
    }

    pub fn service_provider_id_qualifier(&self) -> &str {
        &self.service_provider_id_qualifier
    }

    pub fn service_provider_id(&self) -> Option<&str> {
        self.service_provider_id.as_deref()
    }

    pub fn service_date(&self) -> &str {
        &self.service_date
    }

    pub fn certification_id(&self) -> Option<&str> {
        self.certification_id.as_deref()
    }

    /// Serialize to the fixed 56-character wire form. Infallible: every
    /// field was shape-validated at construction time, so no value can
    /// overflow its column.
    pub fn serialize(&self) -> String {
        let mut out = String::with_capacity(crate::control::HEADER_LENGTH);
        out.push_str(&positions::RXBIN.pad("rxbin", Some(&self.rxbin)).expect("validated at construction"));
        out.push_str(
            &positions::VERSION
                .pad("version", Some(self.version.as_str()))
                .expect("validated at construction"),
        );
        out.push_str(
            &positions::TRANSACTION_CODE
                .pad("transaction_code", Some(self.transaction_code.as_str()))
                .expect("validated at construction"),
        );
        out.push_str(
            &positions::PCN
                .pad("pcn", self.pcn.as_deref())
                .expect("validated at construction"),
        );
        out.push_str(
            &positions::TRANSACTION_COUNT
                .pad("transaction_count", Some(&self.transaction_count.to_string()))
                .expect("validated at construction"),
        );
        out.push_str(
            &positions::SERVICE_PROVIDER_ID_QUALIFIER
                .pad(
                    "service_provider_id_qualifier",
                    Some(&self.service_provider_id_qualifier),
                )
                .expect("validated at construction"),
        );
        out.push_str(
            &positions::SERVICE_PROVIDER_ID
                .pad("service_provider_id", self.service_provider_id.as_deref())
                .expect("validated at construction"),
        );
        out.push_str(
            &positions::SERVICE_DATE
                .pad("service_date", Some(&self.service_date))
                .expect("validated at construction"),
        );
        out.push_str(
            &positions::CERTIFICATION_ID
                .pad("certification_id", self.certification_id.as_deref())
                .expect("validated at construction"),
        );
        debug_assert_eq!(out.len(), crate::control::HEADER_LENGTH);
        out
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    match value {
        Some(v) if v.trim().is_empty() => None,
        other => other,
    }
}
