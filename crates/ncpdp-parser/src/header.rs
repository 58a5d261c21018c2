//! Parses the 56-column Transaction Header (C6 parse half). Serialization
//! and shape validation at construction time live in `ncpdp-core`.

use ncpdp_core::control::HEADER_LENGTH;
use ncpdp_core::error::Error;
use ncpdp_core::field::FieldPosition;
use ncpdp_core::header::{positions, TransactionHeader};
use ncpdp_core::{TransactionCode, Version};

/// Parse a Transaction Header from the first 56 characters of `s`.
///
/// Fails with [`Error::ShortInput`] if `s` is shorter than
/// [`HEADER_LENGTH`]; characters beyond the header width are ignored (the
/// caller has already split the whole message on the segment-separator).
pub fn parse(s: &str) -> Result<TransactionHeader, Error> {
    if s.len() < HEADER_LENGTH {
        return Err(Error::ShortInput {
            expected: HEADER_LENGTH,
            actual: s.len(),
        });
    }

    let rxbin = positions::RXBIN.slice(s);
    if rxbin.len() != 6 || !rxbin.bytes().all(|b| b.is_ascii_digit()) {
        return Err(Error::InvalidFormat {
            field: "rxbin".to_string(),
            value: rxbin.to_string(),
        });
    }

    let version = Version::parse("version", positions::VERSION.slice(s))?;
    let transaction_code =
        TransactionCode::parse("transaction_code", positions::TRANSACTION_CODE.slice(s))?;

    let pcn = optional_raw(s, positions::PCN);

    let transaction_count_str = positions::TRANSACTION_COUNT.slice(s);
    let transaction_count = transaction_count_str
        .parse::<u8>()
        .ok()
        .filter(|n| (1..=9).contains(n))
        .ok_or_else(|| Error::InvalidFormat {
            field: "transaction_count".to_string(),
            value: transaction_count_str.to_string(),
        })?;

    let service_provider_id_qualifier = positions::SERVICE_PROVIDER_ID_QUALIFIER.slice(s);
    let qual_len = service_provider_id_qualifier.len();
    if !(1..=2).contains(&qual_len)
        || !service_provider_id_qualifier.bytes().all(|b| b.is_ascii_digit())
    {
        return Err(Error::InvalidFormat {
            field: "service_provider_id_qualifier".to_string(),
            value: service_provider_id_qualifier.to_string(),
        });
    }

    let service_provider_id = optional_raw(s, positions::SERVICE_PROVIDER_ID);

    let service_date = positions::SERVICE_DATE.slice(s);
    if !ncpdp_core::date::is_valid_yyyymmdd(service_date) {
        return Err(Error::InvalidFormat {
            field: "service_date".to_string(),
            value: service_date.to_string(),
        });
    }

    let certification_id = optional_raw(s, positions::CERTIFICATION_ID);

    TransactionHeader::new(
        rxbin,
        version,
        transaction_code,
        pcn,
        transaction_count,
        service_provider_id_qualifier,
        service_provider_id,
        service_date,
        certification_id,
    )
}

/// For an optional string header field: `None` if the trimmed slice is
/// empty, otherwise the trimmed slice, preserving any internal whitespace
/// the field allows but dropping the padding itself — `pad` re-derives
/// the padding from the stored value's length, so storing it trimmed is
/// what lets `serialize(parse(s)) == s` hold.
fn optional_raw(data: &str, pos: FieldPosition) -> Option<String> {
    let slice = pos.slice(data);
    if slice.is_empty() {
        None
    } else {
        Some(slice.to_string())
    }
}
