//! Strict YYYYMMDD date validation shared by the header's `service_date`
//! and the Patient segment's `dob`.

use chrono::NaiveDate;

/// Validate that `s` is exactly 8 ASCII digits forming a real calendar date
/// (month 01-12, day valid for that month/year).
pub fn is_valid_yyyymmdd(s: &str) -> bool {
    if s.len() != 8 || !s.bytes().all(|b| b.is_ascii_digit()) {
        return false;
    }
    let year: i32 = match s[0..4].parse() {
        Ok(y) => y,
        Err(_) => return false,
    };
    let month: u32 = match s[4..6].parse() {
        Ok(m) => m,
        Err(_) => return false,
    };
    let day: u32 = match s[6..8].parse() {
        Ok(d) => d,
        Err(_) => return false,
    };
    NaiveDate::from_ymd_opt(year, month, day).is_some()
}
