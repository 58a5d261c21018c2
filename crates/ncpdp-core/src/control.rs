//! NCPDP EMI control-byte vocabulary
//!
//! The wire form uses three single-character separators to frame a message
//! and one fixed header width. These are the only framing bytes in the
//! language — there is no escaping, no repetition separator, and no
//! component separator the way HL7 pipe-delimited messages have.

/// Separates key-prefixed fields within a segment.
pub const FIELD_SEPARATOR: char = '\u{1c}';

/// Terminates the Patient segment before the following segment-separator.
pub const GROUP_SEPARATOR: char = '\u{1d}';

/// Separates the header and each segment on the wire.
pub const SEGMENT_SEPARATOR: char = '\u{1e}';

/// Fixed width, in characters, of the Transaction Header.
pub const HEADER_LENGTH: usize = 56;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn control_bytes_are_distinct() {
        assert_ne!(FIELD_SEPARATOR, GROUP_SEPARATOR);
        assert_ne!(GROUP_SEPARATOR, SEGMENT_SEPARATOR);
        assert_ne!(FIELD_SEPARATOR, SEGMENT_SEPARATOR);
    }

    #[test]
    fn control_bytes_match_wire_contract() {
        assert_eq!(FIELD_SEPARATOR as u32, 0x1c);
        assert_eq!(GROUP_SEPARATOR as u32, 0x1d);
        assert_eq!(SEGMENT_SEPARATOR as u32, 0x1e);
    }

    #[test]
    fn header_length_is_56() {
        assert_eq!(HEADER_LENGTH, 56);
    }
}
