//! Property-based coverage of the Overpunch codec's round-trip guarantees
//! (spec properties 3 and 4).

use ncpdp_core::overpunch::{decode, encode};
use proptest::prelude::*;

proptest! {
    #[test]
    fn decode_encode_round_trips_over_the_full_range(n in -9_999_999_999i64..=9_999_999_999i64) {
        prop_assert_eq!(decode(&encode(n)).unwrap(), n);
    }

    #[test]
    fn encode_decode_recovers_the_string_for_non_digit_terminals(magnitude in 0u64..=999_999_999u64, negative: bool) {
        let n = if negative { -(magnitude as i64) } else { magnitude as i64 };
        let encoded = encode(n);
        let last = encoded.chars().last().unwrap();
        prop_assume!(!last.is_ascii_digit());

        let round_tripped = encode(decode(&encoded).unwrap());
        prop_assert_eq!(round_tripped, encoded);
    }

    #[test]
    fn digit_terminal_round_trips_to_its_positive_mapping(prefix in "[0-9]{1,9}", digit in 0u8..=9) {
        const POSITIVE: [char; 10] = ['{', 'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I'];
        let s = format!("{prefix}{digit}");
        let expected = format!("{prefix}{}", POSITIVE[digit as usize]);
        prop_assert_eq!(encode(decode(&s).unwrap()), expected);
    }
}
