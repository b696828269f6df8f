//! Property-based tests for numeric range expressions.

use super::range::{numeric_range_regex, Interval};
use proptest::prelude::*;
use regex::Regex;

const BOUND: i64 = 1000;
const PROBE: i64 = 1200;

fn anchored(start: i64, end: i64) -> Regex {
    let expr = numeric_range_regex(start, end).unwrap();
    Regex::new(&format!("^(?:{expr})$")).unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    // Every integer within the probe window is accepted iff it lies in the interval
    #[test]
    fn range_accepts_exactly_its_members(a in -BOUND..=BOUND, b in -BOUND..=BOUND) {
        let (start, end) = if a <= b { (a, b) } else { (b, a) };
        let re = anchored(start, end);
        for n in -PROBE..=PROBE {
            prop_assert_eq!(re.is_match(&n.to_string()), start <= n && n <= end, "n = {}", n);
        }
    }

    // Zero-padded numerals never match a non-trivial interval
    #[test]
    fn range_rejects_zero_padding(a in -BOUND..=BOUND, b in -BOUND..=BOUND, n in 0i64..=PROBE, pad in 1usize..=3) {
        let (start, end) = if a <= b { (a, b) } else { (b, a) };
        let re = anchored(start, end);
        let padded = format!("{}{}", "0".repeat(pad), n);
        prop_assert!(!re.is_match(&padded));
        let negative = format!("-{padded}");
        prop_assert!(!re.is_match(&negative));
    }

    // Wide intervals stay exact near both bounds
    #[test]
    fn range_exact_near_bounds(a in -1_000_000_000i64..=1_000_000_000, len in 0i64..=1_000_000_000) {
        let (start, end) = (a, a + len);
        let re = anchored(start, end);
        for n in [start - 1, start, start + 1, end - 1, end, end + 1] {
            prop_assert_eq!(re.is_match(&n.to_string()), start <= n && n <= end, "n = {}", n);
        }
    }

    // Reversed bounds are always rejected
    #[test]
    fn reversed_interval_rejected(a in any::<i64>(), b in any::<i64>()) {
        prop_assume!(a > b);
        prop_assert!(Interval::new(a, b).is_err());
    }
}
