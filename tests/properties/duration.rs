//! Property tests for duration strings used by `--delay` and `--interval`.

use std::time::Duration;

use proptest::prelude::*;

use mirrorwatch::config::{format_duration, parse_duration};

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: parsing never panics on arbitrary input.
    #[test]
    fn property_parse_never_panics(s in "(?s).{0,64}") {
        let _ = parse_duration(&s);
    }

    /// PROPERTY: formatted durations parse back to the same value.
    #[test]
    fn property_format_round_trips(secs in 0u64..1_000_000, nanos in 0u32..1_000_000_000) {
        let duration = Duration::new(secs, nanos);
        let text = format_duration(duration);
        prop_assert_eq!(parse_duration(&text).unwrap(), duration, "via {}", text);
    }

    /// PROPERTY: whole milliseconds parse exactly.
    #[test]
    fn property_millis_parse_exactly(ms in 0u64..10_000_000) {
        prop_assert_eq!(
            parse_duration(&format!("{ms}ms")).unwrap(),
            Duration::from_millis(ms)
        );
    }

    /// PROPERTY: a leading minus sign is always rejected.
    #[test]
    fn property_negative_is_rejected(n in 1u32..100_000, unit in prop::sample::select(vec!["ms", "s", "m", "h"])) {
        let text = format!("-{n}{unit}");
        prop_assert!(parse_duration(&text).is_err());
    }
}
