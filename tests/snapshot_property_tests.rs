use proptest::prelude::*;
use stockwidget::common::constants::{STOCK_SENTINEL, SUBTITLE_LABEL};
use stockwidget::snapshot::{DisplayState, SnapshotRecord, parse};

/// Counters as the app would write them
fn counter_strategy() -> impl Strategy<Value = i64> {
    prop_oneof![0i64..10_000, any::<i64>()]
}

/// JSON values that are not integer-decodable
fn invalid_field_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("null".to_string()),
        Just("true".to_string()),
        Just("[]".to_string()),
        Just("{}".to_string()),
        "[a-zA-Z]{1,12}"
            .prop_filter("spelled-out infinity decodes", |s| s != "Infinity")
            .prop_map(|s| format!("\"{s}\"")),
    ]
}

fn absent_display() -> DisplayState {
    parse(None)
}

#[cfg(test)]
mod well_formed_snapshots {
    use super::*;

    proptest! {
        /// Both fields present render as their exact decimal strings
        #[test]
        fn test_counters_render_as_decimal(
            total in counter_strategy(),
            inbound in counter_strategy()
        ) {
            let raw = format!(r#"{{"totalStock": {total}, "inboundToday": {inbound}}}"#);
            let state = parse(Some(&raw));

            prop_assert_eq!(&state.total_stock, &total.to_string());
            prop_assert_eq!(&state.inbound_subtitle, &format!("{SUBTITLE_LABEL}{inbound}"));
        }

        /// A missing field falls back to zero, never the sentinel
        #[test]
        fn test_missing_field_defaults_to_zero(inbound in counter_strategy()) {
            let raw = format!(r#"{{"inboundToday": {inbound}}}"#);
            let state = parse(Some(&raw));

            prop_assert_eq!(state.total_stock.as_str(), "0");
            prop_assert!(state.inbound_subtitle.ends_with(&inbound.to_string()));
        }

        /// Invalid values for one field leave the other untouched
        #[test]
        fn test_invalid_field_is_independent(
            total in counter_strategy(),
            bad in invalid_field_strategy()
        ) {
            let raw = format!(r#"{{"totalStock": {total}, "inboundToday": {bad}}}"#);
            let state = parse(Some(&raw));

            prop_assert_eq!(&state.total_stock, &total.to_string());
            prop_assert_eq!(&state.inbound_subtitle, &format!("{SUBTITLE_LABEL}0"));
        }

        /// Numeric strings decode like numbers
        #[test]
        fn test_numeric_strings_decode(total in 0i64..1_000_000) {
            let raw = format!(r#"{{"totalStock": "{total}"}}"#);
            prop_assert_eq!(parse(Some(&raw)).total_stock, total.to_string());
        }
    }
}

#[cfg(test)]
mod arbitrary_input {
    use super::*;

    proptest! {
        /// Any input produces a fully populated display
        #[test]
        fn test_parse_is_total(raw in ".*") {
            let state = parse(Some(&raw));
            prop_assert!(!state.total_stock.is_empty());
            prop_assert!(state.inbound_subtitle.starts_with(SUBTITLE_LABEL));
        }

        /// Parsing has no hidden state
        #[test]
        fn test_parse_is_idempotent(raw in proptest::option::of(".*")) {
            prop_assert_eq!(parse(raw.as_deref()), parse(raw.as_deref()));
        }

        /// Text that is not a JSON object always matches the absent case
        #[test]
        fn test_non_object_text_matches_absent(raw in "[^{]*") {
            prop_assert_eq!(SnapshotRecord::decode(Some(&raw)), SnapshotRecord::Malformed);
            prop_assert_eq!(parse(Some(&raw)), absent_display());
        }

        /// The sentinel only ever appears for unusable records
        #[test]
        fn test_sentinel_only_without_object(raw in ".*") {
            let state = parse(Some(&raw));
            if state.total_stock == STOCK_SENTINEL {
                prop_assert!(SnapshotRecord::decode(Some(&raw)).is_empty());
            }
        }
    }
}

#[test]
fn test_documented_examples() {
    assert_eq!(parse(None).total_stock, "--");
    assert_eq!(parse(None).inbound_subtitle, format!("{SUBTITLE_LABEL}0"));
    assert_eq!(parse(Some("")), parse(None));
    assert_eq!(parse(Some("not json")), parse(None));
    assert_eq!(parse(Some(r#"{"totalStock": 5} trailing"#)).total_stock, "5");

    let state = parse(Some(r#"{"inboundToday": 7}"#));
    assert_eq!(state.total_stock, "0");
    assert!(state.inbound_subtitle.ends_with('7'));

    let state = parse(Some(r#"{"totalStock": "abc", "inboundToday": 3}"#));
    assert_eq!(state.total_stock, "0");
    assert_eq!(state.inbound_subtitle, format!("{SUBTITLE_LABEL}3"));

    let state = parse(Some(r#"{"totalStock": 152, "inboundToday": 12}"#));
    assert_eq!(state.total_stock, "152");
    assert_eq!(state.inbound_subtitle, format!("{SUBTITLE_LABEL}12"));
}
