//! Property-based tests - totality and determinism across generated trees
//!
//! These tests complement the exact-output format tests by verifying the
//! summarizer's guarantees over a wide range of generated inputs: rendering
//! never fails within the nesting ceiling, identical configurations agree
//! byte-for-byte, and truncation math holds for arbitrary lengths.

use proptest::prelude::*;
use serde_summary::{Summarizer, SummaryMap, SummaryOptions, Value};

fn arb_value() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        Just(Value::Undefined),
        any::<bool>().prop_map(Value::from),
        any::<i64>().prop_map(Value::from),
        any::<f64>().prop_map(Value::from),
        "[a-zA-Z0-9 \\\\\"\n\t]{0,12}".prop_map(Value::from),
    ];
    // Depth 6 stays far below the 128-frame ceiling
    leaf.prop_recursive(6, 48, 6, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..6).prop_map(Value::Array),
            prop::collection::vec(("[a-z]{1,8}", inner), 0..6).prop_map(|entries| {
                Value::Object(
                    entries
                        .into_iter()
                        .collect::<SummaryMap>(),
                )
            }),
        ]
    })
}

fn arb_options() -> impl Strategy<Value = SummaryOptions> {
    (0usize..6, 0usize..8, 0usize..8).prop_map(|(indent, items, depth)| {
        SummaryOptions::new()
            .with_indent(indent)
            .with_max_array_items(items)
            .with_max_depth(depth)
    })
}

proptest! {
    // Totality: every generated tree renders under every configuration
    #[test]
    fn prop_total_over_finite_trees(value in arb_value(), options in arb_options()) {
        let summarizer = Summarizer::new(options);
        prop_assert!(summarizer.summarize_value(&value).is_ok());
    }

    // Determinism: two instances with identical options agree exactly
    #[test]
    fn prop_identical_configs_agree(value in arb_value(), options in arb_options()) {
        let first = Summarizer::new(options.clone());
        let second = Summarizer::new(options);
        prop_assert_eq!(
            first.summarize_value(&value).unwrap(),
            second.summarize_value(&value).unwrap()
        );
    }

    // Truncation marker appears exactly when the array is longer than the cap
    #[test]
    fn prop_truncation_marker(len in 0usize..20, cap in 0usize..20) {
        let array = Value::Array((0..len).map(|i| Value::from(i as i64)).collect());
        let options = SummaryOptions::new().with_max_array_items(cap);
        let out = Summarizer::new(options).summarize_value(&array).unwrap();

        if len > cap {
            let marker = format!("<...{} more>", len - cap);
            prop_assert!(out.contains(&marker));
        } else {
            prop_assert!(!out.contains("more>"));
        }
    }

    // Budget exhaustion: any array summarized at depth 0 is a placeholder
    #[test]
    fn prop_zero_depth_placeholder(len in 0usize..20) {
        let array = Value::Array((0..len).map(|i| Value::from(i as i64)).collect());
        let options = SummaryOptions::new().with_max_depth(0);
        let out = Summarizer::new(options).summarize_value(&array).unwrap();
        prop_assert_eq!(out, format!("<array of {} items>", len));
    }

    // Scalars render with no trailing or leading whitespace at the root
    #[test]
    fn prop_root_integer_is_bare_literal(n in any::<i64>()) {
        let out = Summarizer::new(SummaryOptions::default())
            .summarize_value(&Value::from(n))
            .unwrap();
        prop_assert_eq!(out, n.to_string());
    }
}
