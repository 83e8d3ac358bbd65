//! Format-contract tests: exact output shapes the summary format guarantees.

use serde_summary::{
    summarize_value, summarize_value_with_options, summarize_with_options, summary, Summarizer,
    SummaryMap, SummaryOptions, Value,
};

fn options(indent: usize, max_array_items: usize, max_depth: usize) -> SummaryOptions {
    SummaryOptions::new()
        .with_indent(indent)
        .with_max_array_items(max_array_items)
        .with_max_depth(max_depth)
}

#[test]
fn test_truncated_array_at_root() {
    // Root sits at level max_depth, not 0, so elements render
    let out = summarize_with_options(&vec![1, 2, 3, 4, 5], options(2, 3, 2)).unwrap();
    assert_eq!(out, "[ 1,2,3, <...2 more>]");
}

#[test]
fn test_array_exactly_at_limit_has_no_marker() {
    let out = summarize_with_options(&vec![1, 2, 3], options(2, 3, 2)).unwrap();
    assert_eq!(out, "[ 1,2,3]");
}

#[test]
fn test_array_with_zero_shown_items() {
    // The prefix is empty but the elided count still renders
    let out = summarize_with_options(&vec![7, 8], options(2, 0, 3)).unwrap();
    assert_eq!(out, "[ , <...2 more>]");
}

#[test]
fn test_zero_depth_array_placeholder() {
    let out = summarize_with_options(&vec![1, 2, 3], options(2, 5, 0)).unwrap();
    assert_eq!(out, "<array of 3 items>");
}

#[test]
fn test_exhausted_budget_array_inside_object() {
    let tree = summary!({"k": [1, 2]});
    let out = summarize_value_with_options(&tree, options(2, 5, 1)).unwrap();
    // The placeholder carries the indent for its (exhausted) level
    assert_eq!(out, "{\n  k:   <array of 2 items>,}\n");
}

#[test]
fn test_array_below_zero_level_still_renders_elements() {
    // Objects recurse past the budget; an array reached at a negative level
    // misses the == 0 check and renders normally
    let tree = summary!({"a": {"b": {"c": [1, 2]}}});
    let out = summarize_value_with_options(&tree, options(2, 5, 1)).unwrap();
    assert!(out.contains("[ 1,2"));
    assert!(!out.contains("<array"));
}

#[test]
fn test_empty_object_at_root() {
    let out = summarize_value(&Value::Object(SummaryMap::new())).unwrap();
    assert_eq!(out, "{\n}\n");
}

#[test]
fn test_null_at_root() {
    assert_eq!(summarize_value(&Value::Null).unwrap(), "null");
}

#[test]
fn test_undefined_at_root() {
    assert_eq!(summarize_value(&Value::Undefined).unwrap(), "undefined");
}

#[test]
fn test_null_and_undefined_carry_level_indent() {
    let tree = summary!({"a": null, "b": undefined});
    let out = summarize_value(&tree).unwrap();
    // ": " from the key, then the indent for level 2 (two spaces), then the literal
    assert_eq!(out, "{\n  a:   null,  b:   undefined,}\n");
}

#[test]
fn test_object_keys_keep_insertion_order() {
    let tree = summary!({"zeta": 1, "alpha": 2, "mid": 3});
    let out = summarize_value(&tree).unwrap();
    let z = out.find("zeta").unwrap();
    let a = out.find("alpha").unwrap();
    let m = out.find("mid").unwrap();
    assert!(z < a);
    assert!(a < m);
}

#[test]
fn test_indent_grows_per_level() {
    let tree = summary!({"outer": {"inner": 1}});
    let out = summarize_value_with_options(&tree, options(4, 5, 3)).unwrap();
    // outer key at one step (4 spaces), inner key at two steps (8 spaces)
    assert!(out.contains("\n    outer: "));
    assert!(out.contains("{\n        inner: 1,"));
}

#[test]
fn test_zero_indent_width_flattens() {
    let tree = summary!({"a": {"b": 1}});
    let out = summarize_value_with_options(&tree, options(0, 5, 3)).unwrap();
    assert_eq!(out, "{\na: {\nb: 1,}\n,}\n");
}

#[test]
fn test_demo_payload_exact_output() {
    let tree = summary!({
        "array": [1, 2, 3, 4, 5, 6, 7, 8],
        "obj": {
            "a": 1,
            "b": 2,
            "c": [2, 3, 4, 5, 6, 7, 8]
        }
    });

    let out = summarize_value(&tree).unwrap();
    assert_eq!(
        out,
        "{\n  array: [ 1,2,3,4,5, <...3 more>  ],  obj:   {\n    a: 1,    b: 2,    c: [ 2,3,4,5,6, <...2 more>    ],  }\n,}\n"
    );
}

#[test]
fn test_identical_configs_identical_output() {
    let tree = summary!({
        "name": "payload",
        "values": [1, 2, 3, 4, 5, 6],
        "nested": {"deep": [true, false, null]}
    });

    let first = Summarizer::new(options(3, 2, 4));
    let second = Summarizer::new(options(3, 2, 4));
    assert_eq!(
        first.summarize_value(&tree).unwrap(),
        second.summarize_value(&tree).unwrap()
    );
}

#[test]
fn test_scalars_have_no_indent_prefix() {
    // Scalars inside an object start right after ": ", unlike null/undefined
    let tree = summary!({"n": 42, "s": "x"});
    let out = summarize_value(&tree).unwrap();
    assert!(out.contains("n: 42,"));
    assert!(out.contains("s: \"x\","));
}

#[test]
fn test_date_renders_as_quoted_iso_string() {
    use chrono::{TimeZone, Utc};

    let date = Utc.with_ymd_and_hms(2024, 1, 15, 10, 30, 0).unwrap();
    let out = summarize_value(&Value::Date(date)).unwrap();
    assert_eq!(out, "\"2024-01-15T10:30:00.000Z\"");
}

#[test]
fn test_bigint_renders_as_digit_literal() {
    use num_bigint::BigInt;

    let big = BigInt::parse_bytes(b"99999999999999999999", 10).unwrap();
    let out = summarize_value(&Value::BigInt(big)).unwrap();
    assert_eq!(out, "99999999999999999999");
}

#[test]
fn test_nested_array_indent_sits_before_closing_bracket() {
    // The array's own-level indent lands once, before "]" — not per element
    let tree = summary!([[1, 2]]);
    let out = summarize_value_with_options(&tree, options(2, 5, 2)).unwrap();
    assert_eq!(out, "[ [ 1,2  ]]");
}
