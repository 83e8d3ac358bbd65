//! Bounded summary rendering.
//!
//! This module provides the [`Summarizer`], the engine that walks a
//! [`Value`] tree top-down and produces the bounded, human-readable summary
//! string.
//!
//! ## Overview
//!
//! The walk carries a single piece of transient state: the remaining depth
//! budget ("level"), which starts at `max_depth` and drops by one on every
//! descent. The budget drives two things at once:
//!
//! - **Indentation**: the indent at a level is `indent * (max_depth - level)`
//!   spaces, so output shifts right as the walk descends and sits flush-left
//!   at the root
//! - **Array truncation**: an array reached with the budget exhausted renders
//!   as a `<array of N items>` placeholder; otherwise its first
//!   `max_array_items` elements render, with a `<...K more>` marker for the
//!   rest
//!
//! Objects have no budget-exhaustion placeholder: their keys keep rendering
//! at any level, with the indent simply continuing to widen. The level is
//! signed for exactly this reason, and a hard frame ceiling independent of
//! `max_depth` keeps adversarially deep input from overflowing the stack.
//!
//! ## Usage
//!
//! Most users should use the convenience functions in the crate root:
//!
//! ```rust
//! use serde_summary::{summarize, summarize_with_options, SummaryOptions};
//! use serde::Serialize;
//!
//! #[derive(Serialize)]
//! struct Event { kind: String, codes: Vec<u32> }
//!
//! let event = Event { kind: "sync".to_string(), codes: vec![1, 2, 3] };
//!
//! let summary = summarize(&event).unwrap();
//! assert!(summary.contains("kind: \"sync\""));
//! ```
//!
//! ## Direct Summarizer Usage
//!
//! Constructing an instance avoids the process-wide default and pins the
//! configuration at the call site:
//!
//! ```rust
//! use serde_summary::{Summarizer, SummaryOptions};
//!
//! let summarizer = Summarizer::new(SummaryOptions::new().with_max_array_items(2));
//! let summary = summarizer.summarize(&vec![10, 20, 30]).unwrap();
//! assert_eq!(summary, "[ 10,20, <...1 more>]");
//! ```

use crate::{Error, Number, Result, SummaryMap, SummaryOptions, Value};
use chrono::SecondsFormat;
use serde::Serialize;

/// Hard ceiling on traversal nesting, independent of `max_depth`.
///
/// Matches the serde-ecosystem default recursion limit. Object traversal is
/// not stopped by an exhausted depth budget, so this is what stands between
/// a pathologically deep input and a stack overflow.
pub(crate) const RECURSION_LIMIT: usize = 128;

/// The summary renderer.
///
/// Holds a resolved [`SummaryOptions`] for its lifetime and exposes the two
/// entry points: [`summarize`](Summarizer::summarize) for anything
/// implementing `Serialize`, and
/// [`summarize_value`](Summarizer::summarize_value) for an
/// already-materialized [`Value`] tree. No call mutates instance state, so a
/// shared instance is safe to use from any number of threads.
#[derive(Clone, Debug)]
pub struct Summarizer {
    options: SummaryOptions,
}

impl Summarizer {
    /// Creates a summarizer with the given options.
    #[must_use]
    pub fn new(options: SummaryOptions) -> Self {
        Summarizer { options }
    }

    /// Returns the options this summarizer was built with.
    #[must_use]
    pub fn options(&self) -> &SummaryOptions {
        &self.options
    }

    /// Summarizes any `T: Serialize`.
    ///
    /// The value is converted to a [`Value`] tree first, then rendered.
    ///
    /// # Errors
    ///
    /// Returns an error if the value cannot be represented as a [`Value`]
    /// (e.g. a map with non-string keys) or nests deeper than the hard
    /// recursion ceiling.
    #[must_use = "this returns the result of the operation, errors must be handled"]
    pub fn summarize<T>(&self, value: &T) -> Result<String>
    where
        T: ?Sized + Serialize,
    {
        let value = crate::to_value(value)?;
        self.summarize_value(&value)
    }

    /// Summarizes an already-materialized [`Value`] tree.
    ///
    /// Deterministic: the same options and the same tree always produce the
    /// same string.
    ///
    /// # Errors
    ///
    /// Returns [`Error::RecursionLimit`] if the tree nests deeper than the
    /// hard recursion ceiling; `Ok` for every other input.
    #[must_use = "this returns the result of the operation, errors must be handled"]
    pub fn summarize_value(&self, value: &Value) -> Result<String> {
        self.render_item(value, self.options.max_depth as i64)
    }

    /// Indent string for a level: `indent * (max_depth - level)` spaces.
    ///
    /// Zero-width at the root; keeps widening below level 0 when object
    /// nesting outlives the budget.
    fn indent(&self, level: i64) -> String {
        let steps = self.options.max_depth as i64 - level;
        " ".repeat(self.options.indent * steps as usize)
    }

    fn render_item(&self, item: &Value, level: i64) -> Result<String> {
        if self.options.max_depth as i64 - level > RECURSION_LIMIT as i64 {
            return Err(Error::recursion_limit(RECURSION_LIMIT));
        }
        match item {
            Value::Array(items) => self.render_array(items, level),
            Value::Null => Ok(self.indent(level) + "null"),
            Value::Undefined => Ok(self.indent(level) + "undefined"),
            Value::Object(object) => self.render_object(object, level),
            Value::Bool(b) => Ok(String::from(if *b { "true" } else { "false" })),
            Value::Number(n) => Ok(render_number(n)),
            Value::String(s) => Ok(json_string(s)),
            Value::Date(dt) => Ok(json_string(
                &dt.to_rfc3339_opts(SecondsFormat::Millis, true),
            )),
            Value::BigInt(bi) => Ok(bi.to_string()),
        }
    }

    fn render_array(&self, items: &[Value], level: i64) -> Result<String> {
        // The check is on the pre-decrement budget: level 0 means the array
        // itself sits at the exhausted depth. A negative level (reached
        // through object nesting) does NOT truncate.
        if level == 0 {
            return Ok(format!(
                "{}<array of {} items>",
                self.indent(level),
                items.len()
            ));
        }

        let shown = items.len().min(self.options.max_array_items);
        let mut rendered = Vec::with_capacity(shown);
        for item in &items[..shown] {
            rendered.push(self.render_item(item, level - 1)?);
        }
        let mut summary = rendered.join(",");
        if items.len() > self.options.max_array_items {
            summary.push_str(&format!(
                ", <...{} more>",
                items.len() - self.options.max_array_items
            ));
        }
        // Single indent before the closing bracket, not per element.
        Ok(format!("[ {}{}]", summary, self.indent(level)))
    }

    fn render_object(&self, object: &SummaryMap, level: i64) -> Result<String> {
        let mut summary = String::new();
        for (key, value) in object.iter() {
            summary.push_str(&self.indent(level - 1));
            summary.push_str(key);
            summary.push_str(": ");
            summary.push_str(&self.render_item(value, level - 1)?);
            summary.push(',');
        }
        let indent = self.indent(level);
        Ok(format!("{}{{\n{}{}}}\n", indent, summary, indent))
    }
}

/// JSON literal for a number; non-finite values have no JSON form and
/// render as `null`.
fn render_number(n: &Number) -> String {
    match n {
        Number::Integer(i) => i.to_string(),
        Number::Float(f) if f.is_finite() => f.to_string(),
        _ => String::from("null"),
    }
}

/// Quotes and escapes a string per JSON string-literal rules.
fn json_string(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for ch in s.chars() {
        match ch {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\u{0008}' => out.push_str("\\b"),
            '\u{000C}' => out.push_str("\\f"),
            c if (c as u32) < 0x20 => {
                out.push_str(&format!("\\u{:04x}", c as u32));
            }
            c => out.push(c),
        }
    }
    out.push('"');
    out
}
