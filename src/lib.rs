//! # serde_summary
//!
//! Bounded, human-readable summaries of nested data for logs and terminals.
//!
//! ## Why summarize?
//!
//! Dumping a full payload into a log line buries the signal: a response with
//! ten thousand array elements or six levels of nesting is unreadable and
//! expensive to store. `serde_summary` renders any value tree into a short,
//! legible summary — deep structure is cut off by a depth budget, long
//! arrays are truncated to a prefix plus a `<...K more>` count, and what
//! remains reads as familiar JSON-style literals.
//!
//! ## Key Features
//!
//! - **Bounded output**: depth capped by `max_depth`, array width by
//!   `max_array_items` — output size follows configuration, not input size
//! - **Serde Compatible**: summarize any `#[derive(Serialize)]` type, or any
//!   JSON text classified through the [`Value`] model
//! - **Total**: any finite tree within the hard nesting ceiling renders
//!   `Ok`; pathologically deep input yields a [`Error::RecursionLimit`]
//!   instead of a stack overflow
//! - **Deterministic**: identical configuration and input always produce
//!   byte-identical output; object keys keep insertion order
//! - **No Unsafe Code**: written entirely in safe Rust
//!
//! ## Quick Start
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! serde_summary = "0.1"
//! serde = { version = "1.0", features = ["derive"] }
//! ```
//!
//! ### Summarizing a value
//!
//! ```rust
//! use serde::Serialize;
//! use serde_summary::summarize;
//!
//! #[derive(Serialize)]
//! struct Report {
//!     name: String,
//!     samples: Vec<u32>,
//! }
//!
//! let report = Report {
//!     name: "latency".to_string(),
//!     samples: vec![3, 5, 8, 13, 21, 34, 55],
//! };
//!
//! let summary = summarize(&report).unwrap();
//! assert!(summary.contains("samples: [ 3,5,8,13,21, <...2 more>"));
//! ```
//!
//! ### Custom bounds
//!
//! ```rust
//! use serde_summary::{summarize_with_options, SummaryOptions};
//!
//! let options = SummaryOptions::new()
//!     .with_max_array_items(3)
//!     .with_max_depth(2);
//!
//! let summary = summarize_with_options(&vec![1, 2, 3, 4, 5], options).unwrap();
//! assert_eq!(summary, "[ 1,2,3, <...2 more>]");
//! ```
//!
//! ### Dynamic values with the summary! macro
//!
//! ```rust
//! use serde_summary::{summarize_value, summary};
//!
//! let data = summary!({
//!     "name": "Alice",
//!     "age": 30,
//!     "tags": ["rust", "serde"]
//! });
//!
//! let rendered = summarize_value(&data).unwrap();
//! assert!(rendered.contains("name: \"Alice\""));
//! ```
//!
//! ## Output Format
//!
//! See the [`format`] module for the full description of the summary format,
//! including the indentation law, truncation markers, and the deliberate
//! array/object asymmetry at exhausted depth.
//!
//! ## Safety Guarantees
//!
//! - No `unsafe` code blocks
//! - No panics in the public API
//! - Proper error propagation with `Result` types
//! - A hard recursion ceiling independent of `max_depth`
//!
//! ## Examples
//!
//! See the `demos/` directory for focused, runnable examples:
//!
//! - **`simple.rs`** - Your first summary (derived struct)
//! - **`dynamic_values.rs`** - Working with Value dynamically
//! - **`custom_options.rs`** - Tuning depth, width, and indentation
//! - **`log_payloads.rs`** - Bounded payload logging end to end
//!
//! Run any example with: `cargo run --example <name>`

pub mod error;
pub mod format;
pub mod macros;
pub mod map;
pub mod options;
pub mod render;
pub mod ser;
pub mod value;

pub use error::{Error, Result};
pub use map::SummaryMap;
pub use options::SummaryOptions;
pub use render::Summarizer;
pub use ser::ValueSerializer;
pub use value::{Number, Value};

use once_cell::sync::Lazy;
use serde::Serialize;
use std::io;

/// Process-wide default-configured summarizer backing [`summarize`] and
/// [`summarize_value`]. Created on first use, never torn down.
static DEFAULT_SUMMARIZER: Lazy<Summarizer> =
    Lazy::new(|| Summarizer::new(SummaryOptions::default()));

/// Summarize any `T: Serialize` with the default configuration.
///
/// Zero-configuration entry point; reuses one lazily-created process-wide
/// [`Summarizer`]. Construct an instance explicitly when the call site
/// should own its configuration.
///
/// # Examples
///
/// ```rust
/// use serde_summary::summarize;
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Point { x: i32, y: i32 }
///
/// let summary = summarize(&Point { x: 1, y: 2 }).unwrap();
/// assert_eq!(summary, "{\n  x: 1,  y: 2,}\n");
/// ```
///
/// # Errors
///
/// Returns an error if the value cannot be represented as a [`Value`] or
/// nests deeper than the hard recursion ceiling.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn summarize<T>(value: &T) -> Result<String>
where
    T: ?Sized + Serialize,
{
    DEFAULT_SUMMARIZER.summarize(value)
}

/// Summarize any `T: Serialize` with custom options.
///
/// # Examples
///
/// ```rust
/// use serde_summary::{summarize_with_options, SummaryOptions};
///
/// let options = SummaryOptions::new().with_max_array_items(2);
/// let summary = summarize_with_options(&vec![1, 2, 3], options).unwrap();
/// assert_eq!(summary, "[ 1,2, <...1 more>]");
/// ```
///
/// # Errors
///
/// Returns an error if the value cannot be represented as a [`Value`] or
/// nests deeper than the hard recursion ceiling.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn summarize_with_options<T>(value: &T, options: SummaryOptions) -> Result<String>
where
    T: ?Sized + Serialize,
{
    Summarizer::new(options).summarize(value)
}

/// Summarize an already-materialized [`Value`] tree with the default
/// configuration.
///
/// # Examples
///
/// ```rust
/// use serde_summary::{summarize_value, Value};
///
/// assert_eq!(summarize_value(&Value::Null).unwrap(), "null");
/// assert_eq!(summarize_value(&Value::Undefined).unwrap(), "undefined");
/// ```
///
/// # Errors
///
/// Returns [`Error::RecursionLimit`] for input nested deeper than the hard
/// recursion ceiling.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn summarize_value(value: &Value) -> Result<String> {
    DEFAULT_SUMMARIZER.summarize_value(value)
}

/// Summarize an already-materialized [`Value`] tree with custom options.
///
/// # Errors
///
/// Returns [`Error::RecursionLimit`] for input nested deeper than the hard
/// recursion ceiling.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn summarize_value_with_options(value: &Value, options: SummaryOptions) -> Result<String> {
    Summarizer::new(options).summarize_value(value)
}

/// Summarize any `T: Serialize` and write the result to a writer.
///
/// # Examples
///
/// ```rust
/// use serde_summary::summarize_to_writer;
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Point { x: i32, y: i32 }
///
/// let mut buffer = Vec::new();
/// summarize_to_writer(&mut buffer, &Point { x: 1, y: 2 }).unwrap();
/// ```
///
/// # Errors
///
/// Returns an error if summarization fails or writing to the writer fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn summarize_to_writer<W, T>(writer: W, value: &T) -> Result<()>
where
    W: io::Write,
    T: ?Sized + Serialize,
{
    summarize_to_writer_with_options(writer, value, SummaryOptions::default())
}

/// Summarize any `T: Serialize` with custom options and write the result to
/// a writer.
///
/// # Errors
///
/// Returns an error if summarization fails or writing to the writer fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn summarize_to_writer_with_options<W, T>(
    mut writer: W,
    value: &T,
    options: SummaryOptions,
) -> Result<()>
where
    W: io::Write,
    T: ?Sized + Serialize,
{
    let summary = summarize_with_options(value, options)?;
    writer
        .write_all(summary.as_bytes())
        .map_err(|e| Error::io(&e.to_string()))?;
    Ok(())
}

/// Convert any `T: Serialize` to a [`Value`].
///
/// Useful when the same tree is summarized several times with different
/// options, or when the structure isn't known at compile time.
///
/// # Examples
///
/// ```rust
/// use serde_summary::{to_value, Value};
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Point { x: i32, y: i32 }
///
/// let value: Value = to_value(&Point { x: 1, y: 2 }).unwrap();
/// assert!(value.is_object());
/// ```
///
/// # Errors
///
/// Returns an error if the value cannot be represented as a [`Value`]
/// (e.g. a map with non-string keys).
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_value<T>(value: &T) -> Result<Value>
where
    T: ?Sized + Serialize,
{
    value.serialize(ValueSerializer)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Serialize)]
    struct Point {
        x: i32,
        y: i32,
    }

    #[derive(Serialize)]
    struct User {
        id: u32,
        name: String,
        active: bool,
        tags: Vec<String>,
    }

    #[test]
    fn test_summarize_point() {
        let point = Point { x: 1, y: 2 };
        let summary = summarize(&point).unwrap();
        assert_eq!(summary, "{\n  x: 1,  y: 2,}\n");
    }

    #[test]
    fn test_summarize_user() {
        let user = User {
            id: 123,
            name: "Alice".to_string(),
            active: true,
            tags: vec!["admin".to_string(), "user".to_string()],
        };

        let summary = summarize(&user).unwrap();
        assert!(summary.contains("id: 123"));
        assert!(summary.contains("name: \"Alice\""));
        assert!(summary.contains("active: true"));
        assert!(summary.contains("tags: [ \"admin\",\"user\""));
    }

    #[test]
    fn test_default_instance_matches_explicit_construction() {
        let user = User {
            id: 7,
            name: "Bob".to_string(),
            active: false,
            tags: vec![],
        };

        let via_default = summarize(&user).unwrap();
        let via_instance = Summarizer::new(SummaryOptions::default())
            .summarize(&user)
            .unwrap();
        assert_eq!(via_default, via_instance);
    }

    #[test]
    fn test_to_value() {
        let point = Point { x: 1, y: 2 };
        let value = to_value(&point).unwrap();

        match value {
            Value::Object(obj) => {
                assert_eq!(obj.get("x"), Some(&Value::Number(Number::Integer(1))));
                assert_eq!(obj.get("y"), Some(&Value::Number(Number::Integer(2))));
            }
            _ => panic!("Expected object"),
        }
    }

    #[test]
    fn test_summarize_to_writer() {
        let mut buffer = Vec::new();
        summarize_to_writer(&mut buffer, &vec![1, 2, 3]).unwrap();
        assert_eq!(String::from_utf8(buffer).unwrap(), "[ 1,2,3]");
    }
}
