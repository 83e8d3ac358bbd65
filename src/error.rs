//! Error types for summary rendering and value conversion.
//!
//! Summarization is total over ordinary data: any finite tree of arrays,
//! objects, and scalars renders to `Ok(String)`. The error cases are the
//! edges of that guarantee:
//!
//! - **Recursion limit**: input nested deeper than the hard ceiling the
//!   renderer enforces independently of `max_depth`
//! - **Conversion errors**: a `Serialize` type that cannot be represented as
//!   a [`Value`](crate::Value), e.g. a map with non-string keys
//! - **I/O errors**: writing a summary to a failing writer
//!
//! ## Examples
//!
//! ```rust
//! use serde_summary::{summarize_value, Error, SummaryMap, Value};
//!
//! // 200 levels of object nesting blows past the 128-frame ceiling
//! // (objects keep recursing below an exhausted depth budget; arrays don't)
//! let mut deep = Value::Null;
//! for _ in 0..200 {
//!     let mut map = SummaryMap::new();
//!     map.insert("inner".to_string(), deep);
//!     deep = Value::Object(map);
//! }
//!
//! match summarize_value(&deep) {
//!     Err(Error::RecursionLimit { limit }) => assert_eq!(limit, 128),
//!     other => panic!("expected recursion limit error, got {:?}", other),
//! }
//! ```

use std::fmt;
use thiserror::Error;

/// Represents all possible errors that can occur while summarizing a value.
#[derive(Debug, Clone, Error)]
pub enum Error {
    /// Input nested deeper than the renderer's hard frame ceiling.
    ///
    /// `max_depth` only bounds how much *structure* is shown; object
    /// traversal itself continues past an exhausted budget, so adversarially
    /// deep input is cut off by this separate limit instead of overflowing
    /// the stack.
    #[error("recursion limit exceeded: input nested deeper than {limit} levels")]
    RecursionLimit { limit: usize },

    /// A map was encountered whose keys are not strings.
    #[error("map keys must be strings")]
    KeyMustBeString,

    /// IO error while writing a summary
    #[error("IO error: {0}")]
    Io(String),

    /// Custom error raised through the serde bridge
    #[error("{0}")]
    Custom(String),
}

impl Error {
    /// Creates the recursion-limit error for the given frame ceiling.
    pub fn recursion_limit(limit: usize) -> Self {
        Error::RecursionLimit { limit }
    }

    /// Creates a custom error with a display message.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_summary::Error;
    ///
    /// let err = Error::custom("something went wrong");
    /// assert!(err.to_string().contains("something went wrong"));
    /// ```
    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }

    /// Creates an I/O error for writer failures.
    pub fn io(msg: &str) -> Self {
        Error::Io(msg.to_string())
    }
}

impl serde::ser::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
