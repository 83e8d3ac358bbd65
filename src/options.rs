//! Configuration options for summary rendering.
//!
//! [`SummaryOptions`] controls the three knobs of the summarizer: how wide
//! each indentation step is, how many array elements are shown before
//! truncation, and how deep the rendered structure goes.
//!
//! ## Examples
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

/// Configuration options for summary rendering.
///
/// All three fields have fixed defaults, so `SummaryOptions::default()` is a
/// fully-resolved configuration; builders override individual knobs. Once a
/// [`Summarizer`](crate::Summarizer) is constructed the options are immutable
/// for its lifetime.
///
/// # Examples
///
/// ```rust
/// use serde_summary::SummaryOptions;
///
/// // Defaults: 2-space indent, 5 array items, depth 3
/// let options = SummaryOptions::new();
///
/// // Custom configuration
/// let options = SummaryOptions::new()
///     .with_indent(4)
///     .with_max_array_items(10)
///     .with_max_depth(5);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SummaryOptions {
    /// Spaces per indentation step.
    pub indent: usize,
    /// Array elements shown before the `<...K more>` truncation suffix.
    pub max_array_items: usize,
    /// Recursion budget from the root; indentation and array truncation are
    /// both derived from it.
    pub max_depth: usize,
}

impl Default for SummaryOptions {
    fn default() -> Self {
        SummaryOptions {
            indent: 2,
            max_array_items: 5,
            max_depth: 3,
        }
    }
}

impl SummaryOptions {
    /// Creates the default options (2-space indent, 5 array items, depth 3).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_summary::SummaryOptions;
    ///
    /// let options = SummaryOptions::new();
    /// assert_eq!(options.indent, 2);
    /// assert_eq!(options.max_array_items, 5);
    /// assert_eq!(options.max_depth, 3);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the indentation size (number of spaces per level).
    ///
    /// Default is 2.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_summary::SummaryOptions;
    ///
    /// let options = SummaryOptions::new().with_indent(4);
    /// assert_eq!(options.indent, 4);
    /// ```
    #[must_use]
    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }

    /// Sets how many array elements are rendered before truncation.
    ///
    /// Default is 5. Arrays longer than this render their first
    /// `max_array_items` elements followed by a `<...K more>` marker.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_summary::SummaryOptions;
    ///
    /// let options = SummaryOptions::new().with_max_array_items(10);
    /// assert_eq!(options.max_array_items, 10);
    /// ```
    #[must_use]
    pub fn with_max_array_items(mut self, max_array_items: usize) -> Self {
        self.max_array_items = max_array_items;
        self
    }

    /// Sets the depth budget available at the root.
    ///
    /// Default is 3. An array reached with the budget exhausted renders as a
    /// `<array of N items>` placeholder instead of its elements.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_summary::SummaryOptions;
    ///
    /// let options = SummaryOptions::new().with_max_depth(1);
    /// assert_eq!(options.max_depth, 1);
    /// ```
    #[must_use]
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}
