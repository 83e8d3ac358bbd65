//! Summary Output Format
//!
//! This module documents the output format produced by the summarizer.
//!
//! # Overview
//!
//! The summary format is a bounded, lossy, human-facing rendering of a value
//! tree. It is meant to keep large or deeply nested payloads legible on a
//! terminal or in a log line; it is *not* valid JSON and is not meant to be
//! parsed back.
//!
//! ## Design Philosophy
//!
//! - **Bounded**: output size is controlled by configuration, not by input
//!   size — depth is capped by `max_depth`, array width by `max_array_items`
//! - **Lossy on purpose**: truncation markers say what was elided instead of
//!   showing it
//! - **Scalar fidelity**: what *is* shown renders as familiar JSON literals
//!
//! # Indentation
//!
//! Every position in the walk has a "level": the remaining depth budget,
//! `max_depth` at the root, one less per descent. The indent string at a
//! level is
//!
//! ```text
//! indent_width * (max_depth - level)  spaces
//! ```
//!
//! so the root is flush-left and nesting shifts right by `indent_width` per
//! step. Object traversal continues past a spent budget (levels below zero),
//! where the indent simply keeps widening.
//!
//! # Scalars
//!
//! | Kind | Rendering | Example |
//! |------|-----------|---------|
//! | Null | `null` | `null` |
//! | Undefined | `undefined` | `undefined` |
//! | Boolean | `true` / `false` | `true` |
//! | Integer | decimal digits | `-42` |
//! | Float | shortest decimal literal | `3.5` |
//! | Non-finite number | `null` (no JSON form) | `null` |
//! | String | JSON string literal | `"a\"b"` |
//! | Date | quoted RFC 3339 | `"2024-01-15T10:30:00.000Z"` |
//! | BigInt | decimal digits | `99999999999999999999` |
//!
//! `null` and `undefined` are prefixed with the indent for their level;
//! other scalars are not.
//!
//! String escapes use the standard JSON set: `\"`, `\\`, `\n`, `\r`, `\t`,
//! `\b`, `\f`, and `\u00XX` for any other control character.
//!
//! # Arrays
//!
//! An array rendered with budget remaining shows its first
//! `max_array_items` elements, joined with bare commas, followed by a count
//! marker for anything elided:
//!
//! ```text
//! [ 1,2,3, <...2 more>]
//! ```
//!
//! The indent for the array's own level is inserted once, immediately before
//! the closing bracket — not per element. This reads oddly for nested
//! arrays but is part of the format's compatibility surface and is kept
//! as-is.
//!
//! An array reached with the budget exhausted (level exactly 0) renders as a
//! placeholder with no element content:
//!
//! ```text
//! <array of 17 items>
//! ```
//!
//! # Objects
//!
//! Objects render one `key: value,` chunk per key, keys in insertion order
//! (never sorted), each chunk prefixed with the indent for the key's level.
//! Chunks are concatenated directly — the only newlines in the format come
//! from the object wrapper itself, `{\n` after the opening brace and `}\n`
//! after the closing one. With default options, the tree
//! `{array: [1..8], obj: {a: 1, b: 2, c: [2..8]}}` renders as:
//!
//! ```text
//! {
//!   array: [ 1,2,3,4,5, <...3 more>  ],  obj:   {
//!     a: 1,    b: 2,    c: [ 2,3,4,5,6, <...2 more>    ],  }
//! ,}
//! ```
//!
//! Keys are emitted as raw text, unquoted. An empty object renders as its
//! two brace lines with nothing between:
//!
//! ```text
//! {
//! }
//! ```
//!
//! ## The array/object asymmetry
//!
//! Arrays truncate structurally when the budget runs out; objects do not —
//! an object below level 0 still renders all of its keys, at ever-wider
//! indents. This asymmetry is observable, relied upon by downstream
//! consumers of the format, and therefore preserved. What bounds object
//! traversal is a hard 128-frame nesting ceiling, enforced independently of
//! `max_depth`; input deeper than that yields a `RecursionLimit` error
//! rather than output.
//!
//! # Limitations
//!
//! - Output is not parseable; there is deliberately no reader for it
//! - Keys are never quoted or escaped, so keys containing newlines or colons
//!   produce ambiguous-looking (still bounded) output
//! - Truncation is structural only; long strings are shown in full

// This module contains only documentation; no implementation code
