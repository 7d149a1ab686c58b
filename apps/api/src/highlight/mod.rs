//! Content Diff Highlighter — the pure core of the suggestion-review flow.
//!
//! Stateless and synchronous: two strings in, an ordered annotation sequence
//! out. The HTTP surface in `handlers` is a thin wrapper.

pub mod diff;
pub mod handlers;
pub mod tokenize;

pub use diff::{annotate, is_new_item, AnnotatedToken, BoundaryMode};
