//! Content diff highlighting for AI-suggested resume text.
//!
//! Compares a suggested rewrite against the user's current text and marks
//! which suggested tokens are new so the client can paint highlight spans.
//! Novelty is word-level set membership, not an edit script: a token is new
//! when its cleaned text appears nowhere in the current text.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::highlight::tokenize::{strip_markers, tokenize};

// ────────────────────────────────────────────────────────────────────────────
// Data models
// ────────────────────────────────────────────────────────────────────────────

/// How run boundaries (`is_start` / `is_end`) decide whether a neighboring
/// suggested token is new.
///
/// The web client's original highlighter checks the raw neighbor token
/// (markers included) against the current token list, while the primary
/// `is_new` check compares cleaned tokens. `Legacy` keeps that split;
/// `Normalized` uses cleaned tokens on both sides. Swapped at startup via
/// `HIGHLIGHT_BOUNDARY_MODE`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BoundaryMode {
    #[default]
    Legacy,
    Normalized,
}

/// One suggested-text token with its highlight annotations.
///
/// `text` has bold markers stripped. `is_start`/`is_end` mark the edges of a
/// maximal run of new tokens and exist only so the client can round the
/// highlight corners.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnotatedToken {
    pub text: String,
    pub is_new: bool,
    pub is_bold: bool,
    pub is_start: bool,
    pub is_end: bool,
}

// ────────────────────────────────────────────────────────────────────────────
// Annotation
// ────────────────────────────────────────────────────────────────────────────

/// Annotates each token of `suggested` with novelty relative to `current`.
///
/// An absent or empty `current` is an empty baseline: every suggested token
/// is new and the whole sequence forms a single run. The output always has
/// exactly one entry per suggested token; an empty `suggested` yields an
/// empty vec. Total over all string inputs — never fails.
pub fn annotate(current: Option<&str>, suggested: &str, mode: BoundaryMode) -> Vec<AnnotatedToken> {
    let current_tokens = tokenize(current.unwrap_or(""));
    let suggested_tokens = tokenize(suggested);

    // Membership pools over the current text. Cleaned tokens drive `is_new`;
    // raw tokens drive the Legacy adjacency check.
    let cleaned_pool: HashSet<&str> = current_tokens.iter().map(|t| strip_markers(t).0).collect();
    let raw_pool: HashSet<&str> = current_tokens.iter().map(String::as_str).collect();

    let is_new_at = |i: usize| !cleaned_pool.contains(strip_markers(&suggested_tokens[i]).0);

    // Neighbor novelty for run boundaries. A missing neighbor (sequence edge)
    // counts as not-new, so a run touching the edge still closes there.
    let neighbor_is_new = |i: Option<usize>| match i {
        None => false,
        Some(i) => match mode {
            BoundaryMode::Legacy => !raw_pool.contains(suggested_tokens[i].as_str()),
            BoundaryMode::Normalized => is_new_at(i),
        },
    };

    (0..suggested_tokens.len())
        .map(|i| {
            let (text, is_bold) = strip_markers(&suggested_tokens[i]);
            let is_new = is_new_at(i);
            let prev_is_new = neighbor_is_new(i.checked_sub(1));
            let next_is_new = neighbor_is_new((i + 1 < suggested_tokens.len()).then_some(i + 1));

            AnnotatedToken {
                text: text.to_string(),
                is_new,
                is_bold,
                is_start: is_new && !prev_is_new,
                is_end: is_new && !next_is_new,
            }
        })
        .collect()
}

/// Set non-membership check for scalar fields (technology tags, skill items).
/// An absent collection means everything is new.
pub fn is_new_item(existing: Option<&[String]>, item: &str) -> bool {
    match existing {
        Some(items) => !items.iter().any(|i| i == item),
        None => true,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
