// ============================================================
// Layer 3 — Record Domain Types
// ============================================================
// Represents one review/summary pair at the two stages of its
// life inside the pipeline:
//
//   RawRecord     — exactly what the CSV row said, untouched
//   CleanedRecord — the token sequences after normalisation
//
// Both are plain data structs with no behaviour beyond a few
// convenience accessors. Every stage of the pipeline produces
// NEW values — nothing is mutated after creation, which keeps
// text and summary arrays trivially alignable by index.
//
// Reference: Rust Book §5 (Structs and Methods)
//            Rust Book §10 (Derive Macros)

use serde::{Deserialize, Serialize};

/// A raw review/summary pair as read from the corpus file.
/// Rows with a missing or empty field never become a RawRecord —
/// the loader drops them before this type is constructed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RawRecord {
    /// The full review body
    pub text: String,

    /// The short human-written summary of the review
    pub summary: String,
}

impl RawRecord {
    /// Create a new RawRecord.
    /// Uses impl Into<String> so callers can pass &str or String —
    /// this is idiomatic Rust for flexible string arguments.
    pub fn new(text: impl Into<String>, summary: impl Into<String>) -> Self {
        Self {
            text:    text.into(),
            summary: summary.into(),
        }
    }
}

/// A record after both sides have been run through the normaliser.
///
/// Invariants (guaranteed by the normaliser):
///   - every token is purely alphabetic
///   - every token has length > 1
///   - text-side tokens contain no stopwords
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CleanedRecord {
    /// Cleaned review tokens (stopwords removed)
    pub tokens_text: Vec<String>,

    /// Cleaned summary tokens (stopwords kept)
    pub tokens_summary: Vec<String>,
}

impl CleanedRecord {
    pub fn new(tokens_text: Vec<String>, tokens_summary: Vec<String>) -> Self {
        Self { tokens_text, tokens_summary }
    }

    /// True if either side cleaned down to nothing.
    /// Such records carry no usable signal and are dropped.
    pub fn is_degenerate(&self) -> bool {
        self.tokens_text.is_empty() || self.tokens_summary.is_empty()
    }

    /// True if both sides fit within the given length cutoffs
    pub fn fits(&self, max_text_len: usize, max_summary_len: usize) -> bool {
        self.tokens_text.len() <= max_text_len
            && self.tokens_summary.len() <= max_summary_len
    }
}
