// ============================================================
// Layer 3 — Pipeline Error Taxonomy
// ============================================================
// Two failure classes exist in a deterministic batch transform:
//
//   Data          — the input corpus itself is unusable
//                   (e.g. nothing survives cleaning)
//   Configuration — the parameters are degenerate
//                   (e.g. a rare-word threshold that empties
//                   the vocabulary, a sentinel token that
//                   collides with a real corpus word)
//
// There are no transient failures here — no network, no
// concurrent writers — so there is nothing to retry. Every
// error is permanent and is raised eagerly, BEFORE any
// encoding work begins, because a silently propagated bad
// record would corrupt the index alignment between text and
// summary arrays.
//
// Reference: Rust Book §9 (Error Handling)
//            thiserror crate documentation

use thiserror::Error;

/// Errors raised by the dataset preparation pipeline
#[derive(Debug, Error)]
pub enum PrepareError {
    /// The input corpus is malformed or empty after filtering
    #[error("data error: {0}")]
    Data(String),

    /// The pipeline parameters are degenerate
    #[error("configuration error: {0}")]
    Configuration(String),
}

/// Result type alias for pipeline operations
pub type PrepareResult<T> = Result<T, PrepareError>;
