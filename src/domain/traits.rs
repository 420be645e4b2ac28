// ============================================================
// Layer 3 — Core Traits (Abstractions)
// ============================================================
// Traits are Rust's way of defining shared behaviour —
// similar to interfaces in Java or abstract classes in Python.
//
// By programming against traits instead of concrete types,
// we can swap implementations without changing the code
// that uses them. For example:
//   - CsvRecordSource implements RecordSource
//   - A future JsonlRecordSource could also implement it
//   - The application layer only sees RecordSource
//     and works with both without any changes
//
// The model traits are the capability boundary around the ML
// subsystem: this repo prepares data and hands it over; it
// deliberately knows nothing about encoders, attention or
// decoding. Any sequence-to-sequence library can sit behind
// these two traits.
//
// Reference: Rust Book §10 (Traits: Defining Shared Behaviour)
//            Rust Book §17 (Object Oriented Patterns)

use anyhow::Result;

use crate::domain::corpus::PreparedCorpus;
use crate::domain::record::RawRecord;

// ─── RecordSource ─────────────────────────────────────────────────────────────
/// Any component that can load raw review/summary pairs.
///
/// Implementations:
///   - CsvRecordSource → reads a delimited review file
pub trait RecordSource {
    /// Load all available records from this source.
    /// Rows with missing or empty fields are dropped here,
    /// never returned.
    fn load_all(&self) -> Result<Vec<RawRecord>>;
}

// ─── SequenceModel ────────────────────────────────────────────────────────────
/// A trained sequence-to-sequence model: encoded review ids in,
/// encoded summary ids out. How the prediction happens (greedy
/// decoding, beam search, ...) is entirely the implementer's
/// business.
pub trait SequenceModel {
    /// Predict an encoded summary for one encoded review
    fn predict(&self, input: &[u32]) -> Result<Vec<u32>>;
}

// ─── SummaryTrainer ───────────────────────────────────────────────────────────
/// Any training backend that can fit a SequenceModel to a
/// PreparedCorpus. The corpus struct is the complete handoff:
/// arrays, vocabulary sizes, and id<->token maps.
pub trait SummaryTrainer {
    /// Train a model on the prepared corpus
    fn train(&self, corpus: &PreparedCorpus) -> Result<Box<dyn SequenceModel>>;
}
