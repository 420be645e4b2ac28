// ============================================================
// Layer 4 — Data Pipeline
// ============================================================
// This layer handles everything from a raw CSV of reviews
// all the way to model-ready integer arrays.
//
// The pipeline flows in this order:
//
//   reviews.csv
//       │
//       ▼
//   CsvRecordSource   → reads rows, drops missing fields
//       │
//       ▼
//   Normalizer        → cleans each side into tokens
//       │                (contractions, stopwords, markup)
//       ▼
//   Preparer          → dedup, length cutoff, sentinel wrap
//       │
//       ▼
//   Splitter          → seeded 90/10 train/validation split
//       │
//       ▼
//   Vocabulary        → frequency counts, rare-word filter
//       │                (domain layer, training data only)
//       ▼
//   Encoder           → fixed-length padded id arrays
//
// Each module is responsible for exactly one step.
// This makes each step independently testable and replaceable.
//
// Reference: Rust Book §13 (Iterators and Closures)

/// Loads review/summary pairs from a CSV corpus
pub mod loader;

/// Static contraction table ("can't" → "cannot")
pub mod contractions;

/// Static English stopword set
pub mod stopwords;

/// Cleans raw strings into token sequences
pub mod normalizer;

/// Seeded shuffle and train/validation split
pub mod splitter;

/// Fixed-length encoding and sentinel-only row cleanup
pub mod encoder;

/// The full preparation pipeline, end to end
pub mod preparer;
