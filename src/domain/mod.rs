// ============================================================
// Layer 3 — Domain Layer
// ============================================================
// This is the heart of the application — pure Rust structs
// and traits that define the core concepts of the system.
//
// Rules for this layer:
//   - NO file I/O or CSV parsing allowed here
//   - NO model/framework-specific code
//   - Only plain Rust structs, enums, and traits
//
// Why keep this layer pure?
//   - Easy to unit test (no files or fixtures needed)
//   - Easy to understand (no framework noise)
//   - Easy to swap implementations (just implement the trait)
//
// Think of this layer as the "dictionary" of the system —
// it defines what things ARE, not how they work.
//
// Reference: Rust Book §5 (Structs), §10 (Traits)

// A raw review/summary pair as read from the corpus
pub mod record;

// Frequency-based token vocabulary with a reserved padding id
pub mod vocab;

// The encoded train/validation arrays handed to the model layer
pub mod corpus;

// The Data / Configuration error taxonomy of the pipeline
pub mod error;

// Core abstractions (traits) that other layers implement
pub mod traits;
