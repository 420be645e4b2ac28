// ============================================================
// Layer 6 — Infrastructure Layer
// ============================================================
// Everything that touches the filesystem lives here, behind
// small focused types the application layer calls. Keeping
// I/O in one layer means the domain and data layers stay
// pure and unit-testable without fixtures.
//
// Reference: Rust Book §12 (I/O and File Handling)

/// Persists vocabularies, config and encoded partitions
pub mod artifact_store;
