// ============================================================
// Layer 2 — Application Layer (Use Cases)
// ============================================================
// One use case per user-facing operation. A use case owns its
// configuration, calls the data layer to do the actual work,
// and the infra layer to persist the results. It never parses
// CLI arguments and never touches clap types — Layer 1 hands
// it a plain config struct.
//
// Reference: Rust Book §7 (Modules)

/// Runs the full preparation pipeline and saves the artifacts
pub mod prepare_use_case;

/// Computes corpus length statistics to pick the cutoffs
pub mod stats_use_case;
