// ============================================================
// Layer 2 — PrepareUseCase
// ============================================================
// Orchestrates the full preparation run in order:
//
//   Step 1: Load CSV records         (Layer 4 - data)
//   Step 2: Run the pipeline         (Layer 4 - data)
//   Step 3: Persist the artifacts    (Layer 6 - infra)
//
// The use case owns the config and wires the layers together;
// it contains no cleaning or encoding logic of its own.
//
// Reference: Rust Book §13 (Iterators and Closures)

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::data::loader::CsvRecordSource;
use crate::data::preparer::{prepare, PrepareOptions, PrepareOutcome};
use crate::domain::traits::RecordSource;
use crate::infra::artifact_store::ArtifactStore;

// ─── Preparation Configuration ───────────────────────────────────────────────
// All parameters for one preparation run. Serialisable so the
// exact run can be reproduced later: the config is written to
// the artifact directory next to the arrays it produced.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrepareConfig {
    /// Path to the review CSV
    pub csv_path: String,

    /// Directory the artifacts are written to
    pub out_dir: String,

    /// Header name of the review body column
    pub text_column: String,

    /// Header name of the summary column
    pub summary_column: String,

    /// Row cap — read at most this many CSV rows
    pub max_rows: usize,

    /// Maximum cleaned review length, in tokens
    pub max_text_len: usize,

    /// Maximum cleaned summary length, in tokens
    pub max_summary_len: usize,

    /// Minimum training frequency for review tokens
    pub rare_threshold_text: usize,

    /// Minimum training frequency for summary tokens
    pub rare_threshold_summary: usize,

    /// Proportion of records used for training
    pub train_fraction: f64,

    /// Shuffle seed for the train/validation split
    pub seed: u64,
}

impl Default for PrepareConfig {
    fn default() -> Self {
        Self {
            csv_path:               "data/reviews.csv".to_string(),
            out_dir:                "artifacts".to_string(),
            text_column:            "Text".to_string(),
            summary_column:         "Summary".to_string(),
            max_rows:               100_000,
            max_text_len:           30,
            max_summary_len:        8,
            rare_threshold_text:    4,
            rare_threshold_summary: 6,
            train_fraction:         0.9,
            seed:                   0,
        }
    }
}

impl PrepareConfig {
    /// The pipeline-level options carried by this config
    pub fn options(&self) -> PrepareOptions {
        PrepareOptions {
            max_text_len:           self.max_text_len,
            max_summary_len:        self.max_summary_len,
            rare_threshold_text:    self.rare_threshold_text,
            rare_threshold_summary: self.rare_threshold_summary,
            train_fraction:         self.train_fraction,
            seed:                   self.seed,
        }
    }
}

// ─── PrepareUseCase ──────────────────────────────────────────────────────────
// Owns the config and runs the full preparation end to end.
pub struct PrepareUseCase {
    config: PrepareConfig,
}

impl PrepareUseCase {
    /// Create a new PrepareUseCase with the given configuration
    pub fn new(config: PrepareConfig) -> Self {
        Self { config }
    }

    /// Execute the full preparation pipeline end to end.
    /// Returns the outcome so the CLI can report the counts.
    pub fn execute(&self) -> Result<PrepareOutcome> {
        let cfg = &self.config;

        // ── Step 1: Load the raw corpus ──────────────────────────────────────
        tracing::info!("Loading reviews from '{}'", cfg.csv_path);
        let source = CsvRecordSource::new(
            &cfg.csv_path,
            &cfg.text_column,
            &cfg.summary_column,
            cfg.max_rows,
        );
        let records = source.load_all()?;

        // ── Step 2: Clean, split, build vocabularies, encode ─────────────────
        let outcome = prepare(records, &cfg.options())?;

        // ── Step 3: Persist everything a trainer needs ───────────────────────
        let store = ArtifactStore::new(&cfg.out_dir);
        store.save_json("prepare_config.json", cfg)?;
        store.save_vocab("vocab_text.json", &outcome.corpus.vocab_text)?;
        store.save_vocab("vocab_summary.json", &outcome.corpus.vocab_summary)?;
        store.save_reports(&outcome.text_report, &outcome.summary_report)?;
        store.save_partition("train.bin", &outcome.corpus.train)?;
        store.save_partition("val.bin", &outcome.corpus.val)?;

        tracing::info!("Artifacts written to '{}'", cfg.out_dir);
        Ok(outcome)
    }
}
