// ============================================================
// Layer 1 — CLI Commands and Arguments
// ============================================================
// Defines the two subcommands: `prepare` and `stats`
// and all their configurable flags.
//
// clap's derive macros automatically generate:
//   - help text (--help)
//   - error messages for missing args
//   - type conversion (string → usize, f64, etc.)
//
// Reference: Rust Book §12 (Building a CLI Program)

use clap::{Args, Subcommand};

use crate::application::prepare_use_case::PrepareConfig;
use crate::application::stats_use_case::StatsConfig;

/// The two top-level subcommands available to the user
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Clean the review corpus and build the model-ready arrays
    Prepare(PrepareArgs),

    /// Report cleaned length statistics to pick the cutoffs
    Stats(StatsArgs),
}

/// All arguments for the `prepare` command.
/// Each field becomes a --flag on the command line.
#[derive(Args, Debug)]
pub struct PrepareArgs {
    /// Path to the review CSV file
    #[arg(long, default_value = "data/reviews.csv")]
    pub csv_path: String,

    /// Directory to write artifacts (vocabularies, partitions)
    #[arg(long, default_value = "artifacts")]
    pub out_dir: String,

    /// Header name of the review body column
    #[arg(long, default_value = "Text")]
    pub text_column: String,

    /// Header name of the summary column
    #[arg(long, default_value = "Summary")]
    pub summary_column: String,

    /// Read at most this many CSV rows
    #[arg(long, default_value_t = 100_000)]
    pub max_rows: usize,

    /// Maximum cleaned review length in tokens —
    /// longer records are dropped, not truncated
    #[arg(long, default_value_t = 30)]
    pub max_text_len: usize,

    /// Maximum cleaned summary length in tokens
    #[arg(long, default_value_t = 8)]
    pub max_summary_len: usize,

    /// Review tokens seen fewer than this many times in the
    /// training partition are dropped from the vocabulary
    #[arg(long, default_value_t = 4)]
    pub rare_threshold_text: usize,

    /// Same threshold for summary tokens
    #[arg(long, default_value_t = 6)]
    pub rare_threshold_summary: usize,

    /// Proportion of records used for training (rest validates)
    #[arg(long, default_value_t = 0.9)]
    pub train_fraction: f64,

    /// Shuffle seed — the same seed reproduces the same split
    #[arg(long, default_value_t = 0)]
    pub seed: u64,
}

/// Convert CLI PrepareArgs into the application-layer config.
/// This is the boundary between Layer 1 and Layer 2 —
/// the application layer never sees clap types.
impl From<PrepareArgs> for PrepareConfig {
    fn from(a: PrepareArgs) -> Self {
        PrepareConfig {
            csv_path:               a.csv_path,
            out_dir:                a.out_dir,
            text_column:            a.text_column,
            summary_column:         a.summary_column,
            max_rows:               a.max_rows,
            max_text_len:           a.max_text_len,
            max_summary_len:        a.max_summary_len,
            rare_threshold_text:    a.rare_threshold_text,
            rare_threshold_summary: a.rare_threshold_summary,
            train_fraction:         a.train_fraction,
            seed:                   a.seed,
        }
    }
}

/// All arguments for the `stats` command
#[derive(Args, Debug)]
pub struct StatsArgs {
    /// Path to the review CSV file
    #[arg(long, default_value = "data/reviews.csv")]
    pub csv_path: String,

    /// Header name of the review body column
    #[arg(long, default_value = "Text")]
    pub text_column: String,

    /// Header name of the summary column
    #[arg(long, default_value = "Summary")]
    pub summary_column: String,

    /// Read at most this many CSV rows
    #[arg(long, default_value_t = 100_000)]
    pub max_rows: usize,

    /// Candidate summary cutoff to evaluate coverage for
    #[arg(long, default_value_t = 8)]
    pub summary_len_cutoff: usize,
}

impl From<StatsArgs> for StatsConfig {
    fn from(a: StatsArgs) -> Self {
        StatsConfig {
            csv_path:           a.csv_path,
            text_column:        a.text_column,
            summary_column:     a.summary_column,
            max_rows:           a.max_rows,
            summary_len_cutoff: a.summary_len_cutoff,
        }
    }
}
