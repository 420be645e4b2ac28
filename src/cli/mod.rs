// ============================================================
// Layer 1 — CLI / Presentation Layer
// ============================================================
// This is the entry point for all user interaction.
// It uses the `clap` crate to parse command line arguments.
// All business logic is delegated to Layer 2 (application).
//
// Two commands are supported:
//   1. `prepare` — cleans the corpus and writes the arrays
//   2. `stats`   — reports length distributions and coverage
//
// Reference: Rust Book §7 (Modules), §12 (CLI programs)

// Declare the commands submodule
pub mod commands;

use anyhow::Result;
use clap::Parser;
use commands::{Commands, PrepareArgs, StatsArgs};

/// The main CLI struct — clap reads the fields and generates
/// argument parsing code automatically via the Parser derive macro.
#[derive(Parser, Debug)]
#[command(
    name = "review-summarizer",
    version = "0.1.0",
    about = "Clean a review CSV and build model-ready summarization data."
)]
pub struct Cli {
    /// The subcommand to run (prepare or stats)
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Match on the subcommand and dispatch to the correct use case.
    /// This keeps the CLI layer thin — it only routes, never computes.
    pub fn run(self) -> Result<()> {
        match self.command {
            Commands::Prepare(args) => Self::run_prepare(args),
            Commands::Stats(args)   => Self::run_stats(args),
        }
    }

    /// Handles the `prepare` subcommand.
    /// Converts CLI args into a PrepareConfig and hands off to Layer 2.
    fn run_prepare(args: PrepareArgs) -> Result<()> {
        use crate::application::prepare_use_case::PrepareUseCase;

        tracing::info!("Starting preparation of: {}", args.csv_path);

        // Convert CLI args → application config (separates presentation from domain)
        let use_case = PrepareUseCase::new(args.into());
        let outcome  = use_case.execute()?;

        println!(
            "Prepared {} train / {} validation rows (x_voc={}, y_voc={}).",
            outcome.corpus.train.len(),
            outcome.corpus.val.len(),
            outcome.corpus.x_voc(),
            outcome.corpus.y_voc(),
        );
        println!(
            "Dropped {} rows whose summary lost all content to rare-word filtering.",
            outcome.dropped_sentinel_only,
        );
        Ok(())
    }

    /// Handles the `stats` subcommand.
    /// Prints the cleaned length distributions and cutoff coverage.
    fn run_stats(args: StatsArgs) -> Result<()> {
        use crate::application::stats_use_case::StatsUseCase;

        let use_case = StatsUseCase::new(args.into());
        let stats    = use_case.execute()?;

        println!(
            "Reviews:   {} records, length min {} / mean {:.1} / max {}",
            stats.text.count, stats.text.min, stats.text.mean, stats.text.max,
        );
        println!(
            "Summaries: {} records, length min {} / mean {:.1} / max {}",
            stats.summary.count, stats.summary.min, stats.summary.mean, stats.summary.max,
        );
        println!(
            "{:.1}% of summaries fit within {} tokens.",
            stats.summary_coverage * 100.0,
            stats.summary_len_cutoff,
        );
        Ok(())
    }
}
