// ============================================================
// Layer 2 — StatsUseCase
// ============================================================
// Answers the question that decides the length cutoffs:
// "how long are cleaned reviews and summaries, and what
// fraction of summaries would a given cutoff keep?"
//
// This is the analysis step that picked max_summary_len = 8
// for the reference corpus (94% of cleaned summaries fit),
// exposed as its own command so the cutoffs can be re-derived
// whenever the corpus changes.
//
// Reference: Rust Book §13 (Iterators)

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::data::loader::CsvRecordSource;
use crate::data::preparer::clean_records;
use crate::domain::traits::RecordSource;

// ─── Statistics Configuration ────────────────────────────────────────────────
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatsConfig {
    /// Path to the review CSV
    pub csv_path: String,

    /// Header name of the review body column
    pub text_column: String,

    /// Header name of the summary column
    pub summary_column: String,

    /// Row cap — read at most this many CSV rows
    pub max_rows: usize,

    /// Candidate summary length cutoff to evaluate
    pub summary_len_cutoff: usize,
}

impl Default for StatsConfig {
    fn default() -> Self {
        Self {
            csv_path:           "data/reviews.csv".to_string(),
            text_column:        "Text".to_string(),
            summary_column:     "Summary".to_string(),
            max_rows:           100_000,
            summary_len_cutoff: 8,
        }
    }
}

/// Token-length distribution over one side of the corpus
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LengthDistribution {
    pub count: usize,
    pub min:   usize,
    pub max:   usize,
    pub mean:  f64,
}

impl LengthDistribution {
    fn from_lengths(lengths: &[usize]) -> Self {
        let count = lengths.len();
        let sum: usize = lengths.iter().sum();
        Self {
            count,
            min:  lengths.iter().copied().min().unwrap_or(0),
            max:  lengths.iter().copied().max().unwrap_or(0),
            mean: if count == 0 { 0.0 } else { sum as f64 / count as f64 },
        }
    }
}

/// The full corpus length analysis
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorpusStats {
    pub text:    LengthDistribution,
    pub summary: LengthDistribution,

    /// The cutoff that was evaluated
    pub summary_len_cutoff: usize,

    /// Fraction of cleaned summaries with length <= cutoff
    pub summary_coverage: f64,
}

// ─── StatsUseCase ────────────────────────────────────────────────────────────
pub struct StatsUseCase {
    config: StatsConfig,
}

impl StatsUseCase {
    pub fn new(config: StatsConfig) -> Self {
        Self { config }
    }

    /// Load, clean and measure the corpus
    pub fn execute(&self) -> Result<CorpusStats> {
        let cfg = &self.config;

        let source = CsvRecordSource::new(
            &cfg.csv_path,
            &cfg.text_column,
            &cfg.summary_column,
            cfg.max_rows,
        );
        let records = source.load_all()?;
        let cleaned = clean_records(records)?;

        let text_lengths:    Vec<usize> = cleaned.iter().map(|c| c.tokens_text.len()).collect();
        let summary_lengths: Vec<usize> = cleaned.iter().map(|c| c.tokens_summary.len()).collect();

        let within = summary_lengths
            .iter()
            .filter(|&&len| len <= cfg.summary_len_cutoff)
            .count();
        let summary_coverage = within as f64 / summary_lengths.len() as f64;

        tracing::info!(
            "{} cleaned records; {:.1}% of summaries fit within {} tokens",
            cleaned.len(),
            summary_coverage * 100.0,
            cfg.summary_len_cutoff,
        );

        Ok(CorpusStats {
            text:    LengthDistribution::from_lengths(&text_lengths),
            summary: LengthDistribution::from_lengths(&summary_lengths),
            summary_len_cutoff: cfg.summary_len_cutoff,
            summary_coverage,
        })
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_distribution() {
        let d = LengthDistribution::from_lengths(&[2, 4, 6]);
        assert_eq!(d.count, 3);
        assert_eq!(d.min, 2);
        assert_eq!(d.max, 6);
        assert!((d.mean - 4.0).abs() < 1e-9);
    }

    #[test]
    fn test_empty_distribution_is_zeroed() {
        let d = LengthDistribution::from_lengths(&[]);
        assert_eq!(d.count, 0);
        assert_eq!(d.min, 0);
        assert_eq!(d.max, 0);
        assert_eq!(d.mean, 0.0);
    }
}
