// ============================================================
// Layer 4 — CSV Record Loader
// ============================================================
// Reads the review corpus from a delimited file using the
// csv crate. The Amazon fine-food dump this pipeline was
// built around carries its review body in a "Text" column and
// the human summary in a "Summary" column; both names are
// configurable because field naming is a corpus concern, not
// a pipeline concern.
//
// What happens at load time:
//   - reading stops after `max_rows` rows (the full dump has
//     ~500k reviews; a bounded sample keeps training tractable)
//   - a row with a missing or empty field is dropped here and
//     never becomes a RawRecord (na-drop semantics)
//   - nothing else — deduplication and cleaning belong to the
//     preparer, which also works on records from other sources
//
// Reference: csv crate documentation
//            Rust Book §9 (Error Handling)

use anyhow::{Context, Result};
use std::path::PathBuf;

use crate::domain::record::RawRecord;
use crate::domain::traits::RecordSource;

/// Loads review/summary pairs from a CSV file.
/// Implements the RecordSource trait from Layer 3.
pub struct CsvRecordSource {
    /// Path to the CSV file
    path: PathBuf,

    /// Header name of the review body column
    text_column: String,

    /// Header name of the summary column
    summary_column: String,

    /// Read at most this many data rows
    max_rows: usize,
}

impl CsvRecordSource {
    pub fn new(
        path:           impl Into<PathBuf>,
        text_column:    impl Into<String>,
        summary_column: impl Into<String>,
        max_rows:       usize,
    ) -> Self {
        Self {
            path:           path.into(),
            text_column:    text_column.into(),
            summary_column: summary_column.into(),
            max_rows,
        }
    }
}

impl RecordSource for CsvRecordSource {
    fn load_all(&self) -> Result<Vec<RawRecord>> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_path(&self.path)
            .with_context(|| format!("Cannot open corpus '{}'", self.path.display()))?;

        // Resolve the two column indices from the header row once,
        // instead of string-matching on every record
        let headers = reader
            .headers()
            .with_context(|| "Cannot read CSV header row")?
            .clone();

        let text_idx = column_index(&headers, &self.text_column)
            .with_context(|| format!("Corpus has no '{}' column", self.text_column))?;
        let summary_idx = column_index(&headers, &self.summary_column)
            .with_context(|| format!("Corpus has no '{}' column", self.summary_column))?;

        let mut records = Vec::new();
        let mut skipped = 0usize;

        for (row, result) in reader.records().enumerate() {
            if records.len() + skipped >= self.max_rows {
                break;
            }

            let record = result
                .with_context(|| format!("Malformed CSV row {}", row + 1))?;

            let text    = record.get(text_idx).unwrap_or("").trim();
            let summary = record.get(summary_idx).unwrap_or("").trim();

            // na-drop: either field missing or empty kills the row
            if text.is_empty() || summary.is_empty() {
                tracing::debug!("Dropping row {}: missing text or summary", row + 1);
                skipped += 1;
                continue;
            }

            records.push(RawRecord::new(text, summary));
        }

        tracing::info!(
            "Loaded {} records from '{}' ({} rows dropped for missing fields)",
            records.len(),
            self.path.display(),
            skipped,
        );

        Ok(records)
    }
}

/// Find a column's position in the header row
fn column_index(headers: &csv::StringRecord, name: &str) -> Option<usize> {
    headers.iter().position(|h| h == name)
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_loads_and_drops_empty_fields() {
        let dir = std::env::temp_dir().join("review-summarizer-loader-test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("corpus.csv");

        let mut f = std::fs::File::create(&path).unwrap();
        writeln!(f, "Id,Summary,Text").unwrap();
        writeln!(f, "1,Good coffee,I really liked this coffee").unwrap();
        writeln!(f, "2,,Missing summary row").unwrap();
        writeln!(f, "3,Stale,").unwrap();
        writeln!(f, "4,Great tea,Wonderful flavour").unwrap();

        let source = CsvRecordSource::new(&path, "Text", "Summary", 100_000);
        let records = source.load_all().unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].summary, "Good coffee");
        assert_eq!(records[1].text, "Wonderful flavour");
    }

    #[test]
    fn test_row_cap_is_honoured() {
        let dir = std::env::temp_dir().join("review-summarizer-loader-cap-test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("corpus.csv");

        let mut f = std::fs::File::create(&path).unwrap();
        writeln!(f, "Summary,Text").unwrap();
        for i in 0..10 {
            writeln!(f, "summary {i},text {i}").unwrap();
        }

        let source = CsvRecordSource::new(&path, "Text", "Summary", 3);
        let records = source.load_all().unwrap();
        assert_eq!(records.len(), 3);
    }

    #[test]
    fn test_missing_column_is_an_error() {
        let dir = std::env::temp_dir().join("review-summarizer-loader-col-test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("corpus.csv");

        std::fs::write(&path, "Body,Title\nabc,def\n").unwrap();

        let source = CsvRecordSource::new(&path, "Text", "Summary", 10);
        assert!(source.load_all().is_err());
    }
}
