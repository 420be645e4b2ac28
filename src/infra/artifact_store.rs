// ============================================================
// Layer 6 — Artifact Store
// ============================================================
// Persists everything a downstream trainer needs to pick up
// where the pipeline left off:
//
//   prepare_config.json   — the exact parameters of the run
//   vocab_text.json       — frozen review vocabulary
//   vocab_summary.json    — frozen summary vocabulary
//   vocab_report.json     — rare-word / coverage statistics
//   train.bin, val.bin    — encoded partitions (bincode)
//
// Why two formats?
//   The vocabularies and config are small and benefit from
//   being human-readable, so they go to JSON. The partitions
//   are up to 100k rows of integer arrays — bincode keeps
//   them compact and fast to reload.
//
// Why save the config at all?
//   A model trained on these arrays is only reproducible if
//   the thresholds, lengths and seed that produced them are
//   recorded alongside. Without the config the arrays are
//   just numbers.
//
// Reference: Rust Book §9 (Error Handling)
//            serde_json / bincode crate documentation

use anyhow::{Context, Result};
use serde::{de::DeserializeOwned, Serialize};
use std::{fs, path::PathBuf};

use crate::domain::corpus::EncodedSet;
use crate::domain::vocab::{VocabReport, Vocabulary};

/// Manages saving and loading of pipeline artifacts.
/// All files live in the configured directory.
pub struct ArtifactStore {
    dir: PathBuf,
}

impl ArtifactStore {
    /// Create a new ArtifactStore.
    /// Creates the directory if it doesn't already exist.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        let dir = dir.into();
        fs::create_dir_all(&dir).ok();
        Self { dir }
    }

    /// Save any serialisable config/report value as pretty JSON
    pub fn save_json<T: Serialize>(&self, name: &str, value: &T) -> Result<()> {
        let path = self.dir.join(name);
        let json = serde_json::to_string_pretty(value)?;
        fs::write(&path, json)
            .with_context(|| format!("Cannot write '{}'", path.display()))?;
        tracing::debug!("Saved '{}'", path.display());
        Ok(())
    }

    /// Load a JSON artifact back
    pub fn load_json<T: DeserializeOwned>(&self, name: &str) -> Result<T> {
        let path = self.dir.join(name);
        let json = fs::read_to_string(&path)
            .with_context(|| {
                format!(
                    "Cannot read '{}'. Have you run 'prepare' first?",
                    path.display()
                )
            })?;
        Ok(serde_json::from_str(&json)?)
    }

    /// Save a frozen vocabulary under the given name
    pub fn save_vocab(&self, name: &str, vocab: &Vocabulary) -> Result<()> {
        self.save_json(name, vocab)
    }

    /// Reload a previously saved vocabulary
    pub fn load_vocab(&self, name: &str) -> Result<Vocabulary> {
        self.load_json(name)
    }

    /// Save the rare-word statistics of both vocabularies
    pub fn save_reports(&self, text: &VocabReport, summary: &VocabReport) -> Result<()> {
        self.save_json(
            "vocab_report.json",
            &serde_json::json!({ "text": text, "summary": summary }),
        )
    }

    /// Save an encoded partition as compact binary
    pub fn save_partition(&self, name: &str, set: &EncodedSet) -> Result<()> {
        let path  = self.dir.join(name);
        let bytes = bincode::serialize(set)
            .context("Cannot serialise encoded partition")?;
        fs::write(&path, bytes)
            .with_context(|| format!("Cannot write '{}'", path.display()))?;
        tracing::debug!("Saved '{}' ({} rows)", path.display(), set.len());
        Ok(())
    }

    /// Reload an encoded partition
    pub fn load_partition(&self, name: &str) -> Result<EncodedSet> {
        let path  = self.dir.join(name);
        let bytes = fs::read(&path)
            .with_context(|| format!("Cannot read '{}'", path.display()))?;
        bincode::deserialize(&bytes)
            .with_context(|| format!("Corrupt partition file '{}'", path.display()))
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    fn temp_store(tag: &str) -> ArtifactStore {
        let dir = std::env::temp_dir().join(format!("review-summarizer-store-{tag}"));
        let _ = fs::remove_dir_all(&dir);
        ArtifactStore::new(dir)
    }

    #[test]
    fn test_vocab_round_trip() {
        let store = temp_store("vocab");

        let seqs = vec![vec!["good".to_string(), "tea".to_string(), "good".to_string()]];
        let (vocab, _) = Vocabulary::build(&seqs, 1).unwrap();

        store.save_vocab("vocab_text.json", &vocab).unwrap();
        let loaded = store.load_vocab("vocab_text.json").unwrap();

        assert_eq!(loaded.len(), vocab.len());
        assert_eq!(loaded.id_of("good"), vocab.id_of("good"));
        assert_eq!(loaded.token_of(2), vocab.token_of(2));
    }

    #[test]
    fn test_partition_round_trip() {
        let store = temp_store("partition");

        let set = EncodedSet {
            text:    vec![vec![1, 2, 0, 0], vec![2, 1, 1, 0]],
            summary: vec![vec![1, 3, 2], vec![1, 2, 2]],
        };

        store.save_partition("train.bin", &set).unwrap();
        let loaded = store.load_partition("train.bin").unwrap();

        assert_eq!(loaded.text, set.text);
        assert_eq!(loaded.summary, set.summary);
    }

    #[test]
    fn test_missing_artifact_is_an_error() {
        let store = temp_store("missing");
        assert!(store.load_vocab("vocab_text.json").is_err());
        assert!(store.load_partition("train.bin").is_err());
    }
}
