// ============================================================
// Layer 3 — Vocabulary
// ============================================================
// A bidirectional mapping between token strings and dense
// integer ids, built from token frequencies over the TRAINING
// partition only.
//
// Id assignment rules:
//   - id 0 is reserved for padding and is NEVER given to a token
//   - real tokens get ids 1..=len, most frequent first
//   - ties are broken by first-seen order in the corpus,
//     so construction is fully deterministic
//
// Rare-word filtering:
//   A token whose training frequency falls below the threshold
//   is a "rare word" and is excluded. The retained size is
//   distinct_count - rare_count, i.e. exactly the tokens whose
//   frequency reaches the threshold.
//
// Out-of-vocabulary behaviour:
//   encode() silently OMITS unknown tokens rather than mapping
//   them to an UNK id. This under-counts content but matches
//   the upstream pipeline this data feeds; see the preparer,
//   which removes rows that lose all real content this way.
//
// The vocabulary is frozen once built — there is no way to add
// a token afterwards.
//
// Reference: Rust Book §8 (HashMaps)
//            Rust Book §13 (Iterators)

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::domain::error::{PrepareError, PrepareResult};

/// The integer id reserved for padding positions
pub const PAD_ID: u32 = 0;

/// A frozen token <-> id mapping.
///
/// `words[i]` holds the token with id `i + 1`; the index map
/// is the inverse direction. Both are serialised so a saved
/// vocabulary round-trips without rebuilding anything.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vocabulary {
    /// Tokens ordered by id: words[0] has id 1, words[1] has id 2, ...
    words: Vec<String>,

    /// token -> id lookup (never contains id 0)
    index: HashMap<String, u32>,
}

/// Statistics gathered while building a vocabulary.
/// These are the "rare words and coverage" numbers reported
/// for every preparation run.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct VocabReport {
    /// Number of distinct tokens seen in the training partition
    pub distinct: usize,

    /// Distinct tokens below the frequency threshold
    pub rare: usize,

    /// Distinct tokens kept: distinct - rare
    pub retained: usize,

    /// Percentage of distinct tokens that were rare
    pub rare_pct: f64,

    /// Percentage of total token occurrences covered by rare words
    pub rare_coverage_pct: f64,
}

impl Vocabulary {
    /// Build a vocabulary from training-partition token sequences.
    ///
    /// `rare_threshold` is the minimum frequency a token needs to
    /// be retained. Fails with a ConfigurationError if the
    /// threshold filters out every single token — a model cannot
    /// be trained against an empty vocabulary.
    pub fn build(
        sequences:      &[Vec<String>],
        rare_threshold: usize,
    ) -> PrepareResult<(Self, VocabReport)> {
        // ── Step 1: Count frequencies, remembering first-seen order ──────────
        // The Vec preserves discovery order so that equal-frequency
        // tokens sort deterministically later.
        let mut counts: HashMap<&str, usize> = HashMap::new();
        let mut order:  Vec<&str>            = Vec::new();

        for seq in sequences {
            for token in seq {
                let entry = counts.entry(token.as_str()).or_insert(0);
                if *entry == 0 {
                    order.push(token.as_str());
                }
                *entry += 1;
            }
        }

        // ── Step 2: Rare-word accounting ──────────────────────────────────────
        let distinct   = order.len();
        let total_freq: usize = counts.values().sum();

        let mut rare      = 0usize;
        let mut rare_freq = 0usize;
        for &token in &order {
            let freq = counts[token];
            if freq < rare_threshold {
                rare += 1;
                rare_freq += freq;
            }
        }

        let retained = distinct.saturating_sub(rare);
        if retained == 0 {
            return Err(PrepareError::Configuration(format!(
                "rare-word threshold {} leaves an empty vocabulary \
                 ({} distinct tokens, all rare)",
                rare_threshold, distinct
            )));
        }

        // ── Step 3: Rank and keep the top `retained` tokens ───────────────────
        // Sort by descending frequency; equal frequencies keep their
        // first-seen order (ranked[] starts in that order and the
        // sort is stable).
        let mut ranked: Vec<&str> = order.clone();
        ranked.sort_by(|a, b| counts[b].cmp(&counts[a]));
        ranked.truncate(retained);

        let words: Vec<String> = ranked.iter().map(|t| t.to_string()).collect();
        let index: HashMap<String, u32> = words
            .iter()
            .enumerate()
            .map(|(i, w)| (w.clone(), (i + 1) as u32))
            .collect();

        let report = VocabReport {
            distinct,
            rare,
            retained,
            rare_pct:          pct(rare, distinct),
            rare_coverage_pct: pct(rare_freq, total_freq),
        };

        Ok((Self { words, index }, report))
    }

    /// The id for a token, if it is in the vocabulary
    pub fn id_of(&self, token: &str) -> Option<u32> {
        self.index.get(token).copied()
    }

    /// The token for an id, if the id is assigned.
    /// Id 0 (padding) maps to no token by construction.
    pub fn token_of(&self, id: u32) -> Option<&str> {
        if id == PAD_ID {
            return None;
        }
        self.words.get((id - 1) as usize).map(|s| s.as_str())
    }

    /// Number of real tokens in the vocabulary
    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// The vocabulary size as reported to the model layer:
    /// real tokens + 1 for the reserved padding id.
    pub fn reported_size(&self) -> usize {
        self.words.len() + 1
    }

    /// Map a token sequence to ids. Tokens not in the vocabulary
    /// (true OOV or filtered as rare) are silently omitted.
    pub fn encode(&self, tokens: &[String]) -> Vec<u32> {
        tokens
            .iter()
            .filter_map(|t| self.id_of(t))
            .collect()
    }

    /// Map an id sequence back to tokens, skipping padding.
    /// This is the repo-side half of turning model output back
    /// into text.
    pub fn decode(&self, ids: &[u32]) -> Vec<&str> {
        ids.iter().filter_map(|&id| self.token_of(id)).collect()
    }
}

fn pct(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        0.0
    } else {
        (part as f64 / whole as f64) * 100.0
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    fn seq(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_ids_start_at_one_by_descending_frequency() {
        // "the" x3, "dog" x2, "ran" x1
        let seqs = vec![seq(&["the", "dog", "ran"]), seq(&["the", "the", "dog"])];
        let (vocab, _) = Vocabulary::build(&seqs, 1).unwrap();

        assert_eq!(vocab.id_of("the"), Some(1));
        assert_eq!(vocab.id_of("dog"), Some(2));
        assert_eq!(vocab.id_of("ran"), Some(3));
        // Id 0 is never a token
        assert_eq!(vocab.token_of(PAD_ID), None);
    }

    #[test]
    fn test_every_id_in_valid_range() {
        let seqs = vec![seq(&["aa", "bb", "cc", "aa", "bb", "aa"])];
        let (vocab, _) = Vocabulary::build(&seqs, 1).unwrap();

        for word in ["aa", "bb", "cc"] {
            let id = vocab.id_of(word).unwrap();
            assert!(id >= 1 && (id as usize) < vocab.reported_size());
        }
    }

    #[test]
    fn test_rare_words_are_excluded() {
        // threshold 2: "rare" (freq 1) is dropped, "food" (freq 2) kept
        let seqs = vec![seq(&["food", "rare"]), seq(&["food"])];
        let (vocab, report) = Vocabulary::build(&seqs, 2).unwrap();

        assert_eq!(vocab.id_of("food"), Some(1));
        assert_eq!(vocab.id_of("rare"), None);

        assert_eq!(report.distinct, 2);
        assert_eq!(report.rare, 1);
        assert_eq!(report.retained, 1);
        // retained + rare always reconstructs the distinct count
        assert_eq!(report.retained + report.rare, report.distinct);
    }

    #[test]
    fn test_tie_break_is_first_seen_order() {
        // "zz" and "aa" both appear once; "zz" was seen first
        let seqs = vec![seq(&["zz", "aa"])];
        let (vocab, _) = Vocabulary::build(&seqs, 1).unwrap();

        assert_eq!(vocab.id_of("zz"), Some(1));
        assert_eq!(vocab.id_of("aa"), Some(2));
    }

    #[test]
    fn test_empty_vocabulary_is_configuration_error() {
        let seqs = vec![seq(&["once", "only"])];
        let err = Vocabulary::build(&seqs, 10).unwrap_err();
        assert!(matches!(err, PrepareError::Configuration(_)));
    }

    #[test]
    fn test_encode_omits_unknown_tokens() {
        let seqs = vec![seq(&["good", "good", "coffee", "coffee"])];
        let (vocab, _) = Vocabulary::build(&seqs, 2).unwrap();

        // "stale" was never seen — silently omitted, no placeholder
        let ids = vocab.encode(&seq(&["good", "stale", "coffee"]));
        assert_eq!(ids.len(), 2);
        assert!(!ids.contains(&PAD_ID));
    }

    #[test]
    fn test_decode_round_trips_and_skips_padding() {
        let seqs = vec![seq(&["good", "coffee"])];
        let (vocab, _) = Vocabulary::build(&seqs, 1).unwrap();

        let ids = vocab.encode(&seq(&["good", "coffee"]));
        let mut padded = ids.clone();
        padded.extend([PAD_ID, PAD_ID]);

        assert_eq!(vocab.decode(&padded), vec!["good", "coffee"]);
    }

    #[test]
    fn test_reported_size_counts_padding_slot() {
        let seqs = vec![seq(&["aa", "bb"])];
        let (vocab, _) = Vocabulary::build(&seqs, 1).unwrap();
        assert_eq!(vocab.len(), 2);
        assert_eq!(vocab.reported_size(), 3);
    }
}
