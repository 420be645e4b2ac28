// ============================================================
// Layer 4 — Sequence Encoder
// ============================================================
// Turns variable-length id sequences into the fixed-length,
// right-padded arrays the model layer consumes, and removes
// rows that lost all real content during encoding.
//
// Why can a row lose its content?
//   Encoding silently omits out-of-vocabulary tokens. A short
//   summary made entirely of rare words can therefore encode
//   to just its two sentinels (START and END are frequent
//   enough to always be in vocabulary). Such a row teaches
//   the model nothing and is removed — together with its
//   paired text row, so the arrays stay aligned by index.
//
// Detection: a padded summary row with EXACTLY 2 non-zero
// entries holds only the sentinels.
//
// Reference: Rust Book §8 (Vectors)
//            Rust Book §13 (Iterators)

use crate::domain::corpus::EncodedSet;
use crate::domain::vocab::{Vocabulary, PAD_ID};

/// Number of non-zero entries in a row that means
/// "sentinels only, no content"
const SENTINELS_ONLY: usize = 2;

/// Encode a token sequence against a frozen vocabulary and
/// right-pad (or truncate) to exactly `max_len` ids.
pub fn encode_padded(vocab: &Vocabulary, tokens: &[String], max_len: usize) -> Vec<u32> {
    let mut ids = vocab.encode(tokens);
    ids.truncate(max_len);
    ids.resize(max_len, PAD_ID);
    ids
}

/// Encode a whole partition: parallel slices of text and
/// summary token sequences into one aligned EncodedSet.
pub fn encode_partition(
    vocab_text:      &Vocabulary,
    vocab_summary:   &Vocabulary,
    texts:           &[Vec<String>],
    summaries:       &[Vec<String>],
    max_text_len:    usize,
    max_summary_len: usize,
) -> EncodedSet {
    debug_assert_eq!(texts.len(), summaries.len());

    EncodedSet {
        text: texts
            .iter()
            .map(|t| encode_padded(vocab_text, t, max_text_len))
            .collect(),
        summary: summaries
            .iter()
            .map(|s| encode_padded(vocab_summary, s, max_summary_len))
            .collect(),
    }
}

/// Count the real (non-padding) entries in a padded row
pub fn content_len(row: &[u32]) -> usize {
    row.iter().filter(|&&id| id != PAD_ID).count()
}

/// Remove every row whose encoded summary holds only the two
/// sentinel ids. The paired text row is removed with it.
/// Returns the number of rows dropped.
pub fn drop_sentinel_only_rows(set: &mut EncodedSet) -> usize {
    let before = set.len();

    let keep: Vec<bool> = set
        .summary
        .iter()
        .map(|row| content_len(row) != SENTINELS_ONLY)
        .collect();

    let mut keep_iter = keep.iter();
    set.text.retain(|_| *keep_iter.next().unwrap());
    let mut keep_iter = keep.iter();
    set.summary.retain(|_| *keep_iter.next().unwrap());

    before - set.len()
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    fn toks(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    fn small_vocab() -> Vocabulary {
        // "sostok"/"eostok" most frequent, then "good", "tea"
        let seqs = vec![
            toks(&["sostok", "good", "tea", "eostok"]),
            toks(&["sostok", "good", "eostok"]),
            toks(&["sostok", "tea", "eostok"]),
        ];
        Vocabulary::build(&seqs, 1).unwrap().0
    }

    #[test]
    fn test_padded_length_is_exact() {
        let vocab = small_vocab();

        let short = encode_padded(&vocab, &toks(&["good"]), 6);
        assert_eq!(short.len(), 6);
        // Positions past the real content are padding
        assert_eq!(&short[1..], &[PAD_ID; 5]);

        let long = encode_padded(&vocab, &toks(&["good", "tea", "good", "tea"]), 2);
        assert_eq!(long.len(), 2);
        assert!(long.iter().all(|&id| id != PAD_ID));
    }

    #[test]
    fn test_oov_tokens_shrink_the_row() {
        let vocab = small_vocab();
        let ids = encode_padded(&vocab, &toks(&["good", "unseen", "tea"]), 4);
        // "unseen" omitted silently: 2 real ids + 2 pads
        assert_eq!(content_len(&ids), 2);
    }

    #[test]
    fn test_sentinel_only_rows_dropped_in_pairs() {
        let vocab = small_vocab();

        let mut set = EncodedSet {
            text: vec![
                encode_padded(&vocab, &toks(&["good", "tea"]), 4),
                encode_padded(&vocab, &toks(&["tea"]), 4),
                encode_padded(&vocab, &toks(&["good"]), 4),
            ],
            summary: vec![
                encode_padded(&vocab, &toks(&["sostok", "good", "eostok"]), 4),
                // all real content was OOV — sentinels survive alone
                encode_padded(&vocab, &toks(&["sostok", "unseen", "eostok"]), 4),
                encode_padded(&vocab, &toks(&["sostok", "tea", "eostok"]), 4),
            ],
        };

        let dropped = drop_sentinel_only_rows(&mut set);
        assert_eq!(dropped, 1);
        assert_eq!(set.len(), 2);
        assert!(set.is_aligned());
        // No surviving row is sentinels-only
        assert!(set.summary.iter().all(|row| content_len(row) != 2));
    }

    #[test]
    fn test_partition_encoding_stays_aligned() {
        let vocab = small_vocab();
        let texts     = vec![toks(&["good", "tea"]), toks(&["tea"])];
        let summaries = vec![
            toks(&["sostok", "good", "eostok"]),
            toks(&["sostok", "tea", "eostok"]),
        ];

        let set = encode_partition(&vocab, &vocab, &texts, &summaries, 5, 4);
        assert!(set.is_aligned());
        assert!(set.text.iter().all(|r| r.len() == 5));
        assert!(set.summary.iter().all(|r| r.len() == 4));
    }
}
