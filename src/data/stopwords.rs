// ============================================================
// Layer 4 — Stopword Set
// ============================================================
// The fixed English stopword list used to filter review-side
// tokens. Summary-side tokens are NOT filtered — a summary is
// short enough that function words still carry structure the
// decoder needs to learn.
//
// The list is the standard English set restricted to purely
// alphabetic forms of length > 1: by the time stopwords are
// checked, the normaliser has already removed all punctuation
// and all single-character tokens, so apostrophe forms like
// "don't" and one-letter entries like "s" could never match.
// "am" is deliberately kept as content so that expanded
// contractions ("i'm" → "i am") do not vanish entirely.
//
// Static, loaded once, never mutated — safe for concurrent
// reads if record cleaning is ever parallelised.
//
// Reference: Rust Book §8 (HashSets)

use std::collections::HashSet;
use std::sync::OnceLock;

const WORDS: &[&str] = &[
    "me", "my", "myself", "we", "our", "ours", "ourselves",
    "you", "your", "yours", "yourself", "yourselves",
    "he", "him", "his", "himself", "she", "her", "hers", "herself",
    "it", "its", "itself", "they", "them", "their", "theirs", "themselves",
    "what", "which", "who", "whom", "this", "that", "these", "those",
    "is", "are", "was", "were", "be", "been", "being",
    "have", "has", "had", "having", "do", "does", "did", "doing",
    "an", "the", "and", "but", "if", "or", "because", "as",
    "until", "while", "of", "at", "by", "for", "with", "about",
    "against", "between", "into", "through", "during", "before",
    "after", "above", "below", "to", "from", "up", "down", "in",
    "out", "on", "off", "over", "under", "again", "further",
    "then", "once", "here", "there", "when", "where", "why", "how",
    "all", "any", "both", "each", "few", "more", "most", "other",
    "some", "such", "no", "nor", "not", "only", "own", "same",
    "so", "than", "too", "very", "can", "will", "just", "don",
    "should", "now", "ain", "aren", "couldn", "didn", "doesn",
    "hadn", "hasn", "haven", "isn", "ma", "mightn", "mustn",
    "needn", "shan", "shouldn", "wasn", "weren", "won", "wouldn",
];

static SET: OnceLock<HashSet<&'static str>> = OnceLock::new();

/// The frozen stopword set, built on first use
pub fn stopword_set() -> &'static HashSet<&'static str> {
    SET.get_or_init(|| WORDS.iter().copied().collect())
}

/// True if the token is an English stopword
pub fn is_stopword(token: &str) -> bool {
    stopword_set().contains(token)
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_common_stopwords_match() {
        assert!(is_stopword("it"));
        assert!(is_stopword("the"));
        assert!(is_stopword("not"));
    }

    #[test]
    fn test_content_words_do_not_match() {
        assert!(!is_stopword("coffee"));
        assert!(!is_stopword("loving"));
        // kept so contraction expansions retain some content
        assert!(!is_stopword("am"));
    }

    #[test]
    fn test_all_entries_are_lowercase_alphabetic() {
        for w in stopword_set() {
            assert!(w.chars().all(|c| c.is_ascii_lowercase()), "bad entry: {w}");
            assert!(w.len() > 1, "single-letter entry is unreachable: {w}");
        }
    }
}
