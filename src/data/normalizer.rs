// ============================================================
// Layer 4 — Text Normalizer
// ============================================================
// Converts a raw review or summary string into a cleaned token
// sequence. This is the one genuinely custom transform in the
// pipeline — everything downstream is counting and padding.
//
// Cleaning steps (applied in this exact order):
//   1. Lowercase everything
//   2. Strip HTML-like markup (tags and entities)
//   3. Remove parenthesized spans "(...)" including content
//   4. Remove literal double quotes
//   5. Expand contractions token by token ("can't" → "cannot")
//   6. Remove trailing possessive 's at a word boundary
//   7. Replace every non-letter with a space
//   8. Collapse runs of 2+ 'm' to exactly "mm" ("mmmm!" noise)
//   9. Tokenize; CONTENT mode drops stopwords, SUMMARY keeps them
//  10. Drop tokens of length <= 1
//
// The order is significant: markup must go before contraction
// handling (entities would otherwise be mis-tokenized), and
// punctuation stripping must FOLLOW contraction expansion,
// because contractions contain apostrophes that have to be
// resolved before apostrophes become noise.
//
// The function is total — any string in, including empty,
// produces a (possibly empty) token sequence out. No errors,
// no side effects.
//
// Reference: Rust Book §8 (Strings in Rust)
//            Rust Book §13 (Iterators)

use crate::data::contractions::expand;
use crate::data::stopwords::is_stopword;

/// Which side of a record is being cleaned.
/// Summaries keep stopwords — they are short enough that
/// function words still carry structure worth modelling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CleanMode {
    /// Review body: stopwords removed
    Content,
    /// Summary: stopwords kept
    Summary,
}

/// Clean one string into its token sequence.
pub fn normalize(text: &str, mode: CleanMode) -> Vec<String> {
    let lowered   = text.to_lowercase();
    let unmarked  = strip_markup(&lowered);
    let unparen   = strip_parenthesized(&unmarked);
    let unquoted: String = unparen.chars().filter(|&c| c != '"').collect();
    let expanded  = expand_contractions(&unquoted);
    let plain     = strip_possessives(&expanded);
    let alpha     = letters_only(&plain);
    let squeezed  = squeeze_m_runs(&alpha);

    squeezed
        .split_whitespace()
        .filter(|t| mode == CleanMode::Summary || !is_stopword(t))
        .filter(|t| t.len() > 1)
        .map(|t| t.to_string())
        .collect()
}

/// Clean one string and join the tokens back with single
/// spaces. Handy for display and for length statistics.
pub fn normalize_to_string(text: &str, mode: CleanMode) -> String {
    normalize(text, mode).join(" ")
}

// ─── Step 2: markup stripping ─────────────────────────────────────────────────
// Simple state machine: skip everything between < and >, and
// drop well-formed entities (&amp; &#39; ...). A stray '&' or
// '<' with no closer is kept — the non-letter pass scrubs it
// later anyway.
fn strip_markup(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len());
    let mut in_tag = false;
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];

        if in_tag {
            if c == '>' {
                in_tag = false;
            }
            i += 1;
            continue;
        }

        match c {
            '<' => {
                in_tag = true;
                i += 1;
            }
            '&' => {
                // An entity is '&', up to 8 name chars, then ';'
                let mut end = None;
                let mut j = i + 1;
                while j < chars.len() && j - i <= 8 {
                    let cj = chars[j];
                    if cj == ';' {
                        end = Some(j);
                        break;
                    }
                    if !(cj.is_ascii_alphanumeric() || cj == '#') {
                        break;
                    }
                    j += 1;
                }
                match end {
                    // Drop the whole entity (name must be non-empty)
                    Some(e) if e > i + 1 => i = e + 1,
                    _ => {
                        out.push(c);
                        i += 1;
                    }
                }
            }
            _ => {
                out.push(c);
                i += 1;
            }
        }
    }

    out
}

// ─── Step 3: parenthesized spans ──────────────────────────────────────────────
// Non-nested semantics: the FIRST ')' after an opener ends the
// span. An unclosed '(' stays in place and is scrubbed by the
// non-letter pass.
fn strip_parenthesized(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len());
    let mut i = 0;

    while i < chars.len() {
        if chars[i] == '(' {
            if let Some(offset) = chars[i + 1..].iter().position(|&c| c == ')') {
                // Skip past the matching ')'
                i += offset + 2;
                continue;
            }
        }
        out.push(chars[i]);
        i += 1;
    }

    out
}

// ─── Step 5: contraction expansion ────────────────────────────────────────────
// Whole-token exact lookup; multi-word expansions are inserted
// as literal text and rejoined with single spaces.
fn expand_contractions(text: &str) -> String {
    text.split_whitespace()
        .map(expand)
        .collect::<Vec<_>>()
        .join(" ")
}

// ─── Step 6: possessive markers ───────────────────────────────────────────────
// Removes 's when it sits at a word boundary: the next char is
// absent or not a word character. "james's" → "james", but
// "'side" is untouched.
fn strip_possessives(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len());
    let mut i = 0;

    while i < chars.len() {
        let at_boundary = chars
            .get(i + 2)
            .map_or(true, |&c| !(c.is_alphanumeric() || c == '_'));

        if chars[i] == '\'' && chars.get(i + 1) == Some(&'s') && at_boundary {
            i += 2;
            continue;
        }
        out.push(chars[i]);
        i += 1;
    }

    out
}

// ─── Step 7: letters only ─────────────────────────────────────────────────────
fn letters_only(text: &str) -> String {
    text.chars()
        .map(|c| if c.is_ascii_alphabetic() { c } else { ' ' })
        .collect()
}

// ─── Step 8: elongation squeeze ───────────────────────────────────────────────
// "mmm", "mmmm", ... all collapse to "mm". A single 'm' is
// left alone. Heuristic noise reducer for exclamatory reviews.
fn squeeze_m_runs(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut run = 0usize;

    for c in text.chars() {
        if c == 'm' {
            run += 1;
            continue;
        }
        push_m_run(&mut out, run);
        run = 0;
        out.push(c);
    }
    push_m_run(&mut out, run);

    out
}

fn push_m_run(out: &mut String, run: usize) {
    for _ in 0..run.min(2) {
        out.push('m');
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_cleaning_example() {
        let tokens = normalize("I'm loving IT!! <b>great</b> (really)", CleanMode::Content);

        // "I'm" → "i am" → "i" too short, "am" kept
        assert!(tokens.contains(&"am".to_string()));
        assert!(tokens.contains(&"loving".to_string()));
        assert!(tokens.contains(&"great".to_string()));
        // "it" is a stopword
        assert!(!tokens.contains(&"it".to_string()));
        // parenthetical content is gone
        assert!(!tokens.contains(&"really".to_string()));
        // tag names never survive
        assert!(!tokens.iter().any(|t| t == "b"));
    }

    #[test]
    fn test_output_is_alphabetic_and_long_enough() {
        let nasty = "Rated 9/10!! B+ <i>wow</i> #1 choice, 100% &amp; \"fab\"...";
        for mode in [CleanMode::Content, CleanMode::Summary] {
            for token in normalize(nasty, mode) {
                assert!(token.chars().all(|c| c.is_ascii_lowercase()), "bad token: {token}");
                assert!(token.len() > 1, "short token survived: {token}");
            }
        }
    }

    #[test]
    fn test_summary_mode_keeps_stopwords() {
        let content = normalize("it is the best coffee", CleanMode::Content);
        let summary = normalize("it is the best coffee", CleanMode::Summary);

        assert_eq!(content, vec!["best", "coffee"]);
        assert_eq!(summary, vec!["it", "is", "the", "best", "coffee"]);
    }

    #[test]
    fn test_empty_and_degenerate_inputs() {
        assert!(normalize("", CleanMode::Content).is_empty());
        assert!(normalize("   \t\n  ", CleanMode::Content).is_empty());
        assert!(normalize("!!! ??? 123", CleanMode::Summary).is_empty());
    }

    #[test]
    fn test_idempotence_on_clean_text() {
        // A string already free of markup, contractions and
        // punctuation cleans to itself
        let clean = normalize_to_string("lovely strong coffee beans", CleanMode::Content);
        assert_eq!(normalize_to_string(&clean, CleanMode::Content), clean);
        assert_eq!(
            normalize(&clean, CleanMode::Content),
            normalize("lovely strong coffee beans", CleanMode::Content)
        );
    }

    #[test]
    fn test_parenthesized_spans_are_removed() {
        let tokens = normalize("tasty (though pricey) snack", CleanMode::Content);
        assert_eq!(tokens, vec!["tasty", "snack"]);
    }

    #[test]
    fn test_unclosed_parenthesis_keeps_following_text() {
        // No closing ')' — nothing is removed, the '(' itself
        // becomes a space in the non-letter pass
        let tokens = normalize("tasty (though pricey snack", CleanMode::Content);
        assert_eq!(tokens, vec!["tasty", "though", "pricey", "snack"]);
    }

    #[test]
    fn test_markup_and_entities_dropped() {
        let tokens = normalize("<p>good &amp; cheap</p>", CleanMode::Content);
        assert_eq!(tokens, vec!["good", "cheap"]);
    }

    #[test]
    fn test_possessive_stripped_at_boundary() {
        let tokens = normalize("james's dog", CleanMode::Content);
        assert_eq!(tokens, vec!["james", "dog"]);
    }

    #[test]
    fn test_elongated_m_collapses() {
        let tokens = normalize("mmmm yummmy", CleanMode::Summary);
        assert_eq!(tokens, vec!["mm", "yummy"]);
    }

    #[test]
    fn test_contraction_inside_quotes() {
        // Quotes are removed before the table lookup, so the
        // token matches exactly
        let tokens = normalize("\"can't\" recommend", CleanMode::Content);
        assert_eq!(tokens, vec!["cannot", "recommend"]);
    }
}
