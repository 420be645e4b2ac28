// ============================================================
// Layer 3 — Prepared Corpus
// ============================================================
// The final output of the pipeline: fixed-length integer
// arrays plus the frozen vocabularies needed to interpret
// them. This struct is the ONLY contract between the data
// pipeline and whatever sequence model consumes it — the
// model never learns about cleaning, and the pipeline never
// learns about model architecture.
//
// Alignment invariant: within each partition, text row i and
// summary row i describe the same original record. Every
// filtering step in the pipeline removes both rows together
// to preserve this.
//
// Reference: Rust Book §5 (Structs)

use serde::{Deserialize, Serialize};

use crate::domain::vocab::Vocabulary;

/// One partition of encoded data: parallel text and summary
/// rows, every row padded to its configured fixed length.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EncodedSet {
    /// Encoded review sequences — each exactly max_text_len long
    pub text: Vec<Vec<u32>>,

    /// Encoded summary sequences — each exactly max_summary_len long
    pub summary: Vec<Vec<u32>>,
}

impl EncodedSet {
    /// Number of aligned rows in this partition
    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Both sides must always have the same row count
    pub fn is_aligned(&self) -> bool {
        self.text.len() == self.summary.len()
    }
}

/// Everything the training subsystem needs, and nothing more:
/// the two partitions, the two frozen vocabularies, and (via
/// the vocabularies) the reported sizes and id<->token maps
/// used later to decode model output back into words.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PreparedCorpus {
    /// Training partition (x_tr / y_tr)
    pub train: EncodedSet,

    /// Validation partition (x_val / y_val)
    pub val: EncodedSet,

    /// Frozen vocabulary over training-partition review tokens
    pub vocab_text: Vocabulary,

    /// Frozen vocabulary over training-partition summary tokens
    /// (includes the START/END sentinels)
    pub vocab_summary: Vocabulary,
}

impl PreparedCorpus {
    /// Reported review vocabulary size (real tokens + padding slot)
    pub fn x_voc(&self) -> usize {
        self.vocab_text.reported_size()
    }

    /// Reported summary vocabulary size (real tokens + padding slot)
    pub fn y_voc(&self) -> usize {
        self.vocab_summary.reported_size()
    }
}
