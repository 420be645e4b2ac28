// ============================================================
// Layer 4 — Train/Validation Splitter
// ============================================================
// Shuffles records and splits them into two sets:
//   - Training set:   used to fit the model AND to build
//                     the vocabularies
//   - Validation set: used to measure generalisation; it
//                     must never influence the vocabulary
//
// Why shuffle before splitting?
//   Review dumps are often ordered (by product, by date).
//   Without shuffling, the validation set would only contain
//   one slice of the corpus. Shuffling gives both sets a
//   representative mix.
//
// Why a fixed seed?
//   The pipeline is a deterministic batch job — the same CSV
//   and the same config must produce byte-identical arrays,
//   otherwise a retrained model is not comparable to the last
//   one. StdRng::seed_from_u64 gives a reproducible stream.
//
// Split ratio: 90% training, 10% validation (configurable).
//
// Uses Fisher-Yates shuffle via rand::seq::SliceRandom,
// the standard unbiased shuffle algorithm.
//
// Reference: Rust Book §8 (Vectors)
//            rand crate documentation

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

/// Shuffle `samples` with a seeded RNG and split into
/// (train, validation).
///
/// # Arguments
/// * `samples`        - All available samples (consumed)
/// * `train_fraction` - Proportion for training, e.g. 0.9 = 90%
/// * `seed`           - Fixed seed for reproducible shuffling
///
/// # Returns
/// A tuple (train_samples, val_samples)
pub fn split_train_val<T>(
    mut samples:    Vec<T>,
    train_fraction: f64,
    seed:           u64,
) -> (Vec<T>, Vec<T>) {
    let mut rng = StdRng::seed_from_u64(seed);

    // Fisher-Yates shuffle — every permutation is equally likely
    samples.shuffle(&mut rng);

    // e.g. 100 samples * 0.9 = 90 → first 90 are training.
    // Clamp to valid range to avoid panics on tiny datasets.
    let total    = samples.len();
    let split_at = ((total as f64) * train_fraction).round() as usize;
    let split_at = split_at.min(total);

    // split_off(n) removes elements [n..] and returns them
    let val = samples.split_off(split_at);

    tracing::debug!(
        "Dataset split: {} training, {} validation",
        samples.len(),
        val.len(),
    );

    (samples, val)
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_correct_split_sizes() {
        let items: Vec<usize> = (0..100).collect();
        let (train, val)      = split_train_val(items, 0.9, 0);
        assert_eq!(train.len(), 90);
        assert_eq!(val.len(),   10);
    }

    #[test]
    fn test_all_items_preserved() {
        // No items are lost in the split
        let items: Vec<usize> = (0..50).collect();
        let (train, val)      = split_train_val(items, 0.9, 7);
        let mut all: Vec<usize> = train.into_iter().chain(val).collect();
        all.sort_unstable();
        assert_eq!(all, (0..50).collect::<Vec<_>>());
    }

    #[test]
    fn test_same_seed_same_split() {
        let a = split_train_val((0..200).collect::<Vec<_>>(), 0.9, 42);
        let b = split_train_val((0..200).collect::<Vec<_>>(), 0.9, 42);
        assert_eq!(a, b);
    }

    #[test]
    fn test_different_seed_different_order() {
        let a = split_train_val((0..200).collect::<Vec<_>>(), 0.9, 1);
        let b = split_train_val((0..200).collect::<Vec<_>>(), 0.9, 2);
        // Sizes match even when the shuffles differ
        assert_eq!(a.0.len(), b.0.len());
        assert_ne!(a.0, b.0);
    }

    #[test]
    fn test_empty_dataset() {
        let items: Vec<usize> = Vec::new();
        let (train, val)      = split_train_val(items, 0.9, 0);
        assert!(train.is_empty());
        assert!(val.is_empty());
    }

    #[test]
    fn test_full_training_split() {
        // 1.0 fraction means everything goes to training
        let items: Vec<usize> = (0..10).collect();
        let (train, val)      = split_train_val(items, 1.0, 0);
        assert_eq!(train.len(), 10);
        assert!(val.is_empty());
    }
}
