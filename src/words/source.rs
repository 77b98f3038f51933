//! The word-supply contract the engine depends on.

use rustc_hash::FxHashSet;

use super::word::Word;

/// Supplies words on demand.
///
/// ## Contract
///
/// - `prepare` loads and shuffles the pool for the selected categories.
/// - `next_word` advances an internal cursor. Once the pool is exhausted it
///   reshuffles and starts over, so a non-empty pool never runs dry.
/// - `skip_word` behaves exactly like `next_word`. Skipped words are neither
///   penalized nor removed.
/// - Both return `None` only when the selected categories hold no words.
/// - `reseed` restarts the shuffle stream; it takes effect on the next
///   `prepare`.
///
/// Every call consumes a word, so callers must draw at most once per
/// logical word transition.
pub trait WordSource {
    /// Load and shuffle the pool for the given category ids.
    fn prepare(&mut self, categories: &FxHashSet<String>);

    /// Next word, or `None` if the pool is empty.
    fn next_word(&mut self) -> Option<Word>;

    /// Skip to another word.
    fn skip_word(&mut self) -> Option<Word> {
        self.next_word()
    }

    /// Restart the shuffle from `seed`. Unshuffled sources ignore it.
    fn reseed(&mut self, _seed: u64) {}

    /// Drop the prepared pool and cursor.
    fn reset(&mut self);
}

impl<W: WordSource + ?Sized> WordSource for Box<W> {
    fn prepare(&mut self, categories: &FxHashSet<String>) {
        (**self).prepare(categories);
    }

    fn next_word(&mut self) -> Option<Word> {
        (**self).next_word()
    }

    fn skip_word(&mut self) -> Option<Word> {
        (**self).skip_word()
    }

    fn reseed(&mut self, seed: u64) {
        (**self).reseed(seed);
    }

    fn reset(&mut self) {
        (**self).reset();
    }
}
