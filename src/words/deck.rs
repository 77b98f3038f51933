//! In-memory word source backed by a category catalog.
//!
//! ## Lifecycle
//!
//! 1. Build from a catalog (`new`) or from JSON (`from_json`)
//! 2. `prepare` with the selected category ids
//! 3. Draw with `next_word` / `skip_word`; the pool reshuffles on exhaustion
//! 4. `reset` drops the pool and rewinds the shuffle, keeping the catalog

use rustc_hash::FxHashSet;
use tracing::{debug, warn};

use super::source::WordSource;
use super::word::{Category, Word};
use crate::core::{GameRng, WordListError};

/// A shuffled, endlessly cycling deck of words.
#[derive(Clone, Debug)]
pub struct WordDeck {
    catalog: Vec<Category>,
    pool: Vec<Word>,
    cursor: usize,
    rng: GameRng,
}

impl WordDeck {
    /// Create a deck over a category catalog.
    #[must_use]
    pub fn new(catalog: Vec<Category>, seed: u64) -> Self {
        Self {
            catalog,
            pool: Vec::new(),
            cursor: 0,
            rng: GameRng::new(seed),
        }
    }

    /// Parse a JSON array of categories.
    ///
    /// ```
    /// use word_bomb::words::WordDeck;
    ///
    /// let deck = WordDeck::from_json(
    ///     r#"[{"id":"music","name":"Music","emoji":"🎵","words":[{"text":"piano"}]}]"#,
    ///     1,
    /// ).unwrap();
    /// assert_eq!(deck.categories()[0].word_count(), 1);
    /// ```
    pub fn from_json(json: &str, seed: u64) -> Result<Self, WordListError> {
        let catalog: Vec<Category> = serde_json::from_str(json)?;
        Ok(Self::new(catalog, seed))
    }

    /// All known categories.
    #[must_use]
    pub fn categories(&self) -> &[Category] {
        &self.catalog
    }

    /// Size of the prepared pool.
    #[must_use]
    pub fn pool_len(&self) -> usize {
        self.pool.len()
    }

    /// Words left before the next reshuffle.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.pool.len().saturating_sub(self.cursor)
    }

    /// Add a user word (difficulty 1) to an existing category.
    ///
    /// Returns false if the category does not exist. Takes effect on the
    /// next `prepare`.
    pub fn add_custom_word(&mut self, text: impl Into<String>, category_id: &str) -> bool {
        match self.catalog.iter_mut().find(|c| c.id == category_id) {
            Some(category) => {
                category.words.push(Word::new(text, category_id, 1));
                true
            }
            None => false,
        }
    }
}

impl WordSource for WordDeck {
    fn prepare(&mut self, categories: &FxHashSet<String>) {
        self.pool = self
            .catalog
            .iter()
            .filter(|c| categories.contains(&c.id))
            .flat_map(|c| c.words.iter().cloned())
            .collect();
        self.cursor = 0;
        self.rng.shuffle(&mut self.pool);

        if self.pool.is_empty() {
            warn!(selected = categories.len(), "selected categories hold no words");
        } else {
            debug!(words = self.pool.len(), "word pool prepared");
        }
    }

    fn next_word(&mut self) -> Option<Word> {
        if self.pool.is_empty() {
            return None;
        }
        if self.cursor >= self.pool.len() {
            debug!(words = self.pool.len(), "word pool exhausted, reshuffling");
            self.cursor = 0;
            self.rng.shuffle(&mut self.pool);
        }
        let word = self.pool[self.cursor].clone();
        self.cursor += 1;
        Some(word)
    }

    fn reseed(&mut self, seed: u64) {
        debug!(seed, "word shuffle reseeded");
        self.rng = GameRng::new(seed);
    }

    fn reset(&mut self) {
        self.pool.clear();
        self.cursor = 0;
        self.rng.rewind();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Vec<Category> {
        vec![
            Category::new("food", "Food", "🍕")
                .with_word("pizza", 1)
                .with_word("kebab", 1)
                .with_word("sushi", 2),
            Category::new("sports", "Sports", "⚽")
                .with_word("tennis", 1)
                .with_word("boxing", 1),
            Category::new("empty", "Nothing", ""),
        ]
    }

    fn select(ids: &[&str]) -> FxHashSet<String> {
        ids.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_prepare_selects_categories() {
        let mut deck = WordDeck::new(catalog(), 1);
        deck.prepare(&select(&["food"]));

        assert_eq!(deck.pool_len(), 3);
        for _ in 0..3 {
            assert_eq!(deck.next_word().unwrap().category, "food");
        }
    }

    #[test]
    fn test_cycles_forever() {
        let mut deck = WordDeck::new(catalog(), 1);
        deck.prepare(&select(&["sports"]));

        let mut seen = Vec::new();
        for _ in 0..10 {
            seen.push(deck.next_word().unwrap().text);
        }
        assert_eq!(seen.len(), 10);
        // Each lap of two covers both words
        for lap in seen.chunks(2) {
            let mut lap = lap.to_vec();
            lap.sort();
            assert_eq!(lap, vec!["boxing".to_string(), "tennis".to_string()]);
        }
    }

    #[test]
    fn test_skip_consumes_like_next() {
        let mut deck = WordDeck::new(catalog(), 9);
        deck.prepare(&select(&["food"]));

        assert_eq!(deck.remaining(), 3);
        deck.skip_word();
        assert_eq!(deck.remaining(), 2);
        deck.next_word();
        assert_eq!(deck.remaining(), 1);
    }

    #[test]
    fn test_empty_selection_yields_none() {
        let mut deck = WordDeck::new(catalog(), 1);
        deck.prepare(&select(&["empty", "missing"]));

        assert!(deck.next_word().is_none());
        assert!(deck.skip_word().is_none());
    }

    #[test]
    fn test_same_seed_same_order() {
        let mut a = WordDeck::new(catalog(), 5);
        let mut b = WordDeck::new(catalog(), 5);
        a.prepare(&select(&["food", "sports"]));
        b.prepare(&select(&["food", "sports"]));

        for _ in 0..12 {
            assert_eq!(a.next_word(), b.next_word());
        }
    }

    #[test]
    fn test_reseed_matches_fresh_deck() {
        let mut reseeded = WordDeck::new(catalog(), 1);
        reseeded.reseed(77);
        let mut fresh = WordDeck::new(catalog(), 77);
        reseeded.prepare(&select(&["food", "sports"]));
        fresh.prepare(&select(&["food", "sports"]));

        for _ in 0..12 {
            assert_eq!(reseeded.next_word(), fresh.next_word());
        }
    }

    #[test]
    fn test_reset_keeps_catalog() {
        let mut deck = WordDeck::new(catalog(), 1);
        deck.prepare(&select(&["food"]));
        deck.next_word();

        deck.reset();
        assert_eq!(deck.pool_len(), 0);
        assert!(deck.next_word().is_none());
        assert_eq!(deck.categories().len(), 3);
    }

    #[test]
    fn test_reset_replays_order() {
        let mut deck = WordDeck::new(catalog(), 3);
        deck.prepare(&select(&["food", "sports"]));
        let first: Vec<_> = (0..5).filter_map(|_| deck.next_word()).collect();

        deck.reset();
        deck.prepare(&select(&["food", "sports"]));
        let second: Vec<_> = (0..5).filter_map(|_| deck.next_word()).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_add_custom_word() {
        let mut deck = WordDeck::new(catalog(), 1);
        assert!(deck.add_custom_word("yalda", "empty"));
        assert!(!deck.add_custom_word("ghost", "nope"));

        deck.prepare(&select(&["empty"]));
        let word = deck.next_word().unwrap();
        assert_eq!(word, Word::new("yalda", "empty", 1));
    }

    #[test]
    fn test_from_json_rejects_garbage() {
        assert!(WordDeck::from_json("{not json", 1).is_err());
    }
}
