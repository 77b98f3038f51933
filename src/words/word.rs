//! Words and the categories they are grouped in.

use serde::{Deserialize, Serialize};

/// A word to describe, tagged with its category and difficulty.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Word {
    /// Display text, treated as opaque.
    pub text: String,

    /// Id of the owning category.
    #[serde(default)]
    pub category: String,

    /// 1 = easy, 2 = medium, 3 = hard.
    #[serde(default = "default_difficulty")]
    pub difficulty: u8,
}

fn default_difficulty() -> u8 {
    1
}

impl Word {
    /// Create a new word.
    pub fn new(text: impl Into<String>, category: impl Into<String>, difficulty: u8) -> Self {
        Self {
            text: text.into(),
            category: category.into(),
            difficulty,
        }
    }
}

/// A named group of words players can choose to play with.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub emoji: String,
    #[serde(default)]
    pub words: Vec<Word>,
}

impl Category {
    /// Create an empty category.
    pub fn new(id: impl Into<String>, name: impl Into<String>, emoji: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            emoji: emoji.into(),
            words: Vec::new(),
        }
    }

    /// Add a word (builder pattern). The word is re-tagged with this category.
    #[must_use]
    pub fn with_word(mut self, text: impl Into<String>, difficulty: u8) -> Self {
        let word = Word::new(text, self.id.clone(), difficulty);
        self.words.push(word);
        self
    }

    #[must_use]
    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    /// Emoji followed by name, as shown in the category picker.
    #[must_use]
    pub fn display_name(&self) -> String {
        format!("{} {}", self.emoji, self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_builder() {
        let cat = Category::new("food", "Food", "🍕")
            .with_word("pizza", 1)
            .with_word("sushi", 2);

        assert_eq!(cat.word_count(), 2);
        assert_eq!(cat.words[1], Word::new("sushi", "food", 2));
        assert_eq!(cat.display_name(), "🍕 Food");
    }

    #[test]
    fn test_word_defaults_from_json() {
        let word: Word = serde_json::from_str(r#"{"text":"chess"}"#).unwrap();
        assert_eq!(word.difficulty, 1);
        assert!(word.category.is_empty());
    }
}
