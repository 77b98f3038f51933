//! Word supply.
//!
//! ## Key Types
//!
//! - [`Word`], [`Category`]: the word catalog
//! - [`WordSource`]: what the engine needs from a word supplier
//! - [`WordDeck`]: in-memory, seeded, endlessly cycling implementation
//!
//! Where the catalog comes from (bundled assets, user input) is up to the
//! caller; this module never touches the filesystem.

mod deck;
mod source;
mod word;

pub use deck::WordDeck;
pub use source::WordSource;
pub use word::{Category, Word};
