//! Turn engine for the bomb word game.
//!
//! `TurnEngine` owns the teams and decides:
//! - Whose turn it is and who comes next
//! - How a bomb explosion or an empty budget affects a team
//! - When the game is over and who won
//!
//! It never reads a clock. Timing policy lives in `session`, which feeds
//! measured durations into the engine and checks its round/turn tokens
//! before applying any timer fire.
//!
//! ## Example Usage
//!
//! ```
//! use word_bomb::core::GameMode;
//! use word_bomb::engine::{RoundPhase, TurnEngine};
//! use word_bomb::words::WordDeck;
//!
//! let mut engine = TurnEngine::new(WordDeck::new(Vec::new(), 7));
//! engine.initialize_game(6, GameMode::Quick).unwrap();
//! engine.set_player_names(["Ana", "Ben", "Cy", "Di", "Ed", "Flo"]).unwrap();
//!
//! assert_eq!(engine.circular_player_order(), ["Ana", "Ben", "Cy", "Di", "Ed", "Flo"]);
//! assert_eq!(engine.current_player_name(), "Ana");
//! assert_eq!(engine.next_player_name(), "Ben");
//!
//! // An explosion charges the penalty but keeps the turn
//! engine.start_turn();
//! let explosion = engine.on_bomb_exploded(25_000).unwrap();
//! assert_eq!(explosion.remaining, 75_000);
//! assert_eq!(engine.current_player_name(), "Ana");
//! assert_eq!(engine.phase(), RoundPhase::AwaitingTurnStart);
//! ```

mod phase;
mod result;
mod turn;

pub use phase::RoundPhase;
pub use result::GameResult;
pub use turn::{EngineSnapshot, Explosion, TurnEngine, TurnStart};
