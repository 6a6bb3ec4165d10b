//! Pure game logic for dominou, a two-player domino chain game pitting
//! a human against a computer opponent of selectable skill.
//!
//! The crate owns tile generation and dealing, chain extension with
//! reorientation, the three-tier computer strategy, and win/block/draw
//! detection. Rendering and input parsing belong to the embedding
//! application: the engine accepts already-validated requests (a hand
//! index plus an end, or a draw signal) and returns [`Snapshot`] values
//! for display.
//!
//! # Example
//!
//! ```
//! use dominou_core::{Difficulty, End, Game, GameConfig, GameStatus, Side};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut game = Game::seeded(GameConfig::new(Difficulty::Hard), 42)?;
//!
//! while game.status() == GameStatus::Ongoing {
//!     match game.to_move() {
//!         Side::Computer => {
//!             game.computer_turn()?;
//!         }
//!         Side::Human => {
//!             // Stand-in for a real prompt: try every placement, then draw.
//!             let hand_size = game.snapshot().human_hand().len();
//!             let played = (0..hand_size).find(|&index| {
//!                 [End::Start, End::Finish]
//!                     .into_iter()
//!                     .any(|end| game.human_move(index, end).is_ok())
//!             });
//!             if played.is_none() {
//!                 game.human_draw()?;
//!             }
//!         }
//!     }
//! }
//! println!("{:?}", game.status());
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod chain;
mod game;
mod hand;
mod strategy;
mod tile;
mod tileset;

// Public module trees
pub mod invariants;
pub mod rules;

// Crate-level exports - chain
pub use chain::{Chain, End};

// Crate-level exports - game engine
pub use game::{
    DrawOutcome, Game, GameConfig, GameState, GameStatus, MoveError, Side, Snapshot, TurnOutcome,
};

// Crate-level exports - holdings
pub use hand::{Hand, Stock};

// Crate-level exports - invariants
pub use invariants::{
    ChainLinked, GameInvariants, Invariant, InvariantSet, InvariantViolation, TileConservation,
};

// Crate-level exports - rules
pub use rules::opening::{Opening, select_opening};
pub use rules::validate::{can_play_anywhere, has_legal_move, is_legal};

// Crate-level exports - strategy
pub use strategy::{Candidate, Difficulty, choose_move, legal_candidates};

// Crate-level exports - tiles and dealing
pub use tile::{PIP_VALUES, Tile, UNIVERSE_SIZE};
pub use tileset::{ConfigError, DealConfig, deal};
