//! Game aggregate and per-turn engine.
//!
//! All mutable game state lives in one owned [`GameState`]; there are no
//! free-standing globals. [`Game`] wraps the state together with the
//! random source and the configuration, and exposes one method per
//! discrete decision.

use crate::chain::{Chain, End};
use crate::hand::{Hand, Stock};
use crate::rules::{opening, outcome, validate};
use crate::strategy::{self, Difficulty};
use crate::tile::Tile;
use crate::tileset::{self, ConfigError, DealConfig};
use derive_getters::Getters;
use derive_more::{Display, Error};
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// A side of the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    /// The human player.
    Human,
    /// The computer opponent.
    Computer,
}

impl Side {
    /// Returns the opposing side.
    pub fn opponent(self) -> Self {
        match self {
            Side::Human => Side::Computer,
            Side::Computer => Side::Human,
        }
    }

    /// Label for this side (for display and logs).
    pub fn label(&self) -> &'static str {
        match self {
            Side::Human => "human",
            Side::Computer => "computer",
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Current status of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameStatus {
    /// The game continues.
    Ongoing,
    /// The human won.
    HumanWin,
    /// The computer won.
    ComputerWin,
    /// Neither side can move and the stock is exhausted.
    Draw,
}

/// Full configuration for one game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameConfig {
    /// Computer skill tier.
    difficulty: Difficulty,
    /// Opening deal sizes.
    #[serde(default)]
    deal: DealConfig,
}

impl GameConfig {
    /// Configuration with the default full deal.
    pub fn new(difficulty: Difficulty) -> Self {
        Self {
            difficulty,
            deal: DealConfig::default(),
        }
    }

    /// Configuration with custom deal sizes.
    pub fn with_deal(difficulty: Difficulty, deal: DealConfig) -> Self {
        Self { difficulty, deal }
    }
}

/// Rejection of a play-time request; state is left untouched so the
/// caller can re-prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum MoveError {
    /// The tile cannot attach at the requested end.
    #[display("tile {tile} does not fit the {end} end")]
    InvalidMove {
        /// The tile that was requested.
        tile: Tile,
        /// The end it was aimed at.
        end: End,
    },
    /// The hand index names no tile.
    #[display("hand index {index} out of range for {len} tiles")]
    IndexOutOfRange {
        /// The requested index.
        index: usize,
        /// Current hand size.
        len: usize,
    },
    /// The game has already ended.
    #[display("game is already over")]
    GameOver,
}

/// Result of a human draw request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DrawOutcome {
    /// One tile moved from the stock into the hand.
    Drew(Tile),
    /// The stock is exhausted; the turn passes with no other change.
    StockEmpty,
}

/// Result of a computer turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TurnOutcome {
    /// A tile was attached to the chain.
    Played {
        /// The tile as it sat in the hand.
        tile: Tile,
        /// The end it attached to.
        end: End,
    },
    /// No placement existed; one tile was drawn from the stock.
    Drew,
    /// No placement existed and the stock is empty.
    Passed,
}

/// Complete mutable state of one game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub(crate) chain: Chain,
    pub(crate) human_hand: Hand,
    pub(crate) computer_hand: Hand,
    pub(crate) stock: Stock,
    pub(crate) to_move: Side,
    pub(crate) last_mover: Side,
    pub(crate) status: GameStatus,
}

impl GameState {
    /// The chain in play.
    pub fn chain(&self) -> &Chain {
        &self.chain
    }

    /// The human hand.
    pub fn human_hand(&self) -> &Hand {
        &self.human_hand
    }

    /// The computer hand.
    pub fn computer_hand(&self) -> &Hand {
        &self.computer_hand
    }

    /// The boneyard.
    pub fn stock(&self) -> &Stock {
        &self.stock
    }

    /// Side expected to act next.
    pub fn to_move(&self) -> Side {
        self.to_move
    }

    /// Side that placed the most recent tile (the opener until the
    /// first real move).
    pub fn last_mover(&self) -> Side {
        self.last_mover
    }

    /// Status as of the last completed turn.
    pub fn status(&self) -> GameStatus {
        self.status
    }
}

/// Renderable view of the game.
///
/// This is the only surface meant for display code: the computer hand
/// appears as a count, never its contents.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize)]
pub struct Snapshot {
    /// Tiles left in the boneyard.
    stock_count: usize,
    /// Tiles left in the computer hand.
    computer_hand_count: usize,
    /// The full human hand, in slot order.
    human_hand: Vec<Tile>,
    /// The chain in play, oriented.
    chain: Chain,
    /// Side to act next.
    to_move: Side,
    /// Status as of the last completed turn.
    status: GameStatus,
}

/// One human-versus-computer game.
///
/// Owns the random source so that dealing and the easy strategy tier
/// reproduce exactly under a fixed seed.
#[derive(Debug, Clone)]
pub struct Game {
    config: GameConfig,
    state: GameState,
    rng: StdRng,
}

impl Game {
    /// Starts a game seeded from system entropy.
    #[instrument]
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        Self::with_rng(config, StdRng::from_entropy())
    }

    /// Starts a reproducible game from a fixed seed.
    #[instrument]
    pub fn seeded(config: GameConfig, seed: u64) -> Result<Self, ConfigError> {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }

    #[instrument(skip(rng))]
    fn with_rng(config: GameConfig, mut rng: StdRng) -> Result<Self, ConfigError> {
        config.deal().validate()?;
        let (stock, mut computer_hand, mut human_hand) = tileset::deal(&mut rng, config.deal());
        let opening = opening::select_opening(&mut computer_hand, &mut human_hand);
        let chain = Chain::new(opening.tile);

        // The side still holding its full hand opens play.
        let to_move = if human_hand.len() > computer_hand.len() {
            Side::Human
        } else {
            Side::Computer
        };

        let mut state = GameState {
            chain,
            human_hand,
            computer_hand,
            stock,
            to_move,
            last_mover: opening.side,
            status: GameStatus::Ongoing,
        };
        state.status = outcome::evaluate(&state);
        info!(
            difficulty = %config.difficulty(),
            opening = %opening.tile,
            first = %to_move,
            "game started"
        );
        Ok(Self { config, state, rng })
    }

    /// Applies the human's placement request.
    ///
    /// Rejections leave the state untouched so the caller can re-prompt.
    /// The engine does not police turn order; callers alternate sides
    /// per [`Game::to_move`].
    #[instrument(skip(self))]
    pub fn human_move(&mut self, index: usize, end: End) -> Result<(), MoveError> {
        self.ensure_ongoing()?;
        let len = self.state.human_hand.len();
        let Some(tile) = self.state.human_hand.get(index) else {
            warn!(index, len, "rejected out-of-range hand index");
            return Err(MoveError::IndexOutOfRange { index, len });
        };
        if !validate::is_legal(tile, &self.state.chain, end) {
            debug!(%tile, %end, "rejected placement");
            return Err(MoveError::InvalidMove { tile, end });
        }

        self.state.chain.attach(tile, end);
        self.state.human_hand.remove(index);
        self.finish_turn(Side::Human, true);
        Ok(())
    }

    /// Draws one tile for the human; the turn ends either way.
    #[instrument(skip(self))]
    pub fn human_draw(&mut self) -> Result<DrawOutcome, MoveError> {
        self.ensure_ongoing()?;
        let drawn = match self.state.stock.draw() {
            Some(tile) => {
                self.state.human_hand.push(tile);
                DrawOutcome::Drew(tile)
            }
            None => {
                debug!("draw requested from an empty stock");
                DrawOutcome::StockEmpty
            }
        };
        self.finish_turn(Side::Human, false);
        Ok(drawn)
    }

    /// Runs one computer turn at the configured difficulty: play a tile
    /// if any placement exists, otherwise draw once, otherwise pass.
    #[instrument(skip(self))]
    pub fn computer_turn(&mut self) -> Result<TurnOutcome, MoveError> {
        self.ensure_ongoing()?;
        let choice = strategy::choose_move(
            &self.state.computer_hand,
            &self.state.chain,
            *self.config.difficulty(),
            &mut self.rng,
        );
        let turn = match choice {
            Some(candidate) => {
                self.state.chain.attach(candidate.tile, candidate.end);
                self.state.computer_hand.remove(candidate.index);
                TurnOutcome::Played {
                    tile: candidate.tile,
                    end: candidate.end,
                }
            }
            None => match self.state.stock.draw() {
                Some(tile) => {
                    self.state.computer_hand.push(tile);
                    TurnOutcome::Drew
                }
                None => TurnOutcome::Passed,
            },
        };
        self.finish_turn(Side::Computer, matches!(turn, TurnOutcome::Played { .. }));
        Ok(turn)
    }

    /// Status as of the last completed turn.
    pub fn status(&self) -> GameStatus {
        self.state.status
    }

    /// Side expected to act next.
    pub fn to_move(&self) -> Side {
        self.state.to_move
    }

    /// The full game state, computer hand included.
    ///
    /// Meant for trusted embedders (invariant checks, persistence by the
    /// surrounding application); display code uses [`Game::snapshot`].
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// The active configuration.
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Renderable view of the game.
    #[instrument(skip(self))]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            stock_count: self.state.stock.len(),
            computer_hand_count: self.state.computer_hand.len(),
            human_hand: self.state.human_hand.tiles().to_vec(),
            chain: self.state.chain.clone(),
            to_move: self.state.to_move,
            status: self.state.status,
        }
    }

    fn ensure_ongoing(&self) -> Result<(), MoveError> {
        if self.state.status != GameStatus::Ongoing {
            warn!(status = ?self.state.status, "turn requested after game end");
            return Err(MoveError::GameOver);
        }
        Ok(())
    }

    /// Records the mover, passes the turn, and re-evaluates the outcome.
    fn finish_turn(&mut self, side: Side, played: bool) {
        if played {
            self.state.last_mover = side;
        }
        self.state.to_move = side.opponent();
        self.state.status = outcome::evaluate(&self.state);
        debug!(
            status = ?self.state.status,
            to_move = %self.state.to_move,
            "turn finished"
        );
    }
}
