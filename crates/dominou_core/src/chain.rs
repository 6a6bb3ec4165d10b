//! The chain of connected tiles on the table.

use crate::tile::Tile;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// An open end of the chain.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
pub enum End {
    /// The left extremity, exposed by the head tile's first pip.
    Start,
    /// The right extremity, exposed by the tail tile's second pip.
    Finish,
}

impl End {
    /// Label for this end (for display and logs).
    pub fn label(&self) -> &'static str {
        match self {
            End::Start => "start",
            End::Finish => "finish",
        }
    }
}

impl std::fmt::Display for End {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// An ordered sequence of oriented tiles with two open ends.
///
/// Non-empty from construction onward. Invariant: for any two adjacent
/// elements, the left element's second pip equals the right element's
/// first pip. The chain grows at either end and never shrinks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chain {
    tiles: Vec<Tile>,
}

impl Chain {
    /// Seeds a one-element chain.
    #[instrument]
    pub fn new(seed: Tile) -> Self {
        Self { tiles: vec![seed] }
    }

    /// The oriented tiles in chain order.
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// Pip exposed at `end`.
    pub fn open_pip(&self, end: End) -> u8 {
        match end {
            End::Start => self.tiles.first().expect("chain is never empty").first(),
            End::Finish => self.tiles.last().expect("chain is never empty").second(),
        }
    }

    /// Both open pips as `(start, finish)`.
    pub fn open_ends(&self) -> (u8, u8) {
        (self.open_pip(End::Start), self.open_pip(End::Finish))
    }

    /// Checks whether either pip of `tile` matches the pip exposed at
    /// `end`.
    pub fn can_attach(&self, tile: Tile, end: End) -> bool {
        tile.has(self.open_pip(end))
    }

    /// Attaches `tile` at `end`, flipping it when needed so the matching
    /// pip faces inward.
    ///
    /// # Panics
    ///
    /// Panics if the tile does not fit at `end`; callers check
    /// [`Chain::can_attach`] first.
    #[instrument(skip(self))]
    pub fn attach(&mut self, tile: Tile, end: End) {
        assert!(
            self.can_attach(tile, end),
            "tile {tile} does not fit the {end} end"
        );
        match end {
            End::Start => {
                let oriented = if tile.second() == self.open_pip(End::Start) {
                    tile
                } else {
                    tile.flipped()
                };
                self.tiles.insert(0, oriented);
            }
            End::Finish => {
                let oriented = if tile.first() == self.open_pip(End::Finish) {
                    tile
                } else {
                    tile.flipped()
                };
                self.tiles.push(oriented);
            }
        }
    }

    /// Number of pip positions across the whole chain equal to `pip`;
    /// doubles count twice.
    pub fn pip_occurrences(&self, pip: u8) -> usize {
        self.tiles
            .iter()
            .map(|tile| usize::from(tile.pip_count(pip)))
            .sum()
    }
}

impl std::fmt::Display for Chain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut first = true;
        for tile in &self.tiles {
            if !first {
                f.write_str(" ")?;
            }
            write!(f, "{tile}")?;
            first = false;
        }
        Ok(())
    }
}
