//! Tile holdings: per-side hands and the boneyard.

use crate::tile::Tile;
use serde::{Deserialize, Serialize};

/// Tiles held by one side, tracked as distinct indexed slots.
///
/// Removal is always by explicit index, never by value-equality search,
/// so equal-valued tiles (possible under other rule variants) can never
/// be confused.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hand {
    tiles: Vec<Tile>,
}

impl Hand {
    /// Creates an empty hand.
    pub fn new() -> Self {
        Self { tiles: Vec::new() }
    }

    /// Number of tiles currently held.
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Checks whether the hand holds no tiles.
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Tile at `index`, if the slot exists.
    pub fn get(&self, index: usize) -> Option<Tile> {
        self.tiles.get(index).copied()
    }

    /// Adds a tile to the end of the hand.
    pub fn push(&mut self, tile: Tile) {
        self.tiles.push(tile);
    }

    /// Removes and returns the tile at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is outside the hand; callers validate indices
    /// before removal.
    pub fn remove(&mut self, index: usize) -> Tile {
        self.tiles.remove(index)
    }

    /// All tiles in slot order.
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// Sum of every pip in the hand.
    pub fn pip_total(&self) -> u32 {
        self.tiles.iter().map(|tile| u32::from(tile.pip_sum())).sum()
    }
}

impl From<Vec<Tile>> for Hand {
    fn from(tiles: Vec<Tile>) -> Self {
        Self { tiles }
    }
}

/// The undealt boneyard. Tiles only ever leave it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stock {
    tiles: Vec<Tile>,
}

impl Stock {
    /// Number of tiles remaining.
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Checks whether the stock is exhausted.
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Removes and returns the top tile, or `None` when exhausted.
    pub fn draw(&mut self) -> Option<Tile> {
        self.tiles.pop()
    }

    /// Remaining tiles, for conservation checks.
    pub(crate) fn tiles(&self) -> &[Tile] {
        &self.tiles
    }
}

impl From<Vec<Tile>> for Stock {
    fn from(tiles: Vec<Tile>) -> Self {
        Self { tiles }
    }
}
