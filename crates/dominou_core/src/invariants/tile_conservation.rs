//! Tile conservation invariant.

use super::Invariant;
use crate::game::GameState;
use crate::tile::{Tile, UNIVERSE_SIZE};

/// The stock, both hands, and the chain together hold the 28-tile
/// universe, each tile exactly once.
///
/// Chain tiles may be flipped, so the comparison runs over canonical
/// pip pairs.
#[derive(Debug, Clone, Copy)]
pub struct TileConservation;

fn canonical(tile: &Tile) -> (u8, u8) {
    let (a, b) = (tile.first(), tile.second());
    (a.min(b), a.max(b))
}

impl Invariant<GameState> for TileConservation {
    fn holds(state: &GameState) -> bool {
        let mut held: Vec<(u8, u8)> = Vec::with_capacity(UNIVERSE_SIZE);
        held.extend(state.stock().tiles().iter().map(canonical));
        held.extend(state.human_hand().tiles().iter().map(canonical));
        held.extend(state.computer_hand().tiles().iter().map(canonical));
        held.extend(state.chain().tiles().iter().map(canonical));
        held.sort_unstable();

        let universe: Vec<(u8, u8)> = Tile::universe().iter().map(canonical).collect();
        held == universe
    }

    fn description() -> &'static str {
        "stock, hands, and chain hold the 28-tile universe exactly once"
    }
}
