//! Opening-tile selection.

use crate::game::Side;
use crate::hand::Hand;
use crate::tile::Tile;
use tracing::{debug, instrument};

/// The tile chosen to seed the chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Opening {
    /// The seed tile, already removed from its hand.
    pub tile: Tile,
    /// The hand the tile came from.
    pub side: Side,
}

/// Selects the opening tile and removes it from the hand that held it.
///
/// Prefers the double with the highest pip value across both hands; with
/// no double anywhere, falls back to the tile with the highest pip sum.
/// The computer hand is scanned before the human hand and the first
/// maximum wins ties, so selection is deterministic. Stock tiles are
/// never considered.
///
/// # Panics
///
/// Panics if both hands are empty.
#[instrument(skip(computer, human))]
pub fn select_opening(computer: &mut Hand, human: &mut Hand) -> Opening {
    assert!(
        !(computer.is_empty() && human.is_empty()),
        "opening search on two empty hands"
    );

    let candidates: Vec<(Side, usize, Tile)> = computer
        .tiles()
        .iter()
        .enumerate()
        .map(|(index, &tile)| (Side::Computer, index, tile))
        .chain(
            human
                .tiles()
                .iter()
                .enumerate()
                .map(|(index, &tile)| (Side::Human, index, tile)),
        )
        .collect();

    let best_double = candidates
        .iter()
        .filter(|(_, _, tile)| tile.is_double())
        .max_by_key(|(_, _, tile)| tile.first());
    let &(side, index, tile) = match best_double {
        Some(double) => double,
        None => candidates
            .iter()
            .reduce(|best, candidate| {
                if candidate.2.pip_sum() > best.2.pip_sum() {
                    candidate
                } else {
                    best
                }
            })
            .expect("at least one hand is non-empty"),
    };

    let removed = match side {
        Side::Computer => computer.remove(index),
        Side::Human => human.remove(index),
    };
    debug_assert_eq!(removed, tile);
    debug!(%tile, %side, "selected opening tile");
    Opening { tile, side }
}
