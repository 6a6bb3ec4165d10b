//! Move legality predicates.
//!
//! Exposed separately from [`Chain`] so candidate enumeration and input
//! validation never need to mutate or copy the chain.

use crate::chain::{Chain, End};
use crate::hand::Hand;
use crate::tile::Tile;
use strum::IntoEnumIterator;
use tracing::instrument;

/// Checks whether `tile` may attach to `chain` at `end`.
#[instrument(skip(chain))]
pub fn is_legal(tile: Tile, chain: &Chain, end: End) -> bool {
    chain.can_attach(tile, end)
}

/// Checks whether `tile` may attach at either end.
pub fn can_play_anywhere(tile: Tile, chain: &Chain) -> bool {
    End::iter().any(|end| chain.can_attach(tile, end))
}

/// Checks whether any tile in `hand` has a legal placement.
#[instrument(skip(hand, chain))]
pub fn has_legal_move(hand: &Hand, chain: &Chain) -> bool {
    hand.tiles()
        .iter()
        .any(|&tile| can_play_anywhere(tile, chain))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_legal_at_matching_end_only() {
        // Chain [2|4]: start exposes 2, finish exposes 4.
        let chain = Chain::new(Tile::new(2, 4));
        assert!(is_legal(Tile::new(2, 6), &chain, End::Start));
        assert!(!is_legal(Tile::new(2, 6), &chain, End::Finish));
        assert!(is_legal(Tile::new(4, 1), &chain, End::Finish));
        assert!(!is_legal(Tile::new(4, 1), &chain, End::Start));
    }

    #[test]
    fn test_either_pip_matches() {
        let chain = Chain::new(Tile::new(3, 3));
        assert!(is_legal(Tile::new(0, 3), &chain, End::Start));
        assert!(is_legal(Tile::new(3, 0), &chain, End::Start));
    }

    #[test]
    fn test_can_play_anywhere() {
        let chain = Chain::new(Tile::new(2, 4));
        assert!(can_play_anywhere(Tile::new(4, 4), &chain));
        assert!(!can_play_anywhere(Tile::new(5, 6), &chain));
    }

    #[test]
    fn test_has_legal_move() {
        let chain = Chain::new(Tile::new(2, 4));
        let playable = Hand::from(vec![Tile::new(5, 6), Tile::new(0, 2)]);
        let stuck = Hand::from(vec![Tile::new(5, 6), Tile::new(1, 3)]);
        assert!(has_legal_move(&playable, &chain));
        assert!(!has_legal_move(&stuck, &chain));
    }
}
