//! Computer move selection at three difficulty tiers.
//!
//! All tiers share one candidate enumeration; they differ only in how a
//! candidate is picked from the list. Hand mutation is the caller's
//! responsibility.

use crate::chain::{Chain, End};
use crate::hand::Hand;
use crate::rules::validate;
use crate::tile::{PIP_VALUES, Tile};
use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use tracing::{debug, instrument};

/// Computer skill tier.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    /// Uniform random pick among the legal placements.
    Easy,
    /// Heaviest tile first: greatest pip sum wins.
    Medium,
    /// Plays tiles built from locally abundant pips, keeping the rest of
    /// the hand flexible.
    Hard,
}

impl Difficulty {
    /// Label for this tier (for display and logs).
    pub fn label(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A legal placement: a hand slot, the tile in it, and the target end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Candidate {
    /// Index of the tile in the acting hand.
    pub index: usize,
    /// The tile occupying that slot.
    pub tile: Tile,
    /// The end the tile would attach to.
    pub end: End,
}

/// Enumerates every legal placement for `hand` against `chain`.
///
/// Start-end entries come before finish-end entries, hand order within
/// each group; a tile legal at both ends yields two entries. Selection
/// tie-breaks resolve to the first maximum, so this order is normative.
#[instrument(skip(hand, chain))]
pub fn legal_candidates(hand: &Hand, chain: &Chain) -> Vec<Candidate> {
    let mut candidates = Vec::new();
    for end in End::iter() {
        for (index, &tile) in hand.tiles().iter().enumerate() {
            if validate::is_legal(tile, chain, end) {
                candidates.push(Candidate { index, tile, end });
            }
        }
    }
    candidates
}

/// Picks a placement for the computer, or `None` when no tile fits
/// either end.
#[instrument(skip(hand, chain, rng))]
pub fn choose_move(
    hand: &Hand,
    chain: &Chain,
    difficulty: Difficulty,
    rng: &mut impl Rng,
) -> Option<Candidate> {
    let candidates = legal_candidates(hand, chain);
    if candidates.is_empty() {
        debug!("no legal placement in hand");
        return None;
    }

    let chosen = match difficulty {
        Difficulty::Easy => *candidates
            .choose(rng)
            .expect("candidate list is non-empty"),
        Difficulty::Medium => {
            first_max_by_key(&candidates, |candidate| candidate.tile.pip_sum())
        }
        Difficulty::Hard => {
            let counts = pip_counts(chain, hand);
            first_max_by_key(&candidates, |candidate| {
                counts[usize::from(candidate.tile.first())]
                    + counts[usize::from(candidate.tile.second())]
            })
        }
    };
    debug!(tile = %chosen.tile, end = %chosen.end, %difficulty, "computer chose placement");
    Some(chosen)
}

/// Occurrence count of each pip value across the chain and the whole
/// hand; doubles contribute twice to their value.
fn pip_counts(chain: &Chain, hand: &Hand) -> [u32; PIP_VALUES as usize] {
    let mut counts = [0u32; PIP_VALUES as usize];
    for tile in chain.tiles().iter().chain(hand.tiles()) {
        counts[usize::from(tile.first())] += 1;
        counts[usize::from(tile.second())] += 1;
    }
    counts
}

/// First maximum under `key`, preserving candidate-list order on ties.
fn first_max_by_key<T: Copy, K: Ord>(items: &[T], key: impl Fn(&T) -> K) -> T {
    *items
        .iter()
        .reduce(|best, item| if key(item) > key(best) { item } else { best })
        .expect("items is non-empty")
}
