//! Chain linkage invariant.

use super::Invariant;
use crate::game::GameState;

/// Every adjacent pair of chain tiles shares the facing pip.
#[derive(Debug, Clone, Copy)]
pub struct ChainLinked;

impl Invariant<GameState> for ChainLinked {
    fn holds(state: &GameState) -> bool {
        state
            .chain()
            .tiles()
            .windows(2)
            .all(|pair| pair[0].second() == pair[1].first())
    }

    fn description() -> &'static str {
        "adjacent chain tiles share the facing pip"
    }
}
