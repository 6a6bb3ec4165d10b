//! Win, loss, and blocked-draw evaluation.

use crate::game::{GameState, GameStatus, Side};
use crate::rules::validate;
use tracing::instrument;

/// Occurrences the closing pip must reach across the chain for a
/// closed-chain finish.
const CLOSING_OCCURRENCES: usize = 8;

/// Evaluates the game status after a completed turn.
///
/// Checks run in order: emptied hands, the closed-chain finish, then the
/// blocked draw. The closed-chain finish fires when both open ends show
/// the same pip and that pip appears exactly eight times across the
/// chain; it credits the last mover and can fire with tiles still in
/// hand.
#[instrument(skip(state))]
pub fn evaluate(state: &GameState) -> GameStatus {
    if state.human_hand().is_empty() {
        return GameStatus::HumanWin;
    }
    if state.computer_hand().is_empty() {
        return GameStatus::ComputerWin;
    }

    let (start, finish) = state.chain().open_ends();
    if start == finish && state.chain().pip_occurrences(start) == CLOSING_OCCURRENCES {
        return match state.last_mover() {
            Side::Human => GameStatus::HumanWin,
            Side::Computer => GameStatus::ComputerWin,
        };
    }

    if state.stock().is_empty()
        && !validate::has_legal_move(state.human_hand(), state.chain())
        && !validate::has_legal_move(state.computer_hand(), state.chain())
    {
        return GameStatus::Draw;
    }

    GameStatus::Ongoing
}
