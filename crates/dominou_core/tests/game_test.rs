//! End-to-end tests for the game engine.

use dominou_core::invariants::{GameInvariants, InvariantSet};
use dominou_core::{
    ConfigError, DealConfig, Difficulty, DrawOutcome, End, Game, GameConfig, GameStatus, MoveError,
    Side, is_legal,
};

const PLY_LIMIT: usize = 500;

/// Advances the game one ply: the computer plays itself, the human is
/// scripted to try every placement and draw otherwise.
fn drive(game: &mut Game) {
    match game.to_move() {
        Side::Computer => {
            game.computer_turn().expect("game is ongoing");
        }
        Side::Human => {
            let hand_size = game.snapshot().human_hand().len();
            let played = (0..hand_size).find(|&index| {
                [End::Start, End::Finish]
                    .into_iter()
                    .any(|end| game.human_move(index, end).is_ok())
            });
            if played.is_none() {
                game.human_draw().expect("game is ongoing");
            }
        }
    }
}

fn play_out(game: &mut Game) -> GameStatus {
    for _ in 0..PLY_LIMIT {
        if game.status() != GameStatus::Ongoing {
            return game.status();
        }
        drive(game);
    }
    panic!("game did not terminate within {PLY_LIMIT} plies");
}

fn game_with_human_to_move() -> Game {
    (0..64)
        .map(|seed| Game::seeded(GameConfig::new(Difficulty::Medium), seed).expect("valid config"))
        .find(|game| game.to_move() == Side::Human)
        .expect("some seed deals the human the first turn")
}

fn illegal_placement(game: &Game) -> Option<(usize, End)> {
    let snapshot = game.snapshot();
    snapshot
        .human_hand()
        .iter()
        .enumerate()
        .find_map(|(index, &tile)| {
            [End::Start, End::Finish]
                .into_iter()
                .find(|&end| !is_legal(tile, snapshot.chain(), end))
                .map(|end| (index, end))
        })
}

#[test]
fn test_new_game_counts() {
    let game = Game::seeded(GameConfig::new(Difficulty::Medium), 1).expect("valid config");
    let snapshot = game.snapshot();
    assert_eq!(*snapshot.stock_count(), 14);
    assert_eq!(snapshot.chain().tiles().len(), 1);
    // One of the 14 dealt hand tiles seeded the chain.
    assert_eq!(
        snapshot.computer_hand_count() + snapshot.human_hand().len(),
        13
    );
    assert_eq!(*snapshot.status(), GameStatus::Ongoing);
}

#[test]
fn test_first_turn_goes_to_the_full_hand() {
    for seed in 0..16 {
        let game = Game::seeded(GameConfig::new(Difficulty::Medium), seed).expect("valid config");
        let snapshot = game.snapshot();
        let opener_was_computer = *snapshot.computer_hand_count() < snapshot.human_hand().len();
        let expected = if opener_was_computer {
            Side::Human
        } else {
            Side::Computer
        };
        assert_eq!(*snapshot.to_move(), expected);
        // The opener counts as the last mover until the first real move.
        assert_eq!(game.state().last_mover(), expected.opponent());
    }
}

#[test]
fn test_scripted_runs_reproduce_under_fixed_seed() {
    for seed in [3, 11, 29] {
        let config = GameConfig::new(Difficulty::Easy);
        let mut first = Game::seeded(config, seed).expect("valid config");
        let mut second = Game::seeded(config, seed).expect("valid config");
        assert_eq!(first.state(), second.state());
        for _ in 0..PLY_LIMIT {
            if first.status() != GameStatus::Ongoing {
                break;
            }
            drive(&mut first);
            drive(&mut second);
            assert_eq!(first.state(), second.state());
        }
        assert_eq!(first.status(), second.status());
        assert_ne!(first.status(), GameStatus::Ongoing);
    }
}

#[test]
fn test_games_terminate_with_invariants_intact() {
    for seed in 0..16 {
        for difficulty in [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard] {
            let mut game =
                Game::seeded(GameConfig::new(difficulty), seed).expect("valid config");
            for _ in 0..PLY_LIMIT {
                GameInvariants::check_all(game.state()).expect("invariants hold");
                if game.status() != GameStatus::Ongoing {
                    break;
                }
                drive(&mut game);
            }
            assert!(matches!(
                game.status(),
                GameStatus::HumanWin | GameStatus::ComputerWin | GameStatus::Draw
            ));
        }
    }
}

#[test]
fn test_illegal_placement_rejected_without_mutation() {
    let mut game = (0..64)
        .map(|seed| Game::seeded(GameConfig::new(Difficulty::Medium), seed).expect("valid config"))
        .find(|game| game.to_move() == Side::Human && illegal_placement(game).is_some())
        .expect("some seed gives the human an illegal option");
    let (index, end) = illegal_placement(&game).expect("checked above");
    let before = game.snapshot();
    let tile = before.human_hand()[index];
    assert_eq!(
        game.human_move(index, end),
        Err(MoveError::InvalidMove { tile, end })
    );
    assert_eq!(game.snapshot(), before);
}

#[test]
fn test_out_of_range_index_rejected() {
    let mut game = game_with_human_to_move();
    let before = game.snapshot();
    let len = before.human_hand().len();
    assert_eq!(
        game.human_move(len + 3, End::Start),
        Err(MoveError::IndexOutOfRange {
            index: len + 3,
            len
        })
    );
    assert_eq!(game.snapshot(), before);
}

#[test]
fn test_human_draw_moves_one_tile() {
    let mut game = game_with_human_to_move();
    let before = game.snapshot();
    match game.human_draw().expect("game is ongoing") {
        DrawOutcome::Drew(tile) => {
            let after = game.snapshot();
            assert_eq!(*after.stock_count(), *before.stock_count() - 1);
            assert_eq!(after.human_hand().len(), before.human_hand().len() + 1);
            assert_eq!(after.human_hand().last(), Some(&tile));
            assert_eq!(*after.to_move(), Side::Computer);
        }
        DrawOutcome::StockEmpty => panic!("fresh stock cannot be empty"),
    }
}

#[test]
fn test_draw_from_empty_stock_passes() {
    let config = GameConfig::with_deal(
        Difficulty::Easy,
        DealConfig::new(0, 14, 14).expect("sizes fit the universe"),
    );
    let mut game = (0..64)
        .map(|seed| Game::seeded(config, seed).expect("valid config"))
        .find(|game| game.to_move() == Side::Human && game.status() == GameStatus::Ongoing)
        .expect("some seed keeps the game open with the human to move");
    let before = game.snapshot();
    assert_eq!(game.human_draw(), Ok(DrawOutcome::StockEmpty));
    let after = game.snapshot();
    assert_eq!(after.human_hand(), before.human_hand());
    assert_eq!(*after.stock_count(), 0);
    assert_eq!(*after.to_move(), Side::Computer);
}

#[test]
fn test_turns_rejected_after_game_end() {
    let mut game = Game::seeded(GameConfig::new(Difficulty::Hard), 5).expect("valid config");
    play_out(&mut game);
    assert_eq!(game.human_move(0, End::Start), Err(MoveError::GameOver));
    assert_eq!(game.human_draw(), Err(MoveError::GameOver));
    assert_eq!(game.computer_turn(), Err(MoveError::GameOver));
}

#[test]
fn test_snapshot_serializes_and_hides_computer_hand() {
    let game = Game::seeded(GameConfig::new(Difficulty::Medium), 13).expect("valid config");
    let value = serde_json::to_value(game.snapshot()).expect("snapshot serializes");
    let object = value.as_object().expect("snapshot is a JSON object");
    assert!(object.contains_key("computer_hand_count"));
    assert!(!object.contains_key("computer_hand"));
    assert_eq!(
        object["human_hand"]
            .as_array()
            .expect("hand is an array")
            .len(),
        game.snapshot().human_hand().len()
    );
    assert!(object["chain"]["tiles"].as_array().is_some());
}

#[test]
fn test_deserialized_config_still_validated() {
    let deal: DealConfig =
        serde_json::from_str(r#"{"stock":25,"computer":7,"human":7}"#).expect("shape deserializes");
    let result = Game::seeded(GameConfig::with_deal(Difficulty::Easy, deal), 0);
    assert_eq!(result.err(), Some(ConfigError::OversizedDeal { requested: 39 }));
}
