//! Tests verifying the AI strategies.
//!
//! Perfect play in tic-tac-toe means never losing against any opponent.
//! The optimal strategy is checked exhaustively against every possible
//! opponent move sequence on a non-evicting board.

use infinite_tictactoe::{
    Board, BoardEngine, Mark, MoveSelector, Outcome, SelectError, Square,
    Strategy as AiStrategy, Variant, best_move, medium_move, random_move,
};
use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Plays every opponent reply against the optimal AI; returns games finished.
fn explore(engine: &BoardEngine, to_move: Mark, ai: Mark) -> u32 {
    let outcome = engine.check_outcome();
    if outcome.is_over() {
        assert_ne!(
            outcome.winner(),
            Some(ai.opponent()),
            "AI ({ai}) lost:\n{}",
            engine.board().display()
        );
        return 1;
    }

    if to_move == ai {
        let index = best_move(&engine.playable_board(), ai, ai.opponent()).unwrap();
        let mut next = engine.clone();
        next.apply_move(index, ai).unwrap();
        explore(&next, to_move.opponent(), ai)
    } else {
        engine
            .legal_moves()
            .into_iter()
            .map(|index| {
                let mut next = engine.clone();
                next.apply_move(index, to_move).unwrap();
                explore(&next, to_move.opponent(), ai)
            })
            .sum()
    }
}

#[test]
fn test_optimal_never_loses_as_second_mover() {
    let engine = BoardEngine::with_variant(Variant::Classic);
    let games = explore(&engine, Mark::X, Mark::O);
    assert!(games > 0);
}

#[test]
fn test_optimal_never_loses_as_first_mover() {
    let engine = BoardEngine::with_variant(Variant::Classic);
    let games = explore(&engine, Mark::X, Mark::X);
    assert!(games > 0);
}

#[test]
fn test_optimal_self_play_draws() {
    let mut engine = BoardEngine::with_variant(Variant::Classic);
    let mut to_move = Mark::X;
    while !engine.check_outcome().is_over() {
        let index = best_move(engine.board(), to_move, to_move.opponent()).unwrap();
        engine.apply_move(index, to_move).unwrap();
        to_move = to_move.opponent();
    }
    assert_eq!(engine.check_outcome(), Outcome::Draw);
}

#[test]
fn test_optimal_never_loses_to_heuristic_or_random() {
    for seed in 0..20 {
        for opponent_strategy in [AiStrategy::Heuristic, AiStrategy::Random] {
            let mut opponent = opponent_strategy.selector(Some(seed));
            let mut optimal = AiStrategy::Optimal.selector(None);
            let mut engine = BoardEngine::with_variant(Variant::Classic);
            let mut to_move = Mark::X;

            while !engine.check_outcome().is_over() {
                let selector = if to_move == Mark::O {
                    &mut optimal
                } else {
                    &mut opponent
                };
                let index = selector
                    .select_move(engine.board(), to_move, to_move.opponent())
                    .unwrap();
                engine.apply_move(index, to_move).unwrap();
                to_move = to_move.opponent();
            }

            assert_ne!(
                engine.check_outcome().winner(),
                Some(Mark::X),
                "optimal O lost to {opponent_strategy} with seed {seed}"
            );
        }
    }
}

#[test]
fn test_infinite_play_runs_past_a_full_board() {
    for seed in 0..10 {
        let mut x = AiStrategy::Random.selector(Some(seed));
        let mut o = AiStrategy::Heuristic.selector(Some(seed + 100));
        let mut engine = BoardEngine::new();
        let mut to_move = Mark::X;
        let mut plies = 0;

        while plies < 40 {
            match engine.check_outcome() {
                Outcome::Win { .. } => break,
                Outcome::Draw => panic!("infinite game drawn after {plies} plies (seed {seed})"),
                Outcome::InProgress => {}
            }
            let selector = if to_move == Mark::X { &mut x } else { &mut o };
            let index = selector
                .select_move(&engine.playable_board(), to_move, to_move.opponent())
                .unwrap();
            engine.apply_move(index, to_move).unwrap();
            assert!(engine.check_invariants().is_ok());
            to_move = to_move.opponent();
            plies += 1;
        }

        if engine.check_outcome().winner().is_none() {
            assert_eq!(plies, 40, "seed {seed} stopped early without a winner");
            assert_eq!(engine.moves_made(), 40);
            assert_eq!(engine.board().occupied_count(), 9);
        }
    }
}

#[test]
fn test_medium_move_takes_win_over_block() {
    let board: Board = "XX.OO....".parse().unwrap();
    let mut rng = StdRng::seed_from_u64(0);
    assert_eq!(medium_move(&board, Mark::O, Mark::X, &mut rng), Ok(5));
}

#[test]
fn test_best_move_opening_is_corner_or_center() {
    let index = best_move(&Board::new(), Mark::O, Mark::X).unwrap();
    assert!([0, 2, 4, 6, 8].contains(&index));
}

#[test]
fn test_full_board_requests_are_errors() {
    let board: Board = "XOXOXXOXO".parse().unwrap();
    let mut rng = StdRng::seed_from_u64(0);
    assert_eq!(best_move(&board, Mark::X, Mark::O), Err(SelectError::NoEmptyCells));
    assert_eq!(
        medium_move(&board, Mark::X, Mark::O, &mut rng),
        Err(SelectError::NoEmptyCells)
    );
    assert_eq!(random_move(&board, &mut rng), Err(SelectError::NoEmptyCells));
}

fn arb_board() -> impl Strategy<Value = Board> {
    prop::array::uniform9(prop_oneof![
        2 => Just(Square::Empty),
        3 => Just(Square::Occupied(Mark::X)),
        3 => Just(Square::Occupied(Mark::O)),
    ])
    .prop_map(Board::from_squares)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_selectors_leave_board_unchanged(board in arb_board(), seed in any::<u64>()) {
        let before = board;
        let mut rng = StdRng::seed_from_u64(seed);

        let optimal = best_move(&board, Mark::O, Mark::X);
        prop_assert_eq!(board, before);
        let medium = medium_move(&board, Mark::O, Mark::X, &mut rng);
        prop_assert_eq!(board, before);

        for choice in [optimal, medium] {
            match choice {
                Ok(index) => {
                    prop_assert!(before.is_empty(index));
                }
                Err(SelectError::NoEmptyCells) => {
                    prop_assert_eq!(before.occupied_count(), 9);
                }
            }
        }
    }
}
