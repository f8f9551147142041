//! End-to-end scenarios driven through the public API only.

use othello_core::ai::eval::{EvalWeights, Evaluator};
use othello_core::ai::search::Searcher;
use othello_core::rules::{self, Turn};
use othello_core::{Board, Cell, EngineError, Outcome, Position, Side, best_move};

const FULL_BOARD: u64 = u64::MAX;

fn bit(row: usize, col: usize) -> u64 {
    1u64 << (row * 8 + col)
}

fn pos(row: u8, col: u8) -> Position {
    Position::new(row, col).unwrap()
}

#[test]
fn opening_offers_dark_four_moves() {
    let board = rules::initialize();

    assert_eq!(rules::legal_moves(&board, Side::Dark).len(), 4);
    assert_eq!(rules::legal_moves(&board, Side::Light).len(), 4);
}

#[test]
fn each_opening_move_flips_one_and_grows_to_six() {
    let board = rules::initialize();

    for mv in rules::legal_moves(&board, Side::Dark) {
        let (next, flipped) = rules::apply_move(&board, mv, Side::Dark).unwrap();
        let (dark, light) = next.count_pieces();

        assert_eq!(flipped.len(), 1);
        assert_eq!(dark + light, 6);
        assert_eq!((dark, light), (4, 1));
    }
}

#[test]
fn all_dark_board_is_over_and_dark_wins() {
    let board = Board::from_bitboards(FULL_BOARD, 0);

    assert!(rules::is_terminal(&board));
    assert_eq!(rules::winner(&board), Outcome::Winner(Side::Dark));
    assert_eq!(board.get(7, 7), Ok(Cell::Dark));
}

#[test]
fn blocked_dark_hands_the_turn_back_to_light() {
    // Light plays a1; Dark's only stone g8 cannot sandwich anything, so
    // Light moves again and then fills h8.
    let dark = bit(0, 1) | bit(7, 6);
    let light = FULL_BOARD ^ bit(0, 0) ^ bit(7, 7) ^ dark;
    let board = Board::from_bitboards(dark, light);

    let (after_a1, _) = rules::apply_move(&board, pos(0, 0), Side::Light).unwrap();
    assert!(rules::legal_moves(&after_a1, Side::Dark).is_empty());
    assert_eq!(rules::next_side(&after_a1, Side::Light), Turn::Pass(Side::Light));

    let (after_h8, flipped) = rules::apply_move(&after_a1, pos(7, 7), Side::Light).unwrap();
    assert_eq!(flipped, vec![pos(7, 6)]);
    assert_eq!(rules::next_side(&after_h8, Side::Light), Turn::GameOver);
    assert_eq!(rules::winner(&after_h8), Outcome::Winner(Side::Light));
}

#[test]
fn single_move_is_returned_at_depth_one() {
    let dark = bit(0, 1);
    let board = Board::from_bitboards(dark, FULL_BOARD ^ bit(0, 0) ^ dark);

    for weights in [
        EvalWeights::default(),
        EvalWeights {
            material: -7,
            positional: 0,
            mobility: 1000,
        },
    ] {
        let evaluator = Evaluator::new(weights);
        let outcome = Searcher::new(&evaluator, 1)
            .best_move(&board, Side::Light)
            .unwrap();
        assert_eq!(outcome.mv, pos(0, 0));
    }
}

#[test]
fn best_move_validates_difficulty_and_pass_state() {
    let board = rules::initialize();

    assert_eq!(
        best_move(&board, Side::Dark, 7),
        Err(EngineError::InvalidDifficulty { level: 7 })
    );
    assert_eq!(
        best_move(&Board::from_bitboards(FULL_BOARD, 0), Side::Dark, 1),
        Err(EngineError::NoLegalMove { side: Side::Dark })
    );
}

#[test]
fn ai_against_ai_finishes_the_game() {
    let mut board = rules::initialize();
    let mut side = Side::Dark;
    let mut moves = 0;

    loop {
        let mv = best_move(&board, side, 2).unwrap();
        let (next, _) = rules::apply_move(&board, mv, side).unwrap();
        board = next;
        moves += 1;
        match rules::next_side(&board, side) {
            Turn::Switch(next_side) | Turn::Pass(next_side) => side = next_side,
            Turn::GameOver => break,
        }
    }

    let (dark, light) = board.count_pieces();
    assert!(rules::is_terminal(&board));
    assert!(moves <= 60);
    assert_eq!(dark + light + board.empty_count(), 64);
}
