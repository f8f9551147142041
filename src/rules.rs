//! Legality, flipping, turn order and termination.
//!
//! Every board mutation of a live game or of a search branch goes through
//! these functions (or `Board::place`, which they guard).

use crate::board::{Board, mask_to_positions};
use crate::error::{EngineError, EngineResult};
use crate::types::{Outcome, Position, Side};

/// What happens after `side` has moved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Turn {
    /// The opponent has a move and takes the turn.
    Switch(Side),
    /// The opponent must pass; the named side moves again.
    Pass(Side),
    /// Neither side can move.
    GameOver,
}

impl Turn {
    /// Side to move next, if any.
    pub fn side(self) -> Option<Side> {
        match self {
            Turn::Switch(side) | Turn::Pass(side) => Some(side),
            Turn::GameOver => None,
        }
    }
}

/// Returns the board for a new game.
pub fn initialize() -> Board {
    Board::new()
}

/// Legal moves of `side` in row-major order. Empty means `side` must pass.
pub fn legal_moves(board: &Board, side: Side) -> Vec<Position> {
    mask_to_positions(board.legal_mask(side))
}

pub fn has_legal_move(board: &Board, side: Side) -> bool {
    board.legal_mask(side) != 0
}

/// Plays `mv` for `side` on a copy of `board`.
///
/// Returns the new board and the flipped squares in row-major order. The
/// input board is never modified, so a failed call has no effect.
pub fn apply_move(
    board: &Board,
    mv: Position,
    side: Side,
) -> EngineResult<(Board, Vec<Position>)> {
    let mv = Position::new(mv.row, mv.col)?;

    let mut next = *board;
    let flips = next.place(mv.index(), side);
    if flips == 0 {
        return Err(EngineError::IllegalMove {
            row: mv.row,
            col: mv.col,
        });
    }

    Ok((next, mask_to_positions(flips)))
}

/// Decides who moves after `current` has moved on `board`.
///
/// Checked in this order: the opponent moves if it can, otherwise
/// `current` moves again, otherwise the game is over.
pub fn next_side(board: &Board, current: Side) -> Turn {
    let opponent = current.opponent();
    if has_legal_move(board, opponent) {
        Turn::Switch(opponent)
    } else if has_legal_move(board, current) {
        Turn::Pass(current)
    } else {
        Turn::GameOver
    }
}

/// True iff neither side has a legal move.
pub fn is_terminal(board: &Board) -> bool {
    !has_legal_move(board, Side::Dark) && !has_legal_move(board, Side::Light)
}

/// Compares piece counts. Meaningful once `is_terminal` holds, but
/// defined for any board.
pub fn winner(board: &Board) -> Outcome {
    let (dark, light) = board.count_pieces();
    if dark > light {
        Outcome::Winner(Side::Dark)
    } else if light > dark {
        Outcome::Winner(Side::Light)
    } else {
        Outcome::Draw
    }
}
