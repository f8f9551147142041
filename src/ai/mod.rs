pub mod eval;
pub mod search;

use crate::board::Board;
use crate::difficulty::Difficulty;
use crate::error::EngineResult;
use crate::types::{Position, Side};

use eval::Evaluator;
use search::Searcher;

/// Best move for `side` at difficulty `level`, using the default evaluator.
///
/// Fails with `InvalidDifficulty` for an unsupported level and with
/// `NoLegalMove` when `side` must pass.
pub fn best_move(board: &Board, side: Side, level: u8) -> EngineResult<Position> {
    let difficulty = Difficulty::from_level(level)?;
    let evaluator = Evaluator::default();
    let mut searcher = Searcher::new(&evaluator, difficulty.search_depth());
    Ok(searcher.best_move(board, side)?.mv)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EngineError;

    #[test]
    fn invalid_level_is_reported_before_searching() {
        let board = Board::from_bitboards(u64::MAX, 0);

        assert_eq!(
            best_move(&board, Side::Light, 0),
            Err(EngineError::InvalidDifficulty { level: 0 })
        );
        assert_eq!(
            best_move(&board, Side::Light, 2),
            Err(EngineError::NoLegalMove { side: Side::Light })
        );
    }

    #[test]
    fn opening_reply_is_legal() {
        let board = Board::new();

        let mv = best_move(&board, Side::Dark, 3).unwrap();

        assert!(crate::rules::legal_moves(&board, Side::Dark).contains(&mv));
    }
}
