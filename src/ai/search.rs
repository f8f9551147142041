use web_time::{Duration, Instant};

use crate::ai::eval::Evaluator;
use crate::board::{Board, mask_to_positions};
use crate::error::{EngineError, EngineResult};
use crate::types::{Position, Side};

const MIN_SCORE: i32 = i32::MIN;
const MAX_SCORE: i32 = i32::MAX;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SearchResult {
    Complete(i32),
    TimedOut,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RootResult {
    Complete(Position, i32),
    TimedOut,
}

/// The move chosen by a search, with diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchOutcome {
    pub mv: Position,
    /// Minimax value of `mv` from the mover's perspective.
    pub score: i32,
    /// Deepest fully completed depth.
    pub depth: u8,
    pub nodes: u64,
}

/// Depth-limited minimax with alpha-beta pruning.
///
/// Ties at the root go to the first move in row-major order.
pub struct Searcher<'a> {
    evaluator: &'a Evaluator,
    max_depth: u8,
    timeout: Option<Duration>,
    start_time: Instant,
    timed_out: bool,
    nodes: u64,
}

impl<'a> Searcher<'a> {
    /// A depth of 0 searches one ply: the root always expands its moves.
    pub fn new(evaluator: &'a Evaluator, max_depth: u8) -> Self {
        Self {
            evaluator,
            max_depth: max_depth.max(1),
            timeout: None,
            start_time: Instant::now(),
            timed_out: false,
            nodes: 0,
        }
    }

    /// Iterative deepening up to `max_depth`, stopping once `timeout` has
    /// elapsed. Depth 1 always completes.
    pub fn with_timeout(evaluator: &'a Evaluator, max_depth: u8, timeout: Duration) -> Self {
        Self {
            timeout: Some(timeout),
            ..Self::new(evaluator, max_depth)
        }
    }

    /// Searches the best move for `side`.
    ///
    /// Fails with `NoLegalMove` when `side` has to pass; callers are
    /// expected to route passes through `rules::next_side` first.
    pub fn best_move(&mut self, board: &Board, side: Side) -> EngineResult<SearchOutcome> {
        self.start_time = Instant::now();
        self.timed_out = false;
        self.nodes = 0;

        let moves = mask_to_positions(board.legal_mask(side));
        if moves.is_empty() {
            return Err(EngineError::NoLegalMove { side });
        }

        let first_depth = if self.timeout.is_some() { 1 } else { self.max_depth };
        let mut best = SearchOutcome {
            mv: moves[0],
            score: MIN_SCORE,
            depth: 0,
            nodes: 0,
        };

        for depth in first_depth..=self.max_depth {
            match self.search_root(board, side, &moves, depth) {
                RootResult::Complete(mv, score) => {
                    best.mv = mv;
                    best.score = score;
                    best.depth = depth;
                }
                RootResult::TimedOut => break,
            }
        }
        best.nodes = self.nodes;

        log::debug!(
            "{side} plays {} (score {}, depth {}/{}, {} nodes, {:?})",
            best.mv,
            best.score,
            best.depth,
            self.max_depth,
            best.nodes,
            self.start_time.elapsed()
        );

        Ok(best)
    }

    pub fn timed_out(&self) -> bool {
        self.timed_out
    }

    fn search_root(
        &mut self,
        board: &Board,
        side: Side,
        moves: &[Position],
        depth: u8,
    ) -> RootResult {
        let mut best_move = moves[0];
        let mut best_score = MIN_SCORE;
        let mut alpha = MIN_SCORE;

        for &mv in moves {
            let mut next = *board;
            next.place(mv.index(), side);
            let result = self.minimax(&next, !side, depth - 1, depth, alpha, MAX_SCORE, side);

            match result {
                SearchResult::TimedOut => return RootResult::TimedOut,
                SearchResult::Complete(score) => {
                    if is_better_move(score, mv, best_score, best_move) {
                        best_score = score;
                        best_move = mv;
                    }
                    alpha = alpha.max(score);
                }
            }
        }

        RootResult::Complete(best_move, best_score)
    }

    #[allow(clippy::too_many_arguments)]
    fn minimax(
        &mut self,
        board: &Board,
        side: Side,
        depth: u8,
        root_depth: u8,
        mut alpha: i32,
        mut beta: i32,
        maximizing: Side,
    ) -> SearchResult {
        // Depth 1 runs to completion so there is always a move to return.
        if root_depth > 1 && self.deadline_exceeded() {
            return SearchResult::TimedOut;
        }
        self.nodes += 1;

        if depth == 0 {
            return SearchResult::Complete(self.evaluator.evaluate(board, maximizing));
        }

        let legal = board.legal_mask(side);
        if legal == 0 {
            if board.legal_mask(!side) == 0 {
                return SearchResult::Complete(self.evaluator.evaluate(board, maximizing));
            }
            // Forced pass: same board, opponent to move, one ply used.
            return self.minimax(board, !side, depth - 1, root_depth, alpha, beta, maximizing);
        }

        let maximize = side == maximizing;
        let mut best = if maximize { MIN_SCORE } else { MAX_SCORE };
        let mut remaining = legal;

        while remaining != 0 {
            let pos = remaining.trailing_zeros() as usize;
            remaining &= remaining - 1;

            let mut next = *board;
            next.place(pos, side);

            match self.minimax(&next, !side, depth - 1, root_depth, alpha, beta, maximizing) {
                SearchResult::TimedOut => return SearchResult::TimedOut,
                SearchResult::Complete(score) => {
                    if maximize {
                        best = best.max(score);
                        alpha = alpha.max(score);
                    } else {
                        best = best.min(score);
                        beta = beta.min(score);
                    }
                    if alpha >= beta {
                        break;
                    }
                }
            }
        }

        SearchResult::Complete(best)
    }

    fn deadline_exceeded(&mut self) -> bool {
        if let Some(timeout) = self.timeout
            && self.start_time.elapsed() >= timeout
        {
            self.timed_out = true;
        }
        self.timed_out
    }
}

fn is_better_move(score: i32, mv: Position, best_score: i32, best_move: Position) -> bool {
    score > best_score || (score == best_score && mv < best_move)
}
