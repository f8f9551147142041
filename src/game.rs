use web_time::Duration;

use crate::ai::eval::Evaluator;
use crate::ai::search::Searcher;
use crate::board::Board;
use crate::config::GameConfig;
use crate::difficulty::Difficulty;
use crate::error::{EngineError, EngineResult};
use crate::rules::{self, Turn};
use crate::types::{GameResult, GameState, Outcome, Position, Side};

/// The computer always plays Light; the human opens with Dark.
pub const AI_SIDE: Side = Side::Light;

pub trait MoveSelector: Send + Sync {
    fn select_move(&self, board: &Board, side: Side, difficulty: Difficulty)
    -> EngineResult<Position>;
}

/// Alpha-beta search at the configured difficulty.
#[derive(Debug, Default, Clone, Copy)]
pub struct AlphaBetaSelector {
    evaluator: Evaluator,
    think_time: Option<Duration>,
}

impl AlphaBetaSelector {
    pub fn new(evaluator: Evaluator, think_time: Option<Duration>) -> Self {
        Self {
            evaluator,
            think_time,
        }
    }

    pub fn from_config(config: &GameConfig) -> Self {
        Self::new(
            Evaluator::new(config.weights),
            config.think_time_ms.map(Duration::from_millis),
        )
    }
}

impl MoveSelector for AlphaBetaSelector {
    fn select_move(
        &self,
        board: &Board,
        side: Side,
        difficulty: Difficulty,
    ) -> EngineResult<Position> {
        let depth = difficulty.search_depth();
        let mut searcher = match self.think_time {
            Some(timeout) => Searcher::with_timeout(&self.evaluator, depth, timeout),
            None => Searcher::new(&self.evaluator, depth),
        };
        Ok(searcher.best_move(board, side)?.mv)
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct FirstLegalMoveSelector;

impl MoveSelector for FirstLegalMoveSelector {
    fn select_move(
        &self,
        board: &Board,
        side: Side,
        _difficulty: Difficulty,
    ) -> EngineResult<Position> {
        rules::legal_moves(board, side)
            .into_iter()
            .next()
            .ok_or(EngineError::NoLegalMove { side })
    }
}

/// A live game: the authoritative board plus turn bookkeeping.
pub struct GameInstance {
    board: Board,
    current_player: Side,
    difficulty: Difficulty,
    ai_enabled: bool,
    is_game_over: bool,
    passed: Option<Side>,
    flipped: Vec<Position>,
    move_count: u32,
    selector: Box<dyn MoveSelector>,
}

impl GameInstance {
    pub fn new(config: &GameConfig) -> EngineResult<Self> {
        Self::with_selector(config, Box::new(AlphaBetaSelector::from_config(config)))
    }

    pub fn with_selector(
        config: &GameConfig,
        selector: Box<dyn MoveSelector>,
    ) -> EngineResult<Self> {
        let difficulty = config.validate()?;
        log::debug!(
            "new game: level {} ({difficulty}), ai {}",
            difficulty.level(),
            if config.ai_enabled { "on" } else { "off" }
        );
        Ok(Self {
            board: rules::initialize(),
            current_player: Side::Dark,
            difficulty,
            ai_enabled: config.ai_enabled,
            is_game_over: false,
            passed: None,
            flipped: Vec::new(),
            move_count: 0,
            selector,
        })
    }

    /// Starts over from the opening position with the same settings.
    pub fn restart(&mut self) {
        self.board = rules::initialize();
        self.current_player = Side::Dark;
        self.is_game_over = false;
        self.passed = None;
        self.flipped.clear();
        self.move_count = 0;
    }

    /// Plays a human move for the side to move.
    pub fn place(&mut self, row: u8, col: u8) -> EngineResult<()> {
        if self.is_game_over {
            return Err(EngineError::GameOver);
        }
        if self.is_ai_turn() {
            return Err(EngineError::NotHumanTurn);
        }

        let pos = Position::new(row, col)?;
        self.apply_move(pos, self.current_player)
    }

    /// Lets the computer choose and play Light's move.
    pub fn do_ai_move(&mut self) -> EngineResult<()> {
        if self.is_game_over {
            return Err(EngineError::GameOver);
        }
        if !self.ai_enabled {
            return Err(EngineError::AiDisabled);
        }
        if self.current_player != AI_SIDE {
            return Err(EngineError::NotAiTurn);
        }

        let selected = self
            .selector
            .select_move(&self.board, AI_SIDE, self.difficulty)?;

        self.apply_move(selected, AI_SIDE)
    }

    pub fn is_ai_turn(&self) -> bool {
        self.ai_enabled && !self.is_game_over && self.current_player == AI_SIDE
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_player(&self) -> Side {
        self.current_player
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn is_game_over(&self) -> bool {
        self.is_game_over
    }

    /// Legal moves of the side to move; empty once the game is over.
    pub fn legal_moves(&self) -> Vec<Position> {
        if self.is_game_over {
            Vec::new()
        } else {
            rules::legal_moves(&self.board, self.current_player)
        }
    }

    pub fn to_game_state(&self) -> GameState {
        let (dark_count, light_count) = self.board.count_pieces();
        GameState {
            board: self.board.to_cells(),
            current_player: self.current_player,
            dark_count,
            light_count,
            is_game_over: self.is_game_over,
            is_pass: self.passed.is_some(),
            passed: self.passed,
            flipped: self.flipped.clone(),
            move_count: self.move_count,
        }
    }

    /// Final score, or `None` while the game is still running.
    pub fn to_game_result(&self) -> Option<GameResult> {
        if !self.is_game_over {
            return None;
        }
        let (dark_count, light_count) = self.board.count_pieces();
        Some(GameResult {
            outcome: rules::winner(&self.board),
            dark_count,
            light_count,
        })
    }

    pub fn status_message(&self) -> String {
        if let Some(result) = self.to_game_result() {
            return match result.outcome {
                Outcome::Winner(side) => format!("Game over! {side} wins!"),
                Outcome::Draw => "Game over! It's a draw!".to_string(),
            };
        }
        match self.passed {
            Some(side) => format!("{side} has no legal moves. Passing turn."),
            None => format!("{}'s turn", self.current_player),
        }
    }

    fn apply_move(&mut self, pos: Position, side: Side) -> EngineResult<()> {
        let (next, flipped) = rules::apply_move(&self.board, pos, side)?;

        self.board = next;
        self.flipped = flipped;
        self.move_count += 1;
        self.passed = None;

        match rules::next_side(&self.board, side) {
            Turn::Switch(next_side) => self.current_player = next_side,
            Turn::Pass(again) => {
                log::debug!("{} must pass, {again} moves again", again.opponent());
                self.passed = Some(again.opponent());
                self.current_player = again;
            }
            Turn::GameOver => {
                self.current_player = side.opponent();
                self.is_game_over = true;
                let (dark, light) = self.board.count_pieces();
                log::info!(
                    "game over after {} moves: {:?} ({dark}-{light})",
                    self.move_count,
                    rules::winner(&self.board)
                );
            }
        }

        Ok(())
    }

    #[cfg(test)]
    fn set_board_for_test(&mut self, board: Board, current_player: Side) {
        self.board = board;
        self.current_player = current_player;
        self.is_game_over = false;
        self.passed = None;
        self.flipped.clear();
    }
}
