//! Othello/Reversi rules engine and alpha-beta opponent.
//!
//! - [`board`] - bitboard state and flip computation
//! - [`rules`] - legal moves, move application, turn order, game end
//! - [`ai`] - static evaluation and minimax search
//! - [`game`] - a live game session for a front-end to drive
//! - [`wasm`] - browser bindings over [`game`]

pub mod ai;
pub mod board;
pub mod config;
pub mod difficulty;
pub mod error;
pub mod game;
pub mod rules;
pub mod types;
pub mod wasm;

pub use ai::best_move;
pub use board::Board;
pub use error::{EngineError, EngineResult};
pub use types::{Cell, Outcome, Position, Side};
