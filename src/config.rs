use serde::Deserialize;

use crate::ai::eval::EvalWeights;
use crate::difficulty::{DEFAULT_LEVEL, Difficulty};
use crate::error::EngineResult;

/// Settings supplied once when a game is constructed.
///
/// Every field has a default, so `{}` from JS is a valid configuration.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub difficulty: u8,
    pub ai_enabled: bool,
    /// Optional thinking budget for the AI. `None` searches to full depth.
    pub think_time_ms: Option<u64>,
    pub weights: EvalWeights,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            difficulty: DEFAULT_LEVEL,
            ai_enabled: true,
            think_time_ms: None,
            weights: EvalWeights::default(),
        }
    }
}

impl GameConfig {
    /// Checks the difficulty level and the evaluation weights.
    pub fn validate(&self) -> EngineResult<Difficulty> {
        let difficulty = Difficulty::from_level(self.difficulty)?;
        self.weights.validate()?;
        Ok(difficulty)
    }
}
