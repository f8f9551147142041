use std::fmt;

use crate::error::{EngineError, EngineResult};

pub const MIN_LEVEL: u8 = 1;
pub const MAX_LEVEL: u8 = 6;
pub const DEFAULT_LEVEL: u8 = 4;

/// A validated difficulty level. Each level searches one ply deeper than
/// the previous one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Difficulty(u8);

impl Difficulty {
    /// Rejects levels outside `MIN_LEVEL..=MAX_LEVEL`; never clamps.
    pub fn from_level(level: u8) -> EngineResult<Self> {
        if (MIN_LEVEL..=MAX_LEVEL).contains(&level) {
            Ok(Self(level))
        } else {
            Err(EngineError::InvalidDifficulty { level })
        }
    }

    pub fn level(self) -> u8 {
        self.0
    }

    /// Search depth in plies.
    pub fn search_depth(self) -> u8 {
        self.0
    }

    pub fn label(self) -> &'static str {
        match self.0 {
            1 => "Beginner",
            2 => "Easy",
            3 => "Medium",
            4 => "Normal",
            5 => "Hard",
            _ => "Expert",
        }
    }
}

impl Default for Difficulty {
    fn default() -> Self {
        Self(DEFAULT_LEVEL)
    }
}

impl TryFrom<u8> for Difficulty {
    type Error = EngineError;

    fn try_from(level: u8) -> EngineResult<Self> {
        Self::from_level(level)
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (depth {})", self.label(), self.search_depth())
    }
}
