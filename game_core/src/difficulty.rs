use crate::{GameError, Params};
use std::fmt;
use std::str::FromStr;

/// Ball speed preset selectable from the page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    /// Magnitude applied to both DX and DY
    pub fn speed(self) -> f32 {
        match self {
            Difficulty::Easy => Params::SPEED_EASY,
            Difficulty::Medium => Params::SPEED_MEDIUM,
            Difficulty::Hard => Params::SPEED_HARD,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

impl FromStr for Difficulty {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            _ => Err(GameError::UnknownDifficulty(s.to_string())),
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
