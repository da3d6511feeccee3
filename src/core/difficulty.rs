//! Difficulty profiles for the simulated opponent
//!
//! Each difficulty maps to a fixed weight tuple used by the turn simulator
//! when choosing which class of card to reveal next.

use super::EngineError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Relative weights of the four reveal categories
///
/// Weights are unnormalized; the simulator zeroes unavailable categories
/// and draws proportionally to what is left.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DifficultyProfile {
    /// Weight of revealing one of the opponent's own cards (a correct guess)
    pub w_opponent: f64,
    /// Weight of revealing an ally card (a wrong guess that ends the turn)
    pub w_ally: f64,
    /// Weight of revealing a neutral card
    pub w_neutral: f64,
    /// Weight of voluntarily ending the turn
    pub w_stop: f64,
}

/// Named difficulty level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum Difficulty {
    Easy,
    Medium,
    /// Never reveals an ally card
    Hard,
}

impl Difficulty {
    pub const ALL: [Self; 3] = [Self::Easy, Self::Medium, Self::Hard];

    /// Weight tuple for this difficulty
    #[must_use]
    pub const fn profile(self) -> DifficultyProfile {
        match self {
            Self::Easy => DifficultyProfile {
                w_opponent: 2.0,
                w_ally: 1.0,
                w_neutral: 1.0,
                w_stop: 3.0,
            },
            Self::Medium => DifficultyProfile {
                w_opponent: 2.0,
                w_ally: 1.0,
                w_neutral: 1.0,
                w_stop: 2.0,
            },
            Self::Hard => DifficultyProfile {
                w_opponent: 3.0,
                w_ally: 0.0,
                w_neutral: 1.0,
                w_stop: 2.0,
            },
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
        }
    }
}

impl FromStr for Difficulty {
    type Err = EngineError;

    /// Parse a difficulty name
    ///
    /// Accepts "easy", "medium" and "hard" in any case. An unknown
    /// difficulty is an error and never falls back to a default.
    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name.trim().to_ascii_lowercase().as_str() {
            "easy" => Ok(Self::Easy),
            "medium" => Ok(Self::Medium),
            "hard" => Ok(Self::Hard),
            _ => Err(EngineError::InvalidDifficulty(name.to_string())),
        }
    }
}

impl TryFrom<String> for Difficulty {
    type Error = EngineError;

    fn try_from(name: String) -> Result<Self, Self::Error> {
        name.parse()
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_known_names() {
        assert_eq!("easy".parse::<Difficulty>(), Ok(Difficulty::Easy));
        assert_eq!("Medium".parse::<Difficulty>(), Ok(Difficulty::Medium));
        assert_eq!(" HARD ".parse::<Difficulty>(), Ok(Difficulty::Hard));
    }

    #[test]
    fn parse_unknown_name_fails() {
        assert_eq!(
            "nightmare".parse::<Difficulty>(),
            Err(EngineError::InvalidDifficulty("nightmare".to_string()))
        );
        assert!("".parse::<Difficulty>().is_err());
    }

    #[test]
    fn hard_never_reveals_ally_and_pushes_opponent() {
        let hard = Difficulty::Hard.profile();
        let medium = Difficulty::Medium.profile();

        assert!(hard.w_ally.abs() < f64::EPSILON);
        assert!(hard.w_opponent > medium.w_opponent);
    }

    #[test]
    fn easy_stops_more_often_than_medium() {
        assert!(Difficulty::Easy.profile().w_stop > Difficulty::Medium.profile().w_stop);
    }

    #[test]
    fn deserialize_rejects_unknown_difficulty() {
        assert_eq!(
            serde_json::from_str::<Difficulty>(r#""hard""#).unwrap(),
            Difficulty::Hard
        );
        let err = serde_json::from_str::<Difficulty>(r#""expert""#).unwrap_err();
        assert!(err.to_string().contains("expert"));
    }

    #[test]
    fn names_round_trip_through_display() {
        for difficulty in Difficulty::ALL {
            assert_eq!(difficulty.to_string().parse::<Difficulty>(), Ok(difficulty));
        }
    }
}
