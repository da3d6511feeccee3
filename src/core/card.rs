//! Codenames card representation
//!
//! A Card is one tile of the 5×5 board: a normalized word, the team it
//! belongs to, and whether it has been revealed.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Stable card identifier, assigned once when the board is dealt
pub type CardId = u32;

/// The team a card belongs to, from the perspective of the clue giver
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Team {
    /// The team currently seeking a clue
    Ally,
    /// The other team
    Opponent,
    /// Bystander cards
    Neutral,
    /// The assassin: picking it loses the game
    Forbidden,
}

impl Team {
    /// Short lowercase label, matching the serialized form
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Ally => "ally",
            Self::Opponent => "opponent",
            Self::Neutral => "neutral",
            Self::Forbidden => "forbidden",
        }
    }

    /// Whether a guesser picking this card is undesirable for the ally team
    #[inline]
    #[must_use]
    pub const fn is_dangerous(self) -> bool {
        !matches!(self, Self::Ally)
    }
}

impl fmt::Display for Team {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Normalize a word for board display and index lookup
///
/// Lowercases and strips every whitespace character, so `"Ice Cream"`
/// and `"icecream"` refer to the same entry.
///
/// # Examples
/// ```
/// use codenames_solver::core::normalize_word;
///
/// assert_eq!(normalize_word("Ice Cream"), "icecream");
/// assert_eq!(normalize_word("  NEW\tYORK "), "newyork");
/// ```
#[must_use]
pub fn normalize_word(text: &str) -> String {
    text.chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}

/// A single board card
///
/// `revealed` is serialized as `active`, the field name used by board
/// snapshots. A revealed card is out of play for scoring and sampling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub id: CardId,
    #[serde(deserialize_with = "deserialize_normalized")]
    pub name: String,
    pub team: Team,
    #[serde(rename = "active")]
    pub revealed: bool,
}

impl Card {
    /// Create an unrevealed card, normalizing the name
    ///
    /// # Examples
    /// ```
    /// use codenames_solver::core::{Card, Team};
    ///
    /// let card = Card::new(3, "Ice Cream", Team::Ally);
    /// assert_eq!(card.name, "icecream");
    /// assert!(card.in_play());
    /// ```
    #[must_use]
    pub fn new(id: CardId, name: &str, team: Team) -> Self {
        Self {
            id,
            name: normalize_word(name),
            team,
            revealed: false,
        }
    }

    /// Whether the card can still be guessed
    #[inline]
    #[must_use]
    pub const fn in_play(&self) -> bool {
        !self.revealed
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.team)
    }
}

fn deserialize_normalized<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    Ok(normalize_word(&raw))
}
