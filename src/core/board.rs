//! Board and game snapshot
//!
//! The board is an ordered list of cards. Team composition is fixed at deal
//! time; only the revealed flag changes during play.

use super::{Card, CardId, Difficulty, EngineError, Team};
use serde::{Deserialize, Serialize};

/// Cards on a standard board
pub const BOARD_SIZE: usize = 25;

/// Standard team composition: (team, count)
pub const STANDARD_COMPOSITION: [(Team, usize); 4] = [
    (Team::Ally, 9),
    (Team::Opponent, 8),
    (Team::Neutral, 7),
    (Team::Forbidden, 1),
];

/// An ordered collection of cards
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Board {
    cards: Vec<Card>,
}

impl Board {
    #[must_use]
    pub const fn new(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Cards of `team` that can still be guessed, in board order
    pub fn in_play(&self, team: Team) -> impl Iterator<Item = &Card> {
        self.cards
            .iter()
            .filter(move |card| card.team == team && card.in_play())
    }

    /// Every card that can still be guessed and is not an ally card
    pub fn dangerous_in_play(&self) -> impl Iterator<Item = &Card> {
        self.cards
            .iter()
            .filter(|card| card.team.is_dangerous() && card.in_play())
    }

    /// Whether `word` (already normalized) is the name of any card
    #[must_use]
    pub fn contains_word(&self, word: &str) -> bool {
        self.cards.iter().any(|card| card.name == word)
    }

    #[must_use]
    pub fn card(&self, id: CardId) -> Option<&Card> {
        self.cards.iter().find(|card| card.id == id)
    }

    /// Mark a card as revealed
    ///
    /// Returns the card's team, or `None` if no card has this id.
    pub fn reveal(&mut self, id: CardId) -> Option<Team> {
        let card = self.cards.iter_mut().find(|card| card.id == id)?;
        card.revealed = true;
        Some(card.team)
    }

    /// Number of cards per team, regardless of revealed state
    #[must_use]
    pub fn team_count(&self, team: Team) -> usize {
        self.cards.iter().filter(|card| card.team == team).count()
    }

    /// Whether the board has the canonical 25-card 9/8/7/1 layout
    #[must_use]
    pub fn is_standard_composition(&self) -> bool {
        self.cards.len() == BOARD_SIZE
            && STANDARD_COMPOSITION
                .iter()
                .all(|&(team, count)| self.team_count(team) == count)
    }
}

/// Board state plus the per-session metadata the engines consume
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub board: Board,
    /// Opponent difficulty; only the turn simulator needs it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<Difficulty>,
    /// Clues already issued this game
    #[serde(default)]
    pub invalid_guesses: Vec<String>,
}

impl GameSnapshot {
    /// The difficulty named by the snapshot
    ///
    /// # Errors
    /// Returns `EngineError::InvalidDifficulty` when the snapshot names none.
    pub fn require_difficulty(&self) -> Result<Difficulty, EngineError> {
        self.difficulty
            .ok_or_else(|| EngineError::InvalidDifficulty("missing".to_string()))
    }

    /// Record an issued clue so it is never offered again
    pub fn record_clue(&mut self, clue: &str) {
        let clue = super::normalize_word(clue);
        if !self.invalid_guesses.contains(&clue) {
            self.invalid_guesses.push(clue);
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// Standard board: ids 1..=25, teams dealt in composition order
    pub(crate) fn standard_board() -> Board {
        let words = [
            "bank", "river", "money", "coin", "gold", "loan", "vault", "teller", "check",
            "apple", "pie", "tart", "cake", "sugar", "flour", "oven", "cream",
            "tree", "leaf", "root", "stem", "bark", "seed", "soil",
            "bomb",
        ];
        let mut cards = Vec::with_capacity(BOARD_SIZE);
        let mut word_iter = words.iter();
        let mut id = 1;
        for (team, count) in STANDARD_COMPOSITION {
            for _ in 0..count {
                let word = word_iter.next().unwrap();
                cards.push(Card::new(id, word, team));
                id += 1;
            }
        }
        Board::new(cards)
    }

    #[test]
    fn standard_board_has_standard_composition() {
        let board = standard_board();
        assert!(board.is_standard_composition());
        assert_eq!(board.team_count(Team::Ally), 9);
        assert_eq!(board.team_count(Team::Forbidden), 1);
    }

    #[test]
    fn short_board_is_not_standard() {
        let board = Board::new(vec![Card::new(1, "bank", Team::Ally)]);
        assert!(!board.is_standard_composition());
    }

    #[test]
    fn in_play_skips_revealed_cards() {
        let mut board = standard_board();
        assert_eq!(board.in_play(Team::Ally).count(), 9);

        assert_eq!(board.reveal(1), Some(Team::Ally));
        assert_eq!(board.in_play(Team::Ally).count(), 8);
        assert!(board.in_play(Team::Ally).all(|card| card.id != 1));
    }

    #[test]
    fn dangerous_in_play_covers_all_non_ally_teams() {
        let mut board = standard_board();
        assert_eq!(board.dangerous_in_play().count(), 16);

        board.reveal(25);
        assert_eq!(board.dangerous_in_play().count(), 15);
        assert!(board.dangerous_in_play().all(|card| card.team != Team::Ally));
    }

    #[test]
    fn reveal_unknown_id_is_none() {
        let mut board = standard_board();
        assert_eq!(board.reveal(99), None);
    }

    #[test]
    fn contains_word_includes_revealed_cards() {
        let mut board = standard_board();
        board.reveal(2);
        assert!(board.contains_word("river"));
        assert!(!board.contains_word("ocean"));
    }

    #[test]
    fn snapshot_parses_without_metadata() {
        let json = r#"{
            "board": [
                {"id": 1, "name": "Bank", "team": "ally", "active": false},
                {"id": 2, "name": "bomb", "team": "forbidden", "active": false}
            ]
        }"#;
        let snapshot: GameSnapshot = serde_json::from_str(json).unwrap();

        assert_eq!(snapshot.board.cards().len(), 2);
        assert_eq!(snapshot.board.cards()[0].name, "bank");
        assert_eq!(snapshot.difficulty, None);
        assert!(snapshot.invalid_guesses.is_empty());
    }

    #[test]
    fn missing_difficulty_is_never_defaulted() {
        let json = r#"{"board": [{"id": 1, "name": "bank", "team": "ally", "active": false}]}"#;
        let snapshot: GameSnapshot = serde_json::from_str(json).unwrap();

        assert_eq!(
            snapshot.require_difficulty(),
            Err(EngineError::InvalidDifficulty("missing".to_string()))
        );
    }

    #[test]
    fn named_difficulty_is_parsed() {
        let json = r#"{"board": [], "difficulty": "Hard"}"#;
        let snapshot: GameSnapshot = serde_json::from_str(json).unwrap();
        assert_eq!(snapshot.require_difficulty(), Ok(Difficulty::Hard));

        // Round trip keeps the field
        let value = serde_json::to_value(&snapshot).unwrap();
        assert_eq!(value["difficulty"], "hard");
    }

    #[test]
    fn snapshot_rejects_bad_difficulty() {
        let json = r#"{"board": [], "difficulty": "impossible"}"#;
        assert!(serde_json::from_str::<GameSnapshot>(json).is_err());
    }

    #[test]
    fn record_clue_deduplicates() {
        let mut snapshot = GameSnapshot {
            board: standard_board(),
            difficulty: Some(Difficulty::Medium),
            invalid_guesses: vec![],
        };
        snapshot.record_clue("Finance");
        snapshot.record_clue("finance");

        assert_eq!(snapshot.invalid_guesses, vec!["finance".to_string()]);
    }
}
