//! Aggregate statistics over many simulated turns

use super::simulator::{TurnEnd, TurnResult};
use crate::core::{Board, Team};
use serde::Serialize;

/// Running totals for repeated simulations on one board
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TurnStats {
    pub turns: usize,
    pub opponent_reveals: usize,
    pub ally_reveals: usize,
    pub neutral_reveals: usize,
    pub ally_revealed: usize,
    pub stopped: usize,
    pub exhausted: usize,
}

impl TurnStats {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one result into the totals; ids not on `board` are ignored
    pub fn record(&mut self, result: &TurnResult, board: &Board) {
        self.turns += 1;
        for team in result.sequence.iter().filter_map(|&id| board.card(id).map(|c| c.team)) {
            match team {
                Team::Opponent => self.opponent_reveals += 1,
                Team::Ally => self.ally_reveals += 1,
                Team::Neutral => self.neutral_reveals += 1,
                Team::Forbidden => {}
            }
        }
        match result.ended_by {
            TurnEnd::AllyRevealed => self.ally_revealed += 1,
            TurnEnd::Stopped => self.stopped += 1,
            TurnEnd::Exhausted => self.exhausted += 1,
        }
    }

    #[must_use]
    pub const fn reveals(&self, team: Team) -> usize {
        match team {
            Team::Opponent => self.opponent_reveals,
            Team::Ally => self.ally_reveals,
            Team::Neutral => self.neutral_reveals,
            Team::Forbidden => 0,
        }
    }

    #[must_use]
    pub const fn ended(&self, end: TurnEnd) -> usize {
        match end {
            TurnEnd::AllyRevealed => self.ally_revealed,
            TurnEnd::Stopped => self.stopped,
            TurnEnd::Exhausted => self.exhausted,
        }
    }

    /// Mean cards of `team` revealed per turn
    #[must_use]
    pub fn mean_reveals(&self, team: Team) -> f64 {
        self.per_turn(self.reveals(team))
    }

    /// Mean sequence length per turn
    #[must_use]
    pub fn mean_length(&self) -> f64 {
        self.per_turn(self.opponent_reveals + self.ally_reveals + self.neutral_reveals)
    }

    /// Fraction of turns that ended by `end`
    #[must_use]
    pub fn end_rate(&self, end: TurnEnd) -> f64 {
        self.per_turn(self.ended(end))
    }

    fn per_turn(&self, count: usize) -> f64 {
        if self.turns == 0 {
            0.0
        } else {
            count as f64 / self.turns as f64
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::standard_board;

    #[test]
    fn empty_stats_are_zero() {
        let stats = TurnStats::new();
        assert!(stats.mean_length().abs() < f64::EPSILON);
        assert!(stats.end_rate(TurnEnd::Stopped).abs() < f64::EPSILON);
    }

    #[test]
    fn records_reveals_by_team() {
        let board = standard_board();
        let mut stats = TurnStats::new();

        // 10 is opponent, 18 neutral, 1 ally
        stats.record(
            &TurnResult {
                sequence: vec![10, 18, 1],
                ended_by: TurnEnd::AllyRevealed,
            },
            &board,
        );
        stats.record(
            &TurnResult {
                sequence: vec![11],
                ended_by: TurnEnd::Stopped,
            },
            &board,
        );

        assert_eq!(stats.turns, 2);
        assert_eq!(stats.reveals(Team::Opponent), 2);
        assert_eq!(stats.reveals(Team::Neutral), 1);
        assert_eq!(stats.reveals(Team::Ally), 1);
        assert!((stats.mean_length() - 2.0).abs() < f64::EPSILON);
        assert!((stats.end_rate(TurnEnd::Stopped) - 0.5).abs() < f64::EPSILON);
        assert_eq!(stats.ended(TurnEnd::Exhausted), 0);
    }

    #[test]
    fn unknown_ids_are_ignored() {
        let board = standard_board();
        let mut stats = TurnStats::new();
        stats.record(
            &TurnResult {
                sequence: vec![99],
                ended_by: TurnEnd::Exhausted,
            },
            &board,
        );

        assert_eq!(stats.turns, 1);
        assert!(stats.mean_length().abs() < f64::EPSILON);
    }
}
