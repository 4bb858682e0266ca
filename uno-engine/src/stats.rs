use core::fmt;
use std::collections::BTreeMap;
use std::fmt::Display;

use crate::strategy::StrategyKind;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RoundSummary {
    pub round: u32,
    pub moves: u32,
    pub winner_id: u64,
    pub points_awarded: u32,
}

/// Summary of one finished game, in seating order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameStatistics {
    pub number_of_players: usize,
    pub number_of_rounds: u32,
    pub moves_per_round: Vec<u32>,
    pub player_names: Vec<String>,
    pub player_scores: Vec<u32>,
    pub winner_name: String,
    pub winner_score: u32,
    pub winner_strategy: StrategyKind,
}

impl GameStatistics {
    pub fn total_moves(&self) -> u32 {
        self.moves_per_round.iter().sum()
    }
}

impl Display for GameStatistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{} won with {} points ({} strategy)",
            self.winner_name, self.winner_score, self.winner_strategy
        )?;
        writeln!(
            f,
            "{} players, {} rounds, {} moves",
            self.number_of_players,
            self.number_of_rounds,
            self.total_moves()
        )?;
        for (name, score) in self.player_names.iter().zip(&self.player_scores) {
            writeln!(f, "  {name}: {score}")?;
        }
        Ok(())
    }
}

/// Running totals over several games.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SessionStatistics {
    games_played: usize,
    rounds_played: u32,
    wins: BTreeMap<String, usize>,
}

impl SessionStatistics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, game: &GameStatistics) {
        self.games_played += 1;
        self.rounds_played += game.number_of_rounds;
        *self.wins.entry(game.winner_name.clone()).or_insert(0) += 1;
    }

    pub fn games_played(&self) -> usize {
        self.games_played
    }

    pub fn wins(&self, name: &str) -> usize {
        self.wins.get(name).copied().unwrap_or(0)
    }

    pub fn average_rounds(&self) -> f64 {
        if self.games_played == 0 {
            return 0.0;
        }
        f64::from(self.rounds_played) / self.games_played as f64
    }
}

impl Display for SessionStatistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{} games, {:.1} rounds per game",
            self.games_played,
            self.average_rounds()
        )?;
        for (name, wins) in &self.wins {
            writeln!(f, "  {name}: {wins} wins")?;
        }
        Ok(())
    }
}
