use strum_macros::Display;

use crate::card::Card;

#[derive(Clone, Copy, Debug, Display, Default, PartialEq, Eq)]
pub enum TurnDirection {
    #[default]
    Clockwise,
    CounterClockwise,
}

impl TurnDirection {
    pub fn step(&self) -> isize {
        match self {
            TurnDirection::Clockwise => 1,
            TurnDirection::CounterClockwise => -1,
        }
    }

    pub fn reversed(self) -> Self {
        match self {
            TurnDirection::Clockwise => TurnDirection::CounterClockwise,
            TurnDirection::CounterClockwise => TurnDirection::Clockwise,
        }
    }
}

/// Seat index that follows `current` when moving in `direction`.
pub fn next_index(current: usize, direction: TurnDirection, players_count: usize) -> usize {
    let players_count = players_count as isize;
    (current as isize + direction.step()).rem_euclid(players_count) as usize
}

/// Whose turn it is and which way play moves.
///
/// The only place the current seat and the direction change.
#[derive(Clone, Debug)]
pub struct Turn {
    current_index: usize,
    direction: TurnDirection,
    players_count: usize,
}

impl Turn {
    pub fn new(players_count: usize) -> Self {
        Self {
            current_index: 0,
            direction: TurnDirection::default(),
            players_count,
        }
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn direction(&self) -> TurnDirection {
        self.direction
    }

    pub fn next_index(&self) -> usize {
        next_index(self.current_index, self.direction, self.players_count)
    }

    pub(crate) fn start_at(&mut self, index: usize) {
        self.current_index = index % self.players_count;
    }

    pub(crate) fn advance(&mut self) {
        self.current_index = self.next_index();
    }

    pub(crate) fn reverse(&mut self) {
        self.direction = self.direction.reversed();
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The player lost the turn to a skip card.
    Skipped,
    /// The player absorbed a draw card and drew this many cards.
    ForcedDraw(usize),
    /// The player put `card` on the discard pile, after drawing one card
    /// first if `after_draw` is set.
    Played { card: Card, after_draw: bool },
    /// The player drew one card and still had nothing to play.
    Passed,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlayMoveResult {
    pub outcome: MoveOutcome,
    pub round_over: bool,
}
