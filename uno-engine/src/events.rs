use std::fmt::Debug;

use tracing::{debug, info};

use crate::card::Card;
use crate::turn::TurnDirection;

/// Something that happened at the table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GameEvent {
    GameStarted {
        seating: Vec<u64>,
    },
    RoundStarted {
        round: u32,
        player_id: u64,
    },
    FirstCardTurned {
        card: Card,
        turned_over: usize,
    },
    MoveStarted {
        round: u32,
        move_number: u32,
        player_id: u64,
        active_card: Card,
    },
    TurnSkipped {
        player_id: u64,
    },
    CardsDrawn {
        player_id: u64,
        count: usize,
    },
    CardPlayed {
        player_id: u64,
        card: Card,
    },
    NoCardPlayed {
        player_id: u64,
    },
    DirectionReversed {
        direction: TurnDirection,
    },
    RoundWon {
        round: u32,
        player_id: u64,
        points: u32,
        total_points: u32,
    },
    GameWon {
        player_id: u64,
        points: u32,
    },
    CardsCollected {
        draw_pile: usize,
    },
}

pub trait EventSink: Debug {
    fn record(&mut self, event: &GameEvent);
}

/// Forwards events to `tracing`: round and game milestones at `info`,
/// everything else at `debug`.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingSink;

impl EventSink for TracingSink {
    fn record(&mut self, event: &GameEvent) {
        match event {
            GameEvent::GameStarted { seating } => info!(?seating, "game started"),
            GameEvent::RoundStarted { round, player_id } => {
                info!(round, player_id, "round started")
            }
            GameEvent::FirstCardTurned { card, turned_over } => {
                info!(card = %card, turned_over, "first discard card")
            }
            GameEvent::MoveStarted {
                round,
                move_number,
                player_id,
                active_card,
            } => debug!(round, move_number, player_id, active_card = %active_card, "move"),
            GameEvent::TurnSkipped { player_id } => debug!(player_id, "turn skipped"),
            GameEvent::CardsDrawn { player_id, count } => {
                debug!(player_id, count, "cards drawn")
            }
            GameEvent::CardPlayed { player_id, card } => {
                debug!(player_id, card = %card, "card played")
            }
            GameEvent::NoCardPlayed { player_id } => debug!(player_id, "no card to play"),
            GameEvent::DirectionReversed { direction } => {
                debug!(direction = %direction, "direction reversed")
            }
            GameEvent::RoundWon {
                round,
                player_id,
                points,
                total_points,
            } => info!(round, player_id, points, total_points, "round won"),
            GameEvent::GameWon { player_id, points } => info!(player_id, points, "game won"),
            GameEvent::CardsCollected { draw_pile } => debug!(draw_pile, "cards collected"),
        }
    }
}

impl EventSink for Vec<GameEvent> {
    fn record(&mut self, event: &GameEvent) {
        self.push(event.clone());
    }
}
