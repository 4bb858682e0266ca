use std::fmt::Debug;

use thiserror::Error;

use crate::card::Card;

#[derive(Error, Debug)]
pub enum UnoError {
    #[error("Not enough players")]
    NotEnoughPlayers,
    #[error("Too many players")]
    TooManyPlayers,
    #[error("Player id {0} is used more than once")]
    DuplicatePlayerId(u64),
    #[error("Cannot deal {hand_size} cards to each of {players} players")]
    InvalidHandSize { hand_size: usize, players: usize },
    #[error("The discard pile is empty")]
    EmptyPile,
    #[error("No cards left to draw in either pile")]
    DeckExhausted,
    #[error("Player {player_id} played {card} on {active_card}")]
    InvalidPlayerMove {
        player_id: u64,
        card: Card,
        active_card: Card,
    },
    #[error("A round is already in progress")]
    RoundInProgress,
    #[error("No round is in the expected phase")]
    RoundNotInProgress,
}

pub type Result<T, E = UnoError> = std::result::Result<T, E>;
