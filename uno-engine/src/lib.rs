pub mod card;
pub mod config;
pub(crate) mod constants;
pub mod deck;
pub mod error;
pub mod events;
pub mod hand;
pub mod pile;
pub mod player;
pub mod stats;
pub mod strategy;
pub mod turn;
pub mod uno;

pub use constants::{
    DEFAULT_HAND_SIZE, DEFAULT_POINTS_TO_WIN, MAX_PLAYERS, MIN_PLAYERS, TOTAL_CARDS_IN_DECK,
};
