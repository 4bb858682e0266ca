use core::fmt;
use std::fmt::Display;

use rand::RngCore;

use crate::card::Card;
use crate::hand::Hand;
use crate::strategy::{Strategy, StrategyKind};

#[derive(Debug)]
pub struct Player {
    pub id: u64,
    name: Option<String>,
    pub hand: Hand,
    pub(crate) points: u32,
    strategy: Box<dyn Strategy>,
}

impl Player {
    pub fn new(id: u64, name: Option<String>, strategy: Box<dyn Strategy>) -> Self {
        Self {
            id,
            name,
            hand: Hand::new(),
            points: 0,
            strategy,
        }
    }

    pub fn with_kind(id: u64, name: Option<String>, kind: StrategyKind) -> Self {
        Self::new(id, name, kind.build())
    }

    pub fn display_name(&self) -> String {
        match &self.name {
            Some(name) => name.clone(),
            None => format!("Player {}", self.id),
        }
    }

    pub fn strategy_kind(&self) -> StrategyKind {
        self.strategy.kind()
    }

    pub fn cards_count(&self) -> usize {
        self.hand.cards_count()
    }

    /// Points won over the rounds played so far.
    pub fn points(&self) -> u32 {
        self.points
    }

    pub fn hand_points(&self) -> u32 {
        self.hand.points()
    }

    pub fn add_card(&mut self, card: Card) {
        self.hand.add_card(card);
    }

    /// Asks the strategy for a card to put on `active_card`. The card has
    /// already left the hand when this returns.
    pub fn decide(&mut self, active_card: &Card, rng: &mut dyn RngCore) -> Option<Card> {
        self.strategy.decide(&mut self.hand, active_card, rng)
    }

    pub(crate) fn take_cards(&mut self) -> Vec<Card> {
        self.hand.take_all()
    }
}

impl Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.display_name(), self.hand)
    }
}
