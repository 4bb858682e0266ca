use core::fmt;
use std::fmt::Display;

use crate::card::Card;

/// Cards held by one player, with a running point total.
///
/// `points` is kept in step with every add/remove and is never recomputed
/// from the cards.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Hand {
    cards: Vec<Card>,
    points: u32,
}

impl Hand {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    pub fn cards_count(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn points(&self) -> u32 {
        self.points
    }

    pub fn add_card(&mut self, card: Card) {
        self.points += card.value();
        self.cards.push(card);
    }

    /// Removes the card at `index`, or returns `None` if there is none.
    pub fn remove_card(&mut self, index: usize) -> Option<Card> {
        if index >= self.cards.len() {
            return None;
        }
        let card = self.cards.remove(index);
        self.points -= card.value();
        Some(card)
    }

    /// Empties the hand, handing back every card it held.
    pub fn take_all(&mut self) -> Vec<Card> {
        self.points = 0;
        std::mem::take(&mut self.cards)
    }
}

impl Extend<Card> for Hand {
    fn extend<T: IntoIterator<Item = Card>>(&mut self, iter: T) {
        for card in iter {
            self.add_card(card);
        }
    }
}

impl FromIterator<Card> for Hand {
    fn from_iter<T: IntoIterator<Item = Card>>(iter: T) -> Self {
        let mut hand = Hand::new();
        hand.extend(iter);
        hand
    }
}

impl Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cards = self
            .cards
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ");
        write!(f, "[{cards}]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::{CardColor, CardKind};

    #[test]
    fn points_follow_adds_and_removes() {
        let mut hand = Hand::new();
        assert_eq!(hand.points(), 0);

        hand.add_card(Card::number(CardColor::Red, 7));
        hand.add_card(Card::new(CardColor::Blue, CardKind::Skip));
        hand.add_card(Card::wild());
        assert_eq!(hand.points(), 77);

        let skip = hand.remove_card(1).expect("Index 1 holds the skip card.");
        assert_eq!(skip.kind, CardKind::Skip);
        assert_eq!(hand.points(), 57);
        assert_eq!(hand.cards_count(), 2);
    }

    #[test]
    fn remove_out_of_bounds_leaves_hand_alone() {
        let mut hand: Hand = [Card::number(CardColor::Green, 3)].into_iter().collect();

        assert_eq!(hand.remove_card(4), None);
        assert_eq!(hand.points(), 3);
        assert_eq!(hand.cards_count(), 1);
    }

    #[test]
    fn take_all_resets_points() {
        let mut hand: Hand = [Card::wild_draw_four(), Card::number(CardColor::Red, 2)]
            .into_iter()
            .collect();

        let cards = hand.take_all();

        assert_eq!(cards.len(), 2);
        assert!(hand.is_empty());
        assert_eq!(hand.points(), 0);
    }

    #[test]
    fn return_correct_string_for_hand() {
        let hand: Hand = [Card::number(CardColor::Red, 2), Card::wild()]
            .into_iter()
            .collect();
        assert_eq!(hand.to_string(), "[Red 2, Wild]");
    }
}
