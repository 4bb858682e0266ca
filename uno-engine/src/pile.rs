use std::collections::VecDeque;

use rand::{seq::SliceRandom, Rng};
use tracing::debug;

use crate::card::Card;
use crate::error::{Result, UnoError};
use crate::hand::Hand;

/// The draw pile and the discard pile.
///
/// The front of the draw pile is the next card dealt, the back of the discard
/// pile is the active card.
#[derive(Clone, Debug, Default)]
pub struct Piles {
    draw_pile: VecDeque<Card>,
    discard_pile: Vec<Card>,
}

impl Piles {
    pub fn new(cards: Vec<Card>) -> Self {
        Self {
            draw_pile: cards.into(),
            discard_pile: Vec::new(),
        }
    }

    pub fn from_parts(draw_pile: Vec<Card>, discard_pile: Vec<Card>) -> Self {
        Self {
            draw_pile: draw_pile.into(),
            discard_pile,
        }
    }

    pub fn draw_pile(&self) -> &VecDeque<Card> {
        &self.draw_pile
    }

    pub fn discard_pile(&self) -> &[Card] {
        &self.discard_pile
    }

    pub fn cards_count(&self) -> usize {
        self.draw_pile.len() + self.discard_pile.len()
    }

    pub fn top_card(&self) -> Result<&Card> {
        self.discard_pile.last().ok_or(UnoError::EmptyPile)
    }

    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.draw_pile.make_contiguous().shuffle(rng);
    }

    /// Takes the next card off the draw pile, rebuilding it from the discard
    /// pile first if it has run out.
    pub fn draw_card<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<Card> {
        if self.draw_pile.is_empty() {
            self.reshuffle(rng);
        }
        self.draw_pile.pop_front().ok_or(UnoError::DeckExhausted)
    }

    /// Draws `count` cards into `hand` one at a time, so a single call may
    /// rebuild the draw pile more than once.
    pub fn draw_into<R: Rng + ?Sized>(
        &mut self,
        hand: &mut Hand,
        count: usize,
        rng: &mut R,
    ) -> Result<()> {
        for _ in 0..count {
            let card = self.draw_card(rng)?;
            hand.add_card(card);
        }
        Ok(())
    }

    /// Moves everything under the active card back into the draw pile.
    fn reshuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let Some(top_card) = self.discard_pile.pop() else {
            return;
        };

        debug!(
            cards = self.discard_pile.len(),
            "draw pile is empty, reshuffling the discard pile"
        );

        self.draw_pile.extend(self.discard_pile.drain(..));
        self.discard_pile.push(top_card);

        self.shuffle(rng);
        self.draw_pile.iter_mut().for_each(Card::reset_color);
    }

    pub(crate) fn discard(&mut self, card: Card) {
        self.discard_pile.push(card);
    }

    /// Takes the front card of the draw pile without any reshuffling.
    pub(crate) fn deal_card(&mut self) -> Result<Card> {
        self.draw_pile.pop_front().ok_or(UnoError::DeckExhausted)
    }

    /// Starts a fresh discard pile and turns cards over until a non-action
    /// card is on top. Returns how many cards were turned over.
    pub(crate) fn flip_first_card(&mut self) -> Result<usize> {
        self.discard_pile.clear();
        loop {
            let card = self.deal_card()?;
            self.discard_pile.push(card);
            if !card.is_action() {
                return Ok(self.discard_pile.len());
            }
        }
    }

    /// Gathers the discard pile and `cards` into the draw pile and clears
    /// every called wild color.
    pub(crate) fn collect(&mut self, cards: impl IntoIterator<Item = Card>) {
        self.draw_pile.extend(self.discard_pile.drain(..));
        self.draw_pile.extend(cards);
        self.draw_pile.iter_mut().for_each(Card::reset_color);

        debug!(cards = self.draw_pile.len(), "collected cards into the draw pile");
    }
}
