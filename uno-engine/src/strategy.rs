use std::fmt::Debug;

use rand::{Rng, RngCore};
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString};

use crate::card::{Card, CardColor};
use crate::hand::Hand;

#[derive(Clone, Copy, Debug, Display, EnumString, EnumIter, PartialEq, Eq)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum StrategyKind {
    General,
    Random,
}

impl StrategyKind {
    pub fn build(self) -> Box<dyn Strategy> {
        match self {
            StrategyKind::General => Box::new(HighestValueStrategy),
            StrategyKind::Random => Box::new(RandomStrategy),
        }
    }
}

/// Picks the card a player puts on the discard pile.
///
/// An implementation removes the chosen card from `hand` before returning it,
/// and a returned wild card must already carry the called color.
pub trait Strategy: Debug {
    fn kind(&self) -> StrategyKind;

    fn decide(&mut self, hand: &mut Hand, active_card: &Card, rng: &mut dyn RngCore)
        -> Option<Card>;
}

fn random_color(rng: &mut dyn RngCore) -> CardColor {
    CardColor::CONCRETE[rng.gen_range(0..CardColor::CONCRETE.len())]
}

/// Plays the most valuable playable card and calls the color it holds most of.
#[derive(Clone, Copy, Debug, Default)]
pub struct HighestValueStrategy;

impl HighestValueStrategy {
    fn most_common_color(hand: &Hand) -> CardColor {
        let mut best = (CardColor::Red, 0);
        for color in CardColor::iter() {
            let count = hand.iter().filter(|card| card.color == color).count();
            if count > best.1 {
                best = (color, count);
            }
        }
        best.0
    }
}

impl Strategy for HighestValueStrategy {
    fn kind(&self) -> StrategyKind {
        StrategyKind::General
    }

    fn decide(
        &mut self,
        hand: &mut Hand,
        active_card: &Card,
        rng: &mut dyn RngCore,
    ) -> Option<Card> {
        let mut selected: Option<(usize, u32)> = None;
        for (index, card) in hand.iter().enumerate() {
            if !card.can_be_played_on(active_card) {
                continue;
            }
            if selected.map_or(true, |(_, value)| card.value() > value) {
                selected = Some((index, card.value()));
            }
        }
        let (index, _) = selected?;

        let called_color = Self::most_common_color(hand);
        let mut card = hand.remove_card(index)?;

        if card.is_wild() {
            let color = if called_color.is_concrete() {
                called_color
            } else {
                random_color(rng)
            };
            card.call_color(color);
        }

        Some(card)
    }
}

/// Plays any playable card, chosen uniformly.
#[derive(Clone, Copy, Debug, Default)]
pub struct RandomStrategy;

impl Strategy for RandomStrategy {
    fn kind(&self) -> StrategyKind {
        StrategyKind::Random
    }

    fn decide(
        &mut self,
        hand: &mut Hand,
        active_card: &Card,
        rng: &mut dyn RngCore,
    ) -> Option<Card> {
        let playable = hand
            .iter()
            .enumerate()
            .filter(|(_, card)| card.can_be_played_on(active_card))
            .map(|(index, _)| index)
            .collect::<Vec<_>>();
        if playable.is_empty() {
            return None;
        }

        let index = playable[rng.gen_range(0..playable.len())];
        let mut card = hand.remove_card(index)?;
        if card.is_wild() {
            card.call_color(random_color(rng));
        }
        Some(card)
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use rand::{rngs::StdRng, SeedableRng};

    use super::*;
    use crate::card::CardKind;

    fn hand_of(cards: &[Card]) -> Hand {
        cards.iter().copied().collect()
    }

    #[test]
    fn general_plays_most_valuable_playable_card() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut hand = hand_of(&[
            Card::number(CardColor::Red, 3),
            Card::new(CardColor::Red, CardKind::Skip),
            Card::number(CardColor::Blue, 9),
            Card::number(CardColor::Green, 5),
        ]);
        let active = Card::number(CardColor::Red, 5);

        let card = HighestValueStrategy.decide(&mut hand, &active, &mut rng);

        assert_eq!(card, Some(Card::new(CardColor::Red, CardKind::Skip)));
        assert_eq!(hand.cards_count(), 3);
        assert_eq!(hand.points(), 17);
    }

    #[test]
    fn general_keeps_first_card_on_equal_value() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut hand = hand_of(&[
            Card::number(CardColor::Red, 5),
            Card::number(CardColor::Yellow, 5),
        ]);
        let active = Card::number(CardColor::Blue, 5);

        let card = HighestValueStrategy.decide(&mut hand, &active, &mut rng);

        assert_eq!(card, Some(Card::number(CardColor::Red, 5)));
    }

    #[test]
    fn general_returns_none_without_playable_card() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut hand = hand_of(&[Card::number(CardColor::Blue, 2)]);
        let active = Card::number(CardColor::Red, 5);

        assert_eq!(HighestValueStrategy.decide(&mut hand, &active, &mut rng), None);
        assert_eq!(hand.cards_count(), 1);
    }

    #[test]
    fn general_calls_most_common_color_for_wild() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut hand = hand_of(&[
            Card::wild(),
            Card::number(CardColor::Green, 1),
            Card::number(CardColor::Green, 2),
            Card::number(CardColor::Blue, 2),
        ]);
        let active = Card::number(CardColor::Red, 5);

        let card = HighestValueStrategy
            .decide(&mut hand, &active, &mut rng)
            .expect("The wild card is playable.");

        assert_eq!(card.kind, CardKind::Wild);
        assert_eq!(card.color, CardColor::Green);
    }

    #[test]
    fn general_calls_concrete_color_when_only_wilds_are_held() {
        let mut rng = StdRng::seed_from_u64(9);
        let mut hand = hand_of(&[Card::wild_draw_four()]);
        let active = Card::number(CardColor::Red, 5);

        let card = HighestValueStrategy
            .decide(&mut hand, &active, &mut rng)
            .expect("The wild card is playable.");

        assert!(card.color.is_concrete());
        assert!(hand.is_empty());
    }

    #[test]
    fn random_only_plays_playable_cards() {
        let mut rng = StdRng::seed_from_u64(5);
        let active = Card::number(CardColor::Yellow, 4);

        for _ in 0..20 {
            let mut hand = hand_of(&[
                Card::number(CardColor::Yellow, 1),
                Card::number(CardColor::Red, 4),
                Card::number(CardColor::Blue, 8),
                Card::wild(),
            ]);
            let card = RandomStrategy
                .decide(&mut hand, &active, &mut rng)
                .expect("Three cards are playable.");

            assert!(card.is_legal_play_on(&active));
            assert_eq!(hand.cards_count(), 3);
        }
    }

    #[test]
    fn strategy_kind_parses_case_insensitively() {
        assert_eq!(StrategyKind::from_str("general").unwrap(), StrategyKind::General);
        assert_eq!(StrategyKind::from_str("Random").unwrap(), StrategyKind::Random);
        assert!(StrategyKind::from_str("llm").is_err());
        assert_eq!(StrategyKind::Random.build().kind(), StrategyKind::Random);
    }
}
