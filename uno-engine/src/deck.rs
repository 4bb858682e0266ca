use crate::{
    card::{Card, CardColor, CardKind},
    constants::*,
};

/// Builds the full, unshuffled 108 card deck.
///
/// Cards come out color by color (Red, Green, Yellow, Blue), each color
/// starting with its numbers and ending with its action cards, followed by
/// the wild cards.
pub fn build_deck() -> Vec<Card> {
    let mut cards = Vec::with_capacity(TOTAL_CARDS_IN_DECK);

    for color in CardColor::CONCRETE {
        // Number Cards
        for number in NUMBER_CARDS_PER_COLOR {
            cards.push(Card::number(color, *number));
        }

        // Skip Cards
        for _ in 0..SKIP_CARDS_PER_COLOR {
            cards.push(Card::new(color, CardKind::Skip));
        }

        // Reverse Cards
        for _ in 0..REVERSE_CARDS_PER_COLOR {
            cards.push(Card::new(color, CardKind::Reverse));
        }

        // Draw Two Cards
        for _ in 0..DRAW_TWO_CARDS_PER_COLOR {
            cards.push(Card::new(color, CardKind::DrawTwo));
        }
    }

    for _ in 0..WILD_CARDS_IN_DECK {
        cards.push(Card::wild());
    }

    for _ in 0..WILD_DRAW_FOUR_CARDS_IN_DECK {
        cards.push(Card::wild_draw_four());
    }

    cards
}

#[cfg(test)]
mod tests {
    use super::*;

    fn count(deck: &[Card], predicate: impl Fn(&Card) -> bool) -> usize {
        deck.iter().filter(|card| predicate(card)).count()
    }

    #[test]
    fn correct_card_count_new_deck() {
        assert_eq!(build_deck().len(), TOTAL_CARDS_IN_DECK);
    }

    #[test]
    fn correct_point_value_distribution() {
        let deck = build_deck();

        assert_eq!(count(&deck, |card| card.value() == 50), 4 + 4);
        assert_eq!(count(&deck, |card| card.value() == 20), 24);
        assert_eq!(count(&deck, |card| !card.is_action()), 76);
    }

    #[test]
    fn each_color_has_one_zero_and_two_of_every_other_number() {
        let deck = build_deck();

        for color in CardColor::CONCRETE {
            assert_eq!(count(&deck, |card| *card == Card::number(color, 0)), 1);
            for number in 1..=9 {
                assert_eq!(count(&deck, |card| *card == Card::number(color, number)), 2);
            }
            for kind in [CardKind::Skip, CardKind::Reverse, CardKind::DrawTwo] {
                assert_eq!(count(&deck, |card| *card == Card::new(color, kind)), 2);
            }
        }
    }

    #[test]
    fn wild_cards_start_uncolored() {
        let deck = build_deck();

        assert_eq!(count(&deck, |card| card.kind == CardKind::Wild), 4);
        assert_eq!(count(&deck, |card| card.kind == CardKind::WildDrawFour), 4);
        assert!(deck
            .iter()
            .filter(|card| card.is_wild())
            .all(|card| card.color == CardColor::Any));
        assert!(deck
            .iter()
            .filter(|card| !card.is_wild())
            .all(|card| card.color.is_concrete()));
    }

    #[test]
    fn deck_order_is_color_major() {
        let deck = build_deck();

        assert_eq!(deck[0], Card::number(CardColor::Red, 0));
        assert_eq!(deck[25], Card::number(CardColor::Green, 0));
        assert_eq!(deck[107], Card::wild_draw_four());
    }
}
