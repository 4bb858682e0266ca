use crate::constants::{DEFAULT_HAND_SIZE, DEFAULT_POINTS_TO_WIN, NUMBER_CARDS_IN_DECK};
use crate::error::{Result, UnoError};

/// Rules that may differ between games.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GameConfig {
    /// Cumulative points that end the game.
    pub points_to_win: u32,
    /// Cards dealt to each player at the start of a round.
    pub hand_size: usize,
}

impl GameConfig {
    pub fn with_points_to_win(mut self, points_to_win: u32) -> Self {
        self.points_to_win = points_to_win;
        self
    }

    pub fn with_hand_size(mut self, hand_size: usize) -> Self {
        self.hand_size = hand_size;
        self
    }

    /// Checks that every hand gets a card and that, after dealing, the draw
    /// pile still holds a number card for the first discard even if every
    /// action card is left in it.
    pub fn validate(&self, players: usize) -> Result<()> {
        let dealt = self.hand_size.saturating_mul(players);
        if self.hand_size == 0 || dealt >= NUMBER_CARDS_IN_DECK {
            return Err(UnoError::InvalidHandSize {
                hand_size: self.hand_size,
                players,
            });
        }
        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            points_to_win: DEFAULT_POINTS_TO_WIN,
            hand_size: DEFAULT_HAND_SIZE,
        }
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[test]
    fn default_config_plays_to_500_with_7_cards() {
        let config = GameConfig::default();
        assert_eq!(config.points_to_win, 500);
        assert_eq!(config.hand_size, 7);
    }

    #[test]
    fn setters_override_defaults() {
        let config = GameConfig::default()
            .with_points_to_win(100)
            .with_hand_size(5);
        assert_eq!(config, GameConfig { points_to_win: 100, hand_size: 5 });
    }

    #[rstest]
    #[case(7, 10)]
    #[case(37, 2)]
    #[case(1, 10)]
    fn hand_sizes_that_leave_a_first_discard_are_accepted(
        #[case] hand_size: usize,
        #[case] players: usize,
    ) {
        let config = GameConfig::default().with_hand_size(hand_size);
        assert!(config.validate(players).is_ok());
    }

    #[rstest]
    #[case(0, 4)]
    #[case(11, 10)]
    #[case(8, 10)]
    #[case(38, 2)]
    #[case(usize::MAX, 3)]
    fn hand_sizes_the_deck_cannot_cover_are_rejected(
        #[case] hand_size: usize,
        #[case] players: usize,
    ) {
        let config = GameConfig::default().with_hand_size(hand_size);
        assert!(matches!(
            config.validate(players),
            Err(UnoError::InvalidHandSize { hand_size: h, players: p }) if h == hand_size && p == players
        ));
    }
}
