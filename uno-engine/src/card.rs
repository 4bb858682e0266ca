use core::fmt;
use std::fmt::Display;

use strum_macros::{Display, EnumIter};

#[derive(Clone, Copy, Debug, Display, EnumIter, PartialEq, Eq, Hash)]
pub enum CardColor {
    Red,
    Green,
    Yellow,
    Blue,
    Any,
}

impl CardColor {
    /// The colors a wild card can be called as.
    pub const CONCRETE: [CardColor; 4] = [
        CardColor::Red,
        CardColor::Green,
        CardColor::Yellow,
        CardColor::Blue,
    ];

    pub fn is_concrete(&self) -> bool {
        !matches!(self, CardColor::Any)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CardKind {
    Number(u8),
    Skip,
    Reverse,
    DrawTwo,
    Wild,
    WildDrawFour,
}

impl CardKind {
    pub fn value(&self) -> u32 {
        match self {
            CardKind::Number(number) => u32::from(*number),
            CardKind::Skip | CardKind::Reverse | CardKind::DrawTwo => 20,
            CardKind::Wild | CardKind::WildDrawFour => 50,
        }
    }

    pub fn is_action(&self) -> bool {
        !matches!(self, CardKind::Number(_))
    }

    pub fn is_wild(&self) -> bool {
        matches!(self, CardKind::Wild | CardKind::WildDrawFour)
    }
}

impl Display for CardKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CardKind::Number(number) => write!(f, "{number}"),
            CardKind::Skip => write!(f, "Skip"),
            CardKind::Reverse => write!(f, "Reverse"),
            CardKind::DrawTwo => write!(f, "Draw Two"),
            CardKind::Wild => write!(f, "Wild"),
            CardKind::WildDrawFour => write!(f, "Wild Draw Four"),
        }
    }
}

/// A single physical card.
///
/// Point value and the action flag are derived from [`CardKind`] on every call,
/// so the only mutable part of a card is the color a wild card was called as.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Card {
    pub color: CardColor,
    pub kind: CardKind,
}

impl Card {
    pub fn new(color: CardColor, kind: CardKind) -> Self {
        Self { color, kind }
    }

    pub fn number(color: CardColor, number: u8) -> Self {
        Self::new(color, CardKind::Number(number))
    }

    pub fn wild() -> Self {
        Self::new(CardColor::Any, CardKind::Wild)
    }

    pub fn wild_draw_four() -> Self {
        Self::new(CardColor::Any, CardKind::WildDrawFour)
    }

    pub fn value(&self) -> u32 {
        self.kind.value()
    }

    pub fn is_action(&self) -> bool {
        self.kind.is_action()
    }

    pub fn is_wild(&self) -> bool {
        self.kind.is_wild()
    }

    /// Whether this card, as held in a hand, may be put on `active`.
    pub fn can_be_played_on(&self, active: &Card) -> bool {
        self.color == CardColor::Any || self.color == active.color || self.kind == active.kind
    }

    /// Whether this card, as returned by a player, is a legal play on `active`.
    ///
    /// Wild cards must already carry the called color at this point.
    pub fn is_legal_play_on(&self, active: &Card) -> bool {
        if self.is_wild() {
            self.color.is_concrete()
        } else {
            self.can_be_played_on(active)
        }
    }

    pub fn call_color(&mut self, color: CardColor) {
        if self.is_wild() {
            self.color = color;
        }
    }

    pub fn reset_color(&mut self) {
        if self.is_wild() {
            self.color = CardColor::Any;
        }
    }
}

impl Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.kind.is_wild(), self.color) {
            (true, CardColor::Any) => write!(f, "{}", self.kind),
            (true, color) => write!(f, "{} ({color})", self.kind),
            (false, color) => write!(f, "{color} {}", self.kind),
        }
    }
}
