use core::fmt;
use std::fmt::Display;

use strum_macros::{Display, EnumCount as EnumCountMacro, EnumIter, EnumString};

#[derive(Clone, Copy, Debug, Display, EnumString, EnumCountMacro, EnumIter, PartialEq, Eq, Hash)]
pub enum CardColor {
    Red,
    Blue,
    Green,
    Yellow,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Rank {
    Number(u8),
    Skip,
    Reverse,
    DrawTwo,
}

impl Rank {
    /// Every rank a color carries, in the order the deck is built.
    pub const ALL: [Rank; 13] = [
        Rank::Number(0),
        Rank::Number(1),
        Rank::Number(2),
        Rank::Number(3),
        Rank::Number(4),
        Rank::Number(5),
        Rank::Number(6),
        Rank::Number(7),
        Rank::Number(8),
        Rank::Number(9),
        Rank::Skip,
        Rank::Reverse,
        Rank::DrawTwo,
    ];
}

impl Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rank::Number(number) => write!(f, "{number}"),
            Rank::Skip => write!(f, "Skip"),
            Rank::Reverse => write!(f, "Reverse"),
            Rank::DrawTwo => write!(f, "Draw Two"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Card {
    pub color: CardColor,
    pub rank: Rank,
}

impl Card {
    pub fn new(color: CardColor, rank: Rank) -> Self {
        Self { color, rank }
    }

    /// A card can go on top of `other` when it shares its color or its rank.
    pub fn matches(&self, other: &Card) -> bool {
        self.color == other.color || self.rank == other.rank
    }
}

impl Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.color, self.rank)
    }
}
