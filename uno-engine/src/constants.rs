use strum::EnumCount;

use crate::card::{CardColor, Rank};

pub(crate) const COLORS_IN_DECK: usize = CardColor::COUNT;
pub(crate) const RANKS_PER_COLOR: usize = Rank::ALL.len();

pub const TOTAL_CARDS_IN_DECK: usize = COLORS_IN_DECK * RANKS_PER_COLOR;

pub const STARTING_HAND_SIZE: usize = 7;
