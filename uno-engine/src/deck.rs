use rand::{seq::SliceRandom, Rng};
use strum::IntoEnumIterator;

use crate::{
    card::{Card, CardColor, Rank},
    constants::*,
};

/// An ordered pile of cards. The end of the vector is the top of the pile.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Deck(pub(crate) Vec<Card>);

impl Deck {
    /// One card for every color and rank pair, unshuffled.
    pub fn standard() -> Self {
        let mut cards = Vec::with_capacity(TOTAL_CARDS_IN_DECK);

        for color in CardColor::iter() {
            for rank in Rank::ALL {
                cards.push(Card::new(color, rank));
            }
        }

        Self(cards)
    }

    pub fn add(&mut self, card: Card) {
        self.0.push(card);
    }

    pub fn add_all(&mut self, cards: impl IntoIterator<Item = Card>) {
        self.0.extend(cards);
    }

    pub fn draw(&mut self) -> Option<Card> {
        self.0.pop()
    }

    pub fn peek_top(&self) -> Option<&Card> {
        self.0.last()
    }

    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.0.shuffle(rng);
    }

    /// Removes everything except the top card, bottom first.
    pub(crate) fn take_all_but_top(&mut self) -> Vec<Card> {
        let keep_from = self.0.len().saturating_sub(1);
        self.0.drain(..keep_from).collect()
    }

    pub fn cards_count(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn cards(&self) -> &[Card] {
        &self.0
    }
}

impl From<Vec<Card>> for Deck {
    fn from(cards: Vec<Card>) -> Self {
        Self(cards)
    }
}
