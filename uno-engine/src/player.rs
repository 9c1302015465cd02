use crate::card::Card;
use crate::error::{Result, UnoError};

#[derive(Clone, Debug)]
pub struct Player {
    name: String,
    hand: Vec<Card>,
}

impl Player {
    pub fn new(name: String) -> Self {
        Self {
            name,
            hand: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn hand(&self) -> &[Card] {
        &self.hand
    }

    pub fn cards_count(&self) -> usize {
        self.hand.len()
    }

    pub fn add_card(&mut self, card: Card) {
        self.hand.push(card);
    }

    pub fn remove_card(&mut self, index: usize) -> Result<Card> {
        if index >= self.hand.len() {
            return Err(UnoError::HandIndexOutOfRange {
                index,
                hand_size: self.hand.len(),
            });
        }
        Ok(self.hand.remove(index))
    }

    /// Hand positions holding a card that may be played on `top`.
    pub fn playable_indices(&self, top: &Card) -> Vec<usize> {
        self.hand
            .iter()
            .enumerate()
            .filter(|(_, card)| card.matches(top))
            .map(|(index, _)| index)
            .collect()
    }
}
