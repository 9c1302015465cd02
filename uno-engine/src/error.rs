use thiserror::Error;

#[derive(Error, Debug)]
pub enum UnoError {
    #[error("Not enough players")]
    NotEnoughPlayers,
    #[error("Card index {index} is out of range for a hand of {hand_size}")]
    HandIndexOutOfRange { index: usize, hand_size: usize },
    #[error("Input closed before the game finished")]
    InputClosed,
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T, E = UnoError> = std::result::Result<T, E>;
