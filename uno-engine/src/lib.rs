pub mod card;
pub mod constants;
pub mod deck;
pub mod error;
pub mod io;
pub mod player;
pub mod turn;
pub mod uno;
