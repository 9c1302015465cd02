use std::collections::VecDeque;

use tracing::debug;

use crate::error::{Result, UnoError};

/// What the engine knows when it asks a player to pick a card.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HandPrompt<'a> {
    pub player_name: &'a str,
    pub hand_size: usize,
}

/// The outside world as seen by the engine: somewhere to print to and
/// someone to ask.
///
/// Request methods block until they have a syntactically valid answer. Range
/// checks against the game state stay with the engine.
pub trait GameIo {
    fn announce(&mut self, text: &str);

    fn request_player_count(&mut self) -> Result<usize>;

    /// `ordinal` is 1-based.
    fn request_player_name(&mut self, ordinal: usize) -> Result<String>;

    fn request_hand_index(&mut self, prompt: &HandPrompt<'_>) -> Result<i64>;
}

/// Asks for the number of players and then for each of their names.
pub fn collect_player_names(io: &mut impl GameIo) -> Result<Vec<String>> {
    let count = loop {
        match io.request_player_count()? {
            0 => io.announce("A game needs at least one player."),
            count => break count,
        }
    };

    let mut player_names = Vec::new();
    for ordinal in 1..=count {
        player_names.push(io.request_player_name(ordinal)?);
    }

    debug!(?player_names, "collected players");
    Ok(player_names)
}

/// A [`GameIo`] fed from queues, for tests and replays.
///
/// Once the scripted hand indices run out it walks through the hand one
/// index per request, so a playable card is always reached eventually.
#[derive(Debug, Default)]
pub struct ScriptedIo {
    player_counts: VecDeque<usize>,
    player_names: VecDeque<String>,
    hand_indices: VecDeque<i64>,
    fallback_index: usize,
    announcements: Vec<String>,
}

impl ScriptedIo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_player_counts(mut self, counts: impl IntoIterator<Item = usize>) -> Self {
        self.player_counts.extend(counts);
        self
    }

    pub fn with_player_names<S: Into<String>>(mut self, names: impl IntoIterator<Item = S>) -> Self {
        self.player_names.extend(names.into_iter().map(Into::into));
        self
    }

    pub fn with_hand_indices(mut self, indices: impl IntoIterator<Item = i64>) -> Self {
        self.hand_indices.extend(indices);
        self
    }

    pub fn announcements(&self) -> &[String] {
        &self.announcements
    }

    pub fn announced(&self, text: &str) -> bool {
        self.announcements.iter().any(|line| line == text)
    }
}

impl GameIo for ScriptedIo {
    fn announce(&mut self, text: &str) {
        self.announcements.push(text.to_string());
    }

    fn request_player_count(&mut self) -> Result<usize> {
        self.player_counts.pop_front().ok_or(UnoError::InputClosed)
    }

    fn request_player_name(&mut self, _ordinal: usize) -> Result<String> {
        self.player_names.pop_front().ok_or(UnoError::InputClosed)
    }

    fn request_hand_index(&mut self, prompt: &HandPrompt<'_>) -> Result<i64> {
        if let Some(index) = self.hand_indices.pop_front() {
            return Ok(index);
        }

        let index = self.fallback_index % prompt.hand_size.max(1);
        self.fallback_index += 1;
        Ok(index as i64)
    }
}
