#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Direction {
    #[default]
    Forward,
    Reverse,
}

impl Direction {
    pub fn reversed(self) -> Self {
        match self {
            Direction::Forward => Direction::Reverse,
            Direction::Reverse => Direction::Forward,
        }
    }

    /// The index one step away from `index` in a circle of `players_count`.
    pub fn step(self, index: usize, players_count: usize) -> usize {
        match self {
            Direction::Forward => (index + 1) % players_count,
            Direction::Reverse => (index + players_count - 1) % players_count,
        }
    }
}

/// Where the engine is within the current player's turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TurnState {
    AwaitingTurn,
    PlayingCard,
    ForcedDraw,
    AdvanceTurn,
    GameOver { winner: usize },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TurnActionResult {
    Neutral,
    Skip,
    Reverse,
    Draw,
    DrawFailed,
}
