use rand::{rngs::StdRng, SeedableRng};
use tracing::{debug, info, warn};

use crate::card::{Card, Rank};
use crate::deck::Deck;
use crate::error::{Result, UnoError};
use crate::io::{GameIo, HandPrompt};
use crate::player::Player;
use crate::turn::{Direction, TurnActionResult, TurnState};

#[derive(Debug)]
pub struct Uno {
    draw_pile: Deck,
    discard_pile: Deck,
    players: Vec<Player>,
    current_turn_player_index: usize,
    direction: Direction,
    state: TurnState,
    turns_played: usize,
    rng: StdRng,
}

impl Uno {
    pub fn new(player_names: Vec<String>) -> Result<Self> {
        Self::with_rng(player_names, StdRng::from_entropy())
    }

    /// Same as [`Uno::new`], but every shuffle is reproducible from `seed`.
    pub fn with_seed(player_names: Vec<String>, seed: u64) -> Result<Self> {
        Self::with_rng(player_names, StdRng::seed_from_u64(seed))
    }

    fn with_rng(player_names: Vec<String>, mut rng: StdRng) -> Result<Self> {
        if player_names.is_empty() {
            return Err(UnoError::NotEnoughPlayers);
        }

        let mut draw_pile = Deck::standard();
        draw_pile.shuffle(&mut rng);

        let players = player_names.into_iter().map(Player::new).collect::<Vec<_>>();
        debug!(players = players.len(), "created game");

        Ok(Uno {
            draw_pile,
            discard_pile: Deck::default(),
            players,
            current_turn_player_index: 0,
            direction: Direction::Forward,
            state: TurnState::AwaitingTurn,
            turns_played: 0,
            rng,
        })
    }

    /// Announces the game and deals `hand_size` cards to everyone.
    pub fn start(&mut self, io: &mut impl GameIo, hand_size: usize) {
        info!(players = self.players.len(), hand_size, "starting game");
        io.announce("UNO Game Started!");
        self.deal(hand_size);
    }

    /// Deals `count` rounds of one card per player, then turns one card over
    /// to start the discard pile. Players simply miss out once the draw
    /// pile runs dry.
    pub fn deal(&mut self, count: usize) {
        for _ in 0..count {
            for player in &mut self.players {
                if let Some(card) = self.draw_pile.draw() {
                    player.add_card(card);
                }
            }
        }

        match self.draw_pile.draw() {
            Some(card) => {
                debug!(%card, "turned over first discard");
                self.discard_pile.add(card);
            }
            None => warn!("draw pile ran out while dealing, discard pile starts empty"),
        }
    }

    /// Runs until someone wins and returns the winner's index.
    pub fn play(&mut self, io: &mut impl GameIo) -> Result<usize> {
        loop {
            if let TurnState::GameOver { winner } = self.step(io)? {
                return Ok(winner);
            }
        }
    }

    /// Like [`Uno::play`], but gives up once `max_turns` turns have passed.
    pub fn play_for(&mut self, io: &mut impl GameIo, max_turns: usize) -> Result<Option<usize>> {
        while self.turns_played < max_turns {
            if let TurnState::GameOver { winner } = self.step(io)? {
                return Ok(Some(winner));
            }
        }
        Ok(None)
    }

    /// Performs a single state transition and returns the new state.
    pub fn step(&mut self, io: &mut impl GameIo) -> Result<TurnState> {
        self.state = match self.state {
            TurnState::AwaitingTurn => self.begin_turn(io),
            TurnState::PlayingCard => self.play_selected_card(io)?,
            TurnState::ForcedDraw => self.forced_draw(io),
            TurnState::AdvanceTurn => {
                self.move_turn_n_players_ahead(1);
                self.turns_played += 1;
                TurnState::AwaitingTurn
            }
            state @ TurnState::GameOver { .. } => state,
        };
        Ok(self.state)
    }

    /// Whether the player holds any card matching the top of the discard
    /// pile. Always false while the discard pile is empty.
    pub fn can_play(&self, player_index: usize) -> bool {
        match (self.get_top_card(), self.players.get(player_index)) {
            (Some(top), Some(player)) => !player.playable_indices(top).is_empty(),
            _ => false,
        }
    }

    pub fn is_valid_play(&self, card: &Card) -> bool {
        self.get_top_card().map_or(false, |top| card.matches(top))
    }

    /// Moves every discard except the top one back into the draw pile and
    /// shuffles it.
    pub fn reshuffle(&mut self) {
        let recycled = self.discard_pile.take_all_but_top();
        if recycled.is_empty() {
            warn!("nothing to recycle from the discard pile");
        }

        debug!(count = recycled.len(), "recycling discard pile");
        self.draw_pile.add_all(recycled);
        self.draw_pile.shuffle(&mut self.rng);
    }

    pub fn get_players(&self) -> &[Player] {
        &self.players
    }

    pub fn get_player(&self, index: usize) -> Option<&Player> {
        self.players.get(index)
    }

    pub fn get_current_turn_player_index(&self) -> usize {
        self.current_turn_player_index
    }

    pub fn get_current_turn_player(&self) -> &Player {
        &self.players[self.current_turn_player_index]
    }

    pub fn get_next_turn_player_index(&self) -> usize {
        self.direction
            .step(self.current_turn_player_index, self.players.len())
    }

    pub fn get_direction(&self) -> Direction {
        self.direction
    }

    pub fn get_state(&self) -> TurnState {
        self.state
    }

    pub fn get_turns_played(&self) -> usize {
        self.turns_played
    }

    pub fn get_top_card(&self) -> Option<&Card> {
        self.discard_pile.peek_top()
    }

    pub fn get_draw_pile(&self) -> &Deck {
        &self.draw_pile
    }

    pub fn get_discard_pile(&self) -> &Deck {
        &self.discard_pile
    }

    fn begin_turn(&mut self, io: &mut impl GameIo) -> TurnState {
        let player = self.get_current_turn_player();
        let top = self
            .get_top_card()
            .map_or_else(|| "none".to_string(), Card::to_string);

        io.announce(&format!("It's {}'s turn.", player.name()));
        io.announce(&format!("Card on top of the discard pile: {top}"));
        io.announce(&format!("Your hand: {}", describe_hand(player.hand())));

        if player.cards_count() == 0 {
            info!(winner = player.name(), turns = self.turns_played, "game over");
            io.announce(&format!("{} wins!", player.name()));
            io.announce("Game Over!");
            return TurnState::GameOver {
                winner: self.current_turn_player_index,
            };
        }

        if self.can_play(self.current_turn_player_index) {
            io.announce("Choose a card to play (Enter the card index):");
            TurnState::PlayingCard
        } else {
            io.announce(&format!("{}, you cannot play. Drawing a card.", player.name()));
            TurnState::ForcedDraw
        }
    }

    fn play_selected_card(&mut self, io: &mut impl GameIo) -> Result<TurnState> {
        let player_index = self.current_turn_player_index;
        let player = &self.players[player_index];
        let hand_size = player.cards_count();

        let raw_index = io.request_hand_index(&HandPrompt {
            player_name: player.name(),
            hand_size,
        })?;

        let Some(index) = usize::try_from(raw_index).ok().filter(|index| *index < hand_size) else {
            io.announce("Invalid card index. Please choose a valid card index.");
            return Ok(TurnState::PlayingCard);
        };

        let selected = player.hand()[index];
        if !self.is_valid_play(&selected) {
            io.announce("Invalid card selection. Please choose a playable card.");
            return Ok(TurnState::PlayingCard);
        }

        let card = self.players[player_index].remove_card(index)?;
        self.discard_pile.add(card);

        let result = self.process_special_effect(&card, io);
        debug!(player = player_index, %card, ?result, "played card");

        Ok(TurnState::AdvanceTurn)
    }

    fn process_special_effect(&mut self, card: &Card, io: &mut impl GameIo) -> TurnActionResult {
        match card.rank {
            Rank::Skip => {
                self.move_turn_n_players_ahead(1);
                TurnActionResult::Skip
            }
            Rank::Reverse => {
                self.direction = self.direction.reversed();
                TurnActionResult::Reverse
            }
            Rank::DrawTwo => {
                let next_player_index = self.get_next_turn_player_index();
                match self.draw_pile.draw() {
                    Some(drawn) => {
                        let next_player = &mut self.players[next_player_index];
                        next_player.add_card(drawn);
                        next_player.add_card(drawn);
                        io.announce(&format!("{} drew two cards.", next_player.name()));
                        TurnActionResult::Draw
                    }
                    None => {
                        io.announce("Deck is empty. No cards drawn.");
                        TurnActionResult::DrawFailed
                    }
                }
            }
            Rank::Number(_) => TurnActionResult::Neutral,
        }
    }

    fn forced_draw(&mut self, io: &mut impl GameIo) -> TurnState {
        match self.draw_pile.draw() {
            Some(card) => {
                let player = &mut self.players[self.current_turn_player_index];
                player.add_card(card);
                io.announce(&format!("{} drew {}", player.name(), card));
            }
            None => {
                io.announce("Deck is empty. Shuffling the discard pile to form a new deck.");
                self.reshuffle();
            }
        }
        TurnState::AdvanceTurn
    }

    fn move_turn_n_players_ahead(&mut self, n: usize) {
        for _ in 0..n {
            self.current_turn_player_index = self.get_next_turn_player_index();
        }
        debug!(
            current = self.current_turn_player_index,
            direction = ?self.direction,
            "moved turn"
        );
    }
}

fn describe_hand(hand: &[Card]) -> String {
    if hand.is_empty() {
        return "(empty)".to_string();
    }

    hand.iter()
        .enumerate()
        .map(|(index, card)| format!("{index}) {card}"))
        .collect::<Vec<_>>()
        .join(", ")
}
