use std::array::from_fn;

use serde::{Deserialize, Serialize};

use crate::card::{Card, CardId, Color};
use crate::error::GameError;
use crate::player::{PLAYER_COUNT, Player, PlayerNumber};

/// Next seat along the direction of play.
///
/// Seats are fixed around the table, so the ring is not numeric order:
/// clockwise 1 -> 4 -> 2 -> 3 -> 1, counter-clockwise 1 -> 3 -> 2 -> 4 -> 1.
pub fn next_seat(player: PlayerNumber, clockwise: bool) -> PlayerNumber {
    match (clockwise, player) {
        (true, 1) => 4,
        (true, 4) => 2,
        (true, 2) => 3,
        (false, 1) => 3,
        (false, 3) => 2,
        (false, 2) => 4,
        _ => 1,
    }
}

/// Status of the entire game.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum GameStatus {
    Ongoing,
    Finished { winner: PlayerNumber },
}

/// Authoritative table state, excluding the face-down deck.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub(crate) players: [Player; PLAYER_COUNT],
    pub(crate) discard_pile: Vec<Card>,
    pub(crate) current_player: PlayerNumber,
    pub(crate) clockwise: bool,
    pub(crate) chosen_wild_color: Option<Color>,
    pub(crate) just_drawn: Option<CardId>,
    pub(crate) status: GameStatus,
    pub(crate) generation: u64,
    pub(crate) turn: u64,
}

impl GameState {
    pub(crate) fn new(names: &[String; PLAYER_COUNT], human: Option<PlayerNumber>, generation: u64) -> Self {
        let players = from_fn(|idx| {
            let number = idx as PlayerNumber + 1;
            Player::new(number, names[idx].clone(), human == Some(number))
        });
        Self {
            players,
            discard_pile: Vec::new(),
            current_player: 1,
            clockwise: true,
            chosen_wild_color: None,
            just_drawn: None,
            status: GameStatus::Ongoing,
            generation,
            turn: 0,
        }
    }

    pub fn players(&self) -> &[Player; PLAYER_COUNT] {
        &self.players
    }

    pub fn player(&self, number: PlayerNumber) -> Result<&Player, GameError> {
        Self::seat_index(number).map(|idx| &self.players[idx])
    }

    pub(crate) fn player_mut(&mut self, number: PlayerNumber) -> Result<&mut Player, GameError> {
        Self::seat_index(number).map(|idx| &mut self.players[idx])
    }

    pub fn discard_pile(&self) -> &[Card] {
        &self.discard_pile
    }

    pub fn top_card(&self) -> Option<&Card> {
        self.discard_pile.last()
    }

    pub fn current_player(&self) -> PlayerNumber {
        self.current_player
    }

    pub fn is_clockwise(&self) -> bool {
        self.clockwise
    }

    pub fn chosen_wild_color(&self) -> Option<Color> {
        self.chosen_wild_color
    }

    /// The only card the current player may play after drawing this turn.
    pub fn just_drawn(&self) -> Option<CardId> {
        self.just_drawn
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_game_over(&self) -> bool {
        matches!(self.status, GameStatus::Finished { .. })
    }

    pub fn winner(&self) -> Option<PlayerNumber> {
        match self.status {
            GameStatus::Finished { winner } => Some(winner),
            GameStatus::Ongoing => None,
        }
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn turn(&self) -> u64 {
        self.turn
    }

    /// Cards held in hands plus the discard pile.
    pub fn cards_on_table(&self) -> usize {
        self.players.iter().map(Player::card_count).sum::<usize>() + self.discard_pile.len()
    }

    pub(crate) fn advance_seat(&mut self) {
        self.current_player = next_seat(self.current_player, self.clockwise);
    }

    fn seat_index(number: PlayerNumber) -> Result<usize, GameError> {
        if (1..=PLAYER_COUNT as PlayerNumber).contains(&number) {
            Ok(number as usize - 1)
        } else {
            Err(GameError::InvalidPlayer(number))
        }
    }
}

/// What another seat looks like from across the table.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct OpponentView {
    pub number: PlayerNumber,
    pub name: String,
    pub hand_size: usize,
    pub is_current: bool,
}

/// Game state snapshot from one player's perspective, for bots and renderers.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct GameStateView {
    pub status: GameStatus,
    pub self_player: PlayerNumber,
    pub current_player: PlayerNumber,
    pub clockwise: bool,
    pub deck_count: usize,
    pub top_card: Option<Card>,
    pub chosen_wild_color: Option<Color>,
    pub just_drawn: Option<CardId>,
    pub players: Vec<OpponentView>,
    pub hand: Vec<Card>,
}
