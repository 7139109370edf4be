use serde::{Deserialize, Serialize};

use crate::card::{Card, CardId};
use crate::player::PlayerNumber;

/// Action available to a player during their turn.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum Action {
    /// Play the identified card from hand onto the discard pile.
    Play(CardId),
    /// Take the top card of the deck (or pass if a card was already drawn this turn).
    Draw,
    /// End the turn without playing.
    Pass,
}

impl Action {
    pub fn card(&self) -> Option<CardId> {
        match self {
            Action::Play(id) => Some(*id),
            _ => None,
        }
    }
}

/// Result of a draw request.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum DrawOutcome {
    /// A card was added to the hand. When not `playable` the turn already moved on.
    Drew { card: Card, playable: bool },
    /// The player had already drawn this turn, so the request passed the turn.
    Passed,
    /// Nothing left to draw; nothing changed.
    DeckEmpty,
}

/// Identifies one specific turn of one specific game.
///
/// Hosts that defer scripted turns capture a ticket when scheduling and hand it back when
/// the continuation runs; a reset or a turn change in between invalidates it.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct TurnTicket {
    pub generation: u64,
    pub turn: u64,
    pub player: PlayerNumber,
}
