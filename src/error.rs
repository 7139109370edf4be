use thiserror::Error;

use crate::card::{Card, CardId};
use crate::event::Cue;
use crate::player::PlayerNumber;

/// Errors that can occur when manipulating the game state.
///
/// Every error is raised before the engine mutates anything, so a failed call leaves the
/// table exactly as it was.
#[derive(Debug, Error)]
pub enum GameError {
    #[error("player number {0} is out of range")]
    InvalidPlayer(PlayerNumber),
    #[error("it is player {expected}'s turn, not player {actual}'s")]
    NotPlayersTurn {
        expected: PlayerNumber,
        actual: PlayerNumber,
    },
    #[error("invalid action: {0}")]
    InvalidAction(#[from] InvalidAction),
    #[error("game is already over")]
    GameOver,
    #[error("turn ticket no longer matches the table")]
    StaleTurn,
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(&'static str),
    #[error("failed to encode snapshot: {0}")]
    Snapshot(#[from] bincode::error::EncodeError),
}

impl GameError {
    /// Notification cue the host may play for this failure.
    pub fn cue(&self) -> Option<Cue> {
        match self {
            GameError::InvalidAction(_) => Some(Cue::Error),
            _ => None,
        }
    }
}

/// Details of invalid player actions.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidAction {
    #[error("card {0} is not in the player's hand")]
    CardNotInHand(CardId),
    #[error("{card} cannot be played on {top}")]
    IllegalPlay { card: Card, top: Card },
    #[error("only the just drawn card {0} may be played this turn")]
    MustPlayDrawnCard(CardId),
    #[error("cannot pass before drawing")]
    CannotPass,
}
