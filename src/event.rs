use serde::{Deserialize, Serialize};

use crate::card::{Card, Color};
use crate::player::PlayerNumber;

/// What happened at the table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum EventKind {
    Played(Card),
    /// `skipped` is set when the draw was a DrawTwo/DrawFour penalty that also cost the turn.
    Drew { cards: Vec<Card>, skipped: bool },
    /// `opening` is set when the color was negotiated for a wild starter card.
    ColorChosen { color: Color, opening: bool },
    UnDeclared,
    Skipped,
    Won,
}

/// A single log entry attributed to the player it concerns.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub player: PlayerNumber,
    pub kind: EventKind,
}

/// Notification hooks a host may attach sound to.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Cue {
    CardPlay,
    Error,
    Skip,
}

impl Event {
    pub fn new(player: PlayerNumber, kind: EventKind) -> Self {
        Self { player, kind }
    }

    pub fn cue(&self) -> Option<Cue> {
        match self.kind {
            EventKind::Played(_) => Some(Cue::CardPlay),
            EventKind::Skipped => Some(Cue::Skip),
            _ => None,
        }
    }

    /// Number of cards drawn, zero for every other kind.
    pub fn drawn_count(&self) -> usize {
        match &self.kind {
            EventKind::Drew { cards, .. } => cards.len(),
            _ => 0,
        }
    }
}

/// Append-only record of game events. The engine writes, hosts read or drain.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventLog {
    entries: Vec<Event>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, player: PlayerNumber, kind: EventKind) {
        log::debug!("event p{player}: {kind:?}");
        self.entries.push(Event::new(player, kind));
    }

    pub fn entries(&self) -> &[Event] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn last(&self) -> Option<&Event> {
        self.entries.last()
    }

    /// Hands all entries to the caller; the log starts over empty.
    pub fn drain(&mut self) -> Vec<Event> {
        std::mem::take(&mut self.entries)
    }

    pub(crate) fn clear(&mut self) {
        self.entries.clear();
    }
}
