use std::fmt;

use serde::{Deserialize, Serialize};

pub const DECK_SIZE: usize = 108;
pub const HAND_SIZE: usize = 7;
pub const MAX_RANK: u8 = 9;
pub const WILD_COUNT: usize = 4;
pub const DRAW_FOUR_COUNT: usize = 4;

/// One of the four suit colors. Wild cards carry no color.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Color {
    Red,
    Blue,
    Green,
    Yellow,
}

impl Color {
    /// Enumeration order, also used as the tie-break order when picking a wild color.
    pub const ALL: [Color; 4] = [Color::Red, Color::Blue, Color::Green, Color::Yellow];
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Color::Red => "Red",
            Color::Blue => "Blue",
            Color::Green => "Green",
            Color::Yellow => "Yellow",
        };
        f.write_str(name)
    }
}

/// Face of a card. Number cards carry their rank.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum CardKind {
    Number(u8),
    Skip,
    Reverse,
    DrawTwo,
    Wild,
    DrawFour,
}

impl CardKind {
    #[inline]
    pub fn is_wild(&self) -> bool {
        matches!(self, CardKind::Wild | CardKind::DrawFour)
    }

    #[inline]
    pub fn is_action(&self) -> bool {
        matches!(self, CardKind::Skip | CardKind::Reverse | CardKind::DrawTwo)
    }
}

/// Identity of a physical card, unique within a deck.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct CardId(pub u16);

impl fmt::Display for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A single card instance. Immutable once created.
///
/// Two cards with the same face (e.g. both Red 7s) are told apart by their [`CardId`].
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Card {
    id: CardId,
    kind: CardKind,
    color: Option<Color>,
}

impl Card {
    /// Ranks above [`MAX_RANK`] are not rejected here; `GameBuilder` refuses decks holding them.
    pub fn number(id: u16, color: Color, rank: u8) -> Self {
        Self::colored(id, CardKind::Number(rank), color)
    }

    pub fn skip(id: u16, color: Color) -> Self {
        Self::colored(id, CardKind::Skip, color)
    }

    pub fn reverse(id: u16, color: Color) -> Self {
        Self::colored(id, CardKind::Reverse, color)
    }

    pub fn draw_two(id: u16, color: Color) -> Self {
        Self::colored(id, CardKind::DrawTwo, color)
    }

    pub fn wild(id: u16) -> Self {
        Self {
            id: CardId(id),
            kind: CardKind::Wild,
            color: None,
        }
    }

    pub fn draw_four(id: u16) -> Self {
        Self {
            id: CardId(id),
            kind: CardKind::DrawFour,
            color: None,
        }
    }

    fn colored(id: u16, kind: CardKind, color: Color) -> Self {
        Self {
            id: CardId(id),
            kind,
            color: Some(color),
        }
    }

    #[inline]
    pub fn id(&self) -> CardId {
        self.id
    }

    #[inline]
    pub fn kind(&self) -> CardKind {
        self.kind
    }

    /// `None` only for Wild and DrawFour.
    #[inline]
    pub fn color(&self) -> Option<Color> {
        self.color
    }

    /// Rank of a number card.
    #[inline]
    pub fn rank(&self) -> Option<u8> {
        match self.kind {
            CardKind::Number(rank) => Some(rank),
            _ => None,
        }
    }

    #[inline]
    pub fn is_wild(&self) -> bool {
        self.kind.is_wild()
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.kind, self.color) {
            (CardKind::Wild, _) => f.write_str("Wild"),
            (CardKind::DrawFour, _) => f.write_str("Wild DrawFour"),
            (CardKind::Number(rank), Some(color)) => write!(f, "{color} {rank}"),
            (CardKind::Skip, Some(color)) => write!(f, "{color} Skip"),
            (CardKind::Reverse, Some(color)) => write!(f, "{color} Reverse"),
            (CardKind::DrawTwo, Some(color)) => write!(f, "{color} DrawTwo"),
            (kind, None) => write!(f, "{kind:?}"),
        }
    }
}

/// Builds the full 108-card deck in deterministic order (unshuffled), ids `0..108`.
///
/// Per color: one 0, two each of 1-9, two Skip, two Reverse, two DrawTwo. Then four Wild
/// and four DrawFour.
pub fn full_deck() -> Vec<Card> {
    let mut deck = Vec::with_capacity(DECK_SIZE);
    let mut next_id = 0u16;
    let mut take_id = || {
        let id = next_id;
        next_id += 1;
        id
    };
    for color in Color::ALL {
        deck.push(Card::number(take_id(), color, 0));
        for rank in 1..=MAX_RANK {
            for _ in 0..2 {
                deck.push(Card::number(take_id(), color, rank));
            }
        }
        for _ in 0..2 {
            deck.push(Card::skip(take_id(), color));
            deck.push(Card::reverse(take_id(), color));
            deck.push(Card::draw_two(take_id(), color));
        }
    }
    for _ in 0..WILD_COUNT {
        deck.push(Card::wild(take_id()));
    }
    for _ in 0..DRAW_FOUR_COUNT {
        deck.push(Card::draw_four(take_id()));
    }
    deck
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_deck_distribution() {
        let deck = full_deck();
        assert_eq!(deck.len(), DECK_SIZE);
        for color in Color::ALL {
            let of_color: Vec<_> = deck.iter().filter(|c| c.color() == Some(color)).collect();
            assert_eq!(of_color.len(), 25);
            assert_eq!(of_color.iter().filter(|c| c.rank() == Some(0)).count(), 1);
            for rank in 1..=MAX_RANK {
                assert_eq!(of_color.iter().filter(|c| c.rank() == Some(rank)).count(), 2);
            }
            for kind in [CardKind::Skip, CardKind::Reverse, CardKind::DrawTwo] {
                assert_eq!(of_color.iter().filter(|c| c.kind() == kind).count(), 2);
            }
        }
        assert_eq!(deck.iter().filter(|c| c.kind() == CardKind::Wild).count(), 4);
        assert_eq!(deck.iter().filter(|c| c.kind() == CardKind::DrawFour).count(), 4);
        assert!(deck.iter().filter(|c| c.is_wild()).all(|c| c.color().is_none()));
    }

    #[test]
    fn ids_are_unique() {
        let mut ids: Vec<_> = full_deck().iter().map(Card::id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), DECK_SIZE);
    }

    #[test]
    fn display_names() {
        assert_eq!(Card::number(0, Color::Red, 7).to_string(), "Red 7");
        assert_eq!(Card::draw_two(1, Color::Blue).to_string(), "Blue DrawTwo");
        assert_eq!(Card::wild(2).to_string(), "Wild");
        assert_eq!(Card::draw_four(3).to_string(), "Wild DrawFour");
    }
}
