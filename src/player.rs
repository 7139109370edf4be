use serde::{Deserialize, Serialize};

use crate::card::{Card, CardId};

/// Seat number, 1 through 4. Player 1 sits at the bottom of the table.
pub type PlayerNumber = u8;

pub const PLAYER_COUNT: usize = 4;

pub const DEFAULT_NAMES: [&str; PLAYER_COUNT] = ["You", "Alice", "Bob", "Charlie"];

/// A seated player and the cards they hold.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    number: PlayerNumber,
    name: String,
    is_human: bool,
    hand: Vec<Card>,
}

impl Player {
    pub fn new(number: PlayerNumber, name: impl Into<String>, is_human: bool) -> Self {
        Self {
            number,
            name: name.into(),
            is_human,
            hand: Vec::new(),
        }
    }

    pub fn number(&self) -> PlayerNumber {
        self.number
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_human(&self) -> bool {
        self.is_human
    }

    /// Cards in the order they were received.
    pub fn hand(&self) -> &[Card] {
        &self.hand
    }

    pub fn card_count(&self) -> usize {
        self.hand.len()
    }

    pub fn has_won(&self) -> bool {
        self.hand.is_empty()
    }

    pub fn find(&self, id: CardId) -> Option<&Card> {
        self.hand.iter().find(|card| card.id() == id)
    }

    pub fn add_card(&mut self, card: Card) {
        self.hand.push(card);
    }

    /// Removes the card with the given identity; `None` when it is not held.
    pub fn remove_card(&mut self, id: CardId) -> Option<Card> {
        let index = self.hand.iter().position(|card| card.id() == id)?;
        Some(self.hand.remove(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::Color;

    #[test]
    fn removes_by_identity_not_face() {
        let mut player = Player::new(1, "You", true);
        let first = Card::number(10, Color::Red, 7);
        let second = Card::number(11, Color::Red, 7);
        player.add_card(first);
        player.add_card(second);
        assert_eq!(player.remove_card(CardId(11)), Some(second));
        assert_eq!(player.hand(), &[first]);
        assert_eq!(player.remove_card(CardId(11)), None);
        assert_eq!(player.card_count(), 1);
    }
}
