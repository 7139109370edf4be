use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

use crate::card::{Card, full_deck};

/// Face-down draw pile. The last element is the top card.
///
/// The pile is never refilled from the discard pile: once empty, [`Deck::draw`] keeps
/// returning `None`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Full 108-card deck shuffled with a uniform permutation.
    pub fn shuffled<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut cards = full_deck();
        cards.shuffle(rng);
        Self { cards }
    }

    /// Uses the given order as-is; the last card is drawn first.
    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    pub fn draw(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Draws up to `count` cards, stopping early when the pile runs out.
    pub fn draw_many(&mut self, count: usize) -> Vec<Card> {
        let mut drawn = Vec::with_capacity(count);
        for _ in 0..count {
            match self.draw() {
                Some(card) => drawn.push(card),
                None => break,
            }
        }
        drawn
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;
    use crate::card::{Color, DECK_SIZE};

    #[test]
    fn same_seed_same_order() {
        let a = Deck::shuffled(&mut StdRng::seed_from_u64(7));
        let b = Deck::shuffled(&mut StdRng::seed_from_u64(7));
        let c = Deck::shuffled(&mut StdRng::seed_from_u64(8));
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_eq!(a.len(), DECK_SIZE);
    }

    #[test]
    fn draws_from_the_end_until_empty() {
        let mut deck = Deck::from_cards(vec![
            Card::number(0, Color::Red, 1),
            Card::number(1, Color::Red, 2),
        ]);
        assert_eq!(deck.draw().map(|c| c.rank()), Some(Some(2)));
        let rest = deck.draw_many(3);
        assert_eq!(rest.len(), 1);
        assert!(deck.is_empty());
        assert_eq!(deck.draw(), None);
    }
}
