use serde::{Deserialize, Serialize};

use crate::card::{Card, CardKind, Color};

/// Decides whether `candidate` may be placed on `top`.
///
/// Precedence:
/// 1. Wild and DrawFour are always legal.
/// 2. On a wild top with a negotiated color, only that color matches.
/// 3. Same color.
/// 4. Two number cards of the same rank.
/// 5. Same action face (Skip, Reverse, DrawTwo).
pub fn can_play(candidate: &Card, top: &Card, chosen_wild_color: Option<Color>) -> bool {
    if candidate.is_wild() {
        return true;
    }
    if top.is_wild() {
        if let Some(chosen) = chosen_wild_color {
            return candidate.color() == Some(chosen);
        }
    }
    if candidate.color().is_some() && candidate.color() == top.color() {
        return true;
    }
    if let (Some(rank), Some(top_rank)) = (candidate.rank(), top.rank()) {
        return rank == top_rank;
    }
    candidate.kind() == top.kind() && candidate.kind().is_action()
}

/// Effect a just-played card has on the players that follow.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub enum TurnEffect {
    #[default]
    None,
    Skip,
    DrawTwo,
    DrawFour,
}

impl TurnEffect {
    /// Reverse is applied during the play itself and carries no follow-up effect.
    pub fn of(kind: CardKind) -> Self {
        match kind {
            CardKind::Skip => TurnEffect::Skip,
            CardKind::DrawTwo => TurnEffect::DrawTwo,
            CardKind::DrawFour => TurnEffect::DrawFour,
            CardKind::Number(_) | CardKind::Reverse | CardKind::Wild => TurnEffect::None,
        }
    }

    /// Cards the target must draw before being skipped.
    pub fn penalty(&self) -> usize {
        match self {
            TurnEffect::DrawTwo => 2,
            TurnEffect::DrawFour => 4,
            TurnEffect::None | TurnEffect::Skip => 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn red_seven() -> Card {
        Card::number(0, Color::Red, 7)
    }

    #[test]
    fn wilds_always_play() {
        assert!(can_play(&Card::wild(1), &red_seven(), None));
        assert!(can_play(&Card::draw_four(2), &red_seven(), None));
        assert!(can_play(&Card::draw_four(2), &Card::wild(3), Some(Color::Blue)));
    }

    #[test]
    fn chosen_color_overrides_wild_top() {
        let top = Card::wild(1);
        assert!(can_play(&Card::number(2, Color::Blue, 3), &top, Some(Color::Blue)));
        assert!(can_play(&Card::skip(3, Color::Blue), &top, Some(Color::Blue)));
        assert!(!can_play(&Card::number(4, Color::Red, 3), &top, Some(Color::Blue)));
    }

    #[test]
    fn color_rank_and_action_matches() {
        assert!(can_play(&Card::skip(1, Color::Red), &red_seven(), None));
        assert!(can_play(&Card::number(2, Color::Green, 7), &red_seven(), None));
        assert!(!can_play(&Card::number(3, Color::Green, 6), &red_seven(), None));
        let blue_reverse = Card::reverse(4, Color::Blue);
        assert!(can_play(&Card::reverse(5, Color::Yellow), &blue_reverse, None));
        assert!(!can_play(&Card::skip(6, Color::Yellow), &blue_reverse, None));
        assert!(!can_play(&Card::draw_two(7, Color::Green), &red_seven(), None));
    }

    #[test]
    fn wild_top_without_color_only_takes_wilds() {
        let top = Card::draw_four(1);
        assert!(!can_play(&Card::number(2, Color::Red, 1), &top, None));
        assert!(can_play(&Card::wild(3), &top, None));
    }

    #[test]
    fn stale_chosen_color_ignored_on_colored_top() {
        assert!(!can_play(&Card::number(1, Color::Blue, 2), &red_seven(), Some(Color::Blue)));
    }

    #[test]
    fn effects_follow_card_kind() {
        assert_eq!(TurnEffect::of(CardKind::Reverse), TurnEffect::None);
        assert_eq!(TurnEffect::of(CardKind::DrawFour).penalty(), 4);
        assert_eq!(TurnEffect::of(CardKind::DrawTwo).penalty(), 2);
        assert_eq!(TurnEffect::of(CardKind::Skip).penalty(), 0);
    }
}
