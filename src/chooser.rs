use crate::card::{Card, Color};

/// Strategy that settles the color of a freshly played wild card.
///
/// Called synchronously from inside the play transaction with the hand the player holds
/// after the wild left it. Returning `None` (e.g. a dismissed prompt) falls back to red.
pub trait ColorChooser {
    fn choose_color(&mut self, hand: &[Card]) -> Option<Color>;
}

/// Picks the color the hand holds most of; ties go to the earlier color in
/// red, blue, green, yellow order.
#[derive(Clone, Copy, Debug, Default)]
pub struct MajorityColor;

impl MajorityColor {
    pub fn pick(hand: &[Card]) -> Color {
        let mut counts = [0usize; 4];
        for color in hand.iter().filter_map(Card::color) {
            counts[color_index(color)] += 1;
        }
        let mut best = Color::Red;
        let mut best_count = counts[0];
        for color in Color::ALL {
            let count = counts[color_index(color)];
            if count > best_count {
                best = color;
                best_count = count;
            }
        }
        best
    }
}

impl ColorChooser for MajorityColor {
    fn choose_color(&mut self, hand: &[Card]) -> Option<Color> {
        Some(Self::pick(hand))
    }
}

/// Always answers with the same color.
#[derive(Clone, Copy, Debug)]
pub struct FixedColor(pub Color);

impl ColorChooser for FixedColor {
    fn choose_color(&mut self, _hand: &[Card]) -> Option<Color> {
        Some(self.0)
    }
}

fn color_index(color: Color) -> usize {
    match color {
        Color::Red => 0,
        Color::Blue => 1,
        Color::Green => 2,
        Color::Yellow => 3,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn majority_wins() {
        let hand = [
            Card::number(0, Color::Blue, 1),
            Card::number(1, Color::Blue, 2),
            Card::skip(2, Color::Blue),
            Card::number(3, Color::Green, 4),
            Card::wild(4),
        ];
        assert_eq!(MajorityColor::pick(&hand), Color::Blue);
    }

    #[test]
    fn ties_follow_enumeration_order() {
        let hand = [
            Card::number(0, Color::Yellow, 1),
            Card::number(1, Color::Green, 2),
        ];
        assert_eq!(MajorityColor::pick(&hand), Color::Green);
        assert_eq!(MajorityColor::pick(&[Card::wild(2)]), Color::Red);
        assert_eq!(MajorityColor::pick(&[]), Color::Red);
    }
}
