use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::action::Action;
use crate::bot::Bot;
use crate::chooser::{ColorChooser, MajorityColor};
use crate::state::GameStateView;

/// The computer opponent.
///
/// - Plays the first legal card in hand order.
/// - Otherwise draws.
/// - A playable drawn card is played on a coin flip, otherwise the turn is passed.
/// - Wild colors go to the color the hand holds most of.
pub struct ScriptedBot<R: Rng = StdRng> {
    rng: R,
    colors: MajorityColor,
}

impl<R: Rng> ScriptedBot<R> {
    pub fn new(rng: R) -> Self {
        Self {
            rng,
            colors: MajorityColor,
        }
    }
}

impl ScriptedBot<StdRng> {
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> Bot for ScriptedBot<R> {
    fn select_action(&mut self, state: &GameStateView, legal_actions: &[Action]) -> Action {
        let first_play = legal_actions.iter().find_map(|action| action.card());
        if state.just_drawn.is_some() {
            return match first_play {
                Some(card) if self.rng.gen_bool(0.5) => Action::Play(card),
                _ => Action::Pass,
            };
        }
        if let Some(card) = first_play {
            return Action::Play(card);
        }
        if legal_actions.contains(&Action::Draw) {
            Action::Draw
        } else {
            Action::Pass
        }
    }

    fn color_chooser(&mut self) -> &mut dyn ColorChooser {
        &mut self.colors
    }
}
