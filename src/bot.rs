use crate::action::Action;
use crate::chooser::ColorChooser;
use crate::state::GameStateView;

/// Interface for seats driven by code or by a host UI.
pub trait Bot {
    fn select_action(&mut self, state: &GameStateView, legal_actions: &[Action]) -> Action;

    /// Strategy used when the selected action plays a wild card.
    fn color_chooser(&mut self) -> &mut dyn ColorChooser;
}
