use std::io::{self, BufRead, Write};

use crate::action::Action;
use crate::bot::Bot;
use crate::card::{Card, Color};
use crate::chooser::ColorChooser;
use crate::state::GameStateView;
use crate::visualize::{describe_action, render_state};

/// Asks on standard input which color a wild card should take.
///
/// An empty line or a closed input counts as dismissing the prompt.
#[derive(Debug, Default)]
pub struct PromptColor;

impl PromptColor {
    fn parse(input: &str) -> Option<Color> {
        let trimmed = input.trim();
        if let Ok(index) = trimmed.parse::<usize>() {
            return Color::ALL.get(index).copied();
        }
        Color::ALL
            .into_iter()
            .find(|color| color.to_string().eq_ignore_ascii_case(trimmed))
    }
}

impl ColorChooser for PromptColor {
    fn choose_color(&mut self, _hand: &[Card]) -> Option<Color> {
        let stdin = io::stdin();
        loop {
            println!("Choose a color for the Wild card:");
            for (index, color) in Color::ALL.iter().enumerate() {
                println!("  [{index}] {color}");
            }
            print!("Color (empty to dismiss): ");
            if io::stdout().flush().is_err() {
                eprintln!("failed to flush stdout");
            }
            let mut input = String::new();
            match stdin.lock().read_line(&mut input) {
                Ok(0) => return None,
                Ok(_) if input.trim().is_empty() => return None,
                Ok(_) => {}
                Err(_) => {
                    eprintln!("failed to read input");
                    return None;
                }
            }
            if let Some(color) = Self::parse(&input) {
                return Some(color);
            }
            println!("Unknown color '{}'.", input.trim());
        }
    }
}

/// Interactive seat that queries a human via standard input.
pub struct HumanBot {
    name: String,
    colors: PromptColor,
}

impl HumanBot {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            colors: PromptColor,
        }
    }
}

impl Default for HumanBot {
    fn default() -> Self {
        Self::new("You")
    }
}

impl Bot for HumanBot {
    fn select_action(&mut self, state: &GameStateView, legal_actions: &[Action]) -> Action {
        assert!(
            !legal_actions.is_empty(),
            "at least one legal action must exist"
        );
        loop {
            println!("\n=== {}'s turn (player {}) ===", self.name, state.self_player);
            println!("{}", render_state(state));
            println!("Available actions:");
            for (index, action) in legal_actions.iter().enumerate() {
                println!("  [{index}] {}", describe_action(state, action));
            }
            println!("Type the action index, 'help' or 'q' to quit.");
            print!("Selection: ");
            if io::stdout().flush().is_err() {
                eprintln!("failed to flush stdout");
            }
            let mut input = String::new();
            match io::stdin().read_line(&mut input) {
                Ok(0) => {
                    println!("Input closed, leaving the table.");
                    std::process::exit(0);
                }
                Ok(_) => {}
                Err(_) => {
                    eprintln!("failed to read input");
                    continue;
                }
            }
            let trimmed = input.trim();
            if trimmed.eq_ignore_ascii_case("q") || trimmed.eq_ignore_ascii_case("quit") {
                println!("Exiting game at user's request.");
                std::process::exit(0);
            }
            if trimmed.eq_ignore_ascii_case("help") {
                println!("Enter the numeric index listed next to the action you wish to perform.");
                println!("After drawing, only the drawn card (marked *) may be played, or pass.");
                continue;
            }
            let Ok(choice) = trimmed.parse::<usize>() else {
                println!("Invalid input: '{trimmed}'. Please enter a number.");
                continue;
            };
            if let Some(action) = legal_actions.get(choice) {
                println!("You selected: {}", describe_action(state, action));
                return *action;
            }
            println!("Index out of range. Please choose a valid option.");
        }
    }

    fn color_chooser(&mut self) -> &mut dyn ColorChooser {
        &mut self.colors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_names_and_indices() {
        assert_eq!(PromptColor::parse("blue\n"), Some(Color::Blue));
        assert_eq!(PromptColor::parse(" 3 "), Some(Color::Yellow));
        assert_eq!(PromptColor::parse("7"), None);
        assert_eq!(PromptColor::parse("purple"), None);
    }
}
