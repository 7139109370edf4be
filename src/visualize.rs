use std::fmt::Write;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::action::Action;
use crate::card::Card;
use crate::event::{Event, EventKind};
use crate::player::PlayerNumber;
use crate::state::{GameStateView, GameStatus};

const UN_PHRASES_YOU: [&str; 10] = [
    "shout UN at the top of your lungs!",
    "scream UN like your life depends on it!",
    "bellow UN with the fury of a thousand suns!",
    "yell UN so loud the neighbors complain!",
    "triumphantly declare UN with a fist pump!",
    "whisper UN... just kidding, SCREAM IT!",
    "howl UN like a wolf at the moon!",
    "proclaim UN with dramatic flair!",
    "shriek UN and do a little victory dance!",
    "announce UN as if winning an Oscar!",
];

const UN_PHRASES_THEY: [&str; 10] = [
    "shouts UN at the top of their lungs!",
    "screams UN like their life depends on it!",
    "bellows UN with the fury of a thousand suns!",
    "yells UN so loud the neighbors complain!",
    "triumphantly declares UN with a fist pump!",
    "whispers UN... just kidding, SCREAMS IT!",
    "howls UN like a wolf at the moon!",
    "proclaims UN with dramatic flair!",
    "shrieks UN and does a little victory dance!",
    "announces UN as if winning an Oscar!",
];

/// Customize state rendering for CLI visualization.
#[derive(Clone, Copy, Debug)]
pub struct VisualOptions {
    pub show_hand_ids: bool,
    pub show_opponent_sizes: bool,
}

impl Default for VisualOptions {
    fn default() -> Self {
        Self {
            show_hand_ids: true,
            show_opponent_sizes: true,
        }
    }
}

/// Fine tune transcript lines.
#[derive(Clone, Copy, Debug)]
pub struct DescribeOptions {
    /// Seat whose drawn cards are revealed in the transcript. Everyone else only sees counts.
    pub reveal_draws_for: Option<PlayerNumber>,
}

impl Default for DescribeOptions {
    fn default() -> Self {
        Self {
            reveal_draws_for: Some(1),
        }
    }
}

pub fn render_state(state: &GameStateView) -> String {
    render_state_with_options(state, VisualOptions::default())
}

pub fn render_state_with_options(state: &GameStateView, options: VisualOptions) -> String {
    let mut out = String::new();
    let status = match state.status {
        GameStatus::Ongoing => String::from("Ongoing"),
        GameStatus::Finished { winner } => format!("Finished (winner: {})", name_of(state, winner)),
    };
    let _ = writeln!(out, "Game status: {status}");
    let _ = writeln!(
        out,
        "Current player: {}  |  Direction: {}",
        name_of(state, state.current_player),
        if state.clockwise { "clockwise" } else { "counter-clockwise" }
    );
    let top = state
        .top_card
        .map(|card| card.to_string())
        .unwrap_or_else(|| String::from("--"));
    let chosen = state
        .chosen_wild_color
        .map(|color| format!(" (color: {color})"))
        .unwrap_or_default();
    let _ = writeln!(out, "Stock pile: {}  |  Discard top: {top}{chosen}", state.deck_count);
    if options.show_opponent_sizes {
        let _ = writeln!(out, "Players:");
        for player in &state.players {
            let label_you = if player.number == state.self_player { " (You)" } else { "" };
            let current_tag = if player.is_current { " <- current" } else { "" };
            let _ = writeln!(
                out,
                "  {} {}{} - {} card{}{}",
                player.number,
                player.name,
                label_you,
                player.hand_size,
                if player.hand_size == 1 { "" } else { "s" },
                current_tag
            );
        }
    }
    if state.hand.is_empty() {
        let _ = writeln!(out, "Hand: (empty)");
    } else {
        let entries = state
            .hand
            .iter()
            .map(|card| {
                let lock = if state.just_drawn == Some(card.id()) { "*" } else { "" };
                if options.show_hand_ids {
                    format!("{}:{card}{lock}", card.id().0)
                } else {
                    format!("{card}{lock}")
                }
            })
            .collect::<Vec<_>>()
            .join("  ");
        let _ = writeln!(out, "Hand: {entries}");
    }
    out
}

pub fn describe_action(state: &GameStateView, action: &Action) -> String {
    match action {
        Action::Play(id) => match state.hand.iter().find(|card| card.id() == *id) {
            Some(card) => format!("Play {card}"),
            None => format!("Play card {id}"),
        },
        Action::Draw => String::from("Draw a card"),
        Action::Pass => String::from("Pass"),
    }
}

/// One transcript line for `event`, written from the table's point of view.
///
/// `names` lists seat names in seat order; seat 1 named "You" is addressed in the second
/// person. The UN line picks one of several phrases at random.
pub fn describe_event<R: Rng + ?Sized>(
    names: &[String],
    event: &Event,
    options: DescribeOptions,
    rng: &mut R,
) -> String {
    let name = names
        .get(usize::from(event.player).saturating_sub(1))
        .map(String::as_str)
        .unwrap_or("Unknown");
    let second_person = name.eq_ignore_ascii_case("you");
    match &event.kind {
        EventKind::Played(card) => format!("{name} played {card}"),
        EventKind::Drew { cards, skipped } => {
            let reveal = options.reveal_draws_for == Some(event.player);
            let mut line = match (cards.as_slice(), *skipped) {
                ([card], false) if reveal => format!("{name} drew {card}"),
                (_, false) => format!("{name} drew a card"),
                (cards, true) => {
                    let count = cards.len();
                    let mut line = format!("{name} drew {count} card{}", if count == 1 { "" } else { "s" });
                    if reveal && !cards.is_empty() {
                        let _ = write!(line, " ({})", join_cards(cards));
                    }
                    line
                }
            };
            if *skipped {
                line.push_str(if second_person { " and were skipped!" } else { " and was skipped!" });
            }
            line
        }
        EventKind::ColorChosen { color, opening } => {
            let suffix = if *opening { " for the starting card" } else { "" };
            if second_person {
                format!("You chose {color}{suffix}")
            } else {
                format!("{name} chose {color}{suffix}")
            }
        }
        EventKind::UnDeclared => {
            let phrases = if second_person { &UN_PHRASES_YOU } else { &UN_PHRASES_THEY };
            let phrase = phrases.choose(rng).copied().unwrap_or("UN!");
            format!("{name} {phrase}")
        }
        EventKind::Skipped => {
            if second_person {
                format!("{name} were skipped!")
            } else {
                format!("{name} was skipped!")
            }
        }
        EventKind::Won => format!("{name} won the game!"),
    }
}

fn join_cards(cards: &[Card]) -> String {
    cards.iter().map(Card::to_string).collect::<Vec<_>>().join(", ")
}

fn name_of(state: &GameStateView, number: PlayerNumber) -> String {
    state
        .players
        .iter()
        .find(|player| player.number == number)
        .map(|player| player.name.clone())
        .unwrap_or_else(|| format!("Player {number}"))
}
