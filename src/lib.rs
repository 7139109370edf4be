//! Rules engine for UN, a four-seat shedding card game with one human and three scripted
//! opponents.

pub mod action;
pub mod bot;
pub mod bots;
pub mod card;
pub mod chooser;
pub mod deck;
pub mod error;
pub mod event;
pub mod game;
pub mod player;
pub mod rules;
pub mod state;
pub mod visualize;

pub use crate::action::{Action, DrawOutcome, TurnTicket};
pub use crate::bot::Bot;
pub use crate::bots::{HumanBot, PromptColor, ScriptedBot};
pub use crate::card::{Card, CardId, CardKind, Color, full_deck};
pub use crate::chooser::{ColorChooser, FixedColor, MajorityColor};
pub use crate::deck::Deck;
pub use crate::error::{GameError, InvalidAction};
pub use crate::event::{Cue, Event, EventKind, EventLog};
pub use crate::game::{Game, GameBuilder, GameConfig};
pub use crate::player::{Player, PlayerNumber};
pub use crate::rules::{TurnEffect, can_play};
pub use crate::state::{GameState, GameStateView, GameStatus, OpponentView, next_seat};
pub use crate::visualize::{DescribeOptions, VisualOptions, describe_action, describe_event, render_state};
