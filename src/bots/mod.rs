pub mod human;
pub mod scripted;

pub use human::{HumanBot, PromptColor};
pub use scripted::ScriptedBot;
