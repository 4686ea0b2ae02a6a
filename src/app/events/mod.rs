//! Intents (Eingaben aus UI und System) und Commands (Mutationen) des App-Layers.

mod command;
mod intent;

pub use command::AppCommand;
pub use intent::AppIntent;
