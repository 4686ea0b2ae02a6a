//! Application-Layer: Controller, State, Events und Handler.

pub mod command_log;
pub mod controller;
pub mod events;
pub mod handlers;
mod intent_mapping;
pub mod observer;
/// Application State und Controller
///
/// Dieses Modul verwaltet den Zustand der Anwendung (geöffnete Welten, Tabs, Optionen).
pub mod state;
pub mod use_cases;

pub use command_log::CommandLog;
pub use controller::AppController;
pub use events::{AppCommand, AppIntent};
pub use observer::{ObserverList, ViewEvent, ViewObserver};
pub use state::{AppState, MetaSnapshot, TabState};
