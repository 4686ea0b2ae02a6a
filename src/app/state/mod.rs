//! Application State: geöffnete Welten und Tabs.

mod app_state;
mod tab;

pub use app_state::AppState;
pub use tab::{MetaSnapshot, TabState};
