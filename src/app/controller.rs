//! Application Controller für zentrale Event-Verarbeitung.

use super::{AppCommand, AppIntent, AppState};

/// Orchestriert UI-Events und Handler auf den AppState.
#[derive(Default)]
pub struct AppController;

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        let commands = self.map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    fn map_intent_to_commands(&self, state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
        super::intent_mapping::map_intent_to_commands(state, intent)
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(&command);
        use super::handlers;

        match command {
            // === Welten & Tabs ===
            AppCommand::NewWorld { name } => handlers::file_io::new_world(state, name),
            AppCommand::OpenWorld { path } => handlers::file_io::open(state, path)?,
            AppCommand::SaveWorld { path } => handlers::file_io::save(state, path)?,
            AppCommand::DuplicateActiveTab => handlers::tabs::duplicate_active(state)?,
            AppCommand::CloseTab { index } => handlers::tabs::close(state, index),
            AppCommand::ActivateTab { index } => handlers::tabs::activate(state, index),

            // === Navigation ===
            AppCommand::NavigateTo { target } => handlers::navigation::navigate_to(state, target),
            AppCommand::NavigateBack => handlers::navigation::back(state),
            AppCommand::NavigateForward => handlers::navigation::forward(state),
            AppCommand::CreateLayer { name } => handlers::navigation::create_layer(state, name)?,

            // === Ansicht ===
            AppCommand::SetZoomPercent { percent } => {
                handlers::view::set_zoom_percent(state, percent)
            }
            AppCommand::ZoomBy { factor } => handlers::view::zoom_by(state, factor),
            AppCommand::SetCursorEnabled { enabled } => {
                handlers::view::set_cursor_enabled(state, enabled)
            }
            AppCommand::SetGridEnabled { enabled } => {
                handlers::view::set_grid_enabled(state, enabled)
            }
            AppCommand::SetShowPaths { enabled } => handlers::view::set_show_paths(state, enabled),
            AppCommand::SetPathsCurved { enabled } => {
                handlers::view::set_paths_curved(state, enabled)
            }
        }

        Ok(())
    }
}
