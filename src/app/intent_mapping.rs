//! Mapping von UI-Intents auf mutierende App-Commands.

use super::{AppCommand, AppIntent, AppState};
use crate::core::WorldCoordinate;

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::NewWorldRequested { name } => vec![AppCommand::NewWorld { name }],
        AppIntent::WorldFileSelected { path } => vec![AppCommand::OpenWorld { path }],
        AppIntent::SaveRequested => vec![AppCommand::SaveWorld { path: None }],
        AppIntent::SaveFilePathSelected { path } => {
            vec![AppCommand::SaveWorld { path: Some(path) }]
        }
        AppIntent::DuplicateTabRequested => vec![AppCommand::DuplicateActiveTab],
        AppIntent::CloseTabRequested { index } => vec![AppCommand::CloseTab { index }],
        AppIntent::TabActivated { index } => vec![AppCommand::ActivateTab { index }],

        AppIntent::PlaceSelected { layer, x, y } => {
            let Some(place) = state
                .active_world()
                .and_then(|world| world.place_at(layer, x, y))
            else {
                log::debug!("Platz ({}, {}) auf Layer {} nicht gefunden", x, y, layer);
                return Vec::new();
            };
            vec![AppCommand::NavigateTo {
                target: place.coordinate(),
            }]
        }
        AppIntent::LayerSelected { layer } => {
            let Some(world) = state.active_world() else {
                return Vec::new();
            };
            if world.layer(layer).is_none() {
                log::debug!("Layer {} nicht gefunden", layer);
                return Vec::new();
            }
            vec![AppCommand::NavigateTo {
                target: WorldCoordinate::from_position(layer, world.layer_center(layer)),
            }]
        }
        AppIntent::LayerCreated { name } => match name {
            Some(name) => vec![AppCommand::CreateLayer { name }],
            None => Vec::new(),
        },
        AppIntent::PreviousRequested => vec![AppCommand::NavigateBack],
        AppIntent::NextRequested => vec![AppCommand::NavigateForward],

        AppIntent::ZoomSliderChanged { percent } => vec![AppCommand::SetZoomPercent { percent }],
        AppIntent::ZoomInRequested => vec![AppCommand::ZoomBy {
            factor: state.options.zoom_step,
        }],
        AppIntent::ZoomOutRequested => vec![AppCommand::ZoomBy {
            factor: 1.0 / state.options.zoom_step,
        }],
        AppIntent::ShowCursorToggled { enabled } => {
            vec![AppCommand::SetCursorEnabled { enabled }]
        }
        AppIntent::ShowGridToggled { enabled } => vec![AppCommand::SetGridEnabled { enabled }],
        AppIntent::ShowPathsToggled { enabled } => vec![AppCommand::SetShowPaths { enabled }],
        AppIntent::CurvedPathsToggled { enabled } => {
            vec![AppCommand::SetPathsCurved { enabled }]
        }
    }
}
