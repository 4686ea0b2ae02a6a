//! Core-Domänentypen: Koordinaten, Navigationsverlauf, View-Zustand, Layer-Übersetzung.

pub mod coordinate;
pub mod layer;
pub mod navigation;
pub mod view;

pub use coordinate::{LayerId, WorldCoordinate};
pub use layer::{IdentityTranslator, LayerIdTranslator, MapLayerTranslator};
pub use navigation::NavigationHistory;
pub use view::ViewState;
