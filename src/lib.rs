//! MudMap View-State Library.
//! Ansichtszustand, Navigationsverlauf und Metadaten-Codec pro Karten-Tab.

pub mod app;
pub mod core;
pub mod meta;
pub mod shared;
pub mod world;

pub use app::{AppCommand, AppController, AppIntent, AppState, TabState, ViewEvent, ViewObserver};
pub use crate::core::{
    IdentityTranslator, LayerId, LayerIdTranslator, MapLayerTranslator, NavigationHistory,
    ViewState, WorldCoordinate,
};
pub use meta::{decode_meta, encode_meta, parse_meta_document, MetaDocument, MetaUpdate};
pub use shared::ViewOptions;
pub use world::{load_world, save_world, World, WorldFileFormat, WorldRepository};
