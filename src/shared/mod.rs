//! Geteilte Typen für modulübergreifende Verträge (Konfiguration).

pub mod options;

pub use options::ViewOptions;
pub use options::{TILE_SIZE_DEFAULT, TILE_SIZE_MAX, TILE_SIZE_MIN, ZOOM_STEP};
