//! Position auf einer Karte: Layer + 2D-Koordinate.

use glam::DVec2;

/// Laufzeit-ID eines Layers (Karte innerhalb einer Welt).
pub type LayerId = u32;

/// Unveränderliche Position innerhalb einer Welt.
///
/// Wird nie in-place verändert, sondern immer als Ganzes ersetzt.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WorldCoordinate {
    layer: LayerId,
    position: DVec2,
}

impl WorldCoordinate {
    /// Erstellt eine Koordinate auf `layer` an Position (`x`, `y`).
    pub fn new(layer: LayerId, x: f64, y: f64) -> Self {
        Self {
            layer,
            position: DVec2::new(x, y),
        }
    }

    /// Erstellt eine Koordinate aus einem Positionsvektor.
    pub fn from_position(layer: LayerId, position: DVec2) -> Self {
        Self { layer, position }
    }

    /// Layer-ID
    pub fn layer(&self) -> LayerId {
        self.layer
    }

    /// X-Position
    pub fn x(&self) -> f64 {
        self.position.x
    }

    /// Y-Position
    pub fn y(&self) -> f64 {
        self.position.y
    }

    /// Position als Vektor
    pub fn position(&self) -> DVec2 {
        self.position
    }

    /// Auf ganze Kacheln gerundete Position (für den Platz-Cursor).
    pub fn rounded_tile(&self) -> (i32, i32) {
        (self.position.x.round() as i32, self.position.y.round() as i32)
    }
}

impl Default for WorldCoordinate {
    fn default() -> Self {
        Self::new(0, 0.0, 0.0)
    }
}
