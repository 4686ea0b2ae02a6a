//! Anzeige-Schalter und Kachelgröße eines Karten-Tabs.

/// View-bezogener Zustand eines Tabs.
///
/// Jedes Feld hat einen expliziten Standardwert; Updates aus Metadaten
/// betreffen immer nur einzelne Felder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewState {
    tile_size: u32,
    /// Platz-Cursor anzeigen
    pub cursor_enabled: bool,
    /// Wege zwischen Plätzen zeichnen
    pub show_paths: bool,
    /// Wege als Kurven statt Geraden zeichnen
    pub paths_curved: bool,
    /// Kachelraster zeichnen
    pub grid_enabled: bool,
}

impl ViewState {
    /// Standard-Kachelgröße in Pixeln.
    pub const TILE_SIZE_DEFAULT: u32 = 120;
    /// Minimale Kachelgröße in Pixeln.
    pub const TILE_SIZE_MIN: u32 = 10;
    /// Maximale Kachelgröße in Pixeln.
    pub const TILE_SIZE_MAX: u32 = 200;

    /// Erstellt den Standard-View-Zustand.
    pub fn new() -> Self {
        Self {
            tile_size: Self::TILE_SIZE_DEFAULT,
            cursor_enabled: true,
            show_paths: true,
            paths_curved: true,
            grid_enabled: false,
        }
    }

    /// Aktuelle Kachelgröße (Zoom) in Pixeln
    pub fn tile_size(&self) -> u32 {
        self.tile_size
    }

    /// Setzt die Kachelgröße, begrenzt auf `TILE_SIZE_MIN..=TILE_SIZE_MAX`.
    pub fn set_tile_size(&mut self, tile_size: u32) {
        self.set_tile_size_clamped(tile_size, Self::TILE_SIZE_MIN, Self::TILE_SIZE_MAX);
    }

    /// Setzt die Kachelgröße mit konfigurierbaren Grenzen.
    pub fn set_tile_size_clamped(&mut self, tile_size: u32, min: u32, max: u32) {
        let max = max.max(min);
        self.tile_size = tile_size.clamp(min, max);
    }

    /// Kachelgröße als Prozentwert des Maximums (Zoom-Slider, 0–100).
    pub fn zoom_percent(&self, max: u32) -> u32 {
        if max == 0 {
            return 0;
        }
        (u64::from(self.tile_size) * 100 / u64::from(max)).min(100) as u32
    }

    /// Setzt die Kachelgröße aus einem Slider-Prozentwert.
    pub fn set_zoom_percent(&mut self, percent: u32, min: u32, max: u32) {
        let percent = percent.min(100);
        let size = (u64::from(max) * u64::from(percent) / 100) as u32;
        self.set_tile_size_clamped(size, min, max);
    }

    /// Ändert die Kachelgröße um einen Faktor (mindestens um eine Stufe).
    pub fn zoom_by_clamped(&mut self, factor: f32, min: u32, max: u32) {
        let old = self.tile_size;
        let scaled = (f64::from(old) * f64::from(factor)).round() as u32;
        let size = if factor > 1.0 && scaled <= old {
            old.saturating_add(1)
        } else if factor < 1.0 && scaled >= old {
            old.saturating_sub(1)
        } else {
            scaled
        };
        self.set_tile_size_clamped(size, min, max);
    }
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tile_size_is_clamped_to_bounds() {
        let mut view = ViewState::new();
        view.set_tile_size(5000);
        assert_eq!(view.tile_size(), ViewState::TILE_SIZE_MAX);
        view.set_tile_size(0);
        assert_eq!(view.tile_size(), ViewState::TILE_SIZE_MIN);
    }

    #[test]
    fn zoom_percent_maps_tile_size_to_slider() {
        let mut view = ViewState::new();
        view.set_tile_size(100);
        assert_eq!(view.zoom_percent(200), 50);

        view.set_zoom_percent(25, 10, 200);
        assert_eq!(view.tile_size(), 50);

        view.set_zoom_percent(0, 10, 200);
        assert_eq!(view.tile_size(), 10);
    }

    #[test]
    fn zoom_by_changes_at_least_one_step() {
        let mut view = ViewState::new();
        view.set_tile_size(10);
        view.zoom_by_clamped(1.01, 10, 200);
        assert_eq!(view.tile_size(), 11);

        view.zoom_by_clamped(1.0 / 1.01, 10, 200);
        assert_eq!(view.tile_size(), 10);

        view.zoom_by_clamped(0.5, 10, 200);
        assert_eq!(view.tile_size(), 10);
    }
}
