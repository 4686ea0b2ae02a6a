//! Zustand eines Welt-Tabs: Ansicht, Verlauf und Beobachter.

use crate::app::observer::{ObserverList, ViewEvent, ViewObserver};
use crate::core::{LayerIdTranslator, NavigationHistory, ViewState, WorldCoordinate};
use crate::meta::{apply_meta_clamped, encode_meta, MetaDocument};
use crate::shared::ViewOptions;
use crate::world::{MetaProvider, World};

/// Ein geöffneter Tab auf einer Welt.
#[derive(Debug)]
pub struct TabState {
    /// Schlüssel der Welt im `WorldRepository`
    pub world_key: String,
    /// Passive Tabs verändern die Welt nicht und werden nicht gespeichert
    pub passive: bool,
    /// Anzeige-Schalter und Zoom
    pub view: ViewState,
    /// Zurück/Vor-Verlauf
    pub history: NavigationHistory,
    observers: ObserverList,
}

impl TabState {
    /// Erstellt einen Tab mit Startposition `home` und Ansicht aus den Optionen.
    pub fn new(
        world_key: impl Into<String>,
        home: WorldCoordinate,
        options: &ViewOptions,
        passive: bool,
    ) -> Self {
        Self {
            world_key: world_key.into(),
            passive,
            view: options.initial_view_state(),
            history: NavigationHistory::new(home),
            observers: ObserverList::default(),
        }
    }

    /// Erstellt einen passiven Tab auf derselben Welt.
    ///
    /// Übernommen werden Kachelgröße, Cursor-Sichtbarkeit und Raster; der
    /// Verlauf beginnt leer an der aktuellen Position dieses Tabs.
    pub fn duplicate_passive(&self, options: &ViewOptions) -> Self {
        let mut tab = Self::new(
            self.world_key.clone(),
            self.history.current(),
            options,
            true,
        );
        tab.view.set_tile_size_clamped(
            self.view.tile_size(),
            options.tile_size_min,
            options.tile_size_max,
        );
        tab.view.cursor_enabled = self.view.cursor_enabled;
        tab.view.grid_enabled = self.view.grid_enabled;
        tab
    }

    /// Aktuelle Position
    pub fn position(&self) -> WorldCoordinate {
        self.history.current()
    }

    /// Registriert einen Beobachter für Ansichtsänderungen.
    pub fn subscribe(&mut self, observer: Box<dyn ViewObserver>) {
        self.observers.subscribe(observer);
    }

    /// Benachrichtigt alle Beobachter.
    pub fn notify(&mut self, event: ViewEvent) {
        self.observers.publish(&event);
    }

    /// Übernimmt ein (optionales) Metadaten-Dokument.
    ///
    /// Die Kachelgröße wird auf die Zoom-Grenzen aus `options` begrenzt.
    /// Gibt `true` zurück, wenn sich etwas geändert hat.
    pub fn apply_meta(&mut self, doc: Option<&MetaDocument>, options: &ViewOptions) -> bool {
        let changed = apply_meta_clamped(
            doc,
            &mut self.view,
            &mut self.history,
            options.tile_size_min,
            options.tile_size_max,
        );
        if changed {
            self.notify(ViewEvent::MetaApplied);
        }
        changed
    }

    /// Momentaufnahme für den Metadaten-Writer beim Speichern.
    pub fn meta_snapshot(&self, cap: usize) -> MetaSnapshot {
        MetaSnapshot {
            view: self.view,
            history: self.history.clone(),
            cap,
        }
    }

    /// Text der Infoleiste: Platz unter dem Cursor mit Gruppe und Kommentaren.
    ///
    /// Leer, wenn der Cursor ausgeblendet ist oder dort kein Platz liegt.
    pub fn info_text(&self, world: &World) -> String {
        if !self.view.cursor_enabled {
            return String::new();
        }
        let position = self.position();
        let (x, y) = position.rounded_tile();
        let Some(place) = world.place_at(position.layer(), x, y) else {
            return String::new();
        };

        let mut details: Vec<String> = Vec::new();
        if let Some(group) = &place.group {
            details.push(group.clone());
        }
        if !place.comments.is_empty() {
            details.push(place.comments.join(" "));
        }

        if details.is_empty() {
            place.name.clone()
        } else {
            format!("{} ({})", place.name, details.join(", "))
        }
    }
}

/// Kopie von Ansicht und Verlauf, aus der beim Speichern die Metadaten entstehen.
#[derive(Debug, Clone)]
pub struct MetaSnapshot {
    pub view: ViewState,
    pub history: NavigationHistory,
    pub cap: usize,
}

impl MetaProvider for MetaSnapshot {
    fn meta_document(&self, translator: &dyn LayerIdTranslator) -> MetaDocument {
        encode_meta(&self.view, &self.history, translator, self.cap)
    }
}
