//! Benachrichtigungen über Änderungen am Ansichtszustand eines Tabs.
//!
//! Widget-Adapter (Zoom-Slider, Menü-Checkboxen, Infoleiste) abonnieren diese
//! Events und übersetzen sie in toolkit-spezifische Aktualisierungen.

use crate::core::WorldCoordinate;

/// Änderung am Ansichtszustand eines Tabs.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewEvent {
    /// Kachelgröße hat sich geändert
    TileSizeChanged { tile_size: u32 },
    /// Mindestens ein Anzeige-Schalter hat sich geändert
    TogglesChanged,
    /// Aktuelle Position hat sich geändert
    PositionChanged { position: WorldCoordinate },
    /// Metadaten aus einer Weltdatei wurden übernommen
    MetaApplied,
}

/// Empfänger von [`ViewEvent`]s.
pub trait ViewObserver {
    /// Wird nach jeder Änderung aufgerufen.
    fn on_view_event(&mut self, event: &ViewEvent);
}

impl<F> ViewObserver for F
where
    F: FnMut(&ViewEvent),
{
    fn on_view_event(&mut self, event: &ViewEvent) {
        self(event)
    }
}

/// Liste registrierter Beobachter.
#[derive(Default)]
pub struct ObserverList {
    observers: Vec<Box<dyn ViewObserver>>,
}

impl ObserverList {
    /// Registriert einen Beobachter.
    pub fn subscribe(&mut self, observer: Box<dyn ViewObserver>) {
        self.observers.push(observer);
    }

    /// Verteilt ein Event an alle Beobachter.
    pub fn publish(&mut self, event: &ViewEvent) {
        for observer in &mut self.observers {
            observer.on_view_event(event);
        }
    }

    /// Anzahl registrierter Beobachter
    pub fn len(&self) -> usize {
        self.observers.len()
    }

    /// Gibt `true` zurück, wenn niemand zuhört.
    pub fn is_empty(&self) -> bool {
        self.observers.is_empty()
    }
}

impl std::fmt::Debug for ObserverList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ObserverList")
            .field("observers", &self.observers.len())
            .finish()
    }
}
