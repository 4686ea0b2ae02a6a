//! Übersetzung von Laufzeit-Layer-IDs in gespeicherte Layer-IDs.

use super::LayerId;
use std::collections::HashMap;

/// Bildet eine Laufzeit-Layer-ID auf die ID ab, die der Layer nach dem
/// Speichern haben wird.
///
/// Gilt nur für einen einzelnen Speichervorgang. `None` bedeutet, dass der
/// Layer in dieser Speicherung nicht enthalten ist.
pub trait LayerIdTranslator {
    /// Übersetzt `live` oder meldet, dass der Layer nicht gespeichert wird.
    fn translate(&self, live: LayerId) -> Option<LayerId>;
}

impl<F> LayerIdTranslator for F
where
    F: Fn(LayerId) -> Option<LayerId>,
{
    fn translate(&self, live: LayerId) -> Option<LayerId> {
        self(live)
    }
}

/// Übersetzer auf Basis einer expliziten Zuordnungstabelle.
#[derive(Debug, Clone, Default)]
pub struct MapLayerTranslator {
    mapping: HashMap<LayerId, LayerId>,
}

impl MapLayerTranslator {
    /// Erstellt einen Übersetzer aus einer Zuordnungstabelle.
    pub fn new(mapping: HashMap<LayerId, LayerId>) -> Self {
        Self { mapping }
    }

    /// Anzahl gespeicherter Layer
    pub fn len(&self) -> usize {
        self.mapping.len()
    }

    /// Gibt `true` zurück, wenn kein Layer gespeichert wird.
    pub fn is_empty(&self) -> bool {
        self.mapping.is_empty()
    }
}

impl FromIterator<(LayerId, LayerId)> for MapLayerTranslator {
    fn from_iter<I: IntoIterator<Item = (LayerId, LayerId)>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl LayerIdTranslator for MapLayerTranslator {
    fn translate(&self, live: LayerId) -> Option<LayerId> {
        self.mapping.get(&live).copied()
    }
}

/// Übersetzer, der jede ID unverändert übernimmt.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityTranslator;

impl LayerIdTranslator for IdentityTranslator {
    fn translate(&self, live: LayerId) -> Option<LayerId> {
        Some(live)
    }
}
