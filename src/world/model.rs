//! Minimales Weltmodell: Layer und Plätze auf Kachelpositionen.

use crate::core::{LayerId, WorldCoordinate};
use anyhow::{bail, Result};
use glam::DVec2;
use indexmap::IndexMap;
use std::path::PathBuf;

/// Speicherformat einer Weltdatei.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorldFileFormat {
    /// JSON-Format mit strukturierten Metadaten
    Json,
    /// Zeilenbasiertes Altformat ohne Metadaten
    Legacy,
}

/// Herkunft einer geladenen oder gespeicherten Welt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorldSource {
    pub path: PathBuf,
    pub format: WorldFileFormat,
}

/// Ein Layer (Karte) innerhalb einer Welt.
#[derive(Debug, Clone, PartialEq)]
pub struct Layer {
    pub id: LayerId,
    pub name: String,
}

/// Ein Platz auf einer ganzzahligen Kachelposition.
#[derive(Debug, Clone, PartialEq)]
pub struct Place {
    pub layer: LayerId,
    pub x: i32,
    pub y: i32,
    pub name: String,
    /// Name der Platzgruppe (optional)
    pub group: Option<String>,
    pub comments: Vec<String>,
}

impl Place {
    /// Erstellt einen Platz ohne Gruppe und Kommentare.
    pub fn new(layer: LayerId, x: i32, y: i32, name: impl Into<String>) -> Self {
        Self {
            layer,
            x,
            y,
            name: name.into(),
            group: None,
            comments: Vec::new(),
        }
    }

    /// Position des Platzes als Weltkoordinate
    pub fn coordinate(&self) -> WorldCoordinate {
        WorldCoordinate::new(self.layer, f64::from(self.x), f64::from(self.y))
    }
}

/// Welt mit Layern und Plätzen.
#[derive(Debug, Clone, PartialEq)]
pub struct World {
    pub name: String,
    layers: IndexMap<LayerId, Layer>,
    places: Vec<Place>,
    next_layer_id: LayerId,
    source: Option<WorldSource>,
}

impl World {
    /// Erstellt eine leere Welt.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            layers: IndexMap::new(),
            places: Vec::new(),
            next_layer_id: 1,
            source: None,
        }
    }

    /// Legt einen neuen Layer an und gibt dessen ID zurück.
    pub fn add_layer(&mut self, name: impl Into<String>) -> LayerId {
        let id = self.next_layer_id;
        self.insert_layer(Layer {
            id,
            name: name.into(),
        });
        id
    }

    /// Fügt einen Layer mit vorgegebener ID ein (z.B. beim Laden).
    pub fn insert_layer(&mut self, layer: Layer) {
        self.next_layer_id = self.next_layer_id.max(layer.id.saturating_add(1));
        self.layers.insert(layer.id, layer);
    }

    /// Entfernt einen Layer samt seiner Plätze.
    pub fn remove_layer(&mut self, id: LayerId) -> Option<Layer> {
        let removed = self.layers.shift_remove(&id)?;
        self.places.retain(|p| p.layer != id);
        Some(removed)
    }

    /// Layer nach ID
    pub fn layer(&self, id: LayerId) -> Option<&Layer> {
        self.layers.get(&id)
    }

    /// Alle Layer in Einfüge-Reihenfolge
    pub fn layers(&self) -> impl Iterator<Item = &Layer> {
        self.layers.values()
    }

    /// Anzahl der Layer
    pub fn layer_count(&self) -> usize {
        self.layers.len()
    }

    /// Fügt einen Platz hinzu. Der Layer muss existieren, die Kachel frei sein.
    pub fn add_place(&mut self, place: Place) -> Result<()> {
        if !self.layers.contains_key(&place.layer) {
            bail!("Layer {} existiert nicht", place.layer);
        }
        if self.place_at(place.layer, place.x, place.y).is_some() {
            bail!(
                "Kachel ({}, {}) auf Layer {} ist bereits belegt",
                place.x,
                place.y,
                place.layer
            );
        }
        self.places.push(place);
        Ok(())
    }

    /// Platz auf einer Kachel
    pub fn place_at(&self, layer: LayerId, x: i32, y: i32) -> Option<&Place> {
        self.places
            .iter()
            .find(|p| p.layer == layer && p.x == x && p.y == y)
    }

    /// Alle Plätze
    pub fn places(&self) -> &[Place] {
        &self.places
    }

    /// Mittelpunkt der Bounding Box aller Plätze eines Layers.
    ///
    /// Ein leerer Layer hat den Mittelpunkt (0, 0).
    pub fn layer_center(&self, id: LayerId) -> DVec2 {
        let mut on_layer = self.places.iter().filter(|p| p.layer == id);
        let Some(first) = on_layer.next() else {
            return DVec2::ZERO;
        };
        let start = DVec2::new(f64::from(first.x), f64::from(first.y));
        let (min, max) = on_layer.fold((start, start), |(min, max), p| {
            let pos = DVec2::new(f64::from(p.x), f64::from(p.y));
            (min.min(pos), max.max(pos))
        });
        (min + max) * 0.5
    }

    /// Startposition für neue Tabs: Mitte des ersten Layers.
    pub fn home_position(&self) -> WorldCoordinate {
        match self.layers.keys().next() {
            Some(&id) => WorldCoordinate::from_position(id, self.layer_center(id)),
            None => WorldCoordinate::default(),
        }
    }

    /// Herkunftsdatei (falls geladen oder gespeichert)
    pub fn source(&self) -> Option<&WorldSource> {
        self.source.as_ref()
    }

    /// Setzt die Herkunftsdatei.
    pub fn set_source(&mut self, source: WorldSource) {
        self.source = Some(source);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_world() -> World {
        let mut world = World::new("Testwelt");
        let a = world.add_layer("Oberwelt");
        let b = world.add_layer("Keller");
        world.add_place(Place::new(a, 0, 0, "Markt")).expect("frei");
        world.add_place(Place::new(a, 4, 2, "Tor")).expect("frei");
        world.add_place(Place::new(b, -3, 1, "Gang")).expect("frei");
        world
    }

    #[test]
    fn layer_ids_are_assigned_incrementally() {
        let mut world = World::new("w");
        assert_eq!(world.add_layer("a"), 1);
        assert_eq!(world.add_layer("b"), 2);
        world.insert_layer(Layer {
            id: 10,
            name: "geladen".into(),
        });
        assert_eq!(world.add_layer("c"), 11);
    }

    #[test]
    fn layer_center_is_bounding_box_center() {
        let world = sample_world();
        assert_eq!(world.layer_center(1), DVec2::new(2.0, 1.0));
        assert_eq!(world.layer_center(2), DVec2::new(-3.0, 1.0));
        assert_eq!(world.layer_center(99), DVec2::ZERO);
    }

    #[test]
    fn add_place_rejects_unknown_layer_and_occupied_tile() {
        let mut world = sample_world();
        assert!(world.add_place(Place::new(42, 0, 0, "x")).is_err());
        assert!(world.add_place(Place::new(1, 4, 2, "doppelt")).is_err());
    }

    #[test]
    fn remove_layer_drops_its_places() {
        let mut world = sample_world();
        assert!(world.remove_layer(2).is_some());
        assert_eq!(world.layer_count(), 1);
        assert!(world.places().iter().all(|p| p.layer == 1));
    }

    #[test]
    fn home_position_is_center_of_first_layer() {
        let world = sample_world();
        assert_eq!(world.home_position(), WorldCoordinate::new(1, 2.0, 1.0));
        assert_eq!(World::new("leer").home_position(), WorldCoordinate::default());
    }
}
