//! JSON-Weltdateien mit eingebettetem Metadaten-Dokument.

use super::file::{MetaProvider, MetadataSupport, WorldFile};
use super::model::{Layer, Place, World, WorldFileFormat, WorldSource};
use crate::core::{LayerId, MapLayerTranslator};
use crate::meta::{meta_version_string, parse_meta_document, MetaDocument};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Dateistruktur einer JSON-Welt.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WorldFileJson {
    name: String,
    #[serde(default)]
    layers: Vec<LayerJson>,
    #[serde(default)]
    places: Vec<PlaceJson>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    meta_version: Option<String>,
    /// Ungetypt, wird von `parse_meta_document` feldweise gelesen
    #[serde(default, skip_serializing_if = "Option::is_none")]
    meta: Option<serde_json::Value>,
}

#[derive(Debug, Serialize, Deserialize)]
struct LayerJson {
    id: LayerId,
    name: String,
}

#[derive(Debug, Serialize, Deserialize)]
struct PlaceJson {
    layer: LayerId,
    x: i32,
    y: i32,
    name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    group: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    comments: Vec<String>,
}

/// Weltdatei im JSON-Format.
pub struct JsonWorldFile {
    path: PathBuf,
    meta_provider: Option<Box<dyn MetaProvider>>,
    meta: Option<MetaDocument>,
}

impl JsonWorldFile {
    /// Erstellt ein Dateiobjekt für `path` (ohne die Datei zu öffnen).
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            meta_provider: None,
            meta: None,
        }
    }

    /// Parsed eine JSON-Welt aus einem String.
    pub fn parse(&mut self, content: &str) -> Result<World> {
        let file: WorldFileJson =
            serde_json::from_str(content).context("Ungültige JSON-Weltdatei")?;

        let mut world = World::new(file.name);
        for layer in file.layers {
            world.insert_layer(Layer {
                id: layer.id,
                name: layer.name,
            });
        }
        for place in file.places {
            world.add_place(Place {
                layer: place.layer,
                x: place.x,
                y: place.y,
                name: place.name,
                group: place.group,
                comments: place.comments,
            })?;
        }

        if let Some(version) = &file.meta_version {
            log::debug!("Metadaten-Version der Datei: {}", version);
        }
        self.meta = file.meta.as_ref().map(parse_meta_document);
        Ok(world)
    }

    /// Serialisiert eine Welt als JSON-String.
    ///
    /// Layer werden in aufsteigender Reihenfolge lückenlos ab 1 neu nummeriert;
    /// der Metadaten-Lieferant erhält genau diese Zuordnung.
    pub fn serialize(&self, world: &World) -> Result<String> {
        let mut live_ids: Vec<LayerId> = world.layers().map(|l| l.id).collect();
        live_ids.sort_unstable();

        let id_remap: HashMap<LayerId, LayerId> = live_ids
            .iter()
            .enumerate()
            .map(|(i, &live)| (live, (i + 1) as LayerId))
            .collect();

        let mut layers: Vec<LayerJson> = world
            .layers()
            .filter_map(|l| {
                Some(LayerJson {
                    id: *id_remap.get(&l.id)?,
                    name: l.name.clone(),
                })
            })
            .collect();
        layers.sort_by_key(|l| l.id);

        let places = world
            .places()
            .iter()
            .filter_map(|p| {
                let layer = *id_remap.get(&p.layer)?;
                Some(PlaceJson {
                    layer,
                    x: p.x,
                    y: p.y,
                    name: p.name.clone(),
                    group: p.group.clone(),
                    comments: p.comments.clone(),
                })
            })
            .collect();

        let translator = MapLayerTranslator::new(id_remap);
        let meta = self
            .meta_provider
            .as_ref()
            .map(|provider| provider.meta_document(&translator).to_value());

        let file = WorldFileJson {
            name: world.name.clone(),
            layers,
            places,
            meta_version: meta.as_ref().map(|_| meta_version_string()),
            meta,
        };
        Ok(serde_json::to_string_pretty(&file)?)
    }
}

impl WorldFile for JsonWorldFile {
    fn path(&self) -> &Path {
        &self.path
    }

    fn format(&self) -> WorldFileFormat {
        WorldFileFormat::Json
    }

    fn read(&mut self) -> Result<World> {
        let content = std::fs::read_to_string(&self.path)?;
        let mut world = self.parse(&content)?;
        world.set_source(WorldSource {
            path: self.path.clone(),
            format: WorldFileFormat::Json,
        });
        Ok(world)
    }

    fn write(&mut self, world: &World) -> Result<()> {
        let content = self.serialize(world)?;
        std::fs::write(&self.path, content)?;
        Ok(())
    }

    fn metadata_support(&mut self) -> Option<&mut dyn MetadataSupport> {
        Some(self)
    }
}

impl MetadataSupport for JsonWorldFile {
    fn set_meta_provider(&mut self, provider: Box<dyn MetaProvider>) {
        self.meta_provider = Some(provider);
    }

    fn meta_document(&self) -> Option<&MetaDocument> {
        self.meta.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LayerIdTranslator;
    use crate::meta::HistoryEntry;
    use serde_json::Value;

    /// Schreibt die Übersetzung aller Layer 1..=20 als Verlauf (Layer, 0, 0).
    struct TranslationProbe;

    impl MetaProvider for TranslationProbe {
        fn meta_document(&self, translator: &dyn LayerIdTranslator) -> MetaDocument {
            MetaDocument {
                history: Some(
                    (1..=20)
                        .filter_map(|live| translator.translate(live))
                        .map(|l| HistoryEntry { l, x: 0.0, y: 0.0 })
                        .collect(),
                ),
                ..Default::default()
            }
        }
    }

    fn sparse_world() -> World {
        let mut world = World::new("Lücken");
        for (id, name) in [(3, "drei"), (9, "neun"), (5, "fünf")] {
            world.insert_layer(Layer {
                id,
                name: name.into(),
            });
        }
        world.add_place(Place::new(9, 1, 1, "Turm")).expect("frei");
        world
    }

    #[test]
    fn renumbers_layers_densely_in_ascending_order() {
        let file = JsonWorldFile::new("unused.json");
        let json = file.serialize(&sparse_world()).expect("serialisierbar");
        let value: Value = serde_json::from_str(&json).expect("gültiges JSON");

        let ids: Vec<u64> = value["layers"]
            .as_array()
            .expect("Layerliste")
            .iter()
            .map(|l| l["id"].as_u64().expect("ID"))
            .collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(value["layers"][2]["name"], "neun");
        assert_eq!(value["places"][0]["layer"], 3);
    }

    #[test]
    fn provider_receives_the_save_translation() {
        let mut file = JsonWorldFile::new("unused.json");
        file.set_meta_provider(Box::new(TranslationProbe));
        let json = file.serialize(&sparse_world()).expect("serialisierbar");
        let value: Value = serde_json::from_str(&json).expect("gültiges JSON");

        // Live 3 -> 1, 5 -> 2, 9 -> 3
        let ls: Vec<u64> = value["meta"]["history"]
            .as_array()
            .expect("Verlauf")
            .iter()
            .map(|e| e["l"].as_u64().expect("l"))
            .collect();
        assert_eq!(ls, vec![1, 2, 3]);
        assert_eq!(value["metaVersion"], "2.0");
    }

    #[test]
    fn no_provider_means_no_meta_keys() {
        let file = JsonWorldFile::new("unused.json");
        let json = file.serialize(&sparse_world()).expect("serialisierbar");
        let value: Value = serde_json::from_str(&json).expect("gültiges JSON");
        assert!(value.get("meta").is_none());
        assert!(value.get("metaVersion").is_none());
    }

    #[test]
    fn parse_reads_meta_leniently() {
        let mut file = JsonWorldFile::new("unused.json");
        let world = file
            .parse(
                r#"{
                    "name": "W",
                    "layers": [{ "id": 1, "name": "a" }],
                    "places": [{ "layer": 1, "x": 2, "y": 3, "name": "P", "comments": ["alt"] }],
                    "metaVersion": "2.0",
                    "meta": { "showGrid": true, "tileSize": "groß" }
                }"#,
            )
            .expect("parsebar");

        assert_eq!(world.layer_count(), 1);
        let place = world.place_at(1, 2, 3).expect("Platz vorhanden");
        assert_eq!(place.comments, vec!["alt".to_string()]);

        let meta = file.meta_document().expect("Metadaten vorhanden");
        assert_eq!(meta.show_grid, Some(true));
        assert_eq!(meta.tile_size, None);
    }

    #[test]
    fn parse_without_meta_has_no_document() {
        let mut file = JsonWorldFile::new("unused.json");
        file.parse(r#"{ "name": "W" }"#).expect("parsebar");
        assert!(file.meta_document().is_none());
    }
}
