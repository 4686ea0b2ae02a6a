//! Zeilenbasiertes Alt-Format für Weltdateien (ohne Metadaten).
//!
//! ```text
//! name <Weltname>
//! layer <id> <Name>
//! place <layer> <x> <y> <Name>
//! ```
//! Leerzeilen und Zeilen mit `#` werden ignoriert.

use super::file::WorldFile;
use super::model::{Layer, Place, World, WorldFileFormat, WorldSource};
use anyhow::{bail, Context, Result};
use std::path::{Path, PathBuf};

/// Weltdatei im Alt-Format.
pub struct LegacyWorldFile {
    path: PathBuf,
}

impl LegacyWorldFile {
    /// Erstellt ein Dateiobjekt für `path` (ohne die Datei zu öffnen).
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

/// Parsed eine Welt im Alt-Format.
pub fn parse_legacy_world(content: &str) -> Result<World> {
    let mut world = World::new("");

    for (index, line) in content.lines().enumerate() {
        let line_no = index + 1;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let (keyword, rest) = line.split_once(' ').unwrap_or((line, ""));
        match keyword {
            "name" => world.name = rest.trim().to_string(),
            "layer" => {
                let mut parts = rest.splitn(2, ' ');
                let id = parse_field(parts.next(), "Layer-ID", line_no)?;
                let name = parts.next().unwrap_or("").trim().to_string();
                world.insert_layer(Layer { id, name });
            }
            "place" => {
                let mut parts = rest.splitn(4, ' ');
                let layer = parse_field(parts.next(), "Layer-ID", line_no)?;
                let x = parse_field(parts.next(), "X", line_no)?;
                let y = parse_field(parts.next(), "Y", line_no)?;
                let name = parts.next().unwrap_or("").trim();
                world
                    .add_place(Place::new(layer, x, y, name))
                    .with_context(|| format!("Zeile {}", line_no))?;
            }
            other => bail!("Zeile {}: unbekanntes Schlüsselwort '{}'", line_no, other),
        }
    }

    Ok(world)
}

fn parse_field<T: std::str::FromStr>(field: Option<&str>, what: &str, line_no: usize) -> Result<T> {
    let Some(raw) = field else {
        bail!("Zeile {}: {} fehlt", line_no, what);
    };
    match raw.parse() {
        Ok(value) => Ok(value),
        Err(_) => bail!("Zeile {}: ungültiger Wert für {}: '{}'", line_no, what, raw),
    }
}

/// Schreibt eine Welt im Alt-Format.
pub fn write_legacy_world(world: &World) -> String {
    let mut output = String::new();
    output.push_str(&format!("name {}\n", world.name));
    for layer in world.layers() {
        output.push_str(&format!("layer {} {}\n", layer.id, layer.name));
    }
    for place in world.places() {
        output.push_str(&format!(
            "place {} {} {} {}\n",
            place.layer, place.x, place.y, place.name
        ));
    }
    output
}

impl WorldFile for LegacyWorldFile {
    fn path(&self) -> &Path {
        &self.path
    }

    fn format(&self) -> WorldFileFormat {
        WorldFileFormat::Legacy
    }

    fn read(&mut self) -> Result<World> {
        let content = std::fs::read_to_string(&self.path)?;
        let mut world = parse_legacy_world(&content)?;
        world.set_source(WorldSource {
            path: self.path.clone(),
            format: WorldFileFormat::Legacy,
        });
        Ok(world)
    }

    fn write(&mut self, world: &World) -> Result<()> {
        std::fs::write(&self.path, write_legacy_world(world))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_layers_and_places() {
        let world = parse_legacy_world(
            "# alte Welt\nname Mittelerde\n\nlayer 4 Auenland\nplace 4 1 -2 Beutelsend\n",
        )
        .expect("parsebar");

        assert_eq!(world.name, "Mittelerde");
        assert_eq!(world.layer(4).map(|l| l.name.as_str()), Some("Auenland"));
        assert_eq!(
            world.place_at(4, 1, -2).map(|p| p.name.as_str()),
            Some("Beutelsend")
        );
    }

    #[test]
    fn reports_line_of_broken_entry() {
        let err = parse_legacy_world("name W\nlayer x Kaputt\n").expect_err("ungültig");
        assert!(err.to_string().contains("Zeile 2"));

        let err = parse_legacy_world("name W\nportal 1 2\n").expect_err("ungültig");
        assert!(err.to_string().contains("portal"));
    }

    #[test]
    fn written_text_parses_back() {
        let mut world = World::new("Rund");
        let id = world.add_layer("Ebene");
        world
            .add_place(Place::new(id, 3, 3, "Brunnen am Platz"))
            .expect("frei");

        let reparsed = parse_legacy_world(&write_legacy_world(&world)).expect("parsebar");
        assert_eq!(
            reparsed.place_at(id, 3, 3).map(|p| p.name.as_str()),
            Some("Brunnen am Platz")
        );
    }
}
