//! Abstraktion über Weltdateien und ihre Metadaten-Fähigkeit.

use super::json::JsonWorldFile;
use super::legacy::LegacyWorldFile;
use super::model::{World, WorldFileFormat};
use crate::core::LayerIdTranslator;
use crate::meta::MetaDocument;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Liefert beim Speichern das Metadaten-Dokument.
///
/// Der Übersetzer gilt nur für den laufenden Speichervorgang.
pub trait MetaProvider {
    /// Erzeugt das Dokument für die übergebene Layer-Übersetzung.
    fn meta_document(&self, translator: &dyn LayerIdTranslator) -> MetaDocument;
}

/// Fähigkeit eines Speicherformats, strukturierte Metadaten zu tragen.
pub trait MetadataSupport {
    /// Setzt den Metadaten-Lieferanten für den nächsten Schreibvorgang.
    fn set_meta_provider(&mut self, provider: Box<dyn MetaProvider>);

    /// Beim letzten Lesen gefundenes Metadaten-Dokument.
    fn meta_document(&self) -> Option<&MetaDocument>;
}

/// Eine Weltdatei in einem bestimmten Speicherformat.
pub trait WorldFile {
    /// Pfad der Datei
    fn path(&self) -> &Path;

    /// Speicherformat
    fn format(&self) -> WorldFileFormat;

    /// Liest die Welt aus der Datei.
    fn read(&mut self) -> Result<World>;

    /// Schreibt die Welt in die Datei.
    fn write(&mut self, world: &World) -> Result<()>;

    /// Metadaten-Fähigkeit, falls das Format sie unterstützt.
    fn metadata_support(&mut self) -> Option<&mut dyn MetadataSupport> {
        None
    }
}

/// Erstellt das passende Dateiobjekt für ein Format.
pub fn world_file_for(path: impl Into<PathBuf>, format: WorldFileFormat) -> Box<dyn WorldFile> {
    match format {
        WorldFileFormat::Json => Box::new(JsonWorldFile::new(path)),
        WorldFileFormat::Legacy => Box::new(LegacyWorldFile::new(path)),
    }
}

/// Erkennt das Speicherformat am Dateiinhalt.
///
/// JSON-Dateien beginnen (nach Leerraum) mit `{`, alles andere gilt als Altformat.
pub fn detect_format(content: &str) -> WorldFileFormat {
    if content.trim_start().starts_with('{') {
        WorldFileFormat::Json
    } else {
        WorldFileFormat::Legacy
    }
}

/// Ergebnis eines Ladevorgangs.
#[derive(Debug)]
pub struct LoadedWorld {
    pub world: World,
    /// Metadaten, falls das Format sie trägt und die Datei welche enthält
    pub meta: Option<MetaDocument>,
}

/// Lädt eine Weltdatei und liest vorhandene Metadaten aus.
pub fn load_world(path: &Path) -> Result<LoadedWorld> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Weltdatei {} nicht lesbar", path.display()))?;
    let format = detect_format(&content);

    let mut file = world_file_for(path, format);
    let world = file.read()?;
    let meta = file
        .metadata_support()
        .and_then(|support| support.meta_document().cloned());

    log::info!(
        "Welt '{}' geladen: {} Layer, {} Plätze, Metadaten: {}",
        world.name,
        world.layer_count(),
        world.places().len(),
        if meta.is_some() { "ja" } else { "nein" }
    );

    Ok(LoadedWorld { world, meta })
}

/// Speichert eine Welt im gewünschten Format.
///
/// Unterstützt das Format Metadaten, wird `provider` vor dem Schreiben
/// gesetzt; andernfalls entfällt das Metadaten-Dokument.
pub fn save_world(
    world: &World,
    path: &Path,
    format: WorldFileFormat,
    provider: Option<Box<dyn MetaProvider>>,
) -> Result<()> {
    let mut file = world_file_for(path, format);

    if let Some(provider) = provider {
        match file.metadata_support() {
            Some(support) => support.set_meta_provider(provider),
            None => log::info!(
                "Format {:?} unterstützt keine Metadaten, Ansichtszustand wird nicht gespeichert",
                format
            ),
        }
    }

    file.write(world)
        .with_context(|| format!("Weltdatei {} nicht schreibbar", path.display()))?;
    log::info!("Welt '{}' gespeichert nach: {}", world.name, path.display());
    Ok(())
}
