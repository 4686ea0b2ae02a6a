//! Verzeichnis der geöffneten Welten.

use super::model::World;
use anyhow::{bail, Result};
use indexmap::IndexMap;

/// Geöffnete Welten, adressiert über einen Schlüssel (Dateipfad oder Name).
///
/// Wird explizit an alle Stellen übergeben, die Welten nachschlagen.
#[derive(Debug, Default)]
pub struct WorldRepository {
    worlds: IndexMap<String, World>,
}

impl WorldRepository {
    /// Erstellt ein leeres Verzeichnis.
    pub fn new() -> Self {
        Self {
            worlds: IndexMap::new(),
        }
    }

    /// Registriert eine Welt unter `key`; eine vorhandene wird ersetzt.
    pub fn put(&mut self, key: impl Into<String>, world: World) -> Option<World> {
        self.worlds.insert(key.into(), world)
    }

    /// Welt nach Schlüssel
    pub fn get(&self, key: &str) -> Option<&World> {
        self.worlds.get(key)
    }

    /// Welt nach Schlüssel (veränderbar)
    pub fn get_mut(&mut self, key: &str) -> Option<&mut World> {
        self.worlds.get_mut(key)
    }

    /// Prüft ob unter `key` eine Welt geöffnet ist.
    pub fn contains(&self, key: &str) -> bool {
        self.worlds.contains_key(key)
    }

    /// Schließt eine Welt.
    pub fn close(&mut self, key: &str) -> Option<World> {
        self.worlds.shift_remove(key)
    }

    /// Registriert eine Welt unter neuem Schlüssel (z.B. nach "Speichern unter").
    ///
    /// Schlägt fehl, wenn unter `old_key` nichts registriert ist oder unter
    /// `new_key` bereits eine andere Welt liegt.
    pub fn rekey(&mut self, old_key: &str, new_key: impl Into<String>) -> Result<()> {
        let new_key = new_key.into();
        if !self.contains(old_key) {
            bail!("Welt '{}' ist nicht geöffnet", old_key);
        }
        if old_key == new_key {
            return Ok(());
        }
        if self.contains(&new_key) {
            bail!("Unter '{}' ist bereits eine Welt geöffnet", new_key);
        }
        if let Some(world) = self.worlds.shift_remove(old_key) {
            self.worlds.insert(new_key, world);
        }
        Ok(())
    }

    /// Liefert einen freien Schlüssel für eine ungespeicherte Welt.
    pub fn unique_key(&self, base: &str) -> String {
        if !self.contains(base) {
            return base.to_string();
        }
        (2..)
            .map(|n| format!("{} ({})", base, n))
            .find(|key| !self.contains(key))
            .unwrap_or_else(|| base.to_string())
    }

    /// Schlüssel aller geöffneten Welten in Öffnungsreihenfolge
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.worlds.keys().map(String::as_str)
    }

    /// Anzahl geöffneter Welten
    pub fn len(&self) -> usize {
        self.worlds.len()
    }

    /// Gibt `true` zurück, wenn keine Welt geöffnet ist.
    pub fn is_empty(&self) -> bool {
        self.worlds.is_empty()
    }
}
