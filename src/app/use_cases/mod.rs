//! Use-Cases mit Dateisystem-Zugriff.

pub mod file_io;
