//! Metadaten-Codec: View-Zustand und Navigationsverlauf einer Welt.
//!
//! Der Writer erzeugt beim Speichern ein frisches Dokument, der Parser liest
//! es beim Laden tolerant wieder ein.

pub mod document;
pub mod parser;
pub mod writer;

pub use document::{
    meta_version_string, HistoryEntry, MetaDocument, META_FILE_VER_MAJOR, META_FILE_VER_MINOR,
    META_HISTORY_CAP,
};
pub use parser::{
    apply_meta, apply_meta_clamped, decode_meta, parse_meta_document, parse_meta_str, MetaUpdate,
};
pub use writer::encode_meta;
