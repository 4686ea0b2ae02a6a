//! Weltmodell und Weltdateien (Speicherformate, Metadaten-Fähigkeit, Verzeichnis).

pub mod file;
pub mod json;
pub mod legacy;
pub mod model;
pub mod repository;

pub use file::{
    detect_format, load_world, save_world, world_file_for, LoadedWorld, MetaProvider,
    MetadataSupport, WorldFile,
};
pub use json::JsonWorldFile;
pub use legacy::LegacyWorldFile;
pub use model::{Layer, Place, World, WorldFileFormat, WorldSource};
pub use repository::WorldRepository;
