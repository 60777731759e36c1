//! # Galaxy I/O
//!
//! Readers and writers for the JSON files around the layout engine: the
//! project catalog, the optional layout config override, and the layout
//! export consumed by tools that want precomputed coordinates.

pub mod reader;
pub mod export;

pub use export::{LayoutExport, LayoutWriter};
pub use reader::{load_catalog, load_config, CatalogReader, FileError};
