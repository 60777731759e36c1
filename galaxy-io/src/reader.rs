//! Catalog and layout config readers.
//!
//! Both files are plain JSON. The catalog is the shape of
//! [`galaxy_core::Catalog`]; the config is a partial
//! [`galaxy_core::LayoutConfig`] whose missing fields take their defaults.

use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::Path;

use thiserror::Error;

use galaxy_core::{Catalog, LayoutConfig, LayoutError};

// ── Errors ────────────────────────────────────────────────────────────

#[derive(Error, Debug)]
pub enum FileError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid layout config: {0}")]
    Layout(#[from] LayoutError),

    #[error("Catalog has no galaxies")]
    EmptyCatalog,
}

// ── Catalog Reader ────────────────────────────────────────────────────

pub struct CatalogReader<R: Read> {
    reader: R,
    allow_empty: bool,
}

impl<R: Read> CatalogReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            allow_empty: false,
        }
    }

    /// Accept a catalog without galaxies instead of failing.
    pub fn allow_empty(mut self, allow: bool) -> Self {
        self.allow_empty = allow;
        self
    }

    pub fn read(&mut self) -> Result<Catalog, FileError> {
        let catalog: Catalog = serde_json::from_reader(&mut self.reader)?;
        if catalog.galaxies.is_empty() && !self.allow_empty {
            return Err(FileError::EmptyCatalog);
        }
        log::info!(
            "Catalog loaded: {} galaxies, {} projects",
            catalog.galaxies.len(),
            catalog.project_count()
        );
        Ok(catalog)
    }
}

/// Read a catalog file from disk.
pub fn load_catalog(path: &Path) -> Result<Catalog, FileError> {
    log::info!("Reading catalog from {}", path.display());
    let file = File::open(path)?;
    CatalogReader::new(BufReader::new(file)).read()
}

/// Parse and validate a layout config from any reader.
pub fn read_config<R: Read>(reader: R) -> Result<LayoutConfig, FileError> {
    let config: LayoutConfig = serde_json::from_reader(reader)?;
    config.validate()?;
    Ok(config)
}

/// Read a layout config file from disk.
pub fn load_config(path: &Path) -> Result<LayoutConfig, FileError> {
    log::info!("Reading layout config from {}", path.display());
    let file = File::open(path)?;
    read_config(BufReader::new(file))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Cursor, Write};

    const CATALOG: &str = r##"{
        "galaxies": [
            { "id": "enterprise", "name": "Enterprise", "color": "#00D9FF",
              "projects": [ { "id": "proj-a", "title": "Alpha", "galaxy": "enterprise" } ] },
            { "id": "ai", "name": "AI", "color": "#9D4EDD", "projects": [] }
        ]
    }"##;

    #[test]
    fn test_read_catalog() {
        let catalog = CatalogReader::new(Cursor::new(CATALOG)).read().unwrap();
        assert_eq!(catalog.galaxies.len(), 2);
        assert_eq!(catalog.project_count(), 1);
    }

    #[test]
    fn test_empty_catalog() {
        let empty = r#"{ "galaxies": [] }"#;
        let err = CatalogReader::new(Cursor::new(empty)).read().unwrap_err();
        assert!(matches!(err, FileError::EmptyCatalog));

        let ok = CatalogReader::new(Cursor::new(empty)).allow_empty(true).read();
        assert!(ok.is_ok());
    }

    #[test]
    fn test_malformed_json() {
        let err = CatalogReader::new(Cursor::new("{ not json")).read().unwrap_err();
        assert!(matches!(err, FileError::Json(_)));
    }

    #[test]
    fn test_config_validation() {
        let cfg = read_config(Cursor::new(r#"{ "galaxy_count": 8 }"#)).unwrap();
        assert_eq!(cfg.galaxy_count, 8);
        assert_eq!(cfg.galaxy_radius, 25.0);

        let err = read_config(Cursor::new(r#"{ "galaxy_count": 0 }"#)).unwrap_err();
        assert!(matches!(err, FileError::Layout(LayoutError::ZeroGalaxyCount)));
    }

    #[test]
    fn test_load_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(CATALOG.as_bytes()).unwrap();
        let catalog = load_catalog(file.path()).unwrap();
        assert_eq!(catalog.galaxy_index("ai"), Some(1));

        let missing = load_config(Path::new("/definitely/not/here.json")).unwrap_err();
        assert!(matches!(missing, FileError::Io(_)));
    }
}
