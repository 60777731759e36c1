use std::io::Write;

use serde::{Deserialize, Serialize};

use galaxy_core::{Catalog, LayoutConfig, LayoutEngine, Placement, Vec3};

use crate::reader::FileError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportedGalaxy {
    pub id: String,
    pub name: String,
    pub anchor: Vec3,
}

/// Precomputed layout for consumers that cannot run the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutExport {
    pub name: String,
    pub version: String,
    pub config: LayoutConfig,
    pub galaxies: Vec<ExportedGalaxy>,
    pub placements: Vec<Placement>,
}

impl LayoutExport {
    pub fn build(name: &str, catalog: &Catalog, engine: &LayoutEngine) -> Self {
        let galaxies = catalog
            .galaxies
            .iter()
            .enumerate()
            .map(|(i, g)| ExportedGalaxy {
                id: g.id.clone(),
                name: g.name.clone(),
                anchor: engine.group_anchor(i),
            })
            .collect();
        Self {
            name: name.to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            config: *engine.config(),
            galaxies,
            placements: engine.place_catalog(catalog),
        }
    }

    pub fn placement(&self, project_id: &str) -> Option<&Placement> {
        self.placements.iter().find(|p| p.project_id == project_id)
    }
}

pub struct LayoutWriter<W: Write> {
    writer: W,
    pretty: bool,
}

impl<W: Write> LayoutWriter<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            pretty: false,
        }
    }

    pub fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    /// Write any serializable value followed by a newline.
    pub fn write_json<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<(), FileError> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut self.writer, value)?;
        } else {
            serde_json::to_writer(&mut self.writer, value)?;
        }
        self.writer.write_all(b"\n")?;
        self.writer.flush()?;
        Ok(())
    }

    pub fn write(&mut self, export: &LayoutExport) -> Result<(), FileError> {
        self.write_json(export)?;
        log::info!(
            "Exported layout '{}' with {} placements",
            export.name,
            export.placements.len()
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use galaxy_core::{Galaxy, Project};

    fn catalog() -> Catalog {
        let mut g = Galaxy::new("enterprise", "Enterprise", "#00D9FF");
        g.add_project(Project::new("proj-a", "Alpha", ""));
        g.add_project(Project::new("proj-b", "Beta", ""));
        Catalog::new(vec![g, Galaxy::new("ai", "AI", "#9D4EDD")])
    }

    #[test]
    fn test_export_matches_engine() {
        let engine = LayoutEngine::default();
        let export = LayoutExport::build("portfolio", &catalog(), &engine);
        assert_eq!(export.galaxies.len(), 2);
        assert_eq!(export.placements.len(), 2);
        assert_eq!(
            export.placement("proj-b").unwrap().position,
            engine.entity_position("proj-b", "enterprise", 0)
        );
        assert_eq!(export.galaxies[1].anchor, engine.group_anchor(1));
    }

    #[test]
    fn test_write_and_read_back() {
        let export = LayoutExport::build("portfolio", &catalog(), &LayoutEngine::default());

        let mut buffer: Vec<u8> = Vec::new();
        LayoutWriter::new(&mut buffer).pretty(true).write(&export).unwrap();

        let text = String::from_utf8(buffer).unwrap();
        assert!(text.ends_with('\n'));
        let read: LayoutExport = serde_json::from_str(&text).unwrap();
        assert_eq!(read.name, "portfolio");
        assert_eq!(read.config, export.config);
        for (a, b) in read.placements.iter().zip(&export.placements) {
            assert_eq!(a.project_id, b.project_id);
            assert!(a.position.distance_to(&b.position) < 1e-12);
        }
    }

    #[test]
    fn test_write_to_file() {
        let export = LayoutExport::build("portfolio", &catalog(), &LayoutEngine::default());
        let file = tempfile::NamedTempFile::new().unwrap();
        LayoutWriter::new(file.reopen().unwrap()).write(&export).unwrap();

        let text = std::fs::read_to_string(file.path()).unwrap();
        assert_eq!(text.lines().count(), 1);
        assert!(text.contains("\"project_id\":\"proj-a\""));
    }
}
