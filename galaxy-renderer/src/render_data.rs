use serde::{Deserialize, Serialize};

use galaxy_core::belt::catalog_belts;
use galaxy_core::color::Color;
use galaxy_core::layout::layout_bounds;
use galaxy_core::relationships::compute_connections;
use galaxy_core::{Catalog, LayoutEngine};

use crate::backend::{RendererConfig, RendererKind};

const GALAXY_OPACITY: f32 = 0.9;
const STAR_OPACITY: f32 = 1.0;
const BELT_OPACITY: f32 = 1.0;

/// Marker for a galaxy core.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderGalaxy {
    pub id: String,
    pub name: String,
    pub anchor: [f64; 3],
    pub color: [f32; 4], // RGBA
    pub project_count: usize,
}

/// A project star ready for instancing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderStar {
    pub project_id: String,
    pub galaxy_id: String,
    pub position: [f64; 3],
    /// Mesh scale from the project's size class.
    pub size: f64,
    pub brightness: f64,
    pub featured: bool,
    pub color: [f32; 4],
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderConnection {
    pub from_id: String,
    pub to_id: String,
    pub from: [f64; 3],
    pub to: [f64; 3],
    pub strength: f64,
    pub color: [f32; 4],
}

/// Instanced rocks of one asteroid belt.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderBelt {
    pub galaxy_id: String,
    pub center: [f64; 3],
    pub color: [f32; 4],
    /// Flat array of instances relative to `center`: [x0, y0, z0, s0, x1, ...]
    pub instances: Vec<f64>,
}

/// Complete frame data sent from Rust to the frontend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderFrame {
    pub backend: RendererKind,
    pub galaxies: Vec<RenderGalaxy>,
    pub stars: Vec<RenderStar>,
    pub connections: Vec<RenderConnection>,
    pub belts: Vec<RenderBelt>,
    pub bounds: Option<[f64; 6]>, // [min_x, min_y, min_z, max_x, max_y, max_z]
}

fn rgba(hex: &str, opacity: f32) -> [f32; 4] {
    match Color::from_hex(hex) {
        Ok(color) => color.to_f32_array(opacity),
        Err(e) => {
            log::warn!("{}; using white", e);
            Color::WHITE.to_f32_array(opacity)
        }
    }
}

impl RenderFrame {
    pub fn empty(backend: RendererKind) -> Self {
        Self {
            backend,
            galaxies: Vec::new(),
            stars: Vec::new(),
            connections: Vec::new(),
            belts: Vec::new(),
            bounds: None,
        }
    }

    pub fn build(catalog: &Catalog, engine: &LayoutEngine, config: &RendererConfig) -> Self {
        let galaxies = catalog
            .galaxies
            .iter()
            .enumerate()
            .map(|(i, g)| RenderGalaxy {
                id: g.id.clone(),
                name: g.name.clone(),
                anchor: engine.group_anchor(i).to_array(),
                color: rgba(&g.color, GALAXY_OPACITY),
                project_count: g.project_count(),
            })
            .collect();

        let placements = engine.place_catalog(catalog);
        let stars = catalog
            .placements()
            .zip(&placements)
            .map(|((_, galaxy, project), placed)| {
                let hex = if project.color.is_empty() {
                    &galaxy.color
                } else {
                    &project.color
                };
                RenderStar {
                    project_id: project.id.clone(),
                    galaxy_id: galaxy.id.clone(),
                    position: placed.position.to_array(),
                    size: project.size.size_multiplier(),
                    brightness: project.brightness,
                    featured: project.featured,
                    color: rgba(hex, STAR_OPACITY),
                }
            })
            .collect();

        let connections = compute_connections(catalog, engine)
            .into_iter()
            .map(|c| RenderConnection {
                color: rgba(&c.color, c.strength as f32),
                from: c.from_position.to_array(),
                to: c.to_position.to_array(),
                strength: c.strength,
                from_id: c.from_id,
                to_id: c.to_id,
            })
            .collect();

        let belts = catalog_belts(catalog, engine, config.reduced_motion)
            .into_iter()
            .map(|belt| RenderBelt {
                instances: belt
                    .rocks()
                    .iter()
                    .flat_map(|r| [r.position.x, r.position.y, r.position.z, r.scale])
                    .collect(),
                galaxy_id: belt.galaxy_id.clone(),
                center: belt.center.to_array(),
                color: rgba(&belt.color, BELT_OPACITY),
            })
            .collect();

        let bounds = layout_bounds(&placements).map(|b| {
            [b.min.x, b.min.y, b.min.z, b.max.x, b.max.y, b.max.z]
        });

        Self {
            backend: config.kind,
            galaxies,
            stars,
            connections,
            belts,
            bounds,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use galaxy_core::{Galaxy, Project, ProjectSize};

    fn catalog() -> Catalog {
        let mut enterprise = Galaxy::new("enterprise", "Enterprise", "#00D9FF");
        enterprise.add_project(
            Project::new("proj-a", "Alpha", "")
                .with_tags(&["React"])
                .with_size(ProjectSize::Large),
        );
        let mut ai = Galaxy::new("ai", "AI", "not-a-color");
        ai.add_project(Project::new("atlas", "Atlas", "").with_tags(&["React"]));
        let design = Galaxy::new("design", "Design", "#FF6B9D");
        Catalog::new(vec![enterprise, ai, design])
    }

    #[test]
    fn test_build_frame() {
        let engine = LayoutEngine::default();
        let frame = RenderFrame::build(&catalog(), &engine, &RendererConfig::default());

        assert_eq!(frame.backend, RendererKind::WebGl);
        assert_eq!(frame.galaxies.len(), 3);
        assert_eq!(frame.stars.len(), 2);
        assert_eq!(frame.connections.len(), 1);

        let star = &frame.stars[0];
        assert_eq!(star.position, engine.entity_position("proj-a", "enterprise", 0).to_array());
        assert_eq!(star.size, 1.8);
        assert_eq!(star.color, [0.0, 217.0 / 255.0, 1.0, 1.0]);

        // malformed galaxy color falls back to white
        assert_eq!(frame.stars[1].color, [1.0, 1.0, 1.0, 1.0]);
    }

    #[test]
    fn test_belts_follow_reduced_motion() {
        let engine = LayoutEngine::default();
        let full = RenderFrame::build(&catalog(), &engine, &RendererConfig::default());
        let reduced = RenderFrame::build(
            &catalog(),
            &engine,
            &RendererConfig::default().with_reduced_motion(true),
        );
        // galaxies 0 and 2 exist, galaxy 4 does not
        assert_eq!(full.belts.len(), 2);
        assert_eq!(full.belts[0].instances.len(), 500 * 4);
        assert_eq!(reduced.belts[0].instances.len(), 100 * 4);
    }

    #[test]
    fn test_empty_frame_serializes() {
        let frame = RenderFrame::build(&Catalog::default(), &LayoutEngine::default(), &RendererConfig::default());
        assert!(frame.bounds.is_none());
        let json = serde_json::to_string(&frame).unwrap();
        assert!(json.contains("\"backend\":\"webgl\""));
        assert!(RenderFrame::empty(RendererKind::WebGpu).stars.is_empty());
    }
}
