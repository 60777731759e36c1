use serde::{Deserialize, Serialize};

use galaxy_core::{Catalog, LayoutEngine, ProjectSize};

/// A project dot on the minimap, in canvas pixels.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MinimapDot {
    pub project_id: String,
    pub x: f64,
    pub y: f64,
    /// Drawn radius.
    pub radius: f64,
    /// Click/hover radius.
    pub hit_radius: f64,
    pub color: String,
}

/// Top-down (X/Z) projection of the whole layout onto a square canvas.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Minimap {
    /// Canvas edge length in pixels.
    pub size: f64,
    pub padding: f64,
    /// Pixels per scene unit.
    pub scale: f64,
    pub dots: Vec<MinimapDot>,
}

fn hit_radius(size: ProjectSize) -> f64 {
    match size {
        ProjectSize::Supermassive => 10.0,
        _ => 8.0,
    }
}

impl Minimap {
    /// Fit every project of `catalog` into a `size` x `size` canvas.
    ///
    /// The scene origin maps to the canvas center and the larger of the X
    /// and Z extents fills the canvas minus `padding` on each side.
    pub fn fit(catalog: &Catalog, engine: &LayoutEngine, size: f64, padding: f64) -> Self {
        let placed: Vec<_> = catalog
            .placements()
            .map(|(index, galaxy, project)| {
                (galaxy, project, engine.entity_position(&project.id, &galaxy.id, index))
            })
            .collect();

        let (mut min_x, mut max_x) = (f64::INFINITY, f64::NEG_INFINITY);
        let (mut min_z, mut max_z) = (f64::INFINITY, f64::NEG_INFINITY);
        for (_, _, pos) in &placed {
            min_x = min_x.min(pos.x);
            max_x = max_x.max(pos.x);
            min_z = min_z.min(pos.z);
            max_z = max_z.max(pos.z);
        }

        let extent = (max_x - min_x).max(max_z - min_z);
        let scale = if extent.is_finite() && extent > 0.0 {
            (size - padding * 2.0) / extent
        } else {
            1.0
        };
        let center = size / 2.0;

        let dots = placed
            .into_iter()
            .map(|(galaxy, project, pos)| MinimapDot {
                project_id: project.id.clone(),
                x: center + pos.x * scale,
                y: center + pos.z * scale,
                radius: project.size.minimap_radius(),
                hit_radius: hit_radius(project.size),
                color: galaxy.color.clone(),
            })
            .collect();

        Self {
            size,
            padding,
            scale,
            dots,
        }
    }

    /// First dot whose hit circle contains the canvas point.
    pub fn hit_test(&self, x: f64, y: f64) -> Option<&MinimapDot> {
        self.dots
            .iter()
            .find(|d| ((x - d.x).powi(2) + (y - d.y).powi(2)).sqrt() < d.hit_radius)
    }

    /// Scene X/Z coordinates under a canvas point.
    pub fn to_scene(&self, x: f64, y: f64) -> (f64, f64) {
        let center = self.size / 2.0;
        ((x - center) / self.scale, (y - center) / self.scale)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use galaxy_core::{Galaxy, Project};

    fn catalog() -> Catalog {
        let galaxies = (0..6)
            .map(|i| {
                let mut g = Galaxy::new(&format!("g{}", i), "G", "#FFFFFF");
                for j in 0..4 {
                    g.add_project(Project::new(&format!("p{}-{}", i, j), "P", ""));
                }
                g
            })
            .collect();
        Catalog::new(galaxies)
    }

    #[test]
    fn test_dots_fit_inside_canvas() {
        let map = Minimap::fit(&catalog(), &LayoutEngine::default(), 180.0, 20.0);
        assert_eq!(map.dots.len(), 24);
        for dot in &map.dots {
            // origin-centred projection may lean to one side, but never past the canvas
            assert!(dot.x >= 0.0 && dot.x <= 180.0, "x {}", dot.x);
            assert!(dot.y >= 0.0 && dot.y <= 180.0, "y {}", dot.y);
        }
    }

    #[test]
    fn test_hit_test_and_inverse() {
        let engine = LayoutEngine::default();
        let map = Minimap::fit(&catalog(), &engine, 300.0, 20.0);
        let dot = &map.dots[5];
        let hit = map.hit_test(dot.x + 1.0, dot.y).unwrap();
        assert_eq!(hit.project_id, "p1-1");

        let pos = engine.entity_position(&dot.project_id, "g1", 1);
        let (x, z) = map.to_scene(dot.x, dot.y);
        assert!((x - pos.x).abs() < 1e-9);
        assert!((z - pos.z).abs() < 1e-9);

        assert!(map.hit_test(-100.0, -100.0).is_none());
    }

    #[test]
    fn test_empty_catalog() {
        let map = Minimap::fit(&Catalog::default(), &LayoutEngine::default(), 180.0, 20.0);
        assert!(map.dots.is_empty());
        assert_eq!(map.scale, 1.0);
    }
}
