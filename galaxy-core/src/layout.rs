//! Deterministic placement of galaxies and projects.
//!
//! Galaxy anchors sit evenly on a horizontal circle. Each project is offset
//! from its galaxy's anchor in a direction and distance drawn from a
//! [`SeededRng`] seeded by the hash of the project and galaxy ids, so the
//! same ids always land in the same spot.

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::catalog::Catalog;
use crate::geometry::{Bounds3, Vec3};
use crate::hash::hash_concat;
use crate::rng::SeededRng;

/// Number of top-level galaxies in the portfolio.
pub const GALAXY_COUNT: usize = 6;
/// Radius of the circle galaxy anchors sit on.
pub const GALAXY_RADIUS: f64 = 25.0;
pub const MIN_OFFSET: f64 = 3.0;
pub const MAX_OFFSET: f64 = 10.0;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum LayoutError {
    #[error("galaxy count must be at least 1")]
    ZeroGalaxyCount,

    #[error("galaxy radius must be finite and non-negative, got {0}")]
    InvalidRadius(f64),

    #[error("invalid project offset range [{min}, {max}]")]
    InvalidOffsets { min: f64, max: f64 },
}

/// Tunable layout constants.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    pub galaxy_radius: f64,
    pub galaxy_count: usize,
    /// Closest a project may sit to its galaxy anchor.
    pub min_offset: f64,
    /// Farthest a project may sit from its galaxy anchor.
    pub max_offset: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            galaxy_radius: GALAXY_RADIUS,
            galaxy_count: GALAXY_COUNT,
            min_offset: MIN_OFFSET,
            max_offset: MAX_OFFSET,
        }
    }
}

impl LayoutConfig {
    pub fn validate(&self) -> Result<(), LayoutError> {
        if self.galaxy_count == 0 {
            return Err(LayoutError::ZeroGalaxyCount);
        }
        if !self.galaxy_radius.is_finite() || self.galaxy_radius < 0.0 {
            return Err(LayoutError::InvalidRadius(self.galaxy_radius));
        }
        let offsets_ok = self.min_offset.is_finite()
            && self.max_offset.is_finite()
            && self.min_offset >= 0.0
            && self.min_offset <= self.max_offset;
        if !offsets_ok {
            return Err(LayoutError::InvalidOffsets {
                min: self.min_offset,
                max: self.max_offset,
            });
        }
        Ok(())
    }
}

/// A project together with its computed position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Placement {
    pub project_id: String,
    pub galaxy_id: String,
    pub galaxy_index: usize,
    pub position: Vec3,
}

/// Layout engine holding a validated [`LayoutConfig`].
///
/// The engine is immutable; every query builds its own generator, so one
/// engine can be shared freely across threads.
#[derive(Debug, Clone, Copy)]
pub struct LayoutEngine {
    config: LayoutConfig,
}

impl Default for LayoutEngine {
    fn default() -> Self {
        Self {
            config: LayoutConfig::default(),
        }
    }
}

impl LayoutEngine {
    pub fn new(config: LayoutConfig) -> Result<Self, LayoutError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// Anchor of the galaxy at `galaxy_index`. Indices past the configured
    /// count wrap around the circle.
    pub fn group_anchor(&self, galaxy_index: usize) -> Vec3 {
        anchor_on_circle(galaxy_index, self.config.galaxy_count, self.config.galaxy_radius)
    }

    /// All configured galaxy anchors in index order.
    pub fn anchors(&self) -> Vec<Vec3> {
        (0..self.config.galaxy_count)
            .map(|i| self.group_anchor(i))
            .collect()
    }

    /// Offset of an entity from its galaxy anchor.
    pub fn entity_offset(&self, entity_id: &str, group_id: &str) -> Vec3 {
        let mut rng = SeededRng::new(hash_concat(&[entity_id, group_id]));
        let theta = rng.next_f64() * PI * 2.0;
        let phi = (2.0 * rng.next_f64() - 1.0).acos();
        let radius = self.config.min_offset
            + rng.next_f64() * (self.config.max_offset - self.config.min_offset);
        Vec3::from_spherical(radius, theta, phi)
    }

    pub fn entity_position(&self, entity_id: &str, group_id: &str, galaxy_index: usize) -> Vec3 {
        self.group_anchor(galaxy_index) + self.entity_offset(entity_id, group_id)
    }

    /// Place every project in the catalog. Galaxies are indexed by their
    /// order in the catalog.
    pub fn place_catalog(&self, catalog: &Catalog) -> Vec<Placement> {
        let placements: Vec<Placement> = catalog
            .placements()
            .map(|(galaxy_index, galaxy, project)| Placement {
                project_id: project.id.clone(),
                galaxy_id: galaxy.id.clone(),
                galaxy_index,
                position: self.entity_position(&project.id, &galaxy.id, galaxy_index),
            })
            .collect();
        log::debug!(
            "Placed {} projects across {} galaxies",
            placements.len(),
            catalog.galaxies.len()
        );
        placements
    }
}

/// Bounding box of a set of placements.
pub fn layout_bounds(placements: &[Placement]) -> Option<Bounds3> {
    let points: Vec<Vec3> = placements.iter().map(|p| p.position).collect();
    Bounds3::from_points(&points)
}

fn anchor_on_circle(index: usize, total: usize, radius: f64) -> Vec3 {
    assert!(total > 0, "galaxy count must be at least 1");
    let angle = (index as f64 / total as f64) * PI * 2.0;
    Vec3::new(angle.cos() * radius, 0.0, angle.sin() * radius)
}

/// Anchor of group `group_index` out of `total_groups`, on the default
/// radius-25 circle.
///
/// # Panics
///
/// Panics if `total_groups` is zero.
pub fn compute_group_anchor(group_index: usize, total_groups: usize) -> Vec3 {
    anchor_on_circle(group_index, total_groups, GALAXY_RADIUS)
}

/// Position of an entity with the default layout.
pub fn compute_entity_position(entity_id: &str, group_id: &str, group_index: usize) -> Vec3 {
    LayoutEngine::default().entity_position(entity_id, group_id, group_index)
}
