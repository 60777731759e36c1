//! Seeded asteroid belts and dust rings decorating galaxy anchors.
//!
//! Every value is drawn from a [`SeededRng`] in a fixed order, so a belt is
//! fully determined by its galaxy id.

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::geometry::Vec3;
use crate::hash::hash_concat;
use crate::layout::LayoutEngine;
use crate::rng::SeededRng;

/// Galaxy indices that carry a belt.
pub const BELT_GALAXIES: [usize; 3] = [0, 2, 4];

const SHAPE_SEED_OFFSET: u32 = 12345;
const DUST_SEED_OFFSET: u32 = 999;
const DUST_COUNT: usize = 100;

/// Shape of one belt, relative to its galaxy anchor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BeltConfig {
    pub galaxy_id: String,
    pub center: Vec3,
    pub inner_radius: f64,
    pub outer_radius: f64,
    pub count: usize,
    pub color: String,
    pub seed: u32,
}

impl BeltConfig {
    /// Preset for the galaxy at `galaxy_index`. `reduced_motion` trims the
    /// rock count.
    pub fn preset(galaxy_id: &str, galaxy_index: usize, center: Vec3, reduced_motion: bool) -> Self {
        let (inner_radius, outer_radius, full, reduced, color) = match galaxy_index {
            0 => (14.0, 20.0, 500, 100, "#9D8B7A"),
            2 => (12.0, 17.0, 400, 80, "#7A6B8A"),
            4 => (10.0, 15.0, 350, 60, "#8A7A6B"),
            _ => (12.0, 18.0, 400, 80, "#8B7355"),
        };
        Self {
            galaxy_id: galaxy_id.to_string(),
            center,
            inner_radius,
            outer_radius,
            count: if reduced_motion { reduced } else { full },
            color: color.to_string(),
            seed: hash_concat(&[galaxy_id, "asteroids"]),
        }
    }

    pub fn rocks(&self) -> Vec<Rock> {
        generate_rocks(self.seed, self.count, self.inner_radius, self.outer_radius)
    }

    /// Dust ring slightly wider than the belt itself.
    pub fn dust(&self) -> Vec<DustParticle> {
        generate_dust(
            self.seed.wrapping_add(DUST_SEED_OFFSET),
            DUST_COUNT,
            self.inner_radius - 1.0,
            self.outer_radius + 2.0,
        )
    }

    /// Per-vertex scale factors that roughen the shared rock mesh.
    pub fn shape_noise(&self, vertex_count: usize) -> Vec<f64> {
        SeededRng::new(self.seed.wrapping_add(SHAPE_SEED_OFFSET))
            .take(vertex_count)
            .map(|u| 0.7 + u * 0.6)
            .collect()
    }
}

/// Belts for the catalog's belt galaxies that actually exist.
pub fn catalog_belts(catalog: &Catalog, engine: &LayoutEngine, reduced_motion: bool) -> Vec<BeltConfig> {
    BELT_GALAXIES
        .iter()
        .filter_map(|&index| {
            let galaxy = catalog.galaxies.get(index)?;
            Some(BeltConfig::preset(
                &galaxy.id,
                index,
                engine.group_anchor(index),
                reduced_motion,
            ))
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rock {
    /// Position relative to the belt center.
    pub position: Vec3,
    pub rotation: Vec3,
    pub scale: f64,
    pub orbit_speed: f64,
    pub tumble_speed: Vec3,
    pub orbit_angle: f64,
    pub orbit_radius: f64,
    pub orbit_tilt: f64,
}

impl Rock {
    /// Position relative to the belt center after `time` seconds of orbit.
    pub fn position_at(&self, time: f64) -> Vec3 {
        let angle = self.orbit_angle + time * self.orbit_speed;
        Vec3::new(
            angle.cos() * self.orbit_radius,
            self.position.y + (angle * 2.0).sin() * self.orbit_tilt * 2.0,
            angle.sin() * self.orbit_radius,
        )
    }

    pub fn rotation_at(&self, time: f64) -> Vec3 {
        self.rotation + self.tumble_speed.scale(time)
    }
}

pub fn generate_rocks(seed: u32, count: usize, inner_radius: f64, outer_radius: f64) -> Vec<Rock> {
    let mut rng = SeededRng::new(seed);
    (0..count)
        .map(|_| {
            let angle = rng.next_f64() * PI * 2.0;
            let radius = rng.range(inner_radius, outer_radius);
            let height = rng.centered() * 3.0;

            let cluster_noise = (angle * 3.0).sin() * 2.0 + (angle * 7.0).cos() * 1.5;
            let orbit_radius = radius + cluster_noise;

            // mostly small, 8% medium, 2% large
            let size_roll = rng.next_f64();
            let scale = if size_roll > 0.98 {
                0.4 + rng.next_f64() * 0.3
            } else if size_roll > 0.9 {
                0.2 + rng.next_f64() * 0.2
            } else {
                0.05 + rng.next_f64() * 0.15
            };

            let orbit_speed = 0.02 + rng.next_f64() * 0.03;
            let tumble_speed = Vec3::new(
                rng.centered() * 0.5,
                rng.centered() * 0.5,
                rng.centered() * 0.5,
            );
            let rotation = Vec3::new(
                rng.next_f64() * PI * 2.0,
                rng.next_f64() * PI * 2.0,
                rng.next_f64() * PI * 2.0,
            );
            let orbit_tilt = rng.centered() * 0.2;

            Rock {
                position: Vec3::new(angle.cos() * orbit_radius, height, angle.sin() * orbit_radius),
                rotation,
                scale,
                orbit_speed,
                tumble_speed,
                orbit_angle: angle,
                orbit_radius,
                orbit_tilt,
            }
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DustParticle {
    pub position: Vec3,
    pub size: f64,
}

pub fn generate_dust(seed: u32, count: usize, inner_radius: f64, outer_radius: f64) -> Vec<DustParticle> {
    let mut rng = SeededRng::new(seed);
    (0..count)
        .map(|_| {
            let angle = rng.next_f64() * PI * 2.0;
            let radius = rng.range(inner_radius, outer_radius);
            let height = rng.centered() * 4.0;
            DustParticle {
                position: Vec3::new(angle.cos() * radius, height, angle.sin() * radius),
                size: 0.02 + rng.next_f64() * 0.05,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Galaxy;
    use crate::hash::hash_code;

    #[test]
    fn test_presets() {
        let belt = BeltConfig::preset("enterprise", 0, Vec3::ZERO, false);
        assert_eq!(belt.count, 500);
        assert_eq!(belt.seed, hash_code("enterpriseasteroids"));
        assert_eq!(BeltConfig::preset("design", 4, Vec3::ZERO, true).count, 60);
        assert_eq!(BeltConfig::preset("misc", 5, Vec3::ZERO, false).color, "#8B7355");
    }

    #[test]
    fn test_rocks_deterministic_and_bounded() {
        let belt = BeltConfig::preset("fullstack", 2, Vec3::ZERO, false);
        let rocks = belt.rocks();
        assert_eq!(rocks.len(), 400);
        assert_eq!(rocks, belt.rocks());

        for rock in &rocks {
            // cluster noise shifts the ring by at most 3.5
            assert!(rock.orbit_radius >= 12.0 - 3.5 && rock.orbit_radius <= 17.0 + 3.5);
            assert!(rock.position.y.abs() <= 1.5);
            assert!(rock.scale >= 0.05 && rock.scale < 0.7);
            assert!(rock.orbit_speed >= 0.02 && rock.orbit_speed < 0.05);
        }
    }

    #[test]
    fn test_rock_orbit_at_zero_matches_start() {
        let rock = &generate_rocks(3, 1, 10.0, 12.0)[0];
        let start = rock.position_at(0.0);
        assert!((start.x - rock.position.x).abs() < 1e-12);
        assert!((start.z - rock.position.z).abs() < 1e-12);
        assert!((rock.rotation_at(0.0).x - rock.rotation.x).abs() < 1e-12);
    }

    #[test]
    fn test_dust_and_shape_noise() {
        let belt = BeltConfig::preset("enterprise", 0, Vec3::ZERO, false);
        let dust = belt.dust();
        assert_eq!(dust.len(), DUST_COUNT);
        for d in &dust {
            let r = (d.position.x.powi(2) + d.position.z.powi(2)).sqrt();
            assert!(r >= 13.0 - 1e-9 && r <= 22.0 + 1e-9);
            assert!(d.size >= 0.02 && d.size < 0.07);
        }
        let noise = belt.shape_noise(42);
        assert_eq!(noise.len(), 42);
        assert!(noise.iter().all(|n| (0.7..1.3).contains(n)));
    }

    #[test]
    fn test_catalog_belts_skip_missing_galaxies() {
        let galaxies: Vec<Galaxy> = (0..3)
            .map(|i| Galaxy::new(&format!("g{}", i), "G", "#fff"))
            .collect();
        let engine = LayoutEngine::default();
        let belts = catalog_belts(&Catalog::new(galaxies), &engine, false);
        assert_eq!(belts.len(), 2);
        assert_eq!(belts[1].galaxy_id, "g2");
        assert_eq!(belts[1].center, engine.group_anchor(2));
    }
}
