use std::ops::{Add, Sub};

use serde::{Deserialize, Serialize};

/// A point or offset in scene coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vec3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vec3 {
    pub const ZERO: Vec3 = Vec3 {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Offset of length `radius` in the direction given by azimuth `theta`
    /// and polar angle `phi`.
    pub fn from_spherical(radius: f64, theta: f64, phi: f64) -> Self {
        Self {
            x: radius * phi.sin() * theta.cos(),
            y: radius * phi.sin() * theta.sin(),
            z: radius * phi.cos(),
        }
    }

    pub fn length(&self) -> f64 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    pub fn distance_to(&self, other: &Vec3) -> f64 {
        (*self - *other).length()
    }

    pub fn translate(&self, dx: f64, dy: f64, dz: f64) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            z: self.z + dz,
        }
    }

    pub fn scale(&self, factor: f64) -> Self {
        Self {
            x: self.x * factor,
            y: self.y * factor,
            z: self.z * factor,
        }
    }

    /// Unit vector in the same direction, or `None` for the zero vector.
    pub fn normalized(&self) -> Option<Self> {
        let len = self.length();
        if len == 0.0 {
            return None;
        }
        Some(self.scale(1.0 / len))
    }

    pub fn lerp(&self, other: &Vec3, t: f64) -> Self {
        Self {
            x: lerp(self.x, other.x, t),
            y: lerp(self.y, other.y, t),
            z: lerp(self.z, other.z, t),
        }
    }

    pub fn to_array(&self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }
}

impl From<[f64; 3]> for Vec3 {
    fn from(v: [f64; 3]) -> Self {
        Self::new(v[0], v[1], v[2])
    }
}

impl From<Vec3> for [f64; 3] {
    fn from(v: Vec3) -> Self {
        v.to_array()
    }
}

impl Add for Vec3 {
    type Output = Vec3;

    fn add(self, rhs: Vec3) -> Vec3 {
        Vec3::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Vec3 {
    type Output = Vec3;

    fn sub(self, rhs: Vec3) -> Vec3 {
        Vec3::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

/// Linear interpolation between `start` and `end`.
pub fn lerp(start: f64, end: f64, t: f64) -> f64 {
    start + (end - start) * t
}

/// An axis-aligned bounding box in scene coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds3 {
    pub min: Vec3,
    pub max: Vec3,
}

impl Bounds3 {
    pub fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    /// Cube of half-width `radius` around `center`.
    pub fn around(center: Vec3, radius: f64) -> Self {
        Self {
            min: center.translate(-radius, -radius, -radius),
            max: center.translate(radius, radius, radius),
        }
    }

    pub fn from_points(points: &[Vec3]) -> Option<Self> {
        let first = points.first()?;
        let mut bounds = Self::new(*first, *first);
        for p in &points[1..] {
            bounds.min = Vec3::new(bounds.min.x.min(p.x), bounds.min.y.min(p.y), bounds.min.z.min(p.z));
            bounds.max = Vec3::new(bounds.max.x.max(p.x), bounds.max.y.max(p.y), bounds.max.z.max(p.z));
        }
        Some(bounds)
    }

    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    pub fn depth(&self) -> f64 {
        self.max.z - self.min.z
    }

    pub fn center(&self) -> Vec3 {
        self.min.lerp(&self.max, 0.5)
    }

    pub fn contains_point(&self, p: &Vec3) -> bool {
        p.x >= self.min.x
            && p.x <= self.max.x
            && p.y >= self.min.y
            && p.y <= self.max.y
            && p.z >= self.min.z
            && p.z <= self.max.z
    }

    pub fn intersects(&self, other: &Bounds3) -> bool {
        self.min.x <= other.max.x
            && self.max.x >= other.min.x
            && self.min.y <= other.max.y
            && self.max.y >= other.min.y
            && self.min.z <= other.max.z
            && self.max.z >= other.min.z
    }

    pub fn union(&self, other: &Bounds3) -> Self {
        Self {
            min: Vec3::new(
                self.min.x.min(other.min.x),
                self.min.y.min(other.min.y),
                self.min.z.min(other.min.z),
            ),
            max: Vec3::new(
                self.max.x.max(other.max.x),
                self.max.y.max(other.max.y),
                self.max.z.max(other.max.z),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn test_vec_distance() {
        let a = Vec3::new(0.0, 0.0, 0.0);
        let b = Vec3::new(2.0, 3.0, 6.0);
        assert!((a.distance_to(&b) - 7.0).abs() < 1e-10);
    }

    #[test]
    fn test_spherical_length_matches_radius() {
        let v = Vec3::from_spherical(4.5, 1.2, 2.1);
        assert!((v.length() - 4.5).abs() < 1e-10);

        // phi = 0 points straight along +z
        let up = Vec3::from_spherical(2.0, PI / 3.0, 0.0);
        assert!(up.x.abs() < 1e-10);
        assert!(up.y.abs() < 1e-10);
        assert!((up.z - 2.0).abs() < 1e-10);
    }

    #[test]
    fn test_lerp() {
        assert!((lerp(10.0, 20.0, 0.25) - 12.5).abs() < 1e-10);
        let mid = Vec3::new(0.0, 0.0, 0.0).lerp(&Vec3::new(2.0, 4.0, -6.0), 0.5);
        assert_eq!(mid, Vec3::new(1.0, 2.0, -3.0));
    }

    #[test]
    fn test_normalized_zero() {
        assert!(Vec3::ZERO.normalized().is_none());
        let n = Vec3::new(0.0, 3.0, 4.0).normalized().unwrap();
        assert!((n.length() - 1.0).abs() < 1e-10);
    }

    #[test]
    fn test_bounds_from_points() {
        let pts = [
            Vec3::new(1.0, -2.0, 3.0),
            Vec3::new(-4.0, 5.0, 0.0),
            Vec3::new(2.0, 0.0, -1.0),
        ];
        let b = Bounds3::from_points(&pts).unwrap();
        assert_eq!(b.min, Vec3::new(-4.0, -2.0, -1.0));
        assert_eq!(b.max, Vec3::new(2.0, 5.0, 3.0));
        assert!((b.width() - 6.0).abs() < 1e-10);
        assert!(Bounds3::from_points(&[]).is_none());
    }

    #[test]
    fn test_bounds_intersection() {
        let a = Bounds3::around(Vec3::ZERO, 5.0);
        let b = Bounds3::around(Vec3::new(8.0, 0.0, 0.0), 4.0);
        let c = Bounds3::around(Vec3::new(30.0, 30.0, 30.0), 1.0);
        assert!(a.intersects(&b));
        assert!(!a.intersects(&c));
        assert!(a.union(&c).contains_point(&Vec3::new(20.0, 20.0, 20.0)));
    }
}
