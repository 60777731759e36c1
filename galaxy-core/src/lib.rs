//! # Galaxy Core
//!
//! Deterministic procedural layout for the galaxy portfolio: a seeded
//! pseudo-random generator, a string hash, and the layout engine that turns
//! project and galaxy identifiers into stable 3D coordinates.
//!
//! Around that core sit the typed project catalog, catalog checks, an R-tree
//! index over placed projects, cross-galaxy relationships and the seeded
//! asteroid belts that decorate galaxy anchors.

pub mod geometry;
pub mod rng;
pub mod hash;
pub mod layout;
pub mod catalog;
pub mod check;
pub mod color;
pub mod spatial;
pub mod relationships;
pub mod belt;

pub use catalog::{Catalog, Galaxy, Project, ProjectSize};
pub use geometry::{Bounds3, Vec3};
pub use hash::hash_code;
pub use layout::{
    compute_entity_position, compute_group_anchor, LayoutConfig, LayoutEngine, LayoutError,
    Placement,
};
pub use rng::SeededRng;
