use rstar::{PointDistance, RTree, RTreeObject, AABB};

use crate::geometry::{Bounds3, Vec3};
use crate::layout::Placement;

/// An entry in the R-tree, referencing a placement by its index.
#[derive(Debug, Clone)]
pub struct PlacementEntry {
    /// Index into the placement slice the index was built from.
    pub placement_index: usize,
    pub position: Vec3,
}

impl RTreeObject for PlacementEntry {
    type Envelope = AABB<[f64; 3]>;

    fn envelope(&self) -> Self::Envelope {
        AABB::from_point(self.position.to_array())
    }
}

impl PointDistance for PlacementEntry {
    fn distance_2(&self, point: &[f64; 3]) -> f64 {
        let d = self.position - Vec3::from(*point);
        d.x * d.x + d.y * d.y + d.z * d.z
    }
}

/// Spatial index over placed projects for picking and culling.
pub struct PlacementIndex {
    tree: RTree<PlacementEntry>,
}

impl PlacementIndex {
    pub fn new() -> Self {
        Self { tree: RTree::new() }
    }

    pub fn build(placements: &[Placement]) -> Self {
        let entries = placements
            .iter()
            .enumerate()
            .map(|(i, p)| PlacementEntry {
                placement_index: i,
                position: p.position,
            })
            .collect();
        Self {
            tree: RTree::bulk_load(entries),
        }
    }

    pub fn insert(&mut self, entry: PlacementEntry) {
        self.tree.insert(entry);
    }

    /// Entry closest to `point`, e.g. the project nearest a camera target.
    pub fn nearest(&self, point: &Vec3) -> Option<&PlacementEntry> {
        self.tree.nearest_neighbor(&point.to_array())
    }

    /// Entries within `radius` of `point`, in no particular order.
    pub fn within_radius(&self, point: &Vec3, radius: f64) -> Vec<&PlacementEntry> {
        self.tree
            .locate_within_distance(point.to_array(), radius * radius)
            .collect()
    }

    /// Entries inside the given box.
    pub fn in_bounds(&self, bounds: &Bounds3) -> Vec<&PlacementEntry> {
        let envelope = AABB::from_corners(bounds.min.to_array(), bounds.max.to_array());
        self.tree.locate_in_envelope(&envelope).collect()
    }

    pub fn len(&self) -> usize {
        self.tree.size()
    }

    pub fn is_empty(&self) -> bool {
        self.tree.size() == 0
    }
}

impl Default for PlacementIndex {
    fn default() -> Self {
        Self::new()
    }
}
