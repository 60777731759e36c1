//! Links between projects in different galaxies that share key technologies.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::geometry::Vec3;
use crate::layout::LayoutEngine;

/// Technologies worth drawing a connection for.
pub const KEY_TECHNOLOGIES: &[&str] = &[
    "AI",
    "Next.js",
    "React",
    "TypeScript",
    "Supabase",
    "Stripe",
    "Claude",
    "GPT-4",
    "Three.js",
    "Spaced Repetition",
    "RAG",
];

const CONNECTION_COLORS: &[(&str, &str)] = &[
    ("AI", "#00D9FF"),
    ("Next.js", "#9D4EDD"),
    ("React", "#61DAFB"),
    ("TypeScript", "#3178C6"),
    ("Supabase", "#3ECF8E"),
    ("Stripe", "#635BFF"),
    ("Claude", "#D97706"),
    ("GPT-4", "#10A37F"),
    ("Three.js", "#000000"),
];

pub const DEFAULT_CONNECTION_COLOR: &str = "#FFFFFF";

fn connection_color(tag: &str) -> Option<&'static str> {
    CONNECTION_COLORS
        .iter()
        .find(|(t, _)| *t == tag)
        .map(|(_, c)| *c)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Connection {
    pub from_id: String,
    pub to_id: String,
    pub from_position: Vec3,
    pub to_position: Vec3,
    pub shared_tags: Vec<String>,
    /// 0-1, saturating at three shared tags.
    pub strength: f64,
    /// Hex color of the first shared tag that has one.
    pub color: String,
}

impl Connection {
    pub fn touches(&self, project_id: &str) -> bool {
        self.from_id == project_id || self.to_id == project_id
    }
}

/// Connections between every cross-galaxy pair of projects sharing at least
/// one key technology. Each unordered pair appears once.
pub fn compute_connections(catalog: &Catalog, engine: &LayoutEngine) -> Vec<Connection> {
    let projects: Vec<_> = catalog
        .placements()
        .map(|(index, galaxy, project)| {
            (project, engine.entity_position(&project.id, &galaxy.id, index))
        })
        .collect();

    let mut seen_pairs = HashSet::new();
    let mut connections = Vec::new();

    for (i, (a, a_pos)) in projects.iter().enumerate() {
        for (b, b_pos) in &projects[i + 1..] {
            if a.galaxy == b.galaxy {
                continue;
            }
            let shared_tags: Vec<String> = a
                .tags
                .iter()
                .filter(|tag| b.has_tag(tag) && KEY_TECHNOLOGIES.contains(&tag.as_str()))
                .cloned()
                .collect();
            if shared_tags.is_empty() {
                continue;
            }

            let pair = if a.id <= b.id {
                (a.id.as_str(), b.id.as_str())
            } else {
                (b.id.as_str(), a.id.as_str())
            };
            if !seen_pairs.insert(pair) {
                continue;
            }

            let color = shared_tags
                .iter()
                .find_map(|tag| connection_color(tag))
                .unwrap_or(DEFAULT_CONNECTION_COLOR);

            connections.push(Connection {
                from_id: a.id.clone(),
                to_id: b.id.clone(),
                from_position: *a_pos,
                to_position: *b_pos,
                strength: (shared_tags.len() as f64 / 3.0).min(1.0),
                shared_tags,
                color: color.to_string(),
            });
        }
    }

    log::debug!("Computed {} cross-galaxy connections", connections.len());
    connections
}

/// Connections with `project_id` at either end.
pub fn connections_for<'a>(project_id: &str, connections: &'a [Connection]) -> Vec<&'a Connection> {
    connections.iter().filter(|c| c.touches(project_id)).collect()
}
