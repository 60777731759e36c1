//! Non-fatal consistency checks over a [`Catalog`].
//!
//! The layout engine accepts any strings, so nothing here blocks placement.
//! Issues are reported so a catalog author can spot duplicate ids or
//! projects filed under the wrong galaxy before they show up as overlapping
//! stars.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::layout::LayoutConfig;

/// Kind of catalog issue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum IssueKind {
    DuplicateProjectId,
    DuplicateGalaxyId,
    GalaxyMismatch,
    BrightnessOutOfRange,
    TooManyGalaxies,
    EmptyIdentifier,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Severity {
    Error,
    Warning,
    Info,
}

/// A single catalog issue and the id it concerns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogIssue {
    pub kind: IssueKind,
    pub severity: Severity,
    pub subject: String,
    pub message: String,
}

impl CatalogIssue {
    fn new(kind: IssueKind, severity: Severity, subject: &str, message: String) -> Self {
        Self {
            kind,
            severity,
            subject: subject.to_string(),
            message,
        }
    }
}

pub const MIN_BRIGHTNESS: f64 = 0.5;
pub const MAX_BRIGHTNESS: f64 = 2.0;

impl Catalog {
    pub fn check(&self, config: &LayoutConfig) -> Vec<CatalogIssue> {
        let mut issues = Vec::new();

        if self.galaxies.len() > config.galaxy_count {
            issues.push(CatalogIssue::new(
                IssueKind::TooManyGalaxies,
                Severity::Warning,
                "",
                format!(
                    "{} galaxies but only {} anchor slots; anchors will overlap",
                    self.galaxies.len(),
                    config.galaxy_count
                ),
            ));
        }

        let mut galaxy_ids = HashSet::new();
        for galaxy in &self.galaxies {
            if galaxy.id.is_empty() {
                issues.push(CatalogIssue::new(
                    IssueKind::EmptyIdentifier,
                    Severity::Info,
                    "",
                    format!("galaxy '{}' has an empty id", galaxy.name),
                ));
            }
            if !galaxy_ids.insert(galaxy.id.as_str()) {
                issues.push(CatalogIssue::new(
                    IssueKind::DuplicateGalaxyId,
                    Severity::Error,
                    &galaxy.id,
                    format!("galaxy id '{}' is used more than once", galaxy.id),
                ));
            }
        }

        let mut project_ids = HashSet::new();
        for (_, galaxy, project) in self.placements() {
            if project.id.is_empty() {
                issues.push(CatalogIssue::new(
                    IssueKind::EmptyIdentifier,
                    Severity::Info,
                    "",
                    format!("project '{}' in '{}' has an empty id", project.title, galaxy.id),
                ));
            }
            if !project_ids.insert(project.id.as_str()) {
                issues.push(CatalogIssue::new(
                    IssueKind::DuplicateProjectId,
                    Severity::Error,
                    &project.id,
                    format!("project id '{}' is used more than once", project.id),
                ));
            }
            if project.galaxy != galaxy.id {
                issues.push(CatalogIssue::new(
                    IssueKind::GalaxyMismatch,
                    Severity::Warning,
                    &project.id,
                    format!(
                        "project '{}' names galaxy '{}' but is listed under '{}'",
                        project.id, project.galaxy, galaxy.id
                    ),
                ));
            }
            if !(MIN_BRIGHTNESS..=MAX_BRIGHTNESS).contains(&project.brightness) {
                issues.push(CatalogIssue::new(
                    IssueKind::BrightnessOutOfRange,
                    Severity::Warning,
                    &project.id,
                    format!("brightness {} outside [0.5, 2.0]", project.brightness),
                ));
            }
        }

        for issue in &issues {
            if issue.severity != Severity::Info {
                log::warn!("{}", issue.message);
            }
        }
        issues
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Galaxy, Project};

    #[test]
    fn test_clean_catalog() {
        let mut g = Galaxy::new("ai", "AI", "#fff");
        g.add_project(Project::new("atlas", "Atlas", ""));
        let catalog = Catalog::new(vec![g]);
        assert!(catalog.check(&LayoutConfig::default()).is_empty());
    }

    #[test]
    fn test_duplicates_and_mismatch() {
        let mut a = Galaxy::new("ai", "AI", "#fff");
        a.add_project(Project::new("atlas", "Atlas", ""));
        a.projects.push(Project::new("atlas", "Atlas again", "design"));
        let b = Galaxy::new("ai", "AI twin", "#000");
        let catalog = Catalog::new(vec![a, b]);

        let issues = catalog.check(&LayoutConfig::default());
        let kinds: Vec<&IssueKind> = issues.iter().map(|i| &i.kind).collect();
        assert!(kinds.contains(&&IssueKind::DuplicateGalaxyId));
        assert!(kinds.contains(&&IssueKind::DuplicateProjectId));
        assert!(kinds.contains(&&IssueKind::GalaxyMismatch));
        assert!(issues
            .iter()
            .filter(|i| i.kind == IssueKind::DuplicateProjectId)
            .all(|i| i.severity == Severity::Error && i.subject == "atlas"));
    }

    #[test]
    fn test_brightness_and_galaxy_count() {
        let galaxies: Vec<Galaxy> = (0..3)
            .map(|i| Galaxy::new(&format!("g{}", i), "G", "#fff"))
            .collect();
        let mut catalog = Catalog::new(galaxies);
        let mut dim = Project::new("dim", "Dim", "");
        dim.brightness = 0.1;
        catalog.galaxies[0].add_project(dim);

        let config = LayoutConfig {
            galaxy_count: 2,
            ..Default::default()
        };
        let issues = catalog.check(&config);
        assert_eq!(issues.len(), 2);
        assert!(issues.iter().any(|i| i.kind == IssueKind::TooManyGalaxies));
        assert!(issues.iter().any(|i| i.kind == IssueKind::BrightnessOutOfRange));
    }

    #[test]
    fn test_empty_ids_are_info() {
        let mut g = Galaxy::new("", "Nameless", "#fff");
        g.add_project(Project::new("", "Blank", ""));
        let issues = Catalog::new(vec![g]).check(&LayoutConfig::default());
        assert_eq!(issues.len(), 2);
        assert!(issues.iter().all(|i| i.severity == Severity::Info));
    }
}
