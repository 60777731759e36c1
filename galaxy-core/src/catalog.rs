use serde::{Deserialize, Serialize};

/// Visual weight of a project star.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectSize {
    #[default]
    Small,
    Medium,
    Large,
    Supermassive,
}

impl ProjectSize {
    /// Scale applied to the star mesh.
    pub fn size_multiplier(&self) -> f64 {
        match self {
            ProjectSize::Supermassive => 3.0,
            ProjectSize::Large => 1.8,
            ProjectSize::Medium => 1.2,
            ProjectSize::Small => 0.8,
        }
    }

    /// Dot radius in minimap pixels.
    pub fn minimap_radius(&self) -> f64 {
        match self {
            ProjectSize::Supermassive => 6.0,
            ProjectSize::Large => 4.0,
            ProjectSize::Medium | ProjectSize::Small => 3.0,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectMetrics {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub files: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tests: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub users: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectLinks {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub live: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub case_study: Option<String>,
}

/// A single portfolio project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// e.g. "Design Team Lead", "Software Engineer"
    #[serde(default)]
    pub role: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    /// Hex color, normally inherited from the galaxy.
    #[serde(default)]
    pub color: String,
    /// 0.5 - 2.0 for visual hierarchy.
    #[serde(default = "default_brightness")]
    pub brightness: f64,
    #[serde(default)]
    pub size: ProjectSize,
    /// Id of the galaxy this project belongs to.
    pub galaxy: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metrics: Option<ProjectMetrics>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub links: Option<ProjectLinks>,
    #[serde(default)]
    pub featured: bool,
    /// "2023-2024", "2022", etc.
    #[serde(default, rename = "dateRange", alias = "date_range")]
    pub date_range: String,
}

fn default_brightness() -> f64 {
    1.0
}

impl Project {
    pub fn new(id: &str, title: &str, galaxy: &str) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            description: String::new(),
            role: String::new(),
            company: None,
            tags: Vec::new(),
            color: String::new(),
            brightness: default_brightness(),
            size: ProjectSize::default(),
            galaxy: galaxy.to_string(),
            metrics: None,
            links: None,
            featured: false,
            date_range: String::new(),
        }
    }

    pub fn with_tags(mut self, tags: &[&str]) -> Self {
        self.tags = tags.iter().map(|t| t.to_string()).collect();
        self
    }

    pub fn with_size(mut self, size: ProjectSize) -> Self {
        self.size = size;
        self
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    pub fn display_date_range(&self) -> String {
        format_date_range(&self.date_range)
    }
}

/// A themed cluster of projects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Galaxy {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Primary color for this galaxy's stars.
    #[serde(default)]
    pub color: String,
    /// Relative size/importance.
    #[serde(default = "default_galaxy_size")]
    pub size: f64,
    #[serde(default)]
    pub projects: Vec<Project>,
}

fn default_galaxy_size() -> f64 {
    1.0
}

impl Galaxy {
    pub fn new(id: &str, name: &str, color: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            description: String::new(),
            color: color.to_string(),
            size: default_galaxy_size(),
            projects: Vec::new(),
        }
    }

    /// Add a project, stamping this galaxy's id on it.
    pub fn add_project(&mut self, mut project: Project) {
        project.galaxy = self.id.clone();
        if project.color.is_empty() {
            project.color = self.color.clone();
        }
        self.projects.push(project);
    }

    pub fn project_count(&self) -> usize {
        self.projects.len()
    }
}

/// The full portfolio: galaxies in display order, each owning its projects.
///
/// A galaxy's index in `galaxies` is its group index for layout.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    pub galaxies: Vec<Galaxy>,
}

impl Catalog {
    pub fn new(galaxies: Vec<Galaxy>) -> Self {
        Self { galaxies }
    }

    pub fn galaxy_index(&self, galaxy_id: &str) -> Option<usize> {
        self.galaxies.iter().position(|g| g.id == galaxy_id)
    }

    pub fn galaxy(&self, galaxy_id: &str) -> Option<&Galaxy> {
        self.galaxies.iter().find(|g| g.id == galaxy_id)
    }

    pub fn find_project(&self, project_id: &str) -> Option<&Project> {
        self.all_projects().find(|p| p.id == project_id)
    }

    pub fn all_projects(&self) -> impl Iterator<Item = &Project> {
        self.galaxies.iter().flat_map(|g| g.projects.iter())
    }

    pub fn featured_projects(&self) -> impl Iterator<Item = &Project> {
        self.all_projects().filter(|p| p.featured)
    }

    pub fn project_count(&self) -> usize {
        self.galaxies.iter().map(|g| g.project_count()).sum()
    }

    /// Every project with its containing galaxy and that galaxy's index.
    pub fn placements(&self) -> impl Iterator<Item = (usize, &Galaxy, &Project)> {
        self.galaxies
            .iter()
            .enumerate()
            .flat_map(|(i, g)| g.projects.iter().map(move |p| (i, g, p)))
    }

    // ── Serialization ────────────────────────────────────────────────

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

/// Render "2023-2024" as "2023–2024". Strings without a hyphen are returned as is.
pub fn format_date_range(date_range: &str) -> String {
    match date_range.split_once('-') {
        Some((start, rest)) => {
            let end = rest.split('-').next().unwrap_or_default();
            format!("{}\u{2013}{}", start, end)
        }
        None => date_range.to_string(),
    }
}
