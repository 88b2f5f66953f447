//! Search and sort over the project listing.
//!
//! Filtering and sorting happen locally on the fetched summaries; the
//! backend has no query parameters for either.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use swaggerbuddy_api::types::ProjectSummary;

/// How many projects the home page shows as "recent".
pub const RECENT_LIMIT: usize = 6;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortField {
    Name,
    #[default]
    CreatedAt,
    BaseUrl,
}

impl FromStr for SortField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "name" => Ok(SortField::Name),
            "created-at" | "created_at" | "created" => Ok(SortField::CreatedAt),
            "base-url" | "base_url" | "url" => Ok(SortField::BaseUrl),
            _ => Err(format!(
                "Invalid sort field '{}'. Use name, created-at or base-url",
                s
            )),
        }
    }
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SortField::Name => "name",
            SortField::CreatedAt => "created-at",
            SortField::BaseUrl => "base-url",
        };
        write!(f, "{}", s)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl SortOrder {
    pub fn toggled(self) -> Self {
        match self {
            SortOrder::Asc => SortOrder::Desc,
            SortOrder::Desc => SortOrder::Asc,
        }
    }
}

/// The project listing with its search box and sort controls.
#[derive(Clone, Debug, Default)]
pub struct ProjectList {
    projects: Vec<ProjectSummary>,
    query: String,
    sort_field: SortField,
    sort_order: SortOrder,
}

impl ProjectList {
    pub fn new(projects: Vec<ProjectSummary>) -> Self {
        Self {
            projects,
            ..Default::default()
        }
    }

    pub fn set_query(&mut self, query: &str) {
        self.query = query.to_string();
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn sort_field(&self) -> SortField {
        self.sort_field
    }

    pub fn sort_order(&self) -> SortOrder {
        self.sort_order
    }

    /// Column-header behavior: clicking the active field flips the order,
    /// clicking another field selects it in ascending order.
    pub fn handle_sort(&mut self, field: SortField) {
        if self.sort_field == field {
            self.sort_order = self.sort_order.toggled();
        } else {
            self.sort_field = field;
            self.sort_order = SortOrder::Asc;
        }
    }

    pub fn set_sort(&mut self, field: SortField, order: SortOrder) {
        self.sort_field = field;
        self.sort_order = order;
    }

    /// Projects matching the query, in the selected order.
    pub fn visible(&self) -> Vec<&ProjectSummary> {
        let mut filtered = filter_projects(&self.projects, &self.query);
        sort_projects(&mut filtered, self.sort_field, self.sort_order);
        filtered
    }

    /// Drops a deleted project from the listing. Returns false if no project
    /// had that id.
    pub fn remove(&mut self, project_id: &str) -> bool {
        match self.projects.iter().position(|p| p.id == project_id) {
            Some(idx) => {
                self.projects.remove(idx);
                true
            }
            None => false,
        }
    }

    pub fn all(&self) -> &[ProjectSummary] {
        &self.projects
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    pub fn is_searching(&self) -> bool {
        !self.query.trim().is_empty()
    }

    /// Counter shown under the search box.
    pub fn summary(&self) -> String {
        let total = self.projects.len();
        if self.is_searching() {
            format!("{} of {} projects", self.visible().len(), total)
        } else {
            format!("{} projects", total)
        }
    }
}

/// Case-insensitive substring match over name, base URL and id. A blank query
/// matches everything; otherwise the query is matched as typed, spaces included.
pub fn filter_projects<'a>(projects: &'a [ProjectSummary], query: &str) -> Vec<&'a ProjectSummary> {
    if query.trim().is_empty() {
        return projects.iter().collect();
    }
    let needle = query.to_lowercase();
    projects
        .iter()
        .filter(|p| {
            p.name.to_lowercase().contains(&needle)
                || p.base_url.to_lowercase().contains(&needle)
                || p.id.to_lowercase().contains(&needle)
        })
        .collect()
}

/// Stable sort. Equal keys keep their input order in both directions.
pub fn sort_projects(projects: &mut [&ProjectSummary], field: SortField, order: SortOrder) {
    projects.sort_by(|a, b| {
        let c = compare(a, b, field);
        match order {
            SortOrder::Asc => c,
            SortOrder::Desc => c.reverse(),
        }
    });
}

fn compare(a: &ProjectSummary, b: &ProjectSummary, field: SortField) -> Ordering {
    match field {
        SortField::Name => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
        SortField::BaseUrl => a.base_url.to_lowercase().cmp(&b.base_url.to_lowercase()),
        SortField::CreatedAt => {
            let a = a.created_at.as_deref().unwrap_or("");
            let b = b.created_at.as_deref().unwrap_or("");
            a.cmp(b)
        }
    }
}

/// The first [`RECENT_LIMIT`] projects in backend order.
pub fn recent(projects: &[ProjectSummary]) -> &[ProjectSummary] {
    &projects[..projects.len().min(RECENT_LIMIT)]
}
