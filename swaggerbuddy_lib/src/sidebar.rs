//! Section/endpoint tree shown next to a project: search filter and
//! collapse state.

use std::collections::HashMap;

use swaggerbuddy_api::types::{Endpoint, Project, Section, SectionID};

use crate::format::truncate_text;

pub const NO_RESULTS: &str = "No endpoints found matching your search.";

/// Sidebar description limits, in characters.
pub const SECTION_DESCRIPTION_LIMIT: usize = 50;
pub const ENDPOINT_DESCRIPTION_LIMIT: usize = 60;

/// A section with the endpoints that survived the search filter.
#[derive(Clone, Debug, PartialEq)]
pub struct FilteredSection<'a> {
    pub section: &'a Section,
    pub endpoints: Vec<&'a Endpoint>,
}

impl FilteredSection<'_> {
    pub fn short_description(&self) -> String {
        truncate_text(&self.section.description, SECTION_DESCRIPTION_LIMIT)
    }
}

/// Endpoint description as shown in the sidebar.
pub fn endpoint_short_description(endpoint: &Endpoint) -> String {
    truncate_text(&endpoint.description, ENDPOINT_DESCRIPTION_LIMIT)
}

fn endpoint_matches(endpoint: &Endpoint, needle: &str) -> bool {
    endpoint.name.to_lowercase().contains(needle)
        || endpoint.url_of_endpoint.to_lowercase().contains(needle)
        || endpoint.description.to_lowercase().contains(needle)
        || endpoint.method.to_lowercase().contains(needle)
}

fn section_matches(section: &Section, needle: &str) -> bool {
    section.name.to_lowercase().contains(needle)
        || section.description.to_lowercase().contains(needle)
}

/// Applies the sidebar search.
///
/// A blank query keeps everything. Otherwise the query is matched as typed
/// and each section keeps only its matching endpoints. A section with no
/// matching endpoint stays, with all of its endpoints, when its own name or
/// description matches; otherwise it disappears.
pub fn filter_sections<'a>(project: &'a Project, query: &str) -> Vec<FilteredSection<'a>> {
    let searching = !query.trim().is_empty();
    let needle = query.to_lowercase();
    project
        .sections
        .iter()
        .filter_map(|section| {
            if !searching {
                return Some(FilteredSection {
                    section,
                    endpoints: section.endpoints.iter().collect(),
                });
            }
            let endpoints: Vec<&Endpoint> = section
                .endpoints
                .iter()
                .filter(|e| endpoint_matches(e, &needle))
                .collect();
            if !endpoints.is_empty() {
                Some(FilteredSection { section, endpoints })
            } else if section_matches(section, &needle) {
                Some(FilteredSection {
                    section,
                    endpoints: section.endpoints.iter().collect(),
                })
            } else {
                None
            }
        })
        .collect()
}

/// Endpoint counter under the search box.
pub fn endpoint_summary(project: &Project, filtered: &[FilteredSection<'_>], searching: bool) -> String {
    let total = project.endpoint_count();
    if searching {
        let shown: usize = filtered.iter().map(|s| s.endpoints.len()).sum();
        format!("{} of {} endpoints", shown, total)
    } else {
        format!("{} sections • {} endpoints", project.sections.len(), total)
    }
}

/// Which sections are expanded. Sections start expanded.
#[derive(Clone, Debug, Default)]
pub struct SidebarState {
    expanded: HashMap<SectionID, bool>,
}

impl SidebarState {
    pub fn new(project: &Project) -> Self {
        let expanded = project
            .sections
            .iter()
            .map(|s| (s.id.clone(), true))
            .collect();
        Self { expanded }
    }

    pub fn is_expanded(&self, section_id: &str) -> bool {
        self.expanded.get(section_id).copied().unwrap_or(true)
    }

    pub fn toggle(&mut self, section_id: &str) {
        let next = !self.is_expanded(section_id);
        self.expanded.insert(section_id.to_string(), next);
    }

    pub fn set_expanded(&mut self, section_id: &str, expanded: bool) {
        self.expanded.insert(section_id.to_string(), expanded);
    }

    /// Selecting an endpoint always reveals it.
    pub fn select_endpoint(&mut self, endpoint: &Endpoint) {
        self.set_expanded(&endpoint.section_id, true);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn load_fixture_project() -> Project {
        let json = std::fs::read_to_string(concat!(
            env!("CARGO_MANIFEST_DIR"),
            "/../swaggerbuddy_api/tests/fixtures/project.json"
        ))
        .unwrap();
        let resp: swaggerbuddy_api::types::BackendResponse<Project> =
            serde_json::from_str(&json).unwrap();
        resp.data
    }

    fn shape(filtered: &[FilteredSection<'_>]) -> Vec<(String, Vec<String>)> {
        filtered
            .iter()
            .map(|s| {
                (
                    s.section.id.clone(),
                    s.endpoints.iter().map(|e| e.id.clone()).collect(),
                )
            })
            .collect()
    }

    #[test]
    fn blank_query_keeps_everything() {
        let project = load_fixture_project();
        let filtered = filter_sections(&project, "  ");
        assert_eq!(filtered.len(), 3);
        assert_eq!(filtered.iter().map(|s| s.endpoints.len()).sum::<usize>(), 5);
    }

    #[test]
    fn endpoint_match_keeps_only_matching_endpoints() {
        let project = load_fixture_project();
        let filtered = filter_sections(&project, "LOGOUT");
        assert_eq!(
            shape(&filtered),
            vec![("sec-user".to_string(), vec!["ep-logout".to_string()])]
        );
    }

    #[test]
    fn section_description_match_keeps_all_endpoints() {
        let project = load_fixture_project();
        let filtered = filter_sections(&project, "user accounts");
        assert_eq!(
            shape(&filtered),
            vec![(
                "sec-user".to_string(),
                vec!["ep-logout".to_string(), "ep-delete-user".to_string()]
            )]
        );
    }

    #[test]
    fn matching_endpoints_win_over_section_match() {
        let project = load_fixture_project();
        // "about" in both section descriptions; only ep-logout matches itself.
        let filtered = filter_sections(&project, "out");
        assert_eq!(
            shape(&filtered),
            vec![
                (
                    "sec-pet".to_string(),
                    vec!["ep-find-pet".to_string(), "ep-add-pet".to_string()]
                ),
                ("sec-user".to_string(), vec!["ep-logout".to_string()]),
            ]
        );
    }

    #[test]
    fn trailing_space_is_matched() {
        let project = load_fixture_project();
        let filtered = filter_sections(&project, "user ");
        assert_eq!(
            shape(&filtered),
            vec![("sec-user".to_string(), vec!["ep-logout".to_string()])]
        );
        assert_eq!(filter_sections(&project, "user")[0].endpoints.len(), 2);
    }

    #[test]
    fn method_is_searchable() {
        let project = load_fixture_project();
        let filtered = filter_sections(&project, "delete");
        assert_eq!(
            shape(&filtered),
            vec![("sec-user".to_string(), vec!["ep-delete-user".to_string()])]
        );
    }

    #[test]
    fn no_match_yields_empty() {
        let project = load_fixture_project();
        assert!(filter_sections(&project, "graphql").is_empty());
    }

    #[test]
    fn summaries() {
        let project = load_fixture_project();
        let all = filter_sections(&project, "");
        assert_eq!(endpoint_summary(&project, &all, false), "3 sections • 5 endpoints");
        let some = filter_sections(&project, "logout");
        assert_eq!(endpoint_summary(&project, &some, true), "1 of 5 endpoints");
    }

    #[test]
    fn sections_start_expanded_and_toggle() {
        let project = load_fixture_project();
        let mut state = SidebarState::new(&project);
        assert!(state.is_expanded("sec-pet"));
        state.toggle("sec-pet");
        assert!(!state.is_expanded("sec-pet"));
        state.toggle("sec-pet");
        assert!(state.is_expanded("sec-pet"));
    }

    #[test]
    fn selecting_endpoint_expands_its_section() {
        let project = load_fixture_project();
        let mut state = SidebarState::new(&project);
        state.toggle("sec-user");
        let endpoint = project.find_endpoint("ep-logout").unwrap();
        state.select_endpoint(endpoint);
        assert!(state.is_expanded("sec-user"));
    }

    #[test]
    fn descriptions_truncated() {
        let project = load_fixture_project();
        let filtered = filter_sections(&project, "");
        let long = "x".repeat(80);
        let mut endpoint = project.sections[0].endpoints[0].clone();
        endpoint.description = long;
        assert_eq!(endpoint_short_description(&endpoint).chars().count(), 63);
        assert_eq!(filtered[0].short_description(), "Everything about your Pets");
    }
}
