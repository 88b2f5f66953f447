//! State of the project detail page.

use swaggerbuddy_api::types::{Endpoint, EndpointID, Project};

use crate::endpoint_view::{EndpointTab, EndpointView};
use crate::error::SwaggerBuddyError;
use crate::sidebar::{endpoint_summary, filter_sections, FilteredSection, SidebarState};

/// A loaded project with its sidebar, search box, selected endpoint and tab.
#[derive(Clone, Debug)]
pub struct ProjectDetail {
    project: Project,
    sidebar: SidebarState,
    search_query: String,
    selected_endpoint: Option<EndpointID>,
    active_tab: EndpointTab,
}

impl ProjectDetail {
    /// Starts with every section expanded and the first endpoint of the
    /// first section selected.
    pub fn new(project: Project) -> Self {
        let sidebar = SidebarState::new(&project);
        let selected_endpoint = project.first_endpoint().map(|e| e.id.clone());
        Self {
            project,
            sidebar,
            search_query: String::new(),
            selected_endpoint,
            active_tab: EndpointTab::default(),
        }
    }

    pub fn project(&self) -> &Project {
        &self.project
    }

    pub fn sidebar(&self) -> &SidebarState {
        &self.sidebar
    }

    pub fn set_search(&mut self, query: &str) {
        self.search_query = query.to_string();
    }

    pub fn search(&self) -> &str {
        &self.search_query
    }

    pub fn is_searching(&self) -> bool {
        !self.search_query.trim().is_empty()
    }

    pub fn visible_sections(&self) -> Vec<FilteredSection<'_>> {
        filter_sections(&self.project, &self.search_query)
    }

    pub fn toggle_section(&mut self, section_id: &str) {
        self.sidebar.toggle(section_id);
    }

    /// Selects an endpoint and expands its section.
    pub fn select_endpoint(&mut self, endpoint_id: &str) -> Result<(), SwaggerBuddyError> {
        let endpoint = self.project.find_endpoint(endpoint_id).ok_or_else(|| {
            SwaggerBuddyError::InvalidInput(format!(
                "Endpoint '{}' not found in project '{}'",
                endpoint_id, self.project.name
            ))
        })?;
        self.sidebar.select_endpoint(endpoint);
        self.selected_endpoint = Some(endpoint.id.clone());
        Ok(())
    }

    pub fn selected_endpoint(&self) -> Option<&Endpoint> {
        self.selected_endpoint
            .as_deref()
            .and_then(|id| self.project.find_endpoint(id))
    }

    pub fn set_tab(&mut self, tab: EndpointTab) {
        self.active_tab = tab;
    }

    pub fn tab(&self) -> EndpointTab {
        self.active_tab
    }

    /// The detail pane for the selected endpoint.
    pub fn endpoint_view(&self) -> Option<EndpointView<'_>> {
        self.selected_endpoint()
            .map(|e| EndpointView::new(e, &self.project.base_url))
    }

    pub fn summary(&self) -> String {
        endpoint_summary(&self.project, &self.visible_sections(), self.is_searching())
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

    #[test]
    fn first_endpoint_selected_on_load() {
        let detail = ProjectDetail::new(load_fixture_project());
        assert_eq!(detail.selected_endpoint().unwrap().id, "ep-find-pet");
        assert_eq!(detail.tab(), EndpointTab::Overview);
    }

    #[test]
    fn empty_project_has_no_selection() {
        let mut project = load_fixture_project();
        project.sections.clear();
        let detail = ProjectDetail::new(project);
        assert!(detail.selected_endpoint().is_none());
        assert!(detail.endpoint_view().is_none());
        assert_eq!(detail.summary(), "0 sections • 0 endpoints");
    }

    #[test]
    fn select_expands_collapsed_section() {
        let mut detail = ProjectDetail::new(load_fixture_project());
        detail.toggle_section("sec-store");
        assert!(!detail.sidebar().is_expanded("sec-store"));
        detail.select_endpoint("ep-inventory").unwrap();
        assert!(detail.sidebar().is_expanded("sec-store"));
        assert_eq!(detail.selected_endpoint().unwrap().display_name(), "/store/inventory");
    }

    #[test]
    fn unknown_endpoint_keeps_selection() {
        let mut detail = ProjectDetail::new(load_fixture_project());
        let err = detail.select_endpoint("ep-missing").unwrap_err();
        assert!(matches!(err, SwaggerBuddyError::InvalidInput(_)));
        assert_eq!(detail.selected_endpoint().unwrap().id, "ep-find-pet");
    }

    #[test]
    fn search_updates_summary() {
        let mut detail = ProjectDetail::new(load_fixture_project());
        assert_eq!(detail.summary(), "3 sections • 5 endpoints");
        detail.set_search("pet");
        assert!(detail.is_searching());
        let visible = detail.visible_sections();
        assert_eq!(visible.len(), 2);
        assert_eq!(detail.summary(), "3 of 5 endpoints");
    }
}
