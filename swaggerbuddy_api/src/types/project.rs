//! Project and section records.

use serde::{Deserialize, Serialize};

use super::endpoint::Endpoint;

/// Opaque project identifier assigned by the backend.
pub type ProjectID = String;

/// Opaque section identifier assigned by the backend.
pub type SectionID = String;

/// A parsed Swagger document: the root of the section/endpoint tree.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Project {
    pub id: ProjectID,
    pub name: String,
    pub base_url: String,
    #[serde(default)]
    pub sections: Vec<Section>,
}

impl Project {
    /// Total number of endpoints across all sections.
    pub fn endpoint_count(&self) -> usize {
        self.sections.iter().map(|s| s.endpoints.len()).sum()
    }

    /// Looks up an endpoint anywhere in the tree.
    pub fn find_endpoint(&self, endpoint_id: &str) -> Option<&Endpoint> {
        self.sections
            .iter()
            .flat_map(|s| s.endpoints.iter())
            .find(|e| e.id == endpoint_id)
    }

    /// The first endpoint of the first section, if the first section has any.
    pub fn first_endpoint(&self) -> Option<&Endpoint> {
        self.sections.first().and_then(|s| s.endpoints.first())
    }
}

/// A group of endpoints, usually one Swagger tag.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Section {
    pub id: SectionID,
    pub project_id: ProjectID,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub endpoints: Vec<Endpoint>,
}

/// Lightweight projection returned by the project listing.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ProjectSummary {
    pub id: ProjectID,
    pub name: String,
    pub base_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}
