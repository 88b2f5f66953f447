//! Endpoint records and their parameter/example children.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::project::SectionID;

/// Opaque endpoint identifier assigned by the backend.
pub type EndpointID = String;

/// A single operation (method + path) of the documented API.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Endpoint {
    pub id: EndpointID,
    pub section_id: SectionID,
    #[serde(default)]
    pub name: String,
    pub url_of_endpoint: String,
    #[serde(default)]
    pub description: String,
    pub method: String,
    #[serde(default)]
    pub body: Vec<Body>,
    #[serde(default)]
    pub headers: Vec<Header>,
    #[serde(default)]
    pub path_parameters: Vec<PathParameter>,
    #[serde(default)]
    pub query_parameters: Vec<QueryParameter>,
    #[serde(default)]
    pub code_examples: Vec<CodeExample>,
}

impl Endpoint {
    /// Name to show for this endpoint; falls back to the URL when unnamed.
    pub fn display_name(&self) -> &str {
        if self.name.is_empty() {
            &self.url_of_endpoint
        } else {
            &self.name
        }
    }

    /// True when the endpoint takes no parameters of any kind.
    pub fn has_no_parameters(&self) -> bool {
        self.path_parameters.is_empty()
            && self.query_parameters.is_empty()
            && self.headers.is_empty()
            && self.body.is_empty()
    }

    /// Parameter rows of one kind, in backend order.
    pub fn parameter_rows(&self, kind: ParameterKind) -> Vec<ParameterRow> {
        match kind {
            ParameterKind::Path => self.path_parameters.iter().map(ParameterRow::from).collect(),
            ParameterKind::Query => self.query_parameters.iter().map(ParameterRow::from).collect(),
            ParameterKind::Header => self.headers.iter().map(ParameterRow::from).collect(),
            ParameterKind::Body => self.body.iter().map(ParameterRow::from).collect(),
        }
    }
}

/// A request body field.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Body {
    pub id: String,
    pub endpoint_id: EndpointID,
    pub name: String,
    #[serde(rename = "type")]
    pub param_type: String,
    #[serde(default)]
    pub descriptive_value: String,
    #[serde(default)]
    pub required: bool,
}

/// A request header.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Header {
    pub id: String,
    pub endpoint_id: EndpointID,
    pub name: String,
    #[serde(rename = "type")]
    pub param_type: String,
    #[serde(default)]
    pub descriptive_value: String,
    #[serde(default)]
    pub required: bool,
}

/// A templated segment of the endpoint path (`/pets/{petId}`).
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct PathParameter {
    pub id: String,
    pub endpoint_id: EndpointID,
    pub name: String,
    #[serde(default)]
    pub descriptive_value: String,
}

/// A query-string parameter.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct QueryParameter {
    pub id: String,
    pub endpoint_id: EndpointID,
    pub name: String,
    #[serde(default)]
    pub descriptive_value: String,
}

/// A ready-made request snippet in some language.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct CodeExample {
    pub id: String,
    /// Human label, e.g. "Python".
    pub language: String,
    /// Highlighter key, e.g. "py".
    pub language_code: String,
    pub code: String,
}

/// The four places a parameter can live.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParameterKind {
    Path,
    Query,
    Header,
    Body,
}

impl ParameterKind {
    /// Display order on the parameters tab.
    pub const ALL: [ParameterKind; 4] = [
        ParameterKind::Path,
        ParameterKind::Query,
        ParameterKind::Header,
        ParameterKind::Body,
    ];

    /// Only header and body parameters carry a type and a required flag.
    pub fn is_typed(self) -> bool {
        matches!(self, ParameterKind::Header | ParameterKind::Body)
    }
}

impl fmt::Display for ParameterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ParameterKind::Path => "path",
            ParameterKind::Query => "query",
            ParameterKind::Header => "header",
            ParameterKind::Body => "body",
        };
        write!(f, "{}", s)
    }
}

/// Uniform view over the four parameter records.
///
/// `param_type` and `required` are `None` for path and query parameters.
#[derive(Clone, Debug, PartialEq)]
pub struct ParameterRow {
    pub id: String,
    pub name: String,
    pub param_type: Option<String>,
    pub description: String,
    pub required: Option<bool>,
}

impl From<&Body> for ParameterRow {
    fn from(val: &Body) -> Self {
        ParameterRow {
            id: val.id.clone(),
            name: val.name.clone(),
            param_type: Some(val.param_type.clone()),
            description: val.descriptive_value.clone(),
            required: Some(val.required),
        }
    }
}

impl From<&Header> for ParameterRow {
    fn from(val: &Header) -> Self {
        ParameterRow {
            id: val.id.clone(),
            name: val.name.clone(),
            param_type: Some(val.param_type.clone()),
            description: val.descriptive_value.clone(),
            required: Some(val.required),
        }
    }
}

impl From<&PathParameter> for ParameterRow {
    fn from(val: &PathParameter) -> Self {
        ParameterRow {
            id: val.id.clone(),
            name: val.name.clone(),
            param_type: None,
            description: val.descriptive_value.clone(),
            required: None,
        }
    }
}

impl From<&QueryParameter> for ParameterRow {
    fn from(val: &QueryParameter) -> Self {
        ParameterRow {
            id: val.id.clone(),
            name: val.name.clone(),
            param_type: None,
            description: val.descriptive_value.clone(),
            required: None,
        }
    }
}
