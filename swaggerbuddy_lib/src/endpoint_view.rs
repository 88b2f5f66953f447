//! Content of the endpoint detail pane.

use std::fmt;
use std::str::FromStr;

use swaggerbuddy_api::types::{CodeExample, Endpoint, ParameterKind, ParameterRow};

use crate::format::{format_endpoint_url, MethodBadge};

pub const NO_PARAMETERS: &str = "This endpoint doesn't require any parameters";
pub const NO_EXAMPLES: &str = "Code examples for this endpoint are not available yet";
pub const TESTING_PLACEHOLDER: &str = "Interactive API testing functionality coming soon";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum EndpointTab {
    #[default]
    Overview,
    Parameters,
    Examples,
    Testing,
}

impl EndpointTab {
    pub const ALL: [EndpointTab; 4] = [
        EndpointTab::Overview,
        EndpointTab::Parameters,
        EndpointTab::Examples,
        EndpointTab::Testing,
    ];

    pub fn label(self) -> &'static str {
        match self {
            EndpointTab::Overview => "Overview",
            EndpointTab::Parameters => "Parameters",
            EndpointTab::Examples => "Examples",
            EndpointTab::Testing => "Testing",
        }
    }
}

impl FromStr for EndpointTab {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "overview" => Ok(EndpointTab::Overview),
            "parameters" | "params" => Ok(EndpointTab::Parameters),
            "examples" => Ok(EndpointTab::Examples),
            "testing" => Ok(EndpointTab::Testing),
            _ => Err(format!(
                "Invalid tab '{}'. Use overview, parameters, examples or testing",
                s
            )),
        }
    }
}

impl fmt::Display for EndpointTab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label().to_lowercase())
    }
}

/// Highlighter name for a backend language code. Unknown codes pass through.
pub fn normalize_language(code: &str) -> String {
    let lower = code.to_lowercase();
    let mapped = match lower.as_str() {
        "js" => "javascript",
        "ts" => "typescript",
        "py" => "python",
        "sh" | "shell" => "bash",
        "yml" => "yaml",
        "cs" => "csharp",
        "rb" => "ruby",
        other => other,
    };
    mapped.to_string()
}

/// Header facts of the overview tab.
#[derive(Clone, Debug, PartialEq)]
pub struct Overview {
    pub method: MethodBadge,
    pub url: String,
    pub full_url: String,
    pub description: String,
    pub path_parameters: usize,
    pub query_parameters: usize,
    pub headers: usize,
    pub code_examples: usize,
}

/// One non-empty parameter table.
#[derive(Clone, Debug, PartialEq)]
pub struct ParameterTable {
    pub kind: ParameterKind,
    pub rows: Vec<ParameterRow>,
}

impl ParameterTable {
    pub fn title(&self) -> &'static str {
        match self.kind {
            ParameterKind::Path => "Path Parameters",
            ParameterKind::Query => "Query Parameters",
            ParameterKind::Header => "Headers",
            ParameterKind::Body => "Request Body",
        }
    }

    pub fn subtitle(&self) -> &'static str {
        match self.kind {
            ParameterKind::Path => "Parameters that are part of the URL path",
            ParameterKind::Query => "Parameters sent as query string",
            ParameterKind::Header => "Required and optional headers for this endpoint",
            ParameterKind::Body => "The structure of the request body",
        }
    }
}

/// A code example ready for rendering.
#[derive(Clone, Debug, PartialEq)]
pub struct ExampleBlock<'a> {
    pub example: &'a CodeExample,
    /// Normalized highlighting language.
    pub highlight: String,
}

/// An endpoint in the context of its project's base URL.
#[derive(Clone, Debug)]
pub struct EndpointView<'a> {
    pub endpoint: &'a Endpoint,
    pub full_url: String,
}

impl<'a> EndpointView<'a> {
    pub fn new(endpoint: &'a Endpoint, base_url: &str) -> Self {
        Self {
            endpoint,
            full_url: format_endpoint_url(base_url, &endpoint.url_of_endpoint),
        }
    }

    pub fn overview(&self) -> Overview {
        let e = self.endpoint;
        Overview {
            method: MethodBadge::new(&e.method),
            url: e.url_of_endpoint.clone(),
            full_url: self.full_url.clone(),
            description: e.description.clone(),
            path_parameters: e.path_parameters.len(),
            query_parameters: e.query_parameters.len(),
            headers: e.headers.len(),
            code_examples: e.code_examples.len(),
        }
    }

    /// Tables for the parameters tab, path, query, header then body,
    /// skipping empty kinds. Empty when the endpoint takes no parameters.
    pub fn parameter_tables(&self) -> Vec<ParameterTable> {
        ParameterKind::ALL
            .iter()
            .map(|kind| ParameterTable {
                kind: *kind,
                rows: self.endpoint.parameter_rows(*kind),
            })
            .filter(|t| !t.rows.is_empty())
            .collect()
    }

    pub fn examples(&self) -> Vec<ExampleBlock<'a>> {
        self.endpoint
            .code_examples
            .iter()
            .map(|example| ExampleBlock {
                example,
                highlight: normalize_language(&example.language_code),
            })
            .collect()
    }

    pub fn find_example(&self, example_id: &str) -> Option<&'a CodeExample> {
        self.endpoint.code_examples.iter().find(|c| c.id == example_id)
    }
}
