use std::io::IsTerminal;

use anyhow::{bail, Result};
use clap::Args;
use swaggerbuddy_lib::clipboard::copy_to_clipboard;
use swaggerbuddy_lib::types::{Project, Section};
use swaggerbuddy_lib::{ApiClient, EndpointTab, ProjectDetail};

use super::fetch_failed;
use crate::output::{
    print_endpoints_csv, print_json, print_project_detail, print_project_xml, OutputFormat,
};

#[derive(Args)]
pub struct ShowArgs {
    /// Project ID
    pub id: String,

    /// Filter sections and endpoints by name, URL, description or method
    #[arg(long)]
    pub search: Option<String>,

    /// Collapse a section in the sidebar (repeatable)
    #[arg(long, value_name = "SECTION_ID")]
    pub collapse: Vec<String>,

    /// Endpoint to show (defaults to the first endpoint of the first section)
    #[arg(long, value_name = "ENDPOINT_ID")]
    pub endpoint: Option<String>,

    /// Detail tab: overview, parameters, examples, testing
    #[arg(long, default_value = "overview")]
    pub tab: String,

    /// Copy a code example of the selected endpoint to the clipboard
    #[arg(long, value_name = "EXAMPLE_ID")]
    pub copy: Option<String>,
}

impl ShowArgs {
    /// Default view of a project.
    pub fn for_project(id: &str) -> Self {
        Self {
            id: id.to_string(),
            search: None,
            collapse: Vec::new(),
            endpoint: None,
            tab: EndpointTab::default().to_string(),
            copy: None,
        }
    }
}

pub async fn run(args: &ShowArgs, client: &ApiClient, format: &OutputFormat) -> Result<()> {
    let tab: EndpointTab = args.tab.parse().map_err(anyhow::Error::msg)?;

    let project = client
        .projects()
        .get_by_id(&args.id)
        .await
        .map_err(|e| fetch_failed("project", e))?;

    let mut detail = ProjectDetail::new(project);
    for section_id in &args.collapse {
        if detail.sidebar().is_expanded(section_id) {
            detail.toggle_section(section_id);
        }
    }
    if let Some(search) = &args.search {
        detail.set_search(search);
    }
    if let Some(endpoint_id) = &args.endpoint {
        detail.select_endpoint(endpoint_id)?;
    }
    detail.set_tab(tab);

    if let Some(example_id) = &args.copy {
        copy_example(&detail, example_id)?;
    }

    match format {
        OutputFormat::Table => print_project_detail(&detail, false, std::io::stdout().is_terminal()),
        OutputFormat::Markdown => print_project_detail(&detail, true, false),
        OutputFormat::Json => print_json(&filtered_project(&detail)),
        OutputFormat::Csv => print_endpoints_csv(&detail.visible_sections())?,
        OutputFormat::Xml => print_project_xml(&filtered_project(&detail))?,
    }

    Ok(())
}

fn copy_example(detail: &ProjectDetail, example_id: &str) -> Result<()> {
    let Some(view) = detail.endpoint_view() else {
        bail!("No endpoint selected to copy from");
    };
    let Some(example) = view.find_example(example_id) else {
        bail!(
            "Code example '{}' not found on endpoint '{}'",
            example_id,
            view.endpoint.id
        );
    };
    if copy_to_clipboard(&example.code) {
        eprintln!("Copied {} example to clipboard", example.language);
    } else {
        eprintln!("Could not copy to clipboard");
    }
    Ok(())
}

/// The project restricted to what the search leaves visible.
fn filtered_project(detail: &ProjectDetail) -> Project {
    let project = detail.project();
    let sections = detail
        .visible_sections()
        .into_iter()
        .map(|f| Section {
            endpoints: f.endpoints.into_iter().cloned().collect(),
            ..f.section.clone()
        })
        .collect();
    Project {
        sections,
        ..project.clone()
    }
}
