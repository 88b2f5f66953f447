use anyhow::Result;
use clap::Args;
use swaggerbuddy_lib::project_list::{recent, SortField, SortOrder};
use swaggerbuddy_lib::types::ProjectSummary;
use swaggerbuddy_lib::{ApiClient, ProjectList};

use super::fetch_failed;
use crate::output::{
    print_json, print_projects_csv, print_projects_markdown, print_projects_table,
    print_projects_xml, OutputFormat,
};

#[derive(Args)]
pub struct ProjectsArgs {
    /// Search by name, base URL or ID (case-insensitive)
    #[arg(long)]
    pub search: Option<String>,

    /// Sort field: name, created-at, base-url
    #[arg(long, default_value = "created-at")]
    pub sort_by: String,

    /// Sort ascending
    #[arg(long, conflicts_with = "desc")]
    pub asc: bool,

    /// Sort descending (default)
    #[arg(long)]
    pub desc: bool,

    /// Only the most recent projects, as on the home page
    #[arg(long)]
    pub recent: bool,
}

pub async fn run(args: &ProjectsArgs, client: &ApiClient, format: &OutputFormat) -> Result<()> {
    let projects = client
        .projects()
        .get_all()
        .await
        .map_err(|e| fetch_failed("projects", e))?;

    if projects.is_empty() {
        eprintln!("No Projects Yet");
        eprintln!("Upload your first Swagger file with `swagger-buddy create` to get started.");
        return Ok(());
    }

    if args.recent {
        return print_projects(recent(&projects), format);
    }

    let sort_by: SortField = args.sort_by.parse().map_err(anyhow::Error::msg)?;
    let order = if args.asc { SortOrder::Asc } else { SortOrder::Desc };

    let mut list = ProjectList::new(projects);
    list.set_sort(sort_by, order);
    if let Some(search) = &args.search {
        list.set_query(search);
    }

    let visible: Vec<ProjectSummary> = list.visible().into_iter().cloned().collect();
    eprintln!("{}", list.summary());
    if visible.is_empty() {
        eprintln!("No projects found matching your search.");
        return Ok(());
    }

    print_projects(&visible, format)
}

fn print_projects(projects: &[ProjectSummary], format: &OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Table => print_projects_table(projects),
        OutputFormat::Json => print_json(&projects),
        OutputFormat::Csv => print_projects_csv(projects)?,
        OutputFormat::Markdown => print_projects_markdown(projects),
        OutputFormat::Xml => print_projects_xml(projects)?,
    }
    Ok(())
}
