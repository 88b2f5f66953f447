use anyhow::Result;
use serde::Serialize;
use swaggerbuddy_lib::detail::ProjectDetail;
use swaggerbuddy_lib::endpoint_view::{
    EndpointTab, EndpointView, ParameterTable, NO_EXAMPLES, NO_PARAMETERS, TESTING_PLACEHOLDER,
};
use swaggerbuddy_lib::format::{format_date_str, MethodBadge};
use swaggerbuddy_lib::sidebar::{endpoint_short_description, FilteredSection, NO_RESULTS};
use swaggerbuddy_lib::types::{Project, ProjectSummary};
use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::xml_output;

#[derive(Clone, Debug)]
pub enum OutputFormat {
    Table,
    Json,
    Csv,
    Markdown,
    Xml,
}

const NO_DESCRIPTION: &str = "No description available";
const NO_SELECTION: &str =
    "Select an Endpoint\nChoose an endpoint from the sidebar to view its documentation";
const EMPTY_PROJECT: &str = "This project has no endpoints.";

#[derive(Tabled, Serialize)]
struct ProjectRow {
    #[tabled(rename = "Name")]
    #[serde(rename = "Name")]
    name: String,
    #[tabled(rename = "Base URL")]
    #[serde(rename = "Base URL")]
    base_url: String,
    #[tabled(rename = "Created")]
    #[serde(rename = "Created")]
    created: String,
    #[tabled(rename = "Updated")]
    #[serde(rename = "Updated")]
    updated: String,
    #[tabled(rename = "ID")]
    #[serde(rename = "ID")]
    id: String,
}

#[derive(Serialize)]
struct EndpointRow {
    #[serde(rename = "Section")]
    section: String,
    #[serde(rename = "Method")]
    method: String,
    #[serde(rename = "Name")]
    name: String,
    #[serde(rename = "URL")]
    url: String,
    #[serde(rename = "Description")]
    description: String,
    #[serde(rename = "ID")]
    id: String,
}

/// Header and body parameters.
#[derive(Tabled)]
struct TypedParameterRow {
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Type")]
    param_type: String,
    #[tabled(rename = "Description")]
    description: String,
    #[tabled(rename = "Required")]
    required: String,
}

/// Path and query parameters.
#[derive(Tabled)]
struct PlainParameterRow {
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Description")]
    description: String,
}

// -- Row builders --

fn build_project_rows(projects: &[ProjectSummary]) -> Vec<ProjectRow> {
    projects
        .iter()
        .map(|p| ProjectRow {
            name: p.name.clone(),
            base_url: p.base_url.clone(),
            created: display_date(p.created_at.as_deref()),
            updated: display_date(p.updated_at.as_deref()),
            id: p.id.clone(),
        })
        .collect()
}

fn build_endpoint_rows(sections: &[FilteredSection<'_>]) -> Vec<EndpointRow> {
    sections
        .iter()
        .flat_map(|s| {
            s.endpoints.iter().map(move |e| EndpointRow {
                section: s.section.name.clone(),
                method: MethodBadge::new(&e.method).label,
                name: e.display_name().to_string(),
                url: e.url_of_endpoint.clone(),
                description: e.description.clone(),
                id: e.id.clone(),
            })
        })
        .collect()
}

fn display_date(raw: Option<&str>) -> String {
    match raw {
        Some(s) => format_date_str(s).unwrap_or_else(|| s.to_string()),
        None => "-".to_string(),
    }
}

fn description_or_default(description: &str) -> String {
    if description.is_empty() {
        NO_DESCRIPTION.to_string()
    } else {
        description.to_string()
    }
}

fn styled(mut table: Table, markdown: bool) -> String {
    if markdown {
        table.with(Style::markdown());
    }
    table.to_string()
}

// -- Project listing --

pub fn print_projects_table(projects: &[ProjectSummary]) {
    println!("{}", Table::new(build_project_rows(projects)));
}

pub fn print_projects_markdown(projects: &[ProjectSummary]) {
    let mut table = Table::new(build_project_rows(projects));
    table.with(Style::markdown());
    println!("{}", table);
}

pub fn print_projects_csv(projects: &[ProjectSummary]) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(std::io::stdout());
    for row in build_project_rows(projects) {
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn print_projects_xml(projects: &[ProjectSummary]) -> Result<()> {
    println!("{}", xml_output::projects_to_xml(projects)?);
    Ok(())
}

// -- Project detail --

pub fn print_endpoints_csv(sections: &[FilteredSection<'_>]) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(std::io::stdout());
    for row in build_endpoint_rows(sections) {
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn print_project_xml(project: &Project) -> Result<()> {
    println!("{}", xml_output::project_to_xml(project)?);
    Ok(())
}

/// Text view of a project: sidebar tree followed by the selected endpoint.
pub fn print_project_detail(detail: &ProjectDetail, markdown: bool, color: bool) {
    println!("{}", render_sidebar(detail, color));
    println!();
    match detail.endpoint_view() {
        Some(view) => println!("{}", render_endpoint(&view, detail.tab(), markdown, color)),
        None => println!("{}", NO_SELECTION),
    }
}

fn method_label(method: &str, color: bool) -> String {
    let badge = MethodBadge::new(method);
    let pad = " ".repeat(7usize.saturating_sub(badge.label.len()));
    if color {
        format!("{}{}", badge.colored(), pad)
    } else {
        format!("{}{}", badge.label, pad)
    }
}

fn render_sidebar(detail: &ProjectDetail, color: bool) -> String {
    let project = detail.project();
    let mut lines = vec![
        project.name.clone(),
        project.base_url.clone(),
        detail.summary(),
        String::new(),
    ];

    let sections = detail.visible_sections();
    if sections.is_empty() {
        lines.push(if detail.is_searching() { NO_RESULTS } else { EMPTY_PROJECT }.to_string());
        return lines.join("\n");
    }

    let selected = detail.selected_endpoint().map(|e| e.id.as_str());
    for s in &sections {
        let expanded = detail.sidebar().is_expanded(&s.section.id);
        let marker = if expanded { "▾" } else { "▸" };
        let mut header = format!("{} {} ({})", marker, s.section.name, s.endpoints.len());
        if !s.section.description.is_empty() {
            header.push_str(&format!("  {}", s.short_description()));
        }
        lines.push(header);
        if !expanded {
            continue;
        }
        for e in &s.endpoints {
            let pointer = if selected == Some(e.id.as_str()) { ">" } else { " " };
            let mut line = format!(
                "  {} {} {}",
                pointer,
                method_label(&e.method, color),
                e.display_name()
            );
            if !e.description.is_empty() {
                line.push_str(&format!("  {}", endpoint_short_description(e)));
            }
            lines.push(line);
        }
    }
    lines.join("\n")
}

fn tab_bar(active: EndpointTab) -> String {
    EndpointTab::ALL
        .iter()
        .map(|t| {
            if *t == active {
                format!("[{}]", t.label())
            } else {
                t.label().to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(" | ")
}

fn render_endpoint(view: &EndpointView<'_>, tab: EndpointTab, markdown: bool, color: bool) -> String {
    let endpoint = view.endpoint;
    let mut lines = vec![
        format!("{} {}", method_label(&endpoint.method, color).trim_end(), endpoint.url_of_endpoint),
        endpoint.display_name().to_string(),
        tab_bar(tab),
        String::new(),
    ];

    match tab {
        EndpointTab::Overview => {
            let overview = view.overview();
            lines.push(format!("Method:      {}", overview.method));
            lines.push(format!("Endpoint:    {}", overview.url));
            lines.push(format!("Full URL:    {}", overview.full_url));
            if !overview.description.is_empty() {
                lines.push(format!("Description: {}", overview.description));
            }
            lines.push(String::new());
            lines.push(format!("Path Parameters:  {}", overview.path_parameters));
            lines.push(format!("Query Parameters: {}", overview.query_parameters));
            lines.push(format!("Headers:          {}", overview.headers));
            lines.push(format!("Code Examples:    {}", overview.code_examples));
        }
        EndpointTab::Parameters => {
            let tables = view.parameter_tables();
            if tables.is_empty() {
                lines.push(NO_PARAMETERS.to_string());
            }
            for table in &tables {
                lines.push(format!("{} - {}", table.title(), table.subtitle()));
                lines.push(render_parameter_table(table, markdown));
                lines.push(String::new());
            }
        }
        EndpointTab::Examples => {
            let examples = view.examples();
            if examples.is_empty() {
                lines.push(NO_EXAMPLES.to_string());
            }
            for block in &examples {
                lines.push(format!("{} [{}]", block.example.language, block.example.id));
                lines.push(format!("```{}", block.highlight));
                lines.push(block.example.code.clone());
                lines.push("```".to_string());
                lines.push(String::new());
            }
        }
        EndpointTab::Testing => lines.push(TESTING_PLACEHOLDER.to_string()),
    }

    lines.join("\n").trim_end().to_string()
}

fn render_parameter_table(table: &ParameterTable, markdown: bool) -> String {
    if table.kind.is_typed() {
        let rows: Vec<TypedParameterRow> = table
            .rows
            .iter()
            .map(|r| TypedParameterRow {
                name: r.name.clone(),
                param_type: r.param_type.clone().unwrap_or_default(),
                description: description_or_default(&r.description),
                required: if r.required.unwrap_or(false) {
                    "Required".to_string()
                } else {
                    "Optional".to_string()
                },
            })
            .collect();
        styled(Table::new(rows), markdown)
    } else {
        let rows: Vec<PlainParameterRow> = table
            .rows
            .iter()
            .map(|r| PlainParameterRow {
                name: r.name.clone(),
                description: description_or_default(&r.description),
            })
            .collect();
        styled(Table::new(rows), markdown)
    }
}

// -- JSON output --

pub fn print_json<T: serde::Serialize>(data: &T) {
    match serde_json::to_string_pretty(data) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Failed to serialize to JSON: {}", e),
    }
}
