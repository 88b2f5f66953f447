use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;
use serde::Serialize;
use std::io::Cursor;

use swaggerbuddy_lib::types::{Project, ProjectSummary};

/// Singularize array field names for XML child elements.
fn singular(field: &str) -> &str {
    match field {
        "sections" => "section",
        "endpoints" => "endpoint",
        "body" => "field",
        "headers" => "header",
        "path_parameters" => "path_parameter",
        "query_parameters" => "query_parameter",
        "code_examples" => "code_example",
        _ => field,
    }
}

/// Recursively write a serde_json::Value as XML elements.
fn write_value<W: std::io::Write>(
    writer: &mut Writer<W>,
    tag: &str,
    value: &serde_json::Value,
) -> Result<(), quick_xml::Error> {
    match value {
        serde_json::Value::Null => {
            // Omit null fields entirely
        }
        serde_json::Value::Bool(b) => {
            write_text(writer, tag, if *b { "true" } else { "false" })?;
        }
        serde_json::Value::Number(n) => {
            write_text(writer, tag, &n.to_string())?;
        }
        serde_json::Value::String(s) => {
            write_text(writer, tag, s)?;
        }
        serde_json::Value::Array(arr) => {
            writer.write_event(Event::Start(BytesStart::new(tag)))?;
            let child_tag = singular(tag);
            for item in arr {
                write_value(writer, child_tag, item)?;
            }
            writer.write_event(Event::End(BytesEnd::new(tag)))?;
        }
        serde_json::Value::Object(map) => {
            writer.write_event(Event::Start(BytesStart::new(tag)))?;
            for (key, val) in map {
                write_value(writer, key, val)?;
            }
            writer.write_event(Event::End(BytesEnd::new(tag)))?;
        }
    }
    Ok(())
}

fn write_text<W: std::io::Write>(
    writer: &mut Writer<W>,
    tag: &str,
    text: &str,
) -> Result<(), quick_xml::Error> {
    writer.write_event(Event::Start(BytesStart::new(tag)))?;
    writer.write_event(Event::Text(BytesText::new(text)))?;
    writer.write_event(Event::End(BytesEnd::new(tag)))?;
    Ok(())
}

fn new_document() -> Result<Writer<Cursor<Vec<u8>>>, quick_xml::Error> {
    let mut writer = Writer::new_with_indent(Cursor::new(Vec::new()), b' ', 2);
    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
    Ok(writer)
}

fn finish(writer: Writer<Cursor<Vec<u8>>>) -> anyhow::Result<String> {
    let buf = writer.into_inner().into_inner();
    Ok(String::from_utf8(buf)?)
}

/// Serialize a slice of Serialize items into an XML string.
fn items_to_xml<T: Serialize>(root_tag: &str, item_tag: &str, items: &[T]) -> anyhow::Result<String> {
    let mut writer = new_document()?;

    if items.is_empty() {
        writer.write_event(Event::Empty(BytesStart::new(root_tag)))?;
    } else {
        writer.write_event(Event::Start(BytesStart::new(root_tag)))?;
        for item in items {
            let val = serde_json::to_value(item)?;
            write_value(&mut writer, item_tag, &val)?;
        }
        writer.write_event(Event::End(BytesEnd::new(root_tag)))?;
    }

    finish(writer)
}

pub fn projects_to_xml(projects: &[ProjectSummary]) -> anyhow::Result<String> {
    items_to_xml("projects", "project", projects)
}

pub fn project_to_xml(project: &Project) -> anyhow::Result<String> {
    let mut writer = new_document()?;
    let val = serde_json::to_value(project)?;
    write_value(&mut writer, "project", &val)?;
    finish(writer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use swaggerbuddy_lib::types::BackendResponse;

    fn load_projects_fixture() -> Vec<ProjectSummary> {
        let json_str = include_str!("../../swaggerbuddy_api/tests/fixtures/projects.json");
        let resp: BackendResponse<Vec<ProjectSummary>> = serde_json::from_str(json_str).unwrap();
        resp.data
    }

    fn load_project_fixture() -> Project {
        let json_str = include_str!("../../swaggerbuddy_api/tests/fixtures/project.json");
        let resp: BackendResponse<Project> = serde_json::from_str(json_str).unwrap();
        resp.data
    }

    #[test]
    fn test_projects_xml_wellformed() {
        let xml = projects_to_xml(&load_projects_fixture()).unwrap();
        assert!(xml.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));
        assert!(xml.contains("<projects>"));
        assert_eq!(xml.matches("<project>").count(), 3);
        assert!(xml.contains("<name>Billing API</name>"));
    }

    #[test]
    fn test_projects_xml_omits_missing_dates() {
        let xml = projects_to_xml(&load_projects_fixture()).unwrap();
        // Only the first two projects carry created_at.
        assert_eq!(xml.matches("<created_at>").count(), 2);
    }

    #[test]
    fn test_empty_projects_xml() {
        let xml = projects_to_xml(&[]).unwrap();
        assert!(xml.contains("<projects/>"));
    }

    #[test]
    fn test_project_xml_singularizes_children() {
        let xml = project_to_xml(&load_project_fixture()).unwrap();
        assert_eq!(xml.matches("<section>").count(), 3);
        assert_eq!(xml.matches("<endpoint>").count(), 5);
        assert!(xml.contains("<code_example>"));
        assert!(xml.contains("<field>"));
        assert!(xml.contains("<path_parameter>"));
    }

    #[test]
    fn test_xml_escapes_text() {
        let project = Project {
            id: "p1".to_string(),
            name: "Tom & Jerry <API>".to_string(),
            base_url: "https://example.com".to_string(),
            sections: vec![],
        };
        let xml = project_to_xml(&project).unwrap();
        assert!(xml.contains("<name>Tom &amp; Jerry &lt;API&gt;</name>"));
    }
}
