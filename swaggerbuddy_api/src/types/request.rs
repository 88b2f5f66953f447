//! Request payloads sent to the backend.

/// A Swagger document held in memory, ready to upload.
#[derive(Clone, Debug, PartialEq)]
pub struct SwaggerFile {
    pub file_name: String,
    /// MIME type reported for the file, e.g. `application/json`.
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl SwaggerFile {
    pub fn new(file_name: &str, content_type: &str, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.to_string(),
            content_type: content_type.to_string(),
            bytes,
        }
    }

    /// Size in bytes.
    pub fn size(&self) -> u64 {
        self.bytes.len() as u64
    }
}

/// Body of `POST /v1/project/`.
///
/// Callers are expected to set exactly one of `swagger_file` or
/// `swagger_url`; the client sends whatever is present.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CreateProjectRequest {
    pub project_name: String,
    pub base_url: String,
    pub swagger_file: Option<SwaggerFile>,
    pub swagger_url: Option<String>,
}

impl CreateProjectRequest {
    pub fn new(project_name: &str, base_url: &str) -> Self {
        Self {
            project_name: project_name.to_string(),
            base_url: base_url.to_string(),
            ..Default::default()
        }
    }

    pub fn with_file(mut self, file: SwaggerFile) -> Self {
        self.swagger_file = Some(file);
        self
    }

    pub fn with_url(mut self, url: &str) -> Self {
        self.swagger_url = Some(url.to_string());
        self
    }
}
