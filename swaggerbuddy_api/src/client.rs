//! HTTP client for the Swagger Buddy backend.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use futures_util::StreamExt;
use reqwest::multipart::{Form, Part};
use reqwest::Method;
use serde::de::DeserializeOwned;
use url::Url;

use crate::{
    types::{BackendResponse, CreateProjectRequest, Project, ProjectSummary},
    Error,
};

/// Backend address used when nothing else is configured.
pub const DEFAULT_API_URL: &str = "http://localhost:8000";

/// Transport timeout applied to every request. Parsing a large Swagger
/// document server-side can take a while.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(3 * 60);

const PROJECTS_PATH: &str = "/v1/project/";

const DELETE_FAILED: &str = "Failed to delete project";

/// Size of the chunks a file is streamed in when upload progress is tracked.
const UPLOAD_CHUNK_SIZE: usize = 64 * 1024;

type ProgressFn = Arc<dyn Fn(u8) + Send + Sync>;

/// HTTP client for the `/v1/project/` API.
///
/// Every call is one-shot: no retries, no caching. Responses are unwrapped
/// from the backend envelope and failures are normalized into [`Error`],
/// whose message is fit to show to the user as is.
pub struct Client {
    /// Base URL without a trailing slash, e.g. `http://localhost:8000`.
    base_api_url: String,
    http: reqwest::Client,
}

impl Client {
    /// Creates a client pointing at [`DEFAULT_API_URL`].
    pub fn new() -> Result<Self, Error> {
        Self::with_base_url(DEFAULT_API_URL)
    }

    /// Creates a client with a custom base URL. Also used for testing with wiremock.
    pub fn with_base_url(base_url: &str) -> Result<Self, Error> {
        Self::with_timeout(base_url, REQUEST_TIMEOUT)
    }

    /// Creates a client with a custom base URL and transport timeout.
    pub fn with_timeout(base_url: &str, timeout: Duration) -> Result<Self, Error> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| {
                tracing::error!("Failed to build HTTP client: {}", e);
                Error::InvalidRequest(format!("Failed to build HTTP client: {}", e))
            })?;
        Ok(Self {
            base_api_url: base_url.trim_end_matches('/').to_string(),
            http,
        })
    }

    /// The backend base URL this client talks to.
    pub fn base_url(&self) -> &str {
        &self.base_api_url
    }

    fn projects_url(&self) -> Result<Url, Error> {
        Url::parse(format!("{}{}", &self.base_api_url, PROJECTS_PATH).as_str()).map_err(|e| {
            tracing::error!("Invalid URL constructed: {}", e);
            Error::InvalidRequest(format!("Invalid API URL '{}': {}", self.base_api_url, e))
        })
    }

    fn project_url(&self, project_id: &str) -> Result<Url, Error> {
        let mut url = self.projects_url()?;
        url.path_segments_mut()
            .map_err(|_| {
                Error::InvalidRequest(format!("Invalid API URL '{}'", self.base_api_url))
            })?
            .pop_if_empty()
            .push(project_id);
        Ok(url)
    }

    async fn send<T>(
        &self,
        method: Method,
        url: Url,
        form: Option<Form>,
    ) -> Result<BackendResponse<T>, Error>
    where
        T: DeserializeOwned,
    {
        tracing::debug!("API Call: {} {}", method, url.path());

        let mut request = self
            .http
            .request(method, url)
            .header("accept", "application/json");
        if let Some(form) = form {
            request = request.multipart(form);
        }

        let resp = request.send().await.map_err(|e| {
            tracing::error!("Request failed: {}", e);
            Error::from_transport(&e)
        })?;

        let status = resp.status();
        let body = resp.text().await.map_err(|e| {
            tracing::error!("Failed to read response body: {}", e);
            Error::from_transport(&e)
        })?;

        if !status.is_success() {
            tracing::error!(
                "Request failed with status {}: {}",
                status,
                truncate_body(&body)
            );
            return Err(Error::from_status(status.as_u16(), &body));
        }

        serde_json::from_str::<BackendResponse<T>>(&body).map_err(|e| {
            tracing::error!(
                "Failed to parse response: {} | body: {}",
                e,
                truncate_body(&body)
            );
            Error::Decode(e.to_string())
        })
    }

    /// Uploads a Swagger document (file or URL) and returns the parsed project.
    pub async fn create_project(&self, request: &CreateProjectRequest) -> Result<Project, Error> {
        let form = project_form(request, None)?;
        let resp = self
            .send::<Project>(Method::POST, self.projects_url()?, Some(form))
            .await?;
        Ok(resp.data)
    }

    /// Like [`Client::create_project`], reporting the upload percentage of the
    /// Swagger file to `on_progress` as its bytes are sent.
    ///
    /// Nothing is reported for URL-only requests or empty files.
    pub async fn create_project_with_progress<F>(
        &self,
        request: &CreateProjectRequest,
        on_progress: F,
    ) -> Result<Project, Error>
    where
        F: Fn(u8) + Send + Sync + 'static,
    {
        let form = project_form(request, Some(Arc::new(on_progress)))?;
        let resp = self
            .send::<Project>(Method::POST, self.projects_url()?, Some(form))
            .await?;
        Ok(resp.data)
    }

    /// Lists all projects.
    pub async fn get_projects(&self) -> Result<Vec<ProjectSummary>, Error> {
        let resp = self
            .send::<Vec<ProjectSummary>>(Method::GET, self.projects_url()?, None)
            .await?;
        Ok(resp.data)
    }

    /// Fetches a project with all of its sections and endpoints.
    pub async fn get_project(&self, project_id: &str) -> Result<Project, Error> {
        let resp = self
            .send::<Project>(Method::GET, self.project_url(project_id)?, None)
            .await?;
        Ok(resp.data)
    }

    /// Deletes a project. Fails unless the envelope reports `status_code` 200.
    pub async fn delete_project(&self, project_id: &str) -> Result<(), Error> {
        let resp = match self
            .send::<Option<serde_json::Value>>(Method::DELETE, self.project_url(project_id)?, None)
            .await
        {
            Ok(resp) => resp,
            // A success status without an envelope is not a confirmed delete.
            Err(Error::Decode(_)) => {
                tracing::warn!("Delete of project {} returned no envelope", project_id);
                return Err(Error::Rejected(DELETE_FAILED.to_string()));
            }
            Err(e) => return Err(e),
        };

        if resp.status_code != 200 {
            let message = if resp.message.is_empty() {
                DELETE_FAILED.to_string()
            } else {
                resp.message
            };
            tracing::warn!("Delete of project {} rejected: {}", project_id, message);
            return Err(Error::Rejected(message));
        }
        Ok(())
    }
}

fn project_form(request: &CreateProjectRequest, progress: Option<ProgressFn>) -> Result<Form, Error> {
    let mut form = Form::new()
        .text("project_name", request.project_name.clone())
        .text("base_url", request.base_url.clone());

    if let Some(file) = &request.swagger_file {
        let part = match progress {
            Some(on_progress) => Part::stream_with_length(
                progress_body(file.bytes.clone(), on_progress),
                file.size(),
            ),
            None => Part::bytes(file.bytes.clone()),
        };
        let part = part
            .file_name(file.file_name.clone())
            .mime_str(&file.content_type)
            .map_err(|e| {
                Error::InvalidRequest(format!("Invalid content type '{}': {}", file.content_type, e))
            })?;
        form = form.part("swagger_file", part);
    }

    if let Some(url) = &request.swagger_url {
        form = form.text("swagger_url", url.clone());
    }

    Ok(form)
}

/// Wraps file bytes in a chunked stream that reports progress as each chunk
/// is pulled by the transport.
fn progress_body(bytes: Vec<u8>, on_progress: ProgressFn) -> reqwest::Body {
    let total = bytes.len() as u64;
    let sent = Arc::new(AtomicU64::new(0));
    let chunks: Vec<Vec<u8>> = bytes.chunks(UPLOAD_CHUNK_SIZE).map(<[u8]>::to_vec).collect();

    let stream = futures_util::stream::iter(chunks).map(move |chunk| {
        let len = chunk.len() as u64;
        let so_far = sent.fetch_add(len, Ordering::Relaxed) + len;
        if total > 0 {
            on_progress(upload_percentage(so_far, total));
        }
        Ok::<_, std::io::Error>(chunk)
    });
    reqwest::Body::wrap_stream(stream)
}

fn upload_percentage(sent: u64, total: u64) -> u8 {
    ((sent as f64 * 100.0) / total as f64).round().min(100.0) as u8
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 2000;
    if body.len() <= MAX {
        body.to_string()
    } else {
        let mut end = MAX;
        while !body.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}...[truncated]", &body[..end])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percentage_rounds_to_nearest() {
        assert_eq!(upload_percentage(0, 3), 0);
        assert_eq!(upload_percentage(1, 3), 33);
        assert_eq!(upload_percentage(2, 3), 67);
        assert_eq!(upload_percentage(3, 3), 100);
    }

    #[test]
    fn base_url_trailing_slash_trimmed() {
        let client = Client::with_base_url("http://localhost:8000/").unwrap();
        assert_eq!(client.base_url(), "http://localhost:8000");
        assert_eq!(
            client.projects_url().unwrap().as_str(),
            "http://localhost:8000/v1/project/"
        );
    }

    #[test]
    fn project_url_encodes_id() {
        let client = Client::with_base_url("http://localhost:8000").unwrap();
        assert_eq!(
            client.project_url("abc-123").unwrap().as_str(),
            "http://localhost:8000/v1/project/abc-123"
        );
        assert_eq!(
            client.project_url("a b/c").unwrap().as_str(),
            "http://localhost:8000/v1/project/a%20b%2Fc"
        );
    }

    #[test]
    fn invalid_base_url_is_rejected() {
        let client = Client::with_base_url("not a url").unwrap();
        assert!(matches!(
            client.projects_url(),
            Err(Error::InvalidRequest(_))
        ));
    }

    #[test]
    fn truncate_body_long() {
        let body = "x".repeat(2500);
        let out = truncate_body(&body);
        assert!(out.ends_with("...[truncated]"));
        assert_eq!(out.len(), 2000 + "...[truncated]".len());
    }

    #[test]
    fn bad_mime_type_rejected() {
        let request = CreateProjectRequest::new("Pets", "https://api.example.com").with_file(
            crate::types::SwaggerFile::new("pets.json", "not a mime", b"{}".to_vec()),
        );
        assert!(matches!(
            project_form(&request, None),
            Err(Error::InvalidRequest(_))
        ));
    }
}
