//! Project operations grouped the way the screens use them.

use swaggerbuddy_api::types::{CreateProjectRequest, Project, ProjectSummary};
use swaggerbuddy_api::Client;

use crate::config::Config;
use crate::error::SwaggerBuddyError;

/// Entry point to the backend for every screen.
pub struct ApiClient {
    inner: Client,
}

impl ApiClient {
    /// Creates a client for the configured backend.
    pub fn new(config: &Config) -> Result<Self, SwaggerBuddyError> {
        Self::with_base_url(&config.api_url)
    }

    /// Creates a client with a custom base URL. Used for testing.
    pub fn with_base_url(base_url: &str) -> Result<Self, SwaggerBuddyError> {
        Ok(Self {
            inner: Client::with_base_url(base_url)?,
        })
    }

    /// The backend base URL.
    pub fn base_url(&self) -> &str {
        self.inner.base_url()
    }

    /// Project operations: `create`, `create_with_progress`, `get_all`,
    /// `get_by_id`, `delete`.
    pub fn projects(&self) -> ProjectsApi<'_> {
        ProjectsApi { client: &self.inner }
    }
}

/// Borrowed handle over the project endpoints.
pub struct ProjectsApi<'a> {
    client: &'a Client,
}

impl ProjectsApi<'_> {
    pub async fn create(&self, request: &CreateProjectRequest) -> Result<Project, SwaggerBuddyError> {
        Ok(self.client.create_project(request).await?)
    }

    pub async fn create_with_progress<F>(
        &self,
        request: &CreateProjectRequest,
        on_progress: F,
    ) -> Result<Project, SwaggerBuddyError>
    where
        F: Fn(u8) + Send + Sync + 'static,
    {
        Ok(self
            .client
            .create_project_with_progress(request, on_progress)
            .await?)
    }

    pub async fn get_all(&self) -> Result<Vec<ProjectSummary>, SwaggerBuddyError> {
        Ok(self.client.get_projects().await?)
    }

    pub async fn get_by_id(&self, project_id: &str) -> Result<Project, SwaggerBuddyError> {
        Ok(self.client.get_project(project_id).await?)
    }

    pub async fn delete(&self, project_id: &str) -> Result<(), SwaggerBuddyError> {
        Ok(self.client.delete_project(project_id).await?)
    }
}
