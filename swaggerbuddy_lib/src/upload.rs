//! The "create project" form: local state, validation, and submission.

use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::Arc;
use std::time::Duration;

use swaggerbuddy_api::types::{CreateProjectRequest, Project, ProjectID, SwaggerFile};

use crate::api::ApiClient;
use crate::error::SwaggerBuddyError;
use crate::validation::{validate_swagger_file, validate_url};

/// Pause between a successful upload and opening the new project.
pub const REDIRECT_DELAY: Duration = Duration::from_millis(1500);

/// Where the Swagger document comes from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum UploadType {
    #[default]
    File,
    Url,
}

/// Form lifecycle: idle -> validating -> uploading -> success | error.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum UploadStatus {
    #[default]
    Idle,
    Validating,
    Uploading,
    Success { project_id: ProjectID },
    Error(String),
}

/// What the caller should do after a successful upload.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum UploadOutcome {
    /// A success callback took care of it.
    Handled,
    /// Open the project detail for `project_id` once `after` has elapsed.
    Navigate { project_id: ProjectID, after: Duration },
}

impl UploadOutcome {
    /// Hands `project_id` to `on_success` when given, otherwise asks for
    /// navigation after [`REDIRECT_DELAY`].
    pub fn resolve<F>(project_id: &str, on_success: Option<F>) -> Self
    where
        F: FnOnce(&str),
    {
        match on_success {
            Some(callback) => {
                callback(project_id);
                UploadOutcome::Handled
            }
            None => UploadOutcome::Navigate {
                project_id: project_id.to_string(),
                after: REDIRECT_DELAY,
            },
        }
    }
}

/// State of the upload form.
#[derive(Debug, Default)]
pub struct UploadForm {
    upload_type: UploadType,
    project_name: String,
    base_url: String,
    swagger_url: String,
    selected_file: Option<SwaggerFile>,
    status: UploadStatus,
    progress: Arc<AtomicU8>,
}

impl UploadForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_upload_type(&mut self, upload_type: UploadType) {
        self.upload_type = upload_type;
    }

    pub fn set_project_name(&mut self, name: &str) {
        self.project_name = name.to_string();
    }

    pub fn set_base_url(&mut self, base_url: &str) {
        self.base_url = base_url.to_string();
    }

    pub fn set_swagger_url(&mut self, url: &str) {
        self.swagger_url = url.to_string();
    }

    pub fn upload_type(&self) -> UploadType {
        self.upload_type
    }

    pub fn selected_file(&self) -> Option<&SwaggerFile> {
        self.selected_file.as_ref()
    }

    pub fn status(&self) -> &UploadStatus {
        &self.status
    }

    /// The inline error message, if the last action failed.
    pub fn error(&self) -> Option<&str> {
        match &self.status {
            UploadStatus::Error(msg) => Some(msg),
            _ => None,
        }
    }

    /// Upload progress in percent.
    pub fn progress(&self) -> u8 {
        self.progress.load(Ordering::Relaxed)
    }

    pub fn is_uploading(&self) -> bool {
        self.status == UploadStatus::Uploading
    }

    /// Selects a file after validating its type and size. A rejected file
    /// leaves the current selection untouched and records the error.
    pub fn select_file(&mut self, file: SwaggerFile) -> Result<(), SwaggerBuddyError> {
        if let Err(e) = validate_swagger_file(&file) {
            self.status = UploadStatus::Error(e.to_string());
            return Err(e);
        }
        self.selected_file = Some(file);
        self.clear_error();
        Ok(())
    }

    pub fn remove_file(&mut self) {
        self.selected_file = None;
        self.clear_error();
    }

    fn clear_error(&mut self) {
        if matches!(self.status, UploadStatus::Error(_)) {
            self.status = UploadStatus::Idle;
        }
    }

    /// Whether the submit action is available: not uploading, base URL
    /// filled in, and the input for the current mode present.
    pub fn can_submit(&self) -> bool {
        if self.is_uploading() || self.base_url.trim().is_empty() {
            return false;
        }
        match self.upload_type {
            UploadType::File => self.selected_file.is_some(),
            UploadType::Url => !self.swagger_url.trim().is_empty(),
        }
    }

    /// Checks the form in display order and returns the first problem.
    pub fn validate(&self) -> Result<(), SwaggerBuddyError> {
        if self.project_name.trim().is_empty() {
            return Err(invalid("Project name is required"));
        }
        if self.base_url.trim().is_empty() {
            return Err(invalid("Base URL is required"));
        }
        validate_url(&self.base_url)?;

        match self.upload_type {
            UploadType::File => {
                if self.selected_file.is_none() {
                    return Err(invalid("Please select a file"));
                }
            }
            UploadType::Url => {
                if self.swagger_url.trim().is_empty() {
                    return Err(invalid("Swagger URL is required"));
                }
                validate_url(&self.swagger_url)?;
            }
        }
        Ok(())
    }

    /// The request for the current mode: exactly one of file or URL attached.
    pub fn build_request(&self) -> CreateProjectRequest {
        let request = CreateProjectRequest::new(self.project_name.trim(), self.base_url.trim());
        match (self.upload_type, &self.selected_file) {
            (UploadType::File, Some(file)) => request.with_file(file.clone()),
            (UploadType::File, None) => request,
            (UploadType::Url, _) => request.with_url(self.swagger_url.trim()),
        }
    }

    /// Validates and uploads. `on_progress` receives the upload percentage as
    /// the file is sent; [`UploadForm::progress`] tracks the same value.
    pub async fn submit<F>(
        &mut self,
        api: &ApiClient,
        on_progress: F,
    ) -> Result<Project, SwaggerBuddyError>
    where
        F: Fn(u8) + Send + Sync + 'static,
    {
        self.status = UploadStatus::Validating;
        if let Err(e) = self.validate() {
            self.status = UploadStatus::Error(e.to_string());
            return Err(e);
        }

        let request = self.build_request();
        self.progress.store(0, Ordering::Relaxed);
        self.status = UploadStatus::Uploading;

        let progress = Arc::clone(&self.progress);
        let result = api
            .projects()
            .create_with_progress(&request, move |p| {
                progress.store(p, Ordering::Relaxed);
                on_progress(p);
            })
            .await;

        match result {
            Ok(project) => {
                tracing::info!("Created project {} ({})", project.name, project.id);
                self.progress.store(100, Ordering::Relaxed);
                self.status = UploadStatus::Success {
                    project_id: project.id.clone(),
                };
                Ok(project)
            }
            Err(e) => {
                self.status = UploadStatus::Error(e.to_string());
                Err(e)
            }
        }
    }

    /// Clears everything for another upload. The upload mode is kept.
    pub fn reset(&mut self) {
        self.selected_file = None;
        self.project_name.clear();
        self.swagger_url.clear();
        self.base_url.clear();
        self.status = UploadStatus::Idle;
        self.progress.store(0, Ordering::Relaxed);
    }
}

fn invalid(msg: &str) -> SwaggerBuddyError {
    SwaggerBuddyError::InvalidInput(msg.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn json_file() -> SwaggerFile {
        SwaggerFile::new("openapi.json", "application/json", br#"{"openapi":"3.0.0"}"#.to_vec())
    }

    fn filled_form() -> UploadForm {
        let mut form = UploadForm::new();
        form.set_project_name("  Petstore ");
        form.set_base_url(" https://petstore.example.com/v2 ");
        form
    }

    fn validation_message(form: &UploadForm) -> String {
        form.validate().unwrap_err().to_string()
    }

    #[test]
    fn name_checked_first() {
        let mut form = UploadForm::new();
        form.set_base_url("not a url");
        assert_eq!(validation_message(&form), "Project name is required");
    }

    #[test]
    fn base_url_required_then_parsed() {
        let mut form = UploadForm::new();
        form.set_project_name("Pets");
        assert_eq!(validation_message(&form), "Base URL is required");
        form.set_base_url("petstore");
        assert_eq!(validation_message(&form), "Please enter a valid URL");
    }

    #[test]
    fn file_mode_requires_file() {
        let form = filled_form();
        assert_eq!(validation_message(&form), "Please select a file");
    }

    #[test]
    fn url_mode_requires_valid_url() {
        let mut form = filled_form();
        form.set_upload_type(UploadType::Url);
        assert_eq!(validation_message(&form), "Swagger URL is required");
        form.set_swagger_url("swagger.json");
        assert_eq!(validation_message(&form), "Please enter a valid URL");
        form.set_swagger_url("https://petstore.example.com/v2/swagger.json");
        assert!(form.validate().is_ok());
    }

    #[test]
    fn rejected_file_keeps_previous_selection() {
        let mut form = filled_form();
        form.select_file(json_file()).unwrap();
        let bad = SwaggerFile::new("notes.txt", "text/plain", b"hello".to_vec());
        assert!(form.select_file(bad).is_err());
        assert_eq!(form.error(), Some("Please upload a JSON or YAML file"));
        assert_eq!(form.selected_file().unwrap().file_name, "openapi.json");
    }

    #[test]
    fn selecting_valid_file_clears_error() {
        let mut form = filled_form();
        let bad = SwaggerFile::new("notes.txt", "text/plain", b"hello".to_vec());
        let _ = form.select_file(bad);
        assert!(form.error().is_some());
        form.select_file(json_file()).unwrap();
        assert_eq!(form.error(), None);
        assert_eq!(form.status(), &UploadStatus::Idle);
    }

    #[test]
    fn can_submit_follows_mode() {
        let mut form = filled_form();
        assert!(!form.can_submit());
        form.select_file(json_file()).unwrap();
        assert!(form.can_submit());
        form.set_upload_type(UploadType::Url);
        assert!(!form.can_submit());
        form.set_swagger_url("https://petstore.example.com/swagger.json");
        assert!(form.can_submit());
        form.set_base_url("   ");
        assert!(!form.can_submit());
    }

    #[test]
    fn request_carries_exactly_one_source() {
        let mut form = filled_form();
        form.select_file(json_file()).unwrap();
        form.set_swagger_url("https://petstore.example.com/swagger.json");

        let request = form.build_request();
        assert_eq!(request.project_name, "Petstore");
        assert_eq!(request.base_url, "https://petstore.example.com/v2");
        assert!(request.swagger_file.is_some());
        assert!(request.swagger_url.is_none());

        form.set_upload_type(UploadType::Url);
        let request = form.build_request();
        assert!(request.swagger_file.is_none());
        assert_eq!(
            request.swagger_url.as_deref(),
            Some("https://petstore.example.com/swagger.json")
        );
    }

    #[test]
    fn reset_clears_fields_but_keeps_mode() {
        let mut form = filled_form();
        form.set_upload_type(UploadType::Url);
        form.set_swagger_url("https://petstore.example.com/swagger.json");
        form.reset();
        assert_eq!(form.upload_type(), UploadType::Url);
        assert!(!form.can_submit());
        assert_eq!(validation_message(&form), "Project name is required");
        assert_eq!(form.progress(), 0);
    }

    #[test]
    fn outcome_uses_callback_when_given() {
        let mut opened = None;
        let outcome = UploadOutcome::resolve("p-1", Some(|id: &str| opened = Some(id.to_string())));
        assert_eq!(outcome, UploadOutcome::Handled);
        assert_eq!(opened.as_deref(), Some("p-1"));
    }

    #[test]
    fn outcome_navigates_after_delay_without_callback() {
        let outcome = UploadOutcome::resolve::<fn(&str)>("p-1", None);
        assert_eq!(
            outcome,
            UploadOutcome::Navigate {
                project_id: "p-1".to_string(),
                after: Duration::from_millis(1500),
            }
        );
    }
}
