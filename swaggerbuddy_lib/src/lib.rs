//! Library layer for Swagger Buddy: the logic behind every screen.
//!
//! Wraps the `swaggerbuddy_api` client and adds input validation, formatting
//! helpers, and the state of the upload form, project list, project sidebar,
//! endpoint tabs and delete confirmation. Front-ends only render these types.

pub mod api;
pub mod clipboard;
pub mod config;
pub mod debounce;
pub mod delete;
pub mod detail;
pub mod endpoint_view;
pub mod error;
pub mod format;
pub mod project_list;
pub mod sidebar;
pub mod upload;
pub mod validation;

pub use swaggerbuddy_api;
pub use swaggerbuddy_api::types;

pub use api::{ApiClient, ProjectsApi};
pub use config::Config;
pub use delete::{DeleteConfirmation, DeleteOutcome, CONFIRMATION_TEXT};
pub use detail::ProjectDetail;
pub use endpoint_view::{EndpointTab, EndpointView};
pub use error::SwaggerBuddyError;
pub use project_list::{ProjectList, SortField, SortOrder};
pub use sidebar::{FilteredSection, SidebarState};
pub use upload::{UploadForm, UploadOutcome, UploadStatus, UploadType};
