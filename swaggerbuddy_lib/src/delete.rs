//! Type-to-confirm project deletion.

use crate::api::ApiClient;
use crate::error::SwaggerBuddyError;
use crate::project_list::ProjectList;

/// Text the user must type, exactly, to enable deletion.
pub const CONFIRMATION_TEXT: &str = "DELETE";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted,
    /// The typed text did not match; nothing was sent.
    NotConfirmed,
}

/// The confirmation dialog.
#[derive(Clone, Debug, Default)]
pub struct DeleteConfirmation {
    input: String,
    deleting: bool,
    open: bool,
}

impl DeleteConfirmation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    /// Closes the dialog and forgets the typed text. Ignored while deleting.
    pub fn close(&mut self) {
        if self.deleting {
            return;
        }
        self.open = false;
        self.input.clear();
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Ignored while deleting.
    pub fn set_input(&mut self, text: &str) {
        if self.deleting {
            return;
        }
        self.input = text.to_string();
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn is_confirm_valid(&self) -> bool {
        self.input == CONFIRMATION_TEXT
    }

    pub fn is_deleting(&self) -> bool {
        self.deleting
    }

    pub fn can_confirm(&self) -> bool {
        self.is_confirm_valid() && !self.deleting
    }

    /// Deletes the project if the confirmation text matches. On success the
    /// dialog closes; on failure it stays open with the typed text kept.
    pub async fn confirm(
        &mut self,
        api: &ApiClient,
        project_id: &str,
    ) -> Result<DeleteOutcome, SwaggerBuddyError> {
        if !self.is_confirm_valid() {
            return Ok(DeleteOutcome::NotConfirmed);
        }

        self.deleting = true;
        let result = api.projects().delete(project_id).await;
        self.deleting = false;

        result?;
        tracing::info!("Deleted project {}", project_id);
        self.close();
        Ok(DeleteOutcome::Deleted)
    }

    /// [`DeleteConfirmation::confirm`], then drops the project from `list`.
    pub async fn confirm_and_remove(
        &mut self,
        api: &ApiClient,
        list: &mut ProjectList,
        project_id: &str,
    ) -> Result<DeleteOutcome, SwaggerBuddyError> {
        let outcome = self.confirm(api, project_id).await?;
        if outcome == DeleteOutcome::Deleted {
            list.remove(project_id);
        }
        Ok(outcome)
    }
}
