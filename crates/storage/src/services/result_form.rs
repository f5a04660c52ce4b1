use tracing::warn;

use crate::dto::reference::SkaterOption;
use crate::dto::result::{FieldErrors, ResultFormData};
use crate::models::EventResult;
use crate::services::result_submission::{SubmissionSettings, submit_result};
use crate::store::ResultStore;

pub const RESULT_ADDED: &str = "Result added!";
pub const RESULT_FAILED: &str = "Error adding result.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Validation failed; errors are on the form and nothing was sent to the store
    Invalid,
    Added(EventResult),
    Failed,
}

impl SubmitOutcome {
    /// Message shown to the operator after a submit attempt
    pub fn notification(&self) -> Option<&'static str> {
        match self {
            SubmitOutcome::Invalid => None,
            SubmitOutcome::Added(_) => Some(RESULT_ADDED),
            SubmitOutcome::Failed => Some(RESULT_FAILED),
        }
    }
}

/// State of the result entry form between keystrokes and submits.
#[derive(Debug, Clone, Default)]
pub struct ResultForm {
    data: ResultFormData,
    errors: FieldErrors,
}

impl ResultForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn data(&self) -> &ResultFormData {
        &self.data
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn select_skater(&mut self, skater: &SkaterOption) {
        self.data.skater_name = skater.display_name.clone();
        self.data.skater_id = Some(skater.skater_id);
    }

    /// Sets the skater by display name only, dropping any previously selected id.
    pub fn set_skater_name(&mut self, skater_name: impl Into<String>) {
        self.data.skater_name = skater_name.into();
        self.data.skater_id = None;
    }

    pub fn set_event_name(&mut self, event_name: impl Into<String>) {
        self.data.event_name = event_name.into();
    }

    pub fn set_placement(&mut self, placement: impl Into<String>) {
        self.data.placement = placement.into();
    }

    pub fn set_group_size(&mut self, group_size: impl Into<String>) {
        self.data.group_size = group_size.into();
    }

    /// Group input is upper-cased as it is typed.
    pub fn set_group(&mut self, group: &str) {
        self.data.group = group.to_uppercase();
    }

    /// Validates, then runs the submission workflow. The fields are cleared only
    /// when the result was stored.
    pub async fn submit<S: ResultStore + ?Sized>(
        &mut self,
        store: &S,
        settings: &SubmissionSettings,
    ) -> SubmitOutcome {
        let entry = match self.data.validated() {
            Ok(entry) => {
                self.errors = FieldErrors::default();
                entry
            }
            Err(errors) => {
                self.errors = errors;
                return SubmitOutcome::Invalid;
            }
        };

        match submit_result(store, settings, &entry).await {
            Ok(result) => {
                self.data = ResultFormData::default();
                SubmitOutcome::Added(result)
            }
            Err(e) => {
                warn!("Result submission failed: {}", e);
                SubmitOutcome::Failed
            }
        }
    }
}
