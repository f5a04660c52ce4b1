use std::sync::Arc;

use storage::ResultStore;
use storage::services::result_submission::SubmissionSettings;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn ResultStore>,
    pub settings: SubmissionSettings,
}

impl AppState {
    pub fn new(store: Arc<dyn ResultStore>, settings: SubmissionSettings) -> Self {
        Self { store, settings }
    }
}
