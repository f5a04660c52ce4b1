use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Event {
    pub event_id: i32,
    pub event_name: String,
    pub is_championship: bool,
    pub competition_id: i32,
}

/// Event row to insert when a submission names an event the competition does not have yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewEvent {
    pub event_name: String,
    pub is_championship: bool,
    pub competition_id: i32,
}

impl NewEvent {
    pub fn regular(event_name: impl Into<String>, competition_id: i32) -> Self {
        Self {
            event_name: event_name.into(),
            is_championship: false,
            competition_id,
        }
    }
}
