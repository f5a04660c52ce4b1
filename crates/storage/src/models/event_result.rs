use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct EventResult {
    pub result_id: i32,
    pub event_id: i32,
    pub skater_id: i32,
    pub points: i32,
    pub group_label: Option<String>,
    pub created_at: chrono::NaiveDateTime,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewEventResult {
    pub event_id: i32,
    pub skater_id: i32,
    pub points: i32,
    pub group_label: Option<String>,
}
