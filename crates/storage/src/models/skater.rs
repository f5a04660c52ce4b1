use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Skater {
    pub skater_id: i32,
    pub first_name: String,
    pub last_name: String,
}

impl Skater {
    /// "First Last", the form the skater is listed under in the entry form.
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}
