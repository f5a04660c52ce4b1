use sqlx::PgPool;

use crate::error::{Result, StorageError};
use crate::models::{EventResult, NewEventResult};

pub struct EventResultRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> EventResultRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Insert a result row
    pub async fn create(&self, result: &NewEventResult) -> Result<EventResult> {
        let created = sqlx::query_as::<_, EventResult>(
            r#"
            INSERT INTO results (event_id, skater_id, points, group_label)
            VALUES ($1, $2, $3, $4)
            RETURNING result_id, event_id, skater_id, points, group_label, created_at
            "#,
        )
        .bind(result.event_id)
        .bind(result.skater_id)
        .bind(result.points)
        .bind(result.group_label.as_deref())
        .fetch_one(self.pool)
        .await
        .map_err(StorageError::from)
        .map_err(|e| {
            if e.is_foreign_key_violation() {
                return StorageError::ConstraintViolation(format!(
                    "Unknown event {} or skater {}",
                    result.event_id, result.skater_id
                ));
            }
            e
        })?;

        Ok(created)
    }
}
