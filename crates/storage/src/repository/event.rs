use sqlx::PgPool;

use crate::error::{Result, StorageError};
use crate::models::{Event, NewEvent};

/// Repository for Event database operations
pub struct EventRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> EventRepository<'a> {
    /// Create a new EventRepository
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List the events of a competition
    pub async fn list_for_competition(&self, competition_id: i32) -> Result<Vec<Event>> {
        let events = sqlx::query_as::<_, Event>(
            r#"
            SELECT event_id, event_name, is_championship, competition_id
            FROM events
            WHERE competition_id = $1
            ORDER BY event_name
            "#,
        )
        .bind(competition_id)
        .fetch_all(self.pool)
        .await?;

        Ok(events)
    }

    /// Find an event by its name within a competition
    pub async fn find_by_name(&self, event_name: &str, competition_id: i32) -> Result<Option<Event>> {
        let event = sqlx::query_as::<_, Event>(
            r#"
            SELECT event_id, event_name, is_championship, competition_id
            FROM events
            WHERE event_name = $1 AND competition_id = $2
            "#,
        )
        .bind(event_name)
        .bind(competition_id)
        .fetch_optional(self.pool)
        .await?;

        Ok(event)
    }

    /// Create a new event
    pub async fn create(&self, event: &NewEvent) -> Result<Event> {
        let event = sqlx::query_as::<_, Event>(
            r#"
            INSERT INTO events (event_name, is_championship, competition_id)
            VALUES ($1, $2, $3)
            RETURNING event_id, event_name, is_championship, competition_id
            "#,
        )
        .bind(&event.event_name)
        .bind(event.is_championship)
        .bind(event.competition_id)
        .fetch_one(self.pool)
        .await
        .map_err(StorageError::from)
        .map_err(|e| {
            if e.is_unique_violation() {
                return StorageError::ConstraintViolation(format!(
                    "Event '{}' already exists",
                    event.event_name
                ));
            }
            e
        })?;

        Ok(event)
    }
}
