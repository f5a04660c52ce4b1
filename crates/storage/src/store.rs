use async_trait::async_trait;

use crate::Database;
use crate::error::Result;
use crate::models::{
    Competition, Event, EventResult, NewEvent, NewEventResult, PointValue, Skater, SkaterName,
};
use crate::repository::{
    competition::CompetitionRepository, event::EventRepository,
    event_result::EventResultRepository, point_value::PointValueRepository,
    skater::SkaterRepository,
};

/// The table operations the entry form needs from its backing store.
///
/// Lookups that find nothing return `Ok(None)`; `Err` is reserved for the store
/// itself failing.
#[async_trait]
pub trait ResultStore: Send + Sync {
    async fn find_competition(&self, competition_id: i32) -> Result<Competition>;

    async fn list_skaters(&self) -> Result<Vec<Skater>>;

    async fn find_skater(&self, name: &SkaterName) -> Result<Option<Skater>>;

    async fn list_events(&self, competition_id: i32) -> Result<Vec<Event>>;

    async fn find_event(&self, event_name: &str, competition_id: i32) -> Result<Option<Event>>;

    async fn create_event(&self, event: &NewEvent) -> Result<Event>;

    async fn find_point_value(&self, group_size: i32, placement: i32)
    -> Result<Option<PointValue>>;

    async fn insert_result(&self, result: &NewEventResult) -> Result<EventResult>;
}

#[async_trait]
impl ResultStore for Database {
    async fn find_competition(&self, competition_id: i32) -> Result<Competition> {
        CompetitionRepository::new(self.pool())
            .find_by_id(competition_id)
            .await
    }

    async fn list_skaters(&self) -> Result<Vec<Skater>> {
        SkaterRepository::new(self.pool()).list().await
    }

    async fn find_skater(&self, name: &SkaterName) -> Result<Option<Skater>> {
        SkaterRepository::new(self.pool()).find_by_name(name).await
    }

    async fn list_events(&self, competition_id: i32) -> Result<Vec<Event>> {
        EventRepository::new(self.pool())
            .list_for_competition(competition_id)
            .await
    }

    async fn find_event(&self, event_name: &str, competition_id: i32) -> Result<Option<Event>> {
        EventRepository::new(self.pool())
            .find_by_name(event_name, competition_id)
            .await
    }

    async fn create_event(&self, event: &NewEvent) -> Result<Event> {
        EventRepository::new(self.pool()).create(event).await
    }

    async fn find_point_value(
        &self,
        group_size: i32,
        placement: i32,
    ) -> Result<Option<PointValue>> {
        PointValueRepository::new(self.pool())
            .find(group_size, placement)
            .await
    }

    async fn insert_result(&self, result: &NewEventResult) -> Result<EventResult> {
        EventResultRepository::new(self.pool()).create(result).await
    }
}
