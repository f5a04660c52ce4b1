use std::sync::{Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;

use crate::error::{Result, StorageError};
use crate::models::{
    Competition, Event, EventResult, NewEvent, NewEventResult, PointValue, Skater, SkaterName,
};
use crate::store::ResultStore;

#[derive(Debug, Default)]
struct Tables {
    competitions: Vec<Competition>,
    skaters: Vec<Skater>,
    events: Vec<Event>,
    point_values: Vec<PointValue>,
    results: Vec<EventResult>,
}

/// In-process store with the same lookup and constraint behaviour as the
/// Postgres schema: unique `(event_name, competition_id)` and result rows that
/// must reference an existing event and skater.
#[derive(Debug, Default)]
pub struct MemoryStore {
    tables: Mutex<Tables>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn tables(&self) -> MutexGuard<'_, Tables> {
        self.tables.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn add_competition(&self, competition_id: i32, name: &str) -> Competition {
        let competition = Competition {
            competition_id,
            name: name.to_string(),
        };
        self.tables().competitions.push(competition.clone());
        competition
    }

    pub fn add_skater(&self, first_name: &str, last_name: &str) -> Skater {
        let mut tables = self.tables();
        let skater = Skater {
            skater_id: next_id(tables.skaters.iter().map(|s| s.skater_id)),
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
        };
        tables.skaters.push(skater.clone());
        skater
    }

    pub fn add_event(&self, event: NewEvent) -> Result<Event> {
        let mut tables = self.tables();
        insert_event(&mut tables, &event)
    }

    pub fn add_point_value(&self, group_size: i32, placement: i32, points: i32) {
        let mut tables = self.tables();
        tables
            .point_values
            .retain(|p| !(p.group_size == group_size && p.placement == placement));
        tables.point_values.push(PointValue {
            group_size,
            placement,
            points,
        });
    }

    /// Snapshot of every stored event
    pub fn events(&self) -> Vec<Event> {
        self.tables().events.clone()
    }

    /// Snapshot of every stored result
    pub fn results(&self) -> Vec<EventResult> {
        self.tables().results.clone()
    }
}

fn next_id(ids: impl Iterator<Item = i32>) -> i32 {
    ids.max().unwrap_or(0) + 1
}

fn insert_event(tables: &mut Tables, event: &NewEvent) -> Result<Event> {
    let duplicate = tables
        .events
        .iter()
        .any(|e| e.event_name == event.event_name && e.competition_id == event.competition_id);
    if duplicate {
        return Err(StorageError::ConstraintViolation(format!(
            "Event '{}' already exists",
            event.event_name
        )));
    }

    let created = Event {
        event_id: next_id(tables.events.iter().map(|e| e.event_id)),
        event_name: event.event_name.clone(),
        is_championship: event.is_championship,
        competition_id: event.competition_id,
    };
    tables.events.push(created.clone());
    Ok(created)
}

#[async_trait]
impl ResultStore for MemoryStore {
    async fn find_competition(&self, competition_id: i32) -> Result<Competition> {
        self.tables()
            .competitions
            .iter()
            .find(|c| c.competition_id == competition_id)
            .cloned()
            .ok_or(StorageError::NotFound)
    }

    async fn list_skaters(&self) -> Result<Vec<Skater>> {
        let mut skaters = self.tables().skaters.clone();
        skaters.sort_by(|a, b| {
            (&a.last_name, &a.first_name).cmp(&(&b.last_name, &b.first_name))
        });
        Ok(skaters)
    }

    async fn find_skater(&self, name: &SkaterName) -> Result<Option<Skater>> {
        let (first_name, last_name) = name.as_database_tuple();
        Ok(self
            .tables()
            .skaters
            .iter()
            .find(|s| s.first_name == first_name && s.last_name == last_name)
            .cloned())
    }

    async fn list_events(&self, competition_id: i32) -> Result<Vec<Event>> {
        let mut events: Vec<Event> = self
            .tables()
            .events
            .iter()
            .filter(|e| e.competition_id == competition_id)
            .cloned()
            .collect();
        events.sort_by(|a, b| a.event_name.cmp(&b.event_name));
        Ok(events)
    }

    async fn find_event(&self, event_name: &str, competition_id: i32) -> Result<Option<Event>> {
        Ok(self
            .tables()
            .events
            .iter()
            .find(|e| e.event_name == event_name && e.competition_id == competition_id)
            .cloned())
    }

    async fn create_event(&self, event: &NewEvent) -> Result<Event> {
        let mut tables = self.tables();
        insert_event(&mut tables, event)
    }

    async fn find_point_value(
        &self,
        group_size: i32,
        placement: i32,
    ) -> Result<Option<PointValue>> {
        Ok(self
            .tables()
            .point_values
            .iter()
            .find(|p| p.group_size == group_size && p.placement == placement)
            .copied())
    }

    async fn insert_result(&self, result: &NewEventResult) -> Result<EventResult> {
        let mut tables = self.tables();

        let event_exists = tables.events.iter().any(|e| e.event_id == result.event_id);
        let skater_exists = tables.skaters.iter().any(|s| s.skater_id == result.skater_id);
        if !event_exists || !skater_exists {
            return Err(StorageError::ConstraintViolation(format!(
                "Unknown event {} or skater {}",
                result.event_id, result.skater_id
            )));
        }

        let created = EventResult {
            result_id: next_id(tables.results.iter().map(|r| r.result_id)),
            event_id: result.event_id,
            skater_id: result.skater_id,
            points: result.points,
            group_label: result.group_label.clone(),
            created_at: chrono::Utc::now().naive_utc(),
        };
        tables.results.push(created.clone());
        Ok(created)
    }
}
