use std::collections::HashSet;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use crate::MemoryStore;
use crate::error::{Result, StorageError};
use crate::models::{
    Competition, Event, EventResult, NewEvent, NewEventResult, PointValue, Skater, SkaterName,
};
use crate::store::ResultStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    FindCompetition,
    ListSkaters,
    FindSkater,
    ListEvents,
    FindEvent,
    CreateEvent,
    FindPointValue,
    InsertResult,
}

const ALL_OPERATIONS: [Operation; 8] = [
    Operation::FindCompetition,
    Operation::ListSkaters,
    Operation::FindSkater,
    Operation::ListEvents,
    Operation::FindEvent,
    Operation::CreateEvent,
    Operation::FindPointValue,
    Operation::InsertResult,
];

/// `MemoryStore` wrapper where chosen operations fail as if the database
/// connection had dropped. Counts result inserts that reach the store.
pub struct FailingStore {
    pub inner: MemoryStore,
    failing: HashSet<Operation>,
    hide_events: bool,
    insert_calls: AtomicUsize,
}

impl FailingStore {
    pub fn new(inner: MemoryStore, failing: &[Operation]) -> Self {
        Self {
            inner,
            failing: failing.iter().copied().collect(),
            hide_events: false,
            insert_calls: AtomicUsize::new(0),
        }
    }

    /// Every operation fails.
    pub fn offline() -> Self {
        Self::new(MemoryStore::new(), &ALL_OPERATIONS)
    }

    /// Event lookups report no match even when the event exists, like a
    /// lookup that lost a race with another submission creating the event.
    pub fn with_stale_event_lookup(mut self) -> Self {
        self.hide_events = true;
        self
    }

    pub fn insert_calls(&self) -> usize {
        self.insert_calls.load(Ordering::SeqCst)
    }

    fn check(&self, operation: Operation) -> Result<()> {
        if self.failing.contains(&operation) {
            return Err(StorageError::Database(sqlx::Error::PoolTimedOut));
        }
        Ok(())
    }
}

#[async_trait]
impl ResultStore for FailingStore {
    async fn find_competition(&self, competition_id: i32) -> Result<Competition> {
        self.check(Operation::FindCompetition)?;
        self.inner.find_competition(competition_id).await
    }

    async fn list_skaters(&self) -> Result<Vec<Skater>> {
        self.check(Operation::ListSkaters)?;
        self.inner.list_skaters().await
    }

    async fn find_skater(&self, name: &SkaterName) -> Result<Option<Skater>> {
        self.check(Operation::FindSkater)?;
        self.inner.find_skater(name).await
    }

    async fn list_events(&self, competition_id: i32) -> Result<Vec<Event>> {
        self.check(Operation::ListEvents)?;
        self.inner.list_events(competition_id).await
    }

    async fn find_event(&self, event_name: &str, competition_id: i32) -> Result<Option<Event>> {
        self.check(Operation::FindEvent)?;
        if self.hide_events {
            return Ok(None);
        }
        self.inner.find_event(event_name, competition_id).await
    }

    async fn create_event(&self, event: &NewEvent) -> Result<Event> {
        self.check(Operation::CreateEvent)?;
        self.inner.create_event(event).await
    }

    async fn find_point_value(
        &self,
        group_size: i32,
        placement: i32,
    ) -> Result<Option<PointValue>> {
        self.check(Operation::FindPointValue)?;
        self.inner.find_point_value(group_size, placement).await
    }

    async fn insert_result(&self, result: &NewEventResult) -> Result<EventResult> {
        self.insert_calls.fetch_add(1, Ordering::SeqCst);
        self.check(Operation::InsertResult)?;
        self.inner.insert_result(result).await
    }
}
