use tracing::{debug, info};

use crate::dto::result::ValidatedResult;
use crate::error::{Result, StorageError};
use crate::models::{Event, EventResult, NewEvent, NewEventResult};
use crate::store::ResultStore;

/// Points awarded when the point table has no row for a (group size, placement) pair.
pub const DEFAULT_POINTS: i32 = 0;

/// Deployment-level values the submission workflow depends on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmissionSettings {
    /// Competition every event created or looked up by the form belongs to
    pub competition_id: i32,
}

impl Default for SubmissionSettings {
    fn default() -> Self {
        Self { competition_id: 1 }
    }
}

/// Finds the event by name within the configured competition, creating it when
/// the competition has no event of that name yet.
pub async fn resolve_event<S: ResultStore + ?Sized>(
    store: &S,
    event_name: &str,
    competition_id: i32,
) -> Result<Event> {
    if let Some(event) = store.find_event(event_name, competition_id).await? {
        debug!(event_id = event.event_id, "Reusing existing event");
        return Ok(event);
    }

    let event = store
        .create_event(&NewEvent::regular(event_name, competition_id))
        .await?;
    info!(
        event_id = event.event_id,
        competition_id, "Created event '{}'", event.event_name
    );

    Ok(event)
}

pub async fn resolve_points<S: ResultStore + ?Sized>(
    store: &S,
    group_size: i32,
    placement: i32,
) -> Result<i32> {
    let points = store
        .find_point_value(group_size, placement)
        .await?
        .map(|p| p.points);

    if points.is_none() {
        debug!(group_size, placement, "No point value, awarding default");
    }

    Ok(points.unwrap_or(DEFAULT_POINTS))
}

/// Uses the selected skater's id when the form carries one, otherwise matches
/// the display name split on its first space.
pub async fn resolve_skater_id<S: ResultStore + ?Sized>(
    store: &S,
    entry: &ValidatedResult,
) -> Result<i32> {
    if let Some(skater_id) = entry.skater_id {
        return Ok(skater_id);
    }

    let name = entry.skater();
    store
        .find_skater(&name)
        .await?
        .map(|s| s.skater_id)
        .ok_or_else(|| StorageError::UnknownSkater(name.to_string()))
}

/// Stores one result for a validated form entry.
///
/// Each step awaits the previous one; nothing is rolled back when a later step
/// fails, so an event created in step one survives a rejected skater.
pub async fn submit_result<S: ResultStore + ?Sized>(
    store: &S,
    settings: &SubmissionSettings,
    entry: &ValidatedResult,
) -> Result<EventResult> {
    let event = resolve_event(store, &entry.event_name, settings.competition_id).await?;
    let points = resolve_points(store, entry.group_size, entry.placement).await?;
    let skater_id = resolve_skater_id(store, entry).await?;

    let result = store
        .insert_result(&NewEventResult {
            event_id: event.event_id,
            skater_id,
            points,
            group_label: entry.group.clone(),
        })
        .await?;

    info!(
        result_id = result.result_id,
        event_id = result.event_id,
        skater_id = result.skater_id,
        points = result.points,
        "Result added"
    );

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemoryStore;
    use crate::testing::{FailingStore, Operation};

    fn settings() -> SubmissionSettings {
        SubmissionSettings { competition_id: 1 }
    }

    fn entry(skater_name: &str, event_name: &str, placement: i32, group_size: i32) -> ValidatedResult {
        ValidatedResult {
            skater_name: skater_name.to_string(),
            skater_id: None,
            event_name: event_name.to_string(),
            placement,
            group_size,
            group: None,
        }
    }

    fn store_with_skater() -> MemoryStore {
        let store = MemoryStore::new();
        store.add_competition(1, "Season");
        store.add_skater("Alice", "Smith");
        store
    }

    #[tokio::test]
    async fn test_reuses_existing_event() {
        let store = store_with_skater();
        let relay = store.add_event(NewEvent::regular("Relay", 1)).unwrap();

        let result = submit_result(&store, &settings(), &entry("Alice Smith", "Relay", 3, 8))
            .await
            .unwrap();

        assert_eq!(result.event_id, relay.event_id);
        assert_eq!(store.events().len(), 1);
    }

    #[tokio::test]
    async fn test_creates_missing_event_once() {
        let store = store_with_skater();

        let result = submit_result(&store, &settings(), &entry("Alice Smith", "500m", 1, 4))
            .await
            .unwrap();

        let events = store.events();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].event_name, "500m");
        assert!(!events[0].is_championship);
        assert_eq!(events[0].competition_id, 1);
        assert_eq!(result.event_id, events[0].event_id);
    }

    #[tokio::test]
    async fn test_same_name_in_other_competition_is_not_reused() {
        let store = store_with_skater();
        store.add_competition(2, "Other");
        store.add_event(NewEvent::regular("Relay", 2)).unwrap();

        submit_result(&store, &settings(), &entry("Alice Smith", "Relay", 1, 4))
            .await
            .unwrap();

        let events = store.events();
        assert_eq!(events.len(), 2);
        assert!(events.iter().any(|e| e.event_name == "Relay" && e.competition_id == 1));
    }

    #[tokio::test]
    async fn test_competition_id_comes_from_settings() {
        let store = store_with_skater();
        store.add_competition(7, "Regional");

        submit_result(
            &store,
            &SubmissionSettings { competition_id: 7 },
            &entry("Alice Smith", "Relay", 1, 4),
        )
        .await
        .unwrap();

        assert_eq!(store.events()[0].competition_id, 7);
    }

    #[tokio::test]
    async fn test_points_from_table() {
        let store = store_with_skater();
        store.add_point_value(8, 3, 5);

        let result = submit_result(&store, &settings(), &entry("Alice Smith", "Relay", 3, 8))
            .await
            .unwrap();

        assert_eq!(result.points, 5);
    }

    #[tokio::test]
    async fn test_points_default_to_zero() {
        let store = store_with_skater();
        store.add_point_value(8, 3, 5);

        let result = submit_result(&store, &settings(), &entry("Alice Smith", "Relay", 8, 3))
            .await
            .unwrap();

        assert_eq!(result.points, DEFAULT_POINTS);
    }

    #[tokio::test]
    async fn test_group_stored_or_null() {
        let store = store_with_skater();

        let mut grouped = entry("Alice Smith", "Relay", 1, 4);
        grouped.group = Some("B".to_string());
        let with_group = submit_result(&store, &settings(), &grouped).await.unwrap();
        let without_group = submit_result(&store, &settings(), &entry("Alice Smith", "Relay", 2, 4))
            .await
            .unwrap();

        assert_eq!(with_group.group_label.as_deref(), Some("B"));
        assert_eq!(without_group.group_label, None);
    }

    #[tokio::test]
    async fn test_multi_word_name_matches_on_first_space() {
        let store = MemoryStore::new();
        let jean = store.add_skater("Jean", "Claude Smith");
        store.add_skater("Jean Claude", "Smith");

        let result = submit_result(&store, &settings(), &entry("Jean Claude Smith", "Relay", 1, 4))
            .await
            .unwrap();

        assert_eq!(result.skater_id, jean.skater_id);
    }

    #[tokio::test]
    async fn test_selected_skater_id_skips_name_lookup() {
        let store = MemoryStore::new();
        let skater = store.add_skater("Jean Claude", "Smith");

        let mut selected = entry("Jean Claude Smith", "Relay", 1, 4);
        selected.skater_id = Some(skater.skater_id);
        let result = submit_result(&store, &settings(), &selected).await.unwrap();

        assert_eq!(result.skater_id, skater.skater_id);
    }

    #[tokio::test]
    async fn test_unknown_skater_is_rejected_before_insert() {
        let store = store_with_skater();

        let err = submit_result(&store, &settings(), &entry("Bob Jones", "Relay", 1, 4))
            .await
            .unwrap_err();

        assert!(matches!(err, StorageError::UnknownSkater(ref name) if name == "Bob Jones"));
        assert!(store.results().is_empty());
        // the event created before the skater lookup stays
        assert_eq!(store.events().len(), 1);
    }

    #[tokio::test]
    async fn test_failed_event_creation_aborts_before_insert() {
        let store = FailingStore::new(store_with_skater(), &[Operation::CreateEvent]);

        let err = submit_result(&store, &settings(), &entry("Alice Smith", "Relay", 1, 4))
            .await
            .unwrap_err();

        assert!(matches!(err, StorageError::Database(_)));
        assert_eq!(store.insert_calls(), 0);
        assert!(store.inner.results().is_empty());
    }

    #[tokio::test]
    async fn test_event_created_concurrently_fails_submission() {
        let inner = store_with_skater();
        inner.add_event(NewEvent::regular("Relay", 1)).unwrap();
        let store = FailingStore::new(inner, &[]).with_stale_event_lookup();

        let err = submit_result(&store, &settings(), &entry("Alice Smith", "Relay", 1, 4))
            .await
            .unwrap_err();

        assert!(matches!(err, StorageError::ConstraintViolation(_)));
        assert!(err.is_rejection());
        assert_eq!(store.insert_calls(), 0);
        assert_eq!(store.inner.events().len(), 1);
    }

    #[tokio::test]
    async fn test_failed_insert_is_reported() {
        let store = FailingStore::new(store_with_skater(), &[Operation::InsertResult]);

        let err = submit_result(&store, &settings(), &entry("Alice Smith", "Relay", 1, 4))
            .await
            .unwrap_err();

        assert!(matches!(err, StorageError::Database(_)));
        assert_eq!(store.insert_calls(), 1);
    }
}
