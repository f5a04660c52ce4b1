use tracing::error;

use crate::dto::reference::{EventOption, FormOptions, SkaterOption};
use crate::error::Result;
use crate::store::ResultStore;

/// List all skaters as dropdown options
pub async fn list_skater_options<S: ResultStore + ?Sized>(store: &S) -> Result<Vec<SkaterOption>> {
    let skaters = store.list_skaters().await?;
    Ok(skaters.into_iter().map(SkaterOption::from).collect())
}

/// List the events of a competition as dropdown options
pub async fn list_event_options<S: ResultStore + ?Sized>(
    store: &S,
    competition_id: i32,
) -> Result<Vec<EventOption>> {
    let events = store.list_events(competition_id).await?;
    Ok(events.into_iter().map(EventOption::from).collect())
}

/// Loads both option lists for the entry form.
///
/// A failing list is logged and left empty so the form stays usable; free-text
/// event names still work without the event list.
pub async fn load_form_options<S: ResultStore + ?Sized>(
    store: &S,
    competition_id: i32,
) -> FormOptions {
    let skaters = list_skater_options(store).await.unwrap_or_else(|e| {
        error!("Error fetching skaters: {}", e);
        Vec::new()
    });

    let events = list_event_options(store, competition_id)
        .await
        .unwrap_or_else(|e| {
            error!("Error fetching events: {}", e);
            Vec::new()
        });

    FormOptions { skaters, events }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemoryStore;
    use crate::models::NewEvent;
    use crate::testing::{FailingStore, Operation};

    #[tokio::test]
    async fn test_skater_options_show_display_name() {
        let store = MemoryStore::new();
        store.add_skater("Zoe", "Adams");
        store.add_skater("Alice", "Smith");

        let options = list_skater_options(&store).await.unwrap();

        let names: Vec<&str> = options.iter().map(|o| o.display_name.as_str()).collect();
        assert_eq!(names, ["Zoe Adams", "Alice Smith"]);
    }

    #[tokio::test]
    async fn test_form_options_only_list_configured_competition() {
        let store = MemoryStore::new();
        store.add_event(NewEvent::regular("Relay", 1)).unwrap();
        store.add_event(NewEvent::regular("1000m", 1)).unwrap();
        store.add_event(NewEvent::regular("Marathon", 2)).unwrap();

        let options = load_form_options(&store, 1).await;

        let names: Vec<&str> = options.events.iter().map(|o| o.event_name.as_str()).collect();
        assert_eq!(names, ["1000m", "Relay"]);
        assert!(options.skaters.is_empty());
    }

    #[tokio::test]
    async fn test_failing_skater_list_leaves_events_loaded() {
        let inner = MemoryStore::new();
        inner.add_skater("Alice", "Smith");
        inner.add_event(NewEvent::regular("Relay", 1)).unwrap();
        let store = FailingStore::new(inner, &[Operation::ListSkaters]);

        let options = load_form_options(&store, 1).await;

        assert!(options.skaters.is_empty());
        assert_eq!(options.events.len(), 1);
        assert_eq!(options.events[0].event_name, "Relay");
    }

    #[tokio::test]
    async fn test_failing_event_list_leaves_skaters_loaded() {
        let inner = MemoryStore::new();
        inner.add_skater("Alice", "Smith");
        inner.add_event(NewEvent::regular("Relay", 1)).unwrap();
        let store = FailingStore::new(inner, &[Operation::ListEvents]);

        let options = load_form_options(&store, 1).await;

        assert!(options.events.is_empty());
        assert_eq!(options.skaters.len(), 1);
        assert_eq!(options.skaters[0].display_name, "Alice Smith");
    }
}
