use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::{Event, Skater};

/// One entry of the skater dropdown
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct SkaterOption {
    pub skater_id: i32,
    pub first_name: String,
    pub last_name: String,
    /// "First Last", also the value submitted as `skater_name`
    pub display_name: String,
}

/// One entry of the event dropdown
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct EventOption {
    pub event_id: i32,
    pub event_name: String,
}

/// Everything the entry form needs to populate its dropdowns
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct FormOptions {
    pub skaters: Vec<SkaterOption>,
    pub events: Vec<EventOption>,
}

impl From<Skater> for SkaterOption {
    fn from(skater: Skater) -> Self {
        Self {
            display_name: skater.display_name(),
            skater_id: skater.skater_id,
            first_name: skater.first_name,
            last_name: skater.last_name,
        }
    }
}

impl From<Event> for EventOption {
    fn from(event: Event) -> Self {
        Self {
            event_id: event.event_id,
            event_name: event.event_name,
        }
    }
}
