pub mod competition;
pub mod event;
pub mod event_result;
pub mod point_value;
pub mod skater;
pub mod skater_name;

pub use competition::Competition;
pub use event::{Event, NewEvent};
pub use event_result::{EventResult, NewEventResult};
pub use point_value::PointValue;
pub use skater::Skater;
pub use skater_name::SkaterName;
