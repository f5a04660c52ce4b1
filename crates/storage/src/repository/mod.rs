pub mod competition;
pub mod event;
pub mod event_result;
pub mod point_value;
pub mod skater;
