pub mod finalize_event;
pub mod get_upcoming_events;
pub mod record_event_try;
pub mod reschedule_event;
