mod event;
mod job_schedulers;
mod rotation;
mod shared;

pub use event::finalize_event::{EventOutcome, FinalizeEventUseCase};
pub use event::get_upcoming_events::{GetUpcomingEventsUseCase, UpcomingEvent};
pub use event::record_event_try::RecordEventTryUseCase;
pub use event::reschedule_event::RescheduleEventUseCase;
pub use job_schedulers::start_sync_events_job;
pub use rotation::create_rotation::CreateRotationUseCase;
pub use rotation::delete_rotation::DeleteRotationUseCase;
pub use rotation::sync_rotation_events::{SyncEventsTrigger, SyncRotationEventsUseCase};
pub use rotation::update_rotation::UpdateRotationUseCase;
pub use shared::usecase::{execute, Subscriber, UseCase};
