use crate::rotation::sync_rotation_events::{SyncEventsTrigger, SyncRotationEventsUseCase};
use crate::shared::usecase::execute;
use kit_scheduler_infra::KitContext;
use std::time::Duration;
use tokio::time::interval;

/// How often every stored rotation is reconciled against its occurrence
/// lattice, so that the pending horizon keeps moving with the clock.
const SYNC_EVENTS_INTERVAL: Duration = Duration::from_secs(30 * 60);

/// Starts the periodic event sync job. The job runs on a single task,
/// so merges are never in flight for the same rotation twice.
pub fn start_sync_events_job(ctx: KitContext) {
    tokio::spawn(async move {
        let mut sync_interval = interval(SYNC_EVENTS_INTERVAL);
        loop {
            sync_interval.tick().await;

            let usecase = SyncRotationEventsUseCase {
                trigger: SyncEventsTrigger::JobScheduler,
                horizon: None,
            };
            let _ = execute(usecase, &ctx).await;
        }
    });
}
