use crate::shared::usecase::UseCase;
use kit_scheduler_domain::{InvalidDuration, Rotation, RotationEvent, ID};
use kit_scheduler_infra::KitContext;
use tracing::error;

/// Reconciles a `Rotation`'s stored events against its occurrence
/// lattice, creating a pending event for every occurrence up to the
/// horizon that does not exist yet.
///
/// The triggers that invoke this (rotation created/updated signals and
/// the periodic job) are unreliable and may fire more than once for the
/// same change, so the whole use case is safe to re-run.
#[derive(Debug)]
pub struct SyncRotationEventsUseCase {
    pub trigger: SyncEventsTrigger,
    /// Merge occurrences up to this timestamp. Defaults to now plus the
    /// configured sync horizon.
    pub horizon: Option<i64>,
}

#[derive(Debug)]
pub enum SyncEventsTrigger {
    /// A `Rotation` has been created or updated.
    RotationModified(ID),
    /// Periodic job that reconciles every stored rotation.
    JobScheduler,
}

#[derive(Debug)]
pub enum UseCaseError {
    RotationNotFound(ID),
    InvalidInterval(InvalidDuration),
    StorageError,
}

#[async_trait::async_trait]
impl UseCase for SyncRotationEventsUseCase {
    type Response = Vec<RotationEvent>;

    type Error = UseCaseError;

    const NAME: &'static str = "SyncRotationEvents";

    async fn execute(&mut self, ctx: &KitContext) -> Result<Self::Response, Self::Error> {
        let horizon = match self.horizon {
            Some(horizon) => horizon,
            None => ctx.sys.get_timestamp_millis() + ctx.config.event_sync_horizon,
        };

        match &self.trigger {
            SyncEventsTrigger::RotationModified(rotation_id) => {
                let mut rotation = ctx
                    .repos
                    .rotations
                    .find(rotation_id)
                    .await
                    .ok_or_else(|| UseCaseError::RotationNotFound(rotation_id.clone()))?;
                sync_rotation_events(&mut rotation, horizon, ctx).await
            }
            SyncEventsTrigger::JobScheduler => {
                let rotations = ctx.repos.rotations.find_all().await;
                let mut created = Vec::new();
                for mut rotation in rotations {
                    // One broken rotation must not block the others
                    match sync_rotation_events(&mut rotation, horizon, ctx).await {
                        Ok(mut events) => created.append(&mut events),
                        Err(e) => {
                            error!(
                                "Unable to sync events for rotation: {}. Err: {:?}",
                                rotation.id, e
                            );
                        }
                    }
                }
                Ok(created)
            }
        }
    }
}

async fn sync_rotation_events(
    rotation: &mut Rotation,
    horizon: i64,
    ctx: &KitContext,
) -> Result<Vec<RotationEvent>, UseCaseError> {
    let created = rotation
        .merge_events(horizon)
        .map_err(UseCaseError::InvalidInterval)?;
    if created.is_empty() {
        return Ok(created);
    }
    ctx.repos
        .rotations
        .save(rotation)
        .await
        .map(|_| created)
        .map_err(|_| UseCaseError::StorageError)
}
