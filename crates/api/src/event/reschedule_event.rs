use crate::shared::usecase::UseCase;
use kit_scheduler_domain::{InvalidTransition, RotationEvent, ID};
use kit_scheduler_infra::KitContext;

/// Moves an event's effective scheduled time, e.g. "remind me Saturday
/// instead". The occurrence identity (`timestamp_original`) stays put so
/// later syncs do not regenerate the occurrence.
#[derive(Debug)]
pub struct RescheduleEventUseCase {
    pub user_id: ID,
    pub rotation_id: ID,
    pub event_id: ID,
    pub new_timestamp: i64,
}

#[derive(Debug)]
pub enum UseCaseError {
    NotFound(String, ID),
    InvalidTransition(InvalidTransition),
    StorageError,
}

#[async_trait::async_trait]
impl UseCase for RescheduleEventUseCase {
    type Response = RotationEvent;

    type Error = UseCaseError;

    const NAME: &'static str = "RescheduleEvent";

    async fn execute(&mut self, ctx: &KitContext) -> Result<Self::Response, Self::Error> {
        let mut rotation = match ctx.repos.rotations.find(&self.rotation_id).await {
            Some(rotation) if rotation.user_id == self.user_id => rotation,
            _ => {
                return Err(UseCaseError::NotFound(
                    "Rotation".into(),
                    self.rotation_id.clone(),
                ))
            }
        };

        let anchor = rotation.starting;
        let event = rotation
            .event_mut(&self.event_id)
            .ok_or_else(|| UseCaseError::NotFound("Event".into(), self.event_id.clone()))?;
        event
            .reschedule(self.new_timestamp, anchor)
            .map_err(UseCaseError::InvalidTransition)?;
        let event = event.clone();

        ctx.repos
            .rotations
            .save(&rotation)
            .await
            .map(|_| event)
            .map_err(|_| UseCaseError::StorageError)
    }
}
