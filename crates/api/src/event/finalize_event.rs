use crate::shared::usecase::UseCase;
use kit_scheduler_domain::{InvalidTransition, RotationEvent, ID};
use kit_scheduler_infra::KitContext;

/// Closes out an event, either because the contact was reached or
/// because the user gave up on this occurrence. Both outcomes are
/// terminal.
#[derive(Debug)]
pub struct FinalizeEventUseCase {
    pub user_id: ID,
    pub rotation_id: ID,
    pub event_id: ID,
    pub outcome: EventOutcome,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventOutcome {
    Done,
    Canceled,
}

#[derive(Debug)]
pub enum UseCaseError {
    NotFound(String, ID),
    InvalidTransition(InvalidTransition),
    StorageError,
}

#[async_trait::async_trait]
impl UseCase for FinalizeEventUseCase {
    type Response = RotationEvent;

    type Error = UseCaseError;

    const NAME: &'static str = "FinalizeEvent";

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

        let event = rotation
            .event_mut(&self.event_id)
            .ok_or_else(|| UseCaseError::NotFound("Event".into(), self.event_id.clone()))?;
        match self.outcome {
            EventOutcome::Done => event.mark_done(),
            EventOutcome::Canceled => event.mark_canceled(),
        }
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
