use crate::shared::usecase::UseCase;
use kit_scheduler_domain::{InvalidTransition, RotationEvent, ID};
use kit_scheduler_infra::KitContext;

/// Records that the user attempted to reach the contact for an event,
/// timestamped with the current time.
#[derive(Debug)]
pub struct RecordEventTryUseCase {
    pub user_id: ID,
    pub rotation_id: ID,
    pub event_id: ID,
}

#[derive(Debug)]
pub enum UseCaseError {
    NotFound(String, ID),
    InvalidTransition(InvalidTransition),
    StorageError,
}

#[async_trait::async_trait]
impl UseCase for RecordEventTryUseCase {
    type Response = RotationEvent;

    type Error = UseCaseError;

    const NAME: &'static str = "RecordEventTry";

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

        let now = ctx.sys.get_timestamp_millis();
        let event = rotation
            .event_mut(&self.event_id)
            .ok_or_else(|| UseCaseError::NotFound("Event".into(), self.event_id.clone()))?;
        event
            .record_try(now)
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

#[cfg(test)]
mod test {
    use super::*;
    use crate::shared::test_utils::create_context_at;
    use kit_scheduler_domain::{EventStatus, Interval, IntervalUnit, Rotation};

    const DAY: i64 = 1000 * 60 * 60 * 24;

    #[tokio::test]
    async fn records_tries_at_the_current_time() {
        let ctx = create_context_at(8 * DAY);
        let mut rotation = Rotation::new(
            Default::default(),
            Default::default(),
            Default::default(),
            "Call Mom",
            0,
            Interval::new(7, IntervalUnit::Days).unwrap(),
        );
        rotation.merge_events(10 * DAY).unwrap();
        ctx.repos.rotations.insert(&rotation).await.unwrap();

        let mut usecase = RecordEventTryUseCase {
            user_id: rotation.user_id.clone(),
            rotation_id: rotation.id.clone(),
            event_id: rotation.events[0].id.clone(),
        };
        let event = usecase.execute(&ctx).await.expect("To record try");
        assert_eq!(event.status, EventStatus::Tried);
        assert_eq!(event.tries, vec![8 * DAY]);

        let stored = ctx.repos.rotations.find(&rotation.id).await.unwrap();
        assert_eq!(stored.events[0].tries, vec![8 * DAY]);
    }

    #[tokio::test]
    async fn rejects_tries_on_finished_events() {
        let ctx = create_context_at(8 * DAY);
        let mut rotation = Rotation::new(
            Default::default(),
            Default::default(),
            Default::default(),
            "Call Mom",
            0,
            Interval::new(7, IntervalUnit::Days).unwrap(),
        );
        rotation.merge_events(10 * DAY).unwrap();
        let event_id = rotation.events[0].id.clone();
        rotation.event_mut(&event_id).unwrap().mark_done().unwrap();
        ctx.repos.rotations.insert(&rotation).await.unwrap();

        let mut usecase = RecordEventTryUseCase {
            user_id: rotation.user_id.clone(),
            rotation_id: rotation.id.clone(),
            event_id,
        };
        match usecase.execute(&ctx).await {
            Err(UseCaseError::InvalidTransition(InvalidTransition::Terminal(status))) => {
                assert_eq!(status, EventStatus::Done)
            }
            res => panic!("Expected terminal transition error, got: {:?}", res),
        }
    }
}
