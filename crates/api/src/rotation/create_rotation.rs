use crate::rotation::subscribers::SyncEventsOnRotationCreated;
use crate::shared::usecase::{Subscriber, UseCase};
use kit_scheduler_domain::{Interval, IntervalUnit, InvalidDuration, Rotation, ID};
use kit_scheduler_infra::KitContext;

/// Creates a new `Rotation` for a user. The pending events for the
/// upcoming horizon are generated right after by a subscriber.
#[derive(Debug)]
pub struct CreateRotationUseCase {
    pub user_id: ID,
    pub contact_id: ID,
    pub contact_method_id: ID,
    pub name: String,
    pub starting: i64,
    pub every_magnitude: i64,
    pub every_unit: IntervalUnit,
}

#[derive(Debug)]
pub enum UseCaseError {
    InvalidInterval(InvalidDuration),
    StorageError,
}

#[async_trait::async_trait]
impl UseCase for CreateRotationUseCase {
    type Response = Rotation;

    type Error = UseCaseError;

    const NAME: &'static str = "CreateRotation";

    async fn execute(&mut self, ctx: &KitContext) -> Result<Self::Response, Self::Error> {
        let every = Interval::new(self.every_magnitude, self.every_unit)
            .map_err(UseCaseError::InvalidInterval)?;

        let rotation = Rotation::new(
            self.user_id.clone(),
            self.contact_id.clone(),
            self.contact_method_id.clone(),
            self.name.clone(),
            self.starting,
            every,
        );

        ctx.repos
            .rotations
            .insert(&rotation)
            .await
            .map(|_| rotation)
            .map_err(|_| UseCaseError::StorageError)
    }

    fn subscribers() -> Vec<Box<dyn Subscriber<Self>>> {
        vec![Box::new(SyncEventsOnRotationCreated)]
    }
}
