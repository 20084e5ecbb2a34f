use crate::rotation::subscribers::SyncEventsOnRotationUpdated;
use crate::shared::usecase::{Subscriber, UseCase};
use kit_scheduler_domain::{Interval, IntervalUnit, InvalidDuration, Rotation, ID};
use kit_scheduler_infra::KitContext;

/// Updates a `Rotation`'s name, anchor or interval.
///
/// Already generated events are historical facts and are never altered
/// here; a subscriber re-syncs so that occurrences on the new lattice
/// get their own pending events.
#[derive(Debug)]
pub struct UpdateRotationUseCase {
    pub user_id: ID,
    pub rotation_id: ID,
    pub name: Option<String>,
    pub starting: Option<i64>,
    pub every: Option<(i64, IntervalUnit)>,
}

#[derive(Debug)]
pub enum UseCaseError {
    NotFound(ID),
    InvalidInterval(InvalidDuration),
    StorageError,
}

#[async_trait::async_trait]
impl UseCase for UpdateRotationUseCase {
    type Response = Rotation;

    type Error = UseCaseError;

    const NAME: &'static str = "UpdateRotation";

    async fn execute(&mut self, ctx: &KitContext) -> Result<Self::Response, Self::Error> {
        let mut rotation = match ctx.repos.rotations.find(&self.rotation_id).await {
            Some(rotation) if rotation.user_id == self.user_id => rotation,
            _ => return Err(UseCaseError::NotFound(self.rotation_id.clone())),
        };

        if let Some(name) = &self.name {
            rotation.name = name.clone();
        }
        if let Some(starting) = self.starting {
            rotation.starting = starting;
        }
        if let Some((magnitude, unit)) = self.every {
            rotation.every =
                Interval::new(magnitude, unit).map_err(UseCaseError::InvalidInterval)?;
        }

        ctx.repos
            .rotations
            .save(&rotation)
            .await
            .map(|_| rotation)
            .map_err(|_| UseCaseError::StorageError)
    }

    fn subscribers() -> Vec<Box<dyn Subscriber<Self>>> {
        vec![Box::new(SyncEventsOnRotationUpdated)]
    }
}
