use crate::shared::usecase::UseCase;
use kit_scheduler_domain::{Rotation, ID};
use kit_scheduler_infra::KitContext;

/// Deletes a `Rotation` and, since the rotation owns them, all of its
/// generated events with it.
#[derive(Debug)]
pub struct DeleteRotationUseCase {
    pub user_id: ID,
    pub rotation_id: ID,
}

#[derive(Debug)]
pub enum UseCaseError {
    NotFound(ID),
    StorageError,
}

#[async_trait::async_trait]
impl UseCase for DeleteRotationUseCase {
    type Response = Rotation;

    type Error = UseCaseError;

    const NAME: &'static str = "DeleteRotation";

    async fn execute(&mut self, ctx: &KitContext) -> Result<Self::Response, Self::Error> {
        match ctx.repos.rotations.find(&self.rotation_id).await {
            Some(rotation) if rotation.user_id == self.user_id => ctx
                .repos
                .rotations
                .delete(&self.rotation_id)
                .await
                .ok_or(UseCaseError::StorageError),
            _ => Err(UseCaseError::NotFound(self.rotation_id.clone())),
        }
    }
}
