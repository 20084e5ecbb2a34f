use super::create_rotation::CreateRotationUseCase;
use super::sync_rotation_events::{SyncEventsTrigger, SyncRotationEventsUseCase};
use super::update_rotation::UpdateRotationUseCase;
use crate::shared::usecase::{execute, Subscriber};
use kit_scheduler_domain::Rotation;

pub struct SyncEventsOnRotationCreated;

#[async_trait::async_trait]
impl Subscriber<CreateRotationUseCase> for SyncEventsOnRotationCreated {
    async fn notify(&self, rotation: &Rotation, ctx: &kit_scheduler_infra::KitContext) {
        let sync_events = SyncRotationEventsUseCase {
            trigger: SyncEventsTrigger::RotationModified(rotation.id.clone()),
            horizon: None,
        };

        // Sideeffect, ignore result
        let _ = execute(sync_events, ctx).await;
    }
}

pub struct SyncEventsOnRotationUpdated;

#[async_trait::async_trait]
impl Subscriber<UpdateRotationUseCase> for SyncEventsOnRotationUpdated {
    async fn notify(&self, rotation: &Rotation, ctx: &kit_scheduler_infra::KitContext) {
        let sync_events = SyncRotationEventsUseCase {
            trigger: SyncEventsTrigger::RotationModified(rotation.id.clone()),
            horizon: None,
        };

        // Sideeffect, ignore result
        let _ = execute(sync_events, ctx).await;
    }
}
