use crate::shared::usecase::UseCase;
use itertools::Itertools;
use kit_scheduler_domain::{ContactMethod, ID};
use kit_scheduler_infra::KitContext;

/// The next actionable event of every rotation a user has, joined with
/// the contact it is about, sorted soonest first.
///
/// Events further out than the configured display window are filtered
/// here so that slow "lapping" rotations do not clutter the list; the
/// stored event set is not affected.
#[derive(Debug)]
pub struct GetUpcomingEventsUseCase {
    pub user_id: ID,
}

#[derive(Debug)]
pub enum UseCaseError {}

#[derive(Debug, Clone)]
pub struct UpcomingEvent {
    pub rotation_id: ID,
    pub event_id: ID,
    pub rotation_name: String,
    pub timestamp: i64,
    /// `None` when the contact reference cannot be resolved; an
    /// unresolved contact never fails the query.
    pub contact_name: Option<String>,
    pub contact_method: Option<ContactMethod>,
}

#[async_trait::async_trait]
impl UseCase for GetUpcomingEventsUseCase {
    type Response = Vec<UpcomingEvent>;

    type Error = UseCaseError;

    const NAME: &'static str = "GetUpcomingEvents";

    async fn execute(&mut self, ctx: &KitContext) -> Result<Self::Response, Self::Error> {
        let now = ctx.sys.get_timestamp_millis();
        let cutoff = now + ctx.config.upcoming_events_window;

        let rotations = ctx.repos.rotations.find_by_user(&self.user_id).await;
        let mut upcoming = Vec::with_capacity(rotations.len());
        for rotation in &rotations {
            let event = match rotation.upcoming_event() {
                Some(event) if event.timestamp <= cutoff => event,
                _ => continue,
            };
            let contact = ctx.repos.contacts.find(&rotation.contact_id).await;
            let contact_method = contact
                .as_ref()
                .and_then(|c| c.method(&rotation.contact_method_id))
                .cloned();
            upcoming.push(UpcomingEvent {
                rotation_id: rotation.id.clone(),
                event_id: event.id.clone(),
                rotation_name: rotation.name.clone(),
                timestamp: event.timestamp,
                contact_name: contact.map(|c| c.name),
                contact_method,
            });
        }

        Ok(upcoming
            .into_iter()
            .sorted_by_key(|e| e.timestamp)
            .collect())
    }
}
