use crate::shared::entity::{Entity, ID};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EventStatus {
    NotDone,
    Tried,
    Done,
    Canceled,
}

impl EventStatus {
    /// `Done` and `Canceled` admit no further transitions.
    pub fn is_terminal(&self) -> bool {
        matches!(self, EventStatus::Done | EventStatus::Canceled)
    }
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum InvalidTransition {
    #[error("Event is already in the terminal status: {0:?}")]
    Terminal(EventStatus),
    #[error("Cannot reschedule event to: {timestamp}, which is before the rotation anchor: {anchor}")]
    BeforeAnchor { timestamp: i64, anchor: i64 },
}

/// One scheduled occurrence of a `Rotation`.
///
/// `timestamp_original` is the occurrence timestamp as it was first
/// computed and is the identity used for dedup during event sync. It
/// never changes; rescheduling only moves `timestamp`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RotationEvent {
    pub id: ID,
    pub rotation_id: ID,
    pub timestamp_original: i64,
    pub timestamp: i64,
    pub status: EventStatus,
    pub tries: Vec<i64>,
}

impl RotationEvent {
    pub fn new(rotation_id: ID, timestamp: i64) -> Self {
        Self {
            id: Default::default(),
            rotation_id,
            timestamp_original: timestamp,
            timestamp,
            status: EventStatus::NotDone,
            tries: Vec::new(),
        }
    }

    fn ensure_active(&self) -> Result<(), InvalidTransition> {
        if self.status.is_terminal() {
            return Err(InvalidTransition::Terminal(self.status));
        }
        Ok(())
    }

    /// Records an attempt at `now` and moves the event to `Tried`.
    pub fn record_try(&mut self, now: i64) -> Result<(), InvalidTransition> {
        self.ensure_active()?;
        self.tries.push(now);
        self.status = EventStatus::Tried;
        Ok(())
    }

    /// Moves the effective scheduled time. `timestamp_original` and the
    /// status are left untouched. `anchor` is the owning rotation's
    /// anchor; timestamps before it are rejected as a data-integrity
    /// guard.
    pub fn reschedule(&mut self, new_timestamp: i64, anchor: i64) -> Result<(), InvalidTransition> {
        self.ensure_active()?;
        if new_timestamp < anchor {
            return Err(InvalidTransition::BeforeAnchor {
                timestamp: new_timestamp,
                anchor,
            });
        }
        self.timestamp = new_timestamp;
        Ok(())
    }

    pub fn mark_done(&mut self) -> Result<(), InvalidTransition> {
        self.ensure_active()?;
        self.status = EventStatus::Done;
        Ok(())
    }

    pub fn mark_canceled(&mut self) -> Result<(), InvalidTransition> {
        self.ensure_active()?;
        self.status = EventStatus::Canceled;
        Ok(())
    }
}

impl Entity for RotationEvent {
    fn id(&self) -> &ID {
        &self.id
    }
}
