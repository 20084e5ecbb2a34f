mod contact;
mod event;
mod interval;
mod rotation;
mod shared;

pub use contact::{Contact, ContactMethod, ContactMethodVariant};
pub use event::{EventStatus, InvalidTransition, RotationEvent};
pub use interval::{Interval, IntervalUnit, InvalidDuration};
pub use rotation::Rotation;
pub use shared::entity::{Entity, ID};
