pub mod create_rotation;
pub mod delete_rotation;
pub mod subscribers;
pub mod sync_rotation_events;
pub mod update_rotation;
