mod contact;
mod rotation;
mod shared;

pub use contact::IContactRepo;
use contact::InMemoryContactRepo;
pub use rotation::IRotationRepo;
use rotation::InMemoryRotationRepo;
use std::sync::Arc;

#[derive(Clone)]
pub struct Repos {
    pub rotations: Arc<dyn IRotationRepo>,
    pub contacts: Arc<dyn IContactRepo>,
}

impl Repos {
    pub fn create_inmemory() -> Self {
        Self {
            rotations: Arc::new(InMemoryRotationRepo::new()),
            contacts: Arc::new(InMemoryContactRepo::new()),
        }
    }
}
