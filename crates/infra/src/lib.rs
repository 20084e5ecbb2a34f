mod config;
mod repos;
mod system;

pub use config::Config;
pub use repos::{IContactRepo, IRotationRepo, Repos};
use std::sync::Arc;
pub use system::{ISys, RealSys};

#[derive(Clone)]
pub struct KitContext {
    pub repos: Repos,
    pub config: Config,
    pub sys: Arc<dyn ISys>,
}

impl KitContext {
    pub fn create_inmemory() -> Self {
        Self {
            repos: Repos::create_inmemory(),
            config: Config::new(),
            sys: Arc::new(RealSys {}),
        }
    }
}

/// Will setup the infrastructure context given the environment.
///
/// Durable storage and remote sync live behind external collaborators,
/// so the context is backed by the in-memory repositories.
pub fn setup_context() -> KitContext {
    KitContext::create_inmemory()
}
