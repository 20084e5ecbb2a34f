mod inmemory;

pub use inmemory::InMemoryRotationRepo;
use kit_scheduler_domain::{Rotation, ID};

#[async_trait::async_trait]
pub trait IRotationRepo: Send + Sync {
    async fn insert(&self, rotation: &Rotation) -> anyhow::Result<()>;
    /// Replaces the stored rotation, including its full `events` list,
    /// in one step. Persisting a merge result partially would break the
    /// dedup key set on the next sync.
    async fn save(&self, rotation: &Rotation) -> anyhow::Result<()>;
    async fn find(&self, rotation_id: &ID) -> Option<Rotation>;
    async fn find_by_user(&self, user_id: &ID) -> Vec<Rotation>;
    async fn find_all(&self) -> Vec<Rotation>;
    async fn delete(&self, rotation_id: &ID) -> Option<Rotation>;
}
