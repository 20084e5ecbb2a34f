mod inmemory;

pub use inmemory::InMemoryContactRepo;
use kit_scheduler_domain::{Contact, ID};

#[async_trait::async_trait]
pub trait IContactRepo: Send + Sync {
    async fn insert(&self, contact: &Contact) -> anyhow::Result<()>;
    async fn save(&self, contact: &Contact) -> anyhow::Result<()>;
    async fn find(&self, contact_id: &ID) -> Option<Contact>;
    async fn find_by_user(&self, user_id: &ID) -> Vec<Contact>;
    async fn delete(&self, contact_id: &ID) -> Option<Contact>;
}
