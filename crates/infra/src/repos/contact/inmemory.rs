use super::IContactRepo;
use crate::repos::shared::inmemory_repo::*;
use kit_scheduler_domain::{Contact, ID};

pub struct InMemoryContactRepo {
    contacts: std::sync::Mutex<Vec<Contact>>,
}

impl InMemoryContactRepo {
    pub fn new() -> Self {
        Self {
            contacts: std::sync::Mutex::new(vec![]),
        }
    }
}

#[async_trait::async_trait]
impl IContactRepo for InMemoryContactRepo {
    async fn insert(&self, contact: &Contact) -> anyhow::Result<()> {
        insert(contact, &self.contacts);
        Ok(())
    }

    async fn save(&self, contact: &Contact) -> anyhow::Result<()> {
        save(contact, &self.contacts);
        Ok(())
    }

    async fn find(&self, contact_id: &ID) -> Option<Contact> {
        find(contact_id, &self.contacts)
    }

    async fn find_by_user(&self, user_id: &ID) -> Vec<Contact> {
        find_by(&self.contacts, |c| c.user_id == *user_id)
    }

    async fn delete(&self, contact_id: &ID) -> Option<Contact> {
        delete(contact_id, &self.contacts)
    }
}
