use super::IRotationRepo;
use crate::repos::shared::inmemory_repo::*;
use kit_scheduler_domain::{Rotation, ID};

pub struct InMemoryRotationRepo {
    rotations: std::sync::Mutex<Vec<Rotation>>,
}

impl InMemoryRotationRepo {
    pub fn new() -> Self {
        Self {
            rotations: std::sync::Mutex::new(vec![]),
        }
    }
}

#[async_trait::async_trait]
impl IRotationRepo for InMemoryRotationRepo {
    async fn insert(&self, rotation: &Rotation) -> anyhow::Result<()> {
        insert(rotation, &self.rotations);
        Ok(())
    }

    async fn save(&self, rotation: &Rotation) -> anyhow::Result<()> {
        save(rotation, &self.rotations);
        Ok(())
    }

    async fn find(&self, rotation_id: &ID) -> Option<Rotation> {
        find(rotation_id, &self.rotations)
    }

    async fn find_by_user(&self, user_id: &ID) -> Vec<Rotation> {
        find_by(&self.rotations, |r| r.user_id == *user_id)
    }

    async fn find_all(&self) -> Vec<Rotation> {
        find_all(&self.rotations)
    }

    async fn delete(&self, rotation_id: &ID) -> Option<Rotation> {
        delete(rotation_id, &self.rotations)
    }
}
