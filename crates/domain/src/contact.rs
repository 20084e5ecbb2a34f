use crate::shared::entity::{Entity, ID};
use serde::{Deserialize, Serialize};

/// A contact imported from the device address book. Read-only to the
/// scheduler, which only references it by id; resolving the reference
/// may fail without affecting occurrence computation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    pub id: ID,
    pub user_id: ID,
    pub name: String,
    pub contact_methods: Vec<ContactMethod>,
}

impl Contact {
    pub fn new(user_id: ID, name: impl Into<String>) -> Self {
        Self {
            id: Default::default(),
            user_id,
            name: name.into(),
            contact_methods: Vec::new(),
        }
    }

    pub fn method(&self, contact_method_id: &ID) -> Option<&ContactMethod> {
        self.contact_methods
            .iter()
            .find(|m| m.id == *contact_method_id)
    }
}

impl Entity for Contact {
    fn id(&self) -> &ID {
        &self.id
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ContactMethodVariant {
    Phone,
    Email,
}

/// A way of reaching a `Contact`, e.g. the "mobile" phone number or a
/// "work" email address.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactMethod {
    pub id: ID,
    pub variant: ContactMethodVariant,
    pub label: String,
    pub value: String,
}
