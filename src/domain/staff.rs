use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::common::Identifiable;

/// Proprietor of the boarding house.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Owner {
    pub id: Uuid,
    pub name: String,
    pub contact: String,
}

impl Owner {
    pub fn new(name: impl Into<String>, contact: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            contact: contact.into(),
        }
    }
}

impl Identifiable for Owner {
    fn id(&self) -> Uuid {
        self.id
    }
}

/// Staff member administering bookings and boarders on behalf of an owner.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Caretaker {
    pub id: Uuid,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner_id: Option<Uuid>,
    pub name: String,
    pub contact: String,
}

impl Caretaker {
    pub fn new(name: impl Into<String>, contact: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            owner_id: None,
            name: name.into(),
            contact: contact.into(),
        }
    }

    pub fn with_owner(mut self, owner_id: Uuid) -> Self {
        self.owner_id = Some(owner_id);
        self
    }
}

impl Identifiable for Caretaker {
    fn id(&self) -> Uuid {
        self.id
    }
}

/// Hired help reporting to a caretaker.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Employee {
    pub id: Uuid,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caretaker_id: Option<Uuid>,
    pub name: String,
    pub role: String,
    pub contact: String,
}

impl Employee {
    pub fn new(
        name: impl Into<String>,
        role: impl Into<String>,
        contact: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            caretaker_id: None,
            name: name.into(),
            role: role.into(),
            contact: contact.into(),
        }
    }

    pub fn with_caretaker(mut self, caretaker_id: Uuid) -> Self {
        self.caretaker_id = Some(caretaker_id);
        self
    }
}

impl Identifiable for Employee {
    fn id(&self) -> Uuid {
        self.id
    }
}
