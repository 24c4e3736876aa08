use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::common::Identifiable;

/// A person residing in a managed room, the primary subject of billing and
/// occupancy tracking.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Boarder {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub contact: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub room: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caretaker_id: Option<Uuid>,
    pub moved_in: NaiveDate,
}

impl Boarder {
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        contact: impl Into<String>,
        email: impl Into<String>,
        moved_in: NaiveDate,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            first_name: first_name.into(),
            last_name: last_name.into(),
            contact: contact.into(),
            email: email.into(),
            room: None,
            caretaker_id: None,
            moved_in,
        }
    }

    /// Assigns the boarder to a room at construction time.
    pub fn with_room(mut self, number: impl Into<String>) -> Self {
        self.room = Some(number.into());
        self
    }

    /// Links the boarder to an administering caretaker.
    pub fn with_caretaker(mut self, caretaker_id: Uuid) -> Self {
        self.caretaker_id = Some(caretaker_id);
        self
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

impl Identifiable for Boarder {
    fn id(&self) -> Uuid {
        self.id
    }
}

/// Emergency contact attached to a boarder. Pure dependent record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Guardian {
    pub id: Uuid,
    pub boarder_id: Uuid,
    pub name: String,
    pub contact: String,
    pub relationship: String,
}

impl Guardian {
    pub fn new(
        boarder_id: Uuid,
        name: impl Into<String>,
        contact: impl Into<String>,
        relationship: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            boarder_id,
            name: name.into(),
            contact: contact.into(),
            relationship: relationship.into(),
        }
    }
}

impl Identifiable for Guardian {
    fn id(&self) -> Uuid {
        self.id
    }
}
