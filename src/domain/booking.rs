use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::common::Identifiable;

/// A reservation for a room. Bookings reference rooms and staff only; they
/// carry no boarder id and are matched to boarders by guest name and contact.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Booking {
    pub id: Uuid,
    pub room: String,
    pub guest_name: String,
    pub contact: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caretaker_id: Option<Uuid>,
    pub status: BookingStatus,
    pub booked_for: NaiveDate,
}

impl Booking {
    pub fn new(
        room: impl Into<String>,
        guest_name: impl Into<String>,
        contact: impl Into<String>,
        booked_for: NaiveDate,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            room: room.into(),
            guest_name: guest_name.into(),
            contact: contact.into(),
            caretaker_id: None,
            status: BookingStatus::Pending,
            booked_for,
        }
    }

    pub fn with_caretaker(mut self, caretaker_id: Uuid) -> Self {
        self.caretaker_id = Some(caretaker_id);
        self
    }
}

impl Identifiable for Booking {
    fn id(&self) -> Uuid {
        self.id
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum BookingStatus {
    Pending,
    Confirmed,
    Cancelled,
}
