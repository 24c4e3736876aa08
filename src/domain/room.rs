use serde::{Deserialize, Serialize};

/// A rentable room managed by the house. Rooms are keyed by their number.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Room {
    pub number: String,
    pub floor: String,
    pub rent: f64,
    pub status: RoomStatus,
}

impl Room {
    pub fn new(number: impl Into<String>, floor: impl Into<String>, rent: f64) -> Self {
        Self {
            number: number.into(),
            floor: floor.into(),
            rent,
            status: RoomStatus::Available,
        }
    }
}

/// Occupancy state of a room. `Maintenance` suppresses automatic derivation
/// until cleared manually.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum RoomStatus {
    Available,
    Occupied,
    Maintenance,
}

impl RoomStatus {
    pub fn is_maintenance(self) -> bool {
        matches!(self, RoomStatus::Maintenance)
    }
}
