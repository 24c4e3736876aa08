use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::{
    common::{find_by_id, find_by_id_mut},
    Boarder, Booking, Caretaker, Charge, DepositBalance, Employee, Guardian, Owner, Payment, Room,
};

pub const CURRENT_SCHEMA_VERSION: u8 = 1;

/// Aggregate holding every table of a managed boarding house.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct House {
    pub id: Uuid,
    pub name: String,
    #[serde(default)]
    pub rooms: Vec<Room>,
    #[serde(default)]
    pub boarders: Vec<Boarder>,
    #[serde(default)]
    pub guardians: Vec<Guardian>,
    #[serde(default)]
    pub deposits: Vec<DepositBalance>,
    #[serde(default)]
    pub payments: Vec<Payment>,
    #[serde(default)]
    pub charges: Vec<Charge>,
    #[serde(default)]
    pub bookings: Vec<Booking>,
    #[serde(default)]
    pub owners: Vec<Owner>,
    #[serde(default)]
    pub caretakers: Vec<Caretaker>,
    #[serde(default)]
    pub employees: Vec<Employee>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default = "House::schema_version_default")]
    pub schema_version: u8,
}

impl House {
    pub fn new(name: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            rooms: Vec::new(),
            boarders: Vec::new(),
            guardians: Vec::new(),
            deposits: Vec::new(),
            payments: Vec::new(),
            charges: Vec::new(),
            bookings: Vec::new(),
            owners: Vec::new(),
            caretakers: Vec::new(),
            employees: Vec::new(),
            created_at: now,
            updated_at: now,
            schema_version: CURRENT_SCHEMA_VERSION,
        }
    }

    pub fn add_room(&mut self, room: Room) -> String {
        let number = room.number.clone();
        self.rooms.push(room);
        self.touch();
        number
    }

    pub fn room(&self, number: &str) -> Option<&Room> {
        self.rooms.iter().find(|room| room.number == number)
    }

    pub fn room_mut(&mut self, number: &str) -> Option<&mut Room> {
        self.rooms.iter_mut().find(|room| room.number == number)
    }

    /// Returns the boarder currently assigned to `number`, if any.
    pub fn occupant(&self, number: &str) -> Option<&Boarder> {
        self.boarders
            .iter()
            .find(|boarder| boarder.room.as_deref() == Some(number))
    }

    pub fn add_boarder(&mut self, boarder: Boarder) -> Uuid {
        let id = boarder.id;
        self.boarders.push(boarder);
        self.touch();
        id
    }

    pub fn boarder(&self, id: Uuid) -> Option<&Boarder> {
        find_by_id(&self.boarders, id)
    }

    pub fn boarder_mut(&mut self, id: Uuid) -> Option<&mut Boarder> {
        find_by_id_mut(&mut self.boarders, id)
    }

    pub fn boarder_by_email(&self, email: &str) -> Option<&Boarder> {
        let normalized = email.trim().to_ascii_lowercase();
        self.boarders
            .iter()
            .find(|boarder| boarder.email.trim().to_ascii_lowercase() == normalized)
    }

    pub fn remove_boarder(&mut self, id: Uuid) -> Option<Boarder> {
        let index = self.boarders.iter().position(|boarder| boarder.id == id)?;
        let removed = self.boarders.remove(index);
        self.touch();
        Some(removed)
    }

    pub fn add_guardian(&mut self, guardian: Guardian) -> Uuid {
        let id = guardian.id;
        self.guardians.push(guardian);
        self.touch();
        id
    }

    pub fn guardians_for(&self, boarder_id: Uuid) -> Vec<&Guardian> {
        self.guardians
            .iter()
            .filter(|guardian| guardian.boarder_id == boarder_id)
            .collect()
    }

    pub fn deposit(&self, boarder_id: Uuid) -> Option<&DepositBalance> {
        self.deposits
            .iter()
            .find(|deposit| deposit.boarder_id == boarder_id)
    }

    pub fn deposit_mut(&mut self, boarder_id: Uuid) -> Option<&mut DepositBalance> {
        self.deposits
            .iter_mut()
            .find(|deposit| deposit.boarder_id == boarder_id)
    }

    pub fn payments_for(&self, boarder_id: Uuid) -> Vec<&Payment> {
        self.payments
            .iter()
            .filter(|payment| payment.boarder_id == boarder_id)
            .collect()
    }

    pub fn charges_for(&self, boarder_id: Uuid) -> Vec<&Charge> {
        self.charges
            .iter()
            .filter(|charge| charge.boarder_id == boarder_id)
            .collect()
    }

    pub fn add_booking(&mut self, booking: Booking) -> Uuid {
        let id = booking.id;
        self.bookings.push(booking);
        self.touch();
        id
    }

    pub fn add_owner(&mut self, owner: Owner) -> Uuid {
        let id = owner.id;
        self.owners.push(owner);
        self.touch();
        id
    }

    pub fn add_caretaker(&mut self, caretaker: Caretaker) -> Uuid {
        let id = caretaker.id;
        self.caretakers.push(caretaker);
        self.touch();
        id
    }

    pub fn caretaker(&self, id: Uuid) -> Option<&Caretaker> {
        find_by_id(&self.caretakers, id)
    }

    pub fn add_employee(&mut self, employee: Employee) -> Uuid {
        let id = employee.id;
        self.employees.push(employee);
        self.touch();
        id
    }

    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }

    pub fn schema_version_default() -> u8 {
        CURRENT_SCHEMA_VERSION
    }
}
