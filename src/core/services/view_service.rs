use uuid::Uuid;

use crate::domain::{Boarder, Charge, Payment, Room};
use crate::house::House;

use super::{BalanceService, ServiceError, ServiceResult};

/// Boarder joined with the room it currently occupies.
#[derive(Debug, Clone, PartialEq)]
pub struct RoomDirectoryEntry {
    pub boarder: Boarder,
    pub room: Option<Room>,
}

/// Per-boarder statement: the current balance with its supporting ledger rows.
#[derive(Debug, Clone, PartialEq)]
pub struct BalanceStatement {
    pub boarder: Boarder,
    pub balance: f64,
    pub payments: Vec<Payment>,
    pub charges: Vec<Charge>,
}

/// Pure read-side projections for display surfaces. No independent
/// invariants.
pub struct ViewService;

impl ViewService {
    /// Lists every boarder with the room it occupies, if any.
    pub fn room_directory(house: &House) -> Vec<RoomDirectoryEntry> {
        house
            .boarders
            .iter()
            .map(|boarder| RoomDirectoryEntry {
                boarder: boarder.clone(),
                room: boarder
                    .room
                    .as_deref()
                    .and_then(|number| house.room(number))
                    .cloned(),
            })
            .collect()
    }

    /// Builds the balance statement for one boarder.
    pub fn balance_statement(house: &House, boarder_id: Uuid) -> ServiceResult<BalanceStatement> {
        let boarder = house
            .boarder(boarder_id)
            .ok_or_else(|| ServiceError::NotFound(format!("boarder {}", boarder_id)))?
            .clone();
        Ok(BalanceStatement {
            boarder,
            balance: BalanceService::balance(house, boarder_id),
            payments: house
                .payments_for(boarder_id)
                .into_iter()
                .cloned()
                .collect(),
            charges: house.charges_for(boarder_id).into_iter().cloned().collect(),
        })
    }
}
