//! Boarder lifecycle: registration, room moves, and the ordered cascading
//! delete.

use uuid::Uuid;

use crate::domain::Boarder;
use crate::house::House;

use super::{OccupancyService, ServiceError, ServiceResult};

/// Orchestrates boarder lifecycle events and keeps room occupancy and the
/// dependent tables consistent across them.
pub struct BoarderService;

impl BoarderService {
    /// Registers a new boarder, claiming the assigned room when present.
    pub fn register(house: &mut House, boarder: Boarder) -> ServiceResult<Uuid> {
        Self::validate_email(house, &boarder.email)?;
        if let Some(number) = boarder.room.as_deref() {
            if house.room(number).is_none() {
                return Err(ServiceError::NotFound(format!("room {}", number)));
            }
        }
        if let Some(caretaker_id) = boarder.caretaker_id {
            if house.caretaker(caretaker_id).is_none() {
                return Err(ServiceError::NotFound(format!("caretaker {}", caretaker_id)));
            }
        }

        let room = boarder.room.clone();
        let id = house.add_boarder(boarder);
        if let Some(number) = room {
            OccupancyService::claim(house, &number)?;
        }
        tracing::debug!(%id, "boarder registered");
        Ok(id)
    }

    /// Moves a boarder to `room` (or out, when `None`), keeping room status in
    /// lockstep with the assignment.
    pub fn assign_room(
        house: &mut House,
        boarder_id: Uuid,
        room: Option<String>,
    ) -> ServiceResult<()> {
        if let Some(number) = room.as_deref() {
            if house.room(number).is_none() {
                return Err(ServiceError::NotFound(format!("room {}", number)));
            }
        }
        let previous = {
            let boarder = house
                .boarder_mut(boarder_id)
                .ok_or_else(|| ServiceError::NotFound(format!("boarder {}", boarder_id)))?;
            std::mem::replace(&mut boarder.room, room.clone())
        };
        OccupancyService::sync_move(house, previous.as_deref(), room.as_deref())?;
        house.touch();
        Ok(())
    }

    /// Deletes a boarder and every record that exists only because the
    /// boarder does, then releases the vacated room. Removal order mirrors
    /// the dependency chain: guardians, payments, charges, the deposit
    /// balance, matching bookings, the boarder row itself.
    pub fn delete(house: &mut House, boarder_id: Uuid) -> ServiceResult<()> {
        let (full_name, contact, room) = {
            let boarder = house
                .boarder(boarder_id)
                .ok_or_else(|| ServiceError::NotFound(format!("boarder {}", boarder_id)))?;
            (
                boarder.full_name(),
                boarder.contact.clone(),
                boarder.room.clone(),
            )
        };
        let vacated = room.filter(|number| house.room(number).is_some());

        house
            .guardians
            .retain(|guardian| guardian.boarder_id != boarder_id);
        house
            .payments
            .retain(|payment| payment.boarder_id != boarder_id);
        house.charges.retain(|charge| charge.boarder_id != boarder_id);
        house
            .deposits
            .retain(|deposit| deposit.boarder_id != boarder_id);
        // Bookings carry no boarder id; the schema matches them by guest name
        // and contact.
        house
            .bookings
            .retain(|booking| booking.guest_name != full_name || booking.contact != contact);
        house.remove_boarder(boarder_id);
        if let Some(number) = vacated {
            OccupancyService::release(house, &number)?;
        }
        house.touch();
        tracing::debug!(%boarder_id, "boarder deleted with dependents");
        Ok(())
    }

    fn validate_email(house: &House, candidate: &str) -> ServiceResult<()> {
        if house.boarder_by_email(candidate).is_some() {
            Err(ServiceError::Invalid(format!(
                "boarder email `{}` already registered",
                candidate
            )))
        } else {
            Ok(())
        }
    }
}
