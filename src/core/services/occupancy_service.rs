//! Room status derivation from boarder assignments.

use crate::domain::{Room, RoomStatus};
use crate::house::House;

use super::{ServiceError, ServiceResult};

/// Maintains room status in lockstep with boarder-to-room assignment changes.
/// The derivation is one-way (boarder to room); `Maintenance` is a sticky
/// administrative override that automatic updates never overwrite.
pub struct OccupancyService;

impl OccupancyService {
    /// Marks `number` as occupied after a boarder takes it.
    pub fn claim(house: &mut House, number: &str) -> ServiceResult<()> {
        let room = Self::room_mut(house, number)?;
        room.status = RoomStatus::Occupied;
        house.touch();
        Ok(())
    }

    /// Releases `number` after its boarder leaves. Rooms under maintenance
    /// keep their status.
    pub fn release(house: &mut House, number: &str) -> ServiceResult<()> {
        let room = Self::room_mut(house, number)?;
        if !room.status.is_maintenance() {
            room.status = RoomStatus::Available;
        }
        house.touch();
        Ok(())
    }

    /// Applies a room move: claims the new assignment and releases the
    /// vacated one.
    pub fn sync_move(
        house: &mut House,
        old: Option<&str>,
        new: Option<&str>,
    ) -> ServiceResult<()> {
        if let Some(number) = new {
            Self::claim(house, number)?;
        }
        if let Some(number) = old {
            if new != Some(number) {
                Self::release(house, number)?;
            }
        }
        Ok(())
    }

    /// Flags a room for maintenance, suppressing occupancy derivation until
    /// cleared.
    pub fn set_maintenance(house: &mut House, number: &str) -> ServiceResult<()> {
        let room = Self::room_mut(house, number)?;
        room.status = RoomStatus::Maintenance;
        house.touch();
        Ok(())
    }

    /// Clears maintenance and re-derives the status from the current boarder
    /// assignments.
    pub fn clear_maintenance(house: &mut House, number: &str) -> ServiceResult<()> {
        let occupied = house.occupant(number).is_some();
        let room = Self::room_mut(house, number)?;
        room.status = if occupied {
            RoomStatus::Occupied
        } else {
            RoomStatus::Available
        };
        house.touch();
        Ok(())
    }

    fn room_mut<'a>(house: &'a mut House, number: &str) -> ServiceResult<&'a mut Room> {
        house
            .room_mut(number)
            .ok_or_else(|| ServiceError::NotFound(format!("room {}", number)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Boarder;
    use chrono::NaiveDate;

    fn house_with_rooms() -> House {
        let mut house = House::new("Occupancy");
        house.add_room(Room::new("R1", "1F", 4500.0));
        house.add_room(Room::new("R2", "2F", 5000.0));
        house
    }

    fn status(house: &House, number: &str) -> RoomStatus {
        house.room(number).unwrap().status
    }

    #[test]
    fn claim_marks_room_occupied() {
        let mut house = house_with_rooms();
        OccupancyService::claim(&mut house, "R1").unwrap();
        assert_eq!(status(&house, "R1"), RoomStatus::Occupied);
    }

    #[test]
    fn release_returns_room_to_available() {
        let mut house = house_with_rooms();
        OccupancyService::claim(&mut house, "R1").unwrap();
        OccupancyService::release(&mut house, "R1").unwrap();
        assert_eq!(status(&house, "R1"), RoomStatus::Available);
    }

    #[test]
    fn release_never_overwrites_maintenance() {
        let mut house = house_with_rooms();
        OccupancyService::set_maintenance(&mut house, "R1").unwrap();
        OccupancyService::release(&mut house, "R1").unwrap();
        assert_eq!(status(&house, "R1"), RoomStatus::Maintenance);
    }

    #[test]
    fn sync_move_claims_new_and_releases_old() {
        let mut house = house_with_rooms();
        OccupancyService::claim(&mut house, "R1").unwrap();
        OccupancyService::sync_move(&mut house, Some("R1"), Some("R2")).unwrap();
        assert_eq!(status(&house, "R1"), RoomStatus::Available);
        assert_eq!(status(&house, "R2"), RoomStatus::Occupied);
    }

    #[test]
    fn sync_move_to_same_room_keeps_it_occupied() {
        let mut house = house_with_rooms();
        OccupancyService::claim(&mut house, "R1").unwrap();
        OccupancyService::sync_move(&mut house, Some("R1"), Some("R1")).unwrap();
        assert_eq!(status(&house, "R1"), RoomStatus::Occupied);
    }

    #[test]
    fn clear_maintenance_rederives_from_assignments() {
        let mut house = house_with_rooms();
        let boarder = Boarder::new(
            "Cara",
            "Dizon",
            "0917-555-0303",
            "cara.dizon@example.com",
            NaiveDate::from_ymd_opt(2024, 4, 1).unwrap(),
        )
        .with_room("R1");
        house.add_boarder(boarder);
        OccupancyService::set_maintenance(&mut house, "R1").unwrap();
        OccupancyService::set_maintenance(&mut house, "R2").unwrap();

        OccupancyService::clear_maintenance(&mut house, "R1").unwrap();
        OccupancyService::clear_maintenance(&mut house, "R2").unwrap();

        assert_eq!(status(&house, "R1"), RoomStatus::Occupied);
        assert_eq!(status(&house, "R2"), RoomStatus::Available);
    }

    #[test]
    fn unknown_room_is_not_found() {
        let mut house = house_with_rooms();
        let err = OccupancyService::claim(&mut house, "R9").expect_err("missing room");
        assert!(matches!(err, ServiceError::NotFound(_)));
    }
}
