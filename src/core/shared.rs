use std::sync::{Arc, PoisonError, RwLock};

use crate::house::House;

use super::services::ServiceResult;

/// Thread-safe handle over a house aggregate. Writers are exclusive, readers
/// run in parallel. Service operations validate every precondition before
/// their first write, so a failed `mutate` leaves the aggregate untouched and
/// a poisoned lock can be recovered safely.
#[derive(Clone)]
pub struct SharedHouse {
    inner: Arc<RwLock<House>>,
}

impl SharedHouse {
    pub fn new(house: House) -> Self {
        Self {
            inner: Arc::new(RwLock::new(house)),
        }
    }

    /// Runs a read-only closure against the current aggregate state.
    pub fn read<T>(&self, f: impl FnOnce(&House) -> T) -> T {
        let guard = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        f(&guard)
    }

    /// Runs a mutating operation under the exclusive write lock. The
    /// check-then-write sequences inside the services (charge admission in
    /// particular) execute entirely within one exclusive section, so
    /// concurrent operations on the same boarder serialize here.
    pub fn mutate<T>(&self, f: impl FnOnce(&mut House) -> ServiceResult<T>) -> ServiceResult<T> {
        let mut guard = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        f(&mut guard)
    }

    /// Clones the aggregate, e.g. for persistence snapshots.
    pub fn snapshot(&self) -> House {
        self.read(|house| house.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::services::{BalanceService, ServiceError};
    use crate::domain::{Boarder, ChargeKind, PaymentKind, PaymentMethod};
    use chrono::NaiveDate;
    use uuid::Uuid;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn shared_with_boarder() -> (SharedHouse, Uuid) {
        let mut house = House::new("Shared");
        let id = house.add_boarder(Boarder::new(
            "Ivy",
            "Luna",
            "0917-555-1010",
            "ivy.luna@example.com",
            date(2024, 6, 1),
        ));
        (SharedHouse::new(house), id)
    }

    #[test]
    fn mutate_applies_and_read_observes() {
        let (shared, id) = shared_with_boarder();
        shared
            .mutate(|house| {
                BalanceService::record_payment(
                    house,
                    id,
                    1000.0,
                    PaymentMethod::Cash,
                    PaymentKind::Deposit,
                    date(2024, 6, 1),
                )
            })
            .unwrap();

        let balance = shared.read(|house| BalanceService::balance(house, id));
        assert_eq!(balance, 1000.0);
    }

    #[test]
    fn failed_mutation_leaves_state_untouched() {
        let (shared, id) = shared_with_boarder();
        let err = shared
            .mutate(|house| {
                BalanceService::record_charge(
                    house,
                    id,
                    "no funds",
                    ChargeKind::Other,
                    50.0,
                    date(2024, 6, 2),
                )
            })
            .expect_err("charge must fail");
        assert!(matches!(err, ServiceError::InsufficientBalance { .. }));
        assert!(shared.read(|house| house.charges.is_empty()));
    }
}
