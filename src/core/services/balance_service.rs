//! Deposit ledger bookkeeping for payments and charges.

use chrono::NaiveDate;
use uuid::Uuid;

use crate::domain::{Charge, ChargeKind, DepositBalance, Payment, PaymentKind, PaymentMethod};
use crate::house::House;

use super::{ServiceError, ServiceResult};

/// Keeps each boarder's deposit balance consistent with payment and charge
/// events. Charges that would overdraw the balance are rejected outright.
pub struct BalanceService;

impl BalanceService {
    /// Records a payment and credits the boarder's deposit balance, creating
    /// the balance row on first payment. Returns the payment identifier.
    pub fn record_payment(
        house: &mut House,
        boarder_id: Uuid,
        amount: f64,
        method: PaymentMethod,
        kind: PaymentKind,
        date: NaiveDate,
    ) -> ServiceResult<Uuid> {
        Self::validate_amount(amount)?;
        Self::ensure_boarder_exists(house, boarder_id)?;

        let payment = Payment::new(boarder_id, amount, method, kind, date);
        let id = payment.id;
        house.payments.push(payment);
        match house.deposit_mut(boarder_id) {
            Some(deposit) => deposit.balance += amount,
            None => house
                .deposits
                .push(DepositBalance::opened_with(boarder_id, amount)),
        }
        house.touch();
        tracing::debug!(%boarder_id, amount, "payment recorded");
        Ok(id)
    }

    /// Records a charge and debits the boarder's deposit balance. Fails with
    /// `InsufficientBalance` before any write when funds do not cover it; the
    /// charge row itself is rejected, not merely the balance update.
    pub fn record_charge(
        house: &mut House,
        boarder_id: Uuid,
        description: impl Into<String>,
        kind: ChargeKind,
        amount: f64,
        date: NaiveDate,
    ) -> ServiceResult<Uuid> {
        Self::validate_amount(amount)?;
        Self::ensure_boarder_exists(house, boarder_id)?;

        match house.deposit_mut(boarder_id) {
            Some(deposit) if deposit.balance >= amount => deposit.balance -= amount,
            Some(deposit) => {
                return Err(ServiceError::InsufficientBalance {
                    available: deposit.balance,
                    requested: amount,
                })
            }
            None => {
                return Err(ServiceError::InsufficientBalance {
                    available: 0.0,
                    requested: amount,
                })
            }
        }

        let charge = Charge::new(boarder_id, description, kind, amount, date);
        let id = charge.id;
        house.charges.push(charge);
        house.touch();
        tracing::debug!(%boarder_id, amount, "charge recorded");
        Ok(id)
    }

    /// Returns the boarder's current balance, `0.00` when no ledger row
    /// exists yet.
    pub fn balance(house: &House, boarder_id: Uuid) -> f64 {
        house
            .deposit(boarder_id)
            .map(|deposit| deposit.balance)
            .unwrap_or(0.0)
    }

    fn validate_amount(amount: f64) -> ServiceResult<()> {
        if amount > 0.0 {
            Ok(())
        } else {
            Err(ServiceError::InvalidAmount(amount))
        }
    }

    fn ensure_boarder_exists(house: &House, boarder_id: Uuid) -> ServiceResult<()> {
        if house.boarder(boarder_id).is_some() {
            Ok(())
        } else {
            Err(ServiceError::NotFound(format!("boarder {}", boarder_id)))
        }
    }
}
