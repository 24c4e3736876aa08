use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::common::Identifiable;

/// Running deposit balance for a single boarder. One row per boarder; created
/// lazily on first payment and removed with the owning boarder.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DepositBalance {
    pub boarder_id: Uuid,
    pub balance: f64,
}

impl DepositBalance {
    /// Opens the ledger row with an initial credit.
    pub fn opened_with(boarder_id: Uuid, amount: f64) -> Self {
        Self {
            boarder_id,
            balance: amount,
        }
    }
}

/// A received payment. Append-only ledger entry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Payment {
    pub id: Uuid,
    pub boarder_id: Uuid,
    pub amount: f64,
    pub method: PaymentMethod,
    pub kind: PaymentKind,
    pub date: NaiveDate,
}

impl Payment {
    pub fn new(
        boarder_id: Uuid,
        amount: f64,
        method: PaymentMethod,
        kind: PaymentKind,
        date: NaiveDate,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            boarder_id,
            amount,
            method,
            kind,
            date,
        }
    }
}

impl Identifiable for Payment {
    fn id(&self) -> Uuid {
        self.id
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum PaymentMethod {
    Cash,
    BankTransfer,
    Online,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum PaymentKind {
    Deposit,
    Rent,
    Utility,
    Other,
}

/// A billed charge against a boarder's deposit. Append-only ledger entry;
/// insertion is rejected when the balance cannot cover it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Charge {
    pub id: Uuid,
    pub boarder_id: Uuid,
    pub description: String,
    pub kind: ChargeKind,
    pub amount: f64,
    pub date: NaiveDate,
}

impl Charge {
    pub fn new(
        boarder_id: Uuid,
        description: impl Into<String>,
        kind: ChargeKind,
        amount: f64,
        date: NaiveDate,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            boarder_id,
            description: description.into(),
            kind,
            amount,
            date,
        }
    }
}

impl Identifiable for Charge {
    fn id(&self) -> Uuid {
        self.id
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ChargeKind {
    Rent,
    Utility,
    Damage,
    Other,
}
