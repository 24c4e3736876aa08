pub mod balance_service;
pub mod boarder_service;
pub mod income_service;
pub mod occupancy_service;
pub mod view_service;

pub use balance_service::BalanceService;
pub use boarder_service::BoarderService;
pub use income_service::{IncomeReport, IncomeService};
pub use occupancy_service::OccupancyService;
pub use view_service::{BalanceStatement, RoomDirectoryEntry, ViewService};

use crate::errors::HouseError;

pub type ServiceResult<T> = Result<T, ServiceError>;

#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error(transparent)]
    Storage(#[from] HouseError),
    #[error("insufficient balance: {available:.2} available, {requested:.2} requested")]
    InsufficientBalance { available: f64, requested: f64 },
    #[error("{0} not found")]
    NotFound(String),
    #[error("invalid amount: {0}")]
    InvalidAmount(f64),
    #[error("{0}")]
    Invalid(String),
}
