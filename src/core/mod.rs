pub mod house_manager;
pub mod services;
pub mod shared;

pub use house_manager::HouseManager;
pub use shared::SharedHouse;
