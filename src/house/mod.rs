pub mod house;

pub use house::{House, CURRENT_SCHEMA_VERSION};
