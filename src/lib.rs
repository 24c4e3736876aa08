#![doc(test(attr(deny(warnings))))]

//! Lodging Core provides the bookkeeping and consistency rules that power
//! boarding-house management workflows: deposit ledgers, room occupancy
//! tracking, boarder lifecycle, and income reporting.

pub mod config;
pub mod core;
pub mod domain;
pub mod errors;
pub mod house;
pub mod storage;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Lodging Core tracing initialized.");
    });
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_does_not_panic() {
        super::init();
    }
}
