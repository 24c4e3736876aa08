use dirs::home_dir;
use std::{
    env, fs,
    path::{Path, PathBuf},
    sync::Once,
};

use crate::errors::HouseError;

const DEFAULT_DIR_NAME: &str = ".lodging_core";

static TRACING_INIT: Once = Once::new();

/// Initializes the global tracing subscriber with sensible defaults.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, EnvFilter};

        let filter =
            EnvFilter::from_default_env().add_directive("lodging_core=info".parse().unwrap());

        fmt().with_env_filter(filter).init();
    });
}

/// Returns the application data directory, defaulting to `~/.lodging_core`.
pub fn app_data_dir() -> PathBuf {
    if let Some(custom) = env::var_os("LODGING_CORE_HOME") {
        return PathBuf::from(custom);
    }
    home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DEFAULT_DIR_NAME)
}

/// Creates `path` and its parents when missing.
pub fn ensure_dir(path: &Path) -> Result<(), HouseError> {
    if !path.exists() {
        fs::create_dir_all(path)?;
    }
    Ok(())
}
