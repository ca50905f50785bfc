use std::env;

use serde::Deserialize;

use crate::engine::errors::EngineError;
use crate::engine::types::NullOrder;

#[derive(Debug, Deserialize)]
pub struct Settings {
    pub logging: LoggingConfig,
    pub table: TableConfig,
}

#[derive(Debug, Deserialize)]
pub struct LoggingConfig {
    /// Daily-rolling log files are written here when set.
    pub log_dir: Option<String>,
    pub stdout_level: String,
    pub file_level: String,
}

#[derive(Debug, Deserialize)]
pub struct TableConfig {
    /// Null placement used when building ascending pointers.
    pub null_order: NullOrder,
}

/// Defaults, then the optional file named by `COLBUNDLE_CONFIG`, then
/// `COLBUNDLE__SECTION__KEY` environment variables.
pub fn load_settings() -> Result<Settings, EngineError> {
    let config_path = env::var("COLBUNDLE_CONFIG").unwrap_or_else(|_| "colbundle".to_string());
    load_settings_from(&config_path)
}

pub fn load_settings_from(config_path: &str) -> Result<Settings, EngineError> {
    let settings: Settings = config::Config::builder()
        .set_default("logging.stdout_level", "info")?
        .set_default("logging.file_level", "debug")?
        .set_default("table.null_order", "first")?
        .add_source(config::File::with_name(config_path).required(false))
        .add_source(config::Environment::with_prefix("COLBUNDLE").separator("__"))
        .build()?
        .try_deserialize()?;

    Ok(settings)
}
