use anyhow::Context;
use tracing::info;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;

use crate::shared::config::{CONFIG, LoggingConfig};

const LOG_FILE: &str = "colbundle.log";

/// Installs the global subscriber from the loaded `CONFIG`.
pub fn init() -> anyhow::Result<()> {
    init_with(&CONFIG.logging)
}

/// Stdout always, plus a daily-rolling file when `log_dir` is set.
/// Fails if a subscriber is already installed.
pub fn init_with(cfg: &LoggingConfig) -> anyhow::Result<()> {
    let (stdout_filter, file_filter) = levels(cfg)?;

    let stdout_layer = fmt::layer().with_ansi(true).with_filter(stdout_filter);
    let file_layer = cfg.log_dir.as_ref().map(|dir| {
        fmt::layer()
            .with_ansi(false)
            .with_writer(tracing_appender::rolling::daily(dir, LOG_FILE))
            .with_filter(file_filter)
    });

    tracing_subscriber::registry()
        .with(stdout_layer)
        .with(file_layer)
        .try_init()?;

    info!(
        target: "colbundle::logging",
        "Logging initialized (stdout={}, file={})",
        stdout_filter,
        cfg.log_dir.as_deref().map_or("off", |_| cfg.file_level.as_str())
    );
    Ok(())
}

/// Parses the stdout and file levels.
pub(crate) fn levels(cfg: &LoggingConfig) -> anyhow::Result<(LevelFilter, LevelFilter)> {
    let stdout = cfg
        .stdout_level
        .parse::<LevelFilter>()
        .with_context(|| format!("invalid stdout_level '{}'", cfg.stdout_level))?;
    let file = cfg
        .file_level
        .parse::<LevelFilter>()
        .with_context(|| format!("invalid file_level '{}'", cfg.file_level))?;
    Ok((stdout, file))
}

#[cfg(test)]
pub fn init_for_tests() {
    use std::sync::Once;
    use tracing_subscriber::EnvFilter;

    static INIT: Once = Once::new();

    INIT.call_once(|| {
        let filter = EnvFilter::from_default_env().add_directive("colbundle=debug".parse().unwrap());

        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .init();
    });
}
