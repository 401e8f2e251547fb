// src/logging.rs
use anyhow::{Context as _, Result};
use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, fmt};

/// Where diagnostics go and how verbose they are.
#[derive(Debug, Clone)]
pub struct LogOptions {
    pub level: LevelFilter,
    /// Diagnostics are appended to this file when set.
    pub file: Option<PathBuf>,
    /// Keep logging to the console even when a log file is set.
    pub console: bool,
}

impl Default for LogOptions {
    fn default() -> Self {
        Self {
            level: LevelFilter::ERROR,
            file: None,
            console: false,
        }
    }
}

impl LogOptions {
    #[inline]
    #[must_use]
    pub const fn logs_to_console(&self) -> bool {
        self.file.is_none() || self.console
    }
}

/// Installs the global subscriber. `RUST_LOG` takes precedence over
/// `options.level` when it is set.
///
/// # Errors
///
/// This function may return an error if:
/// * The log file cannot be opened for appending
/// * A global subscriber is already installed
pub fn init(options: &LogOptions) -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(options.level.to_string()));

    let file_layer = match &options.file {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("Failed to open log file: {}", path.display()))?;
            Some(
                fmt::layer()
                    .with_writer(Mutex::new(file))
                    .with_ansi(false)
                    .with_target(false),
            )
        }
        None => None,
    };

    let console_layer = options
        .logs_to_console()
        .then(|| fmt::layer().with_writer(std::io::stderr).with_target(false));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .with(console_layer)
        .try_init()
        .context("Failed to initialize logging")?;
    Ok(())
}
