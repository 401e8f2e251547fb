// src/core/loader/passwords.rs
use anyhow::{Context as _, Result};
use std::io::{BufRead as _, BufReader, Read};
use tracing::{debug, info};

use crate::config::PasswordOptions;
use crate::core::input::read_decoded;
use crate::core::progress::LoadProgress;
use crate::models::{PasswordList, Tally};

/// Loads the ranked password list from the file named in `options`.
///
/// # Errors
///
/// Returns an error if the input file cannot be read or is not valid in the
/// configured encoding.
#[inline]
pub fn load_passwords_file(
    options: &PasswordOptions,
    progress: &dyn LoadProgress,
) -> Result<PasswordList> {
    info!("Load top passwords from input file {} ...", options.input.display());
    let content = read_decoded(&options.input, options.encoding)?;
    load_passwords(content.as_bytes(), progress)
        .with_context(|| format!("Failed to load passwords from {}", options.input.display()))
}

/// Reads one password per line, most frequent first.
///
/// Lines are trimmed and blank lines dropped; duplicates and order are kept.
///
/// # Errors
///
/// Returns an error if reading fails.
pub fn load_passwords<R: Read>(reader: R, progress: &dyn LoadProgress) -> Result<PasswordList> {
    let mut passwords = PasswordList::new();
    let mut position: u64 = 0;

    for line in BufReader::new(reader).lines() {
        let line = line.context("Failed to read line")?;
        position = position.saturating_add(1);
        passwords.push_line(&line);
        progress.advance(position, Tally::Passwords(passwords.len()));
    }
    progress.finish();

    debug!(lines = position, passwords = passwords.len(), "passwords loaded");
    Ok(passwords)
}
