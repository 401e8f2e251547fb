// src/core/writer/passwords.rs
use anyhow::{Context as _, Result};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::info;

use crate::models::PasswordList;

/// Writes the ranked passwords to `output_path`, overwriting it.
///
/// # Returns
///
/// * `Ok(usize)` - The number of passwords written
///
/// # Errors
///
/// Returns an error if the output file cannot be created or written.
pub fn write_password_list(
    passwords: &PasswordList,
    output_path: &Path,
    limit: Option<usize>,
) -> Result<usize> {
    info!("Export passwords in {}...", output_path.display());
    let file = File::create(output_path)
        .with_context(|| format!("Failed to create output file: {}", output_path.display()))?;
    let mut writer = BufWriter::new(file);
    let count = write_ranked_passwords(&mut writer, passwords, limit)
        .and_then(|count| writer.flush().map(|()| count))
        .with_context(|| format!("Failed to write output file: {}", output_path.display()))?;

    if limit.is_some_and(|limit| passwords.len() > limit) {
        info!("Output limit of {count} passwords to export in output file reached");
    }
    Ok(count)
}

/// Writes one `<password>\t<rank>` line per entry.
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn write_ranked_passwords<W: Write>(
    writer: &mut W,
    passwords: &PasswordList,
    limit: Option<usize>,
) -> std::io::Result<usize> {
    let mut count: usize = 0;
    for (password, rank) in passwords.ranked(limit) {
        writeln!(writer, "{password}\t{rank}")?;
        count = count.saturating_add(1);
    }
    Ok(count)
}
