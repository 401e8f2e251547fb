// src/core/writer/firstnames.rs
use anyhow::{Context as _, Result};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::info;

use crate::models::{FirstnameTables, FrequencyTable, Gender};

/// Writes `male_names.txt` and `female_names.txt` into `output_dir`.
///
/// Existing files are overwritten.
///
/// # Returns
///
/// * `Ok([male, female])` - The number of names written per gender
///
/// # Errors
///
/// Returns an error if an output file cannot be created or written.
pub fn write_firstname_lists(
    tables: &FirstnameTables,
    output_dir: &Path,
    limit: Option<usize>,
) -> Result<[usize; 2]> {
    let mut written = [0; 2];
    for (slot, gender) in written.iter_mut().zip(Gender::ALL) {
        let output_path = output_dir.join(gender.file_name());
        info!("Export {gender} firstnames in {}...", output_path.display());
        let file = File::create(&output_path)
            .with_context(|| format!("Failed to create output file: {}", output_path.display()))?;
        let mut writer = BufWriter::new(file);
        *slot = write_ranked_names(&mut writer, tables.get(gender), limit)
            .and_then(|count| writer.flush().map(|()| count))
            .with_context(|| format!("Failed to write output file: {}", output_path.display()))?;

        if limit.is_some_and(|limit| tables.get(gender).len() > limit) {
            info!(
                "Output limit of {} firstnames to export in output files reached for {gender}",
                *slot
            );
        }
    }
    Ok(written)
}

/// Writes the names of `table`, one per line, by descending count.
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn write_ranked_names<W: Write>(
    writer: &mut W,
    table: &FrequencyTable,
    limit: Option<usize>,
) -> std::io::Result<usize> {
    let ranked = table.ranked();
    let mut count: usize = 0;
    for (name, _) in ranked.iter().take(limit.unwrap_or(usize::MAX)) {
        writeln!(writer, "{name}")?;
        count = count.saturating_add(1);
    }
    Ok(count)
}
