// src/core/loader/firstnames.rs
use anyhow::{Context as _, Result, bail};
use csv::ReaderBuilder;
use std::io::Read;
use tracing::{debug, info, warn};

use crate::config::NameOptions;
use crate::core::input::read_decoded;
use crate::core::normalize::{name_key, transliterate};
use crate::core::progress::LoadProgress;
use crate::models::{FirstnameTables, Gender, NameRecord, Tally};

/// Columns the INSEE table must provide.
pub const REQUIRED_COLUMNS: [&str; 4] = ["sexe", "preusuel", "annais", "nombre"];

/// Loads the first-name tables from the file named in `options`.
///
/// # Errors
///
/// This function may return an error if:
/// * The input file cannot be opened, read or decoded
/// * The header lacks one of the required columns
/// * A `nombre` field is not a non-negative integer
#[inline]
pub fn load_firstnames_file(
    options: &NameOptions,
    progress: &dyn LoadProgress,
) -> Result<FirstnameTables> {
    info!("Load firstnames from input file {} ...", options.input.display());
    let content = read_decoded(&options.input, options.encoding)?;
    load_firstnames(content.as_bytes(), options, progress)
        .with_context(|| format!("Failed to load firstnames from {}", options.input.display()))
}

/// Aggregates first-name counts per gender from a delimited table.
///
/// Rows whose name equals the rare-name sentinel are skipped. Rows with an
/// unknown gender code are skipped with a warning. Fields past the header's
/// columns are ignored. Every other row adds its
/// count under the lower-cased name and, when normalization is on, under the
/// transliterated name as well.
///
/// # Errors
///
/// This function may return an error if:
/// * The header lacks one of the required columns
/// * A row cannot be parsed or its count is not an integer
pub fn load_firstnames<R: Read>(
    reader: R,
    options: &NameOptions,
    progress: &dyn LoadProgress,
) -> Result<FirstnameTables> {
    let mut csv_reader = ReaderBuilder::new()
        .delimiter(options.delimiter)
        .flexible(true)
        .from_reader(reader);

    // An empty input has no header at all and yields empty tables.
    let headers = csv_reader.headers().context("Failed to read CSV header")?;
    let required: &[&str] = if headers.is_empty() { &[] } else { &REQUIRED_COLUMNS };
    for &column in required {
        if !headers.iter().any(|header| header == column) {
            bail!("Missing column '{column}' in CSV header");
        }
    }

    let mut tables = FirstnameTables::new();
    let mut position: u64 = 0;

    for result in csv_reader.deserialize::<NameRecord>() {
        let record = result.context("Failed to parse CSV record")?;
        position = position.saturating_add(1);
        accumulate(&mut tables, &record, options);
        progress.advance(
            position,
            Tally::Firstnames {
                male: tables.male.len(),
                female: tables.female.len(),
            },
        );
    }
    progress.finish();

    debug!(
        records = position,
        male = tables.male.len(),
        female = tables.female.len(),
        "firstnames loaded"
    );
    Ok(tables)
}

fn accumulate(tables: &mut FirstnameTables, record: &NameRecord, options: &NameOptions) {
    if record.raw_name == options.unusual_firstname {
        return;
    }

    let Some(gender) = Gender::from_code(&record.gender_code) else {
        warn!(
            "Column sexe value \"{}\" not recognized (complete line: {:?})",
            record.gender_code, record
        );
        return;
    };

    let key = name_key(&record.raw_name);
    let table = tables.get_mut(gender);
    table.add(&key, record.count);

    if options.normalize {
        if let Some(normalized) = transliterate(&key) {
            table.add(&normalized, record.count);
        }
    }
}
