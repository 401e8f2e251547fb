// src/core/input.rs
use anyhow::{Context as _, Result, anyhow};
use encoding_rs::Encoding;
use std::fs::{self, File};
use std::io::{BufRead as _, BufReader};
use std::path::Path;

/// Reads `path` and decodes it from `encoding` into UTF-8 text.
///
/// A leading byte order mark is stripped and selects its own encoding.
///
/// # Errors
///
/// This function may return an error if:
/// * The file cannot be read
/// * The content is not valid in the given encoding
pub fn read_decoded(path: &Path, encoding: &'static Encoding) -> Result<String> {
    let bytes = fs::read(path)
        .with_context(|| format!("Failed to open input file: {}", path.display()))?;
    decode_strict(&bytes, encoding)
        .with_context(|| format!("Failed to decode input file: {}", path.display()))
}

/// Decodes `bytes`, refusing malformed sequences instead of replacing them.
///
/// # Errors
///
/// Returns an error if `bytes` is not valid in the selected encoding.
pub fn decode_strict(bytes: &[u8], encoding: &'static Encoding) -> Result<String> {
    let (encoding, body) = match Encoding::for_bom(bytes) {
        Some((bom_encoding, bom_length)) => (bom_encoding, bytes.get(bom_length..).unwrap_or_default()),
        None => (encoding, bytes),
    };
    encoding
        .decode_without_bom_handling_and_without_replacement(body)
        .map(|text| text.into_owned())
        .ok_or_else(|| anyhow!("Input is not valid {} text", encoding.name()))
}

/// Counts the lines of `path`, used to size the progress bar.
///
/// A final line without a trailing newline is counted.
///
/// # Errors
///
/// Returns an error if the file cannot be read.
pub fn count_lines(path: &Path) -> Result<u64> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open input file: {}", path.display()))?;
    let mut reader = BufReader::new(file);
    let mut count: u64 = 0;
    let mut line = Vec::new();
    loop {
        line.clear();
        let read = reader
            .read_until(b'\n', &mut line)
            .with_context(|| format!("Failed to read input file: {}", path.display()))?;
        if read == 0 {
            break;
        }
        count = count.saturating_add(1);
    }
    Ok(count)
}
