// src/config.rs
use anyhow::{Result, anyhow, bail};
use encoding_rs::Encoding;
use std::path::{Path, PathBuf};

pub const DEFAULT_DELIMITER: char = ';';
pub const DEFAULT_ENCODING: &str = "utf8";
pub const DEFAULT_UNUSUAL_FIRSTNAME: &str = "_PRENOMS_RARES";
pub const PASSWORDS_FILE_NAME: &str = "passwords.txt";

/// Settings of the first-name converter.
#[derive(Debug, Clone)]
pub struct NameOptions {
    pub input: PathBuf,
    pub output_dir: PathBuf,
    pub delimiter: u8,
    pub encoding: &'static Encoding,
    /// Value of `preusuel` standing in for suppressed rare names.
    pub unusual_firstname: String,
    /// Also count each name under its transliterated spelling.
    pub normalize: bool,
    /// Maximum names written per gender. `None` writes everything.
    pub limit: Option<usize>,
}

impl NameOptions {
    /// Options with every default applied for the given input file.
    #[must_use]
    pub fn new(input: PathBuf) -> Self {
        let output_dir = default_output_dir(&input);
        Self {
            input,
            output_dir,
            delimiter: b';',
            encoding: encoding_rs::UTF_8,
            unusual_firstname: String::from(DEFAULT_UNUSUAL_FIRSTNAME),
            normalize: false,
            limit: None,
        }
    }
}

/// Settings of the password converter.
#[derive(Debug, Clone)]
pub struct PasswordOptions {
    pub input: PathBuf,
    pub output_dir: PathBuf,
    pub encoding: &'static Encoding,
    /// Maximum passwords written. `None` writes everything.
    pub limit: Option<usize>,
}

impl PasswordOptions {
    #[must_use]
    pub fn new(input: PathBuf) -> Self {
        let output_dir = default_output_dir(&input);
        Self {
            input,
            output_dir,
            encoding: encoding_rs::UTF_8,
            limit: None,
        }
    }

    #[must_use]
    pub fn output_path(&self) -> PathBuf {
        self.output_dir.join(PASSWORDS_FILE_NAME)
    }
}

/// Directory holding `input`, or `.` for a bare file name.
#[must_use]
pub fn default_output_dir(input: &Path) -> PathBuf {
    match input.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

/// Looks up a WHATWG encoding label such as `utf8`, `latin1` or `windows-1252`.
///
/// # Errors
///
/// Returns an error if the label is not a known encoding.
pub fn parse_encoding(label: &str) -> Result<&'static Encoding> {
    Encoding::for_label(label.trim().as_bytes())
        .ok_or_else(|| anyhow!("Unknown input encoding: {label}"))
}

/// Converts a delimiter character into the single byte the CSV reader expects.
///
/// # Errors
///
/// Returns an error if the delimiter is not a single ASCII character.
pub fn parse_delimiter(delimiter: char) -> Result<u8> {
    if !delimiter.is_ascii() {
        bail!("CSV delimiter must be a single ASCII character, got {delimiter:?}");
    }
    u8::try_from(delimiter)
        .map_err(|_| anyhow!("CSV delimiter must be a single ASCII character, got {delimiter:?}"))
}

/// A limit of zero means no limit.
#[inline]
#[must_use]
pub fn effective_limit(limit: Option<usize>) -> Option<usize> {
    limit.filter(|&n| n > 0)
}
