// src/cli.rs
use anyhow::Result;
use clap::Parser;
use std::path::{Path, PathBuf};
use tracing_subscriber::filter::LevelFilter;

use crate::config::{
    DEFAULT_DELIMITER, DEFAULT_ENCODING, DEFAULT_UNUSUAL_FIRSTNAME, NameOptions, PasswordOptions,
    effective_limit, parse_delimiter, parse_encoding,
};
use crate::core::input::count_lines;
use crate::core::loader::{load_firstnames_file, load_passwords_file};
use crate::core::progress::{BarProgress, LoadProgress, NoProgress};
use crate::core::writer::{write_firstname_lists, write_password_list};
use crate::logging::LogOptions;

/// Diagnostics and progress options shared by both converters.
#[derive(clap::Args, Debug, Clone, Default)]
pub struct CommonArgs {
    /// Show debug messages
    #[arg(short, long)]
    pub debug: bool,

    /// Show verbose messages
    #[arg(short, long)]
    pub verbose: bool,

    /// Show warning messages
    #[arg(short, long)]
    pub warning: bool,

    /// Log file path
    #[arg(short = 'l', long)]
    pub log_file: Option<PathBuf>,

    /// Also log on console (even if log file is provided)
    #[arg(short = 'C', long)]
    pub console: bool,

    /// Show progress bar
    #[arg(short, long)]
    pub progress: bool,
}

impl CommonArgs {
    #[must_use]
    pub const fn level(&self) -> LevelFilter {
        if self.debug {
            LevelFilter::DEBUG
        } else if self.verbose {
            LevelFilter::INFO
        } else if self.warning {
            LevelFilter::WARN
        } else {
            LevelFilter::ERROR
        }
    }

    #[must_use]
    pub fn log_options(&self) -> LogOptions {
        LogOptions {
            level: self.level(),
            file: self.log_file.clone(),
            console: self.console,
        }
    }
}

/// Generate male_names.txt and female_names.txt from the INSEE first-name CSV dataset
#[derive(Parser, Debug, Clone)]
#[command(name = "firstnames-freqlist", author, version, about, long_about = None)]
pub struct FirstnamesArgs {
    /// CSV input file path
    pub input: PathBuf,

    /// CSV input file delimiter character
    #[arg(short = 'D', long, default_value_t = DEFAULT_DELIMITER, help_heading = "CSV options")]
    pub delimiter: char,

    /// CSV input file encoding
    #[arg(short, long, default_value = DEFAULT_ENCODING, help_heading = "CSV options")]
    pub encoding: String,

    /// CSV input file unusual firstname replacement string
    #[arg(long, default_value = DEFAULT_UNUSUAL_FIRSTNAME, help_heading = "CSV options")]
    pub unusual_firstname: String,

    /// Output directory (default: same as input CSV file)
    #[arg(short, long, help_heading = "Output options")]
    pub output: Option<PathBuf>,

    /// Add normalized firstname (if differ from raw firstname)
    #[arg(short, long, help_heading = "Output options")]
    pub normalize: bool,

    /// Limit number of firstnames by gender to export. Top ranked firstnames are kept (default: no limit)
    #[arg(short = 'L', long, help_heading = "Output options")]
    pub limit: Option<usize>,

    #[command(flatten)]
    pub common: CommonArgs,
}

impl FirstnamesArgs {
    /// Resolves defaults and validates delimiter and encoding.
    ///
    /// # Errors
    ///
    /// Returns an error if the delimiter is not a single ASCII character or the
    /// encoding label is unknown.
    pub fn options(&self) -> Result<NameOptions> {
        let mut options = NameOptions::new(self.input.clone());
        if let Some(output) = &self.output {
            options.output_dir.clone_from(output);
        }
        options.delimiter = parse_delimiter(self.delimiter)?;
        options.encoding = parse_encoding(&self.encoding)?;
        options.unusual_firstname.clone_from(&self.unusual_firstname);
        options.normalize = self.normalize;
        options.limit = effective_limit(self.limit);
        Ok(options)
    }
}

/// Generate passwords.txt from the Richelieu top passwords dataset
#[derive(Parser, Debug, Clone)]
#[command(name = "passwords-freqlist", author, version, about, long_about = None)]
pub struct PasswordsArgs {
    /// Input Richelieu top passwords file path
    pub input: PathBuf,

    /// Input file encoding
    #[arg(short, long, default_value = DEFAULT_ENCODING, help_heading = "Input options")]
    pub encoding: String,

    /// Output directory (default: same as input file)
    #[arg(short, long, help_heading = "Output options")]
    pub output: Option<PathBuf>,

    /// Limit number of passwords to export. Top ranked passwords are kept (default: no limit)
    #[arg(short = 'L', long, help_heading = "Output options")]
    pub limit: Option<usize>,

    #[command(flatten)]
    pub common: CommonArgs,
}

impl PasswordsArgs {
    /// Resolves defaults and validates the encoding.
    ///
    /// # Errors
    ///
    /// Returns an error if the encoding label is unknown.
    pub fn options(&self) -> Result<PasswordOptions> {
        let mut options = PasswordOptions::new(self.input.clone());
        if let Some(output) = &self.output {
            options.output_dir.clone_from(output);
        }
        options.encoding = parse_encoding(&self.encoding)?;
        options.limit = effective_limit(self.limit);
        Ok(options)
    }
}

/// Progress observer for a load: a bar sized by a line-count pre-pass when
/// requested, nothing otherwise.
fn progress_for(
    enabled: bool,
    label: &str,
    input: &Path,
    header_lines: u64,
) -> Result<Box<dyn LoadProgress>> {
    if !enabled {
        return Ok(Box::new(NoProgress));
    }
    let total = count_lines(input)?.saturating_sub(header_lines);
    Ok(Box::new(BarProgress::new(label, total)))
}

/// Runs the first-name converter.
///
/// # Errors
///
/// This function may return an error if:
/// * The options are invalid
/// * The input file cannot be read or parsed
/// * An output file cannot be written
pub fn run_firstnames(args: FirstnamesArgs) -> Result<()> {
    let options = args.options()?;
    let label = format!("Load firstnames from input file {}", options.input.display());
    let progress = progress_for(args.common.progress, &label, &options.input, 1)?;

    let tables = load_firstnames_file(&options, progress.as_ref())?;
    write_firstname_lists(&tables, &options.output_dir, options.limit)?;
    Ok(())
}

/// Runs the password converter.
///
/// # Errors
///
/// This function may return an error if:
/// * The encoding is unknown
/// * The input file cannot be read
/// * The output file cannot be written
pub fn run_passwords(args: PasswordsArgs) -> Result<()> {
    let options = args.options()?;
    let label = format!("Load top passwords from input file {}", options.input.display());
    let progress = progress_for(args.common.progress, &label, &options.input, 0)?;

    let passwords = load_passwords_file(&options, progress.as_ref())?;
    write_password_list(&passwords, &options.output_path(), options.limit)?;
    Ok(())
}
