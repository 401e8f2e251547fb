//! Converters turning public datasets into zxcvbn frequency lists.
//!
//! * The INSEE first-name table becomes `male_names.txt` and `female_names.txt`,
//!   names ordered by descending number of births.
//! * The Richelieu top-passwords file becomes `passwords.txt`, one
//!   `<password>\t<rank>` line per password.

pub mod cli;
pub mod config;
pub mod core;
pub mod logging;
pub mod models;

pub use cli::{CommonArgs, FirstnamesArgs, PasswordsArgs, run_firstnames, run_passwords};
pub use config::{NameOptions, PasswordOptions};
pub use crate::core::loader::{load_firstnames, load_firstnames_file, load_passwords, load_passwords_file};
pub use crate::core::progress::{BarProgress, LoadProgress, NoProgress};
pub use crate::core::writer::{write_firstname_lists, write_password_list};
pub use models::{FirstnameTables, FrequencyTable, Gender, NameRecord, PasswordList, Tally};
