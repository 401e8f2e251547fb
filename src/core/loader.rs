// src/core/loader.rs
pub mod firstnames;
pub mod passwords;

pub use firstnames::{load_firstnames, load_firstnames_file};
pub use passwords::{load_passwords, load_passwords_file};
