// src/core/writer.rs
pub mod firstnames;
pub mod passwords;

pub use firstnames::{write_firstname_lists, write_ranked_names};
pub use passwords::{write_password_list, write_ranked_passwords};
