// src/models.rs
pub mod frequency_table;
pub mod gender;
pub mod name_record;
pub mod password_list;
pub mod tally;

pub use frequency_table::{FirstnameTables, FrequencyTable};
pub use gender::Gender;
pub use name_record::NameRecord;
pub use password_list::PasswordList;
pub use tally::Tally;
