// src/models/name_record.rs
use serde::Deserialize;

/// One row of the INSEE first-name table.
///
/// Columns are matched by header name, so extra columns and any column order
/// are accepted.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct NameRecord {
    #[serde(rename = "sexe")]
    pub gender_code: String,
    #[serde(rename = "preusuel")]
    pub raw_name: String,
    /// Birth year, `XXXX` when unknown. Not used for aggregation.
    #[serde(rename = "annais")]
    pub birth_year: String,
    #[serde(rename = "nombre")]
    pub count: u64,
}
