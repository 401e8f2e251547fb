// src/models/tally.rs
use std::fmt;

/// Running summary of what a loader has accumulated so far.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tally {
    /// Distinct keys per gender table.
    Firstnames { male: usize, female: usize },
    Passwords(usize),
}

impl fmt::Display for Tally {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Firstnames { male, female } => write!(f, "(male: {male}, female: {female})"),
            Self::Passwords(count) => write!(f, "({count} passwords)"),
        }
    }
}
