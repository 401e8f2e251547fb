// src/models/gender.rs
use std::fmt;

/// Gender partition of the first-name tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    /// Both genders, in output order.
    pub const ALL: [Self; 2] = [Self::Male, Self::Female];

    /// Maps an INSEE `sexe` column value to a gender.
    ///
    /// Returns `None` for anything other than `"1"` or `"2"`.
    #[inline]
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "1" => Some(Self::Male),
            "2" => Some(Self::Female),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
        }
    }

    /// Name of the frequency list written for this gender.
    #[inline]
    #[must_use]
    pub const fn file_name(self) -> &'static str {
        match self {
            Self::Male => "male_names.txt",
            Self::Female => "female_names.txt",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
