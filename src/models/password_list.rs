// src/models/password_list.rs

/// Passwords in file order, most frequent first.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct PasswordList {
    entries: Vec<String>,
}

impl PasswordList {
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a line after trimming it. Lines that are blank once trimmed are
    /// dropped. Returns whether the line was kept.
    #[inline]
    pub fn push_line(&mut self, line: &str) -> bool {
        let password = line.trim();
        if password.is_empty() {
            return false;
        }
        self.entries.push(password.to_owned());
        true
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Yields `(password, rank)` pairs for the first `limit` entries, or for
    /// all of them when `limit` is `None`.
    ///
    /// Rank is `len - index`, always computed against the full list so that a
    /// truncated output keeps the ranks of the complete dataset.
    pub fn ranked(&self, limit: Option<usize>) -> impl Iterator<Item = (&str, usize)> {
        let total = self.entries.len();
        self.entries
            .iter()
            .take(limit.unwrap_or(total))
            .enumerate()
            .map(move |(index, password)| (password.as_str(), total.saturating_sub(index)))
    }
}

impl<S: AsRef<str>> FromIterator<S> for PasswordList {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut list = Self::new();
        for line in iter {
            list.push_line(line.as_ref());
        }
        list
    }
}
