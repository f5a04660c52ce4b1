/// A skater's name as split out of the "First Last" display name used by the
/// entry form, ready to be matched against the `first_name` / `last_name` columns.
///
/// Only the first space separates the two parts, so every word after it lands
/// in the last name. Multi-word first names therefore do not round-trip; when the
/// form knows the selected skater's id it should be used instead of the name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkaterName {
    first: String,
    last: String,
}

impl SkaterName {
    /// Splits a display name on its first space.
    ///
    /// # Examples
    ///
    /// ```
    /// use storage::models::SkaterName;
    ///
    /// let name = SkaterName::from_display_name("Jean Claude Smith");
    /// assert_eq!(name.first_name(), "Jean");
    /// assert_eq!(name.last_name(), "Claude Smith");
    /// ```
    pub fn from_display_name(display_name: &str) -> Self {
        match display_name.split_once(' ') {
            Some((first, last)) => Self {
                first: first.to_string(),
                last: last.to_string(),
            },
            None => Self {
                first: display_name.to_string(),
                last: String::new(),
            },
        }
    }

    pub fn first_name(&self) -> &str {
        &self.first
    }

    pub fn last_name(&self) -> &str {
        &self.last
    }

    /// Returns both parts as a tuple (first_name, last_name) for database lookup
    pub fn as_database_tuple(&self) -> (&str, &str) {
        (&self.first, &self.last)
    }
}

impl std::fmt::Display for SkaterName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.last.is_empty() {
            write!(f, "{}", self.first)
        } else {
            write!(f, "{} {}", self.first, self.last)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_word_name() {
        let name = SkaterName::from_display_name("Alice Smith");
        assert_eq!(name.as_database_tuple(), ("Alice", "Smith"));
    }

    #[test]
    fn test_splits_on_first_space_only() {
        let name = SkaterName::from_display_name("Jean Claude Smith");
        assert_eq!(name.first_name(), "Jean");
        assert_eq!(name.last_name(), "Claude Smith");
    }

    #[test]
    fn test_single_word_has_empty_last_name() {
        let name = SkaterName::from_display_name("Madonna");
        assert_eq!(name.first_name(), "Madonna");
        assert_eq!(name.last_name(), "");
    }

    #[test]
    fn test_display_matches_input() {
        let name = SkaterName::from_display_name("Jean Claude Smith");
        assert_eq!(name.to_string(), "Jean Claude Smith");
    }
}
