//! Cross-system identity translation

use std::collections::HashMap;

/// Source username to destination username table
///
/// Loaded once per run. A username without an entry translates to an
/// empty identity rather than an error.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserMapping {
    users: HashMap<String, String>,
}

impl UserMapping {
    /// Create an empty mapping
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace an entry, returning the previous destination name
    pub fn insert(
        &mut self,
        source: impl Into<String>,
        destination: impl Into<String>,
    ) -> Option<String> {
        self.users.insert(source.into(), destination.into())
    }

    /// Translate a source username, empty when unmapped
    pub fn translate(&self, source: &str) -> String {
        match self.users.get(source) {
            Some(destination) => destination.clone(),
            None => {
                tracing::warn!(username = %source, "No destination user mapped");
                String::new()
            }
        }
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.users.len()
    }

    /// Whether the mapping is empty
    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

impl FromIterator<(String, String)> for UserMapping {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            users: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_translate_mapped_user() {
        let mut mapping = UserMapping::new();
        mapping.insert("alice", "a.smith");
        assert_eq!(mapping.translate("alice"), "a.smith");
    }

    #[test]
    fn test_translate_unmapped_user_is_empty() {
        let mapping: UserMapping = [("alice".to_string(), "a.smith".to_string())]
            .into_iter()
            .collect();
        assert_eq!(mapping.translate("bob"), "");
        assert_eq!(mapping.len(), 1);
    }

    #[test]
    fn test_insert_replaces() {
        let mut mapping = UserMapping::new();
        assert!(mapping.is_empty());
        assert_eq!(mapping.insert("carol", "c.old"), None);
        assert_eq!(mapping.insert("carol", "c.new"), Some("c.old".to_string()));
        assert_eq!(mapping.translate("carol"), "c.new");
    }
}
