//! The custom media table.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Mapping from custom media alias (`--md`) to its query expression.
///
/// Entries keep the order in which their keys were first inserted. Replacing
/// the value of an existing key leaves it in place, so overlaying one table
/// on another yields the same order on every run.
///
/// # Example
///
/// ```rust
/// use vaultcss::CustomMediaTable;
///
/// let mut table = CustomMediaTable::new();
/// table.insert("--md", "(width >= 48rem)");
/// table.insert("--lg", "(width >= 64rem)");
/// table.insert("--md", "(width >= 50rem)");
///
/// assert_eq!(table.get("--md"), Some("(width >= 50rem)"));
/// assert_eq!(table.names().collect::<Vec<_>>(), ["--md", "--lg"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CustomMediaTable {
    entries: IndexMap<String, String>,
}

impl CustomMediaTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the expression for `name`, replacing any previous value.
    pub fn insert(&mut self, name: impl Into<String>, query: impl Into<String>) {
        self.entries.insert(name.into(), query.into());
    }

    /// Chaining variant of [`insert`](Self::insert).
    pub fn with(mut self, name: impl Into<String>, query: impl Into<String>) -> Self {
        self.insert(name, query);
        self
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries.get(name).map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates `(name, query)` pairs in table order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(name, query)| (name.as_str(), query.as_str()))
    }

    /// Iterates alias names in table order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Applies `layer` on top of this table.
    ///
    /// Keys present in both take the value from `layer`; keys only in
    /// `layer` are appended.
    pub fn overlay(&mut self, layer: &CustomMediaTable) {
        for (name, query) in layer.iter() {
            self.insert(name, query);
        }
    }

    /// Renders the table as `@custom-media` declarations, one per line.
    pub fn to_declarations(&self) -> String {
        self.iter()
            .map(|(name, query)| format!("@custom-media {} {};", name, query))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for CustomMediaTable {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut table = CustomMediaTable::new();
        for (name, query) in iter {
            table.insert(name, query);
        }
        table
    }
}

impl<K: Into<String>, V: Into<String>> Extend<(K, V)> for CustomMediaTable {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (name, query) in iter {
            self.insert(name, query);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_replaces_value_in_place() {
        let mut table = CustomMediaTable::new();
        table.insert("--a", "(width >= 1px)");
        table.insert("--b", "(width >= 2px)");
        table.insert("--a", "(width >= 3px)");

        assert_eq!(table.len(), 2);
        assert_eq!(table.get("--a"), Some("(width >= 3px)"));
        assert_eq!(table.names().collect::<Vec<_>>(), vec!["--a", "--b"]);
    }

    #[test]
    fn test_overlay_later_layer_wins() {
        let mut base = CustomMediaTable::new()
            .with("--sm", "(width >= 36rem)")
            .with("--md", "(width >= 48rem)");
        let layer = CustomMediaTable::new()
            .with("--md", "(width >= 50rem)")
            .with("--tablet", "(width >= 40rem)");

        base.overlay(&layer);

        assert_eq!(base.get("--sm"), Some("(width >= 36rem)"));
        assert_eq!(base.get("--md"), Some("(width >= 50rem)"));
        assert_eq!(base.get("--tablet"), Some("(width >= 40rem)"));
        assert_eq!(
            base.names().collect::<Vec<_>>(),
            vec!["--sm", "--md", "--tablet"]
        );
    }

    #[test]
    fn test_to_declarations() {
        let table = CustomMediaTable::new()
            .with("--sm", "(width >= 36rem)")
            .with("--dark", "(prefers-color-scheme: dark)");

        assert_eq!(
            table.to_declarations(),
            "@custom-media --sm (width >= 36rem);\n@custom-media --dark (prefers-color-scheme: dark);"
        );
    }

    #[test]
    fn test_empty_table_renders_nothing() {
        assert_eq!(CustomMediaTable::new().to_declarations(), "");
    }

    #[test]
    fn test_serde_as_plain_map() {
        let table: CustomMediaTable =
            serde_json::from_str(r#"{"--b": "(width >= 2px)", "--a": "(width >= 1px)"}"#).unwrap();
        assert_eq!(table.names().collect::<Vec<_>>(), vec!["--b", "--a"]);

        let json = serde_json::to_string(&table).unwrap();
        assert_eq!(json, r#"{"--b":"(width >= 2px)","--a":"(width >= 1px)"}"#);
    }

    #[test]
    fn test_from_iterator() {
        let table: CustomMediaTable = vec![("--x", "(x)"), ("--y", "(y)")].into_iter().collect();
        assert!(table.contains("--x"));
        assert!(table.contains("--y"));
        assert!(!table.contains("--z"));
    }
}
