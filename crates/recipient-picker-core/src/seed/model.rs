//! Seed record model.

use serde::{Deserialize, Serialize};

/// One startup record: an address and whether it starts out selected.
///
/// Serialized as `{ "email": ..., "isSelected": ... }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeedEntry {
    /// Email address.
    pub email: String,
    /// Whether the address starts in the selected set.
    #[serde(default)]
    pub is_selected: bool,
}

impl SeedEntry {
    /// Creates an entry that starts in the available pool.
    #[must_use]
    pub fn available(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            is_selected: false,
        }
    }

    /// Creates an entry that starts in the selected set.
    #[must_use]
    pub fn selected(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            is_selected: true,
        }
    }
}

/// Returns the built-in seed used when no seed file exists.
#[must_use]
pub fn default_seed() -> Vec<SeedEntry> {
    vec![
        SeedEntry::available("ann@timescale.com"),
        SeedEntry::available("bob@timescale.com"),
        SeedEntry::selected("brian@qwerty.com"),
        SeedEntry::available("james@qwerty.com"),
        SeedEntry::available("jane@awesome.com"),
        SeedEntry::selected("kate@qwerty.com"),
        SeedEntry::selected("mike@hello.com"),
    ]
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_camel_case() {
        let entry: SeedEntry =
            serde_json::from_str(r#"{"email":"ann@timescale.com","isSelected":true}"#).unwrap();
        assert_eq!(entry, SeedEntry::selected("ann@timescale.com"));
    }

    #[test]
    fn test_is_selected_defaults_to_false() {
        let entry: SeedEntry = serde_json::from_str(r#"{"email":"ann@timescale.com"}"#).unwrap();
        assert!(!entry.is_selected);
    }

    #[test]
    fn test_default_seed() {
        let seed = default_seed();
        assert_eq!(seed.len(), 7);
        assert_eq!(seed.iter().filter(|e| e.is_selected).count(), 3);
    }
}
