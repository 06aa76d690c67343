//! Item definitions and the read-only item catalog.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::error::CoreError;

/// The effect descriptor for a single item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemDef {
    /// Item category, for example "consumable".
    #[serde(rename = "type")]
    pub kind: String,
    /// What the item does, for example "healing".
    pub effect: String,
    /// Effect magnitude.
    pub value: i32,
}

/// Item identifier to effect descriptor mapping, consumed read-only.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ItemCatalog {
    items: HashMap<String, ItemDef>,
}

impl ItemCatalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a catalog from a JSON document keyed by item identifier.
    pub fn from_json_str(document: &str) -> Result<Self, CoreError> {
        let items: HashMap<String, ItemDef> = serde_json::from_str(document)?;
        Ok(Self { items })
    }

    /// Register or replace an item definition.
    pub fn insert(&mut self, id: impl Into<String>, def: ItemDef) {
        self.items.insert(id.into(), def);
    }

    /// Look up an item by identifier.
    pub fn get(&self, id: &str) -> Option<&ItemDef> {
        self.items.get(id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl FromIterator<(String, ItemDef)> for ItemCatalog {
    fn from_iter<I: IntoIterator<Item = (String, ItemDef)>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_from_json() {
        let catalog = ItemCatalog::from_json_str(
            r#"{"Potion": {"type": "consumable", "effect": "healing", "value": 20}}"#,
        )
        .unwrap();

        let potion = catalog.get("Potion").unwrap();
        assert_eq!(potion.kind, "consumable");
        assert_eq!(potion.effect, "healing");
        assert_eq!(potion.value, 20);
    }

    #[test]
    fn test_catalog_rejects_malformed_json() {
        let err = ItemCatalog::from_json_str("not json").unwrap_err();
        assert!(matches!(err, CoreError::ItemCatalog(_)));
    }

    #[test]
    fn test_unknown_identifier_is_none() {
        let catalog = ItemCatalog::new();
        assert!(catalog.get("Potion").is_none());
        assert!(catalog.is_empty());
    }
}
