//! Character inventories.

use serde::{Deserialize, Serialize};

/// An ordered bag of item identifiers. Duplicates are allowed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Inventory {
    items: Vec<String>,
}

impl Inventory {
    /// Create an empty inventory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an item.
    pub fn add(&mut self, item: impl Into<String>) {
        self.items.push(item.into());
    }

    /// Remove the first occurrence of an item.
    ///
    /// Returns false when the item is not held. Absence is an expected
    /// condition, not an error.
    pub fn remove(&mut self, item: &str) -> bool {
        match self.items.iter().position(|held| held == item) {
            Some(index) => {
                self.items.remove(index);
                true
            }
            None => false,
        }
    }

    /// Whether at least one copy of the item is held.
    pub fn contains(&self, item: &str) -> bool {
        self.items.iter().any(|held| held == item)
    }

    /// Items in acquisition order.
    pub fn items(&self) -> &[String] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicates_are_kept() {
        let mut inventory = Inventory::new();
        inventory.add("Potion");
        inventory.add("Potion");
        assert_eq!(inventory.len(), 2);
    }

    #[test]
    fn test_remove_takes_first_occurrence() {
        let mut inventory = Inventory::new();
        inventory.add("Potion");
        inventory.add("Sword");
        inventory.add("Potion");

        assert!(inventory.remove("Potion"));
        assert_eq!(inventory.items(), ["Sword", "Potion"]);
    }

    #[test]
    fn test_remove_absent_is_false() {
        let mut inventory = Inventory::new();
        assert!(!inventory.remove("Potion"));
        assert!(inventory.is_empty());
    }
}
