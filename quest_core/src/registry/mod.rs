//! The character registry: a directory of who exists and what kind they are.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::{debug, warn};

use crate::entities::{Character, CharacterKind};

/// Creates characters and tracks registered names by kind.
///
/// The registry stores kinds, not characters. Characters are returned to the
/// caller by value; removing a name from the directory leaves any outstanding
/// character values intact but orphaned. Each game session owns its own
/// registry, so independent sessions never see each other's names.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CharacterRegistry {
    directory: HashMap<String, CharacterKind>,
}

impl CharacterRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create and register a player starting at the given level.
    pub fn create_player(&mut self, name: impl Into<String>, level: u32) -> Character {
        let player = Character::player(name, level);
        self.register(&player);
        player
    }

    /// Create and register an enemy.
    pub fn create_enemy(&mut self, name: impl Into<String>) -> Character {
        let enemy = Character::enemy(name);
        self.register(&enemy);
        enemy
    }

    /// Create and register an NPC with the given role.
    pub fn create_npc(&mut self, name: impl Into<String>, role: impl Into<String>) -> Character {
        let npc = Character::npc(name, role);
        self.register(&npc);
        npc
    }

    // Registration is last-write-wins: a colliding name replaces the
    // previous directory entry.
    fn register(&mut self, character: &Character) {
        let kind = character.kind();
        if let Some(previous) = self.directory.insert(character.name.clone(), kind) {
            warn!(name = %character.name, %previous, %kind, "registry entry overwritten");
        }
        debug!(name = %character.name, %kind, "character registered");
    }

    /// Remove a name from the directory. Removing an absent name is a no-op.
    pub fn remove(&mut self, name: &str) {
        if self.directory.remove(name).is_some() {
            debug!(name, "character removed from registry");
        }
    }

    /// Registered names of the given kind, in directory iteration order.
    ///
    /// The order is not stable across insertions and removals.
    pub fn names_of_kind(&self, kind: CharacterKind) -> Vec<String> {
        self.directory
            .iter()
            .filter(|(_, registered)| **registered == kind)
            .map(|(name, _)| name.clone())
            .collect()
    }

    /// The registered kind for a name, if present.
    pub fn kind_of(&self, name: &str) -> Option<CharacterKind> {
        self.directory.get(name).copied()
    }

    /// Number of registered names.
    pub fn len(&self) -> usize {
        self.directory.len()
    }

    pub fn is_empty(&self) -> bool {
        self.directory.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_registers_by_kind() {
        let mut registry = CharacterRegistry::new();
        registry.create_player("Ava", 1);
        registry.create_enemy("Grub");
        registry.create_npc("Mira", "Blacksmith");

        assert_eq!(registry.len(), 3);
        assert_eq!(registry.names_of_kind(CharacterKind::Player), vec!["Ava"]);
        assert_eq!(registry.names_of_kind(CharacterKind::Enemy), vec!["Grub"]);
        assert_eq!(registry.kind_of("Mira"), Some(CharacterKind::Npc));
    }

    #[test]
    fn test_remove_then_list_excludes_name() {
        let mut registry = CharacterRegistry::new();
        registry.create_player("Ava", 1);

        registry.remove("Ava");
        assert!(registry.names_of_kind(CharacterKind::Player).is_empty());

        // removing an absent name is fine
        registry.remove("Ava");
        assert!(registry.is_empty());
    }

    #[test]
    fn test_colliding_name_is_last_write_wins() {
        let mut registry = CharacterRegistry::new();
        registry.create_player("Ava", 1);
        registry.create_enemy("Ava");

        assert_eq!(registry.len(), 1);
        assert_eq!(registry.kind_of("Ava"), Some(CharacterKind::Enemy));
    }

    #[test]
    fn test_created_characters_outlive_removal() {
        let mut registry = CharacterRegistry::new();
        let ava = registry.create_player("Ava", 1);

        registry.remove("Ava");
        assert!(ava.is_alive());
        assert_eq!(registry.kind_of("Ava"), None);
    }
}
