//! Experience thresholds and level progression.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::error::CoreError;

/// Experience awarded for defeating a standard enemy. Awarding it is the
/// host game loop's job; the core only reports the value.
pub const ENEMY_XP_YIELD: i64 = 100;

// Stat growth applied for each level gained.
pub const HEALTH_PER_LEVEL: i32 = 10;
pub const DEFENSE_PER_LEVEL: i32 = 5;
pub const STRENGTH_PER_LEVEL: i32 = 5;
pub const STAMINA_PER_LEVEL: i32 = 10;

/// A player's level and banked experience.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Progression {
    pub level: u32,
    pub xp: i64,
}

impl Progression {
    /// Start at the given level with no banked experience.
    pub fn at_level(level: u32) -> Self {
        Self { level, xp: 0 }
    }
}

impl Default for Progression {
    fn default() -> Self {
        Self::at_level(1)
    }
}

/// Target level to required experience mapping, consumed read-only.
///
/// A level with no entry terminates level-up cascades.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LevelTable {
    thresholds: HashMap<u32, i64>,
}

impl LevelTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a `[levels]` table mapping level numbers to required experience.
    pub fn from_toml_str(document: &str) -> Result<Self, CoreError> {
        #[derive(Deserialize)]
        struct Document {
            levels: HashMap<String, i64>,
        }

        let document: Document = toml::from_str(document)?;
        let mut table = Self::new();
        for (key, required) in document.levels {
            let level = key
                .parse::<u32>()
                .map_err(|_| CoreError::InvalidLevelKey(key.clone()))?;
            table.insert(level, required);
        }
        Ok(table)
    }

    /// Register or replace the requirement for reaching a level.
    pub fn insert(&mut self, level: u32, required_xp: i64) {
        self.thresholds.insert(level, required_xp);
    }

    /// Experience required to reach a level, if the level is defined.
    pub fn requirement(&self, level: u32) -> Option<i64> {
        self.thresholds.get(&level).copied()
    }

    pub fn len(&self) -> usize {
        self.thresholds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.thresholds.is_empty()
    }
}

impl FromIterator<(u32, i64)> for LevelTable {
    fn from_iter<I: IntoIterator<Item = (u32, i64)>>(iter: I) -> Self {
        Self {
            thresholds: iter.into_iter().collect(),
        }
    }
}
