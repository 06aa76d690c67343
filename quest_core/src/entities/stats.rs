//! Stat blocks and named stat lookup.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Numeric combat stats shared by every character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatBlock {
    pub max_health: i32,
    pub health: i32,
    pub defense: i32,
    pub strength: i32,
    pub stamina: i32,
    pub gold: i32,
}

impl Default for StatBlock {
    fn default() -> Self {
        Self {
            max_health: 100,
            health: 100,
            defense: 5,
            strength: 10,
            stamina: 100,
            gold: 5,
        }
    }
}

impl StatBlock {
    /// Look up a stat by kind.
    pub fn get(&self, stat: StatKind) -> i32 {
        match stat {
            StatKind::Health => self.health,
            StatKind::MaxHealth => self.max_health,
            StatKind::Defense => self.defense,
            StatKind::Strength => self.strength,
            StatKind::Stamina => self.stamina,
            StatKind::Gold => self.gold,
        }
    }
}

/// The closed set of stat names exposed for lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StatKind {
    Health,
    MaxHealth,
    Defense,
    Strength,
    Stamina,
    Gold,
}

impl StatKind {
    /// Get all stat kinds.
    pub fn all() -> &'static [StatKind] {
        &[
            StatKind::Health,
            StatKind::MaxHealth,
            StatKind::Defense,
            StatKind::Strength,
            StatKind::Stamina,
            StatKind::Gold,
        ]
    }
}

impl FromStr for StatKind {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "health" | "hp" => Ok(StatKind::Health),
            "maxhealth" | "max_health" => Ok(StatKind::MaxHealth),
            "defense" => Ok(StatKind::Defense),
            "strength" => Ok(StatKind::Strength),
            "stamina" => Ok(StatKind::Stamina),
            "gold" => Ok(StatKind::Gold),
            _ => Err(()),
        }
    }
}

impl std::fmt::Display for StatKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            StatKind::Health => "health",
            StatKind::MaxHealth => "max_health",
            StatKind::Defense => "defense",
            StatKind::Strength => "strength",
            StatKind::Stamina => "stamina",
            StatKind::Gold => "gold",
        };
        write!(f, "{}", s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_stats() {
        let stats = StatBlock::default();
        assert_eq!(stats.max_health, 100);
        assert_eq!(stats.health, 100);
        assert_eq!(stats.defense, 5);
        assert_eq!(stats.strength, 10);
        assert_eq!(stats.stamina, 100);
        assert_eq!(stats.gold, 5);
    }

    #[test]
    fn test_get_covers_every_kind() {
        let stats = StatBlock {
            max_health: 1,
            health: 2,
            defense: 3,
            strength: 4,
            stamina: 5,
            gold: 6,
        };

        let values: Vec<i32> = StatKind::all().iter().map(|kind| stats.get(*kind)).collect();
        assert_eq!(values, vec![2, 1, 3, 4, 5, 6]);
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("STRENGTH".parse::<StatKind>(), Ok(StatKind::Strength));
        assert_eq!("maxHealth".parse::<StatKind>(), Ok(StatKind::MaxHealth));
        assert_eq!("max_health".parse::<StatKind>(), Ok(StatKind::MaxHealth));
        assert_eq!("hp".parse::<StatKind>(), Ok(StatKind::Health));
    }

    #[test]
    fn test_parse_unknown_fails() {
        assert!("luck".parse::<StatKind>().is_err());
        assert!("".parse::<StatKind>().is_err());
    }
}
