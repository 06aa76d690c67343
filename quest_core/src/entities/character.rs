//! Character definitions and combat behavior.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use uuid::Uuid;

use super::{Inventory, StatBlock, StatKind};
use crate::error::CoreError;
use crate::mechanics::{
    physical_damage, AttackOutcome, HealOutcome, ItemCatalog, LevelTable, Progression,
    DEFENSE_PER_LEVEL, ENEMY_XP_YIELD, HEALTH_PER_LEVEL, STAMINA_PER_LEVEL, STRENGTH_PER_LEVEL,
};

/// Default role for newly created NPCs.
pub const DEFAULT_NPC_ROLE: &str = "Villager";

/// Unique identifier for characters.
///
/// Registry lookups go by name; the id distinguishes characters that share a
/// display name outside any registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CharacterId(pub Uuid);

impl CharacterId {
    /// Create a new random character ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Create a nil/empty character ID (useful for defaults).
    pub fn nil() -> Self {
        Self(Uuid::nil())
    }
}

impl Default for CharacterId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for CharacterId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The broad kinds of character the registry tracks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CharacterKind {
    Player,
    Enemy,
    Npc,
}

impl std::fmt::Display for CharacterKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            CharacterKind::Player => "Player",
            CharacterKind::Enemy => "Enemy",
            CharacterKind::Npc => "NPC",
        };
        write!(f, "{}", s)
    }
}

/// Kind-specific data carried by a character.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum CharacterClass {
    /// A player character with level progression.
    Player(Progression),
    /// A hostile character worth experience when defeated.
    Enemy { xp_yield: i64 },
    /// A friendly character with a free-form role.
    Npc { role: String },
}

impl CharacterClass {
    /// The registry kind for this class.
    pub fn kind(&self) -> CharacterKind {
        match self {
            CharacterClass::Player(_) => CharacterKind::Player,
            CharacterClass::Enemy { .. } => CharacterKind::Enemy,
            CharacterClass::Npc { .. } => CharacterKind::Npc,
        }
    }
}

/// A character with combat stats, an inventory, and kind-specific data.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Character {
    pub id: CharacterId,
    pub name: String,
    pub stats: StatBlock,
    pub inventory: Inventory,
    /// True iff health is above zero. Maintained by every health mutation.
    pub alive: bool,
    /// Permission for health to exceed max_health when healing.
    pub overheal: bool,
    pub class: CharacterClass,
}

impl Character {
    fn with_class(name: impl Into<String>, class: CharacterClass, overheal: bool) -> Self {
        Self {
            id: CharacterId::new(),
            name: name.into(),
            stats: StatBlock::default(),
            inventory: Inventory::new(),
            alive: true,
            overheal,
            class,
        }
    }

    /// Create a player character starting at the given level.
    pub fn player(name: impl Into<String>, level: u32) -> Self {
        Self::with_class(
            name,
            CharacterClass::Player(Progression::at_level(level)),
            false,
        )
    }

    /// Create an enemy. Enemies may heal past max health.
    pub fn enemy(name: impl Into<String>) -> Self {
        Self::with_class(
            name,
            CharacterClass::Enemy {
                xp_yield: ENEMY_XP_YIELD,
            },
            true,
        )
    }

    /// Create an NPC with the given role.
    pub fn npc(name: impl Into<String>, role: impl Into<String>) -> Self {
        Self::with_class(name, CharacterClass::Npc { role: role.into() }, false)
    }

    /// The registry kind for this character.
    pub fn kind(&self) -> CharacterKind {
        self.class.kind()
    }

    /// Whether health is above zero.
    pub fn is_alive(&self) -> bool {
        self.alive
    }

    /// Recompute the alive flag from current health.
    pub fn refresh_alive(&mut self) {
        self.alive = self.stats.health > 0;
    }

    /// The NPC role, if this character is an NPC.
    pub fn role(&self) -> Option<&str> {
        match &self.class {
            CharacterClass::Npc { role } => Some(role),
            _ => None,
        }
    }

    /// Experience awarded for defeating this character, if any.
    pub fn xp_yield(&self) -> Option<i64> {
        match self.class {
            CharacterClass::Enemy { xp_yield } => Some(xp_yield),
            _ => None,
        }
    }

    /// Level progression, if this character is a player.
    pub fn progression(&self) -> Option<&Progression> {
        match &self.class {
            CharacterClass::Player(progression) => Some(progression),
            _ => None,
        }
    }

    /// Look up a stat by name, case-insensitively.
    pub fn stat(&self, name: &str) -> Result<i32, CoreError> {
        let kind: StatKind = name
            .parse()
            .map_err(|_| CoreError::UnknownStat(name.to_string()))?;
        Ok(self.stats.get(kind))
    }

    /// Strike a target.
    ///
    /// Damage is the attacker's strength scaled by the modifier, reduced by
    /// the target's defense, and never negative. The target's health is
    /// clamped at zero and its alive flag re-evaluated.
    pub fn attack(&self, target: &mut Character, modifier: i32) -> AttackOutcome {
        let damage = physical_damage(self.stats.strength, modifier, target.stats.defense);
        target.stats.health = (target.stats.health - damage).max(0);
        target.refresh_alive();

        debug!(
            attacker = %self.name,
            defender = %target.name,
            damage,
            defender_health = target.stats.health,
            "attack resolved"
        );

        AttackOutcome {
            attacker: self.name.clone(),
            defender: target.name.clone(),
            damage,
            lethal: !target.alive,
        }
    }

    /// Suffer a hit that cannot kill.
    ///
    /// Meant for attrition effects such as damage over time: if the
    /// reduction would bring health to zero or below, the damage is forced
    /// to zero and health is left unchanged.
    pub fn take_hit(&mut self, attacker: &Character, modifier: i32) -> AttackOutcome {
        let mut damage = physical_damage(attacker.stats.strength, modifier, self.stats.defense);
        if self.stats.health - damage <= 0 {
            damage = 0;
        }
        self.stats.health -= damage;
        self.refresh_alive();

        debug!(
            attacker = %attacker.name,
            defender = %self.name,
            damage,
            defender_health = self.stats.health,
            "non-lethal hit resolved"
        );

        AttackOutcome {
            attacker: attacker.name.clone(),
            defender: self.name.clone(),
            damage,
            lethal: false,
        }
    }

    /// Restore health.
    ///
    /// Clamps to max health unless this character may overheal. The alive
    /// flag is re-evaluated, so healing a downed character revives it.
    pub fn heal(&mut self, amount: i32) -> HealOutcome {
        self.stats.health = self.stats.health.saturating_add(amount);
        if !self.overheal {
            self.stats.health = self.stats.health.min(self.stats.max_health);
        }
        self.refresh_alive();

        debug!(name = %self.name, health = self.stats.health, "healed");

        HealOutcome {
            name: self.name.clone(),
            health: self.stats.health,
            overheal: self.overheal,
        }
    }

    /// Add an item to the inventory. Duplicates are allowed.
    pub fn add_item(&mut self, item: impl Into<String>) {
        self.inventory.add(item);
    }

    /// Remove the first held copy of an item. Returns false when absent.
    pub fn remove_item(&mut self, item: &str) -> bool {
        self.inventory.remove(item)
    }

    /// Use a held item, resolving its effect through the catalog.
    ///
    /// Only consumable healing items are usable. The item stays in the
    /// inventory; consumption policy belongs to the host game loop.
    pub fn use_item(
        &mut self,
        item: &str,
        catalog: &ItemCatalog,
    ) -> Result<HealOutcome, CoreError> {
        if !self.inventory.contains(item) {
            return Err(CoreError::ItemNotHeld {
                item: item.to_string(),
                owner: self.name.clone(),
            });
        }

        let def = catalog
            .get(item)
            .ok_or_else(|| CoreError::UnknownItem(item.to_string()))?;

        match (def.kind.as_str(), def.effect.as_str()) {
            ("consumable", "healing") => Ok(self.heal(def.value)),
            _ => Err(CoreError::UnsupportedEffect {
                item: item.to_string(),
                kind: def.kind.clone(),
                effect: def.effect.clone(),
            }),
        }
    }

    /// Award experience and apply any level-ups it unlocks.
    ///
    /// Levels cascade from a single award: each satisfied threshold consumes
    /// its experience cost, raises the level, and grows the stat block,
    /// until the next level is undefined or unaffordable. Returns the number
    /// of levels gained. Non-players gain nothing.
    pub fn grant_xp(&mut self, amount: i64, table: &LevelTable) -> u32 {
        let CharacterClass::Player(progression) = &mut self.class else {
            return 0;
        };

        progression.xp += amount;

        let mut gained = 0;
        while let Some(required) = table.requirement(progression.level + 1) {
            if progression.xp < required {
                break;
            }
            progression.xp -= required;
            progression.level += 1;
            gained += 1;

            self.stats.max_health += HEALTH_PER_LEVEL;
            self.stats.health = self.stats.max_health;
            self.stats.defense += DEFENSE_PER_LEVEL;
            self.stats.strength += STRENGTH_PER_LEVEL;
            self.stats.stamina += STAMINA_PER_LEVEL;

            info!(name = %self.name, level = progression.level, "leveled up");
        }

        gained
    }
}
