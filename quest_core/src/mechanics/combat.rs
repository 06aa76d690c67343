//! Damage math and combat outcomes.

use serde::{Deserialize, Serialize};

/// Compute attack damage from attacker strength against defender defense.
///
/// Damage is strength scaled by the modifier, reduced by defense, and never
/// negative. A fully absorbed hit resolves to zero, which is a valid
/// no-effect outcome rather than an error.
pub fn physical_damage(strength: i32, modifier: i32, defense: i32) -> i32 {
    strength.saturating_mul(modifier).saturating_sub(defense).max(0)
}

/// The result of one attack resolution.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttackOutcome {
    pub attacker: String,
    pub defender: String,
    /// Damage actually applied, after absorption and any clamping.
    pub damage: i32,
    /// Whether the defender's health reached zero.
    pub lethal: bool,
}

impl std::fmt::Display for AttackOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.damage > 0 {
            write!(
                f,
                "{} dealt {} damage to {}!",
                self.attacker, self.damage, self.defender
            )
        } else {
            write!(f, "{} dealt no damage to {}!", self.attacker, self.defender)
        }
    }
}

/// The result of a heal, reported with the resulting health.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealOutcome {
    pub name: String,
    pub health: i32,
    /// Whether the healed character is allowed past max health.
    pub overheal: bool,
}

impl std::fmt::Display for HealOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.overheal {
            write!(f, "{} now has {} health with overheal!", self.name, self.health)
        } else {
            write!(f, "{} now has {} health!", self.name, self.health)
        }
    }
}
