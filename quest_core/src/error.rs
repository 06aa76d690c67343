//! Error types for the core rules crate.

use thiserror::Error;

/// Errors produced by character, item, and progression operations.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A stat name did not match any known stat.
    #[error("unknown stat `{0}`")]
    UnknownStat(String),

    /// The character does not hold the requested item.
    #[error("`{item}` is not in {owner}'s inventory")]
    ItemNotHeld { item: String, owner: String },

    /// The item catalog has no entry for the identifier.
    #[error("item `{0}` is not defined in the catalog")]
    UnknownItem(String),

    /// The catalog entry exists but its type and effect pair is not usable.
    #[error("item `{item}` has no usable effect ({kind}/{effect})")]
    UnsupportedEffect {
        item: String,
        kind: String,
        effect: String,
    },

    /// The item catalog document could not be parsed.
    #[error("failed to parse item catalog: {0}")]
    ItemCatalog(#[from] serde_json::Error),

    /// The level table document could not be parsed.
    #[error("failed to parse level table: {0}")]
    LevelTable(#[from] toml::de::Error),

    /// A level table key was not a positive integer.
    #[error("level key `{0}` must be a positive integer")]
    InvalidLevelKey(String),
}
