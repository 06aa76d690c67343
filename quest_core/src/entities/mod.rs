//! Character state: stats, inventories, and the characters themselves.

mod character;
mod inventory;
mod stats;

pub use character::*;
pub use inventory::*;
pub use stats::*;
