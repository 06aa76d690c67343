//! Game mechanics: damage math, item effects, and level progression.

mod combat;
mod items;
mod progression;

pub use combat::*;
pub use items::*;
pub use progression::*;
