//! Spell system: effect atoms, immutable definitions, and the
//! registry that maps ids back to definitions.

pub mod definition;
pub mod effect;
pub mod registry;

pub use definition::{Element, Spell, SpellId, SpellType};
pub use effect::{EffectKind, EffectTarget, SpellEffect};
pub use registry::{standard_spells, SpellRegistry};
