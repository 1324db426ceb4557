//! # wizard-duel
//!
//! Turn-based combat resolution engine for a wizard dueling game.
//!
//! ## Design Principles
//!
//! 1. **Deterministic**: Every battle runs off one seeded RNG.
//!    Same seed, same records, same decisions, same outcome.
//!
//! 2. **Presentation-Agnostic**: The engine mutates state and emits a
//!    structured [`core::CombatLog`]; rendering, timing, and input
//!    belong to the caller.
//!
//! 3. **Tuning Over Magic Numbers**: Difficulty scaling, hand size,
//!    and AI thresholds live in [`core::CombatTuning`] and
//!    [`ai::StrategyTuning`], not in the control flow.
//!
//! ## Architecture
//!
//! A battle is a [`combat::CombatState`] driven by a
//! [`combat::DuelEngine`]. Each round the player acts, the
//! [`ai::AiEngine`] picks the enemy response from difficulty-weighted
//! strategies, and end-of-round upkeep ticks active effects, checks
//! for a winner, regenerates mana, and refills both hands from their
//! cycling decks.
//!
//! ## Modules
//!
//! - `core`: RNG, sides, difficulty tuning, combat log
//! - `spells`: Effect atoms, spell definitions, spell registry
//! - `combat`: Combatants, deck cycling, active effects, effect
//!   resolution, the duel state machine
//! - `ai`: Strategy weights, battle memory, spell selection

pub mod ai;
pub mod combat;
pub mod core;
pub mod spells;

// Re-export commonly used types
pub use crate::core::{
    CombatLog, CombatTuning, Difficulty, DuelRng, LogEntry, LogEvent, Side,
};

pub use crate::spells::{
    standard_spells, EffectKind, EffectTarget, Element, Spell, SpellEffect, SpellId, SpellRegistry,
    SpellType,
};

pub use crate::combat::{
    ActiveEffect, BattleStatus, CastError, CombatState, Combatant, DuelEngine, EffectOutcome,
    SpellOutcome, WizardRecord,
};

pub use crate::ai::{AiEngine, AiMemory, PlayerProfile, Strategy, StrategyTuning, StrategyWeights};
