//! Combat system: combatants, deck cycling, active effects, the
//! effect resolver, and the duel state machine that sequences them.

pub mod active;
pub mod combatant;
pub mod deck;
pub mod engine;
pub mod resolver;
pub mod state;

pub use active::{
    add_active_effect, apply_active_effects, check_active_effects, decrement_active_effects,
    ActiveEffect, EffectPulse,
};
pub use combatant::{Combatant, WizardRecord};
pub use deck::{discard_spell, draw_spells, top_up_hand};
pub use engine::{CastError, DuelEngine, SpellOutcome};
pub use resolver::{resolve_effect, EffectOutcome};
pub use state::{BattleStatus, CombatState};
