//! Effect resolution - the single place spell numbers hit combatants.
//!
//! Given one [`SpellEffect`], a casting side, and the battle state,
//! the resolver computes the numeric outcome and mutates the target's
//! pools in place, clamped to valid bounds. Difficulty scaling is
//! applied here: damage and healing magnitudes are multiplied by the
//! side-and-difficulty factor from [`CombatTuning`].
//!
//! Duration-bearing effects do not pulse immediately; they are
//! converted into an [`ActiveEffect`] that the tracker re-applies
//! every round. Mana preconditions are checked by the state machine
//! before the resolver is ever invoked.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{CombatTuning, Side};
use crate::spells::{EffectKind, EffectTarget, SpellEffect};

use super::active::{add_active_effect, ActiveEffect};
use super::state::CombatState;

/// Numeric outcome of resolving a single effect, post-clamping.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EffectOutcome {
    pub damage: i64,
    pub healing: i64,
    pub mana_restored: i64,
    pub mana_drained: i64,
    /// Name of the active effect registered, if the effect had a
    /// duration.
    pub registered: Option<String>,
}

impl EffectOutcome {
    /// Fold another outcome into this one (spells with several
    /// effects accumulate a single report for the UI).
    pub fn absorb(&mut self, other: EffectOutcome) {
        self.damage += other.damage;
        self.healing += other.healing;
        self.mana_restored += other.mana_restored;
        self.mana_drained += other.mana_drained;
        if self.registered.is_none() {
            self.registered = other.registered;
        }
    }
}

/// Resolve one effect cast by `caster` onto the battle state.
///
/// `source_name` labels any registered active effect (usually the
/// spell name) for the combat log.
pub fn resolve_effect(
    state: &mut CombatState,
    effect: &SpellEffect,
    caster: Side,
    source_name: &str,
    tuning: &CombatTuning,
) -> EffectOutcome {
    let difficulty = state.difficulty;
    let target_side = match effect.target {
        EffectTarget::Caster => caster,
        EffectTarget::Opponent => caster.opponent(),
    };

    let mut outcome = EffectOutcome::default();

    if let Some(duration) = effect.duration {
        // Scale once at registration so every pulse carries the
        // difficulty-adjusted magnitude.
        let magnitude = match effect.kind {
            EffectKind::Damage | EffectKind::Healing => {
                tuning.scale_magnitude(effect.magnitude, difficulty, caster)
            }
            _ => effect.magnitude,
        };

        let active = ActiveEffect::new(source_name, effect.kind, magnitude, duration, caster);
        debug!(
            effect = source_name,
            kind = ?effect.kind,
            magnitude,
            duration,
            target = %target_side,
            "registering active effect"
        );
        add_active_effect(state.combatant_mut(target_side), active);
        outcome.registered = Some(source_name.to_string());
        return outcome;
    }

    let (caster_state, _) = state.caster_and_opponent(caster);
    let modifier = caster_state.damage_modifier();

    let target = state.combatant_mut(target_side);
    match effect.kind {
        EffectKind::Damage => {
            let scaled = tuning.scale_magnitude(effect.magnitude, difficulty, caster);
            // Stat modifiers adjust outgoing damage but never flip
            // a hit into a heal.
            let amount = (scaled + modifier).max(0);
            outcome.damage = target.apply_damage(amount);
        }
        EffectKind::Healing => {
            let scaled = tuning.scale_magnitude(effect.magnitude, difficulty, caster);
            outcome.healing = target.heal(scaled);
        }
        EffectKind::ManaRestore => {
            outcome.mana_restored = target.restore_mana(effect.magnitude);
        }
        EffectKind::ManaDrain => {
            outcome.mana_drained = target.drain_mana(effect.magnitude);
        }
        EffectKind::StatModifier => {
            // A stat modifier with no duration has nothing to attach
            // to; treat it as lasting one round.
            let active = ActiveEffect::new(source_name, effect.kind, effect.magnitude, 1, caster);
            add_active_effect(target, active);
            outcome.registered = Some(source_name.to_string());
        }
    }

    debug!(
        effect = source_name,
        kind = ?effect.kind,
        target = %target_side,
        damage = outcome.damage,
        healing = outcome.healing,
        "effect resolved"
    );

    outcome
}
