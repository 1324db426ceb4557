//! Active effect tracking.
//!
//! Duration-bound effects (burns, regeneration, buffs) attach to a
//! combatant as [`ActiveEffect`]s when the spell that carries them
//! resolves. Once per round boundary the tracker pulses every
//! recurring effect, decrements remaining durations, and removes
//! anything that ran out. The pulse happens before the decrement, so
//! an effect's magnitude is realized on the round its duration
//! reaches zero and it is removed afterwards.
//!
//! Remaining duration is monotonically non-increasing; the
//! orchestration layer must call the decrement exactly once per round
//! per combatant.

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::core::Side;
use crate::spells::EffectKind;

use super::combatant::Combatant;

/// A duration-bound effect attached to a combatant.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActiveEffect {
    /// Display name, usually the originating spell's.
    pub name: String,
    pub kind: EffectKind,
    /// Per-round magnitude for recurring kinds; modifier strength
    /// for stat modifiers.
    pub magnitude: i64,
    /// Duration the effect started with.
    pub total_duration: u32,
    /// Rounds left, including the current one.
    pub remaining: u32,
    /// Side that cast the originating spell.
    pub source: Side,
}

impl ActiveEffect {
    /// Create an active effect with full duration remaining.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        kind: EffectKind,
        magnitude: i64,
        duration: u32,
        source: Side,
    ) -> Self {
        Self {
            name: name.into(),
            kind,
            magnitude,
            total_duration: duration,
            remaining: duration,
            source,
        }
    }

    /// True once the duration has run out.
    #[must_use]
    pub fn is_expired(&self) -> bool {
        self.remaining == 0
    }
}

/// One recurring pulse applied to a combatant.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EffectPulse {
    pub effect: String,
    pub kind: EffectKind,
    /// Amount actually applied after clamping.
    pub amount: i64,
}

/// Attach an active effect to a combatant.
pub fn add_active_effect(combatant: &mut Combatant, effect: ActiveEffect) {
    trace!(effect = %effect.name, remaining = effect.remaining, "active effect attached");
    combatant.active_effects.push(effect);
}

/// Pulse every recurring effect on a combatant once.
///
/// Stat modifiers do not pulse; they apply passively through
/// [`Combatant::damage_modifier`]. Returns what was applied, post
/// clamping, for the combat log.
pub fn apply_active_effects(combatant: &mut Combatant) -> Vec<EffectPulse> {
    let mut pulses = Vec::new();

    // Snapshot to avoid borrowing active_effects while mutating pools
    let recurring: Vec<(String, EffectKind, i64)> = combatant
        .active_effects
        .iter()
        .filter(|e| e.kind != EffectKind::StatModifier)
        .map(|e| (e.name.clone(), e.kind, e.magnitude))
        .collect();

    for (name, kind, magnitude) in recurring {
        let amount = match kind {
            EffectKind::Damage => combatant.apply_damage(magnitude),
            EffectKind::Healing => combatant.heal(magnitude),
            EffectKind::ManaRestore => combatant.restore_mana(magnitude),
            EffectKind::ManaDrain => combatant.drain_mana(magnitude),
            EffectKind::StatModifier => unreachable!("stat modifiers filtered above"),
        };
        trace!(effect = %name, ?kind, amount, "active effect pulsed");
        pulses.push(EffectPulse { effect: name, kind, amount });
    }

    pulses
}

/// Decrement every active effect's remaining duration by one round.
///
/// Call exactly once per round boundary per combatant. Effects at
/// zero stay in the list until [`check_active_effects`] removes them.
pub fn decrement_active_effects(combatant: &mut Combatant) {
    for effect in combatant.active_effects.iter_mut() {
        effect.remaining = effect.remaining.saturating_sub(1);
    }
}

/// Remove expired effects, returning the names of what was removed.
pub fn check_active_effects(combatant: &mut Combatant) -> Vec<String> {
    let mut expired = Vec::new();
    combatant.active_effects.retain(|e| {
        if e.is_expired() {
            expired.push(e.name.clone());
            false
        } else {
            true
        }
    });
    for name in &expired {
        trace!(effect = %name, "active effect expired");
    }
    expired
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combat::combatant::Combatant;

    fn combatant() -> Combatant {
        Combatant::new("Test Wizard", 100, 100, 10)
    }

    fn burn(rounds: u32) -> ActiveEffect {
        ActiveEffect::new("Burn", EffectKind::Damage, 5, rounds, Side::Player)
    }

    #[test]
    fn test_apply_pulses_recurring_damage() {
        let mut target = combatant();
        add_active_effect(&mut target, burn(3));

        let pulses = apply_active_effects(&mut target);

        assert_eq!(target.health, 95);
        assert_eq!(pulses.len(), 1);
        assert_eq!(pulses[0].amount, 5);
    }

    #[test]
    fn test_stat_modifier_does_not_pulse() {
        let mut target = combatant();
        add_active_effect(
            &mut target,
            ActiveEffect::new("Focus", EffectKind::StatModifier, 5, 3, Side::Player),
        );

        let pulses = apply_active_effects(&mut target);

        assert!(pulses.is_empty());
        assert_eq!(target.health, 100);
    }

    #[test]
    fn test_duration_three_survives_three_decrements() {
        let mut target = combatant();
        add_active_effect(&mut target, burn(3));

        for round in 0..3 {
            apply_active_effects(&mut target);
            decrement_active_effects(&mut target);
            if round < 2 {
                assert!(check_active_effects(&mut target).is_empty());
                assert_eq!(target.active_effects.len(), 1);
            }
        }

        // Third decrement brought it to zero; the fourth check removes it
        let expired = check_active_effects(&mut target);
        assert_eq!(expired, vec!["Burn".to_string()]);
        assert!(target.active_effects.is_empty());

        // Magnitude was realized on all three rounds, including the last
        assert_eq!(target.health, 85);
    }

    #[test]
    fn test_decrement_is_monotonic_and_saturating() {
        let mut target = combatant();
        add_active_effect(&mut target, burn(1));

        decrement_active_effects(&mut target);
        assert_eq!(target.active_effects[0].remaining, 0);

        decrement_active_effects(&mut target);
        assert_eq!(target.active_effects[0].remaining, 0);
    }

    #[test]
    fn test_healing_pulse_clamps_at_max() {
        let mut target = combatant();
        target.health = 98;
        add_active_effect(
            &mut target,
            ActiveEffect::new("Mend", EffectKind::Healing, 6, 2, Side::Player),
        );

        let pulses = apply_active_effects(&mut target);

        assert_eq!(target.health, 100);
        assert_eq!(pulses[0].amount, 2); // post-clamp
    }

    #[test]
    fn test_mana_drain_pulse() {
        let mut target = combatant();
        add_active_effect(
            &mut target,
            ActiveEffect::new("Siphon", EffectKind::ManaDrain, 8, 2, Side::Enemy),
        );

        apply_active_effects(&mut target);
        assert_eq!(target.mana, 92);
    }

    #[test]
    fn test_multiple_effects_all_pulse() {
        let mut target = combatant();
        add_active_effect(&mut target, burn(2));
        add_active_effect(
            &mut target,
            ActiveEffect::new("Mend", EffectKind::Healing, 3, 2, Side::Player),
        );

        let pulses = apply_active_effects(&mut target);

        assert_eq!(pulses.len(), 2);
        assert_eq!(target.health, 98); // -5 + 3
    }
}
