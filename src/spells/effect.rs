//! Spell effect atoms.
//!
//! A spell owns zero or more [`SpellEffect`]s. An effect without a
//! duration applies once, synchronously, during spell execution. An
//! effect with a duration does not pulse immediately: the resolver
//! converts it into an active effect that the tracker re-applies each
//! round until it expires.

use serde::{Deserialize, Serialize};

/// What an effect does to its target.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EffectKind {
    /// Reduce target health. With a duration: damage over time.
    Damage,
    /// Restore target health. With a duration: healing over time.
    Healing,
    /// Restore target mana. With a duration: mana regeneration.
    ManaRestore,
    /// Drain target mana. With a duration: recurring drain.
    ManaDrain,
    /// Adjust the target's outgoing damage while active.
    /// Positive magnitude is a buff, negative a debuff.
    StatModifier,
}

/// Who an effect lands on, relative to the caster.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EffectTarget {
    /// The casting combatant (heals, buffs).
    Caster,
    /// The opposing combatant (damage, debuffs).
    Opponent,
}

/// One atomic effect of a spell.
///
/// Magnitudes are always non-negative; the kind decides direction.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpellEffect {
    pub kind: EffectKind,
    pub target: EffectTarget,
    pub magnitude: i64,
    /// Rounds the effect persists. `None` means a one-shot pulse.
    pub duration: Option<u32>,
}

impl SpellEffect {
    /// Create an effect with no duration.
    #[must_use]
    pub fn instant(kind: EffectKind, target: EffectTarget, magnitude: i64) -> Self {
        Self { kind, target, magnitude, duration: None }
    }

    /// Create a duration-bound effect.
    #[must_use]
    pub fn over_time(kind: EffectKind, target: EffectTarget, magnitude: i64, rounds: u32) -> Self {
        Self { kind, target, magnitude, duration: Some(rounds) }
    }

    /// Immediate damage to the opponent.
    #[must_use]
    pub fn damage(magnitude: i64) -> Self {
        Self::instant(EffectKind::Damage, EffectTarget::Opponent, magnitude)
    }

    /// Immediate self-heal.
    #[must_use]
    pub fn healing(magnitude: i64) -> Self {
        Self::instant(EffectKind::Healing, EffectTarget::Caster, magnitude)
    }

    /// Immediate self mana restore.
    #[must_use]
    pub fn mana_restore(magnitude: i64) -> Self {
        Self::instant(EffectKind::ManaRestore, EffectTarget::Caster, magnitude)
    }

    /// Damage over time on the opponent.
    #[must_use]
    pub fn damage_over_time(magnitude: i64, rounds: u32) -> Self {
        Self::over_time(EffectKind::Damage, EffectTarget::Opponent, magnitude, rounds)
    }

    /// Healing over time on the caster.
    #[must_use]
    pub fn healing_over_time(magnitude: i64, rounds: u32) -> Self {
        Self::over_time(EffectKind::Healing, EffectTarget::Caster, magnitude, rounds)
    }

    /// Outgoing-damage buff on the caster for `rounds`.
    #[must_use]
    pub fn damage_buff(magnitude: i64, rounds: u32) -> Self {
        Self::over_time(EffectKind::StatModifier, EffectTarget::Caster, magnitude, rounds)
    }

    /// Outgoing-damage debuff on the opponent for `rounds`.
    #[must_use]
    pub fn damage_debuff(magnitude: i64, rounds: u32) -> Self {
        Self {
            kind: EffectKind::StatModifier,
            target: EffectTarget::Opponent,
            magnitude: -magnitude,
            duration: Some(rounds),
        }
    }

    /// True if this effect registers as an active effect instead of
    /// pulsing once.
    #[must_use]
    pub fn is_over_time(&self) -> bool {
        self.duration.is_some()
    }
}
