//! Combatants - one side's live battle state.
//!
//! A [`Combatant`] is created from a persistent [`WizardRecord`] at
//! battle start and discarded at battle end; the persistent record is
//! updated separately by whoever owns it. Health and mana are always
//! clamped to `[0, max]` - the clamped mutators here are the only way
//! combat code touches those pools.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::spells::{EffectKind, SpellId};

use super::active::ActiveEffect;

/// Persistent wizard or enemy record, seeded from outside the engine.
///
/// Carries the maxima and the deck list; everything else about a
/// wizard (equipment, progression) is external collaborators'
/// business and arrives pre-folded into these numbers.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WizardRecord {
    pub name: String,
    pub max_health: i64,
    pub max_mana: i64,
    /// Mana regained at each end-of-round.
    pub mana_regen: i64,
    /// Spell ids making up the draw pile.
    pub deck: Vec<SpellId>,
}

impl WizardRecord {
    /// Create a record with the given pools and deck.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        max_health: i64,
        max_mana: i64,
        mana_regen: i64,
        deck: Vec<SpellId>,
    ) -> Self {
        Self {
            name: name.into(),
            max_health,
            max_mana,
            mana_regen,
            deck,
        }
    }
}

/// One side's live battle state.
///
/// Owned exclusively by the `CombatState` for the lifetime of one
/// battle.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Combatant {
    pub name: String,
    pub health: i64,
    pub max_health: i64,
    pub mana: i64,
    pub max_mana: i64,
    pub mana_regen: i64,
    /// Duration-bound effects currently attached.
    pub active_effects: SmallVec<[ActiveEffect; 4]>,
    /// Spells currently castable.
    pub hand: SmallVec<[SpellId; 4]>,
    /// Face-down draw pile; top is the end of the vec.
    pub draw_pile: Vec<SpellId>,
    /// Cast spells waiting to be reshuffled.
    pub discard_pile: Vec<SpellId>,
}

impl Combatant {
    /// Create a combatant at full health and mana with empty piles.
    #[must_use]
    pub fn new(name: impl Into<String>, max_health: i64, max_mana: i64, mana_regen: i64) -> Self {
        Self {
            name: name.into(),
            health: max_health,
            max_health,
            mana: max_mana,
            max_mana,
            mana_regen,
            active_effects: SmallVec::new(),
            hand: SmallVec::new(),
            draw_pile: Vec::new(),
            discard_pile: Vec::new(),
        }
    }

    /// Seed a combatant from a persistent record.
    ///
    /// The deck arrives unshuffled; `initialize_combat` shuffles it.
    #[must_use]
    pub fn from_record(record: &WizardRecord) -> Self {
        let mut combatant = Self::new(
            record.name.clone(),
            record.max_health,
            record.max_mana,
            record.mana_regen,
        );
        combatant.draw_pile = record.deck.clone();
        combatant
    }

    // === Clamped pool mutators ===

    /// Deal damage, clamped at zero. Returns the amount actually lost.
    pub fn apply_damage(&mut self, amount: i64) -> i64 {
        let before = self.health;
        self.health = (self.health - amount.max(0)).max(0);
        before - self.health
    }

    /// Heal, clamped at max. Returns the amount actually gained.
    pub fn heal(&mut self, amount: i64) -> i64 {
        let before = self.health;
        self.health = (self.health + amount.max(0)).min(self.max_health);
        self.health - before
    }

    /// Restore mana, clamped at max. Returns the amount actually gained.
    pub fn restore_mana(&mut self, amount: i64) -> i64 {
        let before = self.mana;
        self.mana = (self.mana + amount.max(0)).min(self.max_mana);
        self.mana - before
    }

    /// Drain mana, clamped at zero. Returns the amount actually lost.
    pub fn drain_mana(&mut self, amount: i64) -> i64 {
        let before = self.mana;
        self.mana = (self.mana - amount.max(0)).max(0);
        before - self.mana
    }

    /// Pay a casting cost. Fails without mutating when unaffordable.
    pub fn spend_mana(&mut self, cost: i64) -> bool {
        if self.mana < cost {
            return false;
        }
        self.mana -= cost;
        true
    }

    // === Derived state ===

    /// Health as a fraction of max, in `[0, 1]`.
    #[must_use]
    pub fn health_fraction(&self) -> f64 {
        if self.max_health <= 0 {
            return 0.0;
        }
        self.health as f64 / self.max_health as f64
    }

    /// Mana as a fraction of max, in `[0, 1]`.
    #[must_use]
    pub fn mana_fraction(&self) -> f64 {
        if self.max_mana <= 0 {
            return 0.0;
        }
        self.mana as f64 / self.max_mana as f64
    }

    /// True once health has reached zero.
    #[must_use]
    pub fn is_defeated(&self) -> bool {
        self.health == 0
    }

    /// Net outgoing-damage adjustment from active stat modifiers.
    #[must_use]
    pub fn damage_modifier(&self) -> i64 {
        self.active_effects
            .iter()
            .filter(|e| e.kind == EffectKind::StatModifier)
            .map(|e| e.magnitude)
            .sum()
    }

    /// Whether the combatant can afford a mana cost right now.
    #[must_use]
    pub fn can_afford(&self, cost: i64) -> bool {
        self.mana >= cost
    }
}
