//! Spell definitions - static spell data.
//!
//! A [`Spell`] holds the immutable properties of a spell: its type,
//! element, mana cost, and effect list. The combat engine never
//! mutates a definition; it only produces effect outcomes from it.
//! Per-battle state (active effects, hand position) lives on the
//! combatant instead.

use serde::{Deserialize, Serialize};

use super::effect::{EffectKind, SpellEffect};

/// Unique identifier for a spell definition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SpellId(pub u32);

impl SpellId {
    /// Create a new spell ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for SpellId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Spell({})", self.0)
    }
}

/// Broad spell category.
///
/// The AI's adaptive strategy classifies an opponent by which
/// categories they lean on: attack/debuff reads as offensive play,
/// healing/buff as defensive.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpellType {
    Attack,
    Healing,
    Buff,
    Debuff,
    Reaction,
}

impl SpellType {
    /// True for categories that read as aggressive play.
    #[must_use]
    pub const fn is_offensive(self) -> bool {
        matches!(self, SpellType::Attack | SpellType::Debuff)
    }

    /// True for categories that read as protective play.
    #[must_use]
    pub const fn is_defensive(self) -> bool {
        matches!(self, SpellType::Healing | SpellType::Buff)
    }
}

/// Elemental affinity. Flavor data for the presentation layer; the
/// engine carries it but does not branch on it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Element {
    Fire,
    Water,
    Earth,
    Air,
    Arcane,
    Shadow,
}

/// Immutable spell definition.
///
/// ## Example
///
/// ```
/// use wizard_duel::spells::{Spell, SpellId, SpellType, Element, SpellEffect};
///
/// let fireball = Spell::new(SpellId::new(1), "Fireball", SpellType::Attack, Element::Fire)
///     .with_cost(15)
///     .with_effect(SpellEffect::damage(20));
///
/// assert_eq!(fireball.total_damage(), 20);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Spell {
    pub id: SpellId,
    pub name: String,
    pub spell_type: SpellType,
    pub element: Element,
    pub mana_cost: i64,
    pub effects: Vec<SpellEffect>,
}

impl Spell {
    /// Create a new spell with no cost and no effects.
    #[must_use]
    pub fn new(id: SpellId, name: impl Into<String>, spell_type: SpellType, element: Element) -> Self {
        Self {
            id,
            name: name.into(),
            spell_type,
            element,
            mana_cost: 0,
            effects: Vec::new(),
        }
    }

    /// Set the mana cost (builder pattern).
    #[must_use]
    pub fn with_cost(mut self, cost: i64) -> Self {
        self.mana_cost = cost;
        self
    }

    /// Add an effect (builder pattern).
    #[must_use]
    pub fn with_effect(mut self, effect: SpellEffect) -> Self {
        self.effects.push(effect);
        self
    }

    /// Total lifetime magnitude of effects of one kind.
    ///
    /// Over-time effects count magnitude x duration, so a 5-damage
    /// 3-round burn scores 15 against a flat 12-damage bolt.
    fn lifetime_magnitude(&self, kind: EffectKind) -> i64 {
        self.effects
            .iter()
            .filter(|e| e.kind == kind)
            .map(|e| e.magnitude * i64::from(e.duration.unwrap_or(1)))
            .sum()
    }

    /// Total damage this spell deals over its lifetime.
    #[must_use]
    pub fn total_damage(&self) -> i64 {
        self.lifetime_magnitude(EffectKind::Damage)
    }

    /// Total healing this spell applies over its lifetime.
    #[must_use]
    pub fn total_healing(&self) -> i64 {
        self.lifetime_magnitude(EffectKind::Healing)
    }

    /// Total mana this spell restores over its lifetime.
    #[must_use]
    pub fn total_mana_restore(&self) -> i64 {
        self.lifetime_magnitude(EffectKind::ManaRestore)
    }
}
