//! Spell registry for definition lookup.
//!
//! The `SpellRegistry` stores the immutable spell definitions a duel
//! can reference. Hands and decks carry `SpellId`s only; the registry
//! turns them back into definitions when a spell is cast or scored by
//! the AI.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::definition::{Spell, SpellId, SpellType};
use super::effect::SpellEffect;
use crate::spells::Element;

/// Registry of spell definitions.
///
/// ## Example
///
/// ```
/// use wizard_duel::spells::{SpellRegistry, Spell, SpellId, SpellType, Element, SpellEffect};
///
/// let mut registry = SpellRegistry::new();
/// registry.register(
///     Spell::new(SpellId::new(1), "Fireball", SpellType::Attack, Element::Fire)
///         .with_cost(15)
///         .with_effect(SpellEffect::damage(20)),
/// );
///
/// assert_eq!(registry.get(SpellId::new(1)).unwrap().name, "Fireball");
/// ```
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct SpellRegistry {
    spells: FxHashMap<SpellId, Spell>,
}

impl SpellRegistry {
    /// Create a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a spell definition.
    ///
    /// Panics if a spell with the same ID already exists.
    pub fn register(&mut self, spell: Spell) {
        if self.spells.contains_key(&spell.id) {
            panic!("Spell with ID {:?} already registered", spell.id);
        }
        self.spells.insert(spell.id, spell);
    }

    /// Get a spell definition by ID.
    #[must_use]
    pub fn get(&self, id: SpellId) -> Option<&Spell> {
        self.spells.get(&id)
    }

    /// Effect list for a spell, defaulting to empty for unknown IDs.
    ///
    /// A dangling spell reference degrades to a spell that does
    /// nothing rather than crashing the duel.
    #[must_use]
    pub fn effects_of(&self, id: SpellId) -> &[SpellEffect] {
        self.get(id).map_or(&[], |s| s.effects.as_slice())
    }

    /// Check if a spell ID is registered.
    #[must_use]
    pub fn contains(&self, id: SpellId) -> bool {
        self.spells.contains_key(&id)
    }

    /// Number of registered spells.
    #[must_use]
    pub fn len(&self) -> usize {
        self.spells.len()
    }

    /// Check if the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.spells.is_empty()
    }

    /// Iterate over all spell definitions.
    pub fn iter(&self) -> impl Iterator<Item = &Spell> {
        self.spells.values()
    }

    /// Find spells by type.
    pub fn find_by_type(&self, spell_type: SpellType) -> impl Iterator<Item = &Spell> {
        self.spells.values().filter(move |s| s.spell_type == spell_type)
    }
}

/// A starter spellbook used by tests and demos.
///
/// Covers every effect shape the resolver handles: flat damage,
/// healing, mana restore, damage over time, healing over time, buffs
/// and debuffs.
#[must_use]
pub fn standard_spells() -> SpellRegistry {
    let mut registry = SpellRegistry::new();

    registry.register(
        Spell::new(SpellId::new(1), "Fireball", SpellType::Attack, Element::Fire)
            .with_cost(15)
            .with_effect(SpellEffect::damage(20)),
    );
    registry.register(
        Spell::new(SpellId::new(2), "Ember Coil", SpellType::Attack, Element::Fire)
            .with_cost(12)
            .with_effect(SpellEffect::damage(6))
            .with_effect(SpellEffect::damage_over_time(4, 3)),
    );
    registry.register(
        Spell::new(SpellId::new(3), "Stone Fist", SpellType::Attack, Element::Earth)
            .with_cost(8)
            .with_effect(SpellEffect::damage(11)),
    );
    registry.register(
        Spell::new(SpellId::new(4), "Healing Rain", SpellType::Healing, Element::Water)
            .with_cost(14)
            .with_effect(SpellEffect::healing(18)),
    );
    registry.register(
        Spell::new(SpellId::new(5), "Spring Mend", SpellType::Healing, Element::Water)
            .with_cost(10)
            .with_effect(SpellEffect::healing_over_time(6, 3)),
    );
    registry.register(
        Spell::new(SpellId::new(6), "Arcane Focus", SpellType::Buff, Element::Arcane)
            .with_cost(9)
            .with_effect(SpellEffect::damage_buff(5, 3)),
    );
    registry.register(
        Spell::new(SpellId::new(7), "Enfeeble", SpellType::Debuff, Element::Shadow)
            .with_cost(11)
            .with_effect(SpellEffect::damage_debuff(4, 3)),
    );
    registry.register(
        Spell::new(SpellId::new(8), "Mana Well", SpellType::Buff, Element::Arcane)
            .with_cost(4)
            .with_effect(SpellEffect::mana_restore(16)),
    );
    registry.register(
        Spell::new(SpellId::new(9), "Gale Cut", SpellType::Attack, Element::Air)
            .with_cost(5)
            .with_effect(SpellEffect::damage(7)),
    );

    registry
}
