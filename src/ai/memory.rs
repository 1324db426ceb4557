//! Short-term AI memory.
//!
//! The AI keeps a per-battle record of how the duel has unfolded:
//! health/mana time series for both sides and a tally of which spell
//! categories the human has leaned on. The adaptive strategy reads
//! this to classify the opponent's play style. The memory lives
//! exactly as long as one battle.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::combat::CombatState;
use crate::spells::SpellType;

/// How the human opponent has been playing so far.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayerProfile {
    /// Mostly attack/debuff casts.
    Offensive,
    /// Mostly healing/buff casts.
    Defensive,
    /// No strong lean either way.
    Balanced,
    /// Not enough casts observed yet.
    Unknown,
}

/// Per-battle record of the duel so far, owned by the AI engine.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct AiMemory {
    /// AI turns elapsed (selections made).
    pub turns: u32,
    /// Player health at each AI turn.
    pub player_health: Vec<i64>,
    /// Enemy (own) health at each AI turn.
    pub enemy_health: Vec<i64>,
    /// Player mana at each AI turn.
    pub player_mana: Vec<i64>,
    /// Enemy (own) mana at each AI turn.
    pub enemy_mana: Vec<i64>,
    /// Human spell casts tallied by category.
    spell_uses: FxHashMap<SpellType, u32>,
}

impl AiMemory {
    /// Create an empty memory.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record both sides' pools at the current AI turn.
    pub fn record_snapshot(&mut self, state: &CombatState) {
        self.turns += 1;
        self.player_health.push(state.player.health);
        self.enemy_health.push(state.enemy.health);
        self.player_mana.push(state.player.mana);
        self.enemy_mana.push(state.enemy.mana);
    }

    /// Tally one human cast by category.
    pub fn observe_player_cast(&mut self, spell_type: SpellType) {
        *self.spell_uses.entry(spell_type).or_insert(0) += 1;
    }

    /// Total human casts observed.
    #[must_use]
    pub fn casts_observed(&self) -> u32 {
        self.spell_uses.values().sum()
    }

    /// Casts in offensive categories (attack, debuff).
    #[must_use]
    pub fn offensive_casts(&self) -> u32 {
        self.spell_uses
            .iter()
            .filter(|(t, _)| t.is_offensive())
            .map(|(_, n)| n)
            .sum()
    }

    /// Casts in defensive categories (healing, buff).
    #[must_use]
    pub fn defensive_casts(&self) -> u32 {
        self.spell_uses
            .iter()
            .filter(|(t, _)| t.is_defensive())
            .map(|(_, n)| n)
            .sum()
    }

    /// Classify the human's play style.
    ///
    /// Requires at least `min_casts` observations; a side is called
    /// offensive or defensive when that category's share of observed
    /// casts reaches `ratio`.
    #[must_use]
    pub fn classify_player(&self, min_casts: u32, ratio: f64) -> PlayerProfile {
        let total = self.casts_observed();
        if total < min_casts {
            return PlayerProfile::Unknown;
        }

        let offensive = self.offensive_casts() as f64 / total as f64;
        let defensive = self.defensive_casts() as f64 / total as f64;

        if offensive >= ratio {
            PlayerProfile::Offensive
        } else if defensive >= ratio {
            PlayerProfile::Defensive
        } else {
            PlayerProfile::Balanced
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combat::Combatant;
    use crate::core::Difficulty;

    #[test]
    fn test_snapshot_series() {
        let mut memory = AiMemory::new();
        let mut state = CombatState::new(
            Combatant::new("P", 100, 100, 10),
            Combatant::new("E", 100, 100, 10),
            Difficulty::Normal,
            1,
        );

        memory.record_snapshot(&state);
        state.player.health = 70;
        memory.record_snapshot(&state);

        assert_eq!(memory.turns, 2);
        assert_eq!(memory.player_health, vec![100, 70]);
        assert_eq!(memory.enemy_health, vec![100, 100]);
    }

    #[test]
    fn test_unknown_below_min_casts() {
        let mut memory = AiMemory::new();
        memory.observe_player_cast(SpellType::Attack);

        assert_eq!(memory.classify_player(2, 0.7), PlayerProfile::Unknown);
    }

    #[test]
    fn test_classify_offensive() {
        let mut memory = AiMemory::new();
        memory.observe_player_cast(SpellType::Attack);
        memory.observe_player_cast(SpellType::Attack);
        memory.observe_player_cast(SpellType::Debuff);

        assert_eq!(memory.classify_player(2, 0.7), PlayerProfile::Offensive);
    }

    #[test]
    fn test_classify_defensive() {
        let mut memory = AiMemory::new();
        memory.observe_player_cast(SpellType::Healing);
        memory.observe_player_cast(SpellType::Buff);
        memory.observe_player_cast(SpellType::Healing);

        assert_eq!(memory.classify_player(2, 0.7), PlayerProfile::Defensive);
    }

    #[test]
    fn test_classify_balanced() {
        let mut memory = AiMemory::new();
        memory.observe_player_cast(SpellType::Attack);
        memory.observe_player_cast(SpellType::Healing);

        assert_eq!(memory.classify_player(2, 0.7), PlayerProfile::Balanced);
    }

    #[test]
    fn test_reaction_counts_toward_neither_lean() {
        let mut memory = AiMemory::new();
        memory.observe_player_cast(SpellType::Attack);
        memory.observe_player_cast(SpellType::Reaction);
        memory.observe_player_cast(SpellType::Reaction);

        // 1/3 offensive share is under the 0.7 ratio
        assert_eq!(memory.classify_player(2, 0.7), PlayerProfile::Balanced);
        assert_eq!(memory.casts_observed(), 3);
    }
}
