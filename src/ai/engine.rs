//! The AI decision engine.
//!
//! Spell selection for the enemy side: filter the hand down to what
//! is affordable, draw a strategy from the difficulty-weighted set, run
//! that strategy's selection routine, and record the turn in memory.
//! When nothing is affordable the engine returns the single cheapest
//! spell anyway - the state machine treats a still-unaffordable pick
//! as a pass.
//!
//! Sorting tie-breaks are deliberate and load-bearing for difficulty
//! feel: damage descending then cost ascending, with the "top
//! fraction" of the sorted list widening on easy and narrowing to
//! near-optimal on hard.

use tracing::debug;

use crate::combat::CombatState;
use crate::spells::{Spell, SpellId, SpellRegistry};

use super::memory::{AiMemory, PlayerProfile};
use super::strategy::{Strategy, StrategyTuning, StrategyWeights};

/// Spell-selection engine for one AI combatant.
///
/// Owns the battle-scoped [`AiMemory`]; create a fresh engine per
/// battle.
#[derive(Clone, Debug, Default)]
pub struct AiEngine {
    memory: AiMemory,
    tuning: StrategyTuning,
}

impl AiEngine {
    /// Create an engine with default tuning and empty memory.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the strategy tuning (builder pattern).
    #[must_use]
    pub fn with_tuning(mut self, tuning: StrategyTuning) -> Self {
        self.tuning = tuning;
        self
    }

    /// The engine's memory of this battle.
    #[must_use]
    pub fn memory(&self) -> &AiMemory {
        &self.memory
    }

    /// Tally a human cast for the adaptive profile.
    pub fn observe_player_cast(&mut self, spell_type: crate::spells::SpellType) {
        self.memory.observe_player_cast(spell_type);
    }

    /// Choose the spell the AI casts this turn.
    ///
    /// Returns `None` only when the hand is empty (the AI passes).
    /// An unaffordable hand yields the cheapest spell; the caller
    /// decides whether that becomes a pass.
    pub fn choose_spell(
        &mut self,
        state: &mut CombatState,
        registry: &SpellRegistry,
    ) -> Option<SpellId> {
        // Dangling ids degrade to absent spells rather than faults.
        let hand: Vec<&Spell> = state
            .enemy
            .hand
            .iter()
            .filter_map(|&id| registry.get(id))
            .collect();

        let Some(cheapest) = hand
            .iter()
            .copied()
            .min_by_key(|s| (s.mana_cost, s.id.raw()))
        else {
            // Empty hand: nothing to cast this turn.
            self.memory.record_snapshot(state);
            return None;
        };

        let mana = state.enemy.mana;
        let affordable: Vec<&Spell> = hand
            .iter()
            .copied()
            .filter(|s| s.mana_cost <= mana)
            .collect();

        if affordable.is_empty() {
            // Forced pick: cheapest spell regardless of affordability.
            debug!(spell = %cheapest.name, "AI forced to its cheapest spell");
            self.memory.record_snapshot(state);
            return Some(cheapest.id);
        }

        let own_health = state.enemy.health_fraction();
        let opponent_health = state.player.health_fraction();
        let own_mana = state.enemy.mana_fraction();

        let mut weights = StrategyWeights::base_for(state.difficulty);
        weights.adjust_for_context(own_health, opponent_health, own_mana, &self.tuning);
        weights.normalize();
        let strategy = weights.sample(&mut state.rng);
        debug!(?strategy, own_health, opponent_health, "AI strategy drawn");

        let choice = self.run_strategy(strategy, &affordable, state);

        self.memory.record_snapshot(state);
        Some(choice)
    }

    /// Run a specific strategy's routine against a candidate set.
    ///
    /// Public so behavior tests can pin a strategy instead of
    /// sampling one.
    pub fn choose_with_strategy(
        &mut self,
        strategy: Strategy,
        state: &mut CombatState,
        registry: &SpellRegistry,
    ) -> Option<SpellId> {
        let mana = state.enemy.mana;
        let affordable: Vec<&Spell> = state
            .enemy
            .hand
            .iter()
            .filter_map(|&id| registry.get(id))
            .filter(|s| s.mana_cost <= mana)
            .collect();

        if affordable.is_empty() {
            return None;
        }
        Some(self.run_strategy(strategy, &affordable, state))
    }

    fn run_strategy(&self, strategy: Strategy, affordable: &[&Spell], state: &mut CombatState) -> SpellId {
        let fraction = self.tuning.top_fraction(state.difficulty);
        let own_health = state.enemy.health_fraction();
        let opponent_health = state.player.health_fraction();

        match strategy {
            Strategy::Random => random_pick(affordable, state),
            Strategy::Offensive => offensive_pick(affordable, fraction, state),
            Strategy::Defensive => {
                defensive_pick(affordable, fraction, own_health, &self.tuning, state)
            }
            Strategy::Efficient => efficient_pick(affordable, fraction, state),
            Strategy::Adaptive => {
                let profile = self
                    .memory
                    .classify_player(self.tuning.adaptive_min_casts, self.tuning.adaptive_ratio);
                debug!(?profile, "adaptive counter-play");
                match profile {
                    // Counter aggression by staying alive, turtling by pressing in
                    PlayerProfile::Offensive => {
                        defensive_pick(affordable, fraction, own_health, &self.tuning, state)
                    }
                    PlayerProfile::Defensive => offensive_pick(affordable, fraction, state),
                    PlayerProfile::Balanced | PlayerProfile::Unknown => {
                        if own_health < opponent_health {
                            if own_health < self.tuning.low_health_fraction {
                                defensive_pick(affordable, fraction, own_health, &self.tuning, state)
                            } else {
                                offensive_pick(affordable, fraction, state)
                            }
                        } else {
                            efficient_pick(affordable, fraction, state)
                        }
                    }
                }
            }
        }
    }
}

/// Uniform pick among the candidates.
fn random_pick(candidates: &[&Spell], state: &mut CombatState) -> SpellId {
    let index = state.rng.gen_range_usize(0..candidates.len());
    candidates[index].id
}

/// Uniform pick among the top `fraction` of an already-sorted list.
///
/// Callers guarantee a non-empty list; every routine starts from the
/// affordable set, which `choose_spell` has already checked.
fn top_fraction_pick(sorted: &[&Spell], fraction: f64, state: &mut CombatState) -> SpellId {
    debug_assert!(!sorted.is_empty(), "candidate list must be non-empty");
    let count = ((sorted.len() as f64 * fraction).ceil() as usize)
        .min(sorted.len())
        .max(1);
    let index = state.rng.gen_range_usize(0..count);
    sorted[index].id
}

/// Highest damage first, cheaper first among equals.
fn offensive_pick(candidates: &[&Spell], fraction: f64, state: &mut CombatState) -> SpellId {
    let mut sorted = candidates.to_vec();
    sorted.sort_by(|a, b| {
        b.total_damage()
            .cmp(&a.total_damage())
            .then(a.mana_cost.cmp(&b.mana_cost))
    });
    top_fraction_pick(&sorted, fraction, state)
}

/// Healing spells when hurt; otherwise a damage+healing value sort.
fn defensive_pick(
    candidates: &[&Spell],
    fraction: f64,
    own_health: f64,
    tuning: &StrategyTuning,
    state: &mut CombatState,
) -> SpellId {
    if own_health < tuning.heal_preference_fraction {
        let mut healers: Vec<&Spell> = candidates
            .iter()
            .copied()
            .filter(|s| s.total_healing() > 0)
            .collect();
        if !healers.is_empty() {
            healers.sort_by(|a, b| {
                b.total_healing()
                    .cmp(&a.total_healing())
                    .then(a.mana_cost.cmp(&b.mana_cost))
            });
            return top_fraction_pick(&healers, fraction, state);
        }
    }

    let score = |s: &Spell| s.total_damage() as f64 + tuning.defensive_healing_weight * s.total_healing() as f64;
    let mut sorted = candidates.to_vec();
    sorted.sort_by(|a, b| score(b).total_cmp(&score(a)));
    top_fraction_pick(&sorted, fraction, state)
}

/// Best total value per point of mana.
fn efficient_pick(candidates: &[&Spell], fraction: f64, state: &mut CombatState) -> SpellId {
    let score = |s: &Spell| {
        let value = (s.total_damage() + s.total_healing() + s.total_mana_restore()) as f64;
        // Free spells score as cost 1 to keep the ratio finite
        value / s.mana_cost.max(1) as f64
    };
    let mut sorted = candidates.to_vec();
    sorted.sort_by(|a, b| score(b).total_cmp(&score(a)));
    top_fraction_pick(&sorted, fraction, state)
}
