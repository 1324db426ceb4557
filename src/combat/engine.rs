//! The duel state machine.
//!
//! [`DuelEngine`] owns the immutable spell registry and tuning and
//! drives a [`CombatState`] through rounds: player action, enemy
//! action, end-of-round housekeeping, battle-end checks. It is a
//! synchronous state mutator - pacing, animation delays, and AI
//! "thinking time" belong to the calling layer.
//!
//! Invalid actions (casting without mana, casting after the battle
//! ended) are rejected synchronously with no state mutation; they are
//! expected, frequent conditions, not faults.

use thiserror::Error;
use tracing::{debug, info};

use crate::ai::AiEngine;
use crate::core::{CombatTuning, Difficulty, LogEvent, Side};
use crate::spells::{Spell, SpellId, SpellRegistry};

use super::active::{apply_active_effects, check_active_effects, decrement_active_effects};
use super::combatant::{Combatant, WizardRecord};
use super::deck::{discard_spell, top_up_hand};
use super::resolver::{resolve_effect, EffectOutcome};
use super::state::{BattleStatus, CombatState};

/// Why a cast was rejected. All variants leave the state untouched.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum CastError {
    #[error("insufficient mana: need {needed}, have {available}")]
    InsufficientMana { needed: i64, available: i64 },
    #[error("battle is already over")]
    BattleOver,
    #[error("unknown spell {0}")]
    UnknownSpell(SpellId),
    #[error("spell {0} is not in hand")]
    NotInHand(SpellId),
}

/// What a cast actually did, post-clamping, for UI logging.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SpellOutcome {
    pub spell: Option<SpellId>,
    pub name: String,
    pub caster: Side,
    pub damage: i64,
    pub healing: i64,
    pub mana_restored: i64,
    pub mana_spent: i64,
    /// Names of active effects registered by this cast.
    pub effects_applied: Vec<String>,
}

/// The combat state machine.
///
/// Holds the reference data (spell registry, tuning) shared across
/// battles; per-battle state lives in [`CombatState`].
#[derive(Clone, Debug, Default)]
pub struct DuelEngine {
    registry: SpellRegistry,
    tuning: CombatTuning,
}

impl DuelEngine {
    /// Create an engine over a spell registry with default tuning.
    #[must_use]
    pub fn new(registry: SpellRegistry) -> Self {
        Self {
            registry,
            tuning: CombatTuning::default(),
        }
    }

    /// Override the tuning (builder pattern).
    #[must_use]
    pub fn with_tuning(mut self, tuning: CombatTuning) -> Self {
        self.tuning = tuning;
        self
    }

    /// The spell registry this engine resolves against.
    #[must_use]
    pub fn registry(&self) -> &SpellRegistry {
        &self.registry
    }

    /// The engine's tuning constants.
    #[must_use]
    pub fn tuning(&self) -> &CombatTuning {
        &self.tuning
    }

    /// Start a battle from two persistent records.
    ///
    /// Both combatants start at full health and mana with shuffled
    /// decks and hands drawn to the target size.
    #[must_use]
    pub fn initialize_combat(
        &self,
        player: &WizardRecord,
        enemy: &WizardRecord,
        difficulty: Difficulty,
        seed: u64,
    ) -> CombatState {
        let mut state = CombatState::new(
            Combatant::from_record(player),
            Combatant::from_record(enemy),
            difficulty,
            seed,
        );

        state.rng.shuffle(&mut state.player.draw_pile);
        state.rng.shuffle(&mut state.enemy.draw_pile);

        top_up_hand(&mut state.player, self.tuning.hand_size, &mut state.rng);
        top_up_hand(&mut state.enemy, self.tuning.hand_size, &mut state.rng);

        info!(
            player = %state.player.name,
            enemy = %state.enemy.name,
            %difficulty,
            seed,
            "battle initialized"
        );

        state
    }

    /// Cast a spell from a side's hand.
    ///
    /// Rejects synchronously (state unchanged) on terminal battles,
    /// unknown spells, spells not in hand, and insufficient mana.
    /// On success: mana is deducted, every effect resolves, the spell
    /// moves to the discard pile, and the battle-end check runs.
    pub fn execute_spell(
        &self,
        state: &mut CombatState,
        spell_id: SpellId,
        side: Side,
    ) -> Result<SpellOutcome, CastError> {
        if state.status.is_terminal() {
            return Err(CastError::BattleOver);
        }

        let spell = self
            .registry
            .get(spell_id)
            .ok_or(CastError::UnknownSpell(spell_id))?;

        if !state.combatant(side).hand.contains(&spell_id) {
            return Err(CastError::NotInHand(spell_id));
        }

        let caster = state.combatant(side);
        if !caster.can_afford(spell.mana_cost) {
            return Err(CastError::InsufficientMana {
                needed: spell.mana_cost,
                available: caster.mana,
            });
        }

        // Precondition checks done; from here on the cast cannot fail.
        let spell = spell.clone();
        let spent = state.combatant_mut(side).spend_mana(spell.mana_cost);
        debug_assert!(spent);

        let (outcome, effects_applied) = self.resolve_spell(state, &spell, side);
        discard_spell(state.combatant_mut(side), spell_id);

        state.record(LogEvent::SpellCast {
            side,
            spell: spell.name.clone(),
            damage: outcome.damage,
            healing: outcome.healing,
            mana_restored: outcome.mana_restored,
        });
        debug!(caster = %side, spell = %spell.name, damage = outcome.damage, "spell cast");

        self.check_battle_end(state);

        Ok(SpellOutcome {
            spell: Some(spell_id),
            name: spell.name,
            caster: side,
            damage: outcome.damage,
            healing: outcome.healing,
            mana_restored: outcome.mana_restored,
            mana_spent: spell.mana_cost,
            effects_applied,
        })
    }

    /// The zero-cost fallback attack for a side with no playable spell.
    ///
    /// Runs through the resolver so difficulty scaling and stat
    /// modifiers apply. Returns `None` if the battle is already over.
    pub fn execute_mystic_punch(&self, state: &mut CombatState, side: Side) -> Option<SpellOutcome> {
        if state.status.is_terminal() {
            return None;
        }

        let effect = crate::spells::SpellEffect::damage(self.tuning.mystic_punch_damage);
        let outcome = resolve_effect(state, &effect, side, "Mystic Punch", &self.tuning);

        state.record(LogEvent::MysticPunch { side, damage: outcome.damage });
        self.check_battle_end(state);

        Some(SpellOutcome {
            spell: None,
            name: "Mystic Punch".to_string(),
            caster: side,
            damage: outcome.damage,
            healing: 0,
            mana_restored: 0,
            mana_spent: 0,
            effects_applied: Vec::new(),
        })
    }

    /// Check for a terminal state, transitioning and logging on the
    /// first detection.
    ///
    /// Returns non-`None` iff at least one combatant is at zero
    /// health. When both reach zero in the same resolution the enemy
    /// side wins: the player's defeat is inspected first.
    pub fn check_battle_end(&self, state: &mut CombatState) -> Option<BattleStatus> {
        if state.status.is_terminal() {
            return Some(state.status);
        }

        let result = if state.player.is_defeated() {
            Some((BattleStatus::EnemyWon, Side::Enemy))
        } else if state.enemy.is_defeated() {
            Some((BattleStatus::PlayerWon, Side::Player))
        } else {
            None
        };

        if let Some((status, winner)) = result {
            state.status = status;
            state.record(LogEvent::BattleEnded { winner });
            info!(%winner, round = state.round, "battle ended");
        }

        result.map(|(status, _)| status)
    }

    /// End-of-round housekeeping.
    ///
    /// Ticks both combatants (pulse, decrement, expire - in that
    /// order, so an effect's magnitude lands on the round it reaches
    /// zero), regenerates each side's mana, tops both hands back up,
    /// and advances the round counter. A no-op on terminal battles,
    /// except that a lethal damage-over-time pulse can itself end the
    /// battle.
    pub fn end_round(&self, state: &mut CombatState) {
        if state.status.is_terminal() {
            return;
        }

        for side in [Side::Player, Side::Enemy] {
            let pulses = apply_active_effects(state.combatant_mut(side));
            for pulse in pulses {
                state.record(LogEvent::EffectTicked {
                    target: side,
                    effect: pulse.effect,
                    amount: pulse.amount,
                });
            }

            decrement_active_effects(state.combatant_mut(side));
            for expired in check_active_effects(state.combatant_mut(side)) {
                state.record(LogEvent::EffectExpired { target: side, effect: expired });
            }
        }

        // A burn can finish either side during housekeeping.
        if self.check_battle_end(state).is_some() {
            return;
        }

        state.regenerate_mana();

        let hand_size = self.tuning.hand_size;
        top_up_hand(&mut state.player, hand_size, &mut state.rng);
        top_up_hand(&mut state.enemy, hand_size, &mut state.rng);

        state.record(LogEvent::RoundEnded { round: state.round });
        state.round += 1;
        state.turn = Side::Player;
    }

    /// Ask the AI to pick a spell for the enemy side.
    ///
    /// Returns `None` when the AI has nothing castable and passes.
    pub fn ai_select_spell(&self, state: &mut CombatState, ai: &mut AiEngine) -> Option<SpellId> {
        ai.choose_spell(state, &self.registry)
    }

    /// Run the enemy side's turn: select, then cast.
    ///
    /// The AI's forced pick of its cheapest spell can still be
    /// unaffordable; that turn becomes a logged pass with no mana
    /// deducted and no effect applied.
    pub fn ai_take_turn(&self, state: &mut CombatState, ai: &mut AiEngine) -> Option<SpellOutcome> {
        if state.status.is_terminal() {
            return None;
        }

        let Some(spell_id) = self.ai_select_spell(state, ai) else {
            state.record(LogEvent::AiPassed);
            return None;
        };

        match self.execute_spell(state, spell_id, Side::Enemy) {
            Ok(outcome) => Some(outcome),
            Err(CastError::InsufficientMana { .. }) => {
                state.record(LogEvent::AiPassed);
                None
            }
            Err(err) => {
                // Selection came from the AI's own hand; anything
                // else is a bookkeeping bug worth surfacing in dev.
                debug_assert!(false, "AI selected an uncastable spell: {err}");
                state.record(LogEvent::AiPassed);
                None
            }
        }
    }

    /// Play one full round: a player cast (or mystic punch when the
    /// spell is `None`), the AI response, then housekeeping.
    ///
    /// Convenience for orchestration layers that do not need to
    /// sequence the exposed primitives themselves.
    pub fn play_round(
        &self,
        state: &mut CombatState,
        player_spell: Option<SpellId>,
        ai: &mut AiEngine,
    ) -> Result<(), CastError> {
        match player_spell {
            Some(spell_id) => {
                self.execute_spell(state, spell_id, Side::Player)?;
                if let Some(spell) = self.registry.get(spell_id) {
                    ai.observe_player_cast(spell.spell_type);
                }
            }
            None => {
                self.execute_mystic_punch(state, Side::Player);
            }
        }

        if state.status.is_terminal() {
            return Ok(());
        }

        state.turn = Side::Enemy;
        self.ai_take_turn(state, ai);

        if state.status.is_terminal() {
            return Ok(());
        }

        self.end_round(state);
        Ok(())
    }

    fn resolve_spell(
        &self,
        state: &mut CombatState,
        spell: &Spell,
        side: Side,
    ) -> (EffectOutcome, Vec<String>) {
        let mut total = EffectOutcome::default();
        let mut registered = Vec::new();

        for effect in &spell.effects {
            let outcome = resolve_effect(state, effect, side, &spell.name, &self.tuning);
            if let Some(name) = &outcome.registered {
                registered.push(name.clone());
                state.record(LogEvent::EffectApplied {
                    target: match effect.target {
                        crate::spells::EffectTarget::Caster => side,
                        crate::spells::EffectTarget::Opponent => side.opponent(),
                    },
                    effect: name.clone(),
                });
            }
            total.absorb(outcome);
        }

        (total, registered)
    }
}
