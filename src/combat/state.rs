//! Combat state - the aggregate root of one battle.
//!
//! A [`CombatState`] owns both combatants, the round/turn counters,
//! the battle status, the combat log, and the battle's RNG. It is
//! exclusively owned by the calling session: no two battles share a
//! state, there is no internal concurrency, and abandoning a battle
//! is just dropping the value.

use serde::{Deserialize, Serialize};

use crate::core::{CombatLog, Difficulty, DuelRng, LogEvent, Side};

use super::combatant::Combatant;

/// Battle status. `Active` is the only non-terminal state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum BattleStatus {
    Active,
    PlayerWon,
    EnemyWon,
}

impl BattleStatus {
    /// True once the battle has reached a terminal state.
    #[must_use]
    pub fn is_terminal(self) -> bool {
        !matches!(self, BattleStatus::Active)
    }

    /// The winning side, if decided.
    #[must_use]
    pub fn winner(self) -> Option<Side> {
        match self {
            BattleStatus::Active => None,
            BattleStatus::PlayerWon => Some(Side::Player),
            BattleStatus::EnemyWon => Some(Side::Enemy),
        }
    }
}

/// Full state of one battle.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CombatState {
    pub player: Combatant,
    pub enemy: Combatant,
    /// Round counter, starting at 1.
    pub round: u32,
    /// Whose action resolves next within the round.
    pub turn: Side,
    pub status: BattleStatus,
    pub difficulty: Difficulty,
    pub log: CombatLog,
    #[serde(skip, default = "default_rng")]
    pub rng: DuelRng,
}

fn default_rng() -> DuelRng {
    DuelRng::new(0)
}

impl CombatState {
    /// Create a fresh battle state at round 1, player to act.
    #[must_use]
    pub fn new(player: Combatant, enemy: Combatant, difficulty: Difficulty, seed: u64) -> Self {
        Self {
            player,
            enemy,
            round: 1,
            turn: Side::Player,
            status: BattleStatus::Active,
            difficulty,
            log: CombatLog::new(),
            rng: DuelRng::new(seed),
        }
    }

    /// The combatant on a side.
    #[must_use]
    pub fn combatant(&self, side: Side) -> &Combatant {
        match side {
            Side::Player => &self.player,
            Side::Enemy => &self.enemy,
        }
    }

    /// Mutable combatant on a side.
    pub fn combatant_mut(&mut self, side: Side) -> &mut Combatant {
        match side {
            Side::Player => &mut self.player,
            Side::Enemy => &mut self.enemy,
        }
    }

    /// Caster and opponent for a casting side, borrowed together.
    pub fn caster_and_opponent(&mut self, caster: Side) -> (&mut Combatant, &mut Combatant) {
        match caster {
            Side::Player => (&mut self.player, &mut self.enemy),
            Side::Enemy => (&mut self.enemy, &mut self.player),
        }
    }

    /// Record an event at the current round.
    pub fn record(&mut self, event: LogEvent) {
        self.log.record(self.round, event);
    }

    /// Both sides regenerate their per-round mana amount, clamped.
    ///
    /// One piece of end-of-round housekeeping; also callable on its
    /// own by the orchestration layer.
    pub fn regenerate_mana(&mut self) {
        let regen = self.player.mana_regen;
        self.player.restore_mana(regen);
        let regen = self.enemy.mana_regen;
        self.enemy.restore_mana(regen);
    }
}
