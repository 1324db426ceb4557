//! Difficulty levels and combat tuning.
//!
//! The asymmetric damage/healing multipliers here are the primary
//! lever for perceived difficulty: on easy the player's outputs are
//! amplified and the enemy's dampened, on hard the reverse.
//!
//! Every numeric knob the engine uses lives on [`CombatTuning`] as a
//! named field rather than a literal buried in combat code. These are
//! reference-balance values, not invariants - tweak freely.

use serde::{Deserialize, Serialize};

use super::side::Side;

/// Game difficulty, supplied by external settings at battle start.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    #[default]
    Normal,
    Hard,
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Difficulty::Easy => write!(f, "easy"),
            Difficulty::Normal => write!(f, "normal"),
            Difficulty::Hard => write!(f, "hard"),
        }
    }
}

/// Named tuning constants for the combat engine.
///
/// Defaults carry the reference balance. Construct with
/// `CombatTuning::default()` and override fields for experiments.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CombatTuning {
    /// Player-side output multiplier on easy.
    pub easy_player_scale: f64,
    /// Enemy-side output multiplier on easy.
    pub easy_enemy_scale: f64,
    /// Player-side output multiplier on hard.
    pub hard_player_scale: f64,
    /// Enemy-side output multiplier on hard.
    pub hard_enemy_scale: f64,

    /// Target hand size, topped up each round.
    pub hand_size: usize,

    /// Base damage of the zero-cost mystic punch fallback.
    pub mystic_punch_damage: i64,
}

impl Default for CombatTuning {
    fn default() -> Self {
        Self {
            easy_player_scale: 1.5,
            easy_enemy_scale: 0.7,
            hard_player_scale: 0.8,
            hard_enemy_scale: 1.3,
            hand_size: 3,
            mystic_punch_damage: 10,
        }
    }
}

impl CombatTuning {
    /// Damage/healing multiplier for a casting side at a difficulty.
    ///
    /// Normal is symmetric (x1.0 both ways); easy and hard skew in
    /// opposite directions.
    #[must_use]
    pub fn output_scale(&self, difficulty: Difficulty, caster: Side) -> f64 {
        match (difficulty, caster) {
            (Difficulty::Easy, Side::Player) => self.easy_player_scale,
            (Difficulty::Easy, Side::Enemy) => self.easy_enemy_scale,
            (Difficulty::Normal, _) => 1.0,
            (Difficulty::Hard, Side::Player) => self.hard_player_scale,
            (Difficulty::Hard, Side::Enemy) => self.hard_enemy_scale,
        }
    }

    /// Apply the output scale to a magnitude, rounding to nearest.
    #[must_use]
    pub fn scale_magnitude(&self, magnitude: i64, difficulty: Difficulty, caster: Side) -> i64 {
        (magnitude as f64 * self.output_scale(difficulty, caster)).round() as i64
    }
}
