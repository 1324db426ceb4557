//! Strategy selection weights.
//!
//! Each AI turn draws one of five strategies from a weighted set.
//! Base weights are fixed per difficulty (easy leans on random play,
//! hard on adaptive play), then adjusted by combat context - a
//! wounded AI shifts toward defense, a wounded opponent invites
//! aggression, an empty mana pool rewards efficiency - and finally
//! renormalized to sum to 1 before sampling.
//!
//! These weights are the most consequential game-feel numbers in the
//! engine; they are reference-balance values exposed through
//! [`StrategyTuning`], not invariants.

use serde::{Deserialize, Serialize};

use crate::core::{Difficulty, DuelRng};

/// A named spell-selection heuristic.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Strategy {
    /// Uniform pick among castable spells.
    Random,
    /// Maximize damage.
    Offensive,
    /// Heal when hurt, otherwise favor sturdy value.
    Defensive,
    /// Maximize value per point of mana.
    Efficient,
    /// Counter the observed human play style.
    Adaptive,
}

/// Tuning constants for the AI decision engine.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct StrategyTuning {
    /// Own-health fraction below which the AI plays scared.
    pub low_health_fraction: f64,
    /// Own-health fraction under which the defensive routine
    /// prefers healing spells outright.
    pub heal_preference_fraction: f64,
    /// Own-mana fraction below which efficiency gains weight.
    pub low_mana_fraction: f64,

    /// Weight added to `defensive` (and removed from `offensive`)
    /// when the AI's health is low, and vice versa when the
    /// opponent's is.
    pub health_weight_shift: f32,
    /// Weight added to `efficient` when mana is low.
    pub mana_weight_shift: f32,

    /// Healing multiplier in the defensive combined score.
    pub defensive_healing_weight: f64,

    /// Category-share ratio for calling a player offensive/defensive.
    pub adaptive_ratio: f64,
    /// Human casts required before the adaptive profile is trusted.
    pub adaptive_min_casts: u32,

    /// Fraction of the sorted candidate list considered on easy.
    pub top_fraction_easy: f64,
    /// Fraction considered on normal.
    pub top_fraction_normal: f64,
    /// Fraction considered on hard (near-optimal play).
    pub top_fraction_hard: f64,
}

impl Default for StrategyTuning {
    fn default() -> Self {
        Self {
            low_health_fraction: 0.3,
            heal_preference_fraction: 0.5,
            low_mana_fraction: 0.3,
            health_weight_shift: 0.25,
            mana_weight_shift: 0.2,
            defensive_healing_weight: 1.5,
            adaptive_ratio: 0.7,
            adaptive_min_casts: 2,
            top_fraction_easy: 0.75,
            top_fraction_normal: 0.5,
            top_fraction_hard: 0.25,
        }
    }
}

impl StrategyTuning {
    /// Top-fraction of the sorted candidate list per difficulty.
    ///
    /// Shrinks as difficulty rises: more randomness on easy,
    /// near-optimal picks on hard.
    #[must_use]
    pub fn top_fraction(&self, difficulty: Difficulty) -> f64 {
        match difficulty {
            Difficulty::Easy => self.top_fraction_easy,
            Difficulty::Normal => self.top_fraction_normal,
            Difficulty::Hard => self.top_fraction_hard,
        }
    }
}

/// Weighted strategy distribution for one selection.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct StrategyWeights {
    pub random: f32,
    pub offensive: f32,
    pub defensive: f32,
    pub efficient: f32,
    pub adaptive: f32,
}

impl StrategyWeights {
    /// Base weights for a difficulty.
    ///
    /// Easy favors `random`; hard favors `adaptive` and all but
    /// eliminates `random`.
    #[must_use]
    pub fn base_for(difficulty: Difficulty) -> Self {
        match difficulty {
            Difficulty::Easy => Self {
                random: 0.50,
                offensive: 0.20,
                defensive: 0.15,
                efficient: 0.10,
                adaptive: 0.05,
            },
            Difficulty::Normal => Self {
                random: 0.20,
                offensive: 0.25,
                defensive: 0.20,
                efficient: 0.20,
                adaptive: 0.15,
            },
            Difficulty::Hard => Self {
                random: 0.05,
                offensive: 0.25,
                defensive: 0.20,
                efficient: 0.20,
                adaptive: 0.30,
            },
        }
    }

    /// Shift weights for the current combat context.
    ///
    /// Low own health raises `defensive` and lowers `offensive`; a
    /// low opponent raises `offensive` and lowers `defensive`; low
    /// own mana raises `efficient`. Weights are floored at zero.
    pub fn adjust_for_context(
        &mut self,
        own_health_fraction: f64,
        opponent_health_fraction: f64,
        own_mana_fraction: f64,
        tuning: &StrategyTuning,
    ) {
        if own_health_fraction < tuning.low_health_fraction {
            self.defensive += tuning.health_weight_shift;
            self.offensive -= tuning.health_weight_shift;
        }
        if opponent_health_fraction < tuning.low_health_fraction {
            self.offensive += tuning.health_weight_shift;
            self.defensive -= tuning.health_weight_shift;
        }
        if own_mana_fraction < tuning.low_mana_fraction {
            self.efficient += tuning.mana_weight_shift;
        }

        self.random = self.random.max(0.0);
        self.offensive = self.offensive.max(0.0);
        self.defensive = self.defensive.max(0.0);
        self.efficient = self.efficient.max(0.0);
        self.adaptive = self.adaptive.max(0.0);
    }

    /// Renormalize so the weights sum to 1.0.
    ///
    /// A degenerate all-zero set falls back to uniform.
    pub fn normalize(&mut self) {
        let total = self.sum();
        if total <= 0.0 {
            *self = Self {
                random: 0.2,
                offensive: 0.2,
                defensive: 0.2,
                efficient: 0.2,
                adaptive: 0.2,
            };
            return;
        }
        self.random /= total;
        self.offensive /= total;
        self.defensive /= total;
        self.efficient /= total;
        self.adaptive /= total;
    }

    /// Sum of all weights.
    #[must_use]
    pub fn sum(&self) -> f32 {
        self.random + self.offensive + self.defensive + self.efficient + self.adaptive
    }

    /// Draw a strategy by cumulative weighted sampling.
    #[must_use]
    pub fn sample(&self, rng: &mut DuelRng) -> Strategy {
        const ORDER: [Strategy; 5] = [
            Strategy::Random,
            Strategy::Offensive,
            Strategy::Defensive,
            Strategy::Efficient,
            Strategy::Adaptive,
        ];
        let weights = [
            self.random,
            self.offensive,
            self.defensive,
            self.efficient,
            self.adaptive,
        ];

        match rng.choose_weighted(&weights) {
            Some(i) => ORDER[i],
            // All-zero weights cannot survive normalize(); be safe anyway
            None => Strategy::Random,
        }
    }
}
