//! AI decision engine: strategy weights, per-battle memory, and the
//! spell-selection engine that drives the enemy wizard.

pub mod engine;
pub mod memory;
pub mod strategy;

pub use engine::AiEngine;
pub use memory::{AiMemory, PlayerProfile};
pub use strategy::{Strategy, StrategyTuning, StrategyWeights};
