//! Core combat primitives.
//!
//! - [`DuelRng`]: seeded RNG for shuffles and AI choice
//! - [`Side`]: the two fixed sides of a duel
//! - [`Difficulty`] / [`CombatTuning`]: difficulty levels and the
//!   named tuning constants behind them
//! - [`CombatLog`]: chronological, structured battle record

pub mod difficulty;
pub mod log;
pub mod rng;
pub mod side;

pub use difficulty::{CombatTuning, Difficulty};
pub use log::{CombatLog, LogEntry, LogEvent};
pub use rng::DuelRng;
pub use side::Side;
