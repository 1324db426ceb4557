//! Chronological combat log.
//!
//! The log is domain data, not diagnostics: the presentation layer
//! renders it directly ("Fireball hits for 18"). It is kept as an
//! `im::Vector` so cloning a `CombatState` snapshot stays cheap.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::side::Side;

/// A single logged combat event.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum LogEvent {
    /// A spell resolved, with post-clamp totals.
    SpellCast {
        side: Side,
        spell: String,
        damage: i64,
        healing: i64,
        mana_restored: i64,
    },
    /// The zero-cost fallback attack.
    MysticPunch { side: Side, damage: i64 },
    /// A duration effect attached to a combatant.
    EffectApplied { target: Side, effect: String },
    /// A recurring effect pulsed this round.
    EffectTicked { target: Side, effect: String, amount: i64 },
    /// A duration effect ran out and was removed.
    EffectExpired { target: Side, effect: String },
    /// The AI had no castable spell and passed its turn.
    AiPassed,
    /// End-of-round housekeeping completed.
    RoundEnded { round: u32 },
    /// The battle reached a terminal state.
    BattleEnded { winner: Side },
}

/// A log event stamped with the round it happened in.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    pub round: u32,
    pub event: LogEvent,
}

/// Ordered record of everything that happened in a battle.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct CombatLog {
    entries: Vector<LogEntry>,
}

impl CombatLog {
    /// Create an empty log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an event for the given round.
    pub fn record(&mut self, round: u32, event: LogEvent) {
        self.entries.push_back(LogEntry { round, event });
    }

    /// Iterate entries oldest-first.
    pub fn iter(&self) -> impl Iterator<Item = &LogEntry> {
        self.entries.iter()
    }

    /// The most recent entry.
    #[must_use]
    pub fn last(&self) -> Option<&LogEntry> {
        self.entries.last()
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if nothing has been logged yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_and_order() {
        let mut log = CombatLog::new();
        assert!(log.is_empty());

        log.record(1, LogEvent::MysticPunch { side: Side::Player, damage: 10 });
        log.record(1, LogEvent::RoundEnded { round: 1 });

        assert_eq!(log.len(), 2);
        let rounds: Vec<_> = log.iter().map(|e| e.round).collect();
        assert_eq!(rounds, vec![1, 1]);
        assert_eq!(
            log.last().unwrap().event,
            LogEvent::RoundEnded { round: 1 }
        );
    }

    #[test]
    fn test_serialization() {
        let mut log = CombatLog::new();
        log.record(2, LogEvent::AiPassed);

        let json = serde_json::to_string(&log).unwrap();
        let restored: CombatLog = serde_json::from_str(&json).unwrap();
        assert_eq!(restored.len(), 1);
        assert_eq!(restored.last().unwrap().event, LogEvent::AiPassed);
    }
}
