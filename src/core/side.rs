//! Battle sides.
//!
//! A duel always has exactly two sides: the human-controlled player
//! and the AI-controlled enemy. Turn order within a round is fixed -
//! the player resolves first, then the enemy - so a defensive play
//! lands before the AI's damage is computed in the same round.

use serde::{Deserialize, Serialize};

/// One of the two sides of a duel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    /// The human-controlled wizard.
    Player,
    /// The AI-controlled wizard.
    Enemy,
}

impl Side {
    /// The opposing side.
    #[must_use]
    pub const fn opponent(self) -> Side {
        match self {
            Side::Player => Side::Enemy,
            Side::Enemy => Side::Player,
        }
    }

}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Player => write!(f, "player"),
            Side::Enemy => write!(f, "enemy"),
        }
    }
}
