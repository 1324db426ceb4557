//! Deck and hand management.
//!
//! Each combatant cycles spells through three piles: draw pile, hand,
//! discard pile. Cast spells go to the discard pile; when the draw
//! pile runs dry the discard pile is shuffled and becomes the new
//! draw pile. Both piles empty is a tolerated state - draws become
//! no-ops, not errors.

use crate::core::DuelRng;
use crate::spells::SpellId;

use super::combatant::Combatant;

/// Draw up to `count` spells into the hand.
///
/// Reshuffles the discard pile into the draw pile on exhaustion.
/// Returns the number of spells actually drawn (zero when every pile
/// is empty).
pub fn draw_spells(combatant: &mut Combatant, count: usize, rng: &mut DuelRng) -> usize {
    let mut drawn = 0;

    for _ in 0..count {
        if combatant.draw_pile.is_empty() {
            if combatant.discard_pile.is_empty() {
                break;
            }
            reshuffle(combatant, rng);
        }

        if let Some(spell) = combatant.draw_pile.pop() {
            combatant.hand.push(spell);
            drawn += 1;
        }
    }

    drawn
}

/// Draw until the hand holds `hand_size` spells.
pub fn top_up_hand(combatant: &mut Combatant, hand_size: usize, rng: &mut DuelRng) -> usize {
    let missing = hand_size.saturating_sub(combatant.hand.len());
    draw_spells(combatant, missing, rng)
}

/// Move a spell from hand to discard pile after it is cast.
///
/// Returns false (untouched state) if the spell was not in hand.
pub fn discard_spell(combatant: &mut Combatant, spell: SpellId) -> bool {
    if let Some(pos) = combatant.hand.iter().position(|&s| s == spell) {
        combatant.hand.remove(pos);
        combatant.discard_pile.push(spell);
        true
    } else {
        false
    }
}

/// Shuffle the discard pile and make it the new draw pile.
fn reshuffle(combatant: &mut Combatant, rng: &mut DuelRng) {
    debug_assert!(combatant.draw_pile.is_empty());
    std::mem::swap(&mut combatant.draw_pile, &mut combatant.discard_pile);
    rng.shuffle(&mut combatant.draw_pile);
}
