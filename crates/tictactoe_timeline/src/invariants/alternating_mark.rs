//! Alternating mark invariant: marks follow X, O, X, O from the start.

use super::Invariant;
use crate::timeline::Timeline;
use crate::types::Player;

/// Invariant: The mark introduced by step i alternates with strict
/// parity, X on even steps and O on odd steps.
///
/// The turn indicator is derived from cursor parity rather than stored,
/// so this invariant ties the recorded snapshots to the same parity
/// rule the engine plays by.
pub struct AlternatingMarkInvariant;

impl Invariant<Timeline> for AlternatingMarkInvariant {
    fn holds(timeline: &Timeline) -> bool {
        timeline.moves().iter().enumerate().all(|(i, mov)| {
            let expected = if i % 2 == 0 { Player::X } else { Player::O };
            mov.player() == expected
        })
    }

    fn description() -> &'static str {
        "Marks alternate X, O, X, O from the initial snapshot"
    }
}
