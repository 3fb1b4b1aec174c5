//! Single-step invariant: consecutive snapshots differ by one placement.

use super::Invariant;
use crate::action::Move;
use crate::timeline::Timeline;

/// Invariant: Every snapshot after the first differs from its
/// predecessor in exactly one square, which transitions from empty to
/// occupied.
///
/// Verified by diffing each consecutive pair; [`Move::between`] returns
/// `None` for any other kind of difference.
pub struct SingleStepInvariant;

impl Invariant<Timeline> for SingleStepInvariant {
    fn holds(timeline: &Timeline) -> bool {
        timeline
            .snapshots()
            .windows(2)
            .all(|pair| Move::between(&pair[0], &pair[1]).is_some())
    }

    fn description() -> &'static str {
        "Each snapshot adds exactly one mark to its predecessor"
    }
}
