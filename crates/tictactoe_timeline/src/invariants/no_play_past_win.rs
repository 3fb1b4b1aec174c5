//! No play past win invariant: a decided board is never extended.

use super::Invariant;
use crate::rules;
use crate::timeline::Timeline;

/// Invariant: No snapshot extends a predecessor that already contains
/// a winning line.
///
/// `play` refuses to act on a won snapshot, and a branch made from an
/// earlier snapshot discards the winning future first, so no recorded
/// step can start from a decided board.
pub struct NoPlayPastWinInvariant;

impl Invariant<Timeline> for NoPlayPastWinInvariant {
    fn holds(timeline: &Timeline) -> bool {
        timeline
            .snapshots()
            .windows(2)
            .all(|pair| rules::check_winner(&pair[0]).is_none())
    }

    fn description() -> &'static str {
        "No snapshot extends a board that already has a winner"
    }
}
