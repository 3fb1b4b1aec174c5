//! Non-empty history invariant: the initial snapshot always exists.

use super::Invariant;
use crate::timeline::Timeline;

/// Invariant: History contains at least the initial snapshot and the
/// cursor names a recorded snapshot.
///
/// Truncation on a branch keeps everything up to and including the
/// cursor, so neither `play` nor `jump_to` can empty the history or
/// strand the cursor.
pub struct NonEmptyHistoryInvariant;

impl Invariant<Timeline> for NonEmptyHistoryInvariant {
    fn holds(timeline: &Timeline) -> bool {
        !timeline.snapshots().is_empty() && timeline.cursor() < timeline.snapshots().len()
    }

    fn description() -> &'static str {
        "History contains the initial snapshot and the cursor is in bounds"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::position::Position;

    #[test]
    fn test_new_timeline_holds() {
        let timeline = Timeline::new();
        assert!(NonEmptyHistoryInvariant::holds(&timeline));
    }

    #[test]
    fn test_holds_after_branching() {
        let mut timeline = Timeline::new();
        timeline.play(Position::Center);
        timeline.play(Position::TopLeft);
        timeline.jump_to(0).unwrap();
        timeline.play(Position::BottomRight);

        assert!(NonEmptyHistoryInvariant::holds(&timeline));
    }

    #[test]
    fn test_emptied_history_violates() {
        let mut timeline = Timeline::new();
        timeline.snapshots.clear();
        assert!(!NonEmptyHistoryInvariant::holds(&timeline));
    }

    #[test]
    fn test_stranded_cursor_violates() {
        let mut timeline = Timeline::new();
        timeline.cursor = 5;
        assert!(!NonEmptyHistoryInvariant::holds(&timeline));
    }
}
