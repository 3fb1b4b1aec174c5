//! Formal verification of invariants using Kani model checker.
//!
//! These proof harnesses verify that invariants hold for ALL play
//! sequences up to a small bound.

#[cfg(kani)]
mod proofs {
    use crate::{
        AlternatingMarkInvariant, Invariant, NoPlayPastWinInvariant, NonEmptyHistoryInvariant,
        Position, SingleStepInvariant, Timeline,
    };

    /// Drives a timeline through an arbitrary short sequence of plays.
    fn arbitrary_timeline(max_steps: usize) -> Timeline {
        let mut timeline = Timeline::new();
        let steps: usize = kani::any();
        kani::assume(steps <= max_steps);

        for _ in 0..steps {
            let index: usize = kani::any();
            kani::assume(index < 9);
            if let Some(position) = Position::from_index(index) {
                timeline.play(position);
            }
        }

        timeline
    }

    /// Verify the history is never emptied and the cursor stays in bounds.
    #[kani::proof]
    #[kani::unwind(5)]
    fn verify_non_empty_history() {
        let timeline = arbitrary_timeline(3);
        assert!(
            NonEmptyHistoryInvariant::holds(&timeline),
            "NonEmptyHistoryInvariant violated"
        );
    }

    /// Verify every recorded step adds exactly one mark.
    #[kani::proof]
    #[kani::unwind(5)]
    fn verify_single_step() {
        let timeline = arbitrary_timeline(3);
        assert!(
            SingleStepInvariant::holds(&timeline),
            "SingleStepInvariant violated"
        );
    }

    /// Verify marks alternate and no decided board is extended.
    #[kani::proof]
    #[kani::unwind(5)]
    fn verify_play_discipline() {
        let timeline = arbitrary_timeline(3);
        assert!(
            AlternatingMarkInvariant::holds(&timeline),
            "AlternatingMarkInvariant violated"
        );
        assert!(
            NoPlayPastWinInvariant::holds(&timeline),
            "NoPlayPastWinInvariant violated"
        );
    }
}
