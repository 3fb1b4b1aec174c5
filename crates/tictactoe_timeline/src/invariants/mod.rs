//! First-class invariants for the snapshot timeline.
//!
//! Invariants are logical properties that must hold throughout game
//! execution. They are testable independently and serve as
//! documentation of system guarantees.

#[cfg(kani)]
mod verification;

use crate::timeline::Timeline;
use tracing::instrument;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// This trait enables composition of multiple invariants into a single
/// verification step. Implementations are provided for tuples.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set.
    ///
    /// Returns Ok(()) if all invariants hold, or Err with a list of
    /// violations if any invariant fails.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

// Implement InvariantSet for 4-tuples
impl<S, I1, I2, I3, I4> InvariantSet<S> for (I1, I2, I3, I4)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
    I4: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }

        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }

        if !I3::holds(state) {
            violations.push(InvariantViolation::new(I3::description()));
        }

        if !I4::holds(state) {
            violations.push(InvariantViolation::new(I4::description()));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

// Implement InvariantSet for 2-tuples
impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }

        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

pub mod alternating_mark;
pub mod no_play_past_win;
pub mod non_empty_history;
pub mod single_step;

pub use alternating_mark::AlternatingMarkInvariant;
pub use no_play_past_win::NoPlayPastWinInvariant;
pub use non_empty_history::NonEmptyHistoryInvariant;
pub use single_step::SingleStepInvariant;

/// All timeline invariants as a composable set.
pub type TimelineInvariants = (
    NonEmptyHistoryInvariant,
    SingleStepInvariant,
    AlternatingMarkInvariant,
    NoPlayPastWinInvariant,
);

/// Asserts that all timeline invariants hold (debug builds only).
#[instrument(skip(timeline))]
pub fn assert_timeline(timeline: &Timeline) {
    debug_assert!(
        NonEmptyHistoryInvariant::holds(timeline),
        "History emptied or cursor out of bounds"
    );
    debug_assert!(
        SingleStepInvariant::holds(timeline),
        "A step changed more than one square"
    );
    debug_assert!(
        AlternatingMarkInvariant::holds(timeline),
        "Marks stopped alternating"
    );
    debug_assert!(
        NoPlayPastWinInvariant::holds(timeline),
        "A snapshot extended a decided board"
    );
}
