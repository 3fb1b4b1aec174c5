//! Derived move events and the engine error type.
//!
//! The timeline stores board snapshots, not moves. A [`Move`] is
//! reconstructed on demand as the single-square difference between two
//! consecutive snapshots, so the move log can never disagree with the
//! boards it describes.

use crate::position::Position;
use crate::types::{Board, Player, Square};
use serde::{Deserialize, Serialize};

/// A move in tic-tac-toe: a player placing their mark at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The player making the move.
    pub player: Player,
    /// The position where the player places their mark.
    pub position: Position,
}

impl Move {
    /// Creates a new move.
    pub fn new(player: Player, position: Position) -> Self {
        Self { player, position }
    }

    /// Reconstructs the move separating two consecutive snapshots.
    ///
    /// Returns `Some` only if `next` differs from `prev` in exactly one
    /// square, which transitions from empty to occupied. Any other
    /// difference means the pair are not a legal step.
    pub fn between(prev: &Board, next: &Board) -> Option<Move> {
        let mut found = None;
        for pos in Position::ALL {
            match (prev.get(pos), next.get(pos)) {
                (before, after) if before == after => {}
                (Square::Empty, Square::Occupied(player)) => {
                    if found.is_some() {
                        return None;
                    }
                    found = Some(Move::new(player, pos));
                }
                _ => return None,
            }
        }
        found
    }

    /// Returns the player making this move.
    pub fn player(&self) -> Player {
        self.player
    }

    /// Returns the position of this move.
    pub fn position(&self) -> Position {
        self.position
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.player, self.position.label())
    }
}

/// Error returned when addressing a snapshot outside the recorded history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum TimelineError {
    /// The requested snapshot index does not exist.
    #[display("Snapshot index {index} is out of range (history length {len})")]
    OutOfRange {
        /// The requested index.
        index: usize,
        /// Length of the history at the time of the request.
        len: usize,
    },
}

impl std::error::Error for TimelineError {}
