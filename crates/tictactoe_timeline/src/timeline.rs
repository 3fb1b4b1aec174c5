//! Snapshot timeline: the game state engine.
//!
//! All game state lives in an append-only list of immutable board
//! snapshots plus a cursor selecting the active one. Moves, turn order,
//! and status are derived from the snapshots, never stored alongside
//! them. Playing from a rewound cursor discards the abandoned future;
//! branching history is not supported.

use crate::action::{Move, TimelineError};
use crate::invariants;
use crate::position::Position;
use crate::rules;
use crate::types::{Board, GameStatus, Player, Square};
use tracing::{debug, instrument, warn};

/// Game state engine holding the full snapshot history.
///
/// The history always contains at least the initial empty board, and
/// the cursor is always in bounds. Every operation is a synchronous,
/// pure computation over the owned state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Timeline {
    pub(crate) snapshots: Vec<Board>,
    pub(crate) cursor: usize,
}

impl Timeline {
    /// Creates a new timeline: one empty snapshot, cursor at the start.
    #[instrument]
    pub fn new() -> Self {
        Self {
            snapshots: vec![Board::new()],
            cursor: 0,
        }
    }

    /// Returns the full snapshot history, oldest first.
    pub fn snapshots(&self) -> &[Board] {
        &self.snapshots
    }

    /// Returns the index of the active snapshot.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Returns the active snapshot.
    pub fn current(&self) -> &Board {
        &self.snapshots[self.cursor]
    }

    /// Returns the player who moves next on the active snapshot.
    ///
    /// Derived from cursor parity: X moves on even indices, O on odd.
    pub fn to_move(&self) -> Player {
        if self.cursor % 2 == 0 {
            Player::X
        } else {
            Player::O
        }
    }

    /// Returns the winner on the active snapshot, if any.
    pub fn winner(&self) -> Option<Player> {
        rules::check_winner(self.current())
    }

    /// Returns the derived status of the active snapshot.
    pub fn status(&self) -> GameStatus {
        match self.winner() {
            Some(player) => GameStatus::Won(player),
            None => GameStatus::InProgress(self.to_move()),
        }
    }

    /// Plays the active player's mark at the given position.
    ///
    /// The move is silently ignored when the active snapshot already
    /// has a winner or the square is occupied; this is policy, not an
    /// error. On success the next snapshot is a copy of the active one
    /// with a single square set, any snapshots after the cursor are
    /// permanently discarded, and the cursor advances to the new tail.
    #[instrument(skip(self), fields(position = ?position, cursor = self.cursor))]
    pub fn play(&mut self, position: Position) {
        let current = &self.snapshots[self.cursor];
        if rules::check_winner(current).is_some() || !current.is_empty(position) {
            debug!("Move ignored");
            return;
        }

        let player = self.to_move();
        let mut next = current.clone();
        next.set(position, Square::Occupied(player));

        self.snapshots.truncate(self.cursor + 1);
        self.snapshots.push(next);
        self.cursor = self.snapshots.len() - 1;

        debug!(player = ?player, history_len = self.snapshots.len(), "Move applied");
        invariants::assert_timeline(self);
    }

    /// Moves the cursor to the snapshot at `index`.
    ///
    /// History is never modified by a jump; only [`Timeline::play`]
    /// truncates, and only when the cursor is not at the tail.
    ///
    /// # Errors
    ///
    /// Returns [`TimelineError::OutOfRange`] if `index` does not name a
    /// recorded snapshot.
    #[instrument(skip(self))]
    pub fn jump_to(&mut self, index: usize) -> Result<(), TimelineError> {
        if index >= self.snapshots.len() {
            warn!(len = self.snapshots.len(), "Jump target out of range");
            return Err(TimelineError::OutOfRange {
                index,
                len: self.snapshots.len(),
            });
        }
        self.cursor = index;
        Ok(())
    }

    /// Reconstructs the move log by diffing consecutive snapshots.
    ///
    /// One entry per step; entry i is the move that produced snapshot
    /// i + 1.
    pub fn moves(&self) -> Vec<Move> {
        self.snapshots
            .windows(2)
            .filter_map(|pair| Move::between(&pair[0], &pair[1]))
            .collect()
    }

    /// Returns the empty squares of the active snapshot.
    pub fn valid_moves(&self) -> Vec<Position> {
        Position::valid_moves(self.current())
    }
}

impl Default for Timeline {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_timeline() {
        let timeline = Timeline::new();
        assert_eq!(timeline.snapshots().len(), 1);
        assert_eq!(timeline.cursor(), 0);
        assert_eq!(timeline.to_move(), Player::X);
        assert_eq!(timeline.winner(), None);
        assert!(timeline.current().is_empty(Position::Center));
    }

    #[test]
    fn test_play_appends_snapshot() {
        let mut timeline = Timeline::new();
        timeline.play(Position::Center);

        assert_eq!(timeline.snapshots().len(), 2);
        assert_eq!(timeline.cursor(), 1);
        assert_eq!(
            timeline.current().get(Position::Center),
            Square::Occupied(Player::X)
        );
        assert_eq!(timeline.to_move(), Player::O);
    }

    #[test]
    fn test_earlier_snapshots_untouched() {
        let mut timeline = Timeline::new();
        timeline.play(Position::Center);
        assert!(timeline.snapshots()[0].is_empty(Position::Center));
    }

    #[test]
    fn test_occupied_square_ignored() {
        let mut timeline = Timeline::new();
        timeline.play(Position::Center);

        let before = timeline.clone();
        timeline.play(Position::Center);
        assert_eq!(timeline, before);
    }

    #[test]
    fn test_jump_to_rederives_turn() {
        let mut timeline = Timeline::new();
        timeline.play(Position::Center);
        timeline.play(Position::TopLeft);
        timeline.play(Position::TopRight);

        timeline.jump_to(1).unwrap();
        assert_eq!(timeline.to_move(), Player::O);
        timeline.jump_to(2).unwrap();
        assert_eq!(timeline.to_move(), Player::X);
    }

    #[test]
    fn test_jump_out_of_range() {
        let mut timeline = Timeline::new();
        let err = timeline.jump_to(1).unwrap_err();
        assert_eq!(err, TimelineError::OutOfRange { index: 1, len: 1 });
        assert_eq!(timeline.cursor(), 0);
    }

    #[test]
    fn test_play_from_past_truncates() {
        let mut timeline = Timeline::new();
        timeline.play(Position::Center);
        timeline.play(Position::TopLeft);
        timeline.play(Position::TopRight);
        assert_eq!(timeline.snapshots().len(), 4);

        timeline.jump_to(1).unwrap();
        timeline.play(Position::BottomLeft);

        assert_eq!(timeline.snapshots().len(), 3);
        assert_eq!(timeline.cursor(), 2);
        // The branch is O's move now, not the abandoned X move.
        assert_eq!(
            timeline.current().get(Position::BottomLeft),
            Square::Occupied(Player::O)
        );
        assert!(timeline.current().is_empty(Position::TopLeft));
    }

    #[test]
    fn test_moves_log() {
        let mut timeline = Timeline::new();
        timeline.play(Position::Center);
        timeline.play(Position::TopLeft);

        let moves = timeline.moves();
        assert_eq!(moves.len(), 2);
        assert_eq!(moves[0], Move::new(Player::X, Position::Center));
        assert_eq!(moves[1], Move::new(Player::O, Position::TopLeft));
    }

    #[test]
    fn test_status_in_progress() {
        let timeline = Timeline::new();
        assert_eq!(timeline.status(), GameStatus::InProgress(Player::X));
        assert_eq!(timeline.status().to_string(), "Next Player: X");
    }

    #[test]
    fn test_valid_moves_shrink() {
        let mut timeline = Timeline::new();
        assert_eq!(timeline.valid_moves().len(), 9);
        timeline.play(Position::Center);
        assert_eq!(timeline.valid_moves().len(), 8);
        assert!(!timeline.valid_moves().contains(&Position::Center));
    }
}
