//! Draw detection logic for tic-tac-toe.
//!
//! The timeline's status only distinguishes in-progress from won; a
//! full board simply has no legal moves left. These queries exist for
//! presentation layers that want to announce a stalemate anyway.

use super::win::check_winner;
use crate::types::{Board, Square};
use tracing::instrument;

/// Checks if the board is full (all squares occupied).
#[instrument]
pub fn is_full(board: &Board) -> bool {
    board.squares().iter().all(|s| *s != Square::Empty)
}

/// Checks if the board is a draw: full with no winner.
#[instrument]
pub fn is_draw(board: &Board) -> bool {
    is_full(board) && check_winner(board).is_none()
}
