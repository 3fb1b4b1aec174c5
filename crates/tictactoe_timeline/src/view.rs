//! Serializable boundary view for the presentation layer.
//!
//! The engine's caller re-renders from this after every call: the full
//! history (for the "go to move" list), the cursor, the active board,
//! and the rendered status line.

use crate::timeline::Timeline;
use crate::types::Board;
use serde::{Deserialize, Serialize};

/// Snapshot of everything a presentation layer needs to render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineView {
    /// Full snapshot history, oldest first.
    pub history: Vec<Board>,
    /// Index of the active snapshot.
    pub cursor: usize,
    /// The active snapshot.
    pub board: Board,
    /// Rendered status line ("Next Player: X" or "Winner: O").
    pub status: String,
}

impl From<&Timeline> for TimelineView {
    fn from(timeline: &Timeline) -> Self {
        Self {
            history: timeline.snapshots().to_vec(),
            cursor: timeline.cursor(),
            board: timeline.current().clone(),
            status: timeline.status().to_string(),
        }
    }
}
