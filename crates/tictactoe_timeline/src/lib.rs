//! Tic-tac-toe game state engine with snapshot history and time travel.
//!
//! # Architecture
//!
//! - **Timeline**: append-only history of immutable board snapshots
//!   with a cursor selecting the active one
//! - **Rules**: pure win and draw detection over a single snapshot
//! - **View**: serializable boundary struct for a presentation layer
//! - **Invariants**: first-class, independently testable properties of
//!   the timeline
//!
//! Turn order is derived from cursor parity and moves are reconstructed
//! by diffing snapshots, so neither can drift from the recorded boards.
//! Playing on an occupied square or a decided board is silently
//! ignored; playing from a rewound cursor discards the abandoned
//! future.
//!
//! # Example
//!
//! ```
//! use tictactoe_timeline::{GameStatus, Player, Position, Timeline};
//!
//! let mut game = Timeline::new();
//! game.play(Position::TopLeft); // X
//! game.play(Position::Center); // O
//! game.play(Position::TopCenter); // X
//! game.play(Position::BottomLeft); // O
//! game.play(Position::TopRight); // X wins the top row
//!
//! assert_eq!(game.status(), GameStatus::Won(Player::X));
//! assert_eq!(game.snapshots().len(), 6);
//!
//! // Time travel: revisit the start, then branch.
//! game.jump_to(0)?;
//! assert_eq!(game.status().to_string(), "Next Player: X");
//! game.play(Position::Center);
//! assert_eq!(game.snapshots().len(), 2);
//! # Ok::<(), tictactoe_timeline::TimelineError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod action;
mod position;
mod timeline;
mod types;
mod view;

// Public modules with trait machinery worth naming by path
pub mod invariants;
pub mod rules;

// Crate-level exports - Engine
pub use timeline::Timeline;

// Crate-level exports - Domain types
pub use action::{Move, TimelineError};
pub use position::Position;
pub use types::{Board, GameStatus, Player, Square};

// Crate-level exports - Boundary view
pub use view::TimelineView;

// Crate-level exports - Invariants
pub use invariants::{
    AlternatingMarkInvariant, Invariant, InvariantSet, InvariantViolation, NoPlayPastWinInvariant,
    NonEmptyHistoryInvariant, SingleStepInvariant, TimelineInvariants,
};

// Crate-level exports - Rules
pub use rules::{check_winner, is_draw, is_full};
