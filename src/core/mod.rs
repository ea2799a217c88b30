//! Core module - pure game logic with no external dependencies
//!
//! This module contains all the game rules, state management, and logic.
//! It has zero dependencies on UI, networking, or I/O.

pub mod board;
pub mod collision;
pub mod game;
pub mod piece;
pub mod rng;
pub mod scoring;
pub mod shapes;
pub mod timer;

// Re-export commonly used types
pub use board::Board;
pub use collision::collides;
pub use game::{Game, GameEvent, Phase};
pub use piece::ActivePiece;
pub use rng::SimpleRng;
pub use shapes::{canonical_shape, random_kind, ShapeMatrix};
pub use timer::DropTimer;
