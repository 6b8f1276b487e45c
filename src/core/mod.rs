//! Core module - pure game logic with no external dependencies
//!
//! This module contains all the match-three rules and state management.
//! It has zero dependencies on UI, networking, or I/O.

pub mod board;
pub mod cascade;
pub mod game_state;
pub mod geometry;
pub mod rng;

// Re-export commonly used types
pub use board::{is_adjacent, Board};
pub use cascade::{CascadeController, CascadePhase};
pub use game_state::GameState;
pub use rng::{ItemSpawner, SimpleRng};
