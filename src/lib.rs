//! Terminal match-three puzzle.
//!
//! The deterministic board engine and session state live in [`core`];
//! [`term`] and [`input`] are the thin terminal presentation layer used by
//! the default binary.

pub mod core;
pub mod input;
pub mod term;
pub mod types;
