//! Geometry helpers for grid coordinates.

use crate::types::Coord;

/// Squared Euclidean distance between two grid coordinates.
///
/// Exact in integers, so it is the right tool for equality checks
/// (adjacency is `distance_sq == 1`, never a float comparison).
pub fn distance_sq(a: Coord, b: Coord) -> i32 {
    let dx = a.0 as i32 - b.0 as i32;
    let dy = a.1 as i32 - b.1 as i32;
    dx * dx + dy * dy
}

/// Euclidean distance between two grid coordinates.
pub fn distance(a: Coord, b: Coord) -> f64 {
    (distance_sq(a, b) as f64).sqrt()
}
