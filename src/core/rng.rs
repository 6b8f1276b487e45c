//! RNG module - deterministic item spawning
//!
//! A simple LCG drives all randomness so that a seed fully determines a
//! game: color selection, bomb odds and the deal-in board. `ItemSpawner`
//! wraps the RNG and hands out items with fresh, monotonically increasing
//! ids.

use crate::types::{Cell, Item, ItemId, ItemKind, BOMB_KINDS, COLORS};

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        self.next_u32() % max
    }

    /// Pick a uniformly random element of a non-empty slice
    pub fn choose<T: Copy>(&mut self, slice: &[T]) -> T {
        slice[self.next_range(slice.len() as u32) as usize]
    }

    /// Shuffle a slice using Fisher-Yates
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        for i in (1..slice.len()).rev() {
            let j = self.next_range((i + 1) as u32) as usize;
            slice.swap(i, j);
        }
    }
}

/// Seeded source of fresh board items.
#[derive(Debug, Clone)]
pub struct ItemSpawner {
    rng: SimpleRng,
    next_id: u32,
    /// One in `bomb_odds` items is a bomb
    bomb_odds: u32,
}

impl ItemSpawner {
    pub fn new(seed: u32, bomb_odds: u32) -> Self {
        Self {
            rng: SimpleRng::new(seed),
            next_id: 0,
            bomb_odds,
        }
    }

    /// Spawn a fresh item: new id, uniform random color, bomb kind with
    /// probability 1 in `bomb_odds`, else Normal.
    pub fn next_item(&mut self) -> Item {
        let id = ItemId(self.next_id);
        self.next_id = self.next_id.wrapping_add(1);

        let color = self.rng.choose(&COLORS);
        let kind = if self.bomb_odds > 0 && self.rng.next_range(self.bomb_odds) == 0 {
            self.rng.choose(&BOMB_KINDS)
        } else {
            ItemKind::Normal
        };

        Item { id, color, kind }
    }

    /// Spawn a fresh occupied cell
    pub fn next_cell(&mut self) -> Cell {
        Some(self.next_item())
    }
}
