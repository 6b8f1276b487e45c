//! Core types shared across the application
//! This module contains pure data types with no external dependencies

/// Default board dimensions
pub const DEFAULT_COLUMNS: usize = 7;
pub const DEFAULT_ROWS: usize = 7;

/// Game timing constants (in milliseconds)
pub const TICK_MS: u32 = 16;
pub const CASCADE_PHASE_MS: u32 = 333;
pub const SWAP_REVERT_MS: u32 = 500;
pub const DEAL_IN_DELAY_MS: u32 = 500;

/// One in `BOMB_SPAWN_ODDS` freshly spawned items is a bomb
pub const BOMB_SPAWN_ODDS: u32 = 20;

/// Minimum run length that counts as a match
pub const MATCH_RUN_LEN: usize = 3;

/// Radius-bomb blast radius (Euclidean; 1.5 covers the 3x3 block)
pub const BOMB_RADIUS: f64 = 1.5;

/// Grid coordinate as (column, row). Row 0 is the top of a column;
/// items fall toward higher row indexes.
pub type Coord = (i8, i8);

/// Item colors (fixed palette)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Red,
    Blue,
    Yellow,
    Green,
    Purple,
}

/// The full palette, used for uniform random color selection
pub const COLORS: [Color; 5] = [
    Color::Red,
    Color::Blue,
    Color::Yellow,
    Color::Green,
    Color::Purple,
];

/// Item kinds. The three bomb variants trigger auxiliary clears when they
/// are part of a match. The set is closed on purpose: every dispatch site
/// is an exhaustive match, so a new bomb kind fails to compile until each
/// site is updated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ItemKind {
    Normal,
    ColorBomb,
    RadiusBomb,
    LineBomb,
}

/// The bomb variants, used for uniform random bomb selection
pub const BOMB_KINDS: [ItemKind; 3] = [
    ItemKind::ColorBomb,
    ItemKind::RadiusBomb,
    ItemKind::LineBomb,
];

impl ItemKind {
    pub fn is_bomb(&self) -> bool {
        !matches!(self, ItemKind::Normal)
    }
}

/// Stable item identity, independent of board position.
///
/// Identity survives swap and collapse so the presentation layer can
/// animate continuity; freshly spawned items always get a new id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ItemId(pub u32);

/// A single board item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Item {
    pub id: ItemId,
    pub color: Color,
    pub kind: ItemKind,
}

/// Cell on the board (None = empty, Some = occupied by an item)
pub type Cell = Option<Item>;

/// Externally visible session status.
///
/// `Collapsing` exactly while the cascade controller owns the board; no
/// user-initiated swap is processed in that window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    Idle,
    Collapsing,
}

/// Board-engine tuning knobs
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rules {
    /// Minimum run length that counts as a match
    pub match_run_len: usize,
    /// Radius-bomb blast radius (Euclidean)
    pub bomb_radius: f64,
}

impl Default for Rules {
    fn default() -> Self {
        Self {
            match_run_len: MATCH_RUN_LEN,
            bomb_radius: BOMB_RADIUS,
        }
    }
}

/// Full game configuration
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    pub columns: usize,
    pub rows: usize,
    /// One in `bomb_spawn_odds` spawned items is a bomb
    pub bomb_spawn_odds: u32,
    pub rules: Rules,
    /// Pause between cascade sub-phases (clear/collapse/fill)
    pub phase_delay_ms: u32,
    /// Delay before a no-match swap is reverted
    pub revert_delay_ms: u32,
    /// Delay before the initial board is dealt in
    pub deal_in_delay_ms: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            columns: DEFAULT_COLUMNS,
            rows: DEFAULT_ROWS,
            bomb_spawn_odds: BOMB_SPAWN_ODDS,
            rules: Rules::default(),
            phase_delay_ms: CASCADE_PHASE_MS,
            revert_delay_ms: SWAP_REVERT_MS,
            deal_in_delay_ms: DEAL_IN_DELAY_MS,
        }
    }
}

impl Config {
    /// Configuration with every delay set to zero, so each timer fires on
    /// the next tick. Used by headless tests and benchmarks.
    pub fn headless(columns: usize, rows: usize) -> Self {
        Self {
            columns,
            rows,
            phase_delay_ms: 0,
            revert_delay_ms: 0,
            deal_in_delay_ms: 0,
            ..Self::default()
        }
    }
}
