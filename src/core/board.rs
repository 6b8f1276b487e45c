//! Board module - the pure match-three engine
//!
//! The board is a rectangular grid of cells indexed `[column][row]`; row 0
//! is the top of a column. Board values are immutable: every
//! transformation returns a new board, so readers always see a complete,
//! consistent snapshot.
//!
//! Clearing is computed as boolean masks: one mask per contributing pass
//! (column runs, row runs, one per detonating bomb) merged with OR, all
//! evaluated against the original pre-clear board.

use crate::core::geometry::{distance, distance_sq};
use crate::core::rng::ItemSpawner;
use crate::types::{Cell, Coord, ItemKind, Rules};

/// The game board: columns of cells, every column the same length.
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    cells: Vec<Vec<Cell>>,
}

/// Per-cell "cleared" flags, same shape as the board it was built from.
#[derive(Debug, Clone)]
struct ClearMask {
    bits: Vec<Vec<bool>>,
}

impl ClearMask {
    fn new(columns: usize, rows: usize) -> Self {
        Self {
            bits: vec![vec![false; rows]; columns],
        }
    }

    fn mark(&mut self, column: usize, row: usize) {
        self.bits[column][row] = true;
    }

    fn is_marked(&self, column: usize, row: usize) -> bool {
        self.bits[column][row]
    }

    /// OR the other mask into this one
    fn merge(&mut self, other: &ClearMask) {
        for (column, other_column) in self.bits.iter_mut().zip(&other.bits) {
            for (bit, other_bit) in column.iter_mut().zip(other_column) {
                *bit |= other_bit;
            }
        }
    }
}

/// Every coordinate must be representable as `Coord`, so dimensions are
/// capped at `i8::MAX` per axis. Checked at board construction.
fn assert_dimensions(columns: usize, rows: usize) {
    assert!(
        columns <= i8::MAX as usize && rows <= i8::MAX as usize,
        "board dimensions must fit in the coordinate range"
    );
}

impl Board {
    /// A board with no columns at all (the pre-deal-in placeholder)
    pub fn empty() -> Self {
        Self { cells: Vec::new() }
    }

    /// An all-empty board of the given dimensions
    pub fn new_empty(columns: usize, rows: usize) -> Self {
        assert_dimensions(columns, rows);
        Self {
            cells: vec![vec![None; rows]; columns],
        }
    }

    /// Build a board from explicit columns.
    ///
    /// Rectangularity and dimensions are construction-time contracts, not
    /// runtime error categories: a ragged or oversized grid is a
    /// programming mistake.
    pub fn from_columns(cells: Vec<Vec<Cell>>) -> Self {
        if let Some(first) = cells.first() {
            assert!(
                cells.iter().all(|column| column.len() == first.len()),
                "board columns must all have the same length"
            );
            assert_dimensions(cells.len(), first.len());
        }
        Self { cells }
    }

    /// A board of the given dimensions filled entirely with fresh random items
    pub fn random(spawner: &mut ItemSpawner, columns: usize, rows: usize) -> Self {
        assert_dimensions(columns, rows);
        let cells = (0..columns)
            .map(|_| (0..rows).map(|_| spawner.next_cell()).collect())
            .collect();
        Self { cells }
    }

    /// Number of columns
    pub fn columns(&self) -> usize {
        self.cells.len()
    }

    /// Number of rows (0 for the no-column board)
    pub fn rows(&self) -> usize {
        self.cells.first().map_or(0, Vec::len)
    }

    /// Whether a coordinate lies on the board
    pub fn contains(&self, coord: Coord) -> bool {
        let (column, row) = coord;
        column >= 0 && (column as usize) < self.columns() && row >= 0 && (row as usize) < self.rows()
    }

    /// Get the cell at a coordinate; out-of-range reads as empty.
    pub fn get(&self, coord: Coord) -> Cell {
        if self.contains(coord) {
            self.cells[coord.0 as usize][coord.1 as usize]
        } else {
            None
        }
    }

    /// A copy of this board with one cell replaced; out-of-range is a no-op.
    pub fn with_cell(&self, coord: Coord, cell: Cell) -> Board {
        let mut next = self.clone();
        if next.contains(coord) {
            next.cells[coord.0 as usize][coord.1 as usize] = cell;
        }
        next
    }

    /// Iterate all coordinates in column-major order
    pub fn coords(&self) -> impl Iterator<Item = Coord> + '_ {
        let rows = self.rows();
        (0..self.columns()).flat_map(move |column| (0..rows).map(move |row| (column as i8, row as i8)))
    }

    /// Mark maximal vertical runs (within each column) of length >= `min_run`.
    ///
    /// Empty cells never equal anything, including other empty cells, and
    /// always break a run. Color is the only match key; kinds run together.
    fn column_run_mask(&self, min_run: usize) -> ClearMask {
        let mut mask = ClearMask::new(self.columns(), self.rows());
        for (column, cells) in self.cells.iter().enumerate() {
            let mut start = 0;
            while start < cells.len() {
                let Some(item) = cells[start] else {
                    start += 1;
                    continue;
                };
                let mut end = start + 1;
                while end < cells.len()
                    && cells[end].map(|other| other.color) == Some(item.color)
                {
                    end += 1;
                }
                if end - start >= min_run {
                    for row in start..end {
                        mask.mark(column, row);
                    }
                }
                start = end;
            }
        }
        mask
    }

    /// The column-run procedure applied to the transposed grid:
    /// maximal horizontal runs within each row.
    fn row_run_mask(&self, min_run: usize) -> ClearMask {
        let mut mask = ClearMask::new(self.columns(), self.rows());
        for row in 0..self.rows() {
            let mut start = 0;
            while start < self.columns() {
                let Some(item) = self.cells[start][row] else {
                    start += 1;
                    continue;
                };
                let mut end = start + 1;
                while end < self.columns()
                    && self.cells[end][row].map(|other| other.color) == Some(item.color)
                {
                    end += 1;
                }
                if end - start >= min_run {
                    for column in start..end {
                        mask.mark(column, row);
                    }
                }
                start = end;
            }
        }
        mask
    }

    /// The full clear mask: matched runs plus every detonating bomb's
    /// auxiliary clear, all computed against this (pre-clear) board.
    ///
    /// A bomb detonates iff its own cell is in the matched set; bombs
    /// swept away by another bomb's blast do not chain.
    fn clear_mask(&self, rules: &Rules) -> ClearMask {
        let column_runs = self.column_run_mask(rules.match_run_len);
        let row_runs = self.row_run_mask(rules.match_run_len);

        let mut matched = column_runs.clone();
        matched.merge(&row_runs);

        let mut total = matched.clone();
        for coord in self.coords() {
            let (column, row) = (coord.0 as usize, coord.1 as usize);
            if !matched.is_marked(column, row) {
                continue;
            }
            let Some(item) = self.cells[column][row] else {
                continue;
            };
            match item.kind {
                ItemKind::Normal => {}
                ItemKind::RadiusBomb => {
                    for other in self.coords() {
                        if distance(coord, other) <= rules.bomb_radius {
                            total.mark(other.0 as usize, other.1 as usize);
                        }
                    }
                }
                ItemKind::ColorBomb => {
                    for other in self.coords() {
                        if self.get(other).map(|o| o.color) == Some(item.color) {
                            total.mark(other.0 as usize, other.1 as usize);
                        }
                    }
                }
                ItemKind::LineBomb => {
                    // Column and/or row, depending on which axis matched.
                    if column_runs.is_marked(column, row) {
                        for r in 0..self.rows() {
                            total.mark(column, r);
                        }
                    }
                    if row_runs.is_marked(column, row) {
                        for c in 0..self.columns() {
                            total.mark(c, row);
                        }
                    }
                }
            }
        }
        total
    }

    /// Apply one full clear pass: match detection plus bomb resolution.
    pub fn clear(&self, rules: &Rules) -> Board {
        let mask = self.clear_mask(rules);
        let cells = self
            .cells
            .iter()
            .enumerate()
            .map(|(column, cells)| {
                cells
                    .iter()
                    .enumerate()
                    .map(|(row, cell)| {
                        if mask.is_marked(column, row) {
                            None
                        } else {
                            *cell
                        }
                    })
                    .collect()
            })
            .collect();
        Board { cells }
    }

    /// Gravity: within each column, items sink to the bottom (higher row
    /// indexes) keeping their relative order; empties rise to the top.
    pub fn collapse(&self) -> Board {
        let cells = self
            .cells
            .iter()
            .map(|column| {
                let items: Vec<Cell> = column.iter().filter(|cell| cell.is_some()).copied().collect();
                let mut collapsed = vec![None; column.len() - items.len()];
                collapsed.extend(items);
                collapsed
            })
            .collect();
        Board { cells }
    }

    /// Replace every empty cell with a freshly spawned item; occupied
    /// cells are untouched and keep their ids.
    pub fn fill(&self, spawner: &mut ItemSpawner) -> Board {
        let cells = self
            .cells
            .iter()
            .map(|column| {
                column
                    .iter()
                    .map(|cell| match cell {
                        Some(item) => Some(*item),
                        None => spawner.next_cell(),
                    })
                    .collect()
            })
            .collect();
        Board { cells }
    }

    /// A board is stable iff a full clear pass leaves it unchanged:
    /// no pending matches, no bombs left to trigger.
    pub fn is_stable(&self, rules: &Rules) -> bool {
        self.clear(rules) == *self
    }

    /// Exchange the cells at two coordinates. If either coordinate is out
    /// of range the board is returned unchanged. Self-inverse.
    pub fn swap(&self, a: Coord, b: Coord) -> Board {
        if !self.contains(a) || !self.contains(b) {
            return self.clone();
        }
        let mut next = self.clone();
        let cell_a = next.cells[a.0 as usize][a.1 as usize];
        let cell_b = next.cells[b.0 as usize][b.1 as usize];
        next.cells[a.0 as usize][a.1 as usize] = cell_b;
        next.cells[b.0 as usize][b.1 as usize] = cell_a;
        next
    }
}

/// Two coordinates are adjacent iff their Euclidean distance is exactly 1,
/// i.e. orthogonal neighbors only; diagonals are sqrt(2) away.
pub fn is_adjacent(a: Coord, b: Coord) -> bool {
    distance_sq(a, b) == 1
}
