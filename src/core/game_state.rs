//! Game state module - the owned session store
//!
//! `GameState` holds the one shared mutable triple (board, grabbed,
//! status) plus the cascade controller and item spawner, and exposes the
//! grab/drop surface to the presentation layer. Everything is driven by
//! `tick(elapsed_ms)`: the deal-in timer, the optimistic-swap revert
//! timer, the cascade transition rule and the cascade phases themselves.
//! No globals; tests construct isolated instances.

use crate::core::board::{is_adjacent, Board};
use crate::core::cascade::{CascadeController, CascadePhase};
use crate::core::rng::ItemSpawner;
use crate::types::{Config, Coord, Status};

/// Captured pre-swap board waiting to be republished.
///
/// The revert republishes unconditionally when the timer fires, even if
/// the board has moved on in the meantime; `version` is the hook for a
/// compare-and-swap resolution should that ever need to change.
#[derive(Debug, Clone)]
struct PendingRevert {
    board: Board,
    timer_ms: u32,
}

/// Complete session state
#[derive(Debug, Clone)]
pub struct GameState {
    config: Config,
    board: Board,
    grabbed: Option<Coord>,
    status: Status,
    /// Bumped on every board publication, so observers can detect change
    version: u64,
    cascade: CascadeController,
    spawner: ItemSpawner,
    /// Remaining time until the initial random board is dealt in
    deal_in_timer_ms: Option<u32>,
    pending_revert: Option<PendingRevert>,
}

impl GameState {
    /// Create a new session: empty board published immediately, the real
    /// board dealt in after `config.deal_in_delay_ms`.
    pub fn new(config: Config, seed: u32) -> Self {
        Self {
            config,
            board: Board::empty(),
            grabbed: None,
            status: Status::Idle,
            version: 0,
            cascade: CascadeController::new(config.phase_delay_ms),
            spawner: ItemSpawner::new(seed, config.bomb_spawn_odds),
            deal_in_timer_ms: Some(config.deal_in_delay_ms),
            pending_revert: None,
        }
    }

    /// Create a session that starts from a known board, skipping the
    /// deal-in. The first tick runs the cascade rule against it as usual.
    pub fn with_board(config: Config, seed: u32, board: Board) -> Self {
        let mut state = Self::new(config, seed);
        state.deal_in_timer_ms = None;
        state.board = board;
        state
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn grabbed(&self) -> Option<Coord> {
        self.grabbed
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn columns(&self) -> usize {
        self.board.columns()
    }

    pub fn rows(&self) -> usize {
        self.board.rows()
    }

    /// Whether a cascade is in progress (the structural guard, not `status`)
    pub fn cascade_busy(&self) -> bool {
        self.cascade.is_busy()
    }

    /// Record a coordinate as grabbed. No-op while the board is collapsing.
    pub fn grab(&mut self, coord: Coord) {
        if self.status == Status::Collapsing {
            return;
        }
        self.grabbed = Some(coord);
    }

    /// Release the grab; if a different cell was grabbed and the board is
    /// not collapsing, attempt a swap between the two.
    pub fn drop(&mut self, coord: Coord) {
        let Some(from) = self.grabbed.take() else {
            return;
        };
        if self.status == Status::Collapsing || from == coord {
            return;
        }
        self.attempt_swap(from, coord);
    }

    /// Swap two adjacent cells, optimistically publishing the result.
    ///
    /// If the swap produced no match (the board is still stable) the
    /// pre-swap board is republished after `config.revert_delay_ms`.
    /// Non-adjacent coordinates are a no-op.
    pub fn attempt_swap(&mut self, a: Coord, b: Coord) {
        if !is_adjacent(a, b) {
            return;
        }
        let previous = self.board.clone();
        let swapped = self.board.swap(a, b);
        self.publish(swapped);

        if self.board.is_stable(&self.config.rules) {
            self.pending_revert = Some(PendingRevert {
                board: previous,
                timer_ms: self.config.revert_delay_ms,
            });
        }
    }

    /// Re-deal: back to the empty board with the deal-in timer armed.
    /// The spawner keeps running, so the next board is a fresh one.
    pub fn restart(&mut self) {
        self.cascade.finish();
        self.status = Status::Idle;
        self.grabbed = None;
        self.pending_revert = None;
        self.deal_in_timer_ms = Some(self.config.deal_in_delay_ms);
        self.publish(Board::empty());
    }

    /// Advance all timers and run due work. This is the single cooperative
    /// scheduling point: deal-in, pending revert, then the cascade.
    pub fn tick(&mut self, elapsed_ms: u32) {
        self.tick_deal_in(elapsed_ms);
        self.tick_revert(elapsed_ms);
        self.tick_cascade(elapsed_ms);
    }

    fn publish(&mut self, board: Board) {
        self.board = board;
        self.version = self.version.wrapping_add(1);
    }

    fn tick_deal_in(&mut self, elapsed_ms: u32) {
        let Some(timer) = self.deal_in_timer_ms else {
            return;
        };
        let remaining = timer.saturating_sub(elapsed_ms);
        if remaining > 0 {
            self.deal_in_timer_ms = Some(remaining);
            return;
        }
        self.deal_in_timer_ms = None;
        let board = Board::random(&mut self.spawner, self.config.columns, self.config.rows);
        self.publish(board);
    }

    fn tick_revert(&mut self, elapsed_ms: u32) {
        let Some(mut revert) = self.pending_revert.take() else {
            return;
        };
        let remaining = revert.timer_ms.saturating_sub(elapsed_ms);
        if remaining > 0 {
            revert.timer_ms = remaining;
            self.pending_revert = Some(revert);
            return;
        }
        // Unconditional republish of the captured board.
        self.publish(revert.board);
    }

    fn tick_cascade(&mut self, elapsed_ms: u32) {
        // Transition rule, re-evaluated every tick: start iff no cascade is
        // running, nothing is grabbed and the board is not stable.
        if !self.cascade.is_busy()
            && self.grabbed.is_none()
            && self.board.columns() > 0
            && !self.board.is_stable(&self.config.rules)
        {
            self.cascade.begin();
            self.status = Status::Collapsing;
        }

        let Some(phase) = self.cascade.tick(elapsed_ms) else {
            return;
        };
        let next = match phase {
            CascadePhase::Clear => self.board.clear(&self.config.rules),
            CascadePhase::Collapse => self.board.collapse(),
            CascadePhase::Fill => self.board.fill(&mut self.spawner),
        };
        self.publish(next);

        // Stability is only re-checked at the end of a full round.
        if phase == CascadePhase::Fill && self.board.is_stable(&self.config.rules) {
            self.cascade.finish();
            self.status = Status::Idle;
        }
    }
}
