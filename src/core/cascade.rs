//! Cascade controller - the clear -> collapse -> fill phase machine
//!
//! The controller owns no board; it only decides *when* the next cascade
//! sub-phase is due. `GameState::tick` evaluates the transition rule,
//! applies each emitted phase to the board and checks stability after
//! every fill. Phases are paced by a countdown timer so intermediate
//! snapshots stay visible; a delay of zero makes the controller headless
//! (one phase per tick).
//!
//! Being busy is a structural state, not a flag: the controller is busy
//! exactly while `phase` is occupied, which is what enforces "at most one
//! active cascade" and keeps the guard inspectable by tests.

/// The three sub-phases of one cascade round, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CascadePhase {
    Clear,
    Collapse,
    Fill,
}

impl CascadePhase {
    /// The phase that follows this one (Fill wraps to the next round's Clear)
    pub fn next(self) -> Self {
        match self {
            CascadePhase::Clear => CascadePhase::Collapse,
            CascadePhase::Collapse => CascadePhase::Fill,
            CascadePhase::Fill => CascadePhase::Clear,
        }
    }
}

/// Tick-driven pacing state machine for cascades.
#[derive(Debug, Clone)]
pub struct CascadeController {
    /// Occupied while a cascade is in progress; the re-entrancy guard.
    phase: Option<CascadePhase>,
    /// Remaining pause before the current phase fires
    timer_ms: u32,
    phase_delay_ms: u32,
}

impl CascadeController {
    pub fn new(phase_delay_ms: u32) -> Self {
        Self {
            phase: None,
            timer_ms: 0,
            phase_delay_ms,
        }
    }

    /// Whether a cascade is in progress.
    ///
    /// Distinct from the session's `Status`: the externally visible status
    /// flips back to Idle in the same tick `finish` runs, while this guard
    /// is what actually prevents overlapping cascades.
    pub fn is_busy(&self) -> bool {
        self.phase.is_some()
    }

    /// Start a cascade at the first Clear phase. No-op if already busy.
    pub fn begin(&mut self) {
        if self.is_busy() {
            return;
        }
        self.phase = Some(CascadePhase::Clear);
        self.timer_ms = self.phase_delay_ms;
    }

    /// Advance the pacing timer; returns the phase that is now due, if any.
    ///
    /// Emits at most one phase per call and immediately re-arms the pause
    /// for the following phase, so rounds can never overlap.
    pub fn tick(&mut self, elapsed_ms: u32) -> Option<CascadePhase> {
        let due = self.phase?;
        self.timer_ms = self.timer_ms.saturating_sub(elapsed_ms);
        if self.timer_ms > 0 {
            return None;
        }
        self.phase = Some(due.next());
        self.timer_ms = self.phase_delay_ms;
        Some(due)
    }

    /// End the cascade. Idempotent.
    pub fn finish(&mut self) {
        self.phase = None;
        self.timer_ms = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_idle_controller_emits_nothing() {
        let mut controller = CascadeController::new(0);
        assert!(!controller.is_busy());
        assert_eq!(controller.tick(1000), None);
    }

    #[test]
    fn test_phases_fire_in_order() {
        let mut controller = CascadeController::new(0);
        controller.begin();
        assert!(controller.is_busy());
        assert_eq!(controller.tick(0), Some(CascadePhase::Clear));
        assert_eq!(controller.tick(0), Some(CascadePhase::Collapse));
        assert_eq!(controller.tick(0), Some(CascadePhase::Fill));
        // Next round starts over at Clear.
        assert_eq!(controller.tick(0), Some(CascadePhase::Clear));
    }

    #[test]
    fn test_pacing_delay_holds_phase_back() {
        let mut controller = CascadeController::new(100);
        controller.begin();
        assert_eq!(controller.tick(40), None);
        assert_eq!(controller.tick(40), None);
        assert_eq!(controller.tick(40), Some(CascadePhase::Clear));
        // The next pause re-arms in full.
        assert_eq!(controller.tick(99), None);
        assert_eq!(controller.tick(1), Some(CascadePhase::Collapse));
    }

    #[test]
    fn test_at_most_one_phase_per_tick() {
        let mut controller = CascadeController::new(10);
        controller.begin();
        // A huge elapsed time still yields a single phase.
        assert_eq!(controller.tick(10_000), Some(CascadePhase::Clear));
        assert_eq!(controller.tick(0), None);
    }

    #[test]
    fn test_begin_while_busy_is_noop() {
        let mut controller = CascadeController::new(0);
        controller.begin();
        assert_eq!(controller.tick(0), Some(CascadePhase::Clear));
        // A second begin must not rewind the machine to Clear.
        controller.begin();
        assert_eq!(controller.tick(0), Some(CascadePhase::Collapse));
    }

    #[test]
    fn test_finish_is_idempotent() {
        let mut controller = CascadeController::new(0);
        controller.begin();
        controller.finish();
        controller.finish();
        assert!(!controller.is_busy());
        assert_eq!(controller.tick(0), None);
    }
}
