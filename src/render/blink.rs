//! Cursor blink state machine
//!
//! A cooperative timer: the host's event loop calls [`CursorBlink::poll`]
//! whenever it wakes and can sleep until [`CursorBlink::next_deadline`].
//! Restart is cancel-then-schedule, so a pending deadline never fires
//! twice and rescheduling never stacks timers.
//!
//! The machine also carries the post-resize repaint compensation: a
//! resize arms a near-immediate one-shot fire whose result asks for a
//! full-viewport redraw, after which normal cadence resumes.

use std::time::{Duration, Instant};

/// Delay of the one-shot compensation fire after a resize.
const COMPENSATION_DELAY: Duration = Duration::from_millis(1);

/// Cursor visibility phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlinkPhase {
    On,
    Off,
}

impl BlinkPhase {
    pub fn toggled(self) -> Self {
        match self {
            BlinkPhase::On => BlinkPhase::Off,
            BlinkPhase::Off => BlinkPhase::On,
        }
    }

    pub fn is_on(self) -> bool {
        self == BlinkPhase::On
    }
}

/// Result of one timer expiry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlinkFire {
    /// Phase after the toggle
    pub phase: BlinkPhase,
    /// This fire compensates for a repaint the toolkit missed after a
    /// resize; the whole viewport must be redrawn, not just the cursor
    /// cell.
    pub full_repaint: bool,
}

/// Cursor blink timer and phase.
#[derive(Debug)]
pub struct CursorBlink {
    phase: BlinkPhase,
    interval: Duration,
    deadline: Option<Instant>,
    compensate: bool,
}

impl CursorBlink {
    /// New machine in phase `On`, timer not yet armed.
    pub fn new(interval: Duration) -> Self {
        Self {
            phase: BlinkPhase::On,
            interval,
            deadline: None,
            compensate: false,
        }
    }

    pub fn phase(&self) -> BlinkPhase {
        self.phase
    }

    /// When the host loop should wake next, if a timer is armed.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Arm the periodic timer.
    pub fn start(&mut self, now: Instant) {
        self.deadline = Some(now + self.interval);
    }

    /// Cancel any pending fire.
    pub fn stop(&mut self) {
        self.deadline = None;
    }

    /// The cursor moved: force the visible phase and restart the period,
    /// so the next toggle is a full interval away rather than immediate.
    pub fn cursor_moved(&mut self, now: Instant) {
        self.phase = BlinkPhase::On;
        self.deadline = Some(now + self.interval);
    }

    /// The viewport was resized: schedule the near-immediate compensation
    /// fire.
    pub fn viewport_resized(&mut self, now: Instant) {
        self.compensate = true;
        self.deadline = Some(now + COMPENSATION_DELAY);
    }

    /// Advance the machine. Fires at most once per elapsed deadline: a
    /// fire toggles the phase and re-arms a full interval ahead.
    pub fn poll(&mut self, now: Instant) -> Option<BlinkFire> {
        let deadline = self.deadline?;
        if now < deadline {
            return None;
        }
        self.phase = self.phase.toggled();
        let full_repaint = std::mem::take(&mut self.compensate);
        self.deadline = Some(now + self.interval);
        Some(BlinkFire {
            phase: self.phase,
            full_repaint,
        })
    }
}
