//! Turns raw pointer and touch signals into activations of the pause control.
//!
//! Mouse clicks and taps both end up here. A tap is one activation even when
//! the platform follows it with an emulated mouse click: pointer signals are
//! swallowed while any finger is down and for a short window after the last
//! one lifts.

use std::collections::HashSet;
use std::time::Duration;

use bevy::prelude::*;
use tracing::trace;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActivationSource {
    Pointer,
    Touch,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerPhase {
    Down,
    Up,
    TouchStart { id: u64 },
    TouchEnd { id: u64 },
    TouchCancel { id: u64 },
}

/// One raw input sample, already hit-tested against the pause control.
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub struct PointerSignal {
    pub phase: PointerPhase,
    pub over_control: bool,
    /// Wall-clock time since startup. Must not stop while the game is paused.
    pub at: Duration,
}

impl PointerSignal {
    pub fn new(phase: PointerPhase, over_control: bool, at: Duration) -> Self {
        Self {
            phase,
            over_control,
            at,
        }
    }
}

#[derive(Resource, Debug, Clone)]
pub struct ActivationGate {
    synthetic_click_window: Duration,
    pointer_armed: bool,
    touches_down: HashSet<u64>,
    touches_armed: HashSet<u64>,
    gesture_fired: bool,
    suppress_pointer_until: Option<Duration>,
    suppressed: u64,
}

impl Default for ActivationGate {
    fn default() -> Self {
        Self::new(Duration::from_millis(500))
    }
}

impl ActivationGate {
    pub fn new(synthetic_click_window: Duration) -> Self {
        Self {
            synthetic_click_window,
            pointer_armed: false,
            touches_down: HashSet::new(),
            touches_armed: HashSet::new(),
            gesture_fired: false,
            suppress_pointer_until: None,
            suppressed: 0,
        }
    }

    /// Feeds one signal; returns the source of the activation it completes,
    /// if any.
    pub fn feed(&mut self, signal: PointerSignal) -> Option<ActivationSource> {
        let PointerSignal {
            phase,
            over_control,
            at,
        } = signal;

        match phase {
            PointerPhase::Down | PointerPhase::Up if self.pointer_suppressed(at) => {
                self.suppressed += 1;
                trace!(?phase, ?at, "suppressed pointer signal after touch");
                None
            }
            PointerPhase::Down => {
                self.pointer_armed = over_control;
                None
            }
            PointerPhase::Up => {
                let armed = std::mem::take(&mut self.pointer_armed);
                (armed && over_control).then_some(ActivationSource::Pointer)
            }
            PointerPhase::TouchStart { id } => {
                if self.touches_down.is_empty() {
                    self.gesture_fired = false;
                }
                self.touches_down.insert(id);
                if over_control {
                    self.touches_armed.insert(id);
                }
                self.pointer_armed = false;
                None
            }
            PointerPhase::TouchEnd { id } => {
                self.touches_down.remove(&id);
                let armed = self.touches_armed.remove(&id);
                self.suppress_pointer_until = Some(at + self.synthetic_click_window);

                if armed && over_control && !self.gesture_fired {
                    self.gesture_fired = true;
                    Some(ActivationSource::Touch)
                } else {
                    None
                }
            }
            PointerPhase::TouchCancel { id } => {
                self.touches_down.remove(&id);
                self.touches_armed.remove(&id);
                None
            }
        }
    }

    /// Forgets touches the input layer no longer reports as down. A lost end or
    /// cancel would otherwise block pointer input indefinitely. Returns how
    /// many were dropped.
    pub fn release_stale_touches(&mut self, still_down: impl Fn(u64) -> bool) -> usize {
        let before = self.touches_down.len();
        self.touches_down.retain(|id| still_down(*id));
        let touches_down = &self.touches_down;
        self.touches_armed.retain(|id| touches_down.contains(id));
        before - self.touches_down.len()
    }

    /// Pointer signals dropped so far because they trailed a touch.
    pub fn suppressed(&self) -> u64 {
        self.suppressed
    }

    pub fn synthetic_click_window(&self) -> Duration {
        self.synthetic_click_window
    }

    fn pointer_suppressed(&self, at: Duration) -> bool {
        !self.touches_down.is_empty()
            || self
                .suppress_pointer_until
                .is_some_and(|until| at < until)
    }
}
