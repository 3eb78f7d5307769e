//! Directional pan filter.
//!
//! Wraps a raw pan stream with a fixed target axis. The decision is made
//! once, on the first movement sample after recognition begins: if the
//! off-axis velocity component dominates, the whole gesture is cancelled
//! and the remainder of its events are swallowed. After that first sample
//! the stream is trusted — no further axis checks.

use slidecell_ui_graphics::Velocity;

use crate::input::{PanEvent, PanPhase};

/// The axis a recognizer is willing to track.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PanAxis {
    Horizontal,
    Vertical,
}

impl PanAxis {
    fn matches(&self, velocity: Velocity) -> bool {
        match self {
            PanAxis::Horizontal => velocity.y.abs() <= velocity.x.abs(),
            PanAxis::Vertical => velocity.x.abs() <= velocity.y.abs(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum RecognizerState {
    Idle,
    /// `Began` seen, first movement sample not yet classified.
    Pending,
    Active,
    Cancelled,
}

/// Axis-filtering wrapper over a pan stream.
///
/// Feed every raw event through [`DirectionalPanRecognizer::feed`]; only
/// events that survive the filter come back out. When the first movement
/// sample moves predominantly off-axis, a single synthetic `Cancelled`
/// is emitted so downstream state can reset, and everything up to the
/// gesture's terminal event is swallowed.
#[derive(Debug)]
pub struct DirectionalPanRecognizer {
    axis: PanAxis,
    state: RecognizerState,
}

impl DirectionalPanRecognizer {
    pub fn new(axis: PanAxis) -> Self {
        Self {
            axis,
            state: RecognizerState::Idle,
        }
    }

    pub fn axis(&self) -> PanAxis {
        self.axis
    }

    /// True while a gesture is being tracked (began, not yet terminal).
    pub fn is_tracking(&self) -> bool {
        matches!(
            self.state,
            RecognizerState::Pending | RecognizerState::Active
        )
    }

    pub fn feed(&mut self, event: PanEvent) -> Option<PanEvent> {
        match event.phase {
            PanPhase::Began => {
                self.state = RecognizerState::Pending;
                Some(event)
            }
            PanPhase::Changed => match self.state {
                RecognizerState::Pending => {
                    if self.axis.matches(event.velocity) {
                        self.state = RecognizerState::Active;
                        Some(event)
                    } else {
                        log::debug!(
                            "pan cancelled: off-axis velocity {:?} against {:?}",
                            event.velocity,
                            self.axis
                        );
                        self.state = RecognizerState::Cancelled;
                        Some(PanEvent::cancelled(event.translation))
                    }
                }
                RecognizerState::Active => Some(event),
                RecognizerState::Idle | RecognizerState::Cancelled => None,
            },
            PanPhase::Ended | PanPhase::Cancelled => {
                let forwarded = match self.state {
                    RecognizerState::Pending | RecognizerState::Active => Some(event),
                    RecognizerState::Idle | RecognizerState::Cancelled => None,
                };
                self.state = RecognizerState::Idle;
                forwarded
            }
        }
    }
}
