use crate::pipeline::types::exam_action::ExamAction;
use std::time::{Duration, Instant};

/// Default hold duration before a gesture counts as deliberate.
pub const DEFAULT_HOLD_DURATION: Duration = Duration::from_millis(1500);

/// What the tracker reports back for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HoldUpdate {
    /// Fired at most once per unbroken hold, the moment it crosses the
    /// threshold.
    pub confirmed: Option<ExamAction>,
    /// The gesture currently being held, for display.
    pub candidate: Option<ExamAction>,
    /// Fraction of the hold completed, in [0, 1]. Observational only.
    pub progress: f64,
}

impl HoldUpdate {
    fn idle() -> Self {
        Self {
            confirmed: None,
            candidate: None,
            progress: 0.0,
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum HoldState {
    Idle,
    Holding {
        candidate: ExamAction,
        started_at: Instant,
        triggered: bool,
    },
}

/// Debounces raw per-frame gestures into confirmed actions.
///
/// A gesture must be held continuously for the configured duration
/// before it fires, and fires exactly once per hold. Any interruption
/// (hand lost, no gesture, different gesture) forfeits the accumulated
/// progress. Timing is based on the caller-supplied monotonic instant,
/// so the tracker has no clock of its own and tests can drive it with
/// synthetic times.
///
/// Not reentrant: one logical caller feeds it one frame at a time.
#[derive(Debug)]
pub struct HoldTracker {
    state: HoldState,
    hold_duration: Duration,
}

impl HoldTracker {
    pub fn new(hold_duration: Duration) -> Self {
        Self {
            state: HoldState::Idle,
            hold_duration,
        }
    }

    /// Feed one frame's raw classifier output.
    pub fn observe(&mut self, raw: Option<ExamAction>, now: Instant) -> HoldUpdate {
        let Some(gesture) = raw else {
            self.state = HoldState::Idle;
            return HoldUpdate::idle();
        };

        match self.state {
            HoldState::Holding {
                candidate,
                started_at,
                triggered,
            } if candidate == gesture => {
                let elapsed = now.duration_since(started_at);
                let progress = self.progress_fraction(elapsed);

                if elapsed >= self.hold_duration && !triggered {
                    self.state = HoldState::Holding {
                        candidate,
                        started_at,
                        triggered: true,
                    };
                    return HoldUpdate {
                        confirmed: Some(candidate),
                        candidate: Some(candidate),
                        progress,
                    };
                }

                HoldUpdate {
                    confirmed: None,
                    candidate: Some(candidate),
                    progress,
                }
            }
            // New candidate, or a switch mid-hold: the timer restarts and
            // the abandoned candidate never fires.
            _ => {
                self.state = HoldState::Holding {
                    candidate: gesture,
                    started_at: now,
                    triggered: false,
                };
                HoldUpdate {
                    confirmed: None,
                    candidate: Some(gesture),
                    progress: 0.0,
                }
            }
        }
    }

    fn progress_fraction(&self, elapsed: Duration) -> f64 {
        let ratio = elapsed.as_secs_f64() / self.hold_duration.as_secs_f64();
        ratio.min(1.0)
    }
}

impl Default for HoldTracker {
    fn default() -> Self {
        Self::new(DEFAULT_HOLD_DURATION)
    }
}
