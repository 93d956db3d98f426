use crate::common::frame::LandmarkFrame;
use crate::pipeline::frame_context::{FrameContext, ProcessingStepType};
use crate::pipeline::gesture::{classify, HoldTracker};
use std::time::{Duration, Instant};

/// Per-frame gesture pipeline: classification followed by hold tracking.
///
/// Owns the only mutable gesture state in the daemon (the hold tracker),
/// and is driven by exactly one caller, one frame at a time, in capture
/// order. Each call completes synchronously without blocking or I/O.
pub struct GestureEngine {
    hold: HoldTracker,
}

impl GestureEngine {
    pub fn new(hold_duration: Duration) -> Self {
        Self {
            hold: HoldTracker::new(hold_duration),
        }
    }

    /// Process one tracker frame into a fully populated context.
    pub fn process(&mut self, frame: LandmarkFrame) -> FrameContext {
        self.process_at(frame, Instant::now())
    }

    /// As `process`, with the monotonic instant supplied by the caller.
    pub fn process_at(&mut self, frame: LandmarkFrame, now: Instant) -> FrameContext {
        let mut context = FrameContext::new(frame);

        let step_start = Instant::now();
        context.raw_gesture = context
            .frame
            .observation()
            .landmarks()
            .and_then(classify);
        context.metrics.record_duration(
            ProcessingStepType::Classification,
            step_start.elapsed().as_micros() as u64,
        );

        let step_start = Instant::now();
        let update = self.hold.observe(context.raw_gesture, now);
        context.metrics.record_duration(
            ProcessingStepType::HoldTracking,
            step_start.elapsed().as_micros() as u64,
        );
        context.hold = Some(update);

        if let Some(action) = update.confirmed {
            tracing::info!(
                frame_id = %context.frame.frame_id(),
                action = action.as_str(),
                "gesture confirmed"
            );
        } else if let Some(candidate) = update.candidate {
            tracing::debug!(
                candidate = candidate.as_str(),
                progress = update.progress,
                "holding"
            );
        }

        context.metrics.finalize(context.processing_start);
        context
    }
}

impl Default for GestureEngine {
    fn default() -> Self {
        Self::new(crate::pipeline::gesture::DEFAULT_HOLD_DURATION)
    }
}
