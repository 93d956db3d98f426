use crate::common::frame::LandmarkFrame;
use crate::pipeline::gesture::HoldUpdate;
use crate::pipeline::types::ExamAction;
use std::time::Instant;
use uuid::Uuid;

/// Context object that flows through the per-frame processing steps.
/// Carries everything produced while handling a single frame.
#[derive(Debug, Clone)]
pub struct FrameContext {
    pub frame: LandmarkFrame,
    pub client_id: Uuid,
    pub raw_gesture: Option<ExamAction>,
    pub hold: Option<HoldUpdate>,
    pub metrics: FrameMetrics,
    pub processing_start: Instant,
}

impl FrameContext {
    pub fn new(frame: LandmarkFrame) -> Self {
        let client_id = frame.client_id();
        Self {
            frame,
            client_id,
            raw_gesture: None,
            hold: None,
            metrics: FrameMetrics::new(),
            processing_start: Instant::now(),
        }
    }

    /// The action confirmed on this frame, if the hold crossed its
    /// threshold here.
    pub fn confirmed_action(&self) -> Option<ExamAction> {
        self.hold.and_then(|update| update.confirmed)
    }
}

/// Per-step timing collected while processing one frame.
#[derive(Debug, Clone, Default)]
pub struct FrameMetrics {
    pub classification_duration_us: u64,
    pub hold_tracking_duration_us: u64,
    pub total_processing_duration_us: u64,
}

impl FrameMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_duration(&mut self, step: ProcessingStepType, duration_us: u64) {
        match step {
            ProcessingStepType::Classification => self.classification_duration_us = duration_us,
            ProcessingStepType::HoldTracking => self.hold_tracking_duration_us = duration_us,
        }
    }

    pub fn finalize(&mut self, start_time: Instant) {
        self.total_processing_duration_us = start_time.elapsed().as_micros() as u64;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProcessingStepType {
    Classification,
    HoldTracking,
}
