pub mod engine;
pub mod frame_context;
pub mod gesture;
pub mod types;

pub use engine::GestureEngine;
pub use frame_context::{FrameContext, FrameMetrics};
pub use gesture::{classify, HoldTracker, HoldUpdate};
pub use types::{ExamAction, FrameObservation, HandLandmarks, Point};
