pub mod exam_action;
pub mod landmarks;

pub use exam_action::ExamAction;
pub use landmarks::{FrameObservation, HandLandmarks, Point, LANDMARK_COUNT};
