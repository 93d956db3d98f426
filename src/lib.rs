pub mod common;
pub mod config;
pub mod coordinator;
pub mod error;
pub mod intake;
pub mod pipeline;
pub mod session;
pub mod sink;

pub use error::{AppError, FrameError, IntakeError, SessionError};

pub use common::LandmarkFrame;
pub use config::Configuration;
pub use coordinator::{Coordinator, CoordinatorBuilder};
pub use pipeline::{classify, ExamAction, FrameObservation, GestureEngine, HandLandmarks, Point};
pub use session::{ExamSession, Question, SessionEvent};
pub use sink::{ActionSink, ConfirmedAction, LoggingSink};
