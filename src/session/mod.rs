pub mod exam_session;
pub mod question;

pub use exam_session::{ExamSession, ProgressSummary, SessionEvent, SubmissionStage};
pub use question::{AnswerChoice, Question, QuestionStatus};
