use crate::error::SessionError;
use crate::pipeline::types::ExamAction;
use crate::session::question::{AnswerChoice, Question, QuestionStatus};
use indexmap::IndexMap;

/// Where the submit-confirmation sub-protocol currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionStage {
    Idle,
    /// An OK sign was confirmed; the next OK sign submits, a fist
    /// cancels, everything else is ignored.
    Confirming,
    /// Terminal. The session accepts no further actions.
    Submitted,
}

/// Counts for the candidate-facing progress legend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ProgressSummary {
    pub answered: usize,
    pub not_answered: usize,
    pub not_visited: usize,
}

/// What applying one confirmed action did to the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    AnswerRecorded {
        question_id: String,
        choice: AnswerChoice,
    },
    /// Save-and-next: the standing answer (possibly none) was recorded
    /// and the cursor advanced where possible.
    AnswerSaved {
        question_id: String,
        choice: Option<AnswerChoice>,
        advanced: bool,
    },
    AnswerCleared {
        question_id: String,
    },
    Moved {
        index: usize,
    },
    SubmitRequested,
    SubmitConfirmed {
        summary: ProgressSummary,
    },
    SubmitCancelled,
    /// The action had no effect in the current stage.
    Ignored,
}

/// In-memory state of one candidate's exam attempt, driven exclusively
/// by confirmed gesture actions.
pub struct ExamSession {
    questions: Vec<Question>,
    current_index: usize,
    answers: IndexMap<String, Option<AnswerChoice>>,
    status: IndexMap<String, QuestionStatus>,
    stage: SubmissionStage,
}

impl ExamSession {
    pub fn new(questions: Vec<Question>) -> Result<Self, SessionError> {
        if questions.is_empty() {
            return Err(SessionError::NoQuestions);
        }

        let mut status: IndexMap<String, QuestionStatus> = questions
            .iter()
            .map(|q| (q.id.clone(), QuestionStatus::NotVisited))
            .collect();
        // The first question is on screen from the start.
        if let Some(first) = status.values_mut().next() {
            *first = QuestionStatus::NotAnswered;
        }

        Ok(Self {
            questions,
            current_index: 0,
            answers: IndexMap::new(),
            status,
            stage: SubmissionStage::Idle,
        })
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn current_question(&self) -> &Question {
        &self.questions[self.current_index]
    }

    pub fn stage(&self) -> SubmissionStage {
        self.stage
    }

    pub fn is_submitted(&self) -> bool {
        self.stage == SubmissionStage::Submitted
    }

    pub fn answer_for(&self, question_id: &str) -> Option<AnswerChoice> {
        self.answers.get(question_id).copied().flatten()
    }

    pub fn status_of(&self, question_id: &str) -> QuestionStatus {
        self.status
            .get(question_id)
            .copied()
            .unwrap_or(QuestionStatus::NotVisited)
    }

    /// The full answer sheet in exam order, for submission downstream.
    pub fn answers(&self) -> &IndexMap<String, Option<AnswerChoice>> {
        &self.answers
    }

    pub fn progress_summary(&self) -> ProgressSummary {
        let mut summary = ProgressSummary::default();
        for question in &self.questions {
            match self.status_of(&question.id) {
                QuestionStatus::Answered => summary.answered += 1,
                QuestionStatus::NotAnswered => summary.not_answered += 1,
                QuestionStatus::NotVisited => summary.not_visited += 1,
            }
        }
        summary
    }

    /// Apply one confirmed gesture action.
    pub fn apply(&mut self, action: ExamAction) -> SessionEvent {
        match self.stage {
            SubmissionStage::Submitted => SessionEvent::Ignored,
            SubmissionStage::Confirming => self.apply_while_confirming(action),
            SubmissionStage::Idle => self.apply_idle(action),
        }
    }

    fn apply_while_confirming(&mut self, action: ExamAction) -> SessionEvent {
        match action {
            ExamAction::SubmitTest => {
                self.stage = SubmissionStage::Submitted;
                tracing::info!(index = self.current_index, "exam submitted");
                SessionEvent::SubmitConfirmed {
                    summary: self.progress_summary(),
                }
            }
            ExamAction::Clear => {
                self.stage = SubmissionStage::Idle;
                SessionEvent::SubmitCancelled
            }
            _ => SessionEvent::Ignored,
        }
    }

    fn apply_idle(&mut self, action: ExamAction) -> SessionEvent {
        match action {
            ExamAction::OptionA => self.record_answer(AnswerChoice::A),
            ExamAction::OptionB => self.record_answer(AnswerChoice::B),
            ExamAction::OptionC => self.record_answer(AnswerChoice::C),
            ExamAction::OptionD => self.record_answer(AnswerChoice::D),
            ExamAction::SaveNext => self.save_and_advance(),
            ExamAction::Clear => self.clear_answer(),
            ExamAction::Next => self.move_cursor(1),
            ExamAction::Prev => self.move_cursor(-1),
            ExamAction::SubmitTest => {
                self.stage = SubmissionStage::Confirming;
                SessionEvent::SubmitRequested
            }
        }
    }

    fn record_answer(&mut self, choice: AnswerChoice) -> SessionEvent {
        let question_id = self.current_question().id.clone();
        self.answers.insert(question_id.clone(), Some(choice));
        self.status
            .insert(question_id.clone(), QuestionStatus::Answered);
        SessionEvent::AnswerRecorded {
            question_id,
            choice,
        }
    }

    fn save_and_advance(&mut self) -> SessionEvent {
        let question_id = self.current_question().id.clone();
        let choice = self.answer_for(&question_id);
        self.answers.insert(question_id.clone(), choice);
        let status = if choice.is_some() {
            QuestionStatus::Answered
        } else {
            QuestionStatus::NotAnswered
        };
        self.status.insert(question_id.clone(), status);

        let advanced = self.current_index + 1 < self.questions.len();
        if advanced {
            self.current_index += 1;
            self.mark_visited();
        }
        SessionEvent::AnswerSaved {
            question_id,
            choice,
            advanced,
        }
    }

    fn clear_answer(&mut self) -> SessionEvent {
        let question_id = self.current_question().id.clone();
        self.answers.shift_remove(&question_id);
        self.status
            .insert(question_id.clone(), QuestionStatus::NotAnswered);
        SessionEvent::AnswerCleared { question_id }
    }

    fn move_cursor(&mut self, delta: isize) -> SessionEvent {
        let target = self.current_index as isize + delta;
        // Clamp at both ends; a blocked move still reports the cursor.
        if target >= 0 && (target as usize) < self.questions.len() {
            self.current_index = target as usize;
            self.mark_visited();
        }
        SessionEvent::Moved {
            index: self.current_index,
        }
    }

    fn mark_visited(&mut self) {
        let question_id = self.current_question().id.clone();
        if self.status_of(&question_id) == QuestionStatus::NotVisited {
            self.status
                .insert(question_id, QuestionStatus::NotAnswered);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn questions(n: usize) -> Vec<Question> {
        (0..n)
            .map(|i| {
                Question::new(
                    format!("q{i}"),
                    format!("Question {i}"),
                    [
                        "alpha".to_string(),
                        "beta".to_string(),
                        "gamma".to_string(),
                        "delta".to_string(),
                    ],
                )
            })
            .collect()
    }

    fn session(n: usize) -> ExamSession {
        ExamSession::new(questions(n)).unwrap()
    }

    #[test]
    fn empty_exam_is_rejected() {
        assert!(matches!(
            ExamSession::new(Vec::new()),
            Err(SessionError::NoQuestions)
        ));
    }

    #[test]
    fn option_gestures_record_answers() {
        let mut session = session(3);
        let event = session.apply(ExamAction::OptionB);
        assert_eq!(
            event,
            SessionEvent::AnswerRecorded {
                question_id: "q0".to_string(),
                choice: AnswerChoice::B,
            }
        );
        assert_eq!(session.answer_for("q0"), Some(AnswerChoice::B));
        assert_eq!(session.status_of("q0"), QuestionStatus::Answered);

        // A later option overwrites the earlier one.
        session.apply(ExamAction::OptionD);
        assert_eq!(session.answer_for("q0"), Some(AnswerChoice::D));
    }

    #[test]
    fn save_next_records_and_advances() {
        let mut session = session(3);
        session.apply(ExamAction::OptionA);
        let event = session.apply(ExamAction::SaveNext);
        assert_eq!(
            event,
            SessionEvent::AnswerSaved {
                question_id: "q0".to_string(),
                choice: Some(AnswerChoice::A),
                advanced: true,
            }
        );
        assert_eq!(session.current_index(), 1);
    }

    #[test]
    fn save_next_without_an_answer_still_advances() {
        let mut session = session(2);
        let event = session.apply(ExamAction::SaveNext);
        assert_eq!(
            event,
            SessionEvent::AnswerSaved {
                question_id: "q0".to_string(),
                choice: None,
                advanced: true,
            }
        );
        assert_eq!(session.answer_for("q0"), None);
        assert_eq!(session.status_of("q0"), QuestionStatus::NotAnswered);
    }

    #[test]
    fn save_next_on_the_last_question_stays_put() {
        let mut session = session(1);
        session.apply(ExamAction::OptionC);
        let event = session.apply(ExamAction::SaveNext);
        assert_eq!(
            event,
            SessionEvent::AnswerSaved {
                question_id: "q0".to_string(),
                choice: Some(AnswerChoice::C),
                advanced: false,
            }
        );
        assert_eq!(session.current_index(), 0);
    }

    #[test]
    fn clear_removes_the_answer() {
        let mut session = session(2);
        session.apply(ExamAction::OptionA);
        let event = session.apply(ExamAction::Clear);
        assert_eq!(
            event,
            SessionEvent::AnswerCleared {
                question_id: "q0".to_string(),
            }
        );
        assert_eq!(session.answer_for("q0"), None);
        assert_eq!(session.status_of("q0"), QuestionStatus::NotAnswered);
    }

    #[test]
    fn cursor_clamps_at_both_ends() {
        let mut session = session(2);
        assert_eq!(session.apply(ExamAction::Prev), SessionEvent::Moved { index: 0 });
        assert_eq!(session.apply(ExamAction::Next), SessionEvent::Moved { index: 1 });
        assert_eq!(session.apply(ExamAction::Next), SessionEvent::Moved { index: 1 });
    }

    #[test]
    fn navigation_marks_questions_visited() {
        let mut session = session(3);
        assert_eq!(session.status_of("q1"), QuestionStatus::NotVisited);
        session.apply(ExamAction::Next);
        assert_eq!(session.status_of("q1"), QuestionStatus::NotAnswered);

        // Coming back does not downgrade an answered question.
        session.apply(ExamAction::OptionA);
        session.apply(ExamAction::Prev);
        session.apply(ExamAction::Next);
        assert_eq!(session.status_of("q1"), QuestionStatus::Answered);
    }

    #[test]
    fn submit_requires_confirmation() {
        let mut session = session(2);
        session.apply(ExamAction::OptionA);
        assert_eq!(
            session.apply(ExamAction::SubmitTest),
            SessionEvent::SubmitRequested
        );
        assert_eq!(session.stage(), SubmissionStage::Confirming);

        // Anything but submit/clear is swallowed while confirming.
        assert_eq!(session.apply(ExamAction::OptionB), SessionEvent::Ignored);
        assert_eq!(session.apply(ExamAction::Next), SessionEvent::Ignored);
        assert_eq!(session.answer_for("q0"), Some(AnswerChoice::A));

        let event = session.apply(ExamAction::SubmitTest);
        assert_eq!(
            event,
            SessionEvent::SubmitConfirmed {
                summary: ProgressSummary {
                    answered: 1,
                    not_answered: 0,
                    not_visited: 1,
                },
            }
        );
        assert!(session.is_submitted());
    }

    #[test]
    fn fist_cancels_a_pending_submit() {
        let mut session = session(2);
        session.apply(ExamAction::SubmitTest);
        assert_eq!(session.apply(ExamAction::Clear), SessionEvent::SubmitCancelled);
        assert_eq!(session.stage(), SubmissionStage::Idle);

        // Clear now acts on the answer again.
        session.apply(ExamAction::OptionA);
        session.apply(ExamAction::Clear);
        assert_eq!(session.answer_for("q0"), None);
    }

    #[test]
    fn submitted_session_ignores_everything() {
        let mut session = session(1);
        session.apply(ExamAction::SubmitTest);
        session.apply(ExamAction::SubmitTest);
        assert!(session.is_submitted());

        assert_eq!(session.apply(ExamAction::OptionA), SessionEvent::Ignored);
        assert_eq!(session.apply(ExamAction::Clear), SessionEvent::Ignored);
        assert_eq!(session.apply(ExamAction::SubmitTest), SessionEvent::Ignored);
    }

    #[test]
    fn progress_summary_tracks_the_legend() {
        let mut session = session(4);
        session.apply(ExamAction::OptionA);
        session.apply(ExamAction::Next);
        session.apply(ExamAction::OptionB);
        session.apply(ExamAction::Next);

        let summary = session.progress_summary();
        assert_eq!(summary.answered, 2);
        assert_eq!(summary.not_answered, 1);
        assert_eq!(summary.not_visited, 1);
    }
}
