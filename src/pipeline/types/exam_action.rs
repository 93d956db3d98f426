use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The closed set of exam actions a gesture can resolve to.
///
/// Serialized labels are the wire contract with the downstream exam
/// interaction layer and must not change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ExamAction {
    /// Index finger only: answer the current question with option A.
    #[serde(rename = "option_A")]
    OptionA,
    /// Index + middle: option B.
    #[serde(rename = "option_B")]
    OptionB,
    /// Index + middle + ring: option C.
    #[serde(rename = "option_C")]
    OptionC,
    /// All four fingers, thumb tucked: option D.
    #[serde(rename = "option_D")]
    OptionD,
    /// Thumb up: record the current answer and advance.
    #[serde(rename = "save_next")]
    SaveNext,
    /// Fist: clear the current answer. Also cancels a pending submission.
    #[serde(rename = "clear")]
    Clear,
    /// Thumb right: move to the next question.
    #[serde(rename = "next")]
    Next,
    /// Thumb left: move to the previous question.
    #[serde(rename = "prev")]
    Prev,
    /// OK sign: request submission, confirmed by a second OK sign.
    #[serde(rename = "submit_test")]
    SubmitTest,
}

impl ExamAction {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::OptionA => "option_A",
            Self::OptionB => "option_B",
            Self::OptionC => "option_C",
            Self::OptionD => "option_D",
            Self::SaveNext => "save_next",
            Self::Clear => "clear",
            Self::Next => "next",
            Self::Prev => "prev",
            Self::SubmitTest => "submit_test",
        }
    }
}

impl fmt::Display for ExamAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ExamAction {
    type Err = ActionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "option_A" => Ok(Self::OptionA),
            "option_B" => Ok(Self::OptionB),
            "option_C" => Ok(Self::OptionC),
            "option_D" => Ok(Self::OptionD),
            "save_next" => Ok(Self::SaveNext),
            "clear" => Ok(Self::Clear),
            "next" => Ok(Self::Next),
            "prev" => Ok(Self::Prev),
            "submit_test" => Ok(Self::SubmitTest),
            _ => Err(ActionParseError(s.to_string())),
        }
    }
}

/// Error returned when parsing an unknown action label.
#[derive(Debug, Clone)]
pub struct ActionParseError(String);

impl fmt::Display for ActionParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown exam action label '{}'", self.0)
    }
}

impl std::error::Error for ActionParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_round_trip() {
        let actions = [
            ExamAction::OptionA,
            ExamAction::OptionB,
            ExamAction::OptionC,
            ExamAction::OptionD,
            ExamAction::SaveNext,
            ExamAction::Clear,
            ExamAction::Next,
            ExamAction::Prev,
            ExamAction::SubmitTest,
        ];
        for action in actions {
            assert_eq!(action.as_str().parse::<ExamAction>().unwrap(), action);
        }
    }

    #[test]
    fn unknown_label_is_rejected() {
        assert!("option_E".parse::<ExamAction>().is_err());
        assert!("".parse::<ExamAction>().is_err());
    }

    #[test]
    fn serde_uses_wire_labels() {
        let json = serde_json::to_string(&ExamAction::SaveNext).unwrap();
        assert_eq!(json, "\"save_next\"");

        let parsed: ExamAction = serde_json::from_str("\"option_A\"").unwrap();
        assert_eq!(parsed, ExamAction::OptionA);
    }
}
