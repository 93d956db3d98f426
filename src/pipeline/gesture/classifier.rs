use crate::pipeline::gesture::openness::FingerOpenness;
use crate::pipeline::types::exam_action::ExamAction;
use crate::pipeline::types::landmarks::HandLandmarks;

/// Thumb tip and index tip closer than this count as a pinch.
const PINCH_DISTANCE: f64 = 0.05;

/// Vertical wins over horizontal only when |dy| clearly dominates.
const VERTICAL_DOMINANCE: f64 = 1.5;

/// Minimum axis displacement before a thumb direction is trusted.
const AXIS_DEADZONE: f64 = 0.03;

/// Classify a single frame's landmarks into an exam gesture.
///
/// Stateless and deterministic. Rules are evaluated in a fixed order and
/// the first match wins; the ordering is part of the contract because the
/// categories overlap under looser checks (the OK sign would otherwise
/// read as a three-finger count). Anything ambiguous maps to `None`: a
/// missed frame is retried on the next one, a wrong action is not.
pub fn classify(hand: &HandLandmarks) -> Option<ExamAction> {
    let openness = FingerOpenness::from_landmarks(hand);
    let finger_count = openness.finger_count();

    // OK sign: thumb and index pinched, remaining three fingers open.
    // The pinch pulls the index tip back toward the palm, so the index
    // must NOT have passed the openness test.
    let pinch = hand.thumb_tip().distance(&hand.index_tip());
    if pinch < PINCH_DISTANCE
        && openness.middle
        && openness.ring
        && openness.pinky
        && !openness.index
    {
        return Some(ExamAction::SubmitTest);
    }

    // Fist: nothing open, thumb tucked.
    if finger_count == 0 && !openness.thumb {
        return Some(ExamAction::Clear);
    }

    // Thumb-only gestures: direction of the thumb tip relative to its MCP
    // decides the action. y grows downward in image space.
    if openness.thumb && finger_count == 0 {
        let tip = hand.thumb_tip();
        let mcp = hand.thumb_mcp();
        let dx = tip.x - mcp.x;
        let dy = tip.y - mcp.y;

        let vertical = dy.abs() > dx.abs() * VERTICAL_DOMINANCE;
        let horizontal = dx.abs() > dy.abs();

        if vertical {
            if dy < -AXIS_DEADZONE {
                return Some(ExamAction::SaveNext);
            }
        } else if horizontal {
            if dx > AXIS_DEADZONE {
                return Some(ExamAction::Next);
            }
            if dx < -AXIS_DEADZONE {
                return Some(ExamAction::Prev);
            }
        }

        // Too small or diagonal to call.
        return None;
    }

    // Option selection by finger count, adjacency required.
    if finger_count == 1 && openness.index {
        return Some(ExamAction::OptionA);
    }
    if finger_count == 2 && openness.index && openness.middle {
        return Some(ExamAction::OptionB);
    }
    if finger_count == 3 && openness.index && openness.middle && openness.ring {
        return Some(ExamAction::OptionC);
    }
    if finger_count == 4 && !openness.thumb {
        return Some(ExamAction::OptionD);
    }

    None
}
