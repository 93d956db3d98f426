use crate::pipeline::types::landmarks::{landmark, HandLandmarks};

/// Looser margin for the thumb: its geometry extends laterally rather
/// than radially from the wrist, so a plain distance comparison
/// misreads a relaxed thumb as open.
const THUMB_OPEN_RATIO: f64 = 1.1;

/// Joint chain indices (mcp, pip, tip) for the four non-thumb fingers.
const FINGER_CHAINS: [(usize, usize, usize); 4] = [
    (landmark::INDEX_MCP, landmark::INDEX_PIP, landmark::INDEX_TIP),
    (landmark::MIDDLE_MCP, landmark::MIDDLE_PIP, landmark::MIDDLE_TIP),
    (landmark::RING_MCP, landmark::RING_PIP, landmark::RING_TIP),
    (landmark::PINKY_MCP, landmark::PINKY_PIP, landmark::PINKY_TIP),
];

/// Per-finger extension flags, recomputed from scratch every frame.
///
/// A finger counts as open when its tip sits strictly farther from the
/// wrist than both its PIP and MCP joints. Strict comparisons make
/// degenerate geometry (coincident points) read as closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FingerOpenness {
    pub thumb: bool,
    pub index: bool,
    pub middle: bool,
    pub ring: bool,
    pub pinky: bool,
}

impl FingerOpenness {
    pub fn from_landmarks(hand: &HandLandmarks) -> Self {
        let wrist = hand.wrist();

        let thumb = hand.thumb_tip().distance(&wrist)
            > hand.thumb_ip().distance(&wrist) * THUMB_OPEN_RATIO;

        let mut fingers = [false; 4];
        for (slot, (mcp, pip, tip)) in fingers.iter_mut().zip(FINGER_CHAINS) {
            let tip_dist = hand.point(tip).distance(&wrist);
            *slot = tip_dist > hand.point(pip).distance(&wrist)
                && tip_dist > hand.point(mcp).distance(&wrist);
        }

        Self {
            thumb,
            index: fingers[0],
            middle: fingers[1],
            ring: fingers[2],
            pinky: fingers[3],
        }
    }

    /// How many of the four non-thumb fingers are open.
    pub fn finger_count(&self) -> usize {
        [self.index, self.middle, self.ring, self.pinky]
            .iter()
            .filter(|open| **open)
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::gesture::testing::HandPose;

    #[test]
    fn open_fingers_are_detected() {
        let hand = HandPose::new().open_index().open_middle().build();
        let openness = FingerOpenness::from_landmarks(&hand);

        assert!(openness.index);
        assert!(openness.middle);
        assert!(!openness.ring);
        assert!(!openness.pinky);
        assert!(!openness.thumb);
        assert_eq!(openness.finger_count(), 2);
    }

    #[test]
    fn thumb_needs_the_larger_margin() {
        let hand = HandPose::new().open_thumb().build();
        let openness = FingerOpenness::from_landmarks(&hand);

        assert!(openness.thumb);
        assert_eq!(openness.finger_count(), 0);
    }

    #[test]
    fn degenerate_hand_reads_as_closed() {
        // All 21 points coincident: every strict comparison fails.
        let hand = HandPose::collapsed();
        let openness = FingerOpenness::from_landmarks(&hand);

        assert!(!openness.thumb);
        assert_eq!(openness.finger_count(), 0);
    }
}
