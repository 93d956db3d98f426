//! Synthetic hand poses for gesture tests.
//!
//! Poses are built around a wrist at (0.50, 0.90) with all fingers
//! curled, then individual chains are repositioned into extension.

use crate::pipeline::types::landmarks::{landmark, HandLandmarks, Point, LANDMARK_COUNT};

/// Builder for a 21-point hand pose in normalized image space.
pub struct HandPose {
    points: [Point; LANDMARK_COUNT],
}

impl HandPose {
    /// A relaxed hand: every finger curled, thumb tucked.
    pub fn new() -> Self {
        let mut points = [Point::default(); LANDMARK_COUNT];
        points[landmark::WRIST] = Point::new(0.50, 0.90);

        points[landmark::THUMB_CMC] = Point::new(0.40, 0.82);
        points[landmark::THUMB_MCP] = Point::new(0.36, 0.76);
        points[landmark::THUMB_IP] = Point::new(0.40, 0.72);
        points[landmark::THUMB_TIP] = Point::new(0.44, 0.70);

        // Curled finger chains: tip folded back toward the palm, so the
        // tip sits closer to the wrist than the PIP joint.
        let columns = [
            (landmark::INDEX_MCP, 0.42),
            (landmark::MIDDLE_MCP, 0.47),
            (landmark::RING_MCP, 0.52),
            (landmark::PINKY_MCP, 0.57),
        ];
        for (mcp, x) in columns {
            points[mcp] = Point::new(x, 0.70);
            points[mcp + 1] = Point::new(x, 0.62);
            points[mcp + 2] = Point::new(x, 0.66);
            points[mcp + 3] = Point::new(x, 0.72);
        }

        Self { points }
    }

    /// Every point coincident: degenerate tracker output.
    pub fn collapsed() -> HandLandmarks {
        HandLandmarks::new([Point::new(0.5, 0.5); LANDMARK_COUNT])
    }

    fn extend_finger(mut self, mcp: usize) -> Self {
        let x = self.points[mcp].x;
        self.points[mcp + 2] = Point::new(x, 0.50);
        self.points[mcp + 3] = Point::new(x, 0.40);
        self
    }

    pub fn open_index(self) -> Self {
        self.extend_finger(landmark::INDEX_MCP)
    }

    pub fn open_middle(self) -> Self {
        self.extend_finger(landmark::MIDDLE_MCP)
    }

    pub fn open_ring(self) -> Self {
        self.extend_finger(landmark::RING_MCP)
    }

    pub fn open_pinky(self) -> Self {
        self.extend_finger(landmark::PINKY_MCP)
    }

    /// Thumb extended straight up: tip directly above the MCP.
    pub fn open_thumb(mut self) -> Self {
        self.points[landmark::THUMB_IP] = Point::new(0.36, 0.68);
        self.points[landmark::THUMB_TIP] = Point::new(0.36, 0.58);
        self
    }

    /// Thumb extended to the right of its MCP, level with it.
    pub fn thumb_right(mut self) -> Self {
        self.points[landmark::THUMB_MCP] = Point::new(0.56, 0.78);
        self.points[landmark::THUMB_IP] = Point::new(0.64, 0.77);
        self.points[landmark::THUMB_TIP] = Point::new(0.74, 0.76);
        self
    }

    /// Thumb extended to the left of its MCP.
    pub fn thumb_left(mut self) -> Self {
        self.points[landmark::THUMB_MCP] = Point::new(0.44, 0.78);
        self.points[landmark::THUMB_IP] = Point::new(0.36, 0.77);
        self.points[landmark::THUMB_TIP] = Point::new(0.26, 0.76);
        self
    }

    /// Thumb and index pinched together, middle/ring/pinky extended.
    pub fn ok_sign(self) -> Self {
        let mut pose = self.open_middle().open_ring().open_pinky();
        pose.points[landmark::INDEX_TIP] = Point::new(0.44, 0.74);
        pose.points[landmark::THUMB_TIP] = Point::new(0.46, 0.76);
        pose
    }

    /// Override a single landmark.
    pub fn with_point(mut self, index: usize, point: Point) -> Self {
        self.points[index] = point;
        self
    }

    pub fn build(self) -> HandLandmarks {
        HandLandmarks::new(self.points)
    }
}
