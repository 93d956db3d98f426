use crate::error::FrameError;
use crate::pipeline::types::landmarks::{FrameObservation, HandLandmarks, Point};

/// Maximum accepted payload for a single wire frame. A 21-point JSON
/// payload is well under 2 KiB; anything near this limit is garbage.
pub const MAX_FRAME_BYTES: u32 = 64 * 1024;

/// One frame of the tracker wire protocol.
///
/// Layout on the wire: `[length: u32 LE][tag: u8][payload]`. The `Hand`
/// payload is a JSON array of exactly 21 `{x, y}` points in the
/// tracker's anatomical order.
#[derive(Debug, Clone, PartialEq)]
pub enum WireFrame {
    Ping,
    Hand(HandLandmarks),
    NoHand,
    Shutdown,
}

impl WireFrame {
    /// The observation this frame carries, if it is an observation.
    pub fn observation(&self) -> Option<FrameObservation> {
        match self {
            WireFrame::Hand(landmarks) => Some(FrameObservation::Hand(landmarks.clone())),
            WireFrame::NoHand => Some(FrameObservation::NoHand),
            WireFrame::Ping | WireFrame::Shutdown => None,
        }
    }
}

impl TryFrom<&[u8]> for WireFrame {
    type Error = FrameError;

    fn try_from(slice: &[u8]) -> Result<Self, Self::Error> {
        if slice.is_empty() {
            return Err(FrameError::InvalidFrameLength(0));
        }
        let tag = slice[0];
        match tag {
            0 => Ok(WireFrame::Ping),
            1 => {
                let points: Vec<Point> = serde_json::from_slice(&slice[1..])?;
                Ok(WireFrame::Hand(HandLandmarks::from_points(points)?))
            }
            2 => Ok(WireFrame::NoHand),
            3 => Ok(WireFrame::Shutdown),
            _ => Err(FrameError::InvalidFrameTag(tag)),
        }
    }
}
