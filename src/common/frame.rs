use crate::pipeline::types::FrameObservation;
use chrono::{DateTime, Utc};
use uuid::Uuid;

/// One tracker observation as it flows through the daemon.
#[derive(Debug, Clone)]
pub struct LandmarkFrame {
    client_id: Uuid,
    observation: FrameObservation,
    captured_at: DateTime<Utc>,
    frame_id: Uuid,
}

impl LandmarkFrame {
    pub fn new(client_id: Uuid, observation: FrameObservation) -> Self {
        Self {
            client_id,
            observation,
            captured_at: Utc::now(),
            frame_id: Uuid::new_v4(),
        }
    }

    pub fn client_id(&self) -> Uuid {
        self.client_id
    }

    pub fn observation(&self) -> &FrameObservation {
        &self.observation
    }

    pub fn captured_at(&self) -> DateTime<Utc> {
        self.captured_at
    }

    pub fn frame_id(&self) -> Uuid {
        self.frame_id
    }
}
