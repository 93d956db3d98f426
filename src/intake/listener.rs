use crate::{
    common::frame::LandmarkFrame,
    error::{FrameError, IntakeError},
    intake::{
        frame::WireFrame,
        reader::{FrameReader, FramedTcpReader},
    },
};
use tokio::net::TcpListener;
use tokio::sync::mpsc::Sender;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};
use uuid::Uuid;

/// Accepts tracker connections and feeds decoded observations into the
/// frame channel. Connections are served one at a time: the protocol is
/// single-hand, single-session, and a second tracker would interleave
/// frames from two cameras.
pub struct TrackerListener {
    port: u16,
    frame_tx: Sender<LandmarkFrame>,
    cancel_token: CancellationToken,
}

impl TrackerListener {
    pub fn new(port: u16, frame_tx: Sender<LandmarkFrame>, cancel_token: CancellationToken) -> Self {
        Self {
            port,
            frame_tx,
            cancel_token,
        }
    }

    pub async fn run(self) -> Result<(), IntakeError> {
        let listener = TcpListener::bind(format!("0.0.0.0:{}", self.port))
            .await
            .map_err(|e| IntakeError::Bind(e, self.port))?;
        info!("Listening for tracker connections on port {}", self.port);

        loop {
            tokio::select! {
                _ = self.cancel_token.cancelled() => break,
                accepted = listener.accept() => {
                    let (stream, addr) = accepted.map_err(IntakeError::Accept)?;
                    let client_id = Uuid::new_v4();
                    info!("Tracker {} connected from {}", client_id, addr);

                    let mut reader = FramedTcpReader::new(stream);
                    self.serve(client_id, &mut reader).await?;
                    info!("Tracker {} disconnected", client_id);
                }
            }
        }
        Ok(())
    }

    /// Pump one connected tracker until it shuts down, disconnects, or
    /// the daemon is cancelled.
    async fn serve(
        &self,
        client_id: Uuid,
        reader: &mut dyn FrameReader,
    ) -> Result<(), IntakeError> {
        loop {
            let result = tokio::select! {
                _ = self.cancel_token.cancelled() => return Ok(()),
                result = reader.read() => result,
            };

            match result {
                Ok(WireFrame::Ping) => debug!("Tracker {} ping", client_id),
                Ok(WireFrame::Shutdown) => {
                    info!("Tracker {} sent shutdown", client_id);
                    return Ok(());
                }
                Ok(frame) => {
                    // Hand or NoHand: both are observations the pipeline
                    // needs to see (NoHand resets any pending hold).
                    let Some(observation) = frame.observation() else {
                        continue;
                    };
                    self.frame_tx
                        .send(LandmarkFrame::new(client_id, observation))
                        .await
                        .map_err(|_| IntakeError::ChannelClosed)?;
                }
                Err(FrameError::Read(e)) => {
                    info!("Tracker {} read failed: {}", client_id, e);
                    return Ok(());
                }
                Err(e) => {
                    // Malformed frame: drop it, keep the connection. The
                    // classifier never sees an incomplete landmark set.
                    warn!("Tracker {} sent a bad frame: {}", client_id, e);
                }
            }
        }
    }
}
