use crate::{
    common::frame::LandmarkFrame,
    config::Configuration,
    error::AppError,
    intake::TrackerListener,
    pipeline::GestureEngine,
    session::{ExamSession, Question},
    sink::ConfirmedAction,
};
use tokio::sync::mpsc::{Receiver, Sender};
use tokio_util::sync::CancellationToken;
use tracing::{error, info};

/// Owns the intake and pipeline tasks and their shutdown token.
pub struct Coordinator {
    intake_task: tokio::task::JoinHandle<()>,
    pipeline_task: tokio::task::JoinHandle<()>,
    cancel_token: CancellationToken,
}

impl Coordinator {
    fn new(
        configuration: Configuration,
        session: ExamSession,
        action_tx: Sender<ConfirmedAction>,
    ) -> Self {
        let cancel_token = CancellationToken::new();
        let (frame_tx, frame_rx) =
            tokio::sync::mpsc::channel(configuration.frame_buffer_size);

        let listener = TrackerListener::new(
            configuration.listen_port,
            frame_tx,
            cancel_token.clone(),
        );
        let intake_task = tokio::spawn(async move {
            if let Err(e) = listener.run().await {
                error!("Intake task failed: {}", e);
            }
        });

        let engine = GestureEngine::new(configuration.hold_duration());
        let pipeline_task = Self::start_pipeline_task(
            engine,
            session,
            frame_rx,
            action_tx,
            cancel_token.clone(),
        );

        Self {
            intake_task,
            pipeline_task,
            cancel_token,
        }
    }

    fn start_pipeline_task(
        mut engine: GestureEngine,
        mut session: ExamSession,
        mut frame_rx: Receiver<LandmarkFrame>,
        action_tx: Sender<ConfirmedAction>,
        cancel_token: CancellationToken,
    ) -> tokio::task::JoinHandle<()> {
        tokio::spawn(async move {
            loop {
                let frame = tokio::select! {
                    _ = cancel_token.cancelled() => break,
                    frame = frame_rx.recv() => match frame {
                        Some(frame) => frame,
                        None => break,
                    },
                };

                // The whole per-frame path is synchronous: one frame in,
                // at most one confirmed action out.
                let context = engine.process(frame);
                let Some(action) = context.confirmed_action() else {
                    continue;
                };

                let event = session.apply(action);
                if action_tx
                    .send(ConfirmedAction { action, event })
                    .await
                    .is_err()
                {
                    error!("Action channel closed, stopping pipeline");
                    break;
                }

                if session.is_submitted() {
                    info!("Session submitted, pipeline now ignores gestures");
                }
            }
        })
    }

    pub fn stop(&self) {
        self.cancel_token.cancel();
        self.intake_task.abort();
        self.pipeline_task.abort();
    }
}

impl Drop for Coordinator {
    fn drop(&mut self) {
        self.stop();
    }
}

pub struct CoordinatorBuilder {
    configuration: Configuration,
    questions: Option<Vec<Question>>,
}

impl CoordinatorBuilder {
    pub fn new(configuration: Configuration) -> Self {
        Self {
            configuration,
            questions: None,
        }
    }

    // Sets the tracker port, this will override the default configuration.
    pub fn listen_port(mut self, listen_port: u16) -> Self {
        self.configuration.listen_port = listen_port;
        self
    }

    // Adjusts the frame buffer size, this will override the default configuration.
    pub fn frame_buffer_size(mut self, frame_buffer_size: usize) -> Self {
        self.configuration.frame_buffer_size = frame_buffer_size;
        self
    }

    // Sets the action buffer size, this will override the default configuration.
    pub fn action_buffer_size(mut self, action_buffer_size: usize) -> Self {
        self.configuration.action_buffer_size = action_buffer_size;
        self
    }

    // Sets the hold duration, this will override the default configuration.
    pub fn hold_duration_ms(mut self, hold_duration_ms: u64) -> Self {
        self.configuration.hold_duration_ms = hold_duration_ms;
        self
    }

    pub fn questions(mut self, questions: Vec<Question>) -> Self {
        self.questions = Some(questions);
        self
    }

    /// Build the coordinator. Returns it together with the receiving end
    /// of the confirmed-action channel for the downstream consumer.
    pub fn build(self) -> Result<(Coordinator, Receiver<ConfirmedAction>), AppError> {
        let questions = self
            .questions
            .ok_or(AppError::Coordinator("Questions not set".to_string()))?;
        let session = ExamSession::new(questions)?;

        let (action_tx, action_rx) =
            tokio::sync::mpsc::channel(self.configuration.action_buffer_size);
        let coordinator = Coordinator::new(self.configuration, session, action_tx);
        Ok((coordinator, action_rx))
    }
}
