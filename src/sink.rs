use crate::pipeline::types::ExamAction;
use crate::session::SessionEvent;
use async_trait::async_trait;
use tokio::sync::mpsc::Receiver;
use tracing::info;

/// A confirmed gesture action together with what it did to the session.
/// This is the unit handed to the downstream exam interaction layer.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfirmedAction {
    pub action: ExamAction,
    pub event: SessionEvent,
}

/// Downstream consumer of confirmed actions. The exam backend, a UI
/// bridge, and the test suite all sit behind this seam.
#[async_trait]
pub trait ActionSink: Send {
    async fn deliver(&mut self, confirmed: ConfirmedAction);
}

/// Sink that only logs. Default downstream when nothing else is wired.
pub struct LoggingSink;

#[async_trait]
impl ActionSink for LoggingSink {
    async fn deliver(&mut self, confirmed: ConfirmedAction) {
        info!(
            action = confirmed.action.as_str(),
            event = ?confirmed.event,
            "confirmed action"
        );
    }
}

/// Drain the confirmed-action channel into a sink until the pipeline
/// side closes it.
pub async fn run_sink<S: ActionSink>(mut action_rx: Receiver<ConfirmedAction>, mut sink: S) {
    while let Some(confirmed) = action_rx.recv().await {
        sink.deliver(confirmed).await;
    }
}
