use crate::error::FrameError;
use crate::intake::frame::WireFrame;
use std::future::Future;
use std::pin::Pin;

/// Where a framed read currently stands.
pub enum ReadState {
    WaitingForLength,
    WaitingForFrame { expected_length: u32 },
}

/// Source of wire frames, one at a time, in arrival order.
pub trait FrameReader: Send {
    fn read<'a>(
        &'a mut self,
    ) -> Pin<Box<dyn Future<Output = Result<WireFrame, FrameError>> + Send + 'a>>;

    fn is_connected<'a>(&'a self) -> Pin<Box<dyn Future<Output = bool> + Send + 'a>>;
}
