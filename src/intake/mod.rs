pub mod frame;
pub mod listener;
pub mod reader;

pub use frame::WireFrame;
pub use listener::TrackerListener;
pub use reader::{FrameReader, FramedTcpReader};
