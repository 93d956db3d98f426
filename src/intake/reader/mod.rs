pub mod frame_reader;
pub mod framed_tcp_reader;

pub use frame_reader::{FrameReader, ReadState};
pub use framed_tcp_reader::FramedTcpReader;
