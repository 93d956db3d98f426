pub mod frame;

pub use frame::LandmarkFrame;
