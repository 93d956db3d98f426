pub mod classifier;
pub mod hold;
pub mod openness;

#[cfg(test)]
pub mod testing;

pub use classifier::classify;
pub use hold::{HoldTracker, HoldUpdate, DEFAULT_HOLD_DURATION};
pub use openness::FingerOpenness;
