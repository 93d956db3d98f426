use thiserror::Error;

// Main application error type

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Frame Error: {0}")]
    Frame(#[from] FrameError),
    #[error("Session Error: {0}")]
    Session(#[from] SessionError),
    #[error("Intake Error: {0}")]
    Intake(#[from] IntakeError),
    #[error("Configuration Error: {0}")]
    Config(#[from] config::ConfigError),
    #[error("Coordinator Error: {0}")]
    Coordinator(String),
}

// Wire-level frame decoding errors

#[derive(Error, Debug)]
pub enum FrameError {
    #[error("Failed to read frame: {0}")]
    Read(std::io::Error),
    #[error("Invalid frame length: {0}")]
    InvalidFrameLength(usize),
    #[error("Invalid frame tag: {0}")]
    InvalidFrameTag(u8),
    #[error("Expected 21 landmarks, got {0}")]
    InvalidLandmarkCount(usize),
    #[error("Malformed landmark payload: {0}")]
    Payload(#[from] serde_json::Error),
}

// Intake/connection errors

#[derive(Error, Debug)]
pub enum IntakeError {
    #[error("Failed to bind to port {1}: {0}")]
    Bind(std::io::Error, u16),
    #[error("Failed to accept connection: {0}")]
    Accept(std::io::Error),
    #[error("Frame channel closed")]
    ChannelClosed,
}

// Exam session misuse

#[derive(Error, Debug)]
pub enum SessionError {
    #[error("An exam needs at least one question")]
    NoQuestions,
}
