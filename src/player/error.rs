//! Errors raised by the waveform player.

use thiserror::Error;

/// Reasons a sample buffer or viewport is rejected.
#[derive(Debug, Error, PartialEq)]
pub enum PlayerError {
    #[error("sample buffer is empty; load at least one sample")]
    InvalidInput,
    #[error("sample {index} is not a finite number")]
    NonFiniteSample { index: usize },
    #[error("invalid viewport: window={window}, height={height}")]
    InvalidViewport { window: usize, height: f64 },
}
