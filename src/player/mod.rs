//! Waveform playback core.
//!
//! Holds the loaded sample buffer, the scroll position and the play state, and maps the
//! visible window of samples into screen coordinates. Everything here is synchronous;
//! the chart loop calls [`WaveformPlayer::tick`] once per frame.

pub mod error;
pub mod viewport;
pub mod waveform;

pub use error::PlayerError;
pub use viewport::Viewport;
pub use waveform::{format_points, PlayState, WaveformPlayer};
