//! Terminal presentation of the waveform.
//!
//! The chart owns the terminal while playing: it renders the player's visible points
//! on top of the grid and reference bands and turns key presses into start/stop commands.

pub mod error;
pub mod overlay;
pub mod ui;

pub use error::ErrorScreen;
pub use ui::{ChartCommand, EcgTui};
