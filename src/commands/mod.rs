//! Application command handlers for ecgview.
//!
//! # Commands
//! - `play`: Interactive scrolling chart (default)
//! - `points`: Print the screen points of one frame
//! - `stats`: Summarize a sample document
//! - `config`: Open the configuration file in the user's editor
//! - `logs`: Display recent log entries

pub mod config;
pub mod logs;
pub mod play;
pub mod points;
pub mod shared;
pub mod stats;

pub use config::handle_config;
pub use logs::handle_logs;
pub use play::handle_play;
pub use points::handle_points;
pub use stats::handle_stats;
