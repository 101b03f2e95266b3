//! Configuration management for ecgview.
//!
//! Loads the TOML config from the user's config directory. CLI flags override the
//! values read here.

pub mod file;

pub use file::{config_path, EcgConfig};
