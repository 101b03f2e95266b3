//! First-run setup.
//!
//! Writes the default config file, stamped with the current version, when it is
//! missing or older than the running binary.

pub mod version;

use std::path::Path;

/// Embedded default configuration template.
const DEFAULT_CONFIG: &str = include_str!("../../environments/ecgview.toml");

/// Writes the default config to `config_path`, replacing any existing file.
///
/// # Errors
/// Returns an error if the parent directory or the file cannot be written.
pub fn run_setup(config_path: &Path) -> anyhow::Result<()> {
    if let Some(parent) = config_path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    if config_path.exists() {
        let backup = config_path.with_extension("toml.bak");
        std::fs::copy(config_path, &backup)?;
        tracing::info!("Previous config backed up to {}", backup.display());
    }

    let full_config = format!("{}\n{}", version::version_line(), DEFAULT_CONFIG);
    std::fs::write(config_path, full_config)?;
    tracing::info!("Default config written to {}", config_path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EcgConfig;

    #[test]
    fn test_run_setup_writes_versioned_default() {
        let dir = std::env::temp_dir().join(format!("ecgview-setup-{}", std::process::id()));
        let path = dir.join("ecgview.toml");

        run_setup(&path).unwrap();
        assert!(version::check_setup_needed(&path).unwrap().is_none());

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(EcgConfig::from_toml(&content).unwrap(), EcgConfig::default());

        run_setup(&path).unwrap();
        assert!(path.with_extension("toml.bak").exists());

        std::fs::remove_dir_all(&dir).unwrap();
    }
}
