//! Opens the ecgview configuration file in the user's editor.

use std::process::Command;

use crate::config::config_path;

/// Opens the config file with `$EDITOR`, falling back to nano, then vi.
///
/// # Errors
/// - If the config path cannot be determined
/// - If no editor can be found or the editor exits with an error
pub fn handle_config() -> anyhow::Result<()> {
    let config_path = config_path()
        .map_err(|e| anyhow::anyhow!("Failed to locate config directory: {e}"))?;
    tracing::info!("Opening config file: {}", config_path.display());

    let editor = find_editor(std::env::var("EDITOR").ok(), is_editor_available)?;
    tracing::debug!("Using editor: {}", editor);

    let status = Command::new(&editor)
        .arg(&config_path)
        .status()
        .map_err(|e| anyhow::anyhow!("Failed to open editor '{editor}': {e}"))?;

    if !status.success() {
        return Err(anyhow::anyhow!(
            "Editor exited with error code: {}",
            status.code().unwrap_or(-1)
        ));
    }

    tracing::info!("Config file edited");
    Ok(())
}

/// Picks the editor: a non-empty `$EDITOR`, else the first available fallback.
fn find_editor(
    env_editor: Option<String>,
    available: impl Fn(&str) -> bool,
) -> anyhow::Result<String> {
    if let Some(editor) = env_editor.filter(|e| !e.trim().is_empty()) {
        return Ok(editor);
    }

    ["nano", "vi"]
        .into_iter()
        .find(|editor| available(*editor))
        .map(str::to_string)
        .ok_or_else(|| anyhow::anyhow!("No editor found. Please set the $EDITOR environment variable."))
}

fn is_editor_available(editor: &str) -> bool {
    Command::new("which")
        .arg(editor)
        .output()
        .map(|output| output.status.success())
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_editor_wins() {
        let editor = find_editor(Some("hx".to_string()), |_| true).unwrap();
        assert_eq!(editor, "hx");
    }

    #[test]
    fn test_fallback_order() {
        assert_eq!(find_editor(Some(" ".to_string()), |_| true).unwrap(), "nano");
        assert_eq!(find_editor(None, |e| e == "vi").unwrap(), "vi");
        assert!(find_editor(None, |_| false).is_err());
    }
}
