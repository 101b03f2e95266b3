//! Helpers shared by the commands that load samples.

use crate::config::EcgConfig;
use crate::player::WaveformPlayer;
use crate::source::SampleSource;

/// Resolves the sample source: the `--source` flag wins over the config file.
pub fn resolve_source(config: &EcgConfig, source_override: Option<&str>) -> SampleSource {
    SampleSource::parse(source_override.unwrap_or(&config.source.location))
}

/// Loads the config, fetches the samples and returns a stopped player at position 0.
///
/// Used by the non-interactive commands; failures are reported as plain errors.
pub async fn load_player(
    source_override: Option<&str>,
) -> anyhow::Result<(WaveformPlayer, SampleSource, EcgConfig)> {
    let config =
        EcgConfig::load().map_err(|e| anyhow::anyhow!("Failed to load configuration: {e}"))?;
    let viewport = config
        .viewport
        .to_viewport()
        .map_err(|e| anyhow::anyhow!("Invalid [viewport] configuration: {e}"))?;

    let source = resolve_source(&config, source_override);
    let samples = source
        .fetch()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to load samples: {e}"))?;

    let mut player = WaveformPlayer::new(viewport);
    player.load(samples)?;
    Ok((player, source, config))
}
