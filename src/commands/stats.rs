//! Summary of a sample document.

use crate::commands::shared::load_player;

/// Prints the sample count, bounds and loop duration of the sample document.
///
/// # Errors
/// - If the configuration or samples cannot be loaded
pub async fn handle_stats(source: Option<String>) -> Result<(), anyhow::Error> {
    let (player, sample_source, config) = load_player(source.as_deref()).await?;
    let bounds = player
        .bounds()
        .ok_or_else(|| anyhow::anyhow!("No samples loaded"))?;
    let frame_rate = config.playback.frame_rate.max(1);
    let loop_secs = player.len() as f64 / frame_rate as f64;

    println!("Source:   {sample_source}");
    println!("Samples:  {}", player.len());
    println!("Min:      {}", bounds.min);
    println!("Max:      {}", bounds.max);
    println!("Loop:     {loop_secs:.1}s at {frame_rate} fps");
    Ok(())
}
