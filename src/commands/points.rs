//! Prints the screen points of one frame.

use crate::commands::shared::load_player;
use crate::player::format_points;

/// Writes the polyline points of the window starting at `position` to stdout,
/// formatted as an SVG `points` attribute.
///
/// # Errors
/// - If the configuration or samples cannot be loaded
pub async fn handle_points(source: Option<String>, position: usize) -> Result<(), anyhow::Error> {
    let (mut player, sample_source, _) = load_player(source.as_deref()).await?;
    player.seek(position);

    tracing::info!(
        "Printing frame at position {} of {} ({})",
        player.position(),
        player.len(),
        sample_source
    );

    println!("{}", format_points(&player.visible_points()));
    Ok(())
}
