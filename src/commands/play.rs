//! Interactive waveform playback.
//!
//! Loads the sample document, opens the chart and advances the waveform by one sample
//! per frame while running. SIGUSR1 toggles playback from outside the terminal.

use crate::chart::{ChartCommand, EcgTui, ErrorScreen};
use crate::commands::shared::resolve_source;
use crate::config::EcgConfig;
use crate::player::WaveformPlayer;
use std::error::Error;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Shows a load failure on the error screen and turns it into an error.
fn fail_with_screen(title: &str, message: String) -> anyhow::Error {
    tracing::error!("{title}: {message}");
    match ErrorScreen::new() {
        Ok(mut screen) => {
            if let Err(e) = screen.show(title, &message) {
                tracing::warn!("Failed to display error screen: {e}");
            }
        }
        Err(e) => tracing::warn!("Failed to open error screen: {e}"),
    }
    anyhow::anyhow!("{title}: {message}")
}

/// Plays the configured (or given) sample document in the terminal chart.
///
/// # Errors
/// - If the configuration cannot be loaded or has an invalid viewport
/// - If the samples cannot be fetched or parsed
/// - If the terminal cannot be driven
pub async fn handle_play(source: Option<String>, autostart: bool) -> Result<(), anyhow::Error> {
    tracing::info!("=== ecgview Player Started ===");

    let config = EcgConfig::load().map_err(|err| {
        fail_with_screen(
            "Configuration Error",
            format!("{err}\n\nPlease check your ~/.config/ecgview/ecgview.toml file."),
        )
    })?;

    let viewport = config
        .viewport
        .to_viewport()
        .map_err(|err| fail_with_screen("Configuration Error", err.to_string()))?;

    let sample_source = resolve_source(&config, source.as_deref());
    let samples = sample_source
        .fetch()
        .await
        .map_err(|err| fail_with_screen("Sample Error", err.to_string()))?;

    let mut player = WaveformPlayer::new(viewport);
    player
        .load(samples)
        .map_err(|err| fail_with_screen("Sample Error", err.to_string()))?;

    if autostart || config.playback.autostart {
        player.start();
    }

    let frame_rate = config.playback.frame_rate.max(1);
    tracing::info!(
        "Playing {} samples from {} at {} fps (window={}, height={})",
        player.len(),
        sample_source,
        frame_rate,
        viewport.window,
        viewport.height
    );

    let toggle_requested = Arc::new(AtomicBool::new(false));
    #[cfg(unix)]
    signal_hook::flag::register(signal_hook::consts::SIGUSR1, toggle_requested.clone())
        .map_err(|e| anyhow::anyhow!("Failed to register signal handler: {e}"))?;

    let mut tui = EcgTui::new(sample_source.to_string())
        .map_err(|e| anyhow::anyhow!("Failed to initialize UI: {e}"))?;

    let result = run_frame_loop(
        &mut tui,
        &mut player,
        Duration::from_secs_f64(1.0 / frame_rate as f64),
        &toggle_requested,
    );

    tui.cleanup()
        .map_err(|e| anyhow::anyhow!("Failed to restore terminal: {e}"))?;
    result.map_err(|e| anyhow::anyhow!("Playback failed: {e}"))?;

    tracing::info!("Player stopped at position {}", player.position());
    Ok(())
}

/// Ticks and redraws once per frame until the user quits.
///
/// Input is polled for the time left in the current frame, so key presses are handled
/// immediately without delaying the next tick.
fn run_frame_loop(
    tui: &mut EcgTui,
    player: &mut WaveformPlayer,
    frame_interval: Duration,
    toggle_requested: &AtomicBool,
) -> Result<(), Box<dyn Error>> {
    tui.render(player)?;
    let mut next_frame = Instant::now() + frame_interval;

    loop {
        if toggle_requested.swap(false, Ordering::Relaxed) {
            player.toggle();
            tracing::info!("Received SIGUSR1: playback {}", player.state());
        }

        let timeout = next_frame.saturating_duration_since(Instant::now());
        match tui.handle_input(timeout)? {
            ChartCommand::Quit => break,
            ChartCommand::Start => player.start(),
            ChartCommand::Stop => player.stop(),
            ChartCommand::Toggle => player.toggle(),
            ChartCommand::Continue => {}
        }

        let now = Instant::now();
        if now >= next_frame {
            player.tick();
            tui.render(player)?;
            next_frame += frame_interval;
            // Skip frames we fell behind on instead of bursting ticks.
            if next_frame < now {
                next_frame = now + frame_interval;
            }
        }
    }

    Ok(())
}
