//! Fixed drawing area the waveform is scaled into.

use super::PlayerError;

/// Window width in samples of the original chart.
pub const DEFAULT_WINDOW: usize = 800;
/// Pixel height of the original chart.
pub const DEFAULT_HEIGHT: f64 = 550.0;
/// Number of horizontal grid lines.
pub const DEFAULT_GRID_LINES: usize = 11;

/// Size of the chart in screen coordinates (y grows downwards).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// Number of samples visible at once; also the x extent.
    pub window: usize,
    /// Height of the drawing area.
    pub height: f64,
    /// Count of horizontal grid lines.
    pub grid_lines: usize,
}

impl Viewport {
    /// Builds a viewport, rejecting a zero window or a non-positive height.
    pub fn new(window: usize, height: f64, grid_lines: usize) -> Result<Self, PlayerError> {
        if window == 0 || !height.is_finite() || height <= 0.0 {
            return Err(PlayerError::InvalidViewport { window, height });
        }
        Ok(Self {
            window,
            height,
            grid_lines,
        })
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            window: DEFAULT_WINDOW,
            height: DEFAULT_HEIGHT,
            grid_lines: DEFAULT_GRID_LINES,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_chart_constants() {
        let viewport = Viewport::default();
        assert_eq!(viewport.window, 800);
        assert_eq!(viewport.height, 550.0);
        assert_eq!(viewport.grid_lines, 11);
    }

    #[test]
    fn test_rejects_degenerate_sizes() {
        assert!(Viewport::new(0, 550.0, 11).is_err());
        assert!(Viewport::new(800, 0.0, 11).is_err());
        assert!(Viewport::new(800, f64::NAN, 11).is_err());
        assert!(Viewport::new(100, 200.0, 0).is_ok());
    }
}
