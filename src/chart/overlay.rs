//! Static chart overlays: grid lines, heart-rate labels and reference bands.
//!
//! All positions are in the same screen coordinates as the waveform points
//! (x in samples, y from the top of the viewport).

use crate::player::Viewport;
use ratatui::style::Color;

/// Horizontal distance between vertical grid lines, in samples.
pub const VERTICAL_GRID_SPACING: usize = 40;

/// Heart-rate value printed next to the top grid line.
const HEART_RATE_BASE: f64 = 40.0;
/// Heart-rate increment per horizontal grid line.
const HEART_RATE_STEP: f64 = 16.0;

/// A labelled grid line. `position` is x for vertical lines and y for horizontal ones.
#[derive(Debug, Clone, PartialEq)]
pub struct GridLine {
    pub position: f64,
    pub label: String,
}

/// Vertical lines every [`VERTICAL_GRID_SPACING`] samples across the window.
pub fn vertical_grid(viewport: &Viewport) -> Vec<GridLine> {
    (0..viewport.window)
        .step_by(VERTICAL_GRID_SPACING)
        .map(|x| GridLine {
            position: x as f64,
            label: x.to_string(),
        })
        .collect()
}

/// Evenly spaced horizontal lines labelled on the heart-rate scale.
pub fn horizontal_grid(viewport: &Viewport) -> Vec<GridLine> {
    let count = viewport.grid_lines;
    (0..count)
        .map(|i| GridLine {
            position: i as f64 * viewport.height / count as f64,
            label: format!("{}", (HEART_RATE_BASE + i as f64 * HEART_RATE_STEP).round()),
        })
        .collect()
}

/// Reference heart-rate bands drawn across the full window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReferenceBand {
    Normal,
    Median,
    Danger,
}

impl ReferenceBand {
    pub const ALL: [ReferenceBand; 3] = [Self::Normal, Self::Median, Self::Danger];

    /// Offset from the vertical centre of the viewport.
    fn offset(&self) -> f64 {
        match self {
            Self::Normal => -80.0,
            Self::Median => 20.0,
            Self::Danger => 70.0,
        }
    }

    /// Line position in screen coordinates.
    pub fn y(&self, viewport: &Viewport) -> f64 {
        viewport.height / 2.0 + self.offset()
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Normal => "Normal Range",
            Self::Median => "Median Range",
            Self::Danger => "Danger Range",
        }
    }

    pub fn color(&self) -> Color {
        match self {
            Self::Normal => Color::Rgb(76, 175, 80),
            Self::Median => Color::Rgb(255, 193, 7),
            Self::Danger => Color::Rgb(244, 67, 54),
        }
    }
}

/// Every how many labels to print so that `count` labels fit in `columns` cells.
pub fn label_stride(count: usize, label_width: usize, columns: usize) -> usize {
    if columns == 0 {
        return count.max(1);
    }
    (count * label_width).div_ceil(columns).max(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertical_grid_every_forty_samples() {
        let grid = vertical_grid(&Viewport::default());
        assert_eq!(grid.len(), 20);
        assert_eq!(grid[0].position, 0.0);
        assert_eq!(grid[19].position, 760.0);
        assert_eq!(grid[19].label, "760");
    }

    #[test]
    fn test_horizontal_grid_heart_rate_labels() {
        let grid = horizontal_grid(&Viewport::default());
        assert_eq!(grid.len(), 11);
        assert_eq!(grid[0].position, 0.0);
        assert_eq!(grid[0].label, "40");
        assert_eq!(grid[10].label, "200");
        assert_eq!(grid[1].position, 50.0);
    }

    #[test]
    fn test_reference_band_positions() {
        let viewport = Viewport::default();
        assert_eq!(ReferenceBand::Normal.y(&viewport), 195.0);
        assert_eq!(ReferenceBand::Median.y(&viewport), 295.0);
        assert_eq!(ReferenceBand::Danger.y(&viewport), 345.0);
    }

    #[test]
    fn test_label_stride() {
        assert_eq!(label_stride(20, 4, 200), 1);
        assert_eq!(label_stride(20, 4, 40), 2);
        assert_eq!(label_stride(20, 4, 0), 20);
        assert_eq!(label_stride(0, 4, 80), 1);
    }
}
