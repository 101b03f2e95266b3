//! Scrolling waveform state and coordinate mapping.

use super::{PlayerError, Viewport};

/// Whether the animation advances on each frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlayState {
    #[default]
    Stopped,
    Running,
}

impl std::fmt::Display for PlayState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Stopped => write!(f, "stopped"),
            Self::Running => write!(f, "running"),
        }
    }
}

/// Minimum and maximum of the loaded buffer, fixed at load time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min: f64,
    pub max: f64,
}

impl Bounds {
    fn of(samples: &[f64]) -> Self {
        let min = samples.iter().copied().fold(f64::INFINITY, f64::min);
        let max = samples.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        Self { min, max }
    }

    /// Scaling denominator; a flat signal scales by 1 instead of dividing by zero.
    fn span(&self) -> f64 {
        let span = self.max - self.min;
        if span == 0.0 {
            1.0
        } else {
            span
        }
    }
}

/// A point in screen coordinates (origin top-left, y grows downwards).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// Sliding-window player over a fixed sample buffer.
#[derive(Debug, Clone)]
pub struct WaveformPlayer {
    samples: Vec<f64>,
    bounds: Option<Bounds>,
    position: usize,
    state: PlayState,
    viewport: Viewport,
}

impl WaveformPlayer {
    /// Creates an empty, stopped player.
    pub fn new(viewport: Viewport) -> Self {
        Self {
            samples: Vec::new(),
            bounds: None,
            position: 0,
            state: PlayState::Stopped,
            viewport,
        }
    }

    /// Replaces the sample buffer and recomputes the bounds.
    ///
    /// The position resets to the start of the new buffer; the play state is kept.
    /// On error the previous buffer stays loaded.
    ///
    /// # Errors
    /// - `InvalidInput` if `samples` is empty
    /// - `NonFiniteSample` if any sample is NaN or infinite
    pub fn load(&mut self, samples: Vec<f64>) -> Result<(), PlayerError> {
        if samples.is_empty() {
            return Err(PlayerError::InvalidInput);
        }
        if let Some(index) = samples.iter().position(|s| !s.is_finite()) {
            return Err(PlayerError::NonFiniteSample { index });
        }

        let bounds = Bounds::of(&samples);
        tracing::debug!(
            "Loaded {} samples (min={}, max={})",
            samples.len(),
            bounds.min,
            bounds.max
        );

        self.samples = samples;
        self.bounds = Some(bounds);
        self.position = 0;
        Ok(())
    }

    pub fn start(&mut self) {
        self.state = PlayState::Running;
    }

    pub fn stop(&mut self) {
        self.state = PlayState::Stopped;
    }

    /// Flips between running and stopped.
    pub fn toggle(&mut self) {
        self.state = match self.state {
            PlayState::Running => PlayState::Stopped,
            PlayState::Stopped => PlayState::Running,
        };
    }

    /// Advances the position by one sample, wrapping at the end of the buffer.
    ///
    /// Does nothing while stopped or when no samples are loaded.
    pub fn tick(&mut self) {
        if self.state != PlayState::Running || self.samples.is_empty() {
            return;
        }
        self.position = (self.position + 1) % self.samples.len();
    }

    /// Moves the window to start at `position`, wrapped into the buffer.
    pub fn seek(&mut self, position: usize) {
        if self.samples.is_empty() {
            return;
        }
        self.position = position % self.samples.len();
    }

    /// Maps the visible window into screen points, one per x in `0..window`.
    ///
    /// The minimum sample lands on `height` and the maximum on `0`.
    pub fn visible_points(&self) -> Vec<Point> {
        let Some(bounds) = self.bounds else {
            return Vec::new();
        };
        let len = self.samples.len();
        let height = self.viewport.height;
        let span = bounds.span();

        (0..self.viewport.window)
            .map(|x| {
                let value = self.samples[(self.position + x) % len];
                Point {
                    x: x as f64,
                    y: height - ((value - bounds.min) / span) * height,
                }
            })
            .collect()
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn state(&self) -> PlayState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == PlayState::Running
    }

    pub fn bounds(&self) -> Option<Bounds> {
        self.bounds
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }
}

/// Formats points as an SVG `points` attribute: `"x,y x,y ..."`.
pub fn format_points(points: &[Point]) -> String {
    points
        .iter()
        .map(|p| format!("{},{}", p.x, p.y))
        .collect::<Vec<_>>()
        .join(" ")
}
