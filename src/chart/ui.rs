//! Terminal chart that scrolls the waveform across the grid and reference bands.

use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    prelude::*,
    symbols::Marker,
    text::Span,
    widgets::{
        canvas::{Canvas, Line as CanvasLine},
        Block, Borders, Paragraph,
    },
};
use std::error::Error;
use std::io::{stdout, Stdout};
use std::time::Duration;

use super::overlay::{horizontal_grid, label_stride, vertical_grid, ReferenceBand};
use crate::player::{PlayState, WaveformPlayer};

/// Extra canvas room left of the chart for the heart-rate labels.
const LABEL_MARGIN: f64 = 50.0;

const BACKGROUND: Color = Color::Rgb(0, 0, 0);
const GRID: Color = Color::Rgb(60, 60, 60);
const LABEL: Color = Color::Rgb(140, 140, 140);
const TRACE: Color = Color::Rgb(80, 160, 255);

/// Key press translated into a chart action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartCommand {
    /// Nothing pressed before the timeout
    Continue,
    /// Start scrolling (`s`)
    Start,
    /// Stop scrolling (`x`)
    Stop,
    /// Toggle scrolling (Space)
    Toggle,
    /// Leave the chart (Escape, `q`, Ctrl+C)
    Quit,
}

/// Maps a key to a chart command; unknown keys keep the loop going.
pub fn command_for_key(code: KeyCode, modifiers: KeyModifiers) -> ChartCommand {
    match code {
        KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => ChartCommand::Quit,
        KeyCode::Char('q') | KeyCode::Esc => ChartCommand::Quit,
        KeyCode::Char('s') => ChartCommand::Start,
        KeyCode::Char('x') => ChartCommand::Stop,
        KeyCode::Char(' ') => ChartCommand::Toggle,
        _ => ChartCommand::Continue,
    }
}

/// Full-screen ECG chart.
pub struct EcgTui {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    source_label: String,
}

impl EcgTui {
    /// Enters the alternate screen and prepares the terminal for drawing.
    ///
    /// # Errors
    /// - If raw mode cannot be enabled
    /// - If the alternate screen cannot be entered
    pub fn new(source_label: String) -> Result<Self, Box<dyn Error>> {
        enable_raw_mode()?;
        let mut stdout = stdout();
        execute!(stdout, EnterAlternateScreen)?;

        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;
        terminal.hide_cursor()?;

        Ok(EcgTui {
            terminal,
            source_label,
        })
    }

    /// Draws one frame: grid, reference bands, the visible waveform, legend and footer.
    ///
    /// # Errors
    /// - If terminal rendering fails
    pub fn render(&mut self, player: &WaveformPlayer) -> Result<(), Box<dyn Error>> {
        let viewport = player.viewport();
        let height = viewport.height;
        let width = viewport.window as f64;
        let points = player.visible_points();
        let vertical = vertical_grid(&viewport);
        let horizontal = horizontal_grid(&viewport);
        let title = format!(" ECG · {} ", self.source_label);

        self.terminal.draw(|frame| {
            let [chart_area, legend_area, footer_area] = Layout::vertical([
                Constraint::Min(3),
                Constraint::Length(1),
                Constraint::Length(1),
            ])
            .areas(frame.area());

            let x_stride = label_stride(vertical.len(), 5, chart_area.width as usize);

            // Canvas y grows upwards; chart coordinates grow downwards.
            let flip = |y: f64| height - y;

            let canvas = Canvas::default()
                .block(Block::default().borders(Borders::ALL).title(title.as_str()))
                .background_color(BACKGROUND)
                .marker(Marker::Braille)
                .x_bounds([-LABEL_MARGIN, width])
                .y_bounds([0.0, height])
                .paint(|ctx| {
                    for line in &vertical {
                        ctx.draw(&CanvasLine {
                            x1: line.position,
                            y1: 0.0,
                            x2: line.position,
                            y2: height,
                            color: GRID,
                        });
                    }
                    for line in &horizontal {
                        ctx.draw(&CanvasLine {
                            x1: 0.0,
                            y1: flip(line.position),
                            x2: width,
                            y2: flip(line.position),
                            color: GRID,
                        });
                    }
                    ctx.layer();

                    for band in ReferenceBand::ALL {
                        let y = flip(band.y(&viewport));
                        ctx.draw(&CanvasLine {
                            x1: 0.0,
                            y1: y,
                            x2: width,
                            y2: y,
                            color: band.color(),
                        });
                    }
                    ctx.layer();

                    for pair in points.windows(2) {
                        ctx.draw(&CanvasLine {
                            x1: pair[0].x,
                            y1: flip(pair[0].y),
                            x2: pair[1].x,
                            y2: flip(pair[1].y),
                            color: TRACE,
                        });
                    }

                    for line in &horizontal {
                        ctx.print(
                            -LABEL_MARGIN,
                            flip(line.position),
                            Span::styled(line.label.clone(), Style::default().fg(LABEL)),
                        );
                    }
                    for line in vertical.iter().step_by(x_stride) {
                        ctx.print(
                            line.position,
                            0.0,
                            Span::styled(line.label.clone(), Style::default().fg(LABEL)),
                        );
                    }
                });

            frame.render_widget(canvas, chart_area);

            let mut legend = Vec::new();
            for band in ReferenceBand::ALL {
                legend.push(Span::styled("━━ ", Style::default().fg(band.color())));
                legend.push(Span::raw(format!("{}   ", band.label())));
            }
            frame.render_widget(
                Paragraph::new(Line::from(legend)).style(Style::default().bg(BACKGROUND)),
                legend_area,
            );

            frame.render_widget(
                Paragraph::new(footer_line(player))
                    .style(Style::default().fg(Color::Rgb(185, 207, 212)).bg(BACKGROUND)),
                footer_area,
            );
        })?;

        Ok(())
    }

    /// Waits up to `timeout` for a key press and translates it.
    ///
    /// # Errors
    /// - If event polling fails
    pub fn handle_input(&mut self, timeout: Duration) -> Result<ChartCommand, Box<dyn Error>> {
        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    return Ok(ChartCommand::Continue);
                }
                let command = command_for_key(key.code, key.modifiers);
                if command != ChartCommand::Continue {
                    tracing::debug!("Key {:?} -> {:?}", key.code, command);
                }
                return Ok(command);
            }
        }
        Ok(ChartCommand::Continue)
    }

    /// Restores the terminal.
    ///
    /// # Errors
    /// - If raw mode cannot be disabled
    /// - If the cursor cannot be shown
    pub fn cleanup(&mut self) -> Result<(), Box<dyn Error>> {
        disable_raw_mode()?;
        execute!(self.terminal.backend_mut(), LeaveAlternateScreen)?;
        self.terminal.show_cursor()?;
        Ok(())
    }
}

/// Status line: play indicator, position, bounds and key help.
fn footer_line(player: &WaveformPlayer) -> Line<'static> {
    let indicator = match player.state() {
        PlayState::Running => Span::styled("▶ running ", Style::default().fg(Color::Green)),
        PlayState::Stopped => Span::styled("■ stopped ", Style::default().fg(Color::Yellow)),
    };
    let bounds = player
        .bounds()
        .map(|b| format!(" / min {:.3} max {:.3}", b.min, b.max))
        .unwrap_or_default();

    Line::from(vec![
        indicator,
        Span::raw(format!("{}/{}{}", player.position(), player.len(), bounds)),
        Span::styled(
            "   s start · x stop · space toggle · q quit",
            Style::default().fg(LABEL),
        ),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::player::Viewport;

    #[test]
    fn test_command_for_key() {
        let none = KeyModifiers::NONE;
        assert_eq!(command_for_key(KeyCode::Char('s'), none), ChartCommand::Start);
        assert_eq!(command_for_key(KeyCode::Char('x'), none), ChartCommand::Stop);
        assert_eq!(command_for_key(KeyCode::Char(' '), none), ChartCommand::Toggle);
        assert_eq!(command_for_key(KeyCode::Esc, none), ChartCommand::Quit);
        assert_eq!(command_for_key(KeyCode::Char('q'), none), ChartCommand::Quit);
        assert_eq!(
            command_for_key(KeyCode::Char('c'), KeyModifiers::CONTROL),
            ChartCommand::Quit
        );
        assert_eq!(command_for_key(KeyCode::Char('c'), none), ChartCommand::Continue);
        assert_eq!(command_for_key(KeyCode::Enter, none), ChartCommand::Continue);
    }

    #[test]
    fn test_footer_shows_state_and_position() {
        let mut player = WaveformPlayer::new(Viewport::default());
        player.load(vec![1.0, 2.0, 3.0]).unwrap();
        player.seek(2);

        let text: String = footer_line(&player)
            .spans
            .iter()
            .map(|span| span.content.as_ref())
            .collect();
        assert!(text.starts_with("■ stopped 2/3 / min 1.000 max 3.000"));

        player.start();
        let text: String = footer_line(&player)
            .spans
            .iter()
            .map(|span| span.content.as_ref())
            .collect();
        assert!(text.starts_with("▶ running"));
    }
}
