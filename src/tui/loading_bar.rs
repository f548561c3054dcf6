//! Loading progress overlay.

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Clear, Gauge},
    Frame,
};

use crate::tui::Theme;

/// Progress bar fill color.
const BAR_FILL: Color = Color::Rgb(0x22, 0x22, 0xAA);

/// Progress bar track color.
const BAR_BASE: Color = Color::Rgb(0xAA, 0xAA, 0xAA);

/// Full-screen loading overlay with a centered progress bar.
///
/// Purely presentational: the host drives `set_progress` from its own
/// loading pipeline and hides the overlay when done.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadingBar {
    progress: f32,
    visible: bool,
}

impl LoadingBar {
    /// Creates a visible loading bar at zero progress.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            progress: 0.0,
            visible: true,
        }
    }

    /// Sets the progress fraction; values outside `[0, 1]` are clamped.
    pub fn set_progress(&mut self, progress: f32) {
        self.progress = progress.clamp(0.0, 1.0);
    }

    /// Current progress fraction in `[0, 1]`.
    #[must_use]
    pub const fn progress(&self) -> f32 {
        self.progress
    }

    /// Shows or hides the overlay.
    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    /// Whether the overlay is shown.
    #[must_use]
    pub const fn visible(&self) -> bool {
        self.visible
    }

    /// Draws the overlay across `area` with a centered bar.
    pub fn render(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        if !self.visible || area.width == 0 || area.height == 0 {
            return;
        }

        // Dim the whole area behind the bar
        f.render_widget(Clear, area);
        f.render_widget(
            Block::default().style(Style::default().bg(theme.background)),
            area,
        );

        // Centered bar: half the width with a sensible minimum
        let bar_width = (area.width / 2).max(25).min(area.width);
        let bar = Rect {
            x: area.x + (area.width - bar_width) / 2,
            y: area.y + area.height / 2,
            width: bar_width,
            height: 1,
        };

        f.render_widget(
            Gauge::default()
                .ratio(f64::from(self.progress))
                .gauge_style(Style::default().fg(BAR_FILL).bg(BAR_BASE))
                .label(format!("{:>3.0}%", self.progress * 100.0)),
            bar,
        );
    }
}

impl Default for LoadingBar {
    fn default() -> Self {
        Self::new()
    }
}
