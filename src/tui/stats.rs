//! Frame performance overlay.
//!
//! Collects per-frame timings between `begin`/`end` calls and displays one
//! metric panel at a time (frames per second or frame milliseconds), with
//! recent history and a running value range. The host cycles panels the
//! same way it toggles any other overlay.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

use ratatui::{
    layout::Rect,
    style::Style,
    widgets::{Block, Borders, Sparkline},
    Frame,
};

use crate::tui::Theme;

/// Number of historical samples kept per panel.
const HISTORY: usize = 64;

/// One metric series with history and running min/max.
#[derive(Debug, Clone)]
struct MetricPanel {
    name: &'static str,
    values: VecDeque<u64>,
    min: u64,
    max: u64,
}

impl MetricPanel {
    fn new(name: &'static str) -> Self {
        Self {
            name,
            values: VecDeque::with_capacity(HISTORY),
            min: u64::MAX,
            max: 0,
        }
    }

    fn push(&mut self, value: u64) {
        if self.values.len() == HISTORY {
            self.values.pop_front();
        }
        self.values.push_back(value);
        self.min = self.min.min(value);
        self.max = self.max.max(value);
    }

    fn title(&self) -> String {
        match self.values.back() {
            Some(last) => format!(" {last} {} ({}-{}) ", self.name, self.min, self.max),
            None => format!(" {} ", self.name),
        }
    }
}

/// Frame statistics overlay with cycling FPS and frame-time panels.
#[derive(Debug, Clone)]
pub struct FrameStats {
    fps: MetricPanel,
    frame_ms: MetricPanel,
    frame_begin: Option<Instant>,
    window_start: Instant,
    window_frames: u32,
    mode: usize,
}

impl FrameStats {
    /// Creates an empty collector showing the FPS panel first.
    #[must_use]
    pub fn new() -> Self {
        Self {
            fps: MetricPanel::new("FPS"),
            frame_ms: MetricPanel::new("MS"),
            frame_begin: None,
            window_start: Instant::now(),
            window_frames: 0,
            mode: 0,
        }
    }

    /// Marks the start of a frame.
    pub fn begin(&mut self) {
        self.frame_begin = Some(Instant::now());
    }

    /// Marks the end of a frame, recording its duration and folding
    /// completed one-second windows into the FPS series.
    pub fn end(&mut self) {
        let now = Instant::now();

        if let Some(begin) = self.frame_begin.take() {
            self.frame_ms.push((now - begin).as_millis() as u64);
        }
        self.window_frames += 1;

        let window = now - self.window_start;
        if window >= Duration::from_secs(1) {
            let fps = f64::from(self.window_frames) / window.as_secs_f64();
            self.fps.push(fps.round() as u64);
            self.window_start = now;
            self.window_frames = 0;
        }
    }

    /// Cycles to the next metric panel.
    pub fn cycle(&mut self) {
        self.mode = (self.mode + 1) % 2;
    }

    /// Draws the active panel into `area`.
    pub fn render(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let panel = if self.mode == 0 { &self.fps } else { &self.frame_ms };
        let data: Vec<u64> = panel.values.iter().copied().collect();

        f.render_widget(
            Sparkline::default()
                .data(&data)
                .style(Style::default().fg(theme.accent).bg(theme.background))
                .block(
                    Block::default()
                        .title(panel.title())
                        .borders(Borders::ALL)
                        .border_style(Style::default().fg(theme.primary)),
                ),
            area,
        );
    }
}

impl Default for FrameStats {
    fn default() -> Self {
        Self::new()
    }
}
