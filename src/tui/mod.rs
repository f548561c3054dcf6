//! Terminal rendering engine and overlay widgets.
//!
//! This module contains the concrete [`crate::render::UiSurface`]
//! implementation for terminals plus the loading and frame-stats overlays,
//! all drawn with Ratatui. Everything here sits behind the `tui` cargo
//! feature; the keyboard core does not depend on it.

pub mod keyboard;
pub mod loading_bar;
pub mod stats;
pub mod theme;

pub use keyboard::TerminalSurface;
pub use loading_bar::LoadingBar;
pub use stats::FrameStats;
pub use theme::Theme;

use anyhow::{Context, Result};
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;

/// Initialize terminal for TUI with mouse capture enabled.
pub fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .context("Failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend).context("Failed to create terminal")?;
    Ok(terminal)
}

/// Restore terminal to normal state.
pub fn restore_terminal(mut terminal: Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )
    .context("Failed to leave alternate screen")?;
    terminal.show_cursor().context("Failed to show cursor")?;
    Ok(())
}
