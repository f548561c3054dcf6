//! Slateboard - on-surface virtual keyboard demo host.
//!
//! Builds a keyboard over the terminal engine, binds it to a text field,
//! and routes mouse clicks through hit testing into key activations. The
//! physical keyboard is only used for host controls (quit, overlays);
//! all text entry happens through the virtual keys.

use std::cell::RefCell;
use std::io;
use std::rc::Rc;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame, Terminal,
};
use tracing_subscriber::EnvFilter;

use slateboard::config::Config;
use slateboard::tui::{
    restore_terminal, setup_terminal, FrameStats, LoadingBar, TerminalSurface, Theme,
};
use slateboard::{FieldBinding, Language, VirtualKeyboard};

/// Slateboard - on-surface virtual keyboard demo
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Two-letter keyboard language code (e.g. EN, DE)
    #[arg(short, long, value_name = "CODE")]
    language: Option<String>,

    /// Panel width in panel-local units
    #[arg(long, value_name = "UNITS")]
    width: Option<f32>,

    /// Show the frame-stats overlay on startup
    #[arg(long)]
    stats: bool,
}

struct App {
    keyboard: VirtualKeyboard<TerminalSurface>,
    loading: LoadingBar,
    stats: FrameStats,
    show_stats: bool,
    theme: Theme,
    submitted: Rc<RefCell<Vec<String>>>,
    keyboard_area: Rect,
    should_quit: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let config = Config::load().context("Failed to load configuration")?;

    let language = Language::parse(cli.language.as_deref().unwrap_or(&config.ui.language));
    let panel_width = cli.width.unwrap_or(config.panel.width);

    let surface = TerminalSurface::new(panel_width);
    let mut keyboard = VirtualKeyboard::new(panel_width, surface, language);

    let submitted = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&submitted);
    keyboard.bind(
        FieldBinding::new("input", "")
            .with_on_enter(move |text| sink.borrow_mut().push(text.to_string())),
    );
    keyboard.set_visible(true);

    let mut app = App {
        keyboard,
        loading: LoadingBar::new(),
        stats: FrameStats::new(),
        show_stats: cli.stats || config.ui.show_stats_on_startup,
        theme: Theme::from_mode(config.ui.theme_mode),
        submitted,
        keyboard_area: Rect::default(),
        should_quit: false,
    };

    let mut terminal = setup_terminal()?;
    let result = run(&mut app, &mut terminal);
    restore_terminal(terminal)?;
    result
}

/// Main event loop.
fn run(app: &mut App, terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    loop {
        app.stats.begin();
        terminal.draw(|f| render(f, app))?;
        app.stats.end();

        // Simulated startup work drives the loading overlay once
        if app.loading.visible() {
            let progress = app.loading.progress() + 0.05;
            app.loading.set_progress(progress);
            if progress >= 1.0 {
                app.loading.set_visible(false);
            }
        }

        if event::poll(Duration::from_millis(33))? {
            match event::read()? {
                Event::Key(key) => handle_key(app, key),
                Event::Mouse(mouse) => handle_mouse(app, &mouse),
                _ => {}
            }
        }

        // One tick per frame; rebuilds the surface only after layout changes
        app.keyboard.update();

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

fn render(f: &mut Frame, app: &mut App) {
    f.render_widget(
        Block::default().style(Style::default().bg(app.theme.background)),
        f.area(),
    );

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),  // Bound text field
            Constraint::Min(3),     // Submitted history
            Constraint::Length(14), // Keyboard panel
            Constraint::Length(1),  // Help line
        ])
        .split(f.area());

    render_field(f, chunks[0], app);
    render_history(f, chunks[1], app);

    app.keyboard_area = chunks[2];
    app.keyboard.surface().render(f, chunks[2], &app.theme);

    render_help(f, chunks[3], app);

    if app.show_stats {
        let area = f.area();
        let stats_area = Rect {
            x: area.width.saturating_sub(26),
            y: 0,
            width: 26u16.min(area.width),
            height: 4u16.min(area.height),
        };
        app.stats.render(f, stats_area, &app.theme);
    }

    if app.loading.visible() {
        app.loading.render(f, f.area(), &app.theme);
    }
}

fn render_field(f: &mut Frame, area: Rect, app: &App) {
    let state = app.keyboard.state();
    let title = format!(" input [{} {}] ", state.language, state.variant);
    let text = app.keyboard.bound_text().unwrap_or_default().to_string();

    let field = Paragraph::new(Line::from(vec![
        Span::styled(text, Style::default().fg(app.theme.text)),
        Span::styled(
            "_",
            Style::default()
                .fg(app.theme.accent)
                .add_modifier(Modifier::SLOW_BLINK),
        ),
    ]))
    .block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(app.theme.primary)),
    );
    f.render_widget(field, area);
}

fn render_history(f: &mut Frame, area: Rect, app: &App) {
    let submitted = app.submitted.borrow();
    let visible_rows = area.height.saturating_sub(2) as usize;
    let lines: Vec<Line> = submitted
        .iter()
        .rev()
        .take(visible_rows)
        .rev()
        .map(|entry| {
            Line::from(Span::styled(
                entry.clone(),
                Style::default().fg(app.theme.text),
            ))
        })
        .collect();

    let history = Paragraph::new(lines).block(
        Block::default()
            .title(" submitted ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(app.theme.text_muted)),
    );
    f.render_widget(history, area);
}

fn render_help(f: &mut Frame, area: Rect, app: &App) {
    let help = Paragraph::new(Line::from(Span::styled(
        " click keys with the mouse | Esc quit | F1 stats | F2 keyboard | F3 stats panel",
        Style::default().fg(app.theme.text_muted),
    )));
    f.render_widget(help, area);
}

fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }
    match key.code {
        KeyCode::Esc => app.should_quit = true,
        KeyCode::F(1) => app.show_stats = !app.show_stats,
        KeyCode::F(2) => {
            let visible = app.keyboard.visible();
            app.keyboard.set_visible(!visible);
        }
        KeyCode::F(3) => app.stats.cycle(),
        _ => {}
    }
}

fn handle_mouse(app: &mut App, mouse: &MouseEvent) {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            let hit = app
                .keyboard
                .surface()
                .hit_test(app.keyboard_area, mouse.column, mouse.row);
            if let Some(index) = hit {
                if let Err(error) = app.keyboard.activate(index) {
                    tracing::warn!(%error, index, "activation rejected");
                }
            }
        }
        MouseEventKind::Moved => {
            let hovered = app
                .keyboard
                .surface()
                .hit_test(app.keyboard_area, mouse.column, mouse.row);
            app.keyboard.surface_mut().set_hovered(hovered);
        }
        _ => {}
    }
}
