//! User Details TUI - a modal form for collecting user details
//!
//! A Ratatui-based TUI with an "Open Form" trigger that shows a dialog for
//! username, email, phone number and date of birth, validated on submit.

mod app;
mod config;
mod logging;
mod platform;
mod state;
mod ui;
mod validation;

use anyhow::Result;
use app::App;
use config::TuiConfig;
use crossterm::{
    cursor::Show,
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use logging::DEFAULT_LOG_FILTER;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Duration;

/// Raw mode, alternate screen and mouse capture, released on drop.
///
/// Dropping also runs while unwinding, so a failed setup step or a panic in
/// the event loop still hands the user back a usable shell.
struct TerminalSession {
    mouse_capture: bool,
}

impl TerminalSession {
    fn enter(mouse_capture: bool) -> Result<Self> {
        enable_raw_mode()?;
        let session = Self { mouse_capture };
        execute!(io::stdout(), EnterAlternateScreen)?;
        if mouse_capture {
            execute!(io::stdout(), EnableMouseCapture)?;
        }
        Ok(session)
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let mut stdout = io::stdout();
        if self.mouse_capture {
            let _ = execute!(stdout, DisableMouseCapture);
        }
        let _ = execute!(stdout, LeaveAlternateScreen, Show);
        let _ = disable_raw_mode();
    }
}

fn main() -> Result<()> {
    // Subscriber goes up before the config fallback so its warning is kept
    let loaded = TuiConfig::load();
    logging::init(loaded.as_ref().map_or(DEFAULT_LOG_FILTER, TuiConfig::log_filter));
    let config = TuiConfig::or_default(loaded);

    let result = run(config);

    // Handle any errors (the terminal is already restored here)
    if let Err(err) = result {
        eprintln!("Error: {err:?}");
        std::process::exit(1);
    }

    Ok(())
}

fn run(config: TuiConfig) -> Result<()> {
    let _session = TerminalSession::enter(config.mouse_capture())?;
    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;

    let mut app = App::new(config);
    run_app(&mut terminal, &mut app)
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    loop {
        // Keep terminal size current for mouse hit-testing
        let term_size = terminal.size()?;
        app.terminal_size = Some((term_size.height, term_size.width));

        terminal.draw(|frame| ui::draw(frame, app))?;

        if event::poll(Duration::from_millis(100))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    app.handle_key(key)?;
                }
                Event::Mouse(mouse) => {
                    app.handle_mouse(mouse)?;
                }
                Event::Resize(_width, _height) => {
                    // Layout is recomputed from the new size on the next draw
                }
                _ => {}
            }
        }

        if app.should_quit() {
            return Ok(());
        }
    }
}
