//! Terminal setup and the event loop.

use crate::{App, TuiConfig, ui};
use anyhow::{Context, Result};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, SetTitle, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::Backend, backend::CrosstermBackend};
use std::io;
use std::time::Duration;
use tracing::{error, info, instrument};

/// Runs the game until the user quits, restoring the terminal afterwards.
#[instrument(skip(config), fields(title = %config.title()))]
pub fn run(config: &TuiConfig) -> Result<()> {
    info!("Starting Tic Tac Toe TUI");

    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    if let Err(e) = execute!(stdout, EnterAlternateScreen, EnableMouseCapture, SetTitle(config.title())) {
        let _ = disable_raw_mode();
        return Err(e).context("Failed to prepare terminal");
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let app = App::new(*config.show_hints());
    let res = run_app(&mut terminal, app, config.tick_rate());

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Event loop error");
    }
    info!("Terminal restored");

    res
}

/// Draw, wait up to `tick_rate` for one event, handle it, repeat.
pub fn run_app<B: Backend>(terminal: &mut Terminal<B>, mut app: App, tick_rate: Duration) -> Result<()>
where
    <B as Backend>::Error: Send + Sync + 'static,
{
    let mut targets = ui::ClickTargets::new();

    loop {
        terminal.draw(|f| ui::draw(f, &app, &mut targets))?;

        if !event::poll(tick_rate)? {
            continue;
        }

        match event::read()? {
            Event::Key(key) => app.handle_key(key),
            Event::Mouse(mouse) => app.handle_mouse(mouse, &targets),
            _ => {}
        }

        if app.should_quit() {
            return Ok(());
        }
    }
}
