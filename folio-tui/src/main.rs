//! Folio — a single-page portfolio in the terminal.
//!
//! Sections: navigation bar, hero, animated stats, technical expertise,
//! professional journey (expandable), footer.

use std::io::{self, stdout};
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, DisableMouseCapture, EnableMouseCapture, Event};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::Rect;
use tracing::info;

use folio_core::loader::{self, ProfileSource};

use folio_tui::app::{AppState, Clock};
use folio_tui::cli::Cli;
use folio_tui::{input, logging, ui};

fn main() -> Result<()> {
    let cli = Cli::parse();

    match logging::init(cli.log_file.clone(), cli.verbose) {
        Ok(path) => info!(log = %path.display(), "folio starting"),
        Err(e) => eprintln!("logging disabled: {e:#}"),
    }

    let mut settings = loader::load_settings(cli.config.as_deref()).context("loading settings")?;
    cli.apply_overrides(&mut settings);

    let source = ProfileSource::from_path(settings.profile.clone());
    let profile = source
        .load()
        .with_context(|| format!("loading profile from {source}"))?;
    info!(%source, name = %profile.name, "profile ready");

    if cli.print_profile {
        let text = toml::to_string_pretty(&profile).context("serializing profile")?;
        print!("{text}");
        return Ok(());
    }

    // Install a panic hook that restores the terminal before printing the panic.
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stderr(), LeaveAlternateScreen, DisableMouseCapture);
        default_hook(info);
    }));

    let frame_interval = settings.animation.frame_interval();
    let mut app = AppState::new(profile, source, settings);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let result = run_app(&mut terminal, &mut app, frame_interval);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    info!("folio exiting");
    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut AppState,
    frame_interval: Duration,
) -> Result<()> {
    let clock = Clock::start();
    loop {
        // 1. Measure the page against the current terminal size
        let size = terminal.size()?;
        let body = ui::body_area(Rect::new(0, 0, size.width, size.height));
        if body.width != app.viewport.width || body.height != app.viewport.height {
            app.set_viewport(body.width, body.height);
        }

        // 2. Deliver due frames
        app.tick(clock.now());

        // 3. Render
        terminal.draw(|f| ui::draw(f, app))?;

        // 4. Poll for input, one frame interval at most
        if event::poll(frame_interval)? {
            match event::read()? {
                Event::Key(key) => input::handle_key(app, key),
                Event::Mouse(mouse) => input::handle_mouse(app, mouse),
                _ => {}
            }
        }

        // 5. Check quit
        if !app.running {
            break;
        }
    }
    Ok(())
}
