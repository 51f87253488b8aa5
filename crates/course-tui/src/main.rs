use anyhow::{Context, Result};
use course_core::{browser::Browser, catalog::Catalog, settings::Settings, theme};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::{CrosstermBackend, Terminal};
use std::io::{stdout, Stdout};
use std::time::Duration;
mod logging;
mod ui;
use ui::app::App;

fn main() -> Result<()> {
    let settings = match Settings::new() {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Warning: Failed to load settings: {}. Using defaults.", e);
            Settings::default()
        }
    };
    match logging::init(&settings) {
        Ok(Some(path)) => tracing::debug!(path = %path.display(), "logging to file"),
        Ok(None) => {}
        Err(e) => eprintln!("Warning: Logging disabled: {:#}", e),
    }

    let catalog = match &settings.catalog_path {
        Some(path) => Catalog::load(path)
            .with_context(|| format!("failed to load catalog {}", path.display()))?,
        None => Catalog::builtin(),
    };
    if catalog.is_empty() {
        tracing::warn!("catalog has no courses");
    }
    let dark_mode = settings.theme.resolve(theme::system_prefers_dark());
    tracing::info!(
        courses = catalog.len(),
        dark_mode,
        preference = %settings.theme,
        "starting course list"
    );

    let mut terminal = init_terminal()?;
    let mut app = App::new(
        Browser::new(catalog, dark_mode),
        Duration::from_millis(settings.tick_rate_ms),
    );

    let result = app.run(&mut terminal);

    restore_terminal(&mut terminal)?;
    match &result {
        Ok(()) => tracing::info!(
            variant = %app.theme().variant(),
            query = app.browser().query(),
            "shutdown complete"
        ),
        Err(e) => tracing::error!(error = %e, "event loop failed"),
    }

    result
}

fn init_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}
