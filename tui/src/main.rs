//! folio entry point
//!
//! Launches the portfolio in the terminal.
//!
//! Usage:
//!   folio
//!
//! Configuration is read from `folio.toml` under the user config dir;
//! the theme choice persists in `settings.toml` next to it. Logging
//! follows `RUST_LOG` (stderr is the alternate screen's, so pipe it to
//! a file when debugging).

use std::io;
use std::panic;

use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use folio_core::{Config, FileStore, MemoryStore, Settings, SettingsStore};
use folio_tui::App;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    use std::io::IsTerminal;

    if !io::stdin().is_terminal() || !io::stdout().is_terminal() {
        eprintln!("folio needs a terminal (TTY) to render into.");
        eprintln!();
        eprintln!("Run it from an interactive shell, not a pipe or CI job.");
        std::process::exit(1);
    }

    let config = Config::load()?;

    // Theme persistence; fall back to a session-only store when the
    // platform offers no config dir
    let store: Box<dyn SettingsStore> = match folio_core::config::settings_path() {
        Some(path) => Box::new(FileStore::open(path)?),
        None => Box::new(MemoryStore::new()),
    };
    let settings = Settings::new(store);

    // Restore the terminal before any panic output
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
        original_hook(panic_info);
    }));

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let result = run_app(&mut terminal, config, settings).await;

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    terminal.show_cursor()?;

    result
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    config: Config,
    settings: Settings,
) -> anyhow::Result<()> {
    let mut app = App::new(config, settings)?;
    app.run(terminal).await
}
