use std::fs::File;
use std::io::stdout;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::{Duration, Instant};

use clap::Parser;
use color_eyre::Result;
use crossterm::event::{
    self, DisableFocusChange, DisableMouseCapture, EnableFocusChange, EnableMouseCapture,
};
use crossterm::execute;
use ratatui::DefaultTerminal;
use ratatui::layout::Rect;

use stocknews::App;
use stocknews::api::HttpApi;
use stocknews::config::load_config;
use stocknews::worker::spawn_worker;

/// Longest wait between polls, so service replies show up promptly
const MAX_POLL: Duration = Duration::from_millis(50);
const LOG_ENV: &str = "STOCKNEWS_LOG";
const LOG_FILE: &str = "stocknews.log";

/// Stock news sentiment dashboard
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Base URL of the sentiment services (overrides the config file)
    #[arg(long, value_name = "URL")]
    api_url: Option<String>,

    /// Path to the config file (default: ~/.config/stocknews/config.toml)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Disable the pointer glow
    #[arg(long)]
    no_highlight: bool,
}

fn main() -> Result<()> {
    // Install color-eyre panic hook for better error messages
    color_eyre::install()?;

    let cli = Cli::parse();
    init_logging();

    let mut config = load_config(cli.config.as_deref());
    if let Some(url) = cli.api_url {
        config.api.base_url = url;
    }
    if cli.no_highlight {
        config.highlight.enabled = false;
    }

    let api = HttpApi::from_config(&config.api)?;
    log::debug!("Using sentiment services at {}", api.base_url());
    let service = spawn_worker(Arc::new(api));

    // Initialize terminal (handles raw mode, alternate screen, etc.)
    let mut terminal = ratatui::init();
    execute!(stdout(), EnableMouseCapture, EnableFocusChange)?;

    let size = terminal.size()?;
    let mut app = App::new(
        config,
        Some(service),
        Instant::now(),
        Rect::new(0, 0, size.width, size.height),
    );

    let result = run(&mut terminal, &mut app);

    app.teardown();
    if let Err(e) = execute!(stdout(), DisableMouseCapture, DisableFocusChange) {
        log::warn!("Failed to release mouse capture: {}", e);
    }
    ratatui::restore();

    result
}

fn run(terminal: &mut DefaultTerminal, app: &mut App) -> Result<()> {
    let mut dirty = true;

    loop {
        if dirty {
            terminal.draw(|frame| app.render(frame))?;
            dirty = false;
        }

        if app.should_quit() {
            break;
        }

        let now = Instant::now();
        let timeout = app
            .next_deadline()
            .map_or(MAX_POLL, |deadline| deadline.saturating_duration_since(now))
            .min(MAX_POLL);

        if event::poll(timeout)? {
            app.handle_event(event::read()?, Instant::now());
            dirty = true;
        }

        dirty |= app.on_tick(Instant::now());
    }

    Ok(())
}

/// Log to a file in the temp dir when `STOCKNEWS_LOG` is set
///
/// Anything on stderr would tear the alternate screen, so logging is off
/// otherwise.
fn init_logging() {
    if std::env::var_os(LOG_ENV).is_none() {
        return;
    }

    let path = std::env::temp_dir().join(LOG_FILE);
    let file = match File::create(&path) {
        Ok(file) => file,
        Err(e) => {
            eprintln!("Cannot open log file {}: {}", path.display(), e);
            return;
        }
    };

    env_logger::Builder::from_env(env_logger::Env::new().filter(LOG_ENV))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .format_timestamp_millis()
        .init();
}
