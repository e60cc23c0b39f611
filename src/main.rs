//! # Valentine CLI Entry Point
//!
//! This is the main entry point for the valentine TUI.
//!
//! ## Overview
//!
//! A single page asks "Would you be my valentine?". "Yes" opens a love
//! message with a photo. "No" is harder: it disappears whenever the mouse
//! pointer comes close to it.
//!
//! ## Usage
//!
//! ```bash
//! # Default photo (./valentines-photo.jpg) and theme
//! valentine
//!
//! # Another photo and a dark theme
//! valentine --image ~/Pictures/us.jpg --theme "Rose Night"
//!
//! # Write debug logs somewhere that is not the screen
//! valentine --log-file /tmp/valentine.log --log-level debug
//! ```
//!
//! ## Key Bindings
//!
//! ### Page
//! - `y` - Say yes
//! - `Tab` / `←` / `→` - Move focus between the buttons
//! - `Enter` / `Space` - Press the focused button
//! - `q` / `Esc` / `Ctrl+C` - Quit
//!
//! ### Modal
//! - `Enter` / `Space` / `Esc` / `q` - Close
//! - Click outside the dialog - Close

use valentine::ui;
use valentine::ui::capture::PointerCapture;
use valentine::ui::config::Config;
use valentine::ui::photo::Photo;
use valentine::ui::theme::Theme;
use valentine::ui::App;

use anyhow::{anyhow, bail, Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, DisableMouseCapture, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, layout::Rect, Terminal};
use std::fs::OpenOptions;
use std::io;
use std::panic;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

/// Trait for reading terminal events (allows dependency injection for testing)
trait EventReader {
    fn read_event(&mut self, timeout: Duration) -> Result<Option<Event>>;
}

/// Production event reader that uses crossterm's event polling + read
struct CrosstermEventReader;

impl EventReader for CrosstermEventReader {
    fn read_event(&mut self, timeout: Duration) -> Result<Option<Event>> {
        if event::poll(timeout).context("Failed to poll for events")? {
            Ok(Some(
                event::read().context("Failed to read terminal event")?,
            ))
        } else {
            Ok(None)
        }
    }
}

/// Valentine - ask the question, dodge the wrong answer
#[derive(Parser, Debug)]
#[command(name = "valentine")]
#[command(author = "Luckystrike561")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Would you be my valentine? (the No button runs away)", long_about = None)]
struct Args {
    /// Config file to read instead of the default location
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Photo shown after saying yes
    #[arg(short, long, value_name = "FILE")]
    image: Option<PathBuf>,

    /// Color theme (see --list-themes)
    #[arg(short, long, value_name = "NAME")]
    theme: Option<String>,

    /// How close (in virtual pixels) the pointer may get before No hides
    #[arg(long, value_name = "PX")]
    threshold: Option<f64>,

    /// Print the built-in themes and exit
    #[arg(long)]
    list_themes: bool,

    /// Write logs to this file (the terminal is busy drawing the page)
    #[arg(long, value_name = "FILE")]
    log_file: Option<PathBuf>,

    /// Log filter, e.g. "info" or "valentine=trace"
    #[arg(long, value_name = "LEVEL", default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Parse command-line arguments
    let args = Args::parse();

    // Set up panic hook to ensure terminal is restored on panic
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        // Try to restore terminal state
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);

        // Call the original panic hook
        original_hook(panic_info);
    }));

    // Run the application and ensure cleanup happens
    let result = run_application(args).await;

    // Restore panic hook
    let _ = panic::take_hook();

    result
}

/// Install a file logger when `--log-file` is given. Without it, tracing
/// events go nowhere.
fn init_logging(log_file: Option<&Path>, level: &str) -> Result<()> {
    let Some(path) = log_file else {
        return Ok(());
    };

    let filter =
        EnvFilter::try_new(level).with_context(|| format!("Invalid log level: {level}"))?;
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open log file: {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_target(false)
        .with_writer(Mutex::new(file))
        .try_init()
        .map_err(|e| anyhow!("Failed to install logger: {e}"))?;

    Ok(())
}

/// Read the config file and apply command-line overrides.
fn resolve_config(args: &Args) -> Result<Config> {
    let mut config = match &args.config {
        Some(path) => {
            if !path.exists() {
                bail!("Config file not found: {}", path.display());
            }
            Config::load_from(path)?
        }
        None => Config::load()?,
    };

    if let Some(image) = &args.image {
        config.image_path = image.clone();
    }
    if let Some(theme) = &args.theme {
        config.theme = theme.clone();
    }
    if let Some(threshold) = args.threshold {
        config.threshold = threshold;
    }

    config.validate()?;
    Ok(config)
}

async fn run_application(args: Args) -> Result<()> {
    if args.list_themes {
        for theme in Theme::all() {
            println!("{}", theme.name);
        }
        return Ok(());
    }

    init_logging(args.log_file.as_deref(), &args.log_level)?;

    let config = resolve_config(&args)?;
    let theme = Theme::by_name(&config.theme)
        .with_context(|| format!("Unknown theme: {} (see --list-themes)", config.theme))?;

    // A missing photo is not an error: the modal shows a heart instead
    let photo = Photo::load(&config.image_path);

    tracing::info!(
        theme = theme.name,
        threshold = config.threshold,
        image = %config.image_path.display(),
        "starting valentine"
    );

    let mut app = App::new(theme.clone(), photo)
        .with_avoidance(config.avoidance())
        .with_message(config.message.clone());

    // Setup terminal
    enable_raw_mode().context("Failed to enable raw mode for terminal")?;

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to setup terminal")?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

    // Run the app and ensure cleanup happens even on error
    let run_result = PointerCapture::acquire(io::stdout()).and_then(|mut capture| {
        let mut event_reader = CrosstermEventReader;
        let result = run_app(&mut terminal, &mut app, &mut event_reader);
        result.and(capture.release())
    });

    // Restore terminal (always runs, even if run_app failed)
    let cleanup_result = cleanup_terminal(&mut terminal);

    tracing::info!("valentine closed");

    // Return the first error that occurred, or Ok if both succeeded
    run_result?;
    cleanup_result?;

    Ok(())
}

/// Clean up terminal state
fn cleanup_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode().context("Failed to disable raw mode")?;

    execute!(terminal.backend_mut(), LeaveAlternateScreen).context("Failed to restore terminal")?;

    terminal.show_cursor().context("Failed to show cursor")?;

    Ok(())
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    event_reader: &mut dyn EventReader,
) -> Result<()> {
    loop {
        terminal
            .draw(|f| ui::render(f, app))
            .context("Failed to draw terminal UI")?;

        let Some(event) = event_reader.read_event(Duration::from_millis(100))? else {
            continue;
        };

        // Measure against the terminal as it is now, not as last drawn
        let size = terminal.size().context("Failed to read terminal size")?;
        app.handle_event(event, Rect::new(0, 0, size.width, size.height));

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
