use anyhow::{Context, Result};
use catalog_admin::app::App;
use catalog_admin::cli::Cli;
use catalog_admin::config::Config;
use catalog_admin::styles::{init_theme, ThemeType};
use catalog_admin::utils::{get_config_path, get_log_dir};
use catalog_admin::LOG_FILE_NAME;
use clap::Parser;
use std::process::ExitCode;
use tracing_appender::non_blocking::WorkerGuard;

/// Set up panic hook to restore terminal state on panic
fn setup_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = crossterm::terminal::disable_raw_mode();
        let _ = crossterm::execute!(std::io::stdout(), crossterm::terminal::LeaveAlternateScreen);
        original_hook(panic_info);
    }));
}

/// Log to a file; the terminal belongs to the TUI.
fn init_logging() -> Result<WorkerGuard> {
    let log_dir = get_log_dir();
    std::fs::create_dir_all(&log_dir)
        .with_context(|| format!("Failed to create log directory: {:?}", log_dir))?;

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let file_appender = tracing_appender::rolling::never(&log_dir, LOG_FILE_NAME);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(non_blocking)
        .with_ansi(false)
        .init();

    Ok(guard)
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    let guard = init_logging()?;

    let api_base_override = cli.api_base.clone();
    let no_colors = cli.no_colors;
    if let Some(code) = cli.execute()? {
        drop(guard);
        return Ok(code);
    }

    setup_panic_hook();

    let config_path = get_config_path();
    let config = Config::load_or_create(&config_path).context("Failed to load configuration")?;
    init_theme(if no_colors {
        ThemeType::NoColor
    } else {
        config.theme_type()
    });
    let api_base = config.effective_api_base(api_base_override.as_deref());

    let log_file = get_log_dir().join(LOG_FILE_NAME);
    eprintln!("Logs are being written to: {:?}", log_file);

    let mut app = App::new(config, config_path, &api_base)?;
    let result = app.run();

    drop(guard);
    result.map(|()| ExitCode::SUCCESS)
}
