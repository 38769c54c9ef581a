use anyhow::Result;
use clap::Parser;

use tidepool::app::App;
use tidepool::cli::Cli;
use tidepool::config::Config;
use tidepool::styles::{init_theme, ThemeType};
use tidepool::tui::install_panic_hook;
use tidepool::utils::{get_cache_dir, get_config_path, get_log_path};

fn main() -> Result<()> {
    let cli = Cli::parse();
    if cli.command.is_some() {
        return cli.execute();
    }

    // Restore the terminal before any panic output is printed
    install_panic_hook();

    let log_dir = get_cache_dir();
    std::fs::create_dir_all(&log_dir)?;
    let log_file = get_log_path();

    // File-backed tracing, tunable through TIDEPOOL_LOG
    let filter = tracing_subscriber::EnvFilter::try_from_env("TIDEPOOL_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let file_appender = tracing_appender::rolling::never(&log_dir, "tidepool.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(non_blocking)
        .with_ansi(false) // plain text in the file
        .init();

    // Print log location before the TUI takes the screen
    eprintln!("Logging to {}", log_file.display());

    let mut config = Config::load_or_create(&get_config_path())?;
    if cli.no_animations {
        config.animations = false;
    }

    let no_color_env = std::env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty());
    let theme_type = if cli.no_colors || no_color_env {
        ThemeType::NoColor
    } else {
        config.theme.parse().unwrap_or(ThemeType::Dark)
    };
    init_theme(theme_type);

    let mut app = App::new(config)?;
    let result = app.run();

    // Flush buffered log lines before exiting
    drop(guard);

    result
}
