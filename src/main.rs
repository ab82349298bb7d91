// Module declarations
mod app;
mod ascii;
mod config;
mod song;
mod ui;

use app::cli::Args;
use app::{
    App,
    main_loop::AppMainLoop,
    terminal::{init_terminal, restore_terminal},
};
use clap::Parser;
use config::Config;

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    // Parse command line arguments
    let args = Args::parse();

    // Load config first for logger initialization
    let mut config = Config::load(args.config.clone())?;

    if let Some(ref addr) = args.address {
        config.mpd.address = addr.clone();
    }
    if let Some(ref dir) = args.music_directory {
        config.library.starting_directory = dir.clone();
    }

    // Initialize logger before anything else that logs
    if config.logging.enabled {
        app::logging::ensure_log_directory()?;
        app::logging::init_logger(&config.logging)?;
        app::logging::log_startup_info();
    }

    // Save logging state before app takes ownership of the config
    let logging_enabled = config.logging.enabled;

    // Initialize terminal
    let terminal = init_terminal()?;

    // Run application; startup failures (config, connection) bubble up here
    // and this is the only place that decides process exit
    let result = App::new(config).run(terminal).await;

    // Log shutdown before restoring terminal
    if logging_enabled {
        app::logging::log_shutdown_info();
    }

    // Restore terminal
    restore_terminal()?;
    result
}
