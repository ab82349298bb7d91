use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(name = "orpheus")]
#[command(version)]
#[command(about = "A TUI MPD client with ascii album art", long_about = None)]
pub struct Args {
    /// Path to config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// MPD server address (overrides config)
    #[arg(short, long)]
    pub address: Option<String>,

    /// Starting directory relative to the MPD music root (overrides config)
    #[arg(short, long)]
    pub music_directory: Option<String>,
}
