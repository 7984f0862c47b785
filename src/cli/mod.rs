//! Command-line interface for Mural.

use std::path::PathBuf;

use clap::Parser;

/// Fetch a random wallpaper and set it as the desktop background.
#[derive(Parser, Debug)]
#[command(name = "mural", version, about)]
pub struct Cli {
    /// Comma-separated wallpaper sources (360, bing)
    #[arg(short, long, default_value = "360,bing")]
    pub source: String,

    /// Keep the downloaded image in the cache directory
    #[arg(long, default_value_t = true, action = clap::ArgAction::Set)]
    pub cache: bool,

    /// Empty the cache directory before running
    #[arg(long)]
    pub clear: bool,

    /// Cache directory for downloaded wallpapers
    #[arg(long, default_value = "img")]
    pub dir: PathBuf,
}
