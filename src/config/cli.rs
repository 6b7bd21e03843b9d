use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Args {
    /// Only scrape the first N character cards
    #[arg(long)]
    pub limit: Option<usize>,

    /// SQLite database file
    #[arg(long, env = "HSR_DB_PATH", default_value = "hsr.db")]
    pub db_path: PathBuf,

    /// Directory to write exports into
    #[arg(long, default_value = "data_exports")]
    pub output_dir: PathBuf,

    /// JSON export filename, relative to the output directory
    #[arg(long, default_value = "characters_export.json")]
    pub json_file: String,

    /// CSV export filename, relative to the output directory
    #[arg(long, default_value = "characters_export.csv")]
    pub csv_file: String,

    /// Optional JSON file overriding the target URL and page selectors
    #[arg(long)]
    pub site_config: Option<PathBuf>,

    /// Seconds to wait for the character cards to appear
    #[arg(long, default_value_t = 10)]
    pub wait_timeout_secs: u64,

    /// Pause in milliseconds after scrolling to and hovering each card
    #[arg(long, default_value_t = 1000)]
    pub settle_ms: u64,

    /// Show the browser window instead of running headless
    #[arg(long)]
    pub headed: bool,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}
