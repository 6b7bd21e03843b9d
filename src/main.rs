use crate::config::Config;
use crate::error::{Result, ScraperError};
use crate::infrastructure::{ChromeDriver, SqliteStore};
use crate::services::character_service::CharacterService;
use std::str::FromStr;
use tracing::{info, Level};

mod config;
mod domain;
mod error;
mod infrastructure;
mod services;

fn main() -> Result<()> {
    let config = Config::new()?;

    let level = Level::from_str(&config.args.log_level)
        .map_err(|e| ScraperError::Config(e.to_string()))?;
    tracing_subscriber::fmt().with_max_level(level).init();

    config.ensure_directories()?;

    let store = SqliteStore::new(&config.args.db_path);
    let driver = ChromeDriver::launch(!config.args.headed)?;
    let report = CharacterService::new(config, store).process(driver)?;

    info!(
        "Scraping completed successfully! {} scraped, {} stored, exported to {} and {}",
        report.scraped,
        report.stored,
        report.json_path.display(),
        report.csv_path.display()
    );
    Ok(())
}
