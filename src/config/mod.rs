use crate::config::cli::Args;
use crate::error::{Result, ScraperError};
use clap::Parser;
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;
use tracing::info;

pub(crate) mod cli;

/// Where to scrape and which markers identify the pieces of a character popover.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SiteProfile {
    pub url: String,
    pub card_selector: String,
    pub popover_selector: String,
    pub image_selector: String,
    pub five_star_selector: String,
    pub four_star_selector: String,
    pub rating_class_pattern: String,
}

impl Default for SiteProfile {
    fn default() -> Self {
        Self {
            url: "https://www.prydwen.gg/star-rail/characters/".to_string(),
            card_selector: ".avatar-card".to_string(),
            popover_selector: ".tippy-content".to_string(),
            image_selector: "img".to_string(),
            five_star_selector: ".rar-5".to_string(),
            four_star_selector: ".rar-4".to_string(),
            rating_class_pattern: r"rating-hsr-\d+".to_string(),
        }
    }
}

impl SiteProfile {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct ScrapeTiming {
    pub wait_timeout: Duration,
    pub settle_delay: Duration,
}

impl Default for ScrapeTiming {
    fn default() -> Self {
        Self {
            wait_timeout: Duration::from_secs(10),
            settle_delay: Duration::from_secs(1),
        }
    }
}

pub struct Config {
    pub args: Args,
    pub site: SiteProfile,
    pub timing: ScrapeTiming,
}

impl Config {
    pub fn new() -> Result<Self> {
        Self::from_args(Args::parse())
    }

    pub fn from_args(args: Args) -> Result<Self> {
        let site = match &args.site_config {
            Some(path) => SiteProfile::load(path)?,
            None => SiteProfile::default(),
        };

        if args.json_file.is_empty() || args.csv_file.is_empty() {
            return Err(ScraperError::Config(
                "export filenames must not be empty".to_string(),
            ));
        }

        let timing = ScrapeTiming {
            wait_timeout: Duration::from_secs(args.wait_timeout_secs),
            settle_delay: Duration::from_millis(args.settle_ms),
        };

        Ok(Self { args, site, timing })
    }

    pub fn ensure_directories(&self) -> Result<()> {
        if !self.args.output_dir.exists() {
            std::fs::create_dir_all(&self.args.output_dir)?;
        }

        info!("Output dir {:?} exists", self.args.output_dir);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_match_cli_contract() {
        let config = Config::from_args(Args::parse_from(["hsr-tiers"])).unwrap();

        assert_eq!(config.args.limit, None);
        assert_eq!(config.timing.wait_timeout, Duration::from_secs(10));
        assert_eq!(config.timing.settle_delay, Duration::from_secs(1));
        assert_eq!(config.site.card_selector, ".avatar-card");
        assert_eq!(config.args.json_file, "characters_export.json");
    }

    #[test]
    fn site_config_overrides_only_given_fields() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"url": "http://localhost:8080/characters"}}"#).unwrap();

        let site = SiteProfile::load(file.path()).unwrap();

        assert_eq!(site.url, "http://localhost:8080/characters");
        assert_eq!(site.popover_selector, ".tippy-content");
    }

    #[test]
    fn empty_export_name_is_rejected() {
        let args = Args::parse_from(["hsr-tiers", "--json-file", ""]);
        assert!(matches!(
            Config::from_args(args),
            Err(ScraperError::Config(_))
        ));
    }
}
