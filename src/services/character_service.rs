use crate::config::Config;
use crate::domain::storage::CharacterStorage;
use crate::domain::CharacterRecord;
use crate::error::Result;
use crate::infrastructure::PageDriver;
use crate::services::{export::ExportService, scraping::ScrapingService};
use std::path::PathBuf;
use tracing::info;

pub struct RunReport {
    pub scraped: usize,
    pub stored: usize,
    pub json_path: PathBuf,
    pub csv_path: PathBuf,
}

pub struct CharacterService<S: CharacterStorage> {
    config: Config,
    store: S,
    export: ExportService,
}

impl<S: CharacterStorage> CharacterService<S> {
    pub fn new(config: Config, store: S) -> Self {
        let export = ExportService::new(config.args.output_dir.clone());
        Self {
            config,
            store,
            export,
        }
    }

    /// Init schema, scrape with `driver`, store new characters, export everything stored.
    pub fn process<D: PageDriver>(&self, driver: D) -> Result<RunReport> {
        info!("Starting character scraping pipeline");

        self.store.init_schema()?;

        let characters = self.scrape(driver)?;
        info!("Scraping completed: {} characters", characters.len());

        let summary = self.store.save(&characters)?;
        info!(
            "Storage completed: {} inserted, {} already present",
            summary.inserted, summary.skipped
        );

        let stored = self.store.get_all()?;
        let json_path = self.export.export_json(&stored, &self.config.args.json_file)?;
        let csv_path = self.export.export_csv(&stored, &self.config.args.csv_file)?;
        info!("Export completed: {} characters", stored.len());

        Ok(RunReport {
            scraped: characters.len(),
            stored: stored.len(),
            json_path,
            csv_path,
        })
    }

    fn scrape<D: PageDriver>(&self, driver: D) -> Result<Vec<CharacterRecord>> {
        ScrapingService::new(driver, self.config.site.clone(), self.config.timing)?
            .run(self.config.args.limit)
    }
}
