use crate::config::{ScrapeTiming, SiteProfile};
use crate::domain::CharacterRecord;
use crate::error::{Result, ScraperError};
use crate::infrastructure::{CardScraper, PageDriver, PrydwenCardScraper, Selectors};
use indicatif::{ProgressBar, ProgressStyle};
use std::thread::sleep;
use tracing::{info, warn};

pub struct ScrapingService<D: PageDriver> {
    driver: D,
    site: SiteProfile,
    timing: ScrapeTiming,
    extractor: PrydwenCardScraper,
}

impl<D: PageDriver> ScrapingService<D> {
    pub fn new(driver: D, site: SiteProfile, timing: ScrapeTiming) -> Result<Self> {
        let extractor = PrydwenCardScraper::new(Selectors::new(&site)?);
        info!("Created new Scraping service");

        Ok(Self {
            driver,
            site,
            timing,
            extractor,
        })
    }

    /// Scrapes up to `limit` cards in page order.
    ///
    /// Consumes the service, so the driver is dropped however this returns.
    /// A card that fails for any reason is logged and left out; only failing
    /// to locate any cards at all is an error.
    pub fn run(self, limit: Option<usize>) -> Result<Vec<CharacterRecord>> {
        self.driver.navigate(&self.site.url)?;

        let found = self
            .driver
            .wait_for_cards(&self.site.card_selector, self.timing.wait_timeout)?;
        let total = limit.map_or(found, |limit| limit.min(found));
        info!("Found {} character cards, processing {}", found, total);

        let pb = ProgressBar::new(total as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} {msg}")
                .map_err(|e| ScraperError::Other(e.to_string()))?,
        );

        let mut characters = Vec::with_capacity(total);
        for index in 0..total {
            match self.scrape_card(index) {
                Ok(character) => {
                    pb.set_message(character.name.clone());
                    characters.push(character);
                }
                Err(e) => warn!("Skipping card {}: {}", index, e),
            }
            pb.inc(1);
        }
        pb.finish_and_clear();

        info!(
            "Scraped {} characters, skipped {} cards",
            characters.len(),
            total - characters.len()
        );
        Ok(characters)
    }

    fn scrape_card(&self, index: usize) -> Result<CharacterRecord> {
        self.driver.scroll_to_card(&self.site.card_selector, index)?;
        sleep(self.timing.settle_delay);

        self.driver.hover_card(&self.site.card_selector, index)?;
        sleep(self.timing.settle_delay);

        let html = self.driver.popover_html(&self.site.popover_selector)?;
        Ok(self.extractor.extract_card(&html)?)
    }
}
