use crate::config::SiteProfile;
use crate::domain::CharacterRecord;
use crate::error::{CardError, Result, ScraperError};
use regex::Regex;
use scraper::Selector;

pub(crate) mod prydwen;

pub trait CardScraper {
    fn extract_card(&self, popover_html: &str) -> std::result::Result<CharacterRecord, CardError>;
}

pub struct Selectors {
    pub image: Selector,
    pub five_star: Selector,
    pub four_star: Selector,
    pub rating_class: Regex,
}

impl Selectors {
    pub fn new(site: &SiteProfile) -> Result<Self> {
        let parse = |selector: &str| {
            Selector::parse(selector).map_err(|e| ScraperError::Selector(e.to_string()))
        };

        let rating_class = Regex::new(&site.rating_class_pattern)
            .map_err(|e| ScraperError::Selector(e.to_string()))?;

        Ok(Self {
            image: parse(&site.image_selector)?,
            five_star: parse(&site.five_star_selector)?,
            four_star: parse(&site.four_star_selector)?,
            rating_class,
        })
    }
}
