use super::PageDriver;
use crate::error::{Result, ScraperError};
use headless_chrome::{Browser, Element, LaunchOptions, Tab};
use std::fmt::Display;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info};

const SCROLL_TO_CENTER: &str = "function() { this.scrollIntoView({block: 'center'}); }";
const INNER_HTML: &str = "function() { return this.innerHTML; }";

fn browser_error(e: impl Display) -> ScraperError {
    ScraperError::Browser(e.to_string())
}

/// A Chrome process with a single tab. Dropping it shuts the browser down.
pub struct ChromeDriver {
    tab: Arc<Tab>,
    _browser: Browser,
}

impl ChromeDriver {
    pub fn launch(headless: bool) -> Result<Self> {
        let options = LaunchOptions::default_builder()
            .headless(headless)
            .window_size(Some((1920, 1080)))
            .build()
            .map_err(browser_error)?;

        let browser = Browser::new(options).map_err(browser_error)?;
        let tab = browser.new_tab().map_err(browser_error)?;
        info!("Launched Chrome (headless: {})", headless);

        Ok(Self {
            tab,
            _browser: browser,
        })
    }

    fn card(&self, card_selector: &str, index: usize) -> Result<Element<'_>> {
        self.tab
            .find_elements(card_selector)
            .map_err(browser_error)?
            .into_iter()
            .nth(index)
            .ok_or_else(|| {
                ScraperError::Browser(format!(
                    "card {} matching `{}` is no longer on the page",
                    index, card_selector
                ))
            })
    }
}

impl PageDriver for ChromeDriver {
    fn navigate(&self, url: &str) -> Result<()> {
        info!("Navigating to {}", url);
        self.tab.navigate_to(url).map_err(browser_error)?;
        self.tab.wait_until_navigated().map_err(browser_error)?;
        Ok(())
    }

    fn wait_for_cards(&self, card_selector: &str, timeout: Duration) -> Result<usize> {
        self.tab
            .wait_for_element_with_custom_timeout(card_selector, timeout)
            .map_err(|e| {
                debug!("Waiting for `{}` failed: {}", card_selector, e);
                ScraperError::CardsNotFound {
                    selector: card_selector.to_string(),
                    timeout,
                }
            })?;

        let cards = self.tab.find_elements(card_selector).map_err(browser_error)?;
        Ok(cards.len())
    }

    fn scroll_to_card(&self, card_selector: &str, index: usize) -> Result<()> {
        self.card(card_selector, index)?
            .call_js_fn(SCROLL_TO_CENTER, vec![], false)
            .map_err(browser_error)?;
        Ok(())
    }

    fn hover_card(&self, card_selector: &str, index: usize) -> Result<()> {
        self.card(card_selector, index)?
            .move_mouse_over()
            .map_err(browser_error)?;
        Ok(())
    }

    fn popover_html(&self, popover_selector: &str) -> Result<String> {
        let popover = self
            .tab
            .find_element(popover_selector)
            .map_err(browser_error)?;
        let remote = popover
            .call_js_fn(INNER_HTML, vec![], false)
            .map_err(browser_error)?;

        remote
            .value
            .as_ref()
            .and_then(|value| value.as_str())
            .map(str::to_string)
            .ok_or_else(|| {
                ScraperError::Browser(format!("`{}` returned no innerHTML", popover_selector))
            })
    }
}

impl Drop for ChromeDriver {
    fn drop(&mut self) {
        info!("Closing browser session");
    }
}
