use crate::error::Result;
use std::time::Duration;

pub(crate) mod chrome;

/// One live page. Cards are addressed by their position among the elements
/// matching the card selector.
pub trait PageDriver {
    fn navigate(&self, url: &str) -> Result<()>;
    /// Blocks until at least one card is present, returning how many there are.
    fn wait_for_cards(&self, card_selector: &str, timeout: Duration) -> Result<usize>;
    fn scroll_to_card(&self, card_selector: &str, index: usize) -> Result<()>;
    fn hover_card(&self, card_selector: &str, index: usize) -> Result<()>;
    fn popover_html(&self, popover_selector: &str) -> Result<String>;
}
