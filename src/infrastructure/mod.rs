mod browser;
mod scrapers;
mod storage;

pub use browser::{chrome::ChromeDriver, PageDriver};
pub use scrapers::{prydwen::PrydwenCardScraper, CardScraper, Selectors};
pub use storage::sqlite_store::SqliteStore;
