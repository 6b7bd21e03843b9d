pub(crate) mod character_service;
pub(crate) mod export;
pub(crate) mod rating;
pub(crate) mod scraping;
