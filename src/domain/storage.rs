use super::CharacterRecord;
use crate::error::Result;

/// Outcome of one `save` pass.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SaveSummary {
    pub inserted: usize,
    pub skipped: usize,
}

pub trait CharacterStorage {
    fn init_schema(&self) -> Result<()>;
    /// Inserts each record independently. Names already stored are skipped, first write wins.
    fn save(&self, records: &[CharacterRecord]) -> Result<SaveSummary>;
    fn get_all(&self) -> Result<Vec<CharacterRecord>>;
}

pub struct StorageKeys;

impl StorageKeys {
    pub const CHARACTERS_TABLE: &'static str = "characters";
}
