mod character;
pub(crate) mod storage;

pub use character::{CharacterRecord, Rarity, Ratings, Role};
