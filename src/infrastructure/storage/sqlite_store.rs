use crate::domain::storage::{CharacterStorage, SaveSummary, StorageKeys};
use crate::domain::{CharacterRecord, Rarity, Ratings, Role};
use crate::error::Result;
use rusqlite::{params, Connection, ErrorCode, Row};
use std::path::PathBuf;
use tracing::{debug, info};

/// SQLite-backed store. Each operation opens its own connection.
#[derive(Clone)]
pub struct SqliteStore {
    db_path: PathBuf,
}

impl SqliteStore {
    pub fn new(db_path: impl Into<PathBuf>) -> Self {
        Self {
            db_path: db_path.into(),
        }
    }

    fn connect(&self) -> Result<Connection> {
        Ok(Connection::open(&self.db_path)?)
    }

    fn record_from_row(row: &Row<'_>) -> rusqlite::Result<CharacterRecord> {
        let rarity: String = row.get("rarity")?;
        let role: String = row.get("role")?;

        Ok(CharacterRecord::new(
            row.get("name")?,
            row.get("element")?,
            row.get("path")?,
            Rarity::from_label(&rarity),
            Role::from_label(&role),
            Ratings {
                moc: row.get("moc_rating")?,
                pf: row.get("pf_rating")?,
                as_: row.get("as_rating")?,
            },
        ))
    }
}

fn is_duplicate(error: &rusqlite::Error) -> bool {
    matches!(
        error,
        rusqlite::Error::SqliteFailure(e, _) if e.code == ErrorCode::ConstraintViolation
    )
}

impl CharacterStorage for SqliteStore {
    fn init_schema(&self) -> Result<()> {
        let conn = self.connect()?;
        conn.execute_batch(&format!(
            "CREATE TABLE IF NOT EXISTS {} (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL UNIQUE,
                rarity TEXT NOT NULL,
                element TEXT NOT NULL,
                path TEXT NOT NULL,
                role TEXT NOT NULL,
                moc_rating REAL,
                pf_rating REAL,
                as_rating REAL
            );",
            StorageKeys::CHARACTERS_TABLE
        ))?;

        info!("Schema ready in {:?}", self.db_path);
        Ok(())
    }

    fn save(&self, records: &[CharacterRecord]) -> Result<SaveSummary> {
        let mut conn = self.connect()?;
        let sql = format!(
            "INSERT INTO {} (name, rarity, element, path, role, moc_rating, pf_rating, as_rating)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
            StorageKeys::CHARACTERS_TABLE
        );
        let mut summary = SaveSummary::default();

        for record in records {
            let ratings = record.ratings();
            let tx = conn.transaction()?;
            debug!("{} -- {}", sql, record.name);

            let inserted = tx.execute(
                &sql,
                params![
                    record.name,
                    record.rarity.label(),
                    record.element,
                    record.path,
                    record.role.label(),
                    ratings.moc,
                    ratings.pf,
                    ratings.as_,
                ],
            );

            match inserted {
                Ok(_) => {
                    tx.commit()?;
                    summary.inserted += 1;
                }
                Err(e) if is_duplicate(&e) => {
                    tx.rollback()?;
                    info!("Character {} already exists, skipping...", record.name);
                    summary.skipped += 1;
                }
                Err(e) => return Err(e.into()),
            }
        }

        info!(
            "Saved {} new characters, skipped {} duplicates",
            summary.inserted, summary.skipped
        );
        Ok(summary)
    }

    fn get_all(&self) -> Result<Vec<CharacterRecord>> {
        let conn = self.connect()?;
        let mut stmt = conn.prepare(&format!(
            "SELECT name, rarity, element, path, role, moc_rating, pf_rating, as_rating
             FROM {} ORDER BY id",
            StorageKeys::CHARACTERS_TABLE
        ))?;

        let records = stmt
            .query_map([], Self::record_from_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        Ok(records)
    }
}
