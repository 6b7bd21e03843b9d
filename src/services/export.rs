use crate::domain::CharacterRecord;
use crate::error::Result;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;
use tracing::info;

pub struct ExportService {
    output_dir: PathBuf,
}

impl ExportService {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    fn target(&self, filename: &str) -> Result<PathBuf> {
        if !self.output_dir.exists() {
            std::fs::create_dir_all(&self.output_dir)?;
        }
        Ok(self.output_dir.join(filename))
    }

    /// Writes a 4-space indented JSON array. Non-ASCII text is kept as is.
    pub fn export_json(&self, characters: &[CharacterRecord], filename: &str) -> Result<PathBuf> {
        let path = self.target(filename)?;
        let mut writer = BufWriter::new(File::create(&path)?);

        let formatter = PrettyFormatter::with_indent(b"    ");
        let mut serializer = serde_json::Serializer::with_formatter(&mut writer, formatter);
        characters.serialize(&mut serializer)?;
        writer.flush()?;

        info!(
            "Exported {} records to {} successfully!",
            characters.len(),
            path.display()
        );
        Ok(path)
    }

    /// Header row is the record's field names; missing ratings are empty cells.
    pub fn export_csv(&self, characters: &[CharacterRecord], filename: &str) -> Result<PathBuf> {
        let path = self.target(filename)?;
        let mut writer = csv::Writer::from_path(&path)?;

        for character in characters {
            writer.serialize(character)?;
        }
        if characters.is_empty() {
            writer.write_record(CSV_HEADER)?;
        }
        writer.flush()?;

        info!(
            "Exported {} records to {} successfully!",
            characters.len(),
            path.display()
        );
        Ok(path)
    }
}

// Written explicitly only when there are no rows to derive it from.
const CSV_HEADER: [&str; 9] = [
    "name",
    "element",
    "path",
    "rarity",
    "role",
    "moc_rating",
    "pf_rating",
    "as_rating",
    "average_rating",
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Rarity, Ratings, Role};
    use tempfile::TempDir;

    fn characters() -> Vec<CharacterRecord> {
        vec![
            CharacterRecord::new(
                "Kafka".to_string(),
                "Lightning".to_string(),
                "Nihility".to_string(),
                Rarity::FiveStar,
                Role::Dps,
                Ratings {
                    moc: Some(0.5),
                    pf: Some(1.0),
                    as_: Some(1.5),
                },
            ),
            CharacterRecord::new(
                "Pela".to_string(),
                "Ice".to_string(),
                "Nihility".to_string(),
                Rarity::FourStar,
                Role::Amplifier,
                Ratings::default(),
            ),
        ]
    }

    #[test]
    fn json_round_trips_field_for_field() {
        let dir = TempDir::new().unwrap();
        let exporter = ExportService::new(dir.path().join("exports"));
        let source = characters();

        let path = exporter.export_json(&source, "characters.json").unwrap();
        let content = std::fs::read_to_string(path).unwrap();
        let read_back: Vec<CharacterRecord> = serde_json::from_str(&content).unwrap();

        assert_eq!(read_back, source);
        assert_eq!(read_back[0].average_rating, source[0].average_rating);
    }

    #[test]
    fn json_keeps_non_ascii_and_nulls() {
        let dir = TempDir::new().unwrap();
        let exporter = ExportService::new(dir.path());

        let path = exporter.export_json(&characters(), "characters.json").unwrap();
        let content = std::fs::read_to_string(path).unwrap();

        assert!(content.contains(r#""rarity": "5★""#));
        assert!(content.contains(r#""moc_rating": null"#));
        assert!(content.contains("\n    {\n        \"name\": \"Kafka\""));
    }

    #[test]
    fn csv_has_exact_header_and_empty_nulls() {
        let dir = TempDir::new().unwrap();
        let exporter = ExportService::new(dir.path());

        let path = exporter.export_csv(&characters(), "characters.csv").unwrap();
        let content = std::fs::read_to_string(path).unwrap();
        let lines: Vec<&str> = content.lines().collect();

        assert_eq!(lines[0], CSV_HEADER.join(","));
        assert_eq!(lines[1], "Kafka,Lightning,Nihility,5★,DPS,0.5,1.0,1.5,1.0");
        assert_eq!(lines[2], "Pela,Ice,Nihility,4★,Amplifier,,,,");
        assert_eq!(lines.len(), 3);
    }

    #[test]
    fn csv_without_records_still_has_header() {
        let dir = TempDir::new().unwrap();
        let exporter = ExportService::new(dir.path());

        let path = exporter.export_csv(&[], "empty.csv").unwrap();

        assert_eq!(
            std::fs::read_to_string(path).unwrap().trim_end(),
            CSV_HEADER.join(",")
        );
    }
}
