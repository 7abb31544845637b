// Test fixtures for integration testing

use agentland::core::types::Record;
use std::path::Path;
use tempfile::NamedTempFile;

/// Small regional record set used across the search tests
#[allow(dead_code)] // Used in integration tests
pub fn saarland_records() -> Vec<Record> {
    vec![
        Record::new("1")
            .with("title", "Saarschleife Wandern")
            .with("category", "natur")
            .with("location", "Mettlach Orscholz")
            .with("tags", vec!["natur", "outdoor"]),
        Record::new("2")
            .with("title", "KI Förderung Business")
            .with("category", "business")
            .with("location", "Saarbrücken Innenstadt")
            .with("tags", vec!["business"]),
        Record::new("3")
            .with("title", "Völklinger Hütte Führung")
            .with("category", "kultur")
            .with("location", "Völklingen")
            .with("description", "Weltkulturerbe mit Führung durch die Hütte")
            .with("tags", vec!["kultur", "outdoor"]),
        Record::new("4")
            .with("title", "Bostalsee Rundweg")
            .with("category", "natur")
            .with("location", "Nohfelden Bosen")
            .with("description", "Wandern und Baden am größten Freizeitsee"),
        Record::new("5")
            .with("title", "Gründerstammtisch Saarbrücken")
            .with("category", "business")
            .with("location", "Saarbrücken Burbach")
            .with("tags", vec!["startup", "business"]),
    ]
}

/// A JSON records file on disk, removed when dropped
#[allow(dead_code)] // Used in integration tests
pub struct RecordsFile {
    pub file: NamedTempFile,
}

impl RecordsFile {
    /// Write `json` to a fresh temp file
    #[allow(dead_code)] // Used in integration tests
    pub fn with_json(json: &str) -> Self {
        let file = NamedTempFile::new().expect("Failed to create temp file");
        std::fs::write(file.path(), json).expect("Failed to write records file");
        Self { file }
    }

    /// The regional record set in raw portal shape (numeric ids, nulls)
    #[allow(dead_code)] // Used in integration tests
    pub fn saarland() -> Self {
        Self::with_json(
            r#"[
                {"id": 1, "title": "Saarschleife Wandern", "category": "natur",
                 "tags": ["natur", "outdoor"], "price": null},
                {"id": 2, "title": "KI Förderung Business", "category": "business",
                 "tags": ["business"], "featured": true},
                {"id": "3", "title": "Völklinger Hütte Führung", "category": "kultur",
                 "tags": ["kultur", null, "outdoor"], "rating": 4.5}
            ]"#,
        )
    }

    #[allow(dead_code)] // Used in integration tests
    pub fn path(&self) -> &Path {
        self.file.path()
    }
}
