//! Verified regional knowledge base.

use crate::core::error::Result;
use crate::core::search::Schema;
use crate::core::source::StaticSource;
use crate::core::types::{FieldWeights, Searchable};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KnowledgeKind {
    Government,
    News,
    Sports,
    Business,
    Events,
}

impl KnowledgeKind {
    pub const ALL: [KnowledgeKind; 5] = [
        KnowledgeKind::Government,
        KnowledgeKind::News,
        KnowledgeKind::Sports,
        KnowledgeKind::Business,
        KnowledgeKind::Events,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            KnowledgeKind::Government => "government",
            KnowledgeKind::News => "news",
            KnowledgeKind::Sports => "sports",
            KnowledgeKind::Business => "business",
            KnowledgeKind::Events => "events",
        }
    }
}

/// One knowledge-base entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KnowledgeEntry {
    pub id: String,
    pub title: String,
    pub content: String,
    pub source: String,
    pub url: String,
    #[serde(rename = "type")]
    pub kind: KnowledgeKind,
    /// YYYY-MM-DD
    pub published: String,
    pub verified: bool,
}

impl Searchable for KnowledgeEntry {
    fn id(&self) -> &str {
        &self.id
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn summary(&self) -> &str {
        &self.content
    }
}

pub fn schema() -> Schema<KnowledgeEntry> {
    Schema::new()
        .text("title", |e: &KnowledgeEntry| e.title.as_str())
        .text("content", |e: &KnowledgeEntry| e.content.as_str())
        .text("source", |e: &KnowledgeEntry| e.source.as_str())
        .text("url", |e: &KnowledgeEntry| e.url.as_str())
        .text("type", |e: &KnowledgeEntry| e.kind.as_str())
}

/// title 3, content 2
pub fn default_weights() -> Result<FieldWeights> {
    FieldWeights::new([("title", 3.0), ("content", 2.0)])
}

pub fn source() -> StaticSource<KnowledgeEntry> {
    StaticSource::new(seed_entries(), schema())
}

/// Entry counts per kind
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KnowledgeStats {
    pub total: usize,
    pub by_kind: BTreeMap<&'static str, usize>,
}

/// Count `entries` per kind. Every kind is listed, empty ones with 0.
pub fn stats(entries: &[KnowledgeEntry]) -> KnowledgeStats {
    let mut by_kind: BTreeMap<&'static str, usize> =
        KnowledgeKind::ALL.iter().map(|k| (k.as_str(), 0)).collect();
    for entry in entries {
        *by_kind.entry(entry.kind.as_str()).or_default() += 1;
    }
    KnowledgeStats {
        total: entries.len(),
        by_kind,
    }
}

fn entry(
    id: &str,
    kind: KnowledgeKind,
    title: &str,
    content: &str,
    source: &str,
    url: &str,
) -> KnowledgeEntry {
    KnowledgeEntry {
        id: id.to_string(),
        title: title.to_string(),
        content: content.to_string(),
        source: source.to_string(),
        url: url.to_string(),
        kind,
        published: "2025-06-01".to_string(),
        verified: true,
    }
}

pub fn seed_entries() -> Vec<KnowledgeEntry> {
    use KnowledgeKind::*;

    vec![
        entry(
            "gov_001",
            Government,
            "Über das Saarland",
            "Das Saarland ist ein Bundesland in Deutschland mit der Hauptstadt Saarbrücken. Es grenzt an Frankreich und Luxemburg.",
            "Saarland.de Offiziell",
            "https://www.saarland.de/DE/portale/ueber-das-saarland/_node.html",
        ),
        entry(
            "gov_002",
            Government,
            "Landesregierung Saarland",
            "Das Saarland hat etwa 1 Million Einwohner und ist das kleinste deutsche Flächenland. Ministerpräsidentin ist Anke Rehlinger (SPD).",
            "Saarland.de Offiziell",
            "https://www.saarland.de/DE/portale/landesregierung/_node.html",
        ),
        entry(
            "news_001",
            News,
            "Über den SR",
            "Der Saarländische Rundfunk (SR) ist die öffentlich-rechtliche Rundfunkanstalt des Saarlandes mit Sitz in Saarbrücken.",
            "SR Online",
            "https://www.sr.de/sr/unternehmen/",
        ),
        entry(
            "sports_001",
            Sports,
            "Vereinsinfo FCS",
            "1. FC Saarbrücken spielt in der 3. Liga und trägt seine Heimspiele im Ludwigspark-Stadion aus. Der Verein wurde 1903 gegründet.",
            "1. FC Saarbrücken",
            "https://www.fcsaarbruecken.de",
        ),
        entry(
            "sports_002",
            Sports,
            "Vereinsinfo SVE",
            "SV Elversberg spielt in der 2. Bundesliga und trägt seine Heimspiele in der URSAPHARM-Arena an der Kaiserlinde aus.",
            "SV Elversberg",
            "https://www.sv-elversberg.de",
        ),
        entry(
            "business_001",
            Business,
            "IHK Saarland",
            "Die IHK Saarland ist die Industrie- und Handelskammer für das Saarland mit Sitz in Saarbrücken.",
            "IHK Saarland",
            "https://www.saarland.ihk.de",
        ),
    ]
}
