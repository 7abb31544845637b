//! Rule-based content scoring.
//!
//! Fixed rule tables used when listings are submitted and when web
//! results are ranked for regional relevance. Like the search core these
//! are pure functions that never fail.

use chrono::{Days, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

static SPECIAL_CHARS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"[!@#$%^&*()_+\-=\[\]{};':"\\|,.<>/?]+"#).expect("special character pattern")
});

const QUALITY_SUGGESTIONS: [&str; 3] = [
    "Titel sollte aussagekräftig und mindestens 10 Zeichen lang sein",
    "Beschreibung sollte mindestens 200 Zeichen haben",
    "Vermeiden Sie Sonderzeichen im Titel",
];

/// Coarse quality bucket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum QualityLevel {
    High,
    Medium,
    Low,
}

impl QualityLevel {
    /// Portal label (German)
    pub fn label(&self) -> &'static str {
        match self {
            QualityLevel::High => "hoch",
            QualityLevel::Medium => "mittel",
            QualityLevel::Low => "niedrig",
        }
    }
}

/// Result of [`analyze_content_quality`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QualityReport {
    /// 0..=100
    pub score: u32,
    pub quality: QualityLevel,
    pub suggestions: Vec<String>,
}

/// Score a listing's title and description.
///
/// Lengths are counted in characters.
pub fn analyze_content_quality(title: &str, description: &str) -> QualityReport {
    let title_len = title.chars().count();
    let description_len = description.chars().count();

    let mut score = 0;
    if title_len > 10 {
        score += 25;
    }
    if description_len > 50 {
        score += 35;
    }
    if description_len > 200 {
        score += 25;
    }
    if !SPECIAL_CHARS.is_match(title) {
        score += 15;
    }
    let score: u32 = score.min(100);

    let quality = if score > 75 {
        QualityLevel::High
    } else if score > 50 {
        QualityLevel::Medium
    } else {
        QualityLevel::Low
    };

    let suggestions = if score < 75 {
        QUALITY_SUGGESTIONS.iter().map(|s| s.to_string()).collect()
    } else {
        Vec::new()
    };

    QualityReport {
        score,
        quality,
        suggestions,
    }
}

const BASE_REACH: [(&str, f64); 8] = [
    ("jobs", 2500.0),
    ("wohnen", 3000.0),
    ("verkauf", 1800.0),
    ("services", 2200.0),
    ("events", 1500.0),
    ("bildung", 1200.0),
    ("transport", 1000.0),
    ("community", 800.0),
];

const DEFAULT_REACH: f64 = 1000.0;

const POPULAR_TAGS: [&str; 5] = ["ki", "remote", "zentral", "modern", "neu"];

/// Estimated audience of a listing
pub fn estimated_reach(category: &str, location: &str, tags: &[String]) -> u64 {
    let mut reach = BASE_REACH
        .iter()
        .find(|(name, _)| *name == category)
        .map(|(_, base)| *base)
        .unwrap_or(DEFAULT_REACH);

    if location.contains("Saarbrücken") {
        reach *= 1.5;
    } else if location.contains("Saarland") {
        reach *= 1.2;
    }

    let has_popular_tag = tags.iter().any(|tag| {
        let tag = tag.to_lowercase();
        POPULAR_TAGS.iter().any(|popular| tag.contains(popular))
    });
    if has_popular_tag {
        reach *= 1.3;
    }

    reach.round() as u64
}

/// Days a listing of the given type stays online by default
pub fn expiry_days(kind: &str) -> u64 {
    match kind {
        "job" => 30,
        "angebot" => 14,
        "suche" => 21,
        "event" => 7,
        "verkauf" => 30,
        "wohnung" => 60,
        _ => 30,
    }
}

/// Default expiry date for a listing created on `today`
pub fn default_expiry(kind: &str, today: NaiveDate) -> NaiveDate {
    today
        .checked_add_days(Days::new(expiry_days(kind)))
        .unwrap_or(NaiveDate::MAX)
}

const SAARLAND_DOMAINS: [&str; 10] = [
    "saarland.de",
    "saarbruecken.de",
    "ihk.saarland",
    "hwk-saarland.de",
    "urlaub.saarland",
    "uni-saarland.de",
    "htw-saarland.de",
    "sikb.de",
    "statistik.saarland.de",
    "saarland.ihk.de",
];

const CROSS_BORDER_DOMAINS: [&str; 6] = [
    "moselle.fr",
    "metz.fr",
    "nancy.fr",
    "luxembourg.lu",
    "gouvernement.lu",
    "eures.europa.eu",
];

const SAARLAND_KEYWORDS: [&str; 7] = [
    "saarland",
    "saarbrücken",
    "völklingen",
    "neunkirchen",
    "homburg",
    "merzig",
    "st. wendel",
];

/// Regional relevance of a web result, in `0.0..=1.0`
pub fn regional_relevance(url: &str, title: &str, snippet: &str) -> f64 {
    let mut score = 0.0;

    if SAARLAND_DOMAINS.iter().any(|domain| url.contains(domain)) {
        score += 0.5;
    }
    if CROSS_BORDER_DOMAINS.iter().any(|domain| url.contains(domain)) {
        score += 0.3;
    }

    let content = format!("{title} {snippet}").to_lowercase();
    for keyword in SAARLAND_KEYWORDS {
        if content.contains(keyword) {
            score += 0.1;
        }
    }

    f64::min(score, 1.0)
}
