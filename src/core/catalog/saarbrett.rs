//! SAARBRETT community board.
//!
//! Listings are offers, requests, events and sales posted by users and
//! businesses. This module provides the seed board, the listing schema,
//! the default weight profile, browse ordering, board insights and
//! validation of new submissions.

use crate::core::content::{analyze_content_quality, default_expiry, estimated_reach, QualityReport};
use crate::core::error::{AgentlandError, Result};
use crate::core::search::{facets, facets_with, Facet, FacetCount, FacetKey, Schema};
use crate::core::source::StaticSource;
use crate::core::types::{FieldWeights, Searchable};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Who posted a listing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuthorKind {
    #[default]
    User,
    Business,
}

impl AuthorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            AuthorKind::User => "user",
            AuthorKind::Business => "business",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Author {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: AuthorKind,
    pub verified: bool,
    pub location: String,
}

/// Moderation state of a listing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ListingStatus {
    #[default]
    Published,
    PendingReview,
}

/// A SAARBRETT post
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Listing {
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: String,
    /// angebot, suche, verkauf, event, ...
    #[serde(rename = "type")]
    pub kind: String,
    pub author: Author,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    pub location: String,
    #[serde(default)]
    pub tags: Vec<String>,
    /// Relative creation time as shown on the board ("vor 2 Stunden")
    pub created: String,
    /// YYYY-MM-DD
    pub expires: String,
    #[serde(default)]
    pub views: u32,
    #[serde(default)]
    pub likes: u32,
    #[serde(default)]
    pub responses: u32,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub urgent: bool,
    #[serde(default)]
    pub status: ListingStatus,
}

impl Searchable for Listing {
    fn id(&self) -> &str {
        &self.id
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn summary(&self) -> &str {
        &self.description
    }
}

/// Field schema for listings
pub fn schema() -> Schema<Listing> {
    Schema::new()
        .text("title", |l: &Listing| l.title.as_str())
        .text("description", |l: &Listing| l.description.as_str())
        .text("category", |l: &Listing| l.category.as_str())
        .text("type", |l: &Listing| l.kind.as_str())
        .text("location", |l: &Listing| l.location.as_str())
        .list("tags", |l: &Listing| l.tags.as_slice())
        .text("author", |l: &Listing| l.author.name.as_str())
        .text("author_type", |l: &Listing| l.author.kind.as_str())
}

/// title 3, tags 2, description 1, location 1
pub fn default_weights() -> Result<FieldWeights> {
    FieldWeights::new([
        ("title", 3.0),
        ("tags", 2.0),
        ("description", 1.0),
        ("location", 1.0),
    ])
}

/// Seed board as a record source
pub fn source() -> StaticSource<Listing> {
    StaticSource::new(seed_listings(), schema())
}

/// Board order: featured first, then urgent, otherwise unchanged
pub fn browse_order(listings: &mut [Listing]) {
    listings.sort_by_key(|l| (!l.featured, !l.urgent));
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActivityMetrics {
    pub new_today: usize,
    pub featured_count: usize,
    pub urgent_count: usize,
    pub business_posts: usize,
    pub user_posts: usize,
}

/// Summary panels shown next to the board
#[derive(Debug, Clone, Serialize)]
pub struct Insights {
    pub total_posts: usize,
    pub categories_breakdown: Facet,
    pub trending_keywords: Vec<FacetCount>,
    pub location_distribution: Facet,
    pub activity_metrics: ActivityMetrics,
}

const TRENDING_KEYWORDS: usize = 10;

/// Compute board insights over `listings`
pub fn insights(listings: &[Listing]) -> Result<Insights> {
    let schema = schema();
    let count = |pred: fn(&Listing) -> bool| listings.iter().filter(|l| pred(l)).count();

    Ok(Insights {
        total_posts: listings.len(),
        categories_breakdown: facets(listings, &schema, "category")?,
        trending_keywords: facets(listings, &schema, "tags")?.top(TRENDING_KEYWORDS),
        location_distribution: facets_with(listings, &schema, "location", FacetKey::FirstWord)?,
        activity_metrics: ActivityMetrics {
            new_today: count(|l| l.created.contains("Stunden")),
            featured_count: count(|l| l.featured),
            urgent_count: count(|l| l.urgent),
            business_posts: count(|l| l.author.kind == AuthorKind::Business),
            user_posts: count(|l| l.author.kind == AuthorKind::User),
        },
    })
}

/// A new listing as submitted by a user
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListingDraft {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: String,
    #[serde(default, rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub author_name: String,
    #[serde(default)]
    pub author_kind: AuthorKind,
    #[serde(default)]
    pub author_location: Option<String>,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub expires: Option<String>,
    #[serde(default)]
    pub urgent: bool,
}

/// An accepted submission awaiting review
#[derive(Debug, Clone, Serialize)]
pub struct Submission {
    pub listing: Listing,
    pub quality: QualityReport,
    pub estimated_reach: u64,
}

/// Validate a draft and turn it into a listing pending review
pub fn submit(draft: ListingDraft, now: DateTime<Utc>) -> Result<Submission> {
    let required = [
        ("title", &draft.title),
        ("description", &draft.description),
        ("category", &draft.category),
        ("type", &draft.kind),
        ("author", &draft.author_name),
        ("location", &draft.location),
    ];
    let missing: Vec<&str> = required
        .iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| *name)
        .collect();
    if !missing.is_empty() {
        return Err(AgentlandError::InvalidInput(format!(
            "Missing required fields: {}",
            missing.join(", ")
        )));
    }

    let title = draft.title.trim().to_string();
    let description = draft.description.trim().to_string();
    let location = draft.location.trim().to_string();
    let tags: Vec<String> = draft
        .tags
        .iter()
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())
        .collect();

    let expires = draft.expires.clone().unwrap_or_else(|| {
        default_expiry(&draft.kind, now.date_naive())
            .format("%Y-%m-%d")
            .to_string()
    });

    let quality = analyze_content_quality(&title, &description);
    let estimated_reach = estimated_reach(&draft.category, &location, &tags);

    let listing = Listing {
        id: format!("saar-post-{}", now.timestamp_millis()),
        title,
        description,
        category: draft.category.trim().to_string(),
        kind: draft.kind.trim().to_string(),
        author: Author {
            name: draft.author_name.trim().to_string(),
            kind: draft.author_kind,
            verified: false,
            location: draft.author_location.unwrap_or_else(|| location.clone()),
        },
        price: draft.price,
        location,
        tags,
        created: "gerade eben".to_string(),
        expires,
        views: 0,
        likes: 0,
        responses: 0,
        featured: false,
        urgent: draft.urgent,
        status: ListingStatus::PendingReview,
    };

    tracing::info!(
        id = %listing.id,
        score = quality.score,
        reach = estimated_reach,
        "accepted listing submission"
    );

    Ok(Submission {
        listing,
        quality,
        estimated_reach,
    })
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn author(name: &str, kind: AuthorKind, verified: bool, location: &str) -> Author {
    Author {
        name: name.to_string(),
        kind,
        verified,
        location: location.to_string(),
    }
}

/// The ten seed posts of the board
pub fn seed_listings() -> Vec<Listing> {
    use AuthorKind::{Business, User};

    vec![
        Listing {
            id: "saar-post-1".to_string(),
            title: "Erfahrener Webentwickler sucht neue Herausforderung".to_string(),
            description: "Frontend-Entwickler mit 5 Jahren Erfahrung in React/Next.js sucht spannende Position im Saarland oder grenzüberschreitend. Spezialisiert auf moderne UI/UX und Performance-Optimierung.".to_string(),
            category: "jobs".to_string(),
            kind: "suche".to_string(),
            author: author("Max Saarländer", User, true, "Saarbrücken"),
            price: None,
            location: "Saarbrücken / Remote".to_string(),
            tags: strings(&["React", "JavaScript", "UI/UX", "Frontend", "Remote"]),
            created: "vor 2 Stunden".to_string(),
            expires: "2025-03-06".to_string(),
            views: 45,
            likes: 8,
            responses: 3,
            featured: false,
            urgent: false,
            status: ListingStatus::Published,
        },
        Listing {
            id: "saar-post-2".to_string(),
            title: "KI-Startup bietet Werkstudentenstellen".to_string(),
            description: "Agentland.saarland sucht motivierte Studierende für Werkstudentenjobs im Bereich KI-Entwicklung. Flexible Arbeitszeiten, spannende Projekte und Einblicke in cutting-edge Technologie.".to_string(),
            category: "jobs".to_string(),
            kind: "angebot".to_string(),
            author: author("AGENTLAND.SAARLAND", Business, true, "Saarbrücken"),
            price: Some(15.0),
            location: "Saarbrücken Innenstadt".to_string(),
            tags: strings(&["KI", "Werkstudent", "Python", "Machine Learning", "Startup"]),
            created: "vor 4 Stunden".to_string(),
            expires: "2025-02-28".to_string(),
            views: 123,
            likes: 19,
            responses: 12,
            featured: true,
            urgent: false,
            status: ListingStatus::Published,
        },
        Listing {
            id: "saar-post-3".to_string(),
            title: "3-Zimmer Wohnung mit Balkon in Saarbrücken St. Johann".to_string(),
            description: "Schöne 3-Zimmer Wohnung (75qm) in zentraler Lage von St. Johann. Balkon, moderne Küche, Badewanne. Nähe zu öffentlichen Verkehrsmitteln und Einkaufsmöglichkeiten.".to_string(),
            category: "wohnen".to_string(),
            kind: "angebot".to_string(),
            author: author("Saarland Immobilien GmbH", Business, true, "Saarbrücken"),
            price: Some(850.0),
            location: "Saarbrücken St. Johann".to_string(),
            tags: strings(&["3-Zimmer", "Balkon", "zentral", "ÖPNV", "St. Johann"]),
            created: "vor 1 Tag".to_string(),
            expires: "2025-03-15".to_string(),
            views: 89,
            likes: 14,
            responses: 7,
            featured: false,
            urgent: false,
            status: ListingStatus::Published,
        },
        Listing {
            id: "saar-post-4".to_string(),
            title: "MacBook Pro M3 zu verkaufen - neuwertig".to_string(),
            description: "MacBook Pro 14\" M3 Chip, 16GB RAM, 512GB SSD. Nur 3 Monate alt, noch Garantie. Verkauf wegen Firmen-Laptop. Originalverpackung und Zubehör dabei.".to_string(),
            category: "verkauf".to_string(),
            kind: "verkauf".to_string(),
            author: author("TechSaar User", User, false, "Völklingen"),
            price: Some(2200.0),
            location: "Völklingen".to_string(),
            tags: strings(&["MacBook", "Apple", "M3", "neuwertig", "Garantie"]),
            created: "vor 6 Stunden".to_string(),
            expires: "2025-02-20".to_string(),
            views: 67,
            likes: 11,
            responses: 5,
            featured: false,
            urgent: true,
            status: ListingStatus::Published,
        },
        Listing {
            id: "saar-post-5".to_string(),
            title: "IT-Support für kleine Unternehmen".to_string(),
            description: "Biete professionellen IT-Support für kleine und mittlere Unternehmen im Saarland. Netzwerk-Setup, Cloud-Migration, Datensicherheit. Faire Preise, schnelle Reaktionszeiten.".to_string(),
            category: "services".to_string(),
            kind: "angebot".to_string(),
            author: author("SaarTech Solutions", Business, true, "Neunkirchen"),
            price: None,
            location: "Saarland-weit".to_string(),
            tags: strings(&["IT-Support", "Netzwerk", "Cloud", "Sicherheit", "KMU"]),
            created: "vor 3 Tage".to_string(),
            expires: "2025-04-01".to_string(),
            views: 156,
            likes: 23,
            responses: 9,
            featured: true,
            urgent: false,
            status: ListingStatus::Published,
        },
        Listing {
            id: "saar-post-6".to_string(),
            title: "Deutsch-Französischer Filmabend im Kino achteinhalb".to_string(),
            description: "Monatlicher Filmabend mit französischen Filmen (deutsche Untertitel). Nächster Termin: \"Le Fabelmans\" - Diskussion danach bei Wein und Brezeln.".to_string(),
            category: "events".to_string(),
            kind: "event".to_string(),
            author: author("Kino achteinhalb", Business, true, "Saarbrücken"),
            price: Some(8.0),
            location: "Saarbrücken Nauwieser Viertel".to_string(),
            tags: strings(&["Film", "Deutsch-Französisch", "Kultur", "Diskussion", "Wein"]),
            created: "vor 1 Tag".to_string(),
            expires: "2025-02-15".to_string(),
            views: 78,
            likes: 16,
            responses: 11,
            featured: false,
            urgent: false,
            status: ListingStatus::Published,
        },
        Listing {
            id: "saar-post-7".to_string(),
            title: "Mitfahrgelegenheit nach Frankfurt täglich".to_string(),
            description: "Biete täglich Mitfahrgelegenheit von Saarbrücken nach Frankfurt am Main. Abfahrt 6:30 Uhr, Rückfahrt 18:00 Uhr. Zuverlässig, Nichtraucher, moderne Ausstattung.".to_string(),
            category: "transport".to_string(),
            kind: "angebot".to_string(),
            author: author("Pendler67", User, true, "Saarbrücken"),
            price: Some(25.0),
            location: "Saarbrücken → Frankfurt".to_string(),
            tags: strings(&["Mitfahrgelegenheit", "Frankfurt", "täglich", "Pendler", "zuverlässig"]),
            created: "vor 5 Tage".to_string(),
            expires: "2025-06-01".to_string(),
            views: 234,
            likes: 31,
            responses: 18,
            featured: false,
            urgent: false,
            status: ListingStatus::Published,
        },
        Listing {
            id: "saar-post-8".to_string(),
            title: "Python Programmierkurs - Anfänger willkommen".to_string(),
            description: "Wöchentlicher Python-Kurs für Einsteiger. Samstags 10-13 Uhr, max. 8 Teilnehmer. Laptop wird gestellt. Von den Grundlagen bis zu ersten Projekten.".to_string(),
            category: "bildung".to_string(),
            kind: "angebot".to_string(),
            author: author("Code Academy Saar", Business, true, "Saarbrücken"),
            price: Some(120.0),
            location: "Saarbrücken Universität".to_string(),
            tags: strings(&["Python", "Programmierung", "Anfänger", "Kurs", "Laptop"]),
            created: "vor 2 Tage".to_string(),
            expires: "2025-03-01".to_string(),
            views: 145,
            likes: 27,
            responses: 15,
            featured: true,
            urgent: false,
            status: ListingStatus::Published,
        },
        Listing {
            id: "saar-post-9".to_string(),
            title: "Saarländische Kochgruppe sucht Mitstreiter".to_string(),
            description: "Monatliches Kochen traditioneller saarländischer Gerichte. Dibbelabbes, Hoorische, Schales - lernen Sie die echte Saarländische Küche kennen!".to_string(),
            category: "community".to_string(),
            kind: "suche".to_string(),
            author: author("Saarländische Tradition e.V.", Business, true, "Merzig"),
            price: None,
            location: "wechselnde Orte im Saarland".to_string(),
            tags: strings(&["Kochen", "Tradition", "Dibbelabbes", "Gemeinschaft", "Kultur"]),
            created: "vor 1 Woche".to_string(),
            expires: "2025-12-31".to_string(),
            views: 89,
            likes: 22,
            responses: 8,
            featured: false,
            urgent: false,
            status: ListingStatus::Published,
        },
        Listing {
            id: "saar-post-10".to_string(),
            title: "Suche Babysitter für 2-jährigen Sohn".to_string(),
            description: "Liebevolle Familie in Saarbrücken sucht zuverlässigen Babysitter für unseren 2-jährigen Sohn. Gelegentlich abends und Wochenenden. Erfahrung erwünscht.".to_string(),
            category: "services".to_string(),
            kind: "suche".to_string(),
            author: author("Familie Müller", User, true, "Saarbrücken"),
            price: Some(12.0),
            location: "Saarbrücken Dudweiler".to_string(),
            tags: strings(&["Babysitter", "Kinderbetreuung", "2 Jahre", "abends", "Erfahrung"]),
            created: "vor 3 Stunden".to_string(),
            expires: "2025-02-28".to_string(),
            views: 34,
            likes: 6,
            responses: 2,
            featured: false,
            urgent: true,
            status: ListingStatus::Published,
        },
    ]
}
