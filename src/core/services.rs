//! Unified service container for agentland
//!
//! Provides shared access to the configuration and every record source,
//! and runs searches against them.

use crate::core::catalog::knowledge::{self, KnowledgeEntry, KnowledgeStats};
use crate::core::catalog::saarbrett::{self, Insights, Listing};
use crate::core::catalog::{paginate, Catalog, Page};
use crate::core::config::Config;
use crate::core::error::{AgentlandError, Result};
use crate::core::search::{facets, Facet, Ranker, Tokenizer};
use crate::core::source::{JsonFileSource, RecordFilter, RecordSource};
use crate::core::types::{FieldWeights, Record, Searchable};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::Arc;

/// A search against one catalog
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchRequest {
    pub catalog: Catalog,
    pub query: String,
    #[serde(default)]
    pub filter: RecordFilter,
    /// Clamped to `1..=max_limit`; `default_limit` when absent
    #[serde(default)]
    pub limit: Option<usize>,
    /// Fields to facet over the matched records
    #[serde(default)]
    pub facets: Vec<String>,
}

impl SearchRequest {
    pub fn new(catalog: Catalog, query: impl Into<String>) -> Self {
        Self {
            catalog,
            query: query.into(),
            filter: RecordFilter::default(),
            limit: None,
            facets: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SearchHit {
    pub rank: usize,
    pub id: String,
    pub title: String,
    pub summary: String,
    pub score: f64,
    pub record: serde_json::Value,
}

#[derive(Debug, Clone, Serialize)]
pub struct SearchResponse {
    pub catalog: Catalog,
    pub query: String,
    /// Matches before truncation
    pub total: usize,
    pub limit: usize,
    pub hits: Vec<SearchHit>,
    pub facets: BTreeMap<String, Facet>,
}

/// Unified services container
///
/// The CLI and tests share this struct for service access.
#[derive(Clone)]
pub struct Services {
    /// Application configuration
    pub config: Arc<Config>,

    /// SAARBRETT listings
    pub saarbrett: Arc<dyn RecordSource<Listing>>,

    /// Knowledge base
    pub knowledge: Arc<dyn RecordSource<KnowledgeEntry>>,

    /// Generic records, when `data.records_file` is configured
    pub records: Option<Arc<dyn RecordSource<Record>>>,
}

impl Services {
    /// Create services from configuration, using the seed catalogs
    pub fn new(config: Config) -> Result<Self> {
        config.validate()?;

        let records = match &config.data.records_file {
            Some(path) => {
                Some(Arc::new(JsonFileSource::load(path)?) as Arc<dyn RecordSource<Record>>)
            }
            None => None,
        };

        Self::with_sources(
            config,
            Arc::new(saarbrett::source()),
            Arc::new(knowledge::source()),
            records,
        )
    }

    /// Create services with injected record sources
    pub fn with_sources(
        config: Config,
        saarbrett: Arc<dyn RecordSource<Listing>>,
        knowledge: Arc<dyn RecordSource<KnowledgeEntry>>,
        records: Option<Arc<dyn RecordSource<Record>>>,
    ) -> Result<Self> {
        config.validate()?;

        Ok(Self {
            config: Arc::new(config),
            saarbrett,
            knowledge,
            records,
        })
    }

    /// Effective weight profile: the catalog default overridden by config
    pub fn weights(&self, catalog: Catalog) -> Result<FieldWeights> {
        let defaults = catalog.default_weights()?;
        match self.config.profile(catalog) {
            Some(overrides) => defaults.merged(overrides),
            None => Ok(defaults),
        }
    }

    pub fn tokenizer(&self) -> Tokenizer {
        Tokenizer::new(self.config.search.min_token_chars)
    }

    /// Clamp a requested limit to `1..=max_limit`
    pub fn effective_limit(&self, requested: Option<usize>) -> usize {
        requested
            .unwrap_or(self.config.search.default_limit)
            .clamp(1, self.config.search.max_limit)
    }

    fn records_source(&self) -> Result<&Arc<dyn RecordSource<Record>>> {
        self.records.as_ref().ok_or_else(|| {
            AgentlandError::InvalidInput(
                "The records catalog needs data.records_file (or AGENTLAND_RECORDS_FILE)"
                    .to_string(),
            )
        })
    }

    fn check_query_length(&self, query: &str) -> Result<()> {
        let query_len = query.chars().count();
        if query_len > self.config.search.max_query_length {
            return Err(AgentlandError::InvalidQuery(format!(
                "Query is {query_len} characters, maximum is {}",
                self.config.search.max_query_length
            )));
        }
        Ok(())
    }

    /// Rank one catalog for `request.query`
    pub fn search(&self, request: &SearchRequest) -> Result<SearchResponse> {
        self.check_query_length(&request.query)?;

        match request.catalog {
            Catalog::Saarbrett => self.search_source(self.saarbrett.as_ref(), request),
            Catalog::Knowledge => self.search_source(self.knowledge.as_ref(), request),
            Catalog::Records => self.search_source(self.records_source()?.as_ref(), request),
        }
    }

    fn search_source<T>(
        &self,
        source: &dyn RecordSource<T>,
        request: &SearchRequest,
    ) -> Result<SearchResponse>
    where
        T: Searchable + Serialize + Clone + 'static,
    {
        let limit = self.effective_limit(request.limit);
        let scorer = source.schema().scorer(&self.weights(request.catalog)?)?;
        let records = source.list_records(&request.filter)?;

        let ranked = Ranker::new(self.tokenizer(), scorer).rank(&records, &request.query, None);
        let total = ranked.len();

        let mut facet_map = BTreeMap::new();
        if !request.facets.is_empty() {
            let matched: Vec<T> = ranked.iter().map(|hit| hit.record.clone()).collect();
            for field in &request.facets {
                facet_map.insert(field.clone(), facets(&matched, source.schema(), field)?);
            }
        }

        let hits = ranked
            .into_iter()
            .take(limit)
            .enumerate()
            .map(|(i, hit)| -> Result<SearchHit> {
                Ok(SearchHit {
                    rank: i + 1,
                    id: hit.record.id().to_string(),
                    title: hit.record.title().to_string(),
                    summary: hit.record.summary().to_string(),
                    score: hit.score,
                    record: serde_json::to_value(hit.record)?,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        tracing::info!(
            catalog = %request.catalog,
            candidates = records.len(),
            total,
            returned = hits.len(),
            "search complete"
        );

        Ok(SearchResponse {
            catalog: request.catalog,
            query: request.query.clone(),
            total,
            limit,
            hits,
            facets: facet_map,
        })
    }

    /// Facet a catalog (after filtering) by `field`
    pub fn facets(&self, catalog: Catalog, field: &str, filter: &RecordFilter) -> Result<Facet> {
        fn run<T: 'static>(
            source: &dyn RecordSource<T>,
            field: &str,
            filter: &RecordFilter,
        ) -> Result<Facet> {
            let records = source.list_records(filter)?;
            facets(&records, source.schema(), field)
        }

        match catalog {
            Catalog::Saarbrett => run(self.saarbrett.as_ref(), field, filter),
            Catalog::Knowledge => run(self.knowledge.as_ref(), field, filter),
            Catalog::Records => run(self.records_source()?.as_ref(), field, filter),
        }
    }

    /// SAARBRETT listings matching `filter` and, when given, `query`.
    ///
    /// A listing matches the query when it scores above zero with the
    /// saarbrett weight profile. Source order is kept.
    fn board(&self, filter: &RecordFilter, query: Option<&str>) -> Result<Vec<Listing>> {
        let listings = self.saarbrett.list_records(filter)?;
        let Some(query) = query else {
            return Ok(listings);
        };
        self.check_query_length(query)?;

        let tokens = self.tokenizer().tokenize(query);
        if tokens.is_empty() {
            return Ok(listings);
        }

        let scorer = self
            .saarbrett
            .schema()
            .scorer(&self.weights(Catalog::Saarbrett)?)?;
        Ok(listings
            .into_iter()
            .filter(|listing| scorer.score(listing, &tokens) > 0.0)
            .collect())
    }

    /// SAARBRETT listings in browse order, one page at a time
    pub fn browse(
        &self,
        filter: &RecordFilter,
        query: Option<&str>,
        offset: usize,
        limit: Option<usize>,
    ) -> Result<Page<Listing>> {
        let mut listings = self.board(filter, query)?;
        saarbrett::browse_order(&mut listings);
        Ok(paginate(&listings, offset, self.effective_limit(limit)))
    }

    /// Board insights over the filtered SAARBRETT listings
    pub fn insights(&self, filter: &RecordFilter, query: Option<&str>) -> Result<Insights> {
        let listings = self.board(filter, query)?;
        saarbrett::insights(&listings)
    }

    /// Knowledge-base counts per kind
    pub fn knowledge_stats(&self) -> Result<KnowledgeStats> {
        let entries = self.knowledge.list_records(&RecordFilter::default())?;
        Ok(knowledge::stats(&entries))
    }
}
