//! Scored retrieval and ranking.
//!
//! The pipeline runs in four stages, each a pure function of its inputs:
//!
//! - **tokenizer**: free text to lowercase terms
//! - **scorer**: weighted substring hits per record field
//! - **ranker**: drop zero scores, stable sort descending, truncate
//! - **facets**: group-by counts over a record set
//!
//! Field access goes through an explicit [`Schema`] resolved once per
//! configuration.

mod facets;
mod ranker;
mod schema;
mod scorer;
mod tokenizer;

pub use facets::{facets, facets_with, summarize, Facet, FacetCount, FacetKey};
pub use ranker::{rank, Ranker};
pub use schema::{Accessor, Schema};
pub use scorer::{score_record, Scorer};
pub use tokenizer::{tokenize, Tokenizer};
