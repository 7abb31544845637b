// Integration tests for ranking over generic records

use crate::common::{assert_ranked_desc, saarland_records, weights};
use agentland::core::search::{rank, score_record, tokenize, Ranker, Schema, Tokenizer};
use agentland::core::types::Record;

fn title_tags_scorer() -> agentland::core::search::Scorer<Record> {
    Schema::dynamic()
        .scorer(&weights(&[("title", 3.0), ("tags", 1.0)]))
        .expect("Scorer creation failed")
}

#[test]
fn test_rank_single_match() {
    let records = saarland_records();
    let hits = rank(&records[..2], "wandern", &title_tags_scorer(), None);

    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].record.id, "1");
    assert_eq!(hits[0].score, 3.0);
    assert_eq!(&*hits[0].query, "wandern");
}

#[test]
fn test_rank_empty_query_matches_nothing() {
    let records = saarland_records();
    let scorer = title_tags_scorer();

    assert!(rank(&records, "", &scorer, None).is_empty());
    assert!(rank(&records, "  \t ", &scorer, Some(5)).is_empty());
}

#[test]
fn test_rank_respects_limit() {
    let records = saarland_records();
    let scorer = title_tags_scorer();

    let all = rank(&records, "business outdoor", &scorer, None);
    assert!(all.len() > 2, "Expected more than 2 matches, got {}", all.len());

    let limited = rank(&records, "business outdoor", &scorer, Some(2));
    assert_eq!(limited.len(), 2);
    assert_eq!(limited[0].record.id, all[0].record.id);
    assert_eq!(limited[1].record.id, all[1].record.id);
}

#[test]
fn test_rank_zero_limit_is_empty() {
    let records = saarland_records();
    assert!(rank(&records, "business", &title_tags_scorer(), Some(0)).is_empty());
}

#[test]
fn test_rank_sorted_descending_with_stable_ties() {
    let records = saarland_records();
    let hits = rank(&records, "outdoor business", &title_tags_scorer(), None);
    assert_ranked_desc(&hits);

    // "business": record 2 (title + tag = 4) and record 5 (tag = 1)
    // "outdoor": records 1 and 3 (tag = 1 each)
    let ids: Vec<&str> = hits.iter().map(|h| h.record.id.as_str()).collect();
    assert_eq!(ids, vec!["2", "1", "3", "5"]);
    assert_eq!(hits[0].score, 4.0);
}

#[test]
fn test_rank_is_idempotent() {
    let records = saarland_records();
    let scorer = title_tags_scorer();

    let first: Vec<(String, f64)> = rank(&records, "saar business", &scorer, None)
        .iter()
        .map(|h| (h.record.id.clone(), h.score))
        .collect();
    let second: Vec<(String, f64)> = rank(&records, "saar business", &scorer, None)
        .iter()
        .map(|h| (h.record.id.clone(), h.score))
        .collect();

    assert_eq!(first, second);
}

#[test]
fn test_rank_does_not_reorder_input() {
    let records = saarland_records();
    let before: Vec<String> = records.iter().map(|r| r.id.clone()).collect();
    let _ = rank(&records, "business", &title_tags_scorer(), None);
    let after: Vec<String> = records.iter().map(|r| r.id.clone()).collect();
    assert_eq!(before, after);
}

#[test]
fn test_score_accumulates_across_tokens_and_fields() {
    let record = Record::new("x")
        .with("title", "Saarbrücken Business Frühstück")
        .with("description", "Netzwerken im Business-Club")
        .with("tags", vec!["business", "netzwerk"]);
    let scorer = Schema::dynamic()
        .scorer(&weights(&[
            ("title", 3.0),
            ("description", 1.0),
            ("tags", 2.0),
        ]))
        .unwrap();

    // business: title 3 + description 1 + tags 2; netzwerk: description 1 + tags 2
    let score = score_record(&record, &tokenize("business netzwerk"), &scorer);
    assert_eq!(score, 9.0);
}

#[test]
fn test_repeated_token_never_lowers_score() {
    let record = Record::new("x").with("title", "Saarland Wandern");
    let scorer = Schema::dynamic()
        .scorer(&weights(&[("title", 2.0)]))
        .unwrap();

    let once = score_record(&record, &tokenize("wandern"), &scorer);
    let twice = score_record(&record, &tokenize("wandern wandern"), &scorer);
    assert!(twice >= once);
    assert_eq!(twice, 4.0);
}

#[test]
fn test_missing_fields_contribute_nothing() {
    let record = Record::new("x").with("title", "Bostalsee");
    let scorer = Schema::dynamic()
        .scorer(&weights(&[("title", 1.0), ("description", 5.0)]))
        .unwrap();
    assert_eq!(score_record(&record, &tokenize("bostalsee"), &scorer), 1.0);
}

#[test]
fn test_ranker_min_token_chars_drops_short_tokens() {
    let records = saarland_records();
    let ranker = Ranker::new(Tokenizer::new(3), title_tags_scorer());

    // "ki" is dropped, so only "hütte" counts
    let hits = ranker.rank(&records, "ki hütte", None);
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].record.id, "3");
}

#[test]
fn test_score_record_accepts_raw_mixed_case_tokens() {
    let record = Record::new("1").with("title", "KI Förderung");
    let scorer = Schema::dynamic()
        .scorer(&weights(&[("title", 3.0)]))
        .unwrap();

    let raw = vec!["KI".to_string()];
    assert_eq!(score_record(&record, &raw, &scorer), 3.0);
    assert_eq!(
        score_record(&record, &raw, &scorer),
        score_record(&record, &tokenize("ki"), &scorer)
    );
}
