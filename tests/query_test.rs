mod helpers;

use engram::knowledge::types::KnowledgeQuery;
use helpers::{test_sqlite_store, test_store};

#[test]
fn must_tags_filter_to_superset_holders() {
    let (_kv, store) = test_store();
    store
        .ingest("fact one", "user", &["a".to_string()], None, None)
        .unwrap();
    let both = store
        .ingest("fact two", "user", &["a".to_string(), "b".to_string()], None, None)
        .unwrap();
    store
        .ingest("fact three", "user", &["b".to_string()], None, None)
        .unwrap();

    let mut q = KnowledgeQuery::new("fact");
    q.must_tags = vec!["a".to_string(), "b".to_string()];
    let results = store.query(&q).unwrap();

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].item.id, both);
}

#[test]
fn any_tags_keep_every_intersecting_item() {
    let (_kv, store) = test_store();
    store.ingest("fact one", "user", &["a".to_string()], None, None).unwrap();
    store
        .ingest("fact two", "user", &["a".to_string(), "b".to_string()], None, None)
        .unwrap();
    store.ingest("fact three", "user", &["b".to_string()], None, None).unwrap();

    let mut q = KnowledgeQuery::new("fact");
    q.any_tags = vec!["a".to_string(), "b".to_string()];
    let results = store.query(&q).unwrap();

    assert_eq!(results.len(), 3);
}

#[test]
fn tag_matching_is_case_insensitive() {
    let (_kv, store) = test_store();
    let id = store
        .ingest("tagged fact", "user", &["Cooking".to_string()], None, None)
        .unwrap();

    let mut q = KnowledgeQuery::new("tagged fact");
    q.must_tags = vec!["cooking".to_string()];
    let results = store.query(&q).unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].item.id, id);
}

#[test]
fn top_k_caps_results_with_floor_of_one() {
    let (_kv, store) = test_store();
    for i in 0..5 {
        store
            .ingest(&format!("numbered fact {i}"), "user", &[], None, None)
            .unwrap();
    }

    let mut q = KnowledgeQuery::new("numbered fact");
    q.top_k = 2;
    assert_eq!(store.query(&q).unwrap().len(), 2);

    q.top_k = 0;
    assert_eq!(store.query(&q).unwrap().len(), 1, "top_k floor is 1");
}

#[test]
fn tied_scores_keep_enumeration_order() {
    // SQLite kv enumerates in insertion order; identical items score
    // identically, so the stable sort must keep that order.
    let (_kv, store) = test_sqlite_store();
    let first = store.ingest("identical twin fact", "user", &[], Some(0.5), None).unwrap();
    let second = store.ingest("identical twin fact", "user", &[], Some(0.5), None).unwrap();

    let results = store.query(&KnowledgeQuery::new("identical twin fact")).unwrap();
    assert_eq!(results.len(), 2);
    assert!((results[0].score - results[1].score).abs() < 1e-6);
    assert_eq!(results[0].item.id, first);
    assert_eq!(results[1].item.id, second);
}

#[test]
fn empty_store_returns_no_results() {
    let (_kv, store) = test_store();
    let results = store.query(&KnowledgeQuery::new("anything at all")).unwrap();
    assert!(results.is_empty());
}

#[test]
fn embedding_failure_fails_the_whole_query() {
    use std::sync::Arc;

    use engram::embedding::EmbeddingProvider;
    use engram::knowledge::KnowledgeStore;
    use engram::kv::InMemoryKeyValueStore;
    use engram::KnowledgeError;

    struct FailingProvider;
    impl EmbeddingProvider for FailingProvider {
        fn embed(&self, _text: &str) -> anyhow::Result<Vec<f32>> {
            anyhow::bail!("model offline")
        }
        fn dimensions(&self) -> usize {
            0
        }
    }

    let store = KnowledgeStore::new(
        Arc::new(InMemoryKeyValueStore::new()),
        Arc::new(FailingProvider),
    );
    let result = store.query(&KnowledgeQuery::new("does not matter"));
    // No silent degradation to keyword-only scoring
    assert!(matches!(result, Err(KnowledgeError::Embedding(_))));
}
