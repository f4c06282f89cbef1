//! Default rules cache-or-fetch tests

use crate::test_utils::{FakeFetcher, Harness, MapConfig, MemoryCache};
use sfe_domain::FilterRule;
use sfe_domain::constants::{
    CONFIG_PATH_DEFAULT_MESSAGES_LOCATION, CONFIG_PATH_DISCARD_UNPARSEABLE_DEFAULTS,
    DEFAULT_RULES_CACHE_KEY, DEFAULT_RULES_CACHE_TAG,
};
use std::sync::atomic::Ordering;
use std::time::Duration;

const RULES_URL: &str = "https://rules.example.com/sentry-filter.json";

fn configured_url() -> MapConfig {
    MapConfig::new().with(CONFIG_PATH_DEFAULT_MESSAGES_LOCATION, RULES_URL)
}

#[tokio::test]
async fn test_cache_hit_never_fetches() {
    let harness = Harness::new(
        MemoryCache::with_entry(DEFAULT_RULES_CACHE_KEY, r#"[{"message":"Deadlock"}]"#),
        configured_url(),
        FakeFetcher::body(r#"[{"message":"from network"}]"#),
    );

    let rules = harness.default_rules().resolve().await.unwrap();

    assert_eq!(rules, vec![FilterRule::new("Deadlock")]);
    assert_eq!(harness.http.call_count(), 0);
    assert_eq!(harness.cache.writes.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_cache_miss_without_location_returns_empty_without_fetch() {
    let harness = Harness::new(
        MemoryCache::new(),
        MapConfig::new(),
        FakeFetcher::body(r#"[{"message":"from network"}]"#),
    );

    assert!(harness.default_rules().resolve().await.unwrap().is_empty());
    assert_eq!(harness.http.call_count(), 0);
}

#[tokio::test]
async fn test_blank_location_counts_as_unset() {
    let harness = Harness::new(
        MemoryCache::new(),
        MapConfig::new().with(CONFIG_PATH_DEFAULT_MESSAGES_LOCATION, "   "),
        FakeFetcher::body(r#"[{"message":"from network"}]"#),
    );

    assert!(harness.default_rules().resolve().await.unwrap().is_empty());
    assert_eq!(harness.http.call_count(), 0);
}

#[tokio::test]
async fn test_failed_fetch_returns_empty_and_caches_nothing() {
    let harness = Harness::new(
        MemoryCache::new(),
        configured_url(),
        FakeFetcher::failing("operation timed out"),
    );

    assert!(harness.default_rules().resolve().await.unwrap().is_empty());
    assert_eq!(harness.http.call_count(), 1);
    assert_eq!(harness.cache.writes.load(Ordering::SeqCst), 0);
    assert!(harness.cache.entry(DEFAULT_RULES_CACHE_KEY).is_none());
}

#[tokio::test]
async fn test_empty_body_returns_empty_and_caches_nothing() {
    let harness = Harness::new(MemoryCache::new(), configured_url(), FakeFetcher::body(""));

    assert!(harness.default_rules().resolve().await.unwrap().is_empty());
    assert_eq!(harness.cache.writes.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_successful_fetch_is_cached_with_ttl_and_tag() {
    let payload = r#"[{"message":"Deadlock"},{"message":"Lock wait timeout"}]"#;
    let harness = Harness::new(
        MemoryCache::new(),
        configured_url(),
        FakeFetcher::body(payload),
    );

    let rules = harness.default_rules().resolve().await.unwrap();

    assert_eq!(
        rules,
        vec![FilterRule::new("Deadlock"), FilterRule::new("Lock wait timeout")]
    );
    assert_eq!(
        harness.http.urls.lock().unwrap().as_slice(),
        &[RULES_URL.to_string()]
    );

    let (stored, entry) = harness.cache.entry(DEFAULT_RULES_CACHE_KEY).unwrap();
    assert_eq!(stored, payload.as_bytes());
    assert_eq!(entry.effective_ttl(), Duration::from_secs(604_800));
    assert_eq!(entry.tags, vec![DEFAULT_RULES_CACHE_TAG.to_string()]);
}

#[tokio::test]
async fn test_second_resolution_is_served_from_cache() {
    let harness = Harness::new(
        MemoryCache::new(),
        configured_url(),
        FakeFetcher::body(r#"[{"message":"Deadlock"}]"#),
    );
    let source = harness.default_rules();

    let first = source.resolve().await.unwrap();
    let second = source.resolve().await.unwrap();

    assert_eq!(first, second);
    assert_eq!(harness.http.call_count(), 1);
}

#[tokio::test]
async fn test_malformed_payload_is_cached_before_parse_and_yields_empty() {
    let harness = Harness::new(
        MemoryCache::new(),
        configured_url(),
        FakeFetcher::body("<html>maintenance</html>"),
    );
    let source = harness.default_rules();

    assert!(source.resolve().await.unwrap().is_empty());
    let (stored, _) = harness.cache.entry(DEFAULT_RULES_CACHE_KEY).unwrap();
    assert_eq!(stored, b"<html>maintenance</html>");

    // The unparseable bytes are now a cache hit for the rest of the TTL
    assert!(source.resolve().await.unwrap().is_empty());
    assert_eq!(harness.http.call_count(), 1);
}

#[tokio::test]
async fn test_discard_policy_evicts_malformed_payload() {
    let harness = Harness::new(
        MemoryCache::new(),
        configured_url().with(CONFIG_PATH_DISCARD_UNPARSEABLE_DEFAULTS, "true"),
        FakeFetcher::body("<html>maintenance</html>"),
    );
    let source = harness.default_rules();

    assert!(source.resolve().await.unwrap().is_empty());
    assert_eq!(harness.cache.writes.load(Ordering::SeqCst), 1);
    assert!(harness.cache.entry(DEFAULT_RULES_CACHE_KEY).is_none());

    assert!(source.resolve().await.unwrap().is_empty());
    assert_eq!(harness.http.call_count(), 2);
}

#[tokio::test]
async fn test_cache_read_failure_falls_back_to_fetch() {
    let cache = MemoryCache::new();
    cache.fail_reads.store(true, Ordering::SeqCst);
    let harness = Harness::new(
        cache,
        configured_url(),
        FakeFetcher::body(r#"[{"message":"Deadlock"}]"#),
    );

    let rules = harness.default_rules().resolve().await.unwrap();

    assert_eq!(rules, vec![FilterRule::new("Deadlock")]);
    assert_eq!(harness.http.call_count(), 1);
}

#[tokio::test]
async fn test_cache_write_failure_does_not_fail_resolution() {
    let cache = MemoryCache::new();
    cache.fail_writes.store(true, Ordering::SeqCst);
    let harness = Harness::new(
        cache,
        configured_url(),
        FakeFetcher::body(r#"[{"message":"Deadlock"}]"#),
    );

    let rules = harness.default_rules().resolve().await.unwrap();

    assert_eq!(rules, vec![FilterRule::new("Deadlock")]);
    assert_eq!(harness.cache.writes.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_error_page_is_cached_once_and_fetched_once() {
    // A 404 page reaches the source as an ordinary body
    let harness = Harness::new(
        MemoryCache::new(),
        configured_url(),
        FakeFetcher::body("<html>Not Found</html>"),
    );
    let source = harness.default_rules();

    for _ in 0..3 {
        assert!(source.resolve().await.unwrap().is_empty());
    }

    assert_eq!(harness.http.call_count(), 1);
    assert_eq!(harness.cache.writes.load(Ordering::SeqCst), 1);
    let (stored, _) = harness.cache.entry(DEFAULT_RULES_CACHE_KEY).unwrap();
    assert_eq!(stored, b"<html>Not Found</html>");
}
