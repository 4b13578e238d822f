use super::*;
use pretty_assertions::assert_eq;

fn private_cache() -> LexerCache {
    LexerCache::new(&LexerOptions::default()).unwrap_or_else(|e| panic!("{e}"))
}

#[test]
fn new_rejects_invalid_options() {
    let options = LexerOptions {
        interner: TwoTierConfig::new(3, 4096, 8),
        ..LexerOptions::default()
    };
    let Err(LexerError::Options(err)) = LexerCache::new(&options) else {
        panic!("a local tier of 3 slots should be rejected");
    };
    assert!(matches!(
        err,
        crate::OptionsError::Cache {
            what: "interner",
            source: CacheError::NotPowerOfTwo { size: 3, .. }
        }
    ));
}

#[test]
fn private_caches_do_not_share_tiers() {
    let a = private_cache();
    let b = private_cache();
    assert!(!a.shares_tiers_with(&b));
    assert!(a.shares_tiers_with(&a.fork()));
}

#[test]
fn shared_caches_use_the_global_tiers() {
    let a = LexerCache::shared();
    let b = LexerCache::shared();
    assert!(a.shares_tiers_with(&b));
    assert!(!a.shares_tiers_with(&private_cache()));
}

#[test]
fn keywords_are_classified_and_cached() {
    let mut cache = private_cache();
    assert_eq!(cache.keyword(b"endobj"), SyntaxKind::EndObjKeyword);
    assert_eq!(cache.keyword(b"endobj"), SyntaxKind::EndObjKeyword);
    assert_eq!(cache.keyword(b"Foo"), SyntaxKind::UnknownKeyword);
    let stats = cache.keyword_stats();
    assert_eq!(stats.misses, 2);
    assert_eq!(stats.local_hits, 1);
}

#[test]
fn fork_sees_keywords_through_the_shared_tier() {
    let mut parent = private_cache();
    parent.keyword(b"trailer");
    let mut child = parent.fork();
    assert_eq!(child.keyword(b"trailer"), SyntaxKind::TrailerKeyword);
    let stats = child.keyword_stats();
    assert_eq!((stats.local_hits, stats.shared_hits, stats.misses), (0, 1, 0));
}

#[test]
fn trivia_nodes_are_reused() {
    let mut cache = private_cache();
    let a = cache.trivia(SyntaxKind::WhitespaceTrivia, b"  ", true);
    let b = cache.trivia(SyntaxKind::WhitespaceTrivia, b"  ", true);
    match (a.as_trivia(), b.as_trivia()) {
        (Some(a), Some(b)) => assert!(Arc::ptr_eq(a, b)),
        other => panic!("expected trivia nodes, got {other:?}"),
    }

    let c = cache.trivia(SyntaxKind::SingleLineCommentTrivia, b"% long", false);
    let d = cache.trivia(SyntaxKind::SingleLineCommentTrivia, b"% long", false);
    assert_eq!(c, d);
    match (c.as_trivia(), d.as_trivia()) {
        (Some(c), Some(d)) => assert!(!Arc::ptr_eq(c, d)),
        other => panic!("expected trivia nodes, got {other:?}"),
    }
}

#[test]
fn token_cache_is_keyed_by_full_text() {
    let mut cache = private_cache();
    let token = Arc::new(GreenToken::new(
        SyntaxKind::NullKeyword,
        Arc::from(&b"null"[..]),
        pdf_syntax::TokenValue::None,
        None,
        None,
    ));
    assert!(cache.cached_token(b"null").is_none());
    cache.cache_token(b"null", &token);
    let hit = cache.cached_token(b"null");
    assert!(hit.is_some_and(|hit| Arc::ptr_eq(&hit, &token)));
    assert!(cache.cached_token(b"null ").is_none());
}

#[test]
fn debug_lists_occupancy() {
    let mut cache = private_cache();
    cache.trivia(SyntaxKind::WhitespaceTrivia, b" ", true);
    let text = format!("{cache:?}");
    assert!(text.starts_with("LexerCache {"), "{text}");
    assert!(text.contains("trivia: 1"), "{text}");
}

#[test]
#[should_panic(expected = "trivia cache returned a different kind")]
fn trivia_hit_with_another_kind_panics() {
    let mut cache = private_cache();
    cache.trivia(SyntaxKind::WhitespaceTrivia, b"%", true);
    cache.trivia(SyntaxKind::SingleLineCommentTrivia, b"%", true);
}

#[test]
fn shared_with_default_sizes_attaches_to_the_global_tiers() {
    let cache = LexerCache::shared_with(&LexerOptions::default()).unwrap_or_else(|e| panic!("{e}"));
    assert!(cache.shares_tiers_with(&LexerCache::shared()));
}

#[test]
fn shared_with_sizes_every_cache_from_the_options() {
    let options = LexerOptions {
        keyword_cache: TwoTierConfig::new(8, 64, 4),
        interner: TwoTierConfig::new(16, 128, 8),
        token_cache_size: 4,
        trivia_cache_size: 2,
        ..LexerOptions::default()
    };
    let cache = LexerCache::shared_with(&options).unwrap_or_else(|e| panic!("{e}"));
    assert_eq!(cache.keyword_config(), options.keyword_cache);
    assert_eq!(cache.interner_config(), options.interner);
    assert_eq!(cache.token_cache_size(), 4);
    assert_eq!(cache.trivia_cache_size(), 2);
    assert!(!cache.shares_tiers_with(&LexerCache::shared()));

    let fork = cache.fork();
    assert!(fork.shares_tiers_with(&cache));
    assert_eq!(fork.keyword_config(), options.keyword_cache);
    assert_eq!(fork.token_cache_size(), 4);
    assert_eq!(fork.trivia_cache_size(), 2);
}

#[test]
fn shared_with_validates_first() {
    let options = LexerOptions {
        token_cache_size: 3,
        ..LexerOptions::default()
    };
    assert!(matches!(
        LexerCache::shared_with(&options),
        Err(LexerError::Options(crate::OptionsError::Cache { what: "token cache", .. }))
    ));
}
