//! Caches owned by one lexer at a time.
//!
//! A [`LexerCache`] bundles the keyword cache, the byte interner, and the
//! token and trivia caches. The keyword cache and the interner are two-tier:
//! their shared tiers can be reused by many caches (one per thread), while
//! the local tiers and the single-tier token and trivia caches belong to
//! this context alone.
//!
//! [`LexerCache::shared`] and [`LexerCache::shared_with`] attach to the
//! process-wide shared tiers, which are built on first use and live for the
//! rest of the process.

use std::sync::{Arc, OnceLock};

use pdf_cache::{ByteInterner, CacheError, CacheStats, FixedCache, SharedTier, TwoTierCache, TwoTierConfig};
use pdf_syntax::{GreenNode, GreenToken, GreenTrivia, SyntaxKind};
use tracing::debug;

use crate::{keywords, LexerError, LexerOptions};

type KeywordTier = SharedTier<Arc<[u8]>, SyntaxKind>;
type InternTier = SharedTier<Arc<[u8]>, Arc<[u8]>>;

fn global_keyword_tier() -> &'static Arc<KeywordTier> {
    static TIER: OnceLock<Arc<KeywordTier>> = OnceLock::new();
    TIER.get_or_init(|| Arc::new(shared_tier(LexerOptions::default().keyword_cache)))
}

fn global_intern_tier() -> &'static Arc<InternTier> {
    static TIER: OnceLock<Arc<InternTier>> = OnceLock::new();
    TIER.get_or_init(|| Arc::new(shared_tier(LexerOptions::default().interner)))
}

fn shared_tier<K, V>(config: TwoTierConfig) -> SharedTier<K, V> {
    SharedTier::new(config)
        .unwrap_or_else(|e| panic!("default shared tier sizes are invalid: {e}"))
}

pub struct LexerCache {
    keywords: TwoTierCache<Arc<[u8]>, SyntaxKind>,
    pub(crate) interner: ByteInterner,
    tokens: FixedCache<Arc<[u8]>, Arc<GreenToken>>,
    trivia: FixedCache<Arc<[u8]>, GreenNode>,
    token_cache_size: usize,
    trivia_cache_size: usize,
}

impl LexerCache {
    /// A context with private shared tiers sized by `options`.
    pub fn new(options: &LexerOptions) -> Result<Self, LexerError> {
        options.validate()?;
        debug!(
            keyword_cache = ?options.keyword_cache,
            interner = ?options.interner,
            token_cache = options.token_cache_size,
            trivia_cache = options.trivia_cache_size,
            "creating lexer cache"
        );
        Ok(LexerCache {
            keywords: TwoTierCache::new(options.keyword_cache)?,
            interner: ByteInterner::new(options.interner)?,
            tokens: FixedCache::new(options.token_cache_size)?,
            trivia: FixedCache::new(options.trivia_cache_size)?,
            token_cache_size: options.token_cache_size,
            trivia_cache_size: options.trivia_cache_size,
        })
    }

    /// A context over the process-wide shared tiers, with default local
    /// sizes.
    pub fn shared() -> Self {
        let options = LexerOptions::default();
        Self::from_tiers(
            Arc::clone(global_keyword_tier()),
            Arc::clone(global_intern_tier()),
            &options,
        )
    }

    /// A context sized by `options`.
    ///
    /// A two-tier configuration equal to the process-wide one attaches to
    /// the global tier; any other configuration gets a new tier of its own,
    /// which [`fork`](Self::fork)s of the result keep sharing.
    pub fn shared_with(options: &LexerOptions) -> Result<Self, LexerError> {
        options.validate()?;
        let keywords = tier_for(global_keyword_tier(), options.keyword_cache)?;
        let interner = tier_for(global_intern_tier(), options.interner)?;
        debug!(
            global_keywords = Arc::ptr_eq(&keywords, global_keyword_tier()),
            global_interner = Arc::ptr_eq(&interner, global_intern_tier()),
            token_cache = options.token_cache_size,
            trivia_cache = options.trivia_cache_size,
            "creating lexer cache"
        );
        Ok(Self::from_tiers(keywords, interner, options))
    }

    fn from_tiers(keywords: Arc<KeywordTier>, interner: Arc<InternTier>, options: &LexerOptions) -> Self {
        LexerCache {
            keywords: TwoTierCache::attach(keywords),
            interner: ByteInterner::attach(interner),
            tokens: fixed_cache(options.token_cache_size),
            trivia: fixed_cache(options.trivia_cache_size),
            token_cache_size: options.token_cache_size,
            trivia_cache_size: options.trivia_cache_size,
        }
    }

    /// A context over the same shared tiers with empty local state.
    #[must_use]
    pub fn fork(&self) -> Self {
        LexerCache {
            keywords: self.keywords.fork(),
            interner: self.interner.fork(),
            tokens: fixed_cache(self.token_cache_size),
            trivia: fixed_cache(self.trivia_cache_size),
            token_cache_size: self.token_cache_size,
            trivia_cache_size: self.trivia_cache_size,
        }
    }

    /// Whether both contexts read and write the same shared tiers.
    pub fn shares_tiers_with(&self, other: &LexerCache) -> bool {
        self.keywords.shares_tier_with(&other.keywords)
            && Arc::ptr_eq(self.interner.shared(), other.interner.shared())
    }

    pub fn token_cache_size(&self) -> usize {
        self.token_cache_size
    }

    pub fn trivia_cache_size(&self) -> usize {
        self.trivia_cache_size
    }

    /// Sizes of the keyword cache tiers.
    pub fn keyword_config(&self) -> TwoTierConfig {
        self.keywords.shared().config()
    }

    /// Sizes of the interner tiers.
    pub fn interner_config(&self) -> TwoTierConfig {
        self.interner.shared().config()
    }

    pub fn keyword_stats(&self) -> CacheStats {
        self.keywords.stats()
    }

    pub fn interner_stats(&self) -> CacheStats {
        self.interner.stats()
    }

    /// Classify a run of letters, consulting the keyword cache first.
    pub(crate) fn keyword(&mut self, text: &[u8]) -> SyntaxKind {
        self.keywords
            .get_or_add(text, |text| (Arc::from(text), keywords::lookup(text)))
    }

    /// A previously built token with exactly this full text.
    pub(crate) fn cached_token(&self, full_text: &[u8]) -> Option<Arc<GreenToken>> {
        self.tokens.try_get(full_text).cloned()
    }

    pub(crate) fn cache_token(&mut self, full_text: &[u8], token: &Arc<GreenToken>) {
        self.tokens.add(Arc::from(full_text), Arc::clone(token));
    }

    /// The trivia node for `text`, building and caching it on a miss.
    pub(crate) fn trivia(&mut self, kind: SyntaxKind, text: &[u8], cacheable: bool) -> GreenNode {
        if let Some(node) = self.trivia.try_get(text) {
            assert_eq!(node.kind(), kind, "trivia cache returned a different kind");
            return node.clone();
        }
        let text: Arc<[u8]> = Arc::from(text);
        let node = GreenNode::from(GreenTrivia::new(kind, Arc::clone(&text)));
        if cacheable {
            self.trivia.add(text, node.clone());
        }
        node
    }
}

/// The global tier when `config` matches it, otherwise a new tier.
fn tier_for<K, V>(
    global: &Arc<SharedTier<K, V>>,
    config: TwoTierConfig,
) -> Result<Arc<SharedTier<K, V>>, CacheError> {
    if global.config() == config {
        Ok(Arc::clone(global))
    } else {
        SharedTier::new(config).map(Arc::new)
    }
}

/// Sizes carried by an existing context were validated when it was built.
fn fixed_cache<K: std::hash::Hash + Eq, V>(size: usize) -> FixedCache<K, V> {
    FixedCache::new(size).unwrap_or_else(|e| panic!("validated cache size rejected: {e}"))
}

impl std::fmt::Debug for LexerCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LexerCache")
            .field("keywords", &self.keywords.stats())
            .field("interner", &self.interner.stats())
            .field("tokens", &self.tokens.occupied())
            .field("trivia", &self.trivia.occupied())
            .finish()
    }
}

#[cfg(test)]
mod tests;
