use std::cell::RefCell;
use std::collections::HashSet;
use std::num::NonZeroUsize;

use lru::LruCache;

use crate::config::MergeConfig;
use crate::fragment::{join_fragments, ClassFragment};

/// Resolves conflicts between utility classes with `tw_merge!`, memoising
/// results in an LRU cache.
pub struct Merger {
    cache: Option<RefCell<LruCache<String, String>>>,
}

impl Default for Merger {
    fn default() -> Self {
        Self::new(MergeConfig::default())
    }
}

impl Merger {
    pub fn new(config: MergeConfig) -> Self {
        let cache = NonZeroUsize::new(config.cache_size)
            .map(|size| RefCell::new(LruCache::new(size)));
        log::debug!("Built class merger, cache size {}", config.cache_size);
        Self { cache }
    }

    pub fn merge(&self, classes: &str) -> String {
        let Some(cache) = &self.cache else {
            return merge_uncached(classes);
        };
        if let Some(hit) = cache.borrow_mut().get(classes) {
            return hit.clone();
        }
        log::trace!("Merge cache miss: {:?}", classes);
        let merged = merge_uncached(classes);
        cache.borrow_mut().put(classes.to_string(), merged.clone());
        merged
    }

    pub fn merge_fragments(&self, fragments: &[ClassFragment]) -> String {
        self.merge(&join_fragments(fragments))
    }
}

// Repeated tokens collapse to their last occurrence first, so classes
// tw_merge does not recognise also appear once.
fn merge_uncached(classes: &str) -> String {
    let mut seen = HashSet::new();
    let mut unique: Vec<&str> = classes
        .split_whitespace()
        .rev()
        .filter(|token| seen.insert(*token))
        .collect();
    if unique.is_empty() {
        return String::new();
    }
    unique.reverse();

    let joined = unique.join(" ");
    ::tw_merge::tw_merge!(joined)
}

thread_local! {
    static DEFAULT_MERGER: Merger = Merger::default();
}

/// Merges a class list through the default cache.
pub fn tw_merge(classes: &str) -> String {
    DEFAULT_MERGER.with(|merger| merger.merge(classes))
}

/// Flattens class fragments and resolves conflicts between them.
pub fn cn(fragments: &[ClassFragment]) -> String {
    tw_merge(&join_fragments(fragments))
}
