//! Optional cache of scan results.
//!
//! Entries are dropped whenever the file watcher reports a change in the site
//! directory. A scan that overlaps an invalidation is not stored.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;
use trevarn_catalog::{Language, PageEntry};

#[derive(Debug, Default)]
struct CacheInner {
    generation: u64,
    entries: HashMap<Language, Arc<Vec<PageEntry>>>,
}

/// Ordered page lists per language.
#[derive(Debug, Default)]
pub struct ScanCache {
    inner: RwLock<CacheInner>,
}

impl ScanCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current generation. Read it before scanning and pass it to [`insert`].
    ///
    /// [`insert`]: ScanCache::insert
    pub async fn generation(&self) -> u64 {
        self.inner.read().await.generation
    }

    pub async fn get(&self, lang: Language) -> Option<Arc<Vec<PageEntry>>> {
        self.inner.read().await.entries.get(&lang).cloned()
    }

    /// Store a scan taken at `generation`. Returns false if it is already stale.
    pub async fn insert(&self, lang: Language, generation: u64, pages: Arc<Vec<PageEntry>>) -> bool {
        let mut inner = self.inner.write().await;
        if inner.generation != generation {
            return false;
        }
        inner.entries.insert(lang, pages);
        true
    }

    /// Drop every entry.
    pub async fn invalidate(&self) {
        let mut inner = self.inner.write().await;
        inner.generation += 1;
        inner.entries.clear();
    }
}
