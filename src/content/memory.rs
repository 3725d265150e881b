//! In-memory content lookup.

use std::convert::Infallible;

use rustc_hash::FxHashMap;

use super::{ContentLookup, ContentRecord};

/// Slug → record map. Never fails.
#[derive(Debug, Clone, Default)]
pub struct MemoryLookup {
    records: FxHashMap<String, ContentRecord>,
}

impl MemoryLookup {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add (or replace) the record for `slug`.
    pub fn with(mut self, slug: impl Into<String>, record: ContentRecord) -> Self {
        self.insert(slug, record);
        self
    }

    pub fn insert(&mut self, slug: impl Into<String>, record: ContentRecord) -> Option<ContentRecord> {
        self.records.insert(slug.into(), record)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl FromIterator<(String, ContentRecord)> for MemoryLookup {
    fn from_iter<I: IntoIterator<Item = (String, ContentRecord)>>(iter: I) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}

impl ContentLookup for MemoryLookup {
    type Error = Infallible;

    async fn fetch(&self, slug: &str) -> Result<Option<ContentRecord>, Self::Error> {
        Ok(self.records.get(slug).cloned())
    }
}
