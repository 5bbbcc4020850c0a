//! Whole-collection persistence for book reviews.
//!
//! # Responsibility
//! - Serialize the full review collection as one JSON array under a fixed key.
//! - Absorb storage and parse failures so callers always get a collection.
//!
//! # Invariants
//! - `load` never fails: missing, unreadable or corrupt data loads as empty.
//! - `save` never fails: write errors are logged and dropped, without retry.
//! - Array order is insertion order; there is no secondary index.
//! - Log lines carry counts and sizes only, never review content.

use super::KeyValueStore;
use crate::model::review::BookReview;
use log::{debug, error};

/// Storage key holding the serialized review collection.
pub const REVIEWS_STORAGE_KEY: &str = "book_reviews";

/// Adapter between the review collection and a host key-value store.
pub struct ReviewStorage<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> ReviewStorage<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Reads the full collection.
    pub fn load(&self) -> Vec<BookReview> {
        let raw = match self.store.get_item(REVIEWS_STORAGE_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(err) => {
                error!(
                    "event=reviews_load module=storage status=error error_code=storage_read_failed error={err}"
                );
                return Vec::new();
            }
        };

        match serde_json::from_str::<Vec<BookReview>>(&raw) {
            Ok(reviews) => {
                debug!(
                    "event=reviews_load module=storage status=ok count={} bytes={}",
                    reviews.len(),
                    raw.len()
                );
                reviews
            }
            Err(err) => {
                error!(
                    "event=reviews_load module=storage status=error error_code=parse_failed bytes={} line={} column={}",
                    raw.len(),
                    err.line(),
                    err.column()
                );
                Vec::new()
            }
        }
    }

    /// Replaces the stored collection with `reviews`.
    pub fn save(&self, reviews: &[BookReview]) {
        let raw = match serde_json::to_string(reviews) {
            Ok(raw) => raw,
            Err(err) => {
                error!(
                    "event=reviews_save module=storage status=error error_code=serialize_failed error={err}"
                );
                return;
            }
        };

        match self.store.set_item(REVIEWS_STORAGE_KEY, &raw) {
            Ok(()) => debug!(
                "event=reviews_save module=storage status=ok count={} bytes={}",
                reviews.len(),
                raw.len()
            ),
            Err(err) => error!(
                "event=reviews_save module=storage status=error error_code=storage_write_failed count={} error={err}",
                reviews.len()
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{ReviewStorage, REVIEWS_STORAGE_KEY};
    use crate::model::review::{BookReview, CreateReviewRequest};
    use crate::storage::{KeyValueStore, MemoryKeyValueStore};
    use chrono::{TimeZone, Utc};

    fn review(id: &str, title: &str) -> BookReview {
        let now = Utc.with_ymd_and_hms(2024, 3, 1, 8, 0, 0).unwrap();
        BookReview::from_request(
            id.to_string(),
            CreateReviewRequest {
                title: title.to_string(),
                author: "Author".to_string(),
                rating: 4.0,
                read_date: "2024-02-28".to_string(),
                ..CreateReviewRequest::default()
            },
            now,
        )
    }

    #[test]
    fn missing_key_loads_empty() {
        let storage = ReviewStorage::new(MemoryKeyValueStore::new());
        assert!(storage.load().is_empty());
    }

    #[test]
    fn save_then_load_preserves_order_and_fields() {
        let storage = ReviewStorage::new(MemoryKeyValueStore::new());
        let mut first = review("b", "Second by id, first by insertion");
        first.isbn = Some("123".to_string());
        first.tags = vec!["x".to_string(), "x".to_string()];
        let reviews = vec![first, review("a", "Later")];

        storage.save(&reviews);
        assert_eq!(storage.load(), reviews);
    }

    #[test]
    fn corrupt_blob_loads_empty() {
        let kv = MemoryKeyValueStore::new();
        kv.set_item(REVIEWS_STORAGE_KEY, "{not json").unwrap();
        let storage = ReviewStorage::new(&kv);
        assert!(storage.load().is_empty());
    }

    #[test]
    fn failed_write_is_swallowed_and_keeps_previous_blob() {
        let kv = MemoryKeyValueStore::with_quota(512);
        let storage = ReviewStorage::new(&kv);
        storage.save(&[review("a", "Fits")]);

        let oversized: Vec<BookReview> = (0..20)
            .map(|index| review(&format!("id-{index}"), "Too many"))
            .collect();
        storage.save(&oversized);

        let loaded = storage.load();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].title, "Fits");
    }
}
