//! Review repository contract and local-storage implementation.
//!
//! # Invariants
//! - `add` appends; collection order is insertion order.
//! - `update` replaces in place and keeps the record's position.
//! - Ids are matched exactly; no normalization.

use crate::model::review::{BookReview, ReviewId};
use crate::storage::{KeyValueStore, ReviewStorage};
use log::debug;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for record-level operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepoError {
    NotFound(ReviewId),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound(id) => write!(f, "review not found: {id}"),
        }
    }
}

impl Error for RepoError {}

/// Record-level access to the review collection.
pub trait ReviewRepository {
    fn get_all(&self) -> Vec<BookReview>;
    fn add(&self, review: &BookReview);
    fn update(&self, review: &BookReview) -> RepoResult<()>;
    fn delete(&self, id: &str) -> RepoResult<()>;
    fn get(&self, id: &str) -> Option<BookReview>;
}

/// Repository backed by one key-value slot.
pub struct LocalReviewRepository<S: KeyValueStore> {
    storage: ReviewStorage<S>,
}

impl<S: KeyValueStore> LocalReviewRepository<S> {
    pub fn new(store: S) -> Self {
        Self {
            storage: ReviewStorage::new(store),
        }
    }
}

impl<S: KeyValueStore> ReviewRepository for LocalReviewRepository<S> {
    fn get_all(&self) -> Vec<BookReview> {
        self.storage.load()
    }

    fn add(&self, review: &BookReview) {
        let mut reviews = self.storage.load();
        reviews.push(review.clone());
        self.storage.save(&reviews);
    }

    fn update(&self, review: &BookReview) -> RepoResult<()> {
        let mut reviews = self.storage.load();
        let Some(slot) = reviews.iter_mut().find(|existing| existing.id == review.id) else {
            debug!("event=review_update module=repo status=not_found");
            return Err(RepoError::NotFound(review.id.clone()));
        };
        *slot = review.clone();
        self.storage.save(&reviews);
        Ok(())
    }

    fn delete(&self, id: &str) -> RepoResult<()> {
        let mut reviews = self.storage.load();
        let before = reviews.len();
        reviews.retain(|existing| existing.id != id);
        if reviews.len() == before {
            debug!("event=review_delete module=repo status=not_found");
            return Err(RepoError::NotFound(id.to_string()));
        }
        self.storage.save(&reviews);
        Ok(())
    }

    fn get(&self, id: &str) -> Option<BookReview> {
        self.storage
            .load()
            .into_iter()
            .find(|existing| existing.id == id)
    }
}
