//! Review store: cached collection plus mutation use-cases.
//!
//! # Responsibility
//! - Hold the last-loaded review snapshot, a loading flag and the last error.
//! - Create, update and delete records through a `ReviewRepository`.
//! - Serve lookups, search and aggregates from the snapshot.
//!
//! # Invariants
//! - `is_loading` is reset when an operation ends, whether it failed or not.
//! - Every failed operation leaves its message in `error`; every new
//!   operation clears it first.
//! - After a successful mutation the snapshot is re-read from the repository.
//! - A failed mutation leaves the snapshot untouched.

use crate::model::review::{
    BookReview, CreateReviewRequest, ReviewFilters, ReviewId, ReviewValidationError,
    UpdateReviewRequest,
};
use crate::repo::review_repo::{RepoError, ReviewRepository};
use crate::store::clock::{generate_review_id, next_update_timestamp, Clock, SystemClock};
use crate::store::query::{average_rating, collect_tags, filter_reviews};
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::time::Instant;

pub type StoreResult<T> = Result<T, StoreError>;

/// Store-level failure surfaced to callers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    Validation(ReviewValidationError),
    NotFound(ReviewId),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::NotFound(_) => write!(f, "Review not found"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::NotFound(_) => None,
        }
    }
}

impl From<ReviewValidationError> for StoreError {
    fn from(value: ReviewValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<RepoError> for StoreError {
    fn from(value: RepoError) -> Self {
        match value {
            RepoError::NotFound(id) => Self::NotFound(id),
        }
    }
}

/// Explicitly constructed review store; pass it by reference to each view.
pub struct ReviewStore<R: ReviewRepository, C: Clock = SystemClock> {
    repo: R,
    clock: C,
    reviews: Vec<BookReview>,
    is_loading: bool,
    error: Option<String>,
}

impl<R: ReviewRepository> ReviewStore<R> {
    /// Creates an empty store using wall-clock time. Call `load_reviews` to fill it.
    pub fn new(repo: R) -> Self {
        Self::with_clock(repo, SystemClock)
    }
}

impl<R: ReviewRepository, C: Clock> ReviewStore<R, C> {
    pub fn with_clock(repo: R, clock: C) -> Self {
        Self {
            repo,
            clock,
            reviews: Vec::new(),
            is_loading: false,
            error: None,
        }
    }

    /// Current snapshot in collection order.
    pub fn reviews(&self) -> &[BookReview] {
        &self.reviews
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    /// Message of the last failed operation, if any.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn total_reviews(&self) -> usize {
        self.reviews.len()
    }

    /// Mean rating rounded to one decimal place; `0.0` when empty.
    pub fn average_rating(&self) -> f64 {
        average_rating(&self.reviews)
    }

    /// Distinct tags used across the snapshot, sorted.
    pub fn all_tags(&self) -> Vec<String> {
        collect_tags(&self.reviews)
    }

    /// Replaces the snapshot with the repository's current collection.
    pub fn load_reviews(&mut self) {
        let _ = self.run("load", |store| {
            store.refresh();
            Ok(())
        });
    }

    /// Creates a record with a fresh id and both timestamps set to now.
    ///
    /// # Errors
    /// - `StoreError::Validation` when title or author is blank.
    pub fn add_review(&mut self, request: CreateReviewRequest) -> StoreResult<BookReview> {
        self.run("add", move |store| {
            let now = store.clock.now();
            let review = BookReview::from_request(generate_review_id(now), request, now);
            review.validate()?;
            store.repo.add(&review);
            store.refresh();
            Ok(review)
        })
    }

    /// Merges `request` onto the stored record and stamps `updated_at`.
    ///
    /// The record is looked up in the repository, not the snapshot.
    ///
    /// # Errors
    /// - `StoreError::NotFound` when no record has `request.id`.
    /// - `StoreError::Validation` when the merged record has a blank title or author.
    pub fn update_review(&mut self, request: &UpdateReviewRequest) -> StoreResult<BookReview> {
        self.run("update", |store| {
            let existing = store
                .repo
                .get(&request.id)
                .ok_or_else(|| StoreError::NotFound(request.id.clone()))?;

            let mut updated = existing.clone();
            updated.apply_update(request);
            updated.validate()?;
            updated.updated_at = next_update_timestamp(existing.updated_at, store.clock.now());

            store.repo.update(&updated)?;
            store.refresh();
            Ok(updated)
        })
    }

    /// Removes a record. A missing id is not an error.
    pub fn delete_review(&mut self, id: &str) {
        let _ = self.run("delete", |store| {
            match store.repo.delete(id) {
                Ok(()) => {}
                Err(RepoError::NotFound(_)) => {
                    info!("event=review_delete module=store status=noop reason=not_found");
                }
            }
            store.refresh();
            Ok(())
        });
    }

    /// Looks up a record in the snapshot only.
    pub fn get_review(&self, id: &str) -> Option<&BookReview> {
        self.reviews.iter().find(|review| review.id == id)
    }

    /// Filters the snapshot without touching it.
    pub fn search_reviews(&self, filters: &ReviewFilters) -> Vec<BookReview> {
        filter_reviews(&self.reviews, filters)
    }

    fn refresh(&mut self) {
        self.reviews = self.repo.get_all();
    }

    fn run<T>(
        &mut self,
        operation: &'static str,
        body: impl FnOnce(&mut Self) -> StoreResult<T>,
    ) -> StoreResult<T> {
        let started_at = Instant::now();
        self.is_loading = true;
        self.error = None;

        let result = body(self);

        self.is_loading = false;
        match &result {
            Ok(_) => info!(
                "event=store_{operation} module=store status=ok count={} duration_ms={}",
                self.reviews.len(),
                started_at.elapsed().as_millis()
            ),
            Err(err) => {
                warn!(
                    "event=store_{operation} module=store status=error duration_ms={} error={err}",
                    started_at.elapsed().as_millis()
                );
                self.error = Some(err.to_string());
            }
        }
        result
    }
}
