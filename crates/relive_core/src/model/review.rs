//! Book review domain model.
//!
//! # Responsibility
//! - Define the canonical record persisted in the review collection.
//! - Define create/update request shapes and the merge rule between them.
//! - Provide validation for display fields.
//!
//! # Invariants
//! - `id` is assigned once at creation and never changes.
//! - `created_at` is set once; `updated_at` moves forward on every update.
//! - `read_date` is an opaque, lexicographically comparable string.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Opaque record identifier.
pub type ReviewId = String;

/// Canonical persisted book review.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookReview {
    pub id: ReviewId,
    pub title: String,
    pub author: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub isbn: Option<String>,
    /// Observed range is 1..=5; not enforced here.
    pub rating: f64,
    pub review: String,
    pub summary: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub favorite_quote: Option<String>,
    /// Order preserved, duplicates kept.
    #[serde(default)]
    pub tags: Vec<String>,
    pub read_date: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl BookReview {
    /// Builds a new record from a create request.
    ///
    /// Both timestamps are set to `now`.
    pub fn from_request(id: ReviewId, request: CreateReviewRequest, now: DateTime<Utc>) -> Self {
        Self {
            id,
            title: request.title,
            author: request.author,
            isbn: request.isbn,
            rating: request.rating,
            review: request.review,
            summary: request.summary,
            favorite_quote: request.favorite_quote,
            tags: request.tags,
            read_date: request.read_date,
            created_at: now,
            updated_at: now,
        }
    }

    /// Overwrites every field present in `request`.
    ///
    /// `id`, `created_at` and `updated_at` are never touched here.
    pub fn apply_update(&mut self, request: &UpdateReviewRequest) {
        if let Some(title) = &request.title {
            self.title = title.clone();
        }
        if let Some(author) = &request.author {
            self.author = author.clone();
        }
        if let Some(isbn) = &request.isbn {
            self.isbn = isbn.clone();
        }
        if let Some(rating) = request.rating {
            self.rating = rating;
        }
        if let Some(review) = &request.review {
            self.review = review.clone();
        }
        if let Some(summary) = &request.summary {
            self.summary = summary.clone();
        }
        if let Some(quote) = &request.favorite_quote {
            self.favorite_quote = quote.clone();
        }
        if let Some(tags) = &request.tags {
            self.tags = tags.clone();
        }
        if let Some(read_date) = &request.read_date {
            self.read_date = read_date.clone();
        }
    }

    /// Validates display fields before persistence.
    ///
    /// # Errors
    /// - `EmptyTitle` when `title` is blank after trimming.
    /// - `EmptyAuthor` when `author` is blank after trimming.
    pub fn validate(&self) -> Result<(), ReviewValidationError> {
        if self.title.trim().is_empty() {
            return Err(ReviewValidationError::EmptyTitle);
        }
        if self.author.trim().is_empty() {
            return Err(ReviewValidationError::EmptyAuthor);
        }
        Ok(())
    }
}

/// Input for creating a review. Identity and timestamps are assigned by the store.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateReviewRequest {
    pub title: String,
    pub author: String,
    #[serde(default)]
    pub isbn: Option<String>,
    pub rating: f64,
    pub review: String,
    pub summary: String,
    #[serde(default)]
    pub favorite_quote: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    pub read_date: String,
}

/// Partial update keyed by `id`.
///
/// `None` keeps the existing value. For optional record fields, `Some(None)`
/// clears the value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateReviewRequest {
    pub id: ReviewId,
    pub title: Option<String>,
    pub author: Option<String>,
    pub isbn: Option<Option<String>>,
    pub rating: Option<f64>,
    pub review: Option<String>,
    pub summary: Option<String>,
    pub favorite_quote: Option<Option<String>>,
    pub tags: Option<Vec<String>>,
    pub read_date: Option<String>,
}

impl UpdateReviewRequest {
    /// Creates an update that changes nothing yet.
    pub fn new(id: impl Into<ReviewId>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }
}

/// Filter set for in-memory review search. Fields combine with AND.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReviewFilters {
    /// Case-insensitive substring over title, author and review body.
    pub search: Option<String>,
    /// Minimum rating, inclusive.
    pub rating: Option<f64>,
    /// Matches when any tag overlaps.
    pub tags: Option<Vec<String>>,
    /// Inclusive lower bound on `read_date`.
    pub date_from: Option<String>,
    /// Inclusive upper bound on `read_date`.
    pub date_to: Option<String>,
}

/// Validation errors for display fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReviewValidationError {
    EmptyTitle,
    EmptyAuthor,
}

impl Display for ReviewValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyTitle => write!(f, "title must not be empty"),
            Self::EmptyAuthor => write!(f, "author must not be empty"),
        }
    }
}

impl Error for ReviewValidationError {}
