//! Domain model for book review journaling.
//!
//! # Responsibility
//! - Define the persisted `BookReview` record and its request shapes.
//! - Keep wire naming (camelCase JSON) in one place.
//!
//! # Invariants
//! - Every record is identified by an immutable `ReviewId`.
//! - Deletion is a hard delete; there are no tombstones.

pub mod review;
