//! In-memory review store and its supporting pieces.
//!
//! # Responsibility
//! - Cache the review collection for views and expose derived values.
//! - Orchestrate repository mutations and refresh the cache after each one.
//! - Generate record ids and timestamps.
//!
//! # Invariants
//! - The cache is only ever replaced by a fresh repository read, never patched.
//! - Search and aggregates are pure functions of the cache.

pub mod clock;
pub mod query;
pub mod review_store;
