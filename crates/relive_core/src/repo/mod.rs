//! Repository layer over the review persistence adapter.
//!
//! # Responsibility
//! - Offer record-level operations on top of whole-collection load/save.
//! - Report missing records as semantic errors (`NotFound`).
//!
//! # Invariants
//! - Every call re-reads the full collection; mutations write it back whole.
//! - A mutation that finds nothing to change writes nothing.

pub mod review_repo;
