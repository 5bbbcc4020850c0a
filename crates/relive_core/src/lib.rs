//! Core domain logic for Relive, a local book review journal.
//! This crate owns persistence, the review store and the install/share helper.

pub mod db;
pub mod install;
pub mod logging;
pub mod model;
pub mod repo;
pub mod storage;
pub mod store;

pub use install::{
    DisplayMode, InstallHandle, InstallHelper, InstallOutcome, PlatformError, ShareData, ShareHost,
};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::review::{
    BookReview, CreateReviewRequest, ReviewFilters, ReviewId, ReviewValidationError,
    UpdateReviewRequest,
};
pub use repo::review_repo::{LocalReviewRepository, RepoError, RepoResult, ReviewRepository};
pub use storage::{
    KeyValueStore, MemoryKeyValueStore, ReviewStorage, SqliteKeyValueStore, StorageError,
    StorageResult, REVIEWS_STORAGE_KEY,
};
pub use store::clock::{Clock, SystemClock};
pub use store::review_store::{ReviewStore, StoreError, StoreResult};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
