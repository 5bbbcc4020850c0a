//! App installation and sharing helper.
//!
//! # Responsibility
//! - Track whether the host can install the app and whether it already is.
//! - Drive the host install prompt and the share/copy-link fallback.
//!
//! # Invariants
//! - Independent of the review store and its storage.
//! - Host capabilities are reached only through the traits in `platform`.

mod helper;
pub mod platform;

pub use helper::{InstallHelper, SHARE_COPIED_MESSAGE, SHARE_TEXT, SHARE_TITLE};
pub use platform::{
    DisplayMode, InstallHandle, InstallOutcome, PlatformError, ShareData, ShareHost,
};
