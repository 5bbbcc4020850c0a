//! Narrow host capability contracts consumed by `InstallHelper`.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// User decision reported by the host install prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstallOutcome {
    Accepted,
    Dismissed,
}

/// Failure reported by a host capability.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlatformError {
    /// The capability exists but the host rejected the call.
    Rejected(String),
    /// The capability is missing on this host.
    Unavailable(&'static str),
}

impl Display for PlatformError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Rejected(message) => write!(f, "host rejected request: {message}"),
            Self::Unavailable(capability) => write!(f, "host capability unavailable: {capability}"),
        }
    }
}

impl Error for PlatformError {}

/// Deferred installation capability handed over when the host signals that
/// installing is possible.
pub trait InstallHandle {
    /// Shows the host install UI and waits for the user's choice.
    fn trigger(&mut self) -> Result<InstallOutcome, PlatformError>;
}

/// Startup query for the host display context.
pub trait DisplayMode {
    /// `true` when already running as an installed, standalone app.
    fn is_standalone(&self) -> bool;
}

/// Payload for a native share sheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareData {
    pub title: String,
    pub text: String,
    pub url: String,
}

/// Host sharing capabilities.
pub trait ShareHost {
    /// Address of the current page.
    fn current_url(&self) -> String;
    fn supports_native_share(&self) -> bool;
    fn share(&self, data: &ShareData) -> Result<(), PlatformError>;
    fn write_clipboard(&self, text: &str) -> Result<(), PlatformError>;
    /// Shows a blocking confirmation message.
    fn alert(&self, message: &str);
}
