use super::platform::{DisplayMode, InstallHandle, InstallOutcome, ShareData, ShareHost};
use log::{error, info};

pub const SHARE_TITLE: &str = "Book Reviews - Relive";
pub const SHARE_TEXT: &str = "Write and manage your book reviews with ease";
pub const SHARE_COPIED_MESSAGE: &str = "Link copied to clipboard!";

/// Install state over two flags and an optional deferred install handle.
pub struct InstallHelper {
    can_install: bool,
    is_installed: bool,
    handle: Option<Box<dyn InstallHandle>>,
}

impl InstallHelper {
    /// Creates the helper and checks the display mode once.
    ///
    /// The display mode is not re-evaluated later.
    pub fn new(display: &dyn DisplayMode) -> Self {
        let mut helper = Self {
            can_install: false,
            is_installed: false,
            handle: None,
        };
        if display.is_standalone() {
            helper.is_installed = true;
            helper.can_install = false;
        }
        helper
    }

    pub fn can_install(&self) -> bool {
        self.can_install
    }

    pub fn is_installed(&self) -> bool {
        self.is_installed
    }

    /// Host signal: installation became possible.
    pub fn on_install_available(&mut self, handle: Box<dyn InstallHandle>) {
        self.handle = Some(handle);
        self.can_install = true;
        info!("event=install_available module=install status=ok");
    }

    /// Host signal: the app was installed, by us or by the host's own UI.
    pub fn on_app_installed(&mut self) {
        self.mark_installed();
        info!("event=app_installed module=install status=ok");
    }

    /// Triggers the host install prompt.
    ///
    /// Returns `true` only when the user accepted. A dismissal or host error
    /// keeps the handle so the prompt can be retried.
    pub fn install_app(&mut self) -> bool {
        let Some(handle) = self.handle.as_mut() else {
            info!("event=install_prompt module=install status=skipped reason=no_handle");
            return false;
        };

        match handle.trigger() {
            Ok(InstallOutcome::Accepted) => {
                info!("event=install_prompt module=install status=ok outcome=accepted");
                self.mark_installed();
                true
            }
            Ok(InstallOutcome::Dismissed) => {
                info!("event=install_prompt module=install status=ok outcome=dismissed");
                false
            }
            Err(err) => {
                error!("event=install_prompt module=install status=error error={err}");
                false
            }
        }
    }

    /// Shares the current page natively, or copies its address as a fallback.
    ///
    /// Native share failures are only logged. The clipboard path always ends
    /// with a confirmation alert.
    pub fn share_app(&self, host: &dyn ShareHost) {
        let url = host.current_url();
        if host.supports_native_share() {
            let data = ShareData {
                title: SHARE_TITLE.to_string(),
                text: SHARE_TEXT.to_string(),
                url,
            };
            if let Err(err) = host.share(&data) {
                error!("event=share module=install status=error mode=native error={err}");
            }
            return;
        }

        if let Err(err) = host.write_clipboard(&url) {
            error!("event=share module=install status=error mode=clipboard error={err}");
        }
        host.alert(SHARE_COPIED_MESSAGE);
    }

    fn mark_installed(&mut self) {
        self.is_installed = true;
        self.can_install = false;
        self.handle = None;
    }
}
