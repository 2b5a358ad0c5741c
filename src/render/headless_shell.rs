use crate::error::{EnhancerError, EnhancerResult};

use super::{NotificationPermission, PageShell};

/// In-memory page shell used by tests and headless hosts.
///
/// It tracks fullscreen status and counts side effects so callers can assert
/// on them without a browser.
#[derive(Debug, Default)]
pub struct HeadlessShell {
    fullscreen: bool,
    fullscreen_unsupported: bool,
    notification_permission: NotificationPermission,
    pub reload_count: usize,
    pub fullscreen_requests: usize,
    pub fullscreen_exits: usize,
}

impl HeadlessShell {
    /// A shell whose fullscreen API is unavailable.
    #[must_use]
    pub fn without_fullscreen() -> Self {
        Self {
            fullscreen_unsupported: true,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_notification_permission(mut self, permission: NotificationPermission) -> Self {
        self.notification_permission = permission;
        self
    }

    /// Simulates the user leaving fullscreen through browser chrome (Esc).
    pub fn set_fullscreen(&mut self, fullscreen: bool) {
        self.fullscreen = fullscreen;
    }
}

impl PageShell for HeadlessShell {
    fn is_fullscreen(&self) -> bool {
        self.fullscreen
    }

    fn request_fullscreen(&mut self) -> EnhancerResult<()> {
        self.fullscreen_requests += 1;
        if self.fullscreen_unsupported {
            return Err(EnhancerError::UnsupportedCapability {
                capability: "fullscreen",
            });
        }
        self.fullscreen = true;
        Ok(())
    }

    fn exit_fullscreen(&mut self) -> EnhancerResult<()> {
        self.fullscreen_exits += 1;
        if self.fullscreen_unsupported {
            return Err(EnhancerError::UnsupportedCapability {
                capability: "fullscreen",
            });
        }
        self.fullscreen = false;
        Ok(())
    }

    fn reload(&mut self) {
        self.reload_count += 1;
    }

    fn notification_permission(&self) -> NotificationPermission {
        self.notification_permission
    }
}
