use std::fmt;

use serde::{Deserialize, Serialize};

/// Visual styling class of a notification. Not a logical priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    #[default]
    Info,
    Success,
    Error,
}

impl Severity {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Success => "success",
            Self::Error => "error",
        }
    }

    #[must_use]
    pub const fn css_class(self) -> &'static str {
        match self {
            Self::Info => "notification-info",
            Self::Success => "notification-success",
            Self::Error => "notification-error",
        }
    }

    #[must_use]
    pub const fn background_color(self) -> &'static str {
        match self {
            Self::Info => "#17a2b8",
            Self::Success => "#28a745",
            Self::Error => "#dc3545",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NotificationId(pub u64);

impl fmt::Display for NotificationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "notification-{}", self.0)
    }
}

/// Display phase of a posted notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NotificationPhase {
    /// Entered and fully displayed.
    Visible,
    /// Exit transition running; detached once the transition delay elapses.
    Exiting,
}

/// One transient status message in the notification region.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub id: NotificationId,
    pub message: String,
    pub severity: Severity,
    pub created_at_ms: u64,
    pub phase: NotificationPhase,
}

impl Notification {
    #[must_use]
    pub fn is_exiting(&self) -> bool {
        self.phase == NotificationPhase::Exiting
    }
}
