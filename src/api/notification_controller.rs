use tracing::trace;

use crate::core::{Notification, NotificationId, NotificationPhase, Severity};
use crate::persistence::SettingsStorage;
use crate::render::PageShell;

use super::{DashboardEnhancer, timer_dispatch::ScheduledTask};

impl<S: SettingsStorage, P: PageShell> DashboardEnhancer<S, P> {
    /// Appends a notification to the region and arms its removal timer.
    ///
    /// Every notification has its own lifetime: it starts exiting
    /// `notification_display_ms` after insertion and is detached
    /// `notification_exit_ms` later. There is no cap on how many coexist and
    /// no early dismissal.
    pub fn post_notification(
        &mut self,
        message: impl Into<String>,
        severity: Severity,
    ) -> NotificationId {
        let region = &mut self.core.notifications;
        let id = NotificationId(region.next_id);
        region.next_id += 1;

        let notification = Notification {
            id,
            message: message.into(),
            severity,
            created_at_ms: self.core.now_ms,
            phase: NotificationPhase::Visible,
        };
        trace!(
            id = id.0,
            severity = severity.as_str(),
            message = %notification.message,
            "post notification"
        );
        region.entries.insert(id, notification);

        let display_ms = self.core.config.notification_display_ms;
        self.schedule_after(display_ms, ScheduledTask::NotificationExit(id));
        id
    }

    /// Posts an info-level notification.
    pub fn notify(&mut self, message: impl Into<String>) -> NotificationId {
        self.post_notification(message, Severity::Info)
    }

    /// Notifications still attached to the region, in display order.
    pub fn notifications(&self) -> impl Iterator<Item = &Notification> {
        self.core.notifications.entries.values()
    }

    #[must_use]
    pub fn notification(&self, id: NotificationId) -> Option<&Notification> {
        self.core.notifications.entries.get(&id)
    }

    #[must_use]
    pub fn notification_count(&self) -> usize {
        self.core.notifications.entries.len()
    }

    pub(super) fn begin_notification_exit(&mut self, id: NotificationId) {
        let Some(notification) = self.core.notifications.entries.get_mut(&id) else {
            trace!(id = id.0, "exit requested for detached notification");
            return;
        };
        notification.phase = NotificationPhase::Exiting;
        let exit_ms = self.core.config.notification_exit_ms;
        self.schedule_after(exit_ms, ScheduledTask::NotificationDetach(id));
    }

    pub(super) fn detach_notification(&mut self, id: NotificationId) {
        if self.core.notifications.entries.shift_remove(&id).is_some() {
            trace!(id = id.0, "detached notification");
        }
    }
}
