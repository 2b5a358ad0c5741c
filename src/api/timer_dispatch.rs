use tracing::trace;

use crate::core::NotificationId;
use crate::error::{EnhancerError, EnhancerResult};
use crate::persistence::SettingsStorage;
use crate::render::PageShell;

use super::DashboardEnhancer;

/// Deferred work armed by the enhancer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum ScheduledTask {
    NotificationExit(NotificationId),
    NotificationDetach(NotificationId),
    LivenessRefresh,
    RefreshCompleted,
    ExportCompleted,
    AutomationConnected,
}

impl<S: SettingsStorage, P: PageShell> DashboardEnhancer<S, P> {
    /// Arms `task` to fire `delay_ms` from now. A due time past the end of
    /// the clock can never be reached, so such a task is dropped.
    pub(super) fn schedule_after(&mut self, delay_ms: u64, task: ScheduledTask) {
        let Some(due_ms) = self.core.now_ms.checked_add(delay_ms) else {
            trace!(now_ms = self.core.now_ms, delay_ms, ?task, "timer beyond clock range dropped");
            return;
        };
        self.core.timers.schedule(due_ms, task);
    }

    /// Advances the virtual clock by `elapsed_ms`, firing every timer that
    /// comes due. Returns the number of timers fired.
    pub fn advance_by(&mut self, elapsed_ms: u64) -> usize {
        let target_ms = self.core.now_ms.saturating_add(elapsed_ms);
        self.run_timers_until(target_ms)
    }

    /// Advances the virtual clock to the absolute time `now_ms`.
    pub fn advance_to(&mut self, now_ms: u64) -> EnhancerResult<usize> {
        if now_ms < self.core.now_ms {
            return Err(EnhancerError::InvalidData(format!(
                "clock cannot move backwards: now={} target={now_ms}",
                self.core.now_ms
            )));
        }
        Ok(self.run_timers_until(now_ms))
    }

    /// Timers armed while firing run in the same pass when they come due
    /// before `target_ms`.
    fn run_timers_until(&mut self, target_ms: u64) -> usize {
        let mut fired = 0;
        while let Some((due_ms, task)) = self.core.timers.pop_due(target_ms) {
            self.core.now_ms = due_ms;
            trace!(due_ms, ?task, "timer fired");
            self.dispatch_task(task);
            fired += 1;
        }
        self.core.now_ms = target_ms;
        fired
    }

    fn dispatch_task(&mut self, task: ScheduledTask) {
        match task {
            ScheduledTask::NotificationExit(id) => self.begin_notification_exit(id),
            ScheduledTask::NotificationDetach(id) => self.detach_notification(id),
            ScheduledTask::LivenessRefresh => {
                self.refresh_liveness_indicators();
                let interval = self.core.config.liveness_refresh_interval_ms;
                self.schedule_after(interval, ScheduledTask::LivenessRefresh);
            }
            ScheduledTask::RefreshCompleted => self.complete_refresh(),
            ScheduledTask::ExportCompleted => self.complete_export(),
            ScheduledTask::AutomationConnected => self.complete_automation_connect(),
        }
    }
}
