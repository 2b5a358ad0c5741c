use crate::persistence::SettingsStorage;
use crate::render::PageShell;

use super::{EnhancerConfig, PreferenceStore, enhancer_core::EnhancerCore};

/// Main orchestration facade owned by the page bootstrap.
///
/// `DashboardEnhancer` coordinates the preference pipeline, the notification
/// region, chart augmentation and shortcuts. There is no global instance:
/// anything that needs to post a notification or re-apply settings is handed
/// a reference to this value.
///
/// Time is virtual. The host forwards elapsed time through
/// [`advance_by`](Self::advance_by) / [`advance_to`](Self::advance_to) and
/// every timer fires from there, on the caller's thread.
pub struct DashboardEnhancer<S: SettingsStorage, P: PageShell> {
    pub(super) store: PreferenceStore<S>,
    pub(super) shell: P,
    pub(super) core: EnhancerCore,
}

impl<S: SettingsStorage, P: PageShell> DashboardEnhancer<S, P> {
    #[must_use]
    pub fn config(&self) -> &EnhancerConfig {
        &self.core.config
    }

    #[must_use]
    pub fn now_ms(&self) -> u64 {
        self.core.now_ms
    }

    #[must_use]
    pub fn store(&self) -> &PreferenceStore<S> {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut PreferenceStore<S> {
        &mut self.store
    }

    #[must_use]
    pub fn shell(&self) -> &P {
        &self.shell
    }

    pub fn shell_mut(&mut self) -> &mut P {
        &mut self.shell
    }

    #[must_use]
    pub fn pending_timer_count(&self) -> usize {
        self.core.timers.len()
    }

    #[must_use]
    pub fn next_timer_due_ms(&self) -> Option<u64> {
        self.core.timers.next_due_ms()
    }

    #[must_use]
    pub fn into_parts(self) -> (S, P) {
        (self.store.into_storage(), self.shell)
    }
}
