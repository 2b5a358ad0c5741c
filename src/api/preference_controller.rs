use tracing::debug;

use crate::core::SettingsRecord;
use crate::error::EnhancerResult;
use crate::persistence::SettingsStorage;
use crate::render::PageShell;

use super::{AppliedPreferences, DashboardEnhancer, PageFlags};

impl<S: SettingsStorage, P: PageShell> DashboardEnhancer<S, P> {
    /// Reads the persisted record merged over defaults.
    #[must_use]
    pub fn load_settings(&self) -> SettingsRecord {
        self.store.load()
    }

    /// Persists the complete record without applying it.
    pub fn persist_settings(&mut self, record: &SettingsRecord) -> EnhancerResult<()> {
        self.store.save(record)
    }

    /// Maps `record` onto page flags and applied state. Idempotent.
    pub fn apply_settings(&mut self, record: &SettingsRecord) {
        let changed = self.core.applied.apply(record);
        debug!(
            dark_mode = record.dark_mode,
            animations = record.animations,
            auto_refresh = record.auto_refresh,
            chart_theme = %record.chart_theme,
            flags_changed = changed,
            "applied settings"
        );
    }

    /// Loads the persisted record and applies it; returns what was applied.
    pub fn reload_settings(&mut self) -> SettingsRecord {
        let record = self.load_settings();
        self.apply_settings(&record);
        record
    }

    #[must_use]
    pub fn applied_preferences(&self) -> AppliedPreferences {
        self.core.applied
    }

    #[must_use]
    pub fn page_flags(&self) -> PageFlags {
        self.core.applied.flags()
    }

    /// Refresh cadence advertised to the page's refresh component, if enabled.
    #[must_use]
    pub fn auto_refresh_interval_ms(&self) -> Option<u64> {
        self.core
            .applied
            .auto_refresh()
            .then_some(self.core.config.auto_refresh_interval_ms)
    }
}
