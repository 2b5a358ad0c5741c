use tracing::trace;

use crate::extensions::LivenessProbe;
use crate::persistence::SettingsStorage;
use crate::render::PageShell;

use super::DashboardEnhancer;

impl<S: SettingsStorage, P: PageShell> DashboardEnhancer<S, P> {
    /// Re-samples every present liveness indicator independently.
    ///
    /// Runs on the recurring liveness tick. With the default probe this is a
    /// cosmetic data-freshness simulation; nothing else reads the result.
    /// Returns the number of indicators refreshed.
    pub fn refresh_liveness_indicators(&mut self) -> usize {
        let now_ms = self.core.now_ms;
        let probe = &mut self.core.liveness_probe;
        let mut refreshed = 0;
        for augmentation in self.core.charts.values_mut() {
            augmentation.indicator.state = probe.sample(augmentation.node);
            augmentation.indicator.refreshed_at_ms = Some(now_ms);
            refreshed += 1;
        }
        trace!(refreshed, probe = probe.id(), "refreshed liveness indicators");
        refreshed
    }

    /// Replaces the liveness source, e.g. with a real health check.
    pub fn set_liveness_probe(&mut self, probe: Box<dyn LivenessProbe>) {
        self.core.liveness_probe = probe;
    }

    #[must_use]
    pub fn liveness_probe_id(&self) -> &str {
        self.core.liveness_probe.id()
    }
}
