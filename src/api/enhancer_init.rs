use indexmap::IndexMap;
use tracing::debug;

use crate::core::TimerQueue;
use crate::error::EnhancerResult;
use crate::extensions::{ClassMarkerClassifier, SimulatedLivenessProbe};
use crate::interaction::MenuState;
use crate::persistence::SettingsStorage;
use crate::render::PageShell;

use super::{
    AppliedPreferences, DashboardEnhancer, EnhancerConfig, PreferenceStore,
    enhancer_core::{EnhancerCore, NotificationRegion},
    timer_dispatch::ScheduledTask,
};

impl<S: SettingsStorage, P: PageShell> DashboardEnhancer<S, P> {
    /// Boots the enhancer for one page session.
    ///
    /// Loads and applies persisted preferences, starts observing charts with
    /// the configured marker class and arms the recurring liveness tick. The
    /// notification region and shortcut dispatch are live once this returns.
    pub fn new(storage: S, shell: P, config: EnhancerConfig) -> EnhancerResult<Self> {
        config.validate()?;

        let store = PreferenceStore::new(storage, config.storage_key.clone());
        let classifier = ClassMarkerClassifier::new(config.chart_marker_class.clone());
        let mut enhancer = Self {
            store,
            shell,
            core: EnhancerCore {
                config,
                now_ms: 0,
                timers: TimerQueue::default(),
                applied: AppliedPreferences::default(),
                notifications: NotificationRegion::default(),
                charts: IndexMap::new(),
                classifier: Box::new(classifier),
                liveness_probe: Box::new(SimulatedLivenessProbe::new()),
                menu: MenuState::default(),
                dialog: None,
            },
        };

        let record = enhancer.load_settings();
        enhancer.apply_settings(&record);

        let interval = enhancer.core.config.liveness_refresh_interval_ms;
        enhancer.schedule_after(interval, ScheduledTask::LivenessRefresh);

        debug!(
            storage_key = %enhancer.core.config.storage_key,
            chart_marker = %enhancer.core.config.chart_marker_class,
            "dashboard enhancer started"
        );
        Ok(enhancer)
    }

    /// Boots with [`EnhancerConfig::default`].
    pub fn with_default_config(storage: S, shell: P) -> EnhancerResult<Self> {
        Self::new(storage, shell, EnhancerConfig::default())
    }
}
