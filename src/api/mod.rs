mod action_controller;
mod chart_observer_controller;
mod dialog_controller;
mod enhancer;
mod enhancer_config;
mod enhancer_core;
mod enhancer_init;
mod json_contract;
mod liveness_controller;
mod notification_controller;
mod preference_applicator;
mod preference_controller;
mod preference_store;
mod shortcut_controller;
mod snapshot;
mod timer_dispatch;
mod validation;

pub use enhancer::DashboardEnhancer;
pub use enhancer_config::{
    DEFAULT_AUTO_REFRESH_INTERVAL_MS, DEFAULT_AUTOMATION_CONNECT_MS, DEFAULT_EXPORT_FOLLOW_UP_MS,
    DEFAULT_LIVENESS_REFRESH_INTERVAL_MS, DEFAULT_NOTIFICATION_DISPLAY_MS,
    DEFAULT_NOTIFICATION_EXIT_MS, DEFAULT_REFRESH_FOLLOW_UP_MS, DEFAULT_STORAGE_KEY,
    EnhancerConfig,
};
pub use json_contract::{ENHANCER_SNAPSHOT_JSON_SCHEMA_V1, EnhancerSnapshotJsonContractV1};
pub use preference_applicator::{AppliedPreferences, PageFlags};
pub use preference_store::PreferenceStore;
pub use snapshot::EnhancerSnapshot;
