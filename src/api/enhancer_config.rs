use serde::{Deserialize, Serialize};

use crate::error::{EnhancerError, EnhancerResult};
use crate::extensions::DEFAULT_CHART_MARKER_CLASS;

use super::validation::validate_enhancer_config;

pub const DEFAULT_STORAGE_KEY: &str = "dashboardSettings";
pub const DEFAULT_NOTIFICATION_DISPLAY_MS: u64 = 3_000;
pub const DEFAULT_NOTIFICATION_EXIT_MS: u64 = 300;
pub const DEFAULT_LIVENESS_REFRESH_INTERVAL_MS: u64 = 5_000;
pub const DEFAULT_REFRESH_FOLLOW_UP_MS: u64 = 1_000;
pub const DEFAULT_EXPORT_FOLLOW_UP_MS: u64 = 2_000;
pub const DEFAULT_AUTOMATION_CONNECT_MS: u64 = 2_000;
pub const DEFAULT_AUTO_REFRESH_INTERVAL_MS: u64 = 30_000;

/// Public enhancer bootstrap configuration.
///
/// Serializable so hosts can ship it next to the page without inventing an
/// ad-hoc format. Missing fields fall back to the built-in timings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnhancerConfig {
    #[serde(default = "default_storage_key")]
    pub storage_key: String,
    #[serde(default = "default_chart_marker_class")]
    pub chart_marker_class: String,
    #[serde(default = "default_notification_display_ms")]
    pub notification_display_ms: u64,
    #[serde(default = "default_notification_exit_ms")]
    pub notification_exit_ms: u64,
    #[serde(default = "default_liveness_refresh_interval_ms")]
    pub liveness_refresh_interval_ms: u64,
    #[serde(default = "default_refresh_follow_up_ms")]
    pub refresh_follow_up_ms: u64,
    #[serde(default = "default_export_follow_up_ms")]
    pub export_follow_up_ms: u64,
    #[serde(default = "default_automation_connect_ms")]
    pub automation_connect_ms: u64,
    #[serde(default = "default_auto_refresh_interval_ms")]
    pub auto_refresh_interval_ms: u64,
}

impl Default for EnhancerConfig {
    fn default() -> Self {
        Self {
            storage_key: default_storage_key(),
            chart_marker_class: default_chart_marker_class(),
            notification_display_ms: default_notification_display_ms(),
            notification_exit_ms: default_notification_exit_ms(),
            liveness_refresh_interval_ms: default_liveness_refresh_interval_ms(),
            refresh_follow_up_ms: default_refresh_follow_up_ms(),
            export_follow_up_ms: default_export_follow_up_ms(),
            automation_connect_ms: default_automation_connect_ms(),
            auto_refresh_interval_ms: default_auto_refresh_interval_ms(),
        }
    }
}

impl EnhancerConfig {
    /// Sets the persisted settings slot name.
    #[must_use]
    pub fn with_storage_key(mut self, key: impl Into<String>) -> Self {
        self.storage_key = key.into();
        self
    }

    /// Sets the CSS class that marks chart nodes.
    #[must_use]
    pub fn with_chart_marker_class(mut self, marker: impl Into<String>) -> Self {
        self.chart_marker_class = marker.into();
        self
    }

    /// Sets how long a notification stays fully visible and how long its
    /// exit transition runs before it is detached.
    #[must_use]
    pub fn with_notification_timing(mut self, display_ms: u64, exit_ms: u64) -> Self {
        self.notification_display_ms = display_ms;
        self.notification_exit_ms = exit_ms;
        self
    }

    #[must_use]
    pub fn with_liveness_refresh_interval_ms(mut self, interval_ms: u64) -> Self {
        self.liveness_refresh_interval_ms = interval_ms;
        self
    }

    /// Sets the delays between an action's start and its completion notice.
    #[must_use]
    pub fn with_follow_up_delays(
        mut self,
        refresh_ms: u64,
        export_ms: u64,
        automation_connect_ms: u64,
    ) -> Self {
        self.refresh_follow_up_ms = refresh_ms;
        self.export_follow_up_ms = export_ms;
        self.automation_connect_ms = automation_connect_ms;
        self
    }

    #[must_use]
    pub fn with_auto_refresh_interval_ms(mut self, interval_ms: u64) -> Self {
        self.auto_refresh_interval_ms = interval_ms;
        self
    }

    pub fn validate(&self) -> EnhancerResult<()> {
        validate_enhancer_config(self)
    }

    pub fn to_json_pretty(&self) -> EnhancerResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            EnhancerError::InvalidConfig(format!("failed to serialize enhancer config: {e}"))
        })
    }

    pub fn from_json_str(input: &str) -> EnhancerResult<Self> {
        let config: Self = serde_json::from_str(input).map_err(|e| {
            EnhancerError::InvalidConfig(format!("failed to parse enhancer config: {e}"))
        })?;
        config.validate()?;
        Ok(config)
    }
}

fn default_storage_key() -> String {
    DEFAULT_STORAGE_KEY.to_owned()
}

fn default_chart_marker_class() -> String {
    DEFAULT_CHART_MARKER_CLASS.to_owned()
}

fn default_notification_display_ms() -> u64 {
    DEFAULT_NOTIFICATION_DISPLAY_MS
}

fn default_notification_exit_ms() -> u64 {
    DEFAULT_NOTIFICATION_EXIT_MS
}

fn default_liveness_refresh_interval_ms() -> u64 {
    DEFAULT_LIVENESS_REFRESH_INTERVAL_MS
}

fn default_refresh_follow_up_ms() -> u64 {
    DEFAULT_REFRESH_FOLLOW_UP_MS
}

fn default_export_follow_up_ms() -> u64 {
    DEFAULT_EXPORT_FOLLOW_UP_MS
}

fn default_automation_connect_ms() -> u64 {
    DEFAULT_AUTOMATION_CONNECT_MS
}

fn default_auto_refresh_interval_ms() -> u64 {
    DEFAULT_AUTO_REFRESH_INTERVAL_MS
}
