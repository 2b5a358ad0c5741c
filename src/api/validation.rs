use crate::error::{EnhancerError, EnhancerResult};

use super::EnhancerConfig;

pub(super) fn validate_enhancer_config(config: &EnhancerConfig) -> EnhancerResult<()> {
    if config.storage_key.trim().is_empty() {
        return Err(EnhancerError::InvalidConfig(
            "storage key must not be empty".to_owned(),
        ));
    }
    if config.chart_marker_class.trim().is_empty()
        || config.chart_marker_class.contains(char::is_whitespace)
    {
        return Err(EnhancerError::InvalidConfig(
            "chart marker class must be a single non-empty css class".to_owned(),
        ));
    }

    for (name, value) in [
        ("notification_display_ms", config.notification_display_ms),
        ("notification_exit_ms", config.notification_exit_ms),
        (
            "liveness_refresh_interval_ms",
            config.liveness_refresh_interval_ms,
        ),
        ("auto_refresh_interval_ms", config.auto_refresh_interval_ms),
    ] {
        if value == 0 {
            return Err(EnhancerError::InvalidConfig(format!(
                "{name} must be > 0"
            )));
        }
    }

    Ok(())
}
