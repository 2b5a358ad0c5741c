use std::fmt;
use std::str::FromStr;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::warn;

use crate::error::{EnhancerError, EnhancerResult};

/// Plotting template applied by the chart-rendering collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ChartTheme {
    #[default]
    #[serde(alias = "plotly_white")]
    Light,
    #[serde(alias = "plotly_dark")]
    Dark,
    Ggplot2,
    Seaborn,
}

impl ChartTheme {
    pub const ALL: [Self; 4] = [Self::Light, Self::Dark, Self::Ggplot2, Self::Seaborn];

    /// Persisted token for this theme.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
            Self::Ggplot2 => "ggplot2",
            Self::Seaborn => "seaborn",
        }
    }

    /// Human-readable label shown in the settings dialog.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Light => "Light",
            Self::Dark => "Dark",
            Self::Ggplot2 => "GGPlot2",
            Self::Seaborn => "Seaborn",
        }
    }

    /// Template name understood by the plotting library.
    #[must_use]
    pub const fn template_name(self) -> &'static str {
        match self {
            Self::Light => "plotly_white",
            Self::Dark => "plotly_dark",
            Self::Ggplot2 => "ggplot2",
            Self::Seaborn => "seaborn",
        }
    }
}

impl fmt::Display for ChartTheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ChartTheme {
    type Err = EnhancerError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "light" | "plotly_white" => Ok(Self::Light),
            "dark" | "plotly_dark" => Ok(Self::Dark),
            "ggplot2" => Ok(Self::Ggplot2),
            "seaborn" => Ok(Self::Seaborn),
            other => Err(EnhancerError::InvalidData(format!(
                "unknown chart theme `{other}`"
            ))),
        }
    }
}

/// The persisted user-preference record.
///
/// Always fully populated. Persisted payloads are merged over
/// [`SettingsRecord::default`] field by field, so a record written by an
/// older build (or a partially hand-edited slot) still loads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingsRecord {
    pub dark_mode: bool,
    pub animations: bool,
    pub auto_refresh: bool,
    pub chart_theme: ChartTheme,
    pub show_gridlines: bool,
    pub browser_notifications: bool,
    pub sound_alerts: bool,
}

impl Default for SettingsRecord {
    fn default() -> Self {
        Self {
            dark_mode: false,
            animations: true,
            auto_refresh: true,
            chart_theme: ChartTheme::Light,
            show_gridlines: true,
            browser_notifications: false,
            sound_alerts: false,
        }
    }
}

impl SettingsRecord {
    /// Persisted field names, in canonical order.
    pub const FIELD_NAMES: [&'static str; 7] = [
        "darkMode",
        "animations",
        "autoRefresh",
        "chartTheme",
        "showGridlines",
        "browserNotifications",
        "soundAlerts",
    ];

    #[must_use]
    pub fn with_dark_mode(mut self, enabled: bool) -> Self {
        self.dark_mode = enabled;
        self
    }

    #[must_use]
    pub fn with_animations(mut self, enabled: bool) -> Self {
        self.animations = enabled;
        self
    }

    #[must_use]
    pub fn with_auto_refresh(mut self, enabled: bool) -> Self {
        self.auto_refresh = enabled;
        self
    }

    #[must_use]
    pub fn with_chart_theme(mut self, theme: ChartTheme) -> Self {
        self.chart_theme = theme;
        self
    }

    #[must_use]
    pub fn with_show_gridlines(mut self, enabled: bool) -> Self {
        self.show_gridlines = enabled;
        self
    }

    #[must_use]
    pub fn with_browser_notifications(mut self, enabled: bool) -> Self {
        self.browser_notifications = enabled;
        self
    }

    #[must_use]
    pub fn with_sound_alerts(mut self, enabled: bool) -> Self {
        self.sound_alerts = enabled;
        self
    }

    /// Serializes exactly the seven canonical fields.
    pub fn to_json(&self) -> EnhancerResult<String> {
        serde_json::to_string(self).map_err(|e| {
            EnhancerError::InvalidData(format!("failed to serialize settings record: {e}"))
        })
    }

    /// Parses a persisted payload and merges its fields over the defaults.
    ///
    /// A payload that is not a JSON object is corrupt. Individual fields with
    /// the wrong shape fall back to their default; unknown fields are ignored.
    pub fn merge_over_defaults(raw: &str) -> EnhancerResult<Self> {
        let value: Value = serde_json::from_str(raw)
            .map_err(|e| EnhancerError::PersistenceCorrupt(format!("invalid json: {e}")))?;
        let Value::Object(object) = value else {
            return Err(EnhancerError::PersistenceCorrupt(
                "settings payload must be a json object".to_owned(),
            ));
        };

        let mut record = Self::default();
        merge_field(&object, "darkMode", &mut record.dark_mode);
        merge_field(&object, "animations", &mut record.animations);
        merge_field(&object, "autoRefresh", &mut record.auto_refresh);
        merge_field(&object, "chartTheme", &mut record.chart_theme);
        merge_field(&object, "showGridlines", &mut record.show_gridlines);
        merge_field(
            &object,
            "browserNotifications",
            &mut record.browser_notifications,
        );
        merge_field(&object, "soundAlerts", &mut record.sound_alerts);
        Ok(record)
    }
}

fn merge_field<T: DeserializeOwned>(object: &Map<String, Value>, key: &str, slot: &mut T) {
    let Some(value) = object.get(key) else {
        return;
    };
    match T::deserialize(value) {
        Ok(parsed) => *slot = parsed,
        Err(err) => warn!(
            field = key,
            error = %err,
            "ignoring malformed persisted settings field"
        ),
    }
}
