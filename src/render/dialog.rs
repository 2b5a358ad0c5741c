use serde::{Deserialize, Serialize};

use crate::core::{ChartTheme, SettingsRecord};
use crate::error::{EnhancerError, EnhancerResult};

/// Form fields of the settings dialog, one per persisted preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SettingsField {
    DarkMode,
    Animations,
    AutoRefresh,
    ChartTheme,
    ShowGridlines,
    BrowserNotifications,
    SoundAlerts,
}

impl SettingsField {
    /// Persisted key, reused as the form control id.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::DarkMode => "darkMode",
            Self::Animations => "animations",
            Self::AutoRefresh => "autoRefresh",
            Self::ChartTheme => "chartTheme",
            Self::ShowGridlines => "showGridlines",
            Self::BrowserNotifications => "browserNotifications",
            Self::SoundAlerts => "soundAlerts",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DialogAction {
    SaveSettings,
    Cancel,
    ConnectAutomation,
    Close,
}

impl DialogAction {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::SaveSettings => "Save Settings",
            Self::Cancel => "Cancel",
            Self::ConnectAutomation => "Connect to n8n",
            Self::Close => "Close",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SettingsControl {
    Toggle {
        field: SettingsField,
        label: String,
        checked: bool,
    },
    Select {
        field: SettingsField,
        label: String,
        options: Vec<SelectOption>,
    },
}

impl SettingsControl {
    #[must_use]
    pub fn field(&self) -> SettingsField {
        match self {
            Self::Toggle { field, .. } | Self::Select { field, .. } => *field,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettingsSection {
    pub heading: String,
    pub controls: Vec<SettingsControl>,
}

/// View-model of the settings dialog.
///
/// Built from a loaded record, edited through `set_toggle`/`select_theme`
/// and read back with `to_record` when the user saves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettingsDialogModel {
    pub title: String,
    pub sections: Vec<SettingsSection>,
    pub actions: Vec<DialogAction>,
}

fn toggle(field: SettingsField, label: impl Into<String>, checked: bool) -> SettingsControl {
    SettingsControl::Toggle {
        field,
        label: label.into(),
        checked,
    }
}

impl SettingsDialogModel {
    #[must_use]
    pub fn from_record(record: &SettingsRecord, auto_refresh_interval_ms: u64) -> Self {
        let auto_refresh_secs = auto_refresh_interval_ms / 1000;
        let theme_options = ChartTheme::ALL
            .iter()
            .map(|theme| SelectOption {
                value: theme.as_str().to_owned(),
                label: theme.label().to_owned(),
                selected: *theme == record.chart_theme,
            })
            .collect();

        Self {
            title: "Dashboard Settings".to_owned(),
            sections: vec![
                SettingsSection {
                    heading: "Display Options".to_owned(),
                    controls: vec![
                        toggle(SettingsField::DarkMode, "Enable Dark Mode", record.dark_mode),
                        toggle(
                            SettingsField::Animations,
                            "Enable Animations",
                            record.animations,
                        ),
                        toggle(
                            SettingsField::AutoRefresh,
                            format!("Auto Refresh ({auto_refresh_secs}s)"),
                            record.auto_refresh,
                        ),
                    ],
                },
                SettingsSection {
                    heading: "Chart Settings".to_owned(),
                    controls: vec![
                        SettingsControl::Select {
                            field: SettingsField::ChartTheme,
                            label: "Chart Theme:".to_owned(),
                            options: theme_options,
                        },
                        toggle(
                            SettingsField::ShowGridlines,
                            "Show Grid Lines",
                            record.show_gridlines,
                        ),
                    ],
                },
                SettingsSection {
                    heading: "Notification Settings".to_owned(),
                    controls: vec![
                        toggle(
                            SettingsField::BrowserNotifications,
                            "Browser Notifications",
                            record.browser_notifications,
                        ),
                        toggle(SettingsField::SoundAlerts, "Sound Alerts", record.sound_alerts),
                    ],
                },
            ],
            actions: vec![DialogAction::SaveSettings, DialogAction::Cancel],
        }
    }

    fn controls(&self) -> impl Iterator<Item = &SettingsControl> {
        self.sections.iter().flat_map(|section| section.controls.iter())
    }

    fn controls_mut(&mut self) -> impl Iterator<Item = &mut SettingsControl> {
        self.sections
            .iter_mut()
            .flat_map(|section| section.controls.iter_mut())
    }

    #[must_use]
    pub fn control(&self, field: SettingsField) -> Option<&SettingsControl> {
        self.controls().find(|control| control.field() == field)
    }

    pub fn set_toggle(&mut self, field: SettingsField, value: bool) -> EnhancerResult<()> {
        for control in self.controls_mut() {
            if let SettingsControl::Toggle {
                field: control_field,
                checked,
                ..
            } = control
            {
                if *control_field == field {
                    *checked = value;
                    return Ok(());
                }
            }
        }
        Err(EnhancerError::InvalidData(format!(
            "settings field `{}` is not a toggle",
            field.key()
        )))
    }

    pub fn select_theme(&mut self, theme: ChartTheme) {
        for control in self.controls_mut() {
            if let SettingsControl::Select { options, .. } = control {
                for option in options.iter_mut() {
                    option.selected = option.value == theme.as_str();
                }
            }
        }
    }

    /// Reads the current form state back into a complete record.
    #[must_use]
    pub fn to_record(&self) -> SettingsRecord {
        let mut record = SettingsRecord::default();
        for control in self.controls() {
            match control {
                SettingsControl::Toggle { field, checked, .. } => {
                    let slot = match field {
                        SettingsField::DarkMode => &mut record.dark_mode,
                        SettingsField::Animations => &mut record.animations,
                        SettingsField::AutoRefresh => &mut record.auto_refresh,
                        SettingsField::ShowGridlines => &mut record.show_gridlines,
                        SettingsField::BrowserNotifications => &mut record.browser_notifications,
                        SettingsField::SoundAlerts => &mut record.sound_alerts,
                        SettingsField::ChartTheme => continue,
                    };
                    *slot = *checked;
                }
                SettingsControl::Select { options, .. } => {
                    if let Some(theme) = options
                        .iter()
                        .find(|option| option.selected)
                        .and_then(|option| option.value.parse::<ChartTheme>().ok())
                    {
                        record.chart_theme = theme;
                    }
                }
            }
        }
        record
    }
}

/// View-model of the workflow-automation dialog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AutomationDialogModel {
    pub title: String,
    pub intro: String,
    pub capabilities: Vec<String>,
    pub actions: Vec<DialogAction>,
}

impl Default for AutomationDialogModel {
    fn default() -> Self {
        Self {
            title: "n8n Workflow Integration".to_owned(),
            intro: "Connect your dashboard to n8n for automated workflows:".to_owned(),
            capabilities: [
                "Automated ticket escalation",
                "SLA breach notifications",
                "Weekly reports generation",
                "Slack/Teams integration",
            ]
            .into_iter()
            .map(str::to_owned)
            .collect(),
            actions: vec![DialogAction::ConnectAutomation, DialogAction::Close],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DialogKind {
    Settings,
    Automation,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum OpenDialog {
    Settings(SettingsDialogModel),
    Automation(AutomationDialogModel),
}

impl OpenDialog {
    #[must_use]
    pub fn kind(&self) -> DialogKind {
        match self {
            Self::Settings(_) => DialogKind::Settings,
            Self::Automation(_) => DialogKind::Automation,
        }
    }
}
