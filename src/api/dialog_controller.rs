use tracing::warn;

use crate::core::{SettingsRecord, Severity};
use crate::error::{EnhancerError, EnhancerResult};
use crate::persistence::SettingsStorage;
use crate::render::{
    AutomationDialogModel, DialogKind, NotificationPermission, OpenDialog, PageShell,
    SettingsDialogModel, automation_dialog_markup, settings_dialog_markup,
};

use super::{DashboardEnhancer, timer_dispatch::ScheduledTask};

impl<S: SettingsStorage, P: PageShell> DashboardEnhancer<S, P> {
    /// Opens the settings dialog populated from the persisted record.
    pub fn show_settings(&mut self) {
        self.post_notification("Opening dashboard settings...", Severity::Info);
        let record = self.load_settings();
        let model =
            SettingsDialogModel::from_record(&record, self.core.config.auto_refresh_interval_ms);
        self.core.dialog = Some(OpenDialog::Settings(model));
    }

    /// Settings form currently open, for the host to edit.
    pub fn settings_dialog_mut(&mut self) -> Option<&mut SettingsDialogModel> {
        match self.core.dialog.as_mut() {
            Some(OpenDialog::Settings(model)) => Some(model),
            _ => None,
        }
    }

    /// Saves the open settings form.
    pub fn submit_settings_dialog(&mut self) -> EnhancerResult<SettingsRecord> {
        let Some(OpenDialog::Settings(model)) = self.core.dialog.as_ref() else {
            return Err(EnhancerError::InvalidData(
                "settings dialog is not open".to_owned(),
            ));
        };
        let record = model.to_record();
        self.save_settings(&record)?;
        Ok(record)
    }

    /// Persists `record`, applies it and closes the settings dialog.
    ///
    /// A failed write posts an error notification, keeps the dialog open and
    /// leaves the applied state untouched.
    pub fn save_settings(&mut self, record: &SettingsRecord) -> EnhancerResult<()> {
        if let Err(err) = self.store.save(record) {
            warn!(error = %err, "failed to persist settings");
            self.post_notification("Failed to save settings", Severity::Error);
            return Err(err);
        }

        self.apply_settings(record);
        if matches!(self.core.dialog, Some(OpenDialog::Settings(_))) {
            self.core.dialog = None;
        }
        self.post_notification("Settings saved successfully!", Severity::Success);

        if record.browser_notifications
            && self.shell.notification_permission() != NotificationPermission::Granted
        {
            self.post_notification(
                "Browser notifications are unavailable; using in-page notifications",
                Severity::Info,
            );
        }
        Ok(())
    }

    /// Opens the workflow-automation dialog.
    pub fn open_automation(&mut self) {
        self.post_notification("Opening n8n workflow automation...", Severity::Info);
        self.core.dialog = Some(OpenDialog::Automation(AutomationDialogModel::default()));
    }

    /// Connection stub: announces the attempt, then reports success and closes
    /// the automation dialog after the connect delay.
    pub fn connect_automation(&mut self) {
        self.post_notification("Connecting to n8n workflow...", Severity::Info);
        let delay = self.core.config.automation_connect_ms;
        self.schedule_after(delay, ScheduledTask::AutomationConnected);
    }

    /// Closes whichever dialog is open; returns `true` when one was.
    pub fn close_dialog(&mut self) -> bool {
        self.core.dialog.take().is_some()
    }

    #[must_use]
    pub fn open_dialog(&self) -> Option<&OpenDialog> {
        self.core.dialog.as_ref()
    }

    #[must_use]
    pub fn open_dialog_kind(&self) -> Option<DialogKind> {
        self.core.dialog.as_ref().map(OpenDialog::kind)
    }

    /// Markup of the open dialog for the page shell to insert.
    #[must_use]
    pub fn open_dialog_markup(&self) -> Option<String> {
        self.core.dialog.as_ref().map(|dialog| match dialog {
            OpenDialog::Settings(model) => settings_dialog_markup(model),
            OpenDialog::Automation(model) => automation_dialog_markup(model),
        })
    }

    pub(super) fn complete_automation_connect(&mut self) {
        self.post_notification("Successfully connected to n8n!", Severity::Success);
        if matches!(self.core.dialog, Some(OpenDialog::Automation(_))) {
            self.core.dialog = None;
        }
    }
}
