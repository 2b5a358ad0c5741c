use tracing::{debug, warn};

use crate::core::Severity;
use crate::interaction::{FullscreenState, MenuAction, ShortcutAction};
use crate::persistence::SettingsStorage;
use crate::render::PageShell;

use super::{DashboardEnhancer, timer_dispatch::ScheduledTask};

impl<S: SettingsStorage, P: PageShell> DashboardEnhancer<S, P> {
    /// Announces a refresh, then reloads the page once the follow-up delay
    /// elapses.
    pub fn refresh_data(&mut self) {
        self.post_notification("Refreshing dashboard data...", Severity::Info);
        let delay = self.core.config.refresh_follow_up_ms;
        self.schedule_after(delay, ScheduledTask::RefreshCompleted);
    }

    /// Export stub: announces the export and its completion.
    pub fn export_data(&mut self) {
        self.post_notification("Exporting dashboard data...", Severity::Info);
        let delay = self.core.config.export_follow_up_ms;
        self.schedule_after(delay, ScheduledTask::ExportCompleted);
    }

    /// Toggles fullscreen based on the shell's current status.
    ///
    /// The enhancer keeps no fullscreen state of its own. An unavailable
    /// fullscreen API degrades to an info notification. Returns the state the
    /// page is in afterwards.
    pub fn toggle_fullscreen(&mut self) -> FullscreenState {
        let current = FullscreenState::from_is_fullscreen(self.shell.is_fullscreen());
        let (result, message) = match current {
            FullscreenState::Normal => (self.shell.request_fullscreen(), "Entered fullscreen mode"),
            FullscreenState::Fullscreen => (self.shell.exit_fullscreen(), "Exited fullscreen mode"),
        };

        match result {
            Ok(()) => {
                self.post_notification(message, Severity::Info);
                current.toggled()
            }
            Err(err) => {
                warn!(error = %err, "fullscreen toggle unavailable");
                self.post_notification("Fullscreen is not available", Severity::Info);
                FullscreenState::from_is_fullscreen(self.shell.is_fullscreen())
            }
        }
    }

    /// Runs a named shortcut action exactly once.
    pub fn run_shortcut_action(&mut self, action: ShortcutAction) {
        debug!(?action, "run shortcut action");
        match action {
            ShortcutAction::Refresh => self.refresh_data(),
            ShortcutAction::Export => self.export_data(),
            ShortcutAction::ToggleFullscreen => {
                self.toggle_fullscreen();
            }
        }
    }

    /// Opens or closes the slide-out menu; returns whether it is now open.
    pub fn toggle_menu(&mut self) -> bool {
        self.core.menu.toggle()
    }

    #[must_use]
    pub fn is_menu_open(&self) -> bool {
        self.core.menu.is_open()
    }

    pub fn invoke_menu_action(&mut self, action: MenuAction) {
        debug!(?action, "menu action");
        match action {
            MenuAction::Export => self.export_data(),
            MenuAction::Refresh => self.refresh_data(),
            MenuAction::Fullscreen => {
                self.toggle_fullscreen();
            }
            MenuAction::Automation => self.open_automation(),
            MenuAction::Settings => self.show_settings(),
        }
    }

    pub(super) fn complete_refresh(&mut self) {
        self.post_notification("Dashboard refreshed!", Severity::Success);
        self.shell.reload();
    }

    pub(super) fn complete_export(&mut self) {
        self.post_notification("Data exported successfully!", Severity::Success);
    }
}
