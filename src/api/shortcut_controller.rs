use tracing::trace;

use crate::interaction::{KeyDisposition, KeyEvent, resolve_shortcut};
use crate::persistence::SettingsStorage;
use crate::render::PageShell;

use super::DashboardEnhancer;

impl<S: SettingsStorage, P: PageShell> DashboardEnhancer<S, P> {
    /// Document-level key-down handler.
    ///
    /// A recognized Ctrl/Cmd combination runs its action once and reports
    /// `Handled` so the host prevents the browser default. Anything else is
    /// passed through untouched.
    pub fn handle_key_down(&mut self, event: &KeyEvent) -> KeyDisposition {
        match resolve_shortcut(event) {
            Some(action) => {
                self.run_shortcut_action(action);
                KeyDisposition::Handled(action)
            }
            None => {
                trace!(key = %event.key, "key passed through");
                KeyDisposition::PassThrough
            }
        }
    }
}
