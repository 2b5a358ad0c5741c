mod dialog;
mod headless_shell;
mod markup;

pub use dialog::{
    AutomationDialogModel, DialogAction, DialogKind, OpenDialog, SelectOption,
    SettingsControl, SettingsDialogModel, SettingsField, SettingsSection,
};
pub use headless_shell::HeadlessShell;
pub use markup::{
    automation_dialog_markup, escape_html, notification_markup, settings_dialog_markup,
};

use serde::{Deserialize, Serialize};

use crate::error::EnhancerResult;

/// Browser permission state for system-level notifications.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum NotificationPermission {
    Granted,
    Denied,
    Prompt,
    #[default]
    Unsupported,
}

/// Contract implemented by the page shell hosting the enhancer.
///
/// The shell owns the fullscreen-capable root element and page reloads. It
/// renders whatever state the enhancer exposes; the enhancer never reaches
/// into the page directly.
pub trait PageShell {
    fn is_fullscreen(&self) -> bool;
    fn request_fullscreen(&mut self) -> EnhancerResult<()>;
    fn exit_fullscreen(&mut self) -> EnhancerResult<()>;
    fn reload(&mut self);

    fn notification_permission(&self) -> NotificationPermission {
        NotificationPermission::Unsupported
    }
}
