use serde::{Deserialize, Serialize};

use crate::core::{ChartAugmentation, Notification, SettingsRecord};
use crate::persistence::SettingsStorage;
use crate::render::{DialogKind, PageShell};

use super::{DashboardEnhancer, PageFlags};

/// Serializable state snapshot consumed by the rendering collaborator and by
/// regression tests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnhancerSnapshot {
    pub now_ms: u64,
    pub page_flags: PageFlags,
    pub body_classes: Vec<String>,
    pub applied_settings: SettingsRecord,
    pub notifications: Vec<Notification>,
    pub charts: Vec<ChartAugmentation>,
    pub menu_open: bool,
    pub open_dialog: Option<DialogKind>,
    pub pending_timers: usize,
}

impl<S: SettingsStorage, P: PageShell> DashboardEnhancer<S, P> {
    #[must_use]
    pub fn snapshot(&self) -> EnhancerSnapshot {
        let page_flags = self.page_flags();
        EnhancerSnapshot {
            now_ms: self.core.now_ms,
            page_flags,
            body_classes: page_flags
                .body_classes()
                .iter()
                .map(|class| (*class).to_owned())
                .collect(),
            applied_settings: self.core.applied.record(),
            notifications: self.notifications().cloned().collect(),
            charts: self.charts().cloned().collect(),
            menu_open: self.core.menu.is_open(),
            open_dialog: self.open_dialog_kind(),
            pending_timers: self.core.timers.len(),
        }
    }
}
