use indexmap::IndexMap;

use crate::core::{ChartAugmentation, NodeId, Notification, NotificationId, TimerQueue};
use crate::extensions::{ChartClassifier, LivenessProbe};
use crate::interaction::MenuState;
use crate::render::OpenDialog;

use super::{AppliedPreferences, EnhancerConfig, timer_dispatch::ScheduledTask};

/// Notification display region; insertion order is display order.
#[derive(Debug, Default)]
pub(super) struct NotificationRegion {
    pub(super) entries: IndexMap<NotificationId, Notification>,
    pub(super) next_id: u64,
}

/// Internal state used by the public facade (`DashboardEnhancer`).
pub(super) struct EnhancerCore {
    pub(super) config: EnhancerConfig,
    pub(super) now_ms: u64,
    pub(super) timers: TimerQueue<ScheduledTask>,
    pub(super) applied: AppliedPreferences,
    pub(super) notifications: NotificationRegion,
    /// Augmentation markers keyed by stable node identity.
    pub(super) charts: IndexMap<NodeId, ChartAugmentation>,
    pub(super) classifier: Box<dyn ChartClassifier>,
    pub(super) liveness_probe: Box<dyn LivenessProbe>,
    pub(super) menu: MenuState,
    pub(super) dialog: Option<OpenDialog>,
}
