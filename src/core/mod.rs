pub mod augmentation;
pub mod dom;
pub mod notification;
pub mod settings;
pub mod timer;

pub use augmentation::{
    ChartAugmentation, ChartToolbar, LivenessIndicator, LivenessState, ToolbarAction,
};
pub use dom::{MutationRecord, NodeId, PageNode};
pub use notification::{Notification, NotificationId, NotificationPhase, Severity};
pub use settings::{ChartTheme, SettingsRecord};
pub use timer::TimerQueue;
