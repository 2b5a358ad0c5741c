use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{ChartTheme, SettingsRecord};

/// Page-level visual mode flags, the only page writes preferences cause.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct PageFlags {
    pub dark_mode: bool,
    pub reduced_motion: bool,
}

impl PageFlags {
    pub const DARK_MODE_CLASS: &'static str = "dark-mode";
    pub const REDUCED_MOTION_CLASS: &'static str = "no-animations";

    #[must_use]
    pub fn for_record(record: &SettingsRecord) -> Self {
        Self {
            dark_mode: record.dark_mode,
            reduced_motion: !record.animations,
        }
    }

    /// Body classes the page shell must carry for these flags.
    #[must_use]
    pub fn body_classes(self) -> SmallVec<[&'static str; 2]> {
        let mut classes = SmallVec::new();
        if self.dark_mode {
            classes.push(Self::DARK_MODE_CLASS);
        }
        if self.reduced_motion {
            classes.push(Self::REDUCED_MOTION_CLASS);
        }
        classes
    }
}

/// Last applied record plus the flags derived from it.
///
/// Non-visual preferences are only recorded here; chart re-theming and the
/// refresh interval belong to collaborators that read them back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct AppliedPreferences {
    flags: PageFlags,
    record: SettingsRecord,
}

impl AppliedPreferences {
    /// Applies `record`; returns `true` when the page flags changed.
    pub fn apply(&mut self, record: &SettingsRecord) -> bool {
        let flags = PageFlags::for_record(record);
        let changed = flags != self.flags;
        self.flags = flags;
        self.record = *record;
        changed
    }

    #[must_use]
    pub fn flags(self) -> PageFlags {
        self.flags
    }

    #[must_use]
    pub fn record(self) -> SettingsRecord {
        self.record
    }

    #[must_use]
    pub fn auto_refresh(self) -> bool {
        self.record.auto_refresh
    }

    #[must_use]
    pub fn chart_theme(self) -> ChartTheme {
        self.record.chart_theme
    }

    #[must_use]
    pub fn show_gridlines(self) -> bool {
        self.record.show_gridlines
    }

    #[must_use]
    pub fn browser_notifications(self) -> bool {
        self.record.browser_notifications
    }

    #[must_use]
    pub fn sound_alerts(self) -> bool {
        self.record.sound_alerts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_record_sets_no_body_classes() {
        let flags = PageFlags::for_record(&SettingsRecord::default());
        assert!(flags.body_classes().is_empty());
    }

    #[test]
    fn animations_off_maps_to_reduced_motion() {
        let record = SettingsRecord::default()
            .with_dark_mode(true)
            .with_animations(false);
        let flags = PageFlags::for_record(&record);
        assert_eq!(
            flags.body_classes().as_slice(),
            &[PageFlags::DARK_MODE_CLASS, PageFlags::REDUCED_MOTION_CLASS]
        );
    }
}
