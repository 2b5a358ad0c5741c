use dashboard_enhancer::api::{DEFAULT_STORAGE_KEY, PageFlags};
use dashboard_enhancer::core::{ChartTheme, SettingsRecord, Severity};
use dashboard_enhancer::persistence::{MemoryStorage, SettingsStorage};
use dashboard_enhancer::render::{
    AutomationDialogModel, DialogAction, DialogKind, HeadlessShell, NotificationPermission,
    SettingsControl, SettingsDialogModel, SettingsField, automation_dialog_markup,
    settings_dialog_markup,
};
use dashboard_enhancer::{DashboardEnhancer, EnhancerError, EnhancerResult};

fn build_enhancer() -> DashboardEnhancer<MemoryStorage, HeadlessShell> {
    DashboardEnhancer::with_default_config(MemoryStorage::default(), HeadlessShell::default())
        .expect("enhancer init")
}

#[test]
fn view_model_mirrors_record() {
    let record = SettingsRecord::default()
        .with_dark_mode(true)
        .with_chart_theme(ChartTheme::Seaborn);
    let model = SettingsDialogModel::from_record(&record, 30_000);

    assert_eq!(model.title, "Dashboard Settings");
    let headings: Vec<&str> = model.sections.iter().map(|s| s.heading.as_str()).collect();
    assert_eq!(
        headings,
        vec!["Display Options", "Chart Settings", "Notification Settings"]
    );

    match model.control(SettingsField::DarkMode) {
        Some(SettingsControl::Toggle { checked, .. }) => assert!(*checked),
        other => panic!("unexpected dark mode control: {other:?}"),
    }
    match model.control(SettingsField::AutoRefresh) {
        Some(SettingsControl::Toggle { label, .. }) => assert_eq!(label, "Auto Refresh (30s)"),
        other => panic!("unexpected auto refresh control: {other:?}"),
    }
    match model.control(SettingsField::ChartTheme) {
        Some(SettingsControl::Select { options, .. }) => {
            let selected: Vec<&str> = options
                .iter()
                .filter(|o| o.selected)
                .map(|o| o.value.as_str())
                .collect();
            assert_eq!(selected, vec!["seaborn"]);
            assert_eq!(options.len(), 4);
        }
        other => panic!("unexpected theme control: {other:?}"),
    }
    assert_eq!(model.to_record(), record);
    assert_eq!(
        model.actions,
        vec![DialogAction::SaveSettings, DialogAction::Cancel]
    );
}

#[test]
fn edited_form_reads_back_as_complete_record() {
    let mut model = SettingsDialogModel::from_record(&SettingsRecord::default(), 30_000);
    model
        .set_toggle(SettingsField::Animations, false)
        .expect("toggle");
    model
        .set_toggle(SettingsField::SoundAlerts, true)
        .expect("toggle");
    model.select_theme(ChartTheme::Dark);

    assert_eq!(
        model.to_record(),
        SettingsRecord::default()
            .with_animations(false)
            .with_sound_alerts(true)
            .with_chart_theme(ChartTheme::Dark)
    );

    let err = model
        .set_toggle(SettingsField::ChartTheme, true)
        .expect_err("select is not a toggle");
    assert!(matches!(err, EnhancerError::InvalidData(_)));
}

#[test]
fn markup_reflects_form_state() {
    let record = SettingsRecord::default().with_show_gridlines(false);
    let markup = settings_dialog_markup(&SettingsDialogModel::from_record(&record, 30_000));

    assert!(markup.contains(r#"<input type="checkbox" id="animations" checked>"#));
    assert!(markup.contains(r#"<input type="checkbox" id="showGridlines">"#));
    assert!(markup.contains(r#"<option value="light" selected>Light</option>"#));
    assert!(markup.contains("Save Settings"));

    let automation = automation_dialog_markup(&AutomationDialogModel::default());
    assert!(automation.contains("<li>SLA breach notifications</li>"));
    assert!(automation.contains("Connect to n8n"));
}

#[test]
fn show_settings_is_populated_from_persisted_record() {
    let storage = MemoryStorage::with_slot(DEFAULT_STORAGE_KEY, r#"{"soundAlerts":true}"#);
    let mut enhancer =
        DashboardEnhancer::with_default_config(storage, HeadlessShell::default())
            .expect("enhancer init");

    enhancer.show_settings();
    let model = enhancer.settings_dialog_mut().expect("settings open");
    assert!(model.to_record().sound_alerts);
    assert!(enhancer.open_dialog_markup().is_some());
}

#[test]
fn submit_saves_applies_closes_and_notifies() {
    let mut enhancer = build_enhancer();
    enhancer.show_settings();
    enhancer
        .settings_dialog_mut()
        .expect("settings open")
        .set_toggle(SettingsField::DarkMode, true)
        .expect("toggle");

    let saved = enhancer.submit_settings_dialog().expect("submit");

    assert!(saved.dark_mode);
    assert_eq!(enhancer.load_settings(), saved);
    assert!(enhancer.page_flags().dark_mode);
    assert_eq!(enhancer.open_dialog_kind(), None);
    let last = enhancer.notifications().last().expect("notification");
    assert_eq!(last.message, "Settings saved successfully!");
    assert_eq!(last.severity, Severity::Success);
}

#[test]
fn submit_without_open_dialog_is_rejected() {
    let mut enhancer = build_enhancer();
    assert!(enhancer.submit_settings_dialog().is_err());
}

#[test]
fn cancel_closes_without_saving() {
    let mut enhancer = build_enhancer();
    enhancer.show_settings();
    assert!(enhancer.close_dialog());
    assert!(!enhancer.close_dialog());
    assert_eq!(enhancer.store().storage().write_count(), 0);
}

#[test]
fn browser_notifications_without_permission_posts_fallback_notice() {
    let shell = HeadlessShell::default().with_notification_permission(NotificationPermission::Denied);
    let mut enhancer = DashboardEnhancer::with_default_config(MemoryStorage::default(), shell)
        .expect("enhancer init");

    enhancer
        .save_settings(&SettingsRecord::default().with_browser_notifications(true))
        .expect("save");

    let messages: Vec<&str> = enhancer.notifications().map(|n| n.message.as_str()).collect();
    assert_eq!(
        messages,
        vec![
            "Settings saved successfully!",
            "Browser notifications are unavailable; using in-page notifications",
        ]
    );
}

#[test]
fn granted_browser_notifications_post_no_fallback() {
    let shell =
        HeadlessShell::default().with_notification_permission(NotificationPermission::Granted);
    let mut enhancer = DashboardEnhancer::with_default_config(MemoryStorage::default(), shell)
        .expect("enhancer init");

    enhancer
        .save_settings(&SettingsRecord::default().with_browser_notifications(true))
        .expect("save");
    assert_eq!(enhancer.notification_count(), 1);
}

struct ReadOnlyStorage;

impl SettingsStorage for ReadOnlyStorage {
    fn read(&self, _key: &str) -> EnhancerResult<Option<String>> {
        Ok(None)
    }

    fn write(&mut self, _key: &str, _value: &str) -> EnhancerResult<()> {
        Err(EnhancerError::Storage("read-only profile".to_owned()))
    }
}

#[test]
fn failed_save_keeps_dialog_and_applied_state() {
    let mut enhancer =
        DashboardEnhancer::with_default_config(ReadOnlyStorage, HeadlessShell::default())
            .expect("enhancer init");
    enhancer.show_settings();

    let err = enhancer
        .save_settings(&SettingsRecord::default().with_dark_mode(true))
        .expect_err("write fails");

    assert!(matches!(err, EnhancerError::Storage(_)));
    assert_eq!(enhancer.open_dialog_kind(), Some(DialogKind::Settings));
    assert_eq!(enhancer.page_flags(), PageFlags::default());
    let last = enhancer.notifications().last().expect("notification");
    assert_eq!(last.severity, Severity::Error);
}
