use dashboard_enhancer::api::{DEFAULT_STORAGE_KEY, PreferenceStore};
use dashboard_enhancer::core::{ChartTheme, SettingsRecord};
use dashboard_enhancer::persistence::{MemoryStorage, SettingsStorage};
use dashboard_enhancer::{EnhancerError, EnhancerResult};

fn store_with(raw: &str) -> PreferenceStore<MemoryStorage> {
    PreferenceStore::new(
        MemoryStorage::with_slot(DEFAULT_STORAGE_KEY, raw),
        DEFAULT_STORAGE_KEY,
    )
}

#[test]
fn missing_slot_loads_documented_defaults() {
    let store = PreferenceStore::new(MemoryStorage::default(), DEFAULT_STORAGE_KEY);
    let record = store.load();

    assert_eq!(record, SettingsRecord::default());
    assert!(!record.dark_mode);
    assert!(record.animations);
    assert!(record.auto_refresh);
    assert_eq!(record.chart_theme, ChartTheme::Light);
    assert!(record.show_gridlines);
    assert!(!record.browser_notifications);
    assert!(!record.sound_alerts);
}

#[test]
fn partial_slot_is_merged_over_defaults() {
    let store = store_with(r#"{"darkMode":true,"chartTheme":"seaborn"}"#);
    let record = store.load();

    assert_eq!(
        record,
        SettingsRecord::default()
            .with_dark_mode(true)
            .with_chart_theme(ChartTheme::Seaborn)
    );
}

#[test]
fn corrupt_slot_falls_back_to_defaults() {
    for raw in ["", "not json", "null", "42", r#"["darkMode"]"#, r#"{"darkMode":"#] {
        let store = store_with(raw);
        assert_eq!(store.load(), SettingsRecord::default(), "payload {raw:?}");
    }
}

#[test]
fn save_then_load_round_trips() {
    let mut store = PreferenceStore::new(MemoryStorage::default(), DEFAULT_STORAGE_KEY);
    let record = SettingsRecord::default()
        .with_dark_mode(true)
        .with_animations(false)
        .with_chart_theme(ChartTheme::Ggplot2)
        .with_sound_alerts(true);

    store.save(&record).expect("save");
    assert_eq!(store.load(), record);
}

#[test]
fn save_drops_unknown_fields_and_writes_canonical_record() {
    let mut store = store_with(r#"{"darkMode":true,"legacyZoom":3,"chartTheme":"plotly_dark"}"#);
    let loaded = store.load();
    assert!(loaded.dark_mode);
    assert_eq!(loaded.chart_theme, ChartTheme::Dark);

    store.save(&loaded).expect("save");
    let raw = store.storage().raw(DEFAULT_STORAGE_KEY).expect("slot written");
    let value: serde_json::Value = serde_json::from_str(raw).expect("json");
    let object = value.as_object().expect("object");

    assert_eq!(object.len(), 7);
    assert!(!object.contains_key("legacyZoom"));
    assert_eq!(object["chartTheme"], "dark");
}

#[test]
fn save_fully_replaces_prior_value() {
    let mut store = store_with(r#"{"darkMode":true,"soundAlerts":true}"#);
    store.save(&SettingsRecord::default()).expect("save");

    assert_eq!(store.load(), SettingsRecord::default());
    assert_eq!(store.storage().write_count(), 1);
}

struct FailingStorage;

impl SettingsStorage for FailingStorage {
    fn read(&self, _key: &str) -> EnhancerResult<Option<String>> {
        Err(EnhancerError::Storage("slot locked".to_owned()))
    }

    fn write(&mut self, _key: &str, _value: &str) -> EnhancerResult<()> {
        Err(EnhancerError::Storage("quota exceeded".to_owned()))
    }
}

#[test]
fn unreadable_storage_loads_defaults_and_write_errors_propagate() {
    let mut store = PreferenceStore::new(FailingStorage, DEFAULT_STORAGE_KEY);
    assert_eq!(store.load(), SettingsRecord::default());

    let err = store
        .save(&SettingsRecord::default())
        .expect_err("write must fail");
    assert!(matches!(err, EnhancerError::Storage(_)));
}
