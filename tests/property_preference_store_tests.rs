use dashboard_enhancer::api::{DEFAULT_STORAGE_KEY, PreferenceStore};
use dashboard_enhancer::core::{ChartTheme, SettingsRecord};
use dashboard_enhancer::persistence::MemoryStorage;
use proptest::prelude::*;
use serde_json::{Map, Value, json};

fn theme_strategy() -> impl Strategy<Value = ChartTheme> {
    prop::sample::select(ChartTheme::ALL.to_vec())
}

fn record_strategy() -> impl Strategy<Value = SettingsRecord> {
    (
        any::<bool>(),
        any::<bool>(),
        any::<bool>(),
        theme_strategy(),
        any::<bool>(),
        any::<bool>(),
        any::<bool>(),
    )
        .prop_map(
            |(dark, animations, auto_refresh, theme, gridlines, browser, sound)| {
                SettingsRecord::default()
                    .with_dark_mode(dark)
                    .with_animations(animations)
                    .with_auto_refresh(auto_refresh)
                    .with_chart_theme(theme)
                    .with_show_gridlines(gridlines)
                    .with_browser_notifications(browser)
                    .with_sound_alerts(sound)
            },
        )
}

fn field_value(record: &SettingsRecord, key: &str) -> Value {
    match key {
        "darkMode" => json!(record.dark_mode),
        "animations" => json!(record.animations),
        "autoRefresh" => json!(record.auto_refresh),
        "chartTheme" => json!(record.chart_theme.as_str()),
        "showGridlines" => json!(record.show_gridlines),
        "browserNotifications" => json!(record.browser_notifications),
        "soundAlerts" => json!(record.sound_alerts),
        other => panic!("unexpected field {other}"),
    }
}

proptest! {
    #[test]
    fn any_field_subset_loads_complete_record(
        source in record_strategy(),
        mask in prop::collection::vec(any::<bool>(), 7),
    ) {
        let mut object = Map::new();
        for (key, keep) in SettingsRecord::FIELD_NAMES.iter().zip(&mask) {
            if *keep {
                object.insert((*key).to_owned(), field_value(&source, key));
            }
        }
        let raw = Value::Object(object).to_string();
        let store = PreferenceStore::new(
            MemoryStorage::with_slot(DEFAULT_STORAGE_KEY, raw),
            DEFAULT_STORAGE_KEY,
        );
        let loaded = store.load();
        let defaults = SettingsRecord::default();

        for (key, keep) in SettingsRecord::FIELD_NAMES.iter().zip(&mask) {
            let expected = if *keep { &source } else { &defaults };
            prop_assert_eq!(field_value(&loaded, key), field_value(expected, key));
        }
    }

    #[test]
    fn save_then_load_is_identity(record in record_strategy()) {
        let mut store = PreferenceStore::new(MemoryStorage::default(), DEFAULT_STORAGE_KEY);
        store.save(&record).expect("save");
        prop_assert_eq!(store.load(), record);
    }
}
