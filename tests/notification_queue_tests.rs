use dashboard_enhancer::DashboardEnhancer;
use dashboard_enhancer::core::{NotificationPhase, Severity};
use dashboard_enhancer::persistence::MemoryStorage;
use dashboard_enhancer::render::{HeadlessShell, notification_markup};

fn build_enhancer() -> DashboardEnhancer<MemoryStorage, HeadlessShell> {
    DashboardEnhancer::with_default_config(MemoryStorage::default(), HeadlessShell::default())
        .expect("enhancer init")
}

fn messages(enhancer: &DashboardEnhancer<MemoryStorage, HeadlessShell>) -> Vec<String> {
    enhancer
        .notifications()
        .map(|notification| notification.message.clone())
        .collect()
}

#[test]
fn notifications_display_in_posting_order() {
    let mut enhancer = build_enhancer();
    enhancer.notify("first");
    enhancer.post_notification("second", Severity::Success);
    enhancer.post_notification("third", Severity::Error);

    assert_eq!(messages(&enhancer), vec!["first", "second", "third"]);
    let severities: Vec<Severity> = enhancer.notifications().map(|n| n.severity).collect();
    assert_eq!(
        severities,
        vec![Severity::Info, Severity::Success, Severity::Error]
    );
}

#[test]
fn removal_is_two_phase() {
    let mut enhancer = build_enhancer();
    let id = enhancer.notify("saved");

    enhancer.advance_by(2_999);
    assert_eq!(
        enhancer.notification(id).expect("present").phase,
        NotificationPhase::Visible
    );

    enhancer.advance_by(1);
    assert_eq!(
        enhancer.notification(id).expect("still attached").phase,
        NotificationPhase::Exiting
    );

    enhancer.advance_by(299);
    assert!(enhancer.notification(id).is_some());

    enhancer.advance_by(1);
    assert!(enhancer.notification(id).is_none());
    assert_eq!(enhancer.notification_count(), 0);
}

#[test]
fn each_notification_has_an_independent_lifetime() {
    let mut enhancer = build_enhancer();
    let early = enhancer.notify("early");
    enhancer.advance_by(1_000);
    let late = enhancer.notify("late");

    enhancer.advance_by(2_300);
    assert!(enhancer.notification(early).is_none());
    assert_eq!(
        enhancer.notification(late).expect("late present").phase,
        NotificationPhase::Visible
    );

    enhancer.advance_by(1_000);
    assert!(enhancer.notification(late).is_none());
}

#[test]
fn creation_timestamp_uses_virtual_clock() {
    let mut enhancer = build_enhancer();
    enhancer.advance_to(12_345).expect("advance");
    let id = enhancer.notify("stamped");
    assert_eq!(
        enhancer.notification(id).expect("present").created_at_ms,
        12_345
    );
}

#[test]
fn clock_cannot_move_backwards() {
    let mut enhancer = build_enhancer();
    enhancer.advance_by(500);
    assert!(enhancer.advance_to(100).is_err());
    assert_eq!(enhancer.now_ms(), 500);
}

#[test]
fn markup_reflects_severity_phase_and_escapes_text() {
    let mut enhancer = build_enhancer();
    let id = enhancer.post_notification("<b>done</b>", Severity::Success);

    let markup = notification_markup(enhancer.notification(id).expect("present"));
    assert!(markup.contains("notification-success"));
    assert!(markup.contains("&lt;b&gt;done&lt;/b&gt;"));
    assert!(!markup.contains("notification-exiting"));

    enhancer.advance_by(3_000);
    let markup = notification_markup(enhancer.notification(id).expect("exiting"));
    assert!(markup.contains("notification-exiting"));
}
