use criterion::{Criterion, criterion_group, criterion_main};
use dashboard_enhancer::DashboardEnhancer;
use dashboard_enhancer::core::{MutationRecord, NodeId, PageNode, SettingsRecord};
use dashboard_enhancer::persistence::MemoryStorage;
use dashboard_enhancer::render::HeadlessShell;
use std::hint::black_box;

fn build_enhancer() -> DashboardEnhancer<MemoryStorage, HeadlessShell> {
    DashboardEnhancer::with_default_config(MemoryStorage::default(), HeadlessShell::default())
        .expect("enhancer init")
}

fn dashboard_batch(panels: u64) -> Vec<MutationRecord> {
    let roots = (0..panels)
        .map(|i| {
            let base = i * 10;
            PageNode::new(NodeId(base))
                .with_class("card")
                .with_child(PageNode::new(NodeId(base + 1)).with_class("card-header"))
                .with_child(
                    PageNode::new(NodeId(base + 2))
                        .with_class("card-body")
                        .with_child(
                            PageNode::new(NodeId(base + 3))
                                .with_element_id(format!("chart-{i}"))
                                .with_class("plotly-graph-div")
                                .with_class("js-plotly-plot"),
                        ),
                )
        })
        .collect();
    vec![MutationRecord::added(roots)]
}

fn bench_mutation_batch_500_panels(c: &mut Criterion) {
    let batch = dashboard_batch(500);

    c.bench_function("mutation_batch_500_panels", |b| {
        b.iter(|| {
            let mut enhancer = build_enhancer();
            let augmented = enhancer.observe_mutations(black_box(&batch));
            assert_eq!(augmented, 500);
        })
    });
}

fn bench_notification_burst_1k(c: &mut Criterion) {
    c.bench_function("notification_burst_1k_drain", |b| {
        b.iter(|| {
            let mut enhancer = build_enhancer();
            for i in 0..1_000u64 {
                enhancer.notify(format!("ticket #{i} updated"));
                enhancer.advance_by(black_box(7));
            }
            enhancer.advance_by(10_000);
            assert_eq!(enhancer.notification_count(), 0);
        })
    });
}

fn bench_settings_merge(c: &mut Criterion) {
    let payload = SettingsRecord::default()
        .with_dark_mode(true)
        .to_json()
        .expect("serialize settings");

    c.bench_function("settings_merge_over_defaults", |b| {
        b.iter(|| {
            let _ = SettingsRecord::merge_over_defaults(black_box(&payload))
                .expect("merge should succeed");
        })
    });
}

criterion_group!(
    benches,
    bench_mutation_batch_500_panels,
    bench_notification_burst_1k,
    bench_settings_merge
);
criterion_main!(benches);
