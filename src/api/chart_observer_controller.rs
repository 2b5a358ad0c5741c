use tracing::{debug, trace};

use crate::core::{
    ChartAugmentation, ChartToolbar, LivenessIndicator, MutationRecord, NodeId, PageNode,
    Severity, ToolbarAction,
};
use crate::error::{EnhancerError, EnhancerResult};
use crate::extensions::ChartClassifier;
use crate::persistence::SettingsStorage;
use crate::render::PageShell;

use super::DashboardEnhancer;

impl<S: SettingsStorage, P: PageShell> DashboardEnhancer<S, P> {
    /// Consumes one batch from the page's subtree observer.
    ///
    /// Every added subtree is walked in document order and each chart node is
    /// augmented at most once, even when the batch reports a chart both on its
    /// own and inside an added ancestor. Removed subtrees drop their markers.
    /// Returns the number of charts newly augmented.
    pub fn observe_mutations(&mut self, batch: &[MutationRecord]) -> usize {
        let mut augmented = 0;
        for record in batch {
            for root in &record.added {
                let mut charts = Vec::new();
                root.walk(&mut |node| {
                    if self.core.classifier.is_chart(node) {
                        charts.push(node);
                    }
                });
                for node in charts {
                    if self.augment_chart(node) {
                        augmented += 1;
                    }
                }
            }
            for root in &record.removed {
                root.walk(&mut |node| {
                    if self.core.charts.shift_remove(&node.id).is_some() {
                        trace!(node = %node.id, "released chart augmentation");
                    }
                });
            }
        }
        if augmented > 0 {
            debug!(augmented, total = self.core.charts.len(), "augmented charts");
        }
        augmented
    }

    /// Attaches the toolbar and liveness indicator to `node` unless it already
    /// carries them. Classification is the caller's job here; returns `true`
    /// when a new augmentation was attached.
    pub fn augment_chart(&mut self, node: &PageNode) -> bool {
        if self.core.charts.contains_key(&node.id) {
            trace!(node = %node.id, "chart already augmented");
            return false;
        }
        self.core.charts.insert(
            node.id,
            ChartAugmentation {
                node: node.id,
                element_id: node.element_id.clone(),
                toolbar: ChartToolbar::default(),
                indicator: LivenessIndicator::default(),
                augmented_at_ms: self.core.now_ms,
            },
        );
        true
    }

    /// Drops the augmentation marker of a node removed from the page.
    pub fn release_chart(&mut self, node: NodeId) -> bool {
        self.core.charts.shift_remove(&node).is_some()
    }

    #[must_use]
    pub fn chart(&self, node: NodeId) -> Option<&ChartAugmentation> {
        self.core.charts.get(&node)
    }

    /// Augmented charts in augmentation order.
    pub fn charts(&self) -> impl Iterator<Item = &ChartAugmentation> {
        self.core.charts.values()
    }

    #[must_use]
    pub fn chart_count(&self) -> usize {
        self.core.charts.len()
    }

    /// Replaces the rendering layer's chart predicate.
    pub fn set_chart_classifier(&mut self, classifier: Box<dyn ChartClassifier>) {
        self.core.classifier = classifier;
    }

    /// Runs a chart toolbar button. Both actions are stubs that only notify.
    pub fn invoke_toolbar_action(
        &mut self,
        node: NodeId,
        action: ToolbarAction,
    ) -> EnhancerResult<()> {
        if !self.core.charts.contains_key(&node) {
            return Err(EnhancerError::UnknownChart(node));
        }
        let message = match action {
            ToolbarAction::Download => "Downloading chart...",
            ToolbarAction::Zoom => "Chart zoom enabled",
        };
        self.post_notification(message, Severity::Info);
        Ok(())
    }
}
