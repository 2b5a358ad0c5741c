use crate::core::PageNode;

/// Rendering-layer predicate deciding which inserted nodes are charts.
pub trait ChartClassifier {
    fn is_chart(&self, node: &PageNode) -> bool;
}

pub const DEFAULT_CHART_MARKER_CLASS: &str = "plotly-graph-div";

/// Matches nodes carrying a stable CSS marker class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassMarkerClassifier {
    marker: String,
}

impl ClassMarkerClassifier {
    #[must_use]
    pub fn new(marker: impl Into<String>) -> Self {
        Self {
            marker: marker.into(),
        }
    }

    #[must_use]
    pub fn marker(&self) -> &str {
        &self.marker
    }
}

impl Default for ClassMarkerClassifier {
    fn default() -> Self {
        Self::new(DEFAULT_CHART_MARKER_CLASS)
    }
}

impl ChartClassifier for ClassMarkerClassifier {
    fn is_chart(&self, node: &PageNode) -> bool {
        node.has_class(&self.marker)
    }
}
