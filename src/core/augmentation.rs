use serde::{Deserialize, Serialize};
use smallvec::{SmallVec, smallvec};

use super::NodeId;

/// Button attached to an augmented chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ToolbarAction {
    Download,
    Zoom,
}

impl ToolbarAction {
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Download => "Download Chart",
            Self::Zoom => "Zoom",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartToolbar {
    pub actions: SmallVec<[ToolbarAction; 2]>,
}

impl Default for ChartToolbar {
    fn default() -> Self {
        Self {
            actions: smallvec![ToolbarAction::Download, ToolbarAction::Zoom],
        }
    }
}

/// Displayed state of a liveness badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum LivenessState {
    #[default]
    Online,
    Degraded,
}

impl LivenessState {
    #[must_use]
    pub const fn css_class(self) -> &'static str {
        match self {
            Self::Online => "status-online",
            Self::Degraded => "status-warning",
        }
    }
}

/// Cosmetic "Live Data" badge. Its state is simulated, not measured.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LivenessIndicator {
    pub state: LivenessState,
    pub label: String,
    pub refreshed_at_ms: Option<u64>,
}

impl Default for LivenessIndicator {
    fn default() -> Self {
        Self {
            state: LivenessState::Online,
            label: "Live Data".to_owned(),
            refreshed_at_ms: None,
        }
    }
}

/// Everything attached to one chart node. Presence of the entry is the
/// node's augmentation marker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartAugmentation {
    pub node: NodeId,
    pub element_id: Option<String>,
    pub toolbar: ChartToolbar,
    pub indicator: LivenessIndicator,
    pub augmented_at_ms: u64,
}
