//! Replaceable collaborators live here.
//!
//! Keep them behind small traits and avoid coupling them into core paths.

pub mod classifier;
pub mod liveness;

pub use classifier::{ChartClassifier, ClassMarkerClassifier, DEFAULT_CHART_MARKER_CLASS};
pub use liveness::{
    DEFAULT_ONLINE_PROBABILITY, FixedLivenessProbe, LivenessProbe, SimulatedLivenessProbe,
};
