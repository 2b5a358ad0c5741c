use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::core::{LivenessState, NodeId};
use crate::error::{EnhancerError, EnhancerResult};

/// Source of the state shown by each chart's liveness badge.
///
/// The default implementation is a cosmetic simulation. A host with a real
/// health check replaces it through
/// [`DashboardEnhancer::set_liveness_probe`](crate::api::DashboardEnhancer::set_liveness_probe).
pub trait LivenessProbe {
    fn id(&self) -> &str;
    fn sample(&mut self, node: NodeId) -> LivenessState;
}

pub const DEFAULT_ONLINE_PROBABILITY: f64 = 0.9;

/// Simulated data-freshness badge: each sample is independently online with
/// `online_probability`, degraded otherwise. It does not check connectivity.
#[derive(Debug, Clone)]
pub struct SimulatedLivenessProbe {
    rng: StdRng,
    online_probability: f64,
}

impl SimulatedLivenessProbe {
    #[must_use]
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
            online_probability: DEFAULT_ONLINE_PROBABILITY,
        }
    }

    /// Reproducible sequence for tests and replays.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            online_probability: DEFAULT_ONLINE_PROBABILITY,
        }
    }

    pub fn with_online_probability(mut self, probability: f64) -> EnhancerResult<Self> {
        if !probability.is_finite() || !(0.0..=1.0).contains(&probability) {
            return Err(EnhancerError::InvalidData(
                "liveness online probability must be within [0, 1]".to_owned(),
            ));
        }
        self.online_probability = probability;
        Ok(self)
    }

    #[must_use]
    pub fn online_probability(&self) -> f64 {
        self.online_probability
    }
}

impl Default for SimulatedLivenessProbe {
    fn default() -> Self {
        Self::new()
    }
}

impl LivenessProbe for SimulatedLivenessProbe {
    fn id(&self) -> &str {
        "simulated"
    }

    fn sample(&mut self, _node: NodeId) -> LivenessState {
        if self.rng.gen_bool(self.online_probability) {
            LivenessState::Online
        } else {
            LivenessState::Degraded
        }
    }
}

/// Always reports the same state.
#[derive(Debug, Clone, Copy)]
pub struct FixedLivenessProbe(pub LivenessState);

impl LivenessProbe for FixedLivenessProbe {
    fn id(&self) -> &str {
        "fixed"
    }

    fn sample(&mut self, _node: NodeId) -> LivenessState {
        self.0
    }
}
