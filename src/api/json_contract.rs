use serde::{Deserialize, Serialize};

use crate::error::{EnhancerError, EnhancerResult};
use crate::persistence::SettingsStorage;
use crate::render::PageShell;

use super::{DashboardEnhancer, EnhancerSnapshot};

pub const ENHANCER_SNAPSHOT_JSON_SCHEMA_V1: u32 = 1;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnhancerSnapshotJsonContractV1 {
    pub schema_version: u32,
    pub snapshot: EnhancerSnapshot,
}

impl EnhancerSnapshot {
    pub fn to_json_contract_v1_pretty(&self) -> EnhancerResult<String> {
        let payload = EnhancerSnapshotJsonContractV1 {
            schema_version: ENHANCER_SNAPSHOT_JSON_SCHEMA_V1,
            snapshot: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            EnhancerError::InvalidData(format!("failed to serialize snapshot contract v1: {e}"))
        })
    }

    /// Accepts either a bare snapshot or a versioned contract payload.
    pub fn from_json_compat_str(input: &str) -> EnhancerResult<Self> {
        if let Ok(snapshot) = serde_json::from_str::<EnhancerSnapshot>(input) {
            return Ok(snapshot);
        }
        let payload: EnhancerSnapshotJsonContractV1 =
            serde_json::from_str(input).map_err(|e| {
                EnhancerError::InvalidData(format!("failed to parse snapshot json payload: {e}"))
            })?;
        if payload.schema_version != ENHANCER_SNAPSHOT_JSON_SCHEMA_V1 {
            return Err(EnhancerError::InvalidData(format!(
                "unsupported snapshot schema version: {}",
                payload.schema_version
            )));
        }
        Ok(payload.snapshot)
    }
}

impl<S: SettingsStorage, P: PageShell> DashboardEnhancer<S, P> {
    pub fn snapshot_json_contract_v1_pretty(&self) -> EnhancerResult<String> {
        self.snapshot().to_json_contract_v1_pretty()
    }
}
