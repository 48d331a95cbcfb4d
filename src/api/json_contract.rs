use serde::{Deserialize, Serialize};

use crate::error::{StorefrontError, StorefrontResult};

use super::PageSnapshot;

pub const PAGE_SNAPSHOT_JSON_SCHEMA_V1: u32 = 1;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageSnapshotJsonContractV1 {
    pub schema_version: u32,
    pub snapshot: PageSnapshot,
}

impl PageSnapshot {
    pub fn to_json_pretty(&self) -> StorefrontResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            StorefrontError::InvalidData(format!("failed to serialize snapshot json: {e}"))
        })
    }

    pub fn to_json_contract_v1_pretty(&self) -> StorefrontResult<String> {
        let payload = PageSnapshotJsonContractV1 {
            schema_version: PAGE_SNAPSHOT_JSON_SCHEMA_V1,
            snapshot: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            StorefrontError::InvalidData(format!("failed to serialize snapshot contract v1: {e}"))
        })
    }

    /// Accepts either a bare snapshot or a versioned contract payload.
    pub fn from_json_compat_str(input: &str) -> StorefrontResult<Self> {
        if let Ok(snapshot) = serde_json::from_str::<PageSnapshot>(input) {
            return Ok(snapshot);
        }
        let payload: PageSnapshotJsonContractV1 = serde_json::from_str(input).map_err(|e| {
            StorefrontError::InvalidData(format!("failed to parse snapshot json payload: {e}"))
        })?;
        if payload.schema_version != PAGE_SNAPSHOT_JSON_SCHEMA_V1 {
            return Err(StorefrontError::InvalidData(format!(
                "unsupported snapshot schema version: {}",
                payload.schema_version
            )));
        }
        Ok(payload.snapshot)
    }
}
