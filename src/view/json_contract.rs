use serde::{Deserialize, Serialize};

use crate::error::{MapError, MapResult};

use super::ViewConfiguration;

pub const VIEW_CONFIGURATION_JSON_SCHEMA_V1: u32 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewConfigurationJsonContractV1 {
    pub schema_version: u32,
    pub configuration: ViewConfiguration,
}

impl ViewConfiguration {
    pub fn to_json_contract_v1_pretty(&self) -> MapResult<String> {
        let payload = ViewConfigurationJsonContractV1 {
            schema_version: VIEW_CONFIGURATION_JSON_SCHEMA_V1,
            configuration: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            MapError::InvalidData(format!(
                "failed to serialize view configuration contract v1: {e}"
            ))
        })
    }

    /// Accepts either a bare configuration or a versioned v1 contract.
    pub fn from_json_compat_str(input: &str) -> MapResult<Self> {
        if let Ok(configuration) = serde_json::from_str::<ViewConfiguration>(input) {
            return Ok(configuration);
        }
        let payload: ViewConfigurationJsonContractV1 =
            serde_json::from_str(input).map_err(|e| {
                MapError::InvalidData(format!("failed to parse view configuration json: {e}"))
            })?;
        if payload.schema_version != VIEW_CONFIGURATION_JSON_SCHEMA_V1 {
            return Err(MapError::InvalidData(format!(
                "unsupported view configuration schema version: {}",
                payload.schema_version
            )));
        }
        Ok(payload.configuration)
    }
}
