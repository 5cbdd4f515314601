use buildenv_core::{Aggregate, ModelResult, RawMapping};
use serde::{Deserialize, Serialize};

/// A reserved compute fleet to run builds on.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "RawMapping")]
pub struct ProjectFleet {
    #[serde(skip_serializing_if = "Option::is_none")]
    fleet_arn: Option<String>,
}

impl ProjectFleet {
    pub fn new(fleet_arn: impl Into<String>) -> Self {
        Self {
            fleet_arn: Some(fleet_arn.into()),
        }
    }

    pub fn fleet_arn(&self) -> Option<&str> {
        self.fleet_arn.as_deref()
    }
}

impl Aggregate for ProjectFleet {
    const SHAPE: &'static str = "ProjectFleet";

    fn from_mapping(mut raw: RawMapping) -> ModelResult<Self> {
        Ok(Self {
            fleet_arn: raw.take_str(Self::SHAPE, "fleetArn")?,
        })
    }
}

impl_try_from_raw!(ProjectFleet);
