use buildenv_core::{Aggregate, ModelResult, RawMapping};
use serde::{Deserialize, Serialize};

use crate::enums::EnvironmentVariableType;

/// An environment variable made available to builds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "RawMapping")]
pub struct EnvironmentVariable {
    name: String,
    value: String,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    variable_type: Option<EnvironmentVariableType>,
}

impl EnvironmentVariable {
    pub fn new(
        name: impl Into<String>,
        value: impl Into<String>,
        variable_type: Option<EnvironmentVariableType>,
    ) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            variable_type,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The plaintext value, or the parameter/secret reference for the
    /// non-plaintext types
    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn variable_type(&self) -> Option<&EnvironmentVariableType> {
        self.variable_type.as_ref()
    }
}

impl Aggregate for EnvironmentVariable {
    const SHAPE: &'static str = "EnvironmentVariable";

    fn from_mapping(mut raw: RawMapping) -> ModelResult<Self> {
        let name = raw.take_required_str(Self::SHAPE, "name")?;
        let value = raw.take_required_str(Self::SHAPE, "value")?;
        let variable_type = raw.take_str(Self::SHAPE, "type")?.map(EnvironmentVariableType::from);

        Ok(Self {
            name,
            value,
            variable_type,
        })
    }
}

impl_try_from_raw!(EnvironmentVariable);
