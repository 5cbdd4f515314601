use buildenv_core::{Aggregate, ModelResult, RawMapping};
use serde::{Deserialize, Serialize};

use crate::enums::MachineType;

/// Sizing attributes for attribute-based compute.
///
/// Memory and disk are expressed in GiB.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "RawMapping")]
pub struct ComputeConfiguration {
    #[serde(skip_serializing_if = "Option::is_none")]
    v_cpu: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    memory: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    disk: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    machine_type: Option<MachineType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    instance_type: Option<String>,
}

impl ComputeConfiguration {
    pub fn builder() -> ComputeConfigurationBuilder {
        ComputeConfigurationBuilder::default()
    }

    pub fn v_cpu(&self) -> Option<i64> {
        self.v_cpu
    }

    pub fn memory(&self) -> Option<i64> {
        self.memory
    }

    pub fn disk(&self) -> Option<i64> {
        self.disk
    }

    pub fn machine_type(&self) -> Option<&MachineType> {
        self.machine_type.as_ref()
    }

    pub fn instance_type(&self) -> Option<&str> {
        self.instance_type.as_deref()
    }
}

impl Aggregate for ComputeConfiguration {
    const SHAPE: &'static str = "ComputeConfiguration";

    fn from_mapping(mut raw: RawMapping) -> ModelResult<Self> {
        Ok(Self {
            v_cpu: raw.take_i64(Self::SHAPE, "vCpu")?,
            memory: raw.take_i64(Self::SHAPE, "memory")?,
            disk: raw.take_i64(Self::SHAPE, "disk")?,
            machine_type: raw.take_str(Self::SHAPE, "machineType")?.map(MachineType::from),
            instance_type: raw.take_str(Self::SHAPE, "instanceType")?,
        })
    }
}

impl_try_from_raw!(ComputeConfiguration);

/// Builder for [`ComputeConfiguration`]. Every field is optional.
#[derive(Debug, Default)]
pub struct ComputeConfigurationBuilder {
    inner: ComputeConfiguration,
}

impl ComputeConfigurationBuilder {
    pub fn v_cpu(mut self, v_cpu: i64) -> Self {
        self.inner.v_cpu = Some(v_cpu);
        self
    }

    pub fn memory(mut self, memory: i64) -> Self {
        self.inner.memory = Some(memory);
        self
    }

    pub fn disk(mut self, disk: i64) -> Self {
        self.inner.disk = Some(disk);
        self
    }

    pub fn machine_type(mut self, machine_type: impl Into<MachineType>) -> Self {
        self.inner.machine_type = Some(machine_type.into());
        self
    }

    pub fn instance_type(mut self, instance_type: impl Into<String>) -> Self {
        self.inner.instance_type = Some(instance_type.into());
        self
    }

    pub fn build(self) -> ComputeConfiguration {
        self.inner
    }
}
