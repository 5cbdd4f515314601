use buildenv_core::{Aggregate, ModelError, ModelResult, RawMapping};
use serde::{Deserialize, Serialize};

use crate::enums::ComputeType;

/// An external Docker server used by builds for image builds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "RawMapping")]
pub struct DockerServer {
    compute_type: ComputeType,
    #[serde(skip_serializing_if = "Option::is_none")]
    security_group_ids: Option<Vec<String>>,
    #[serde(skip_serializing)]
    status: Option<DockerServerStatus>,
}

impl DockerServer {
    pub fn builder() -> DockerServerBuilder {
        DockerServerBuilder::default()
    }

    pub fn compute_type(&self) -> &ComputeType {
        &self.compute_type
    }

    /// Security groups for the server; empty when unset
    pub fn security_group_ids(&self) -> &[String] {
        self.security_group_ids.as_deref().unwrap_or_default()
    }

    /// Reported by the service, never sent on requests
    pub fn status(&self) -> Option<&DockerServerStatus> {
        self.status.as_ref()
    }
}

impl Aggregate for DockerServer {
    const SHAPE: &'static str = "DockerServer";

    fn from_mapping(mut raw: RawMapping) -> ModelResult<Self> {
        let compute_type = raw
            .take_required_str(Self::SHAPE, "computeType")
            .map(ComputeType::from)?;

        Ok(Self {
            compute_type,
            security_group_ids: raw.take_str_list(Self::SHAPE, "securityGroupIds")?,
            status: raw.take_nested(Self::SHAPE, "status")?,
        })
    }
}

impl_try_from_raw!(DockerServer);

#[derive(Debug, Default)]
pub struct DockerServerBuilder {
    compute_type: Option<ComputeType>,
    security_group_ids: Option<Vec<String>>,
}

impl DockerServerBuilder {
    pub fn compute_type(mut self, compute_type: impl Into<ComputeType>) -> Self {
        self.compute_type = Some(compute_type.into());
        self
    }

    pub fn security_group_ids<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.security_group_ids = Some(ids.into_iter().map(Into::into).collect());
        self
    }

    pub fn build(self) -> ModelResult<DockerServer> {
        let compute_type = self
            .compute_type
            .ok_or_else(|| ModelError::missing(DockerServer::SHAPE, "computeType"))?;

        Ok(DockerServer {
            compute_type,
            security_group_ids: self.security_group_ids,
            status: None,
        })
    }
}

/// Provisioning state of a Docker server.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "RawMapping")]
pub struct DockerServerStatus {
    #[serde(skip_serializing_if = "Option::is_none")]
    status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<String>,
}

impl DockerServerStatus {
    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}

impl Aggregate for DockerServerStatus {
    const SHAPE: &'static str = "DockerServerStatus";

    fn from_mapping(mut raw: RawMapping) -> ModelResult<Self> {
        Ok(Self {
            status: raw.take_str(Self::SHAPE, "status")?,
            message: raw.take_str(Self::SHAPE, "message")?,
        })
    }
}

impl_try_from_raw!(DockerServerStatus);
