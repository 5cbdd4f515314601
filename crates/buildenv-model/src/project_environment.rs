//! The build environment aggregate
//!
//! A [`ProjectEnvironment`] is validated once, when it is built, and is
//! read-only afterwards. It can be built three ways, all running the same
//! validation in the same order:
//!
//! - from a raw mapping ([`Aggregate::from_mapping`] / [`Aggregate::from_value`]),
//! - from a response body through `serde::Deserialize`,
//! - through [`ProjectEnvironment::builder`], whose nested setters take
//!   either built values or raw mappings.

use buildenv_core::{normalize, Aggregate, Input, ModelError, ModelResult, RawMapping};
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::compute_configuration::ComputeConfiguration;
use crate::docker_server::DockerServer;
use crate::enums::{ComputeType, EnvironmentType, ImagePullCredentialsType};
use crate::environment_variable::EnvironmentVariable;
use crate::fleet::ProjectFleet;
use crate::registry_credential::RegistryCredential;

/// Build environment of a build project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "RawMapping")]
pub struct ProjectEnvironment {
    #[serde(rename = "type")]
    environment_type: EnvironmentType,
    /// Image tag (`image:tag`) or digest (`image@digest`)
    image: String,
    compute_type: ComputeType,
    #[serde(skip_serializing_if = "Option::is_none")]
    compute_configuration: Option<ComputeConfiguration>,
    #[serde(skip_serializing_if = "Option::is_none")]
    fleet: Option<ProjectFleet>,
    // None and Some(empty) are kept apart so an explicitly empty list
    // is still sent.
    #[serde(skip_serializing_if = "Option::is_none")]
    environment_variables: Option<Vec<EnvironmentVariable>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    privileged_mode: Option<bool>,
    /// Storage path of a PEM certificate bundle
    #[serde(skip_serializing_if = "Option::is_none")]
    certificate: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    registry_credential: Option<RegistryCredential>,
    #[serde(skip_serializing_if = "Option::is_none")]
    image_pull_credentials_type: Option<ImagePullCredentialsType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    docker_server: Option<DockerServer>,
}

impl ProjectEnvironment {
    pub fn builder() -> ProjectEnvironmentBuilder {
        ProjectEnvironmentBuilder::default()
    }

    pub fn environment_type(&self) -> &EnvironmentType {
        &self.environment_type
    }

    pub fn image(&self) -> &str {
        &self.image
    }

    pub fn compute_type(&self) -> &ComputeType {
        &self.compute_type
    }

    pub fn compute_configuration(&self) -> Option<&ComputeConfiguration> {
        self.compute_configuration.as_ref()
    }

    pub fn fleet(&self) -> Option<&ProjectFleet> {
        self.fleet.as_ref()
    }

    /// Environment variables in the order they were given; empty when unset
    pub fn environment_variables(&self) -> &[EnvironmentVariable] {
        self.environment_variables.as_deref().unwrap_or_default()
    }

    /// `None` when not given, which is not the same as `Some(false)`
    pub fn privileged_mode(&self) -> Option<bool> {
        self.privileged_mode
    }

    pub fn certificate(&self) -> Option<&str> {
        self.certificate.as_deref()
    }

    pub fn registry_credential(&self) -> Option<&RegistryCredential> {
        self.registry_credential.as_ref()
    }

    pub fn image_pull_credentials_type(&self) -> Option<&ImagePullCredentialsType> {
        self.image_pull_credentials_type.as_ref()
    }

    pub fn docker_server(&self) -> Option<&DockerServer> {
        self.docker_server.as_ref()
    }

    /// Look up an environment variable by name. The last definition wins.
    pub fn environment_variable(&self, name: &str) -> Option<&EnvironmentVariable> {
        self.environment_variables().iter().rev().find(|v| v.name() == name)
    }
}

impl Aggregate for ProjectEnvironment {
    const SHAPE: &'static str = "ProjectEnvironment";

    fn from_mapping(mut raw: RawMapping) -> ModelResult<Self> {
        let environment_type = raw.take_required_str(Self::SHAPE, "type").map(EnvironmentType::from)?;
        let image = raw.take_required_str(Self::SHAPE, "image")?;
        let compute_type = raw
            .take_required_str(Self::SHAPE, "computeType")
            .map(ComputeType::from)?;

        let env = Self {
            environment_type,
            image,
            compute_type,
            compute_configuration: raw.take_nested(Self::SHAPE, "computeConfiguration")?,
            fleet: raw.take_nested(Self::SHAPE, "fleet")?,
            environment_variables: raw.take_nested_list(Self::SHAPE, "environmentVariables")?,
            privileged_mode: raw.take_bool(Self::SHAPE, "privilegedMode")?,
            certificate: raw.take_str(Self::SHAPE, "certificate")?,
            registry_credential: raw.take_nested(Self::SHAPE, "registryCredential")?,
            image_pull_credentials_type: raw
                .take_str(Self::SHAPE, "imagePullCredentialsType")?
                .map(ImagePullCredentialsType::from),
            docker_server: raw.take_nested(Self::SHAPE, "dockerServer")?,
        };

        if !raw.is_empty() {
            trace!(ignored = raw.len(), "ignoring unrecognized environment keys");
        }

        Ok(env)
    }
}

impl_try_from_raw!(ProjectEnvironment);

/// Builder for [`ProjectEnvironment`].
///
/// Nested setters accept either a built value or a [`RawMapping`]; raw
/// mappings are validated in [`build`](Self::build), not when set.
#[derive(Debug, Default)]
pub struct ProjectEnvironmentBuilder {
    environment_type: Option<EnvironmentType>,
    image: Option<String>,
    compute_type: Option<ComputeType>,
    compute_configuration: Option<Input<ComputeConfiguration>>,
    fleet: Option<Input<ProjectFleet>>,
    environment_variables: Option<Vec<Input<EnvironmentVariable>>>,
    privileged_mode: Option<bool>,
    certificate: Option<String>,
    registry_credential: Option<Input<RegistryCredential>>,
    image_pull_credentials_type: Option<ImagePullCredentialsType>,
    docker_server: Option<Input<DockerServer>>,
}

impl ProjectEnvironmentBuilder {
    pub fn environment_type(mut self, environment_type: impl Into<EnvironmentType>) -> Self {
        self.environment_type = Some(environment_type.into());
        self
    }

    pub fn image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    pub fn compute_type(mut self, compute_type: impl Into<ComputeType>) -> Self {
        self.compute_type = Some(compute_type.into());
        self
    }

    pub fn compute_configuration(mut self, config: impl Into<Input<ComputeConfiguration>>) -> Self {
        self.compute_configuration = Some(config.into());
        self
    }

    pub fn fleet(mut self, fleet: impl Into<Input<ProjectFleet>>) -> Self {
        self.fleet = Some(fleet.into());
        self
    }

    /// Append one environment variable
    pub fn environment_variable(mut self, variable: impl Into<Input<EnvironmentVariable>>) -> Self {
        self.environment_variables
            .get_or_insert_with(Vec::new)
            .push(variable.into());
        self
    }

    /// Replace the environment variables. An empty iterator sets an
    /// explicitly empty list.
    pub fn environment_variables<I, V>(mut self, variables: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Input<EnvironmentVariable>>,
    {
        self.environment_variables = Some(variables.into_iter().map(Into::into).collect());
        self
    }

    pub fn privileged_mode(mut self, privileged_mode: bool) -> Self {
        self.privileged_mode = Some(privileged_mode);
        self
    }

    pub fn certificate(mut self, certificate: impl Into<String>) -> Self {
        self.certificate = Some(certificate.into());
        self
    }

    pub fn registry_credential(mut self, credential: impl Into<Input<RegistryCredential>>) -> Self {
        self.registry_credential = Some(credential.into());
        self
    }

    pub fn image_pull_credentials_type(mut self, kind: impl Into<ImagePullCredentialsType>) -> Self {
        self.image_pull_credentials_type = Some(kind.into());
        self
    }

    pub fn docker_server(mut self, server: impl Into<Input<DockerServer>>) -> Self {
        self.docker_server = Some(server.into());
        self
    }

    /// Validate and build. Required fields are checked in the same order as
    /// [`Aggregate::from_mapping`]: `type`, `image`, `computeType`.
    pub fn build(self) -> ModelResult<ProjectEnvironment> {
        const SHAPE: &str = ProjectEnvironment::SHAPE;

        let environment_type = self
            .environment_type
            .ok_or_else(|| ModelError::missing(SHAPE, "type"))?;
        let image = self.image.ok_or_else(|| ModelError::missing(SHAPE, "image"))?;
        let compute_type = self
            .compute_type
            .ok_or_else(|| ModelError::missing(SHAPE, "computeType"))?;

        let environment_variables = self
            .environment_variables
            .map(|vars| {
                vars.into_iter()
                    .map(EnvironmentVariable::create)
                    .collect::<ModelResult<Vec<_>>>()
            })
            .transpose()?;

        Ok(ProjectEnvironment {
            environment_type,
            image,
            compute_type,
            compute_configuration: normalize(self.compute_configuration)?,
            fleet: normalize(self.fleet)?,
            environment_variables,
            privileged_mode: self.privileged_mode,
            certificate: self.certificate,
            registry_credential: normalize(self.registry_credential)?,
            image_pull_credentials_type: self.image_pull_credentials_type,
            docker_server: normalize(self.docker_server)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn minimal() -> serde_json::Value {
        json!({
            "type": "LINUX_CONTAINER",
            "image": "aws/codebuild/standard:4.0",
            "computeType": "BUILD_GENERAL1_SMALL",
        })
    }

    #[test]
    fn test_minimal_environment() {
        let env = ProjectEnvironment::from_value(minimal()).unwrap();
        assert_eq!(env.environment_type().as_str(), "LINUX_CONTAINER");
        assert_eq!(env.image(), "aws/codebuild/standard:4.0");
        assert_eq!(env.compute_type().as_str(), "BUILD_GENERAL1_SMALL");
        assert!(env.environment_variables().is_empty());
        assert_eq!(env.privileged_mode(), None);
        assert_eq!(env.certificate(), None);
        assert_eq!(env.image_pull_credentials_type(), None);
        assert!(env.compute_configuration().is_none());
        assert!(env.fleet().is_none());
        assert!(env.registry_credential().is_none());
        assert!(env.docker_server().is_none());
    }

    #[test]
    fn test_missing_image() {
        let mut value = minimal();
        value.as_object_mut().unwrap().remove("image");
        let err = ProjectEnvironment::from_value(value).unwrap_err();
        assert_eq!(err, ModelError::missing("ProjectEnvironment", "image"));
    }

    #[test]
    fn test_first_missing_field_reported() {
        let err = ProjectEnvironment::from_value(json!({})).unwrap_err();
        assert_eq!(err, ModelError::missing("ProjectEnvironment", "type"));
    }

    #[test]
    fn test_builder_matches_mapping() {
        let built = ProjectEnvironment::builder()
            .environment_type("LINUX_CONTAINER")
            .image("aws/codebuild/standard:4.0")
            .compute_type("BUILD_GENERAL1_SMALL")
            .build()
            .unwrap();
        assert_eq!(built, ProjectEnvironment::from_value(minimal()).unwrap());
    }

    #[test]
    fn test_builder_missing_compute_type() {
        let err = ProjectEnvironment::builder()
            .environment_type("LINUX_CONTAINER")
            .image("img")
            .build()
            .unwrap_err();
        assert_eq!(err, ModelError::missing("ProjectEnvironment", "computeType"));
    }

    #[test]
    fn test_last_variable_definition_wins() {
        let env = ProjectEnvironment::builder()
            .environment_type("LINUX_CONTAINER")
            .image("img")
            .compute_type("BUILD_GENERAL1_SMALL")
            .environment_variable(EnvironmentVariable::new("STAGE", "dev", None))
            .environment_variable(EnvironmentVariable::new("STAGE", "prod", None))
            .build()
            .unwrap();
        assert_eq!(env.environment_variables().len(), 2);
        assert_eq!(env.environment_variable("STAGE").map(|v| v.value()), Some("prod"));
        assert!(env.environment_variable("MISSING").is_none());
    }
}
