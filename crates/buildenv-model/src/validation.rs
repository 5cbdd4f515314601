//! Opt-in strict validation
//!
//! Building an aggregate checks shape only. The checks here (enum values
//! against their known domain, the compute configuration requirement of
//! attribute-based compute) run only when a caller asks for them, with a
//! [`ValidationPolicy`] deciding how strict to be.

use buildenv_core::{Aggregate, ModelError, ModelResult, UnknownEnumPolicy, ValidationPolicy};
use tracing::warn;

use crate::compute_configuration::ComputeConfiguration;
use crate::docker_server::DockerServer;
use crate::enums::OpenEnum;
use crate::environment_variable::EnvironmentVariable;
use crate::project_environment::ProjectEnvironment;
use crate::registry_credential::RegistryCredential;

/// Strict validation of an already-built aggregate
pub trait Validate {
    fn validate_with(&self, policy: &ValidationPolicy) -> ModelResult<()>;
}

/// Apply the unknown-enum policy to one value
pub fn check_enum<E: OpenEnum>(
    policy: &ValidationPolicy,
    shape: &'static str,
    field: &'static str,
    value: &E,
) -> ModelResult<()> {
    if value.is_known() {
        return Ok(());
    }

    match policy.unknown_enums {
        UnknownEnumPolicy::Accept => Ok(()),
        UnknownEnumPolicy::Warn => {
            warn!(shape, field, value = value.as_str(), "unknown enum value");
            Ok(())
        }
        UnknownEnumPolicy::Reject => Err(ModelError::unknown_enum(shape, field, value.as_str())),
    }
}

impl Validate for EnvironmentVariable {
    fn validate_with(&self, policy: &ValidationPolicy) -> ModelResult<()> {
        if let Some(kind) = self.variable_type() {
            check_enum(policy, Self::SHAPE, "type", kind)?;
        }
        Ok(())
    }
}

impl Validate for RegistryCredential {
    fn validate_with(&self, policy: &ValidationPolicy) -> ModelResult<()> {
        check_enum(policy, Self::SHAPE, "credentialProvider", self.credential_provider())
    }
}

impl Validate for DockerServer {
    fn validate_with(&self, policy: &ValidationPolicy) -> ModelResult<()> {
        check_enum(policy, Self::SHAPE, "computeType", self.compute_type())
    }
}

impl Validate for ProjectEnvironment {
    fn validate_with(&self, policy: &ValidationPolicy) -> ModelResult<()> {
        check_enum(policy, Self::SHAPE, "type", self.environment_type())?;
        check_enum(policy, Self::SHAPE, "computeType", self.compute_type())?;
        if let Some(kind) = self.image_pull_credentials_type() {
            check_enum(policy, Self::SHAPE, "imagePullCredentialsType", kind)?;
        }

        if policy.require_compute_configuration
            && self.compute_type().is_attribute_based()
            && self.compute_configuration().is_none()
        {
            return Err(ModelError::constraint(
                Self::SHAPE,
                format!(
                    "computeConfiguration is required when computeType is {}",
                    self.compute_type()
                ),
            ));
        }

        if let Some(machine_type) = self
            .compute_configuration()
            .and_then(|config| config.machine_type())
        {
            check_enum(policy, ComputeConfiguration::SHAPE, "machineType", machine_type)?;
        }

        for variable in self.environment_variables() {
            variable.validate_with(policy)?;
        }
        if let Some(credential) = self.registry_credential() {
            credential.validate_with(policy)?;
        }
        if let Some(server) = self.docker_server() {
            server.validate_with(policy)?;
        }

        Ok(())
    }
}
