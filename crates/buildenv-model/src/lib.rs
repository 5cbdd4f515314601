//! Build environment configuration aggregates.
//!
//! This crate provides the validated, immutable value objects that describe
//! the build environment of a build project: the [`ProjectEnvironment`]
//! aggregate and the nested values it is composed of. Each one is built from
//! a raw mapping or accepted as an already-built instance, and serializes to
//! the service's JSON wire shape.

/// Route `TryFrom<RawMapping>` (and with it `serde::Deserialize`) through
/// the aggregate's own validation.
macro_rules! impl_try_from_raw {
    ($name:ident) => {
        impl TryFrom<buildenv_core::RawMapping> for $name {
            type Error = buildenv_core::ModelError;

            fn try_from(raw: buildenv_core::RawMapping) -> Result<Self, Self::Error> {
                <$name as buildenv_core::Aggregate>::from_mapping(raw)
            }
        }
    };
}

pub mod compute_configuration;
pub mod docker_server;
pub mod document;
pub mod enums;
pub mod environment_variable;
pub mod fleet;
pub mod project_environment;
pub mod registry_credential;
pub mod validation;
pub mod wire;

pub use compute_configuration::{ComputeConfiguration, ComputeConfigurationBuilder};
pub use docker_server::{DockerServer, DockerServerBuilder, DockerServerStatus};
pub use document::{load_environment, parse_mapping, DocumentFormat};
pub use enums::{
    ComputeType, CredentialProviderType, EnvironmentType, EnvironmentVariableType,
    ImagePullCredentialsType, MachineType, OpenEnum,
};
pub use environment_variable::EnvironmentVariable;
pub use fleet::ProjectFleet;
pub use project_environment::{ProjectEnvironment, ProjectEnvironmentBuilder};
pub use registry_credential::RegistryCredential;
pub use validation::{check_enum, Validate};
pub use wire::WireShape;

// Re-export the core input types so callers need only this crate
pub use buildenv_core::{Aggregate, Input, ModelError, ModelResult, RawMapping, ValidationPolicy};
