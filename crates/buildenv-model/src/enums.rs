//! Enumerated field values
//!
//! Each enumeration is a closed set of the values this client knows about
//! plus an `Unknown` variant that keeps any other value verbatim. Services
//! add values over time; a client that rejected them would break on the
//! first response carrying one.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Common view over the open enumerations
pub trait OpenEnum {
    /// The value as it appears on the wire
    fn as_str(&self) -> &str;

    /// Whether the value belongs to the known domain
    fn is_known(&self) -> bool;
}

macro_rules! open_enum {
    (
        $(#[$meta:meta])*
        $name:ident {
            $( $variant:ident => $wire:literal, )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        pub enum $name {
            $( $variant, )+
            /// A value outside the known domain, kept verbatim
            Unknown(String),
        }

        impl $name {
            /// Wire values of the known domain
            pub const KNOWN: &'static [&'static str] = &[$( $wire ),+];

            pub fn as_str(&self) -> &str {
                match self {
                    $( $name::$variant => $wire, )+
                    $name::Unknown(value) => value.as_str(),
                }
            }

            pub fn is_known(&self) -> bool {
                !matches!(self, $name::Unknown(_))
            }
        }

        impl OpenEnum for $name {
            fn as_str(&self) -> &str {
                $name::as_str(self)
            }

            fn is_known(&self) -> bool {
                $name::is_known(self)
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                match value {
                    $( $wire => $name::$variant, )+
                    other => $name::Unknown(other.to_string()),
                }
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                match value.as_str() {
                    $( $wire => $name::$variant, )+
                    _ => $name::Unknown(value),
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                String::deserialize(deserializer).map(Self::from)
            }
        }
    };
}

open_enum! {
    /// Kind of build environment
    EnvironmentType {
        WindowsContainer => "WINDOWS_CONTAINER",
        LinuxContainer => "LINUX_CONTAINER",
        LinuxGpuContainer => "LINUX_GPU_CONTAINER",
        ArmContainer => "ARM_CONTAINER",
        WindowsServer2019Container => "WINDOWS_SERVER_2019_CONTAINER",
        WindowsServer2022Container => "WINDOWS_SERVER_2022_CONTAINER",
        LinuxLambdaContainer => "LINUX_LAMBDA_CONTAINER",
        ArmLambdaContainer => "ARM_LAMBDA_CONTAINER",
        LinuxEc2 => "LINUX_EC2",
        ArmEc2 => "ARM_EC2",
        WindowsEc2 => "WINDOWS_EC2",
        MacArm => "MAC_ARM",
    }
}

open_enum! {
    /// Compute tier used by the build environment
    ComputeType {
        BuildGeneral1Small => "BUILD_GENERAL1_SMALL",
        BuildGeneral1Medium => "BUILD_GENERAL1_MEDIUM",
        BuildGeneral1Large => "BUILD_GENERAL1_LARGE",
        BuildGeneral1Xlarge => "BUILD_GENERAL1_XLARGE",
        BuildGeneral12xlarge => "BUILD_GENERAL1_2XLARGE",
        BuildLambda1gb => "BUILD_LAMBDA_1GB",
        BuildLambda2gb => "BUILD_LAMBDA_2GB",
        BuildLambda4gb => "BUILD_LAMBDA_4GB",
        BuildLambda8gb => "BUILD_LAMBDA_8GB",
        BuildLambda10gb => "BUILD_LAMBDA_10GB",
        AttributeBasedCompute => "ATTRIBUTE_BASED_COMPUTE",
        CustomInstanceType => "CUSTOM_INSTANCE_TYPE",
    }
}

impl ComputeType {
    /// The tier sized by a `ComputeConfiguration` instead of a fixed size
    pub fn is_attribute_based(&self) -> bool {
        matches!(self, ComputeType::AttributeBasedCompute)
    }
}

open_enum! {
    /// Credentials used to pull the build image
    ImagePullCredentialsType {
        Codebuild => "CODEBUILD",
        ServiceRole => "SERVICE_ROLE",
    }
}

open_enum! {
    /// Where an environment variable's value comes from
    EnvironmentVariableType {
        Plaintext => "PLAINTEXT",
        ParameterStore => "PARAMETER_STORE",
        SecretsManager => "SECRETS_MANAGER",
    }
}

open_enum! {
    /// Service holding private registry credentials
    CredentialProviderType {
        SecretsManager => "SECRETS_MANAGER",
    }
}

open_enum! {
    /// Machine family for attribute-based compute
    MachineType {
        General => "GENERAL",
        Nvme => "NVME",
    }
}
