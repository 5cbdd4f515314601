use buildenv_core::{Aggregate, ModelResult, RawMapping};
use serde::{Deserialize, Serialize};

use crate::enums::CredentialProviderType;

/// Credentials for pulling the build image from a private registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "RawMapping")]
pub struct RegistryCredential {
    /// ARN or name of the stored credential
    credential: String,
    credential_provider: CredentialProviderType,
}

impl RegistryCredential {
    pub fn new(credential: impl Into<String>, credential_provider: impl Into<CredentialProviderType>) -> Self {
        Self {
            credential: credential.into(),
            credential_provider: credential_provider.into(),
        }
    }

    pub fn credential(&self) -> &str {
        &self.credential
    }

    pub fn credential_provider(&self) -> &CredentialProviderType {
        &self.credential_provider
    }
}

impl Aggregate for RegistryCredential {
    const SHAPE: &'static str = "RegistryCredential";

    fn from_mapping(mut raw: RawMapping) -> ModelResult<Self> {
        let credential = raw.take_required_str(Self::SHAPE, "credential")?;
        let credential_provider = raw
            .take_required_str(Self::SHAPE, "credentialProvider")
            .map(CredentialProviderType::from)?;

        Ok(Self {
            credential,
            credential_provider,
        })
    }
}

impl_try_from_raw!(RegistryCredential);

#[cfg(test)]
mod tests {
    use super::*;
    use buildenv_core::ModelError;
    use serde_json::json;

    #[test]
    fn test_from_mapping() {
        let cred = RegistryCredential::from_value(json!({
            "credential": "arn:aws:secretsmanager:us-east-1:123456789012:secret:registry",
            "credentialProvider": "SECRETS_MANAGER",
        }))
        .unwrap();
        assert_eq!(cred.credential_provider(), &CredentialProviderType::SecretsManager);
    }

    #[test]
    fn test_provider_required() {
        let err = RegistryCredential::from_value(json!({ "credential": "registry" })).unwrap_err();
        assert_eq!(err, ModelError::missing("RegistryCredential", "credentialProvider"));
    }
}
