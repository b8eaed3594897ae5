//! # Azure Pod Identity Webhook
//!
//! Applicable only when the namespace holds an `azure-credentials` Secret with
//! an `azure_tenant_id` key. Only the key's presence is checked, not its value.

use crate::constants::{
    AZURE_CREDENTIALS_SECRET_NAME, AZURE_POD_IDENTITY_DEPLOYMENT, AZURE_TENANT_ID_KEY,
};
use crate::podidentity::{Applicability, PodIdentity, Provider, SecretSource};
use async_trait::async_trait;
use tracing::{debug, warn};

/// Azure pod identity webhook selector
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AzurePodIdentity {
    image: String,
}

impl AzurePodIdentity {
    pub fn new(image: impl Into<String>) -> Self {
        Self {
            image: image.into(),
        }
    }
}

#[async_trait]
impl PodIdentity for AzurePodIdentity {
    fn provider(&self) -> Provider {
        Provider::Azure
    }

    fn deployment(&self) -> &'static str {
        AZURE_POD_IDENTITY_DEPLOYMENT
    }

    fn image_pull_spec(&self) -> &str {
        &self.image
    }

    async fn probe(&self, secrets: &dyn SecretSource, namespace: &str) -> Applicability {
        match secrets
            .get_secret(namespace, AZURE_CREDENTIALS_SECRET_NAME)
            .await
        {
            Ok(Some(secret)) => {
                let has_tenant = secret
                    .data
                    .as_ref()
                    .is_some_and(|data| data.contains_key(AZURE_TENANT_ID_KEY));
                if has_tenant {
                    Applicability::CredentialsPresent
                } else {
                    debug!(
                        namespace,
                        "Secret {} has no {} key", AZURE_CREDENTIALS_SECRET_NAME, AZURE_TENANT_ID_KEY
                    );
                    Applicability::KeyMissing
                }
            }
            Ok(None) => {
                debug!(namespace, "Secret {} not found", AZURE_CREDENTIALS_SECRET_NAME);
                Applicability::SecretMissing
            }
            Err(e) => {
                warn!(
                    namespace,
                    "Azure credentials lookup failed, not deploying Azure pod identity webhook: {:#}",
                    e
                );
                Applicability::LookupFailed(format!("{e:#}"))
            }
        }
    }
}
