//! # Pod Identity Webhooks
//!
//! Decides, per cloud provider, whether its pod identity webhook belongs in a
//! namespace, and which deployment manifest and image to use for it.
//!
//! Each provider implements [`PodIdentity`]; [`PodIdentityWebhook`] is the
//! closed set of providers the operator knows about. Checks are stateless,
//! read-only queries against current cluster state. A failed lookup fails
//! closed: the webhook is reported as not applicable, with the cause kept in
//! [`Applicability::LookupFailed`].

use crate::config::PodIdentityConfig;
use async_trait::async_trait;
use std::fmt;
use std::str::FromStr;

mod aws;
mod azure;
mod plan;
mod source;

pub use aws::AwsPodIdentity;
pub use azure::AzurePodIdentity;
pub use plan::{deployable, plan_webhooks, WebhookPlan};
pub use source::{SecretSource, StaticSecrets};

/// Cloud providers with a pod identity webhook
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Provider {
    Aws,
    Azure,
}

impl Provider {
    pub const ALL: [Provider; 2] = [Provider::Aws, Provider::Azure];

    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Provider::Aws => "aws",
            Provider::Azure => "azure",
        }
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Provider {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "aws" => Ok(Provider::Aws),
            "azure" => Ok(Provider::Azure),
            other => Err(format!("unknown provider '{other}' (expected aws or azure)")),
        }
    }
}

/// Outcome of an applicability check
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Applicability {
    /// Provider webhook applies regardless of cluster state
    Unconditional,
    /// Provider credentials were found
    CredentialsPresent,
    /// Credentials secret does not exist
    SecretMissing,
    /// Credentials secret exists but lacks the required key
    KeyMissing,
    /// Lookup failed; treated as not applicable
    LookupFailed(String),
}

impl Applicability {
    /// Whether the webhook should be deployed
    #[must_use]
    pub fn is_applicable(&self) -> bool {
        matches!(
            self,
            Applicability::Unconditional | Applicability::CredentialsPresent
        )
    }
}

impl fmt::Display for Applicability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Applicability::Unconditional => f.write_str("always deployed"),
            Applicability::CredentialsPresent => f.write_str("credentials present"),
            Applicability::SecretMissing => f.write_str("credentials secret not found"),
            Applicability::KeyMissing => f.write_str("credentials secret missing required key"),
            Applicability::LookupFailed(reason) => write!(f, "lookup failed: {reason}"),
        }
    }
}

/// Capability set of a pod identity webhook selector
#[async_trait]
pub trait PodIdentity: Send + Sync {
    /// Provider this selector belongs to
    fn provider(&self) -> Provider;

    /// Versioned path of the deployment template to apply
    fn deployment(&self) -> &'static str;

    /// Container image of the webhook; empty when not configured
    fn image_pull_spec(&self) -> &str;

    /// Check applicability in `namespace`, keeping the reason
    async fn probe(&self, secrets: &dyn SecretSource, namespace: &str) -> Applicability;

    /// Whether the webhook should be deployed in `namespace`
    async fn should_be_deployed(&self, secrets: &dyn SecretSource, namespace: &str) -> bool {
        self.probe(secrets, namespace).await.is_applicable()
    }
}

/// Every known pod identity webhook
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PodIdentityWebhook {
    Aws(AwsPodIdentity),
    Azure(AzurePodIdentity),
}

impl PodIdentityWebhook {
    /// Selector for one provider, with its image taken from `config`
    #[must_use]
    pub fn for_provider(provider: Provider, config: &PodIdentityConfig) -> Self {
        match provider {
            Provider::Aws => PodIdentityWebhook::Aws(AwsPodIdentity::new(config.aws_image.clone())),
            Provider::Azure => {
                PodIdentityWebhook::Azure(AzurePodIdentity::new(config.azure_image.clone()))
            }
        }
    }

    /// One selector per known provider, in [`Provider::ALL`] order
    #[must_use]
    pub fn all(config: &PodIdentityConfig) -> Vec<Self> {
        Provider::ALL
            .iter()
            .map(|p| Self::for_provider(*p, config))
            .collect()
    }

    fn inner(&self) -> &dyn PodIdentity {
        match self {
            PodIdentityWebhook::Aws(aws) => aws,
            PodIdentityWebhook::Azure(azure) => azure,
        }
    }
}

#[async_trait]
impl PodIdentity for PodIdentityWebhook {
    fn provider(&self) -> Provider {
        self.inner().provider()
    }

    fn deployment(&self) -> &'static str {
        self.inner().deployment()
    }

    fn image_pull_spec(&self) -> &str {
        self.inner().image_pull_spec()
    }

    async fn probe(&self, secrets: &dyn SecretSource, namespace: &str) -> Applicability {
        self.inner().probe(secrets, namespace).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> PodIdentityConfig {
        PodIdentityConfig {
            aws_image: "registry.example/aws-pod-identity-webhook:v1".to_string(),
            azure_image: "registry.example/azure-workload-identity-webhook:v1".to_string(),
        }
    }

    #[test]
    fn test_registry_covers_every_provider_in_order() {
        let providers: Vec<_> = PodIdentityWebhook::all(&config())
            .iter()
            .map(PodIdentity::provider)
            .collect();
        assert_eq!(providers, Provider::ALL.to_vec());
    }

    #[test]
    fn test_deployment_paths() {
        let webhooks = PodIdentityWebhook::all(&config());
        assert_eq!(
            webhooks[0].deployment(),
            "v4.1.0/aws-pod-identity-webhook/deployment.yaml"
        );
        assert_eq!(
            webhooks[1].deployment(),
            "v4.1.0/azure-pod-identity-webhook/deployment.yaml"
        );
    }

    #[test]
    fn test_images_come_from_config() {
        let aws = PodIdentityWebhook::for_provider(Provider::Aws, &config());
        let azure = PodIdentityWebhook::for_provider(Provider::Azure, &config());
        assert_eq!(aws.image_pull_spec(), "registry.example/aws-pod-identity-webhook:v1");
        assert_eq!(
            azure.image_pull_spec(),
            "registry.example/azure-workload-identity-webhook:v1"
        );
    }

    #[test]
    fn test_provider_parsing() {
        assert_eq!("AWS".parse::<Provider>(), Ok(Provider::Aws));
        assert_eq!(" azure ".parse::<Provider>(), Ok(Provider::Azure));
        assert!("gcp".parse::<Provider>().is_err());
    }

    #[test]
    fn test_only_positive_outcomes_are_applicable() {
        assert!(Applicability::Unconditional.is_applicable());
        assert!(Applicability::CredentialsPresent.is_applicable());
        assert!(!Applicability::SecretMissing.is_applicable());
        assert!(!Applicability::KeyMissing.is_applicable());
        assert!(!Applicability::LookupFailed("forbidden".to_string()).is_applicable());
    }
}
