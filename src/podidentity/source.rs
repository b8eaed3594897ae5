//! # Secret Source
//!
//! Read-only access to Kubernetes Secrets for the pod identity selectors.
//!
//! The selectors only ever issue a single get-by-name; abstracting it keeps
//! them testable without an API server.

use anyhow::{Context, Result};
use async_trait::async_trait;
use k8s_openapi::api::core::v1::Secret;
use k8s_openapi::ByteString;
use kube::api::Api;
use kube::Client;
use std::collections::BTreeMap;

/// Read-only lookup of Secrets by namespace and name
#[async_trait]
pub trait SecretSource: Send + Sync {
    /// Get a Secret; `Ok(None)` when it does not exist
    async fn get_secret(&self, namespace: &str, name: &str) -> Result<Option<Secret>>;
}

#[async_trait]
impl SecretSource for Client {
    async fn get_secret(&self, namespace: &str, name: &str) -> Result<Option<Secret>> {
        let secrets: Api<Secret> = Api::namespaced(self.clone(), namespace);
        secrets
            .get_opt(name)
            .await
            .with_context(|| format!("Failed to get secret {namespace}/{name}"))
    }
}

/// Fixed, in-memory set of Secrets
///
/// Useful wherever cluster state is known up front, e.g. tests and dry runs.
/// A configured failure makes every lookup return an error.
#[derive(Debug, Clone, Default)]
pub struct StaticSecrets {
    secrets: BTreeMap<(String, String), Secret>,
    failure: Option<String>,
}

impl StaticSecrets {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Source whose lookups all fail with `message`
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            secrets: BTreeMap::new(),
            failure: Some(message.into()),
        }
    }

    /// Add a Secret with the given data keys and values
    #[must_use]
    pub fn with_secret(mut self, namespace: &str, name: &str, data: &[(&str, &str)]) -> Self {
        let data: BTreeMap<String, ByteString> = data
            .iter()
            .map(|(k, v)| ((*k).to_string(), ByteString(v.as_bytes().to_vec())))
            .collect();

        let mut secret = Secret::default();
        secret.metadata.name = Some(name.to_string());
        secret.metadata.namespace = Some(namespace.to_string());
        secret.data = Some(data);

        self.secrets
            .insert((namespace.to_string(), name.to_string()), secret);
        self
    }
}

#[async_trait]
impl SecretSource for StaticSecrets {
    async fn get_secret(&self, namespace: &str, name: &str) -> Result<Option<Secret>> {
        if let Some(message) = &self.failure {
            anyhow::bail!("Failed to get secret {namespace}/{name}: {message}");
        }
        Ok(self
            .secrets
            .get(&(namespace.to_string(), name.to_string()))
            .cloned())
    }
}
