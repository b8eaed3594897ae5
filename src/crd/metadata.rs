//! # Metadata Helpers
//!
//! Finalizer and annotation handling for CredentialsRequests and the Secrets
//! they target.

use crate::constants::FINALIZER_DEPROVISION;
use crate::crd::spec::CredentialsRequest;
use kube::ResourceExt;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CrdError {
    #[error("CredentialsRequest {0} has no secretRef.name")]
    MissingSecretName(String),
    #[error("CredentialsRequest {0} has no secretRef.namespace")]
    MissingSecretNamespace(String),
    #[error("CredentialsRequest {0} has no namespace")]
    MissingNamespace(String),
    #[error("invalid credentials-request annotation '{0}', expected <namespace>/<name>")]
    InvalidAnnotation(String),
}

impl CredentialsRequest {
    /// Whether the deprovision finalizer is present
    #[must_use]
    pub fn has_deprovision_finalizer(&self) -> bool {
        self.finalizers().iter().any(|f| f == FINALIZER_DEPROVISION)
    }

    /// Add the deprovision finalizer; returns false if it was already there
    pub fn add_deprovision_finalizer(&mut self) -> bool {
        if self.has_deprovision_finalizer() {
            return false;
        }
        self.finalizers_mut().push(FINALIZER_DEPROVISION.to_string());
        true
    }

    /// Remove the deprovision finalizer; returns false if it was not there
    pub fn remove_deprovision_finalizer(&mut self) -> bool {
        let finalizers = self.finalizers_mut();
        let before = finalizers.len();
        finalizers.retain(|f| f != FINALIZER_DEPROVISION);
        finalizers.len() != before
    }

    /// Value for the `credentials-request` annotation on the target Secret
    pub fn annotation_value(&self) -> Result<String, CrdError> {
        let namespace = self
            .namespace()
            .ok_or_else(|| CrdError::MissingNamespace(self.name_any()))?;
        Ok(format!("{}/{}", namespace, self.name_any()))
    }

    /// Namespace and name of the Secret this request writes to
    pub fn target_secret(&self) -> Result<(&str, &str), CrdError> {
        let secret_ref = &self.spec.secret_ref;
        let namespace = secret_ref
            .namespace
            .as_deref()
            .filter(|ns| !ns.is_empty())
            .ok_or_else(|| CrdError::MissingSecretNamespace(self.name_any()))?;
        let name = secret_ref
            .name
            .as_deref()
            .filter(|n| !n.is_empty())
            .ok_or_else(|| CrdError::MissingSecretName(self.name_any()))?;
        Ok((namespace, name))
    }
}

/// Split a `credentials-request` annotation value into namespace and name
pub fn parse_annotation_value(value: &str) -> Result<(&str, &str), CrdError> {
    match value.split_once('/') {
        Some((namespace, name))
            if !namespace.is_empty() && !name.is_empty() && !name.contains('/') =>
        {
            Ok((namespace, name))
        }
        _ => Err(CrdError::InvalidAnnotation(value.to_string())),
    }
}
