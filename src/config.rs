//! # Operator Configuration
//!
//! Process-level settings loaded once from environment variables.
//!
//! Everything that used to be read from the environment at query time (the
//! webhook images in particular) is captured here at startup and threaded into
//! the components that need it.

use crate::constants::{
    AWS_POD_IDENTITY_IMAGE_ENV, AZURE_POD_IDENTITY_IMAGE_ENV, CLOUD_CRED_OPERATOR_NAMESPACE,
    DEFAULT_LOG_LEVEL, DEFAULT_MANIFEST_DIR,
};
use std::path::PathBuf;
use std::str::FromStr;

/// Image references for the pod identity webhooks
///
/// An unset variable yields an empty string, never an error.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PodIdentityConfig {
    /// `AWS_POD_IDENTITY_WEBHOOK_IMAGE`
    pub aws_image: String,
    /// `AZURE_POD_IDENTITY_WEBHOOK_IMAGE`
    pub azure_image: String,
}

impl PodIdentityConfig {
    /// Load image references from the process environment
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load image references from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            aws_image: lookup(AWS_POD_IDENTITY_IMAGE_ENV).unwrap_or_default(),
            azure_image: lookup(AZURE_POD_IDENTITY_IMAGE_ENV).unwrap_or_default(),
        }
    }
}

/// Log output format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" | "plain" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(format!("unknown log format '{other}' (expected text or json)")),
        }
    }
}

/// Operator-level configuration
///
/// All settings have defaults and can be overridden via environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperatorConfig {
    /// Pod identity webhook images
    pub pod_identity: PodIdentityConfig,
    /// Namespace the operator (and its webhooks) live in (`POD_NAMESPACE`)
    pub operator_namespace: String,
    /// Root directory of the bundled webhook manifests (`MANIFEST_DIR`)
    pub manifest_dir: PathBuf,
    /// Log level used when `RUST_LOG` is not set (`LOG_LEVEL`)
    pub log_level: String,
    /// Log format, text or json (`LOG_FORMAT`)
    pub log_format: LogFormat,
}

impl Default for OperatorConfig {
    fn default() -> Self {
        Self {
            pod_identity: PodIdentityConfig::default(),
            operator_namespace: CLOUD_CRED_OPERATOR_NAMESPACE.to_string(),
            manifest_dir: PathBuf::from(DEFAULT_MANIFEST_DIR),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            log_format: LogFormat::Text,
        }
    }
}

impl OperatorConfig {
    /// Load configuration from environment variables with defaults
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup
    ///
    /// Empty values are treated as unset so a blank `POD_NAMESPACE` does not
    /// produce an empty namespace.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let defaults = Self::default();

        Self {
            pod_identity: PodIdentityConfig::from_lookup(&lookup),
            operator_namespace: non_empty("POD_NAMESPACE").unwrap_or(defaults.operator_namespace),
            manifest_dir: non_empty("MANIFEST_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.manifest_dir),
            log_level: non_empty("LOG_LEVEL").unwrap_or(defaults.log_level),
            log_format: non_empty("LOG_FORMAT")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.log_format),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_environment_is_empty() {
        let config = OperatorConfig::from_lookup(|_| None);
        assert_eq!(config, OperatorConfig::default());
        assert_eq!(config.operator_namespace, "openshift-cloud-credential-operator");
        assert_eq!(config.pod_identity.aws_image, "");
        assert_eq!(config.pod_identity.azure_image, "");
    }

    #[test]
    fn test_images_are_read_from_their_variables() {
        let config = PodIdentityConfig::from_lookup(lookup_from(&[
            ("AWS_POD_IDENTITY_WEBHOOK_IMAGE", "quay.io/example/aws-webhook:4.1"),
            ("AZURE_POD_IDENTITY_WEBHOOK_IMAGE", "quay.io/example/azure-webhook:4.1"),
        ]));
        assert_eq!(config.aws_image, "quay.io/example/aws-webhook:4.1");
        assert_eq!(config.azure_image, "quay.io/example/azure-webhook:4.1");
    }

    #[test]
    fn test_blank_namespace_falls_back_to_default() {
        let config = OperatorConfig::from_lookup(lookup_from(&[("POD_NAMESPACE", "  ")]));
        assert_eq!(config.operator_namespace, "openshift-cloud-credential-operator");
    }

    #[test]
    fn test_overrides() {
        let config = OperatorConfig::from_lookup(lookup_from(&[
            ("POD_NAMESPACE", "cco"),
            ("MANIFEST_DIR", "/bindata"),
            ("LOG_LEVEL", "debug"),
            ("LOG_FORMAT", "JSON"),
        ]));
        assert_eq!(config.operator_namespace, "cco");
        assert_eq!(config.manifest_dir, PathBuf::from("/bindata"));
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.log_format, LogFormat::Json);
    }

    #[test]
    fn test_unknown_log_format_keeps_default() {
        let config = OperatorConfig::from_lookup(lookup_from(&[("LOG_FORMAT", "xml")]));
        assert_eq!(config.log_format, LogFormat::Text);
        assert!("xml".parse::<LogFormat>().is_err());
    }
}
