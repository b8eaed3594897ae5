//! # CredentialsRequest Spec
//!
//! Main CRD definition and the desired-state types.
//!
//! ## Example
//!
//! ```yaml
//! apiVersion: cloudcredential.openshift.io/v1
//! kind: CredentialsRequest
//! metadata:
//!   name: openshift-image-registry
//!   namespace: openshift-cloud-credential-operator
//! spec:
//!   secretRef:
//!     name: installer-cloud-credentials
//!     namespace: openshift-image-registry
//!   providerSpec:
//!     apiVersion: cloudcredential.openshift.io/v1
//!     kind: AWSProviderSpec
//!     statementEntries:
//!       - effect: Allow
//!         action: ["s3:CreateBucket"]
//!         resource: "*"
//! ```

use crate::crd::status::CredentialsRequestStatus;
use kube::core::ObjectList;
use kube::CustomResource;
use schemars::{JsonSchema, Schema, SchemaGenerator};
use serde::{Deserialize, Serialize};

/// CredentialsRequest Custom Resource Definition
///
/// Describes a cloud credential that should be minted (or passed through) and
/// stored in the Secret referenced by `secretRef`.
#[derive(CustomResource, Debug, Clone, Default, PartialEq, Deserialize, Serialize, JsonSchema)]
#[kube(
    kind = "CredentialsRequest",
    group = "cloudcredential.openshift.io",
    version = "v1",
    namespaced,
    status = "CredentialsRequestStatus",
    printcolumn = r#"{"name":"Provisioned", "type":"boolean", "jsonPath":".status.provisioned"}"#,
    printcolumn = r#"{"name":"Age", "type":"date", "jsonPath":".metadata.creationTimestamp"}"#
)]
#[serde(rename_all = "camelCase")]
pub struct CredentialsRequestSpec {
    /// Secret where the credentials are stored once generated
    pub secret_ref: ObjectReference,
    /// Cloud provider specific credentials specification
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schemars(schema_with = "preserve_unknown_fields")]
    pub provider_spec: Option<serde_json::Value>,
    /// ServiceAccounts that will use the permissions of this request.
    /// Not consumed by the operator itself; needed to set up cloud-side access
    /// control for token based credential flows.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_account_names: Option<Vec<String>>,
    /// Path where the ServiceAccount token is mounted in the consuming workload.
    /// Together with provider fields such as `stsIAMRoleARN` this asks for a
    /// token based (e.g. AWS STS) credentials secret.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cloud_token_path: Option<String>,
}

/// List of CredentialsRequests as returned by the API server
pub type CredentialsRequestList = ObjectList<CredentialsRequest>;

/// Reference to another Kubernetes object
///
/// Mirrors `core/v1 ObjectReference`; every field is optional on the wire.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ObjectReference {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field_path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource_version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uid: Option<String>,
}

impl ObjectReference {
    /// Reference to a named object in a namespace
    pub fn namespaced(namespace: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            namespace: Some(namespace.into()),
            ..Self::default()
        }
    }
}

/// Schema for opaque provider blobs
///
/// Kubernetes prunes unknown fields unless told otherwise; provider specs and
/// statuses are free-form and validated by the provider actuators.
pub(crate) fn preserve_unknown_fields(_gen: &mut SchemaGenerator) -> Schema {
    schemars::json_schema!({
        "type": "object",
        "nullable": true,
        "x-kubernetes-preserve-unknown-fields": true
    })
}
