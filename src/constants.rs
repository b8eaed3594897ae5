//! # Constants
//!
//! Shared constants used throughout the operator.
//!
//! Resource-facing values (finalizers, annotations, namespaces) are part of the
//! `cloudcredential.openshift.io` API contract and must not change. Defaults can
//! be overridden via environment variables where [`crate::config`] says so.

/// API group of the `CredentialsRequest` custom resource
pub const API_GROUP: &str = "cloudcredential.openshift.io";

/// API version of the `CredentialsRequest` custom resource
pub const API_VERSION: &str = "v1";

/// Finalizer placed on CredentialsRequests so cloud-side credentials are removed
/// before the resource is allowed to disappear from etcd.
pub const FINALIZER_DEPROVISION: &str = "cloudcredential.openshift.io/deprovision";

/// Annotation on target Secrets pointing back (`namespace/name`) to the
/// CredentialsRequest that created or adopted them.
pub const ANNOTATION_CREDENTIALS_REQUEST: &str = "cloudcredential.openshift.io/credentials-request";

/// Annotation on target Secrets recording the last AWS policy successfully applied
pub const ANNOTATION_AWS_POLICY_LAST_APPLIED: &str =
    "cloudcredential.openshift.io/aws-policy-last-applied";

/// Namespace the credentials operator runs in
pub const CLOUD_CRED_OPERATOR_NAMESPACE: &str = "openshift-cloud-credential-operator";

/// Bundled deployment template for the AWS pod identity webhook
pub const AWS_POD_IDENTITY_DEPLOYMENT: &str = "v4.1.0/aws-pod-identity-webhook/deployment.yaml";

/// Bundled deployment template for the Azure pod identity webhook
pub const AZURE_POD_IDENTITY_DEPLOYMENT: &str =
    "v4.1.0/azure-pod-identity-webhook/deployment.yaml";

/// Environment variable holding the AWS pod identity webhook image
pub const AWS_POD_IDENTITY_IMAGE_ENV: &str = "AWS_POD_IDENTITY_WEBHOOK_IMAGE";

/// Environment variable holding the Azure pod identity webhook image
pub const AZURE_POD_IDENTITY_IMAGE_ENV: &str = "AZURE_POD_IDENTITY_WEBHOOK_IMAGE";

/// Secret whose presence enables the Azure pod identity webhook
pub const AZURE_CREDENTIALS_SECRET_NAME: &str = "azure-credentials";

/// Key that must be present in [`AZURE_CREDENTIALS_SECRET_NAME`]
pub const AZURE_TENANT_ID_KEY: &str = "azure_tenant_id";

/// Default directory holding the bundled webhook manifests
pub const DEFAULT_MANIFEST_DIR: &str = "manifests";

/// Default log level when neither `RUST_LOG` nor `LOG_LEVEL` is set
pub const DEFAULT_LOG_LEVEL: &str = "info";
