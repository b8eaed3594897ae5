//! # Prelude
//!
//! Re-exports commonly used types and traits.
//!
//! ```rust
//! use cloud_credential_operator::prelude::*;
//! ```

// CRD types
pub use crate::crd::*;

// Pod identity selection
pub use crate::podidentity::{
    deployable, plan_webhooks, Applicability, PodIdentity, PodIdentityWebhook, Provider,
    SecretSource, WebhookPlan,
};

// Configuration
pub use crate::config::{OperatorConfig, PodIdentityConfig};

// Errors
pub use crate::manifest::ManifestError;
