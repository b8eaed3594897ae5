//! # Custom Resource Definitions
//!
//! CRD types for the cloud credential operator.
//!
//! ## Module Structure
//!
//! - `spec.rs` - `CredentialsRequest` CRD and desired state
//! - `status.rs` - Observed state and condition types
//! - `condition.rs` - Keyed condition updates
//! - `metadata.rs` - Finalizer and annotation helpers

mod condition;
mod metadata;
mod spec;
mod status;

// Re-export all public types
pub use condition::{find_condition, set_condition};
pub use metadata::{parse_annotation_value, CrdError};
pub use spec::{CredentialsRequest, CredentialsRequestList, CredentialsRequestSpec, ObjectReference};
pub use status::{
    ConditionStatus, ConditionType, CredentialsRequestCondition, CredentialsRequestStatus,
    FAILURE_CONDITION_TYPES,
};
