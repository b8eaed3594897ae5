//! # CredentialsRequest Status
//!
//! Observed state and condition types.

use crate::crd::spec::preserve_unknown_fields;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Status of the CredentialsRequest resource
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CredentialsRequestStatus {
    /// True once the credentials have been initially provisioned
    pub provisioned: bool,
    /// Time the credentials were last synced (RFC3339)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_sync_timestamp: Option<String>,
    /// Generation of the resource that was last synced
    pub last_sync_generation: i64,
    /// Resource version of the cloud credentials secret at the last sync.
    /// Used to notice root credential changes between syncs.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_sync_cloud_creds_secret_resource_version: Option<String>,
    /// Cloud provider specific status
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schemars(schema_with = "preserve_unknown_fields")]
    pub provider_status: Option<serde_json::Value>,
    /// Detailed status, at most one entry per condition type
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub conditions: Vec<CredentialsRequestCondition>,
}

/// A single status condition of a CredentialsRequest
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CredentialsRequestCondition {
    /// Type of condition
    pub r#type: ConditionType,
    /// Status of the condition
    pub status: ConditionStatus,
    /// Last time the condition was probed (RFC3339)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_probe_time: Option<String>,
    /// Last time the condition changed status (RFC3339)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_transition_time: Option<String>,
    /// One-word CamelCase reason for the last transition
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    /// Human-readable details about the last transition
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Status of a condition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize, JsonSchema)]
pub enum ConditionStatus {
    True,
    False,
    Unknown,
}

impl ConditionStatus {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            ConditionStatus::True => "True",
            ConditionStatus::False => "False",
            ConditionStatus::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for ConditionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Valid condition types for a CredentialsRequest
// Variant docs must stay plain comments: doc comments turn the schema into a oneOf.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize, JsonSchema)]
pub enum ConditionType {
    // The cloud credentials are insufficient to mint or pass through
    // credentials for this request
    #[serde(rename = "InsufficientCloudCreds")]
    InsufficientCloudCredentials,
    // The namespace that should hold the resulting secret does not exist
    MissingTargetNamespace,
    // Provisioning (minting or passthrough) failed; the error is in the message
    CredentialsProvisionFailure,
    // Cleaning up previously created cloud resources failed
    CredentialsDeprovisionFailure,
    // The provider spec targets a different platform than the cluster runs on.
    // Expected: release payloads carry requests for every cloud.
    Ignored,
    // The request is no longer required and has to be cleaned up
    StaleCredentials,
    // A previously created app registration / service principal could not be
    // deleted when pivoting from mint to passthrough mode
    OrphanedCloudResource,
}

/// Conditions under which the overall operator status is not healthy
pub const FAILURE_CONDITION_TYPES: [ConditionType; 4] = [
    ConditionType::InsufficientCloudCredentials,
    ConditionType::MissingTargetNamespace,
    ConditionType::CredentialsProvisionFailure,
    ConditionType::CredentialsDeprovisionFailure,
];

impl ConditionType {
    /// Every condition type, in declaration order
    pub const ALL: [ConditionType; 7] = [
        ConditionType::InsufficientCloudCredentials,
        ConditionType::MissingTargetNamespace,
        ConditionType::CredentialsProvisionFailure,
        ConditionType::CredentialsDeprovisionFailure,
        ConditionType::Ignored,
        ConditionType::StaleCredentials,
        ConditionType::OrphanedCloudResource,
    ];

    /// Wire name of the condition type
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            ConditionType::InsufficientCloudCredentials => "InsufficientCloudCreds",
            ConditionType::MissingTargetNamespace => "MissingTargetNamespace",
            ConditionType::CredentialsProvisionFailure => "CredentialsProvisionFailure",
            ConditionType::CredentialsDeprovisionFailure => "CredentialsDeprovisionFailure",
            ConditionType::Ignored => "Ignored",
            ConditionType::StaleCredentials => "StaleCredentials",
            ConditionType::OrphanedCloudResource => "OrphanedCloudResource",
        }
    }

    /// Whether a `True` condition of this type marks the operator unhealthy
    #[must_use]
    pub fn is_failure(&self) -> bool {
        FAILURE_CONDITION_TYPES.contains(self)
    }
}

impl fmt::Display for ConditionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl CredentialsRequestStatus {
    /// Failure conditions currently `True`, in list order
    pub fn failing_conditions(&self) -> impl Iterator<Item = &CredentialsRequestCondition> {
        self.conditions
            .iter()
            .filter(|c| c.r#type.is_failure() && c.status == ConditionStatus::True)
    }

    /// True when no failure condition is set
    #[must_use]
    pub fn is_healthy(&self) -> bool {
        self.failing_conditions().next().is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn condition(r#type: ConditionType, status: ConditionStatus) -> CredentialsRequestCondition {
        CredentialsRequestCondition {
            r#type,
            status,
            last_probe_time: None,
            last_transition_time: None,
            reason: None,
            message: None,
        }
    }

    #[test]
    fn test_failure_membership_is_fixed() {
        let failures: Vec<_> = ConditionType::ALL
            .iter()
            .filter(|t| t.is_failure())
            .copied()
            .collect();
        assert_eq!(failures, FAILURE_CONDITION_TYPES.to_vec());
        assert!(!ConditionType::Ignored.is_failure());
        assert!(!ConditionType::StaleCredentials.is_failure());
        assert!(!ConditionType::OrphanedCloudResource.is_failure());
    }

    #[test]
    fn test_condition_type_wire_names() {
        for t in ConditionType::ALL {
            let json = serde_json::to_string(&t).unwrap();
            assert_eq!(json, format!("\"{}\"", t.as_str()));
        }
        let parsed: ConditionType = serde_json::from_str("\"InsufficientCloudCreds\"").unwrap();
        assert_eq!(parsed, ConditionType::InsufficientCloudCredentials);
    }

    #[test]
    fn test_failing_conditions_only_counts_true_failures() {
        let status = CredentialsRequestStatus {
            conditions: vec![
                condition(ConditionType::Ignored, ConditionStatus::True),
                condition(ConditionType::MissingTargetNamespace, ConditionStatus::False),
                condition(ConditionType::CredentialsProvisionFailure, ConditionStatus::True),
                condition(ConditionType::InsufficientCloudCredentials, ConditionStatus::Unknown),
            ],
            ..CredentialsRequestStatus::default()
        };

        let failing: Vec<_> = status.failing_conditions().map(|c| c.r#type).collect();
        assert_eq!(failing, vec![ConditionType::CredentialsProvisionFailure]);
        assert!(!status.is_healthy());
        assert!(CredentialsRequestStatus::default().is_healthy());
    }

    #[test]
    fn test_empty_status_omits_optional_fields() {
        let json = serde_json::to_value(CredentialsRequestStatus::default()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"provisioned": false, "lastSyncGeneration": 0})
        );
    }
}
