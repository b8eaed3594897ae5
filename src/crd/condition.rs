//! # Condition Updates
//!
//! Keyed append/replace of status conditions. A condition list never holds two
//! entries of the same type.

use crate::crd::status::{ConditionStatus, ConditionType, CredentialsRequestCondition};
use chrono::{DateTime, SecondsFormat, Utc};

/// Find the condition of the given type
#[must_use]
pub fn find_condition(
    conditions: &[CredentialsRequestCondition],
    condition_type: ConditionType,
) -> Option<&CredentialsRequestCondition> {
    conditions.iter().find(|c| c.r#type == condition_type)
}

/// Set a condition, keyed by type
///
/// - Missing condition: appended only when `status` is `True`. A condition that
///   was never raised is not recorded as `False`.
/// - Status changed: status, reason, message, probe and transition time move.
/// - Only reason or message changed: probe time moves, transition time stays.
/// - Nothing changed: the entry is left untouched.
///
/// Repeated entries of `condition_type` (status read back from the API) are
/// folded into the first one before the update.
///
/// Returns true when the list was modified.
pub fn set_condition(
    conditions: &mut Vec<CredentialsRequestCondition>,
    condition_type: ConditionType,
    status: ConditionStatus,
    reason: &str,
    message: &str,
    now: DateTime<Utc>,
) -> bool {
    let now = now.to_rfc3339_opts(SecondsFormat::Secs, true);
    let reason = non_empty(reason);
    let message = non_empty(message);
    let folded = fold_duplicates(conditions, condition_type);

    match conditions.iter_mut().find(|c| c.r#type == condition_type) {
        None => {
            if status != ConditionStatus::True {
                return false;
            }
            conditions.push(CredentialsRequestCondition {
                r#type: condition_type,
                status,
                last_probe_time: Some(now.clone()),
                last_transition_time: Some(now),
                reason,
                message,
            });
            true
        }
        Some(existing) => {
            let status_changed = existing.status != status;
            if !status_changed && existing.reason == reason && existing.message == message {
                return folded;
            }
            if status_changed {
                existing.last_transition_time = Some(now.clone());
            }
            existing.status = status;
            existing.reason = reason;
            existing.message = message;
            existing.last_probe_time = Some(now);
            true
        }
    }
}

/// Keep only the first entry of `condition_type`; true if any were dropped
fn fold_duplicates(
    conditions: &mut Vec<CredentialsRequestCondition>,
    condition_type: ConditionType,
) -> bool {
    let before = conditions.len();
    let mut seen = false;
    conditions.retain(|c| {
        if c.r#type != condition_type {
            return true;
        }
        let keep = !seen;
        seen = true;
        keep
    });
    conditions.len() != before
}

fn non_empty(value: &str) -> Option<String> {
    (!value.is_empty()).then(|| value.to_string())
}
