//! # List Command
//!
//! Command to list CredentialsRequest resources.

use anyhow::{Context, Result};
use cloud_credential_operator::crd::CredentialsRequest;
use kube::api::{Api, ListParams};
use kube::Client;

/// List CredentialsRequests in one namespace, or all when `namespace` is `None`
pub async fn list_command(client: Client, namespace: Option<String>) -> Result<()> {
    let api: Api<CredentialsRequest> = if let Some(ns) = &namespace {
        println!("Listing CredentialsRequest resources in namespace '{ns}'...");
        Api::namespaced(client, ns)
    } else {
        println!("Listing CredentialsRequest resources in all namespaces...");
        Api::all(client)
    };

    let requests = api
        .list(&ListParams::default())
        .await
        .context("Failed to list CredentialsRequest resources")?;

    if requests.items.is_empty() {
        println!("No CredentialsRequest resources found.");
        return Ok(());
    }

    print!("{}", format_requests(&requests.items));
    Ok(())
}

fn format_requests(requests: &[CredentialsRequest]) -> String {
    let mut out = format!(
        "\n{:<45} {:<40} {:<12} {}\n",
        "NAME", "NAMESPACE", "PROVISIONED", "FAILING"
    );
    out.push_str(&"-".repeat(120));
    out.push('\n');

    for request in requests {
        let name = request.metadata.name.as_deref().unwrap_or("<unknown>");
        let ns = request.metadata.namespace.as_deref().unwrap_or("<unknown>");
        let provisioned = match &request.status {
            Some(status) if status.provisioned => "True",
            Some(_) => "False",
            None => "Unknown",
        };
        let failing = request
            .status
            .as_ref()
            .map(|s| {
                s.failing_conditions()
                    .map(|c| c.r#type.as_str())
                    .collect::<Vec<_>>()
                    .join(",")
            })
            .filter(|f| !f.is_empty())
            .unwrap_or_else(|| "-".to_string());

        out.push_str(&format!("{name:<45} {ns:<40} {provisioned:<12} {failing}\n"));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use cloud_credential_operator::crd::{
        ConditionStatus, ConditionType, CredentialsRequestCondition, CredentialsRequestSpec,
        CredentialsRequestStatus,
    };

    #[test]
    fn test_format_requests() {
        let mut healthy = CredentialsRequest::new("registry", CredentialsRequestSpec::default());
        healthy.metadata.namespace = Some("openshift-cloud-credential-operator".to_string());
        healthy.status = Some(CredentialsRequestStatus {
            provisioned: true,
            ..CredentialsRequestStatus::default()
        });

        let mut failing = CredentialsRequest::new("ingress", CredentialsRequestSpec::default());
        failing.metadata.namespace = Some("openshift-cloud-credential-operator".to_string());
        failing.status = Some(CredentialsRequestStatus {
            conditions: vec![CredentialsRequestCondition {
                r#type: ConditionType::InsufficientCloudCredentials,
                status: ConditionStatus::True,
                last_probe_time: None,
                last_transition_time: None,
                reason: None,
                message: None,
            }],
            ..CredentialsRequestStatus::default()
        });

        let fresh = CredentialsRequest::new("fresh", CredentialsRequestSpec::default());

        let table = format_requests(&[healthy, failing, fresh]);
        let lines: Vec<&str> = table.lines().collect();
        assert!(lines[3].starts_with("registry"));
        assert!(lines[3].contains("True"));
        assert!(lines[3].ends_with('-'));
        assert!(lines[4].ends_with("InsufficientCloudCreds"));
        assert!(lines[5].contains("<unknown>"));
        assert!(lines[5].contains("Unknown"));
    }
}
