//! # Status Command
//!
//! Command to show detailed status of a CredentialsRequest resource.

use anyhow::{Context, Result};
use cloud_credential_operator::crd::CredentialsRequest;
use kube::api::Api;
use kube::Client;

/// Show detailed status of a CredentialsRequest
pub async fn status_command(client: Client, name: &str, namespace: &str) -> Result<()> {
    let api: Api<CredentialsRequest> = Api::namespaced(client, namespace);

    let request = api
        .get(name)
        .await
        .with_context(|| format!("Failed to get CredentialsRequest '{namespace}/{name}'"))?;

    print!("{}", format_status(&request));
    Ok(())
}

fn format_status(request: &CredentialsRequest) -> String {
    let mut out = String::new();
    let name = request.metadata.name.as_deref().unwrap_or("<unknown>");
    let ns = request.metadata.namespace.as_deref().unwrap_or("<unknown>");
    out.push_str(&format!("Status for CredentialsRequest '{ns}/{name}'\n\n"));

    out.push_str("Spec:\n");
    match request.target_secret() {
        Ok((secret_ns, secret_name)) => {
            out.push_str(&format!("  Target Secret: {secret_ns}/{secret_name}\n"));
        }
        Err(e) => out.push_str(&format!("  Target Secret: <invalid: {e}>\n")),
    }
    if let Some(kind) = request
        .spec
        .provider_spec
        .as_ref()
        .and_then(|p| p.get("kind"))
        .and_then(|k| k.as_str())
    {
        out.push_str(&format!("  Provider Spec: {kind}\n"));
    }
    if let Some(accounts) = &request.spec.service_account_names {
        out.push_str(&format!("  Service Accounts: {}\n", accounts.join(", ")));
    }
    if let Some(path) = &request.spec.cloud_token_path {
        out.push_str(&format!("  Cloud Token Path: {path}\n"));
    }
    out.push_str(&format!(
        "  Deprovision Finalizer: {}\n",
        request.has_deprovision_finalizer()
    ));

    out.push_str("\nStatus:\n");
    let Some(status) = &request.status else {
        out.push_str("  <not yet reconciled>\n");
        return out;
    };
    out.push_str(&format!("  Provisioned: {}\n", status.provisioned));
    out.push_str(&format!("  Last Sync Generation: {}\n", status.last_sync_generation));
    if let Some(ts) = &status.last_sync_timestamp {
        out.push_str(&format!("  Last Sync: {ts}\n"));
    }
    out.push_str(&format!("  Healthy: {}\n", status.is_healthy()));

    if !status.conditions.is_empty() {
        out.push_str("\nConditions:\n");
        for c in &status.conditions {
            out.push_str(&format!(
                "  {} = {} ({}): {}\n",
                c.r#type,
                c.status,
                c.reason.as_deref().unwrap_or("-"),
                c.message.as_deref().unwrap_or("")
            ));
        }
    }
    out
}
