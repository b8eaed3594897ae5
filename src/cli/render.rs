//! # Render Command
//!
//! Renders one provider's pod identity webhook deployment as YAML.

use anyhow::{bail, Context, Result};
use cloud_credential_operator::config::OperatorConfig;
use cloud_credential_operator::manifest::render_deployment;
use cloud_credential_operator::podidentity::{plan_webhooks, PodIdentityWebhook, Provider};
use kube::Client;
use tracing::warn;

/// Print the rendered deployment for `provider`
///
/// Refuses when the webhook is not applicable in `namespace` unless `force`.
pub async fn render_command(
    client: &Client,
    config: &OperatorConfig,
    namespace: &str,
    provider: Provider,
    force: bool,
) -> Result<()> {
    let webhook = PodIdentityWebhook::for_provider(provider, &config.pod_identity);
    let plans = plan_webhooks(std::slice::from_ref(&webhook), client, namespace).await;
    let plan = plans
        .into_iter()
        .next()
        .context("No plan produced for pod identity webhook")?;

    if !plan.should_deploy() {
        if !force {
            bail!(
                "{} pod identity webhook is not applicable in namespace '{}' ({}); use --force to render anyway",
                provider,
                namespace,
                plan.applicability
            );
        }
        warn!(
            "Rendering {} pod identity webhook although it is not applicable: {}",
            provider, plan.applicability
        );
    }

    let deployment = render_deployment(&config.manifest_dir, &plan)?;
    let yaml = serde_yaml::to_string(&deployment).context("Failed to serialize deployment")?;
    println!("---");
    print!("{yaml}");
    Ok(())
}
