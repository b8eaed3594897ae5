//! # Pod Identity Command
//!
//! Evaluates every pod identity webhook selector for a namespace.

use anyhow::Result;
use cloud_credential_operator::config::OperatorConfig;
use cloud_credential_operator::podidentity::{plan_webhooks, PodIdentityWebhook, WebhookPlan};
use kube::Client;

/// Print which pod identity webhooks belong in `namespace`
pub async fn pod_identity_command(
    client: &Client,
    config: &OperatorConfig,
    namespace: &str,
) -> Result<()> {
    let webhooks = PodIdentityWebhook::all(&config.pod_identity);
    let plans = plan_webhooks(&webhooks, client, namespace).await;

    println!("Pod identity webhooks for namespace '{namespace}':");
    print!("{}", format_plans(&plans));
    Ok(())
}

fn format_plans(plans: &[WebhookPlan]) -> String {
    let mut out = format!(
        "\n{:<8} {:<8} {:<50} {:<45} {}\n",
        "PROVIDER", "DEPLOY", "MANIFEST", "IMAGE", "REASON"
    );
    out.push_str(&"-".repeat(130));
    out.push('\n');

    for plan in plans {
        let deploy = if plan.should_deploy() { "Yes" } else { "No" };
        let image = if plan.image.is_empty() {
            "<unset>"
        } else {
            plan.image.as_str()
        };
        out.push_str(&format!(
            "{:<8} {:<8} {:<50} {:<45} {}\n",
            plan.provider.as_str(),
            deploy,
            plan.deployment,
            image,
            plan.applicability
        ));
    }
    out
}
