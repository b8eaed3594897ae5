//! # Webhook Planning
//!
//! Evaluates every selector for a namespace and records what should be
//! applied. Applying the result to the cluster happens elsewhere.

use crate::podidentity::{Applicability, PodIdentity, Provider, SecretSource};
use tracing::{info, warn};

/// Planned outcome for one provider's webhook
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WebhookPlan {
    pub provider: Provider,
    /// Deployment template path, relative to the manifest directory
    pub deployment: &'static str,
    pub image: String,
    pub applicability: Applicability,
}

impl WebhookPlan {
    #[must_use]
    pub fn should_deploy(&self) -> bool {
        self.applicability.is_applicable()
    }
}

/// Query every selector for `namespace`, keeping the selector order
///
/// Selectors are independent; one failing lookup does not affect the others.
pub async fn plan_webhooks<P: PodIdentity>(
    webhooks: &[P],
    secrets: &dyn SecretSource,
    namespace: &str,
) -> Vec<WebhookPlan> {
    let mut plans = Vec::with_capacity(webhooks.len());

    for webhook in webhooks {
        let applicability = webhook.probe(secrets, namespace).await;
        let plan = WebhookPlan {
            provider: webhook.provider(),
            deployment: webhook.deployment(),
            image: webhook.image_pull_spec().to_string(),
            applicability,
        };

        if plan.should_deploy() && plan.image.is_empty() {
            warn!(
                provider = %plan.provider,
                namespace,
                "Pod identity webhook applies but no image is configured"
            );
        }
        info!(
            provider = %plan.provider,
            namespace,
            deploy = plan.should_deploy(),
            reason = %plan.applicability,
            "Evaluated pod identity webhook"
        );
        plans.push(plan);
    }

    plans
}

/// Plans that should be applied
pub fn deployable(plans: &[WebhookPlan]) -> impl Iterator<Item = &WebhookPlan> {
    plans.iter().filter(|p| p.should_deploy())
}
