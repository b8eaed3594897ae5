//! # Bundled Manifest Tests
//!
//! Renders the deployment templates shipped under `manifests/` through the
//! same paths the selectors hand out.

use cloud_credential_operator::config::PodIdentityConfig;
use cloud_credential_operator::constants::{
    AZURE_CREDENTIALS_SECRET_NAME, AZURE_TENANT_ID_KEY, CLOUD_CRED_OPERATOR_NAMESPACE,
    DEFAULT_MANIFEST_DIR,
};
use cloud_credential_operator::manifest::render_deployment;
use cloud_credential_operator::podidentity::{
    plan_webhooks, PodIdentityWebhook, Provider, StaticSecrets,
};
use std::path::{Path, PathBuf};

fn bundled_manifests() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join(DEFAULT_MANIFEST_DIR)
}

#[tokio::test]
async fn test_every_bundled_template_renders() {
    let config = PodIdentityConfig {
        aws_image: "registry.example/aws-pod-identity-webhook:1".to_string(),
        azure_image: "registry.example/azure-workload-identity-webhook:1".to_string(),
    };
    let webhooks = PodIdentityWebhook::all(&config);
    let secrets = StaticSecrets::new().with_secret(
        CLOUD_CRED_OPERATOR_NAMESPACE,
        AZURE_CREDENTIALS_SECRET_NAME,
        &[(AZURE_TENANT_ID_KEY, "tenant")],
    );
    let plans = plan_webhooks(&webhooks, &secrets, CLOUD_CRED_OPERATOR_NAMESPACE).await;

    let providers: Vec<_> = plans.iter().map(|p| p.provider).collect();
    assert_eq!(providers, Provider::ALL.to_vec());

    for plan in &plans {
        assert!(plan.should_deploy(), "{} should deploy", plan.provider);

        let deployment = render_deployment(&bundled_manifests(), plan)
            .unwrap_or_else(|e| panic!("{} template failed to render: {e}", plan.provider));
        assert_eq!(deployment.metadata.namespace.as_deref(), Some(CLOUD_CRED_OPERATOR_NAMESPACE));

        let pod_spec = deployment.spec.unwrap().template.spec.unwrap();
        assert!(!pod_spec.containers.is_empty());
        for container in pod_spec
            .containers
            .iter()
            .chain(pod_spec.init_containers.iter().flatten())
        {
            assert_eq!(container.image.as_deref(), Some(plan.image.as_str()));
        }
    }
}
