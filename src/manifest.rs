//! # Webhook Manifests
//!
//! Renders the bundled pod identity webhook deployment templates with the
//! image chosen by the selector. Rendering is pure; nothing is sent to the
//! cluster.

use crate::podidentity::WebhookPlan;
use k8s_openapi::api::apps::v1::Deployment;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("failed to read manifest {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("manifest {name} is not a valid Deployment: {source}")]
    Parse {
        name: String,
        #[source]
        source: serde_yaml::Error,
    },
    #[error("manifest {0} has no containers")]
    NoContainers(String),
    #[error("no image configured for the {0} pod identity webhook")]
    MissingImage(String),
}

/// Read the plan's deployment template from `manifest_dir` and render it
pub fn render_deployment(manifest_dir: &Path, plan: &WebhookPlan) -> Result<Deployment, ManifestError> {
    let path = manifest_dir.join(plan.deployment);
    debug!("Reading pod identity webhook manifest {}", path.display());
    let template = std::fs::read_to_string(&path).map_err(|source| ManifestError::Read {
        path: path.clone(),
        source,
    })?;
    render_deployment_str(&template, plan)
}

/// Render an in-memory deployment template for the plan
///
/// Every container (init containers included) gets the plan's image.
pub fn render_deployment_str(template: &str, plan: &WebhookPlan) -> Result<Deployment, ManifestError> {
    if plan.image.is_empty() {
        return Err(ManifestError::MissingImage(plan.provider.to_string()));
    }

    let mut deployment: Deployment =
        serde_yaml::from_str(template).map_err(|source| ManifestError::Parse {
            name: plan.deployment.to_string(),
            source,
        })?;

    let pod_spec = deployment
        .spec
        .as_mut()
        .and_then(|spec| spec.template.spec.as_mut())
        .ok_or_else(|| ManifestError::NoContainers(plan.deployment.to_string()))?;

    if pod_spec.containers.is_empty() {
        return Err(ManifestError::NoContainers(plan.deployment.to_string()));
    }

    let init_containers = pod_spec.init_containers.iter_mut().flatten();
    for container in pod_spec.containers.iter_mut().chain(init_containers) {
        container.image = Some(plan.image.clone());
    }

    Ok(deployment)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::podidentity::{Applicability, Provider};

    const TEMPLATE: &str = r#"
apiVersion: apps/v1
kind: Deployment
metadata:
  name: pod-identity-webhook
  namespace: openshift-cloud-credential-operator
spec:
  replicas: 2
  selector:
    matchLabels:
      app: pod-identity-webhook
  template:
    metadata:
      labels:
        app: pod-identity-webhook
    spec:
      initContainers:
        - name: init
          image: placeholder
      containers:
        - name: pod-identity-webhook
          image: placeholder
          args: ["--in-cluster=false"]
"#;

    fn plan(image: &str) -> WebhookPlan {
        WebhookPlan {
            provider: Provider::Aws,
            deployment: "v4.1.0/aws-pod-identity-webhook/deployment.yaml",
            image: image.to_string(),
            applicability: Applicability::Unconditional,
        }
    }

    #[test]
    fn test_render_sets_image_on_every_container() {
        let deployment = render_deployment_str(TEMPLATE, &plan("quay.io/ocp/aws-webhook@sha256:abc")).unwrap();
        let pod_spec = deployment.spec.unwrap().template.spec.unwrap();

        assert_eq!(
            pod_spec.containers[0].image.as_deref(),
            Some("quay.io/ocp/aws-webhook@sha256:abc")
        );
        assert_eq!(
            pod_spec.init_containers.unwrap()[0].image.as_deref(),
            Some("quay.io/ocp/aws-webhook@sha256:abc")
        );
        assert_eq!(
            pod_spec.containers[0].args,
            Some(vec!["--in-cluster=false".to_string()])
        );
    }

    #[test]
    fn test_render_requires_image() {
        let err = render_deployment_str(TEMPLATE, &plan("")).unwrap_err();
        assert!(matches!(err, ManifestError::MissingImage(p) if p == "aws"));
    }

    #[test]
    fn test_render_rejects_templates_without_containers() {
        let template = r#"
apiVersion: apps/v1
kind: Deployment
metadata:
  name: empty
spec:
  selector: {}
  template:
    spec:
      containers: []
"#;
        let err = render_deployment_str(template, &plan("img")).unwrap_err();
        assert!(matches!(err, ManifestError::NoContainers(_)));
    }

    #[test]
    fn test_render_rejects_garbage() {
        let err = render_deployment_str("spec: [1, 2", &plan("img")).unwrap_err();
        assert!(matches!(err, ManifestError::Parse { .. }));
    }

    #[test]
    fn test_render_from_manifest_dir() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("v4.1.0/aws-pod-identity-webhook");
        std::fs::create_dir_all(&path).unwrap();
        std::fs::write(path.join("deployment.yaml"), TEMPLATE).unwrap();

        let deployment = render_deployment(dir.path(), &plan("img:1")).unwrap();
        assert_eq!(
            deployment.metadata.name.as_deref(),
            Some("pod-identity-webhook")
        );

        let missing = render_deployment(&dir.path().join("nope"), &plan("img:1")).unwrap_err();
        assert!(matches!(missing, ManifestError::Read { .. }));
    }
}
