//! # AWS Pod Identity Webhook
//!
//! The AWS webhook is always applicable; the cluster is never queried.

use crate::constants::AWS_POD_IDENTITY_DEPLOYMENT;
use crate::podidentity::{Applicability, PodIdentity, Provider, SecretSource};
use async_trait::async_trait;
use tracing::debug;

/// AWS pod identity webhook selector
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AwsPodIdentity {
    image: String,
}

impl AwsPodIdentity {
    pub fn new(image: impl Into<String>) -> Self {
        Self {
            image: image.into(),
        }
    }
}

#[async_trait]
impl PodIdentity for AwsPodIdentity {
    fn provider(&self) -> Provider {
        Provider::Aws
    }

    fn deployment(&self) -> &'static str {
        AWS_POD_IDENTITY_DEPLOYMENT
    }

    fn image_pull_spec(&self) -> &str {
        &self.image
    }

    async fn probe(&self, _secrets: &dyn SecretSource, namespace: &str) -> Applicability {
        debug!(namespace, "AWS pod identity webhook is unconditionally applicable");
        Applicability::Unconditional
    }
}
