//! # credctl
//!
//! Read-only command-line interface for the cloud credential operator.
//!
//! ## Usage
//!
//! ```bash
//! # Which pod identity webhooks belong in the operator namespace?
//! credctl pod-identity
//!
//! # Render the Azure webhook deployment with the configured image
//! credctl render azure > azure-webhook.yaml
//!
//! # List CredentialsRequests and their failing conditions
//! credctl list --all-namespaces
//!
//! # Show status of one CredentialsRequest
//! credctl status openshift-image-registry
//! ```

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use cloud_credential_operator::config::OperatorConfig;
use cloud_credential_operator::podidentity::Provider;
use cloud_credential_operator::runtime::{init_rustls, init_tracing};
use kube::config::KubeConfigOptions;
use kube::{Client, Config};

mod list;
mod pod_identity;
mod render;
mod status;

/// Cloud credential operator CLI
#[derive(Parser)]
#[command(name = "credctl")]
#[command(
    about = "Inspect CredentialsRequests and pod identity webhook selection",
    long_about = None,
    after_help = "\
Examples:
  credctl pod-identity
  credctl render aws --namespace openshift-cloud-credential-operator
  credctl list --all-namespaces
  credctl status openshift-ingress
"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Kubernetes namespace (defaults to the operator namespace)
    #[arg(short, long, global = true)]
    namespace: Option<String>,

    /// Kubernetes context to use
    #[arg(short, long, global = true)]
    context: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate every pod identity webhook for the namespace
    #[command(name = "pod-identity")]
    PodIdentity,
    /// Render a pod identity webhook deployment as YAML
    Render {
        /// Cloud provider of the webhook
        #[arg(value_enum, value_name = "PROVIDER")]
        provider: ProviderArg,

        /// Render even when the webhook is not applicable in the namespace
        #[arg(long)]
        force: bool,
    },
    /// List CredentialsRequest resources
    List {
        /// List across all namespaces
        #[arg(short = 'A', long)]
        all_namespaces: bool,
    },
    /// Show status of a CredentialsRequest resource
    Status {
        /// Name of the CredentialsRequest
        #[arg(value_name = "NAME")]
        name: String,
    },
}

/// Providers with a pod identity webhook
#[derive(Clone, Copy, ValueEnum)]
enum ProviderArg {
    Aws,
    Azure,
}

impl From<ProviderArg> for Provider {
    fn from(arg: ProviderArg) -> Self {
        match arg {
            ProviderArg::Aws => Provider::Aws,
            ProviderArg::Azure => Provider::Azure,
        }
    }
}

async fn create_client(context: Option<String>) -> Result<Client> {
    let options = KubeConfigOptions {
        context,
        ..KubeConfigOptions::default()
    };
    let config = match Config::from_kubeconfig(&options).await {
        Ok(config) => config,
        Err(kubeconfig_err) if options.context.is_none() => Config::incluster()
            .with_context(|| format!("No usable kubeconfig ({kubeconfig_err}) and not running in a cluster"))?,
        Err(e) => return Err(e).context("Failed to load kubeconfig context"),
    };
    Client::try_from(config)
        .context("Failed to create Kubernetes client. Ensure kubeconfig is configured.")
}

#[tokio::main]
async fn main() -> Result<()> {
    let config = OperatorConfig::from_env();
    init_tracing(&config);

    // rustls needs a crypto provider before the first API connection
    init_rustls();

    let cli = Cli::parse();
    let namespace = cli
        .namespace
        .clone()
        .unwrap_or_else(|| config.operator_namespace.clone());

    let client = create_client(cli.context).await?;

    match cli.command {
        Commands::PodIdentity => pod_identity::pod_identity_command(&client, &config, &namespace).await,
        Commands::Render { provider, force } => {
            render::render_command(&client, &config, &namespace, provider.into(), force).await
        }
        Commands::List { all_namespaces } => {
            let scope = (!all_namespaces).then_some(namespace);
            list::list_command(client, scope).await
        }
        Commands::Status { name } => status::status_command(client, &name, &namespace).await,
    }
}
