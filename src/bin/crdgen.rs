//! # CRD Generator
//!
//! Generates the Kubernetes CustomResourceDefinition YAML for
//! `CredentialsRequest` from the Rust type definitions.
//!
//! ## Usage
//!
//! ```bash
//! # Generate CRD YAML
//! cargo run --bin crdgen > manifests/crd/credentialsrequest.yaml
//!
//! # Generate and apply directly
//! cargo run --bin crdgen | kubectl apply -f -
//! ```

use cloud_credential_operator::crd::CredentialsRequest;
use kube::core::CustomResourceExt;

fn main() {
    let crd = CredentialsRequest::crd();

    match serde_yaml::to_string(&crd) {
        Ok(yaml) => {
            println!("# This file is auto-generated by crdgen");
            println!("# DO NOT EDIT THIS FILE MANUALLY");
            println!("# Change the types in src/crd/ and regenerate instead");
            println!("---");
            print!("{yaml}");
        }
        Err(e) => {
            eprintln!("Failed to serialize CRD to YAML: {e}");
            std::process::exit(1);
        }
    }
}
