//! Cloud Credential Operator Library
//!
//! `CredentialsRequest` custom resource types and the pod identity webhook
//! selectors of the cloud credential operator.
//!
//! ## Quick Start
//!
//! ```rust
//! use cloud_credential_operator::prelude::*;
//! ```
//!
//! This brings commonly used types and traits into scope. For more specific
//! imports, use the individual modules.

pub mod config;
pub mod constants;
pub mod crd;
pub mod manifest;
pub mod podidentity;
pub mod prelude;
pub mod runtime;
